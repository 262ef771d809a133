//! Core types and pure logic for surveymap
//!
//! This crate contains domain types shared across all other crates: the
//! comment and boundary feature sets, GeoJSON conversions, and the
//! selection-filtering logic the dashboard relies on. Nothing in here
//! renders or serves anything.

mod boundary;
mod comment;
mod constants;
mod context;
mod convert;
mod env_config;
mod error;
mod selection;

pub use boundary::*;
pub use comment::*;
pub use constants::*;
pub use context::*;
pub use convert::*;
pub use env_config::*;
pub use error::*;
pub use selection::*;
