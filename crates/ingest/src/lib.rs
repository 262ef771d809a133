//! Preprocessing pipeline for surveymap.
//!
//! Reads raw survey export workbooks and a study-area boundary shapefile,
//! normalizes and joins them, and writes the two GeoJSON files the
//! dashboard consumes. This is a one-shot batch job: any missing input,
//! unknown sheet, or unparsable geometry aborts the whole run and nothing
//! is written.

mod boundary;
mod comments;
mod error;
mod pipeline;
mod table;
mod workbook;
mod writer;

pub use boundary::*;
pub use comments::*;
pub use error::*;
pub use pipeline::*;
pub use table::*;
pub use workbook::*;
pub use writer::*;
