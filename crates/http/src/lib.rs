//! HTTP server for the surveymap dashboard.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short closure params are idiomatic")]
#![allow(clippy::single_call_fn, reason = "Helper functions improve readability")]
#![allow(clippy::exhaustive_structs, reason = "HTTP types are stable")]

pub mod api_error;
mod handlers;
mod query_types;
mod response_types;
mod viewer;

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Json, Router,
};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use surveymap_core::{
    boundary_to_feature_collection, comments_to_feature_collection, DataContext,
};

pub use query_types::SelectionRequest;
pub use response_types::{DatasetStats, VersionResponse};

/// Shared application state for all HTTP handlers.
///
/// Holds the immutable data context loaded at startup plus the two feature
/// collections pre-serialized once — the datasets never change for the
/// lifetime of the process, so there is no point re-encoding them per
/// request.
pub struct AppState {
    /// Read-only datasets shared by every session
    pub context: DataContext,
    /// `sa.geojson` contents, serialized once
    pub boundaries_geojson: String,
    /// `comments.geojson` contents, serialized once
    pub comments_geojson: String,
    /// Directory served under `/static` (branding assets)
    pub static_dir: PathBuf,
}

impl AppState {
    #[must_use]
    pub fn new(context: DataContext, static_dir: PathBuf) -> Self {
        let boundaries_geojson =
            geojson::GeoJson::FeatureCollection(boundary_to_feature_collection(&context.boundaries))
                .to_string();
        let comments_geojson =
            geojson::GeoJson::FeatureCollection(comments_to_feature_collection(&context.comments))
                .to_string();
        Self { context, boundaries_geojson, comments_geojson, static_dir }
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    let static_dir = state.static_dir.clone();
    Router::new()
        .route("/", get(viewer::serve_dashboard))
        .route("/health", get(health))
        .route("/api/version", get(version))
        .route("/api/stats", get(handlers::features::stats))
        .route("/api/boundaries", get(handlers::features::boundaries))
        .route("/api/comments", get(handlers::features::comments))
        .route("/api/selection", post(handlers::selection::select))
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(not_found)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn not_found(uri: axum::http::Uri) -> api_error::ApiError {
    api_error::ApiError::NotFound(format!("no route for {uri}"))
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}
