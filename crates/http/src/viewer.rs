//! Dashboard UI - embedded HTML/CSS/JS for the survey comment viewer
//!
//! Serves a single-page app at `/` with:
//! - Scrollable, sortable comment table with multi-row selection
//! - Leaflet map with boundary / comments / selected overlays
//! - Selection changes posted to `/api/selection`, response swapped into
//!   the selected layer wholesale

use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};

/// Embedded HTML for the dashboard UI
pub const DASHBOARD_HTML: &str = include_str!("dashboard.html");

/// Serve the dashboard HTML page
pub async fn serve_dashboard() -> Response {
    (StatusCode::OK, [(header::CONTENT_TYPE, "text/html; charset=utf-8")], Html(DASHBOARD_HTML))
        .into_response()
}
