//! Read-only dataset handlers.
//!
//! The feature collections are immutable and pre-serialized at startup;
//! these handlers only attach the GeoJSON media type.

use std::sync::Arc;

use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::response_types::DatasetStats;
use crate::AppState;

const GEOJSON_CONTENT_TYPE: &str = "application/geo+json";

pub async fn boundaries(State(state): State<Arc<AppState>>) -> Response {
    geojson_response(state.boundaries_geojson.clone())
}

pub async fn comments(State(state): State<Arc<AppState>>) -> Response {
    geojson_response(state.comments_geojson.clone())
}

pub async fn stats(State(state): State<Arc<AppState>>) -> Json<DatasetStats> {
    Json(DatasetStats {
        boundaries: state.context.boundaries.len(),
        comments: state.context.comments.len(),
    })
}

fn geojson_response(body: String) -> Response {
    ([(header::CONTENT_TYPE, GEOJSON_CONTENT_TYPE)], body).into_response()
}
