//! Selection filtering.
//!
//! The dashboard posts the table's selected row positions on every
//! selection change; the response is the derived feature subset the page
//! swaps into the "selected" map layer wholesale. The mapping itself is
//! the pure `selected_feature_collection` in the core crate — this handler
//! only carries it over HTTP.

use std::sync::Arc;

use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;

use surveymap_core::selected_feature_collection;

use crate::query_types::SelectionRequest;
use crate::AppState;

pub async fn select(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SelectionRequest>,
) -> Response {
    if request.truncated() {
        tracing::warn!(
            requested = request.rows.len(),
            "selection request exceeded the index cap, excess ignored"
        );
    }
    let selection = request.selection();
    let collection = selected_feature_collection(&state.context.comments, &selection);
    tracing::debug!(selected = collection.features.len(), "selection recomputed");
    let body = geojson::GeoJson::FeatureCollection(collection).to_string();
    ([(header::CONTENT_TYPE, "application/geo+json")], body).into_response()
}

#[cfg(test)]
mod tests {
    use geo_types::{Geometry, Point};
    use geojson::GeoJson;

    use surveymap_core::{
        selected_feature_collection, CommentRecord, CommentSet, SelectionSet,
    };

    fn comments() -> CommentSet {
        CommentSet::new(
            (0..6)
                .map(|i| CommentRecord {
                    time: format!("2025-01-03 10:0{i}:00"),
                    comment: format!("c{i}"),
                    geometry: Geometry::Point(Point::new(f64::from(i), f64::from(i))),
                })
                .collect(),
        )
    }

    #[test]
    fn selection_response_serializes_as_a_feature_collection() {
        let collection =
            selected_feature_collection(&comments(), &SelectionSet::from_indices([2, 5]));
        let body = GeoJson::FeatureCollection(collection).to_string();
        let reparsed: GeoJson = body.parse().unwrap();
        let GeoJson::FeatureCollection(fc) = reparsed else {
            panic!("expected a feature collection");
        };
        assert_eq!(fc.features.len(), 2);
    }
}
