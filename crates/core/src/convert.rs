//! GeoJSON ⇄ domain conversions.
//!
//! GeoJSON (RFC 7946) fixes the coordinate reference system to geographic
//! WGS84 degrees, which is exactly the CRS the preprocessor emits, so no
//! CRS metadata is carried here. Conversions are pure; file I/O lives in
//! the callers.

use geo::CoordsIter;
use geo_types::Geometry;
use geojson::feature::Id;
use geojson::{Feature, FeatureCollection, JsonObject, JsonValue};

use crate::{
    BoundarySet, CommentRecord, CommentSet, COMMENT_PROPERTY, CoreError, Result, SelectionSet,
    TIME_PROPERTY,
};

/// Longitude range accepted for WGS84 coordinates.
pub const WGS84_LON_RANGE: (f64, f64) = (-180.0, 180.0);

/// Latitude range accepted for WGS84 coordinates.
pub const WGS84_LAT_RANGE: (f64, f64) = (-90.0, 90.0);

/// Build the comment feature collection: one feature per record, with
/// `time` and `comment` properties.
#[must_use]
pub fn comments_to_feature_collection(comments: &CommentSet) -> FeatureCollection {
    let features =
        comments.iter().enumerate().map(|(row, record)| comment_feature(row, record)).collect();
    FeatureCollection { bbox: None, features, foreign_members: None }
}

/// The pure `(full dataset, selection set) → derived subset` mapping the
/// dashboard's selected layer is rebuilt from on every selection event.
///
/// Feature ids are the original row positions, so the subset stays
/// addressable even though it is a fresh collection. Out-of-range rows are
/// skipped by `CommentSet::get`.
#[must_use]
pub fn selected_feature_collection(
    comments: &CommentSet,
    selection: &SelectionSet,
) -> FeatureCollection {
    let features = selection
        .indices()
        .iter()
        .filter_map(|&row| comments.get(row).map(|record| comment_feature(row, record)))
        .collect();
    FeatureCollection { bbox: None, features, foreign_members: None }
}

fn comment_feature(row: usize, record: &CommentRecord) -> Feature {
    let mut properties = JsonObject::new();
    properties.insert(TIME_PROPERTY.to_owned(), JsonValue::String(record.time.clone()));
    properties.insert(COMMENT_PROPERTY.to_owned(), JsonValue::String(record.comment.clone()));
    Feature {
        bbox: None,
        geometry: Some(geojson::Geometry::new(geojson::Value::from(&record.geometry))),
        id: Some(Id::Number(row.into())),
        properties: Some(properties),
        foreign_members: None,
    }
}

/// Rebuild a [`CommentSet`] from a feature collection.
///
/// Every feature must carry a geometry — the preprocessor guarantees that,
/// and a violation means the file was not produced by it. Timestamp-typed
/// property values are converted to display text here.
pub fn comments_from_feature_collection(collection: FeatureCollection) -> Result<CommentSet> {
    let records = collection
        .features
        .into_iter()
        .enumerate()
        .map(|(index, feature)| {
            let geometry = decode_geometry(index, feature.geometry)?;
            let properties = feature.properties.unwrap_or_default();
            Ok(CommentRecord {
                time: property_display_string(properties.get(TIME_PROPERTY)),
                comment: property_display_string(properties.get(COMMENT_PROPERTY)),
                geometry,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(CommentSet::new(records))
}

/// Build the boundary feature collection: geometry plus implicit id only.
#[must_use]
pub fn boundary_to_feature_collection(boundaries: &BoundarySet) -> FeatureCollection {
    let features = boundaries
        .iter()
        .enumerate()
        .map(|(index, geometry)| Feature {
            bbox: None,
            geometry: Some(geojson::Geometry::new(geojson::Value::from(geometry))),
            id: Some(Id::Number(index.into())),
            properties: None,
            foreign_members: None,
        })
        .collect();
    FeatureCollection { bbox: None, features, foreign_members: None }
}

/// Rebuild a [`BoundarySet`] from a feature collection.
pub fn boundary_from_feature_collection(collection: FeatureCollection) -> Result<BoundarySet> {
    let geometries = collection
        .features
        .into_iter()
        .enumerate()
        .map(|(index, feature)| decode_geometry(index, feature.geometry))
        .collect::<Result<Vec<_>>>()?;
    Ok(BoundarySet::new(geometries))
}

fn decode_geometry(index: usize, geometry: Option<geojson::Geometry>) -> Result<Geometry<f64>> {
    let geometry = geometry.ok_or(CoreError::MissingGeometry { index })?;
    Geometry::<f64>::try_from(geometry.value).map_err(|e| CoreError::GeoJson(e.to_string()))
}

/// Render a GeoJSON property value as display text.
///
/// Missing and null become the empty string; everything else is shown the
/// way JSON writes it, minus quoting for strings.
#[must_use]
pub fn property_display_string(value: Option<&JsonValue>) -> String {
    match value {
        None | Some(JsonValue::Null) => String::new(),
        Some(JsonValue::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Check every coordinate of a geometry against the WGS84 valid ranges.
pub fn validate_wgs84(geometry: &Geometry<f64>) -> Result<()> {
    for coord in geometry.coords_iter() {
        let lon_ok = coord.x >= WGS84_LON_RANGE.0 && coord.x <= WGS84_LON_RANGE.1;
        let lat_ok = coord.y >= WGS84_LAT_RANGE.0 && coord.y <= WGS84_LAT_RANGE.1;
        if !lon_ok || !lat_ok {
            return Err(CoreError::CoordinateOutOfRange { lon: coord.x, lat: coord.y });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use geo_types::{Geometry, Point};
    use wkt::TryFromWkt;

    use super::*;

    fn sample_comments() -> CommentSet {
        let polygon = Geometry::try_from_wkt_str(
            "POLYGON ((-84.45 33.70, -84.40 33.70, -84.40 33.76, -84.45 33.76, -84.45 33.70))",
        )
        .unwrap();
        CommentSet::new(vec![
            CommentRecord {
                time: "2025-01-03 14:22:09".to_owned(),
                comment: "More lighting here".to_owned(),
                geometry: Geometry::Point(Point::new(-84.4229, 33.7582)),
            },
            CommentRecord {
                time: "2025-02-10 09:01:44".to_owned(),
                comment: String::new(),
                geometry: polygon,
            },
        ])
    }

    fn coords_close(a: &Geometry<f64>, b: &Geometry<f64>) -> bool {
        let av: Vec<_> = a.coords_iter().collect();
        let bv: Vec<_> = b.coords_iter().collect();
        av.len() == bv.len()
            && av
                .iter()
                .zip(&bv)
                .all(|(p, q)| (p.x - q.x).abs() < 1e-9 && (p.y - q.y).abs() < 1e-9)
    }

    #[test]
    fn comments_round_trip_through_geojson() {
        let original = sample_comments();
        let collection = comments_to_feature_collection(&original);
        let serialized = geojson::GeoJson::FeatureCollection(collection).to_string();
        let reparsed: geojson::GeoJson = serialized.parse().unwrap();
        let reparsed = FeatureCollection::try_from(reparsed).unwrap();
        let reloaded = comments_from_feature_collection(reparsed).unwrap();

        assert_eq!(reloaded.len(), original.len());
        for (a, b) in original.iter().zip(reloaded.iter()) {
            assert_eq!(a.time, b.time);
            assert_eq!(a.comment, b.comment);
            assert!(coords_close(&a.geometry, &b.geometry), "geometry drifted in round trip");
        }
    }

    #[test]
    fn feature_without_geometry_is_rejected() {
        let mut collection = comments_to_feature_collection(&sample_comments());
        collection.features[1].geometry = None;
        let err = comments_from_feature_collection(collection).unwrap_err();
        assert!(matches!(err, CoreError::MissingGeometry { index: 1 }));
    }

    #[test]
    fn numeric_time_property_becomes_display_text() {
        let mut collection = comments_to_feature_collection(&sample_comments());
        if let Some(props) = collection.features[0].properties.as_mut() {
            props.insert(TIME_PROPERTY.to_owned(), JsonValue::from(1_735_900_000_i64));
        }
        let reloaded = comments_from_feature_collection(collection).unwrap();
        assert_eq!(reloaded.get(0).unwrap().time, "1735900000");
    }

    #[test]
    fn selected_collection_mirrors_the_selection_set() {
        let comments = sample_comments();
        let collection =
            selected_feature_collection(&comments, &SelectionSet::from_indices([1, 7]));
        // Row 7 does not exist; only row 1 survives, keeping its original id.
        assert_eq!(collection.features.len(), 1);
        assert_eq!(collection.features[0].id, Some(Id::Number(1_usize.into())));

        let empty = selected_feature_collection(&comments, &SelectionSet::empty());
        assert!(empty.features.is_empty());
    }

    #[test]
    fn wgs84_validation_accepts_study_area_and_rejects_projected_coords() {
        let ok = Geometry::Point(Point::new(-84.4229, 33.7582));
        assert!(validate_wgs84(&ok).is_ok());

        // A state-plane coordinate that was never reprojected.
        let bad = Geometry::Point(Point::new(2_227_925.0, 1_363_133.0));
        assert!(matches!(
            validate_wgs84(&bad),
            Err(CoreError::CoordinateOutOfRange { .. })
        ));
    }
}
