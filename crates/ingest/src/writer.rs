//! GeoJSON file output.

use std::fs;
use std::path::Path;

use geojson::{FeatureCollection, GeoJson};

use crate::Result;

/// Write a feature collection to `path` as a single-line GeoJSON document.
///
/// Serialization goes through `serde_json`, whose map ordering is stable,
/// so identical inputs produce byte-identical files across runs.
pub fn write_collection(path: &Path, collection: FeatureCollection) -> Result<()> {
    let document = GeoJson::FeatureCollection(collection).to_string();
    fs::write(path, document)?;
    Ok(())
}
