//! Startup-time data context.
//!
//! The original data files are read exactly once, at startup, into an
//! immutable context that is then shared read-only with every session.
//! Failure to load either file is fatal to the caller.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use geojson::{FeatureCollection, GeoJson};

use crate::{
    boundary_from_feature_collection, comments_from_feature_collection, BoundarySet, CommentSet,
    CoreError, Result,
};

/// Immutable, shared dashboard datasets.
#[derive(Debug, Clone, Default)]
pub struct DataContext {
    pub boundaries: BoundarySet,
    pub comments: CommentSet,
}

impl DataContext {
    /// Load both preprocessed GeoJSON files.
    pub fn load(boundaries_path: &Path, comments_path: &Path) -> Result<Self> {
        let boundaries = boundary_from_feature_collection(read_collection(boundaries_path)?)?;
        let comments = comments_from_feature_collection(read_collection(comments_path)?)?;
        tracing::info!(
            boundaries = boundaries.len(),
            comments = comments.len(),
            "loaded dashboard datasets"
        );
        Ok(Self { boundaries, comments })
    }
}

/// Read a GeoJSON file into a feature collection.
///
/// A bare `Feature` or `Geometry` document is not accepted: the
/// preprocessor always writes feature collections.
pub fn read_collection(path: &Path) -> Result<FeatureCollection> {
    let file = File::open(path).map_err(|e| {
        CoreError::NotFound(format!("cannot open {}: {e}", path.display()))
    })?;
    let geojson = GeoJson::from_reader(BufReader::new(file))?;
    match geojson {
        GeoJson::FeatureCollection(collection) => Ok(collection),
        GeoJson::Feature(_) | GeoJson::Geometry(_) => Err(CoreError::InvalidInput(format!(
            "{} is not a feature collection",
            path.display()
        ))),
    }
}
