use std::io;
use std::result::Result as StdResult;

use thiserror::Error;

/// Errors that can occur in surveymap
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("GeoJSON error: {0}")]
    GeoJson(String),

    #[error("Feature {index} has no geometry")]
    MissingGeometry { index: usize },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Coordinate out of WGS84 range: ({lon}, {lat})")]
    CoordinateOutOfRange { lon: f64, lat: f64 },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl From<geojson::Error> for CoreError {
    fn from(err: geojson::Error) -> Self {
        Self::GeoJson(err.to_string())
    }
}

pub type Result<T> = StdResult<T, CoreError>;
