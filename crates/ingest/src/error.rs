use std::path::PathBuf;
use std::result::Result as StdResult;

use thiserror::Error;

/// Typed error for the preprocessing pipeline.
///
/// Every variant is fatal to the run: this is a batch job with no
/// row-level recovery (dropping empty-geometry rows is a filter step, not
/// an error path).
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Input file not found: {0}")]
    MissingInput(PathBuf),

    #[error("Workbook error in {path}: {message}")]
    Workbook { path: PathBuf, message: String },

    #[error("Sheet '{sheet}' not found in {path}")]
    MissingSheet { sheet: String, path: PathBuf },

    #[error("Required column '{0}' not found in survey export")]
    MissingColumn(String),

    #[error("Row {row}: invalid WKT geometry: {message}")]
    WktParse { row: usize, message: String },

    #[error("Shapefile error: {0}")]
    Shapefile(#[from] shapefile::Error),

    #[error("Unsupported shape type in boundary file: {0}")]
    UnsupportedShape(String),

    #[error("Projection error: {0}")]
    Projection(String),

    #[error("Core error: {0}")]
    Core(#[from] surveymap_core::CoreError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = StdResult<T, IngestError>;
