//! Pipeline orchestration.
//!
//! Both datasets are fully built in memory before either file is written,
//! so a failure anywhere leaves no partial output on disk.

use std::path::PathBuf;

use surveymap_core::{
    boundary_to_feature_collection, comments_to_feature_collection, BOUNDARY_FILE, COMMENTS_FILE,
    SURVEY_SHEET_NAME,
};

use crate::{
    extract_comments, load_boundary, read_survey_sheet, write_collection, RawTable, Result,
};

/// Inputs and destinations for one preprocessing run.
#[derive(Debug, Clone)]
pub struct IngestConfig {
    /// Survey export workbooks, concatenated in the given order
    pub workbooks: Vec<PathBuf>,
    /// Sheet name shared by every workbook
    pub sheet: String,
    /// Boundary shapefile (`.shp`)
    pub boundary_shapefile: PathBuf,
    /// Proj string of the boundary's source CRS; empty means already WGS84
    pub boundary_proj: String,
    /// Directory the two GeoJSON files are written into
    pub out_dir: PathBuf,
}

impl IngestConfig {
    #[must_use]
    pub fn new(workbooks: Vec<PathBuf>, boundary_shapefile: PathBuf, out_dir: PathBuf) -> Self {
        Self {
            workbooks,
            sheet: SURVEY_SHEET_NAME.to_owned(),
            boundary_shapefile,
            boundary_proj: String::new(),
            out_dir,
        }
    }

    #[must_use]
    pub fn boundary_path(&self) -> PathBuf {
        self.out_dir.join(BOUNDARY_FILE)
    }

    #[must_use]
    pub fn comments_path(&self) -> PathBuf {
        self.out_dir.join(COMMENTS_FILE)
    }
}

/// What one run read, dropped, and wrote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub rows_read: usize,
    pub rows_dropped: usize,
    pub comments_written: usize,
    pub boundary_features: usize,
}

/// Run the whole pipeline: read, join, parse, reproject, write.
pub fn run(config: &IngestConfig) -> Result<RunSummary> {
    let tables = config
        .workbooks
        .iter()
        .map(|path| {
            tracing::info!(workbook = %path.display(), sheet = %config.sheet, "reading survey export");
            read_survey_sheet(path, &config.sheet)
        })
        .collect::<Result<Vec<_>>>()?;
    let combined = RawTable::concat(tables);

    let (comments, stats) = extract_comments(&combined)?;
    let boundaries = load_boundary(&config.boundary_shapefile, &config.boundary_proj)?;

    // Both datasets exist now; only then touch the filesystem.
    write_outputs(config, &comments, &boundaries)?;

    let summary = RunSummary {
        rows_read: stats.rows_in,
        rows_dropped: stats.rows_dropped,
        comments_written: comments.len(),
        boundary_features: boundaries.len(),
    };
    tracing::info!(
        rows_read = summary.rows_read,
        rows_dropped = summary.rows_dropped,
        comments_written = summary.comments_written,
        boundary_features = summary.boundary_features,
        "preprocessing complete"
    );
    Ok(summary)
}

fn write_outputs(
    config: &IngestConfig,
    comments: &surveymap_core::CommentSet,
    boundaries: &surveymap_core::BoundarySet,
) -> Result<()> {
    std::fs::create_dir_all(&config.out_dir)?;
    write_collection(&config.boundary_path(), boundary_to_feature_collection(boundaries))?;
    write_collection(&config.comments_path(), comments_to_feature_collection(comments))?;
    Ok(())
}
