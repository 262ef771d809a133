use std::path::PathBuf;

use anyhow::Result;

use surveymap_ingest::IngestConfig;

pub(crate) fn run(
    workbooks: Vec<PathBuf>,
    sheet: String,
    boundary: PathBuf,
    boundary_proj: String,
    out_dir: PathBuf,
) -> Result<()> {
    let config = IngestConfig {
        workbooks,
        sheet,
        boundary_shapefile: boundary,
        boundary_proj,
        out_dir,
    };
    let summary = surveymap_ingest::run(&config)?;
    println!("{}", serde_json::to_string_pretty(&summary_json(&summary))?);
    Ok(())
}

fn summary_json(summary: &surveymap_ingest::RunSummary) -> serde_json::Value {
    serde_json::json!({
        "rows_read": summary.rows_read,
        "rows_dropped": summary.rows_dropped,
        "comments_written": summary.comments_written,
        "boundary_features": summary.boundary_features,
    })
}
