//! Survey rows → comment records.
//!
//! Rows with an empty geometry cell are dropped (and counted) — that is
//! the one intentional filter in the pipeline. A geometry cell that is
//! present but not valid WKT aborts the run instead: partial recovery
//! would silently misreport what respondents drew.

use geo_types::Geometry;
use wkt::TryFromWkt;

use surveymap_core::{CommentRecord, CommentSet, COMMENT_COLUMN, TIME_COLUMN, WKT_COLUMN};

use crate::{IngestError, RawTable, Result};

/// How the comment extraction went, for the run summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommentStats {
    /// Data rows in the combined table
    pub rows_in: usize,
    /// Rows dropped for having no geometry cell
    pub rows_dropped: usize,
}

/// Extract `time`, `comment`, and parsed WKT geometry from the combined
/// survey table. Only these three fields survive.
pub fn extract_comments(table: &RawTable) -> Result<(CommentSet, CommentStats)> {
    let wkt_col = require_column(table, WKT_COLUMN)?;
    let time_col = require_column(table, TIME_COLUMN)?;
    let comment_col = require_column(table, COMMENT_COLUMN)?;

    let mut records = Vec::new();
    let mut dropped = 0_usize;
    for row in 0..table.row_count() {
        let Some(wkt_text) = table.cell(row, wkt_col) else {
            dropped += 1;
            continue;
        };
        let geometry = parse_wkt(row, wkt_text)?;
        records.push(CommentRecord {
            time: table.cell(row, time_col).unwrap_or_default().to_owned(),
            comment: table.cell(row, comment_col).unwrap_or_default().to_owned(),
            geometry,
        });
    }

    let stats = CommentStats { rows_in: table.row_count(), rows_dropped: dropped };
    Ok((CommentSet::new(records), stats))
}

fn require_column(table: &RawTable, name: &str) -> Result<usize> {
    table.column_index(name).ok_or_else(|| IngestError::MissingColumn(name.to_owned()))
}

fn parse_wkt(row: usize, text: &str) -> Result<Geometry<f64>> {
    Geometry::try_from_wkt_str(text)
        .map_err(|e| IngestError::WktParse { row, message: format!("{e}") })
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::Point;

    fn cell(s: &str) -> Option<String> {
        Some(s.to_owned())
    }

    fn survey_headers() -> Vec<String> {
        vec![WKT_COLUMN.into(), TIME_COLUMN.into(), COMMENT_COLUMN.into()]
    }

    fn survey_row(wkt: Option<&str>, time: &str, comment: &str) -> Vec<Option<String>> {
        vec![wkt.map(str::to_owned), cell(time), cell(comment)]
    }

    #[test]
    fn rows_without_geometry_are_dropped_and_counted() {
        let table = RawTable::new(
            survey_headers(),
            vec![
                survey_row(Some("POINT (-84.4 33.7)"), "2025-01-03 10:00:00", "keep me"),
                survey_row(None, "2025-01-03 10:05:00", "no geometry"),
                survey_row(Some("POINT (-84.5 33.8)"), "2025-01-03 10:10:00", "keep me too"),
            ],
        );

        let (comments, stats) = extract_comments(&table).unwrap();
        assert_eq!(stats.rows_in, 3);
        assert_eq!(stats.rows_dropped, 1);
        assert_eq!(comments.len(), stats.rows_in - stats.rows_dropped);
        assert_eq!(comments.get(0).unwrap().comment, "keep me");
        assert_eq!(
            comments.get(0).unwrap().geometry,
            Geometry::Point(Point::new(-84.4, 33.7))
        );
    }

    #[test]
    fn invalid_wkt_aborts_the_run_with_the_row_position() {
        let table = RawTable::new(
            survey_headers(),
            vec![
                survey_row(Some("POINT (-84.4 33.7)"), "t", "ok"),
                survey_row(Some("POLYGON (this is not wkt"), "t", "bad"),
            ],
        );

        let err = extract_comments(&table).unwrap_err();
        assert!(matches!(err, IngestError::WktParse { row: 1, .. }), "got: {err}");
    }

    #[test]
    fn missing_fixed_column_is_fatal() {
        let table = RawTable::new(
            vec![WKT_COLUMN.into(), TIME_COLUMN.into()],
            vec![vec![cell("POINT (0 0)"), cell("t")]],
        );
        let err = extract_comments(&table).unwrap_err();
        assert!(matches!(err, IngestError::MissingColumn(name) if name == COMMENT_COLUMN));
    }

    #[test]
    fn concatenated_workbooks_keep_every_valid_row() {
        let make = |n: usize, offset: f64| {
            RawTable::new(
                survey_headers(),
                (0..n)
                    .map(|i| {
                        let x = offset + i as f64 * 0.001;
                        survey_row(
                            Some(&format!("POINT ({x} 33.7)")),
                            "2025-01-03 10:00:00",
                            "c",
                        )
                    })
                    .collect(),
            )
        };

        let combined = RawTable::concat(vec![make(10, -84.4), make(15, -84.3)]);
        let (comments, stats) = extract_comments(&combined).unwrap();
        assert_eq!(stats.rows_in, 25);
        assert_eq!(stats.rows_dropped, 0);
        assert_eq!(comments.len(), 25);
    }

    #[test]
    fn missing_time_or_comment_cells_become_empty_strings() {
        let table = RawTable::new(
            survey_headers(),
            vec![vec![cell("POINT (1 2)"), None, None]],
        );
        let (comments, _) = extract_comments(&table).unwrap();
        let record = comments.get(0).unwrap();
        assert_eq!(record.time, "");
        assert_eq!(record.comment, "");
    }
}
