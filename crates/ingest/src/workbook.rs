//! XLSX reading via calamine.
//!
//! This is the thin I/O rim around [`RawTable`]: open the workbook, find
//! the fixed survey sheet, render every cell to a display string. Excel
//! datetime cells become `YYYY-MM-DD HH:MM:SS`, matching what the rest of
//! the pipeline treats as the canonical time format.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};

use crate::{IngestError, RawTable, Result};

/// Read one workbook's survey sheet into a [`RawTable`].
///
/// The first row is taken as headers. A missing file or missing sheet is a
/// fatal error.
pub fn read_survey_sheet(path: &Path, sheet: &str) -> Result<RawTable> {
    if !path.is_file() {
        return Err(IngestError::MissingInput(path.to_path_buf()));
    }

    let mut workbook = open_workbook_auto(path).map_err(|e| IngestError::Workbook {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    if !workbook.sheet_names().iter().any(|name| name == sheet) {
        return Err(IngestError::MissingSheet {
            sheet: sheet.to_owned(),
            path: path.to_path_buf(),
        });
    }

    let range = workbook.worksheet_range(sheet).map_err(|e| IngestError::Workbook {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut rows = range.rows();
    let headers = rows
        .next()
        .map(|row| row.iter().map(|c| cell_display(c).unwrap_or_default()).collect())
        .unwrap_or_default();
    let data = rows.map(|row| row.iter().map(cell_display).collect()).collect();

    let table = RawTable::new(headers, data);
    tracing::debug!(path = %path.display(), rows = table.row_count(), "read survey sheet");
    Ok(table)
}

/// Render one cell as a display string; `None` for empty/blank cells.
fn cell_display(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
        },
        Data::Float(f) => {
            // Whole floats print without the trailing ".0" Excel never shows.
            if f.fract() == 0.0 && f.abs() < 1e15 {
                Some(format!("{}", *f as i64))
            } else {
                Some(f.to_string())
            }
        },
        Data::Int(i) => Some(i.to_string()),
        Data::Bool(b) => Some(b.to_string()),
        Data::DateTime(dt) => Some(
            dt.as_datetime()
                .map(|d| d.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_else(|| dt.as_f64().to_string()),
        ),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Some(s.clone()),
    }
}
