//! Flat in-memory table, decoupled from any spreadsheet format.
//!
//! The workbook reader produces these; everything downstream (concatenation,
//! column extraction, WKT parsing) is pure and testable without files.

/// A header row plus data rows of display-string cells.
///
/// `None` means the cell is absent or empty — the two are not distinguished,
/// matching how survey exports treat blank answers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    headers: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
}

impl RawTable {
    #[must_use]
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Option<String>>>) -> Self {
        Self { headers, rows }
    }

    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Cell at (row, column), `None` when empty, absent, or out of range.
    #[must_use]
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row)?.get(column)?.as_deref()
    }

    /// Concatenate tables by header name (schema union).
    ///
    /// The combined header list keeps first-seen order; a column missing
    /// from one table yields `None` cells for that table's rows.
    #[must_use]
    pub fn concat(tables: Vec<RawTable>) -> RawTable {
        let mut headers: Vec<String> = Vec::new();
        for table in &tables {
            for header in &table.headers {
                if !headers.contains(header) {
                    headers.push(header.clone());
                }
            }
        }

        let mut rows = Vec::new();
        for table in tables {
            let mapping: Vec<Option<usize>> =
                headers.iter().map(|h| table.column_index(h)).collect();
            for source_row in &table.rows {
                let row = mapping
                    .iter()
                    .map(|idx| idx.and_then(|i| source_row.get(i).cloned().flatten()))
                    .collect();
                rows.push(row);
            }
        }

        RawTable { headers, rows }
    }
}
