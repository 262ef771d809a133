//! Request types (Deserialize)

use serde::Deserialize;

use surveymap_core::{SelectionSet, MAX_SELECTION_INDICES};

/// Body of `POST /api/selection`: the table's currently selected row
/// positions, in any order, duplicates allowed.
#[derive(Debug, Deserialize)]
pub struct SelectionRequest {
    #[serde(default)]
    pub rows: Vec<usize>,
}

impl SelectionRequest {
    /// Normalized selection set; capped to prevent unbounded bodies.
    #[must_use]
    pub fn selection(&self) -> SelectionSet {
        SelectionSet::from_indices(self.rows.iter().copied())
    }

    /// Whether the raw body exceeded the cap (logged, not an error —
    /// the excess is simply ignored).
    #[must_use]
    pub fn truncated(&self) -> bool {
        self.rows.len() > MAX_SELECTION_INDICES
    }
}
