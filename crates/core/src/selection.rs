//! Table row selection.
//!
//! The selection set is owned by the browser session; the server only ever
//! sees it as a list of row positions and maps it to a feature subset with
//! a pure function (`CommentSet::select`). Nothing here touches I/O or
//! rendering, so the mapping is testable on its own.

use serde::{Deserialize, Serialize};

use crate::MAX_SELECTION_INDICES;

/// An ordered set of table row positions.
///
/// Order is first-seen, duplicates collapse. The set is derived UI state:
/// recomputed on every selection event, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSet {
    indices: Vec<usize>,
}

impl SelectionSet {
    /// Normalize a raw index list: keep first occurrences, drop duplicates,
    /// cap the total at [`MAX_SELECTION_INDICES`].
    #[must_use]
    pub fn from_indices<I: IntoIterator<Item = usize>>(indices: I) -> Self {
        let mut seen = std::collections::HashSet::new();
        let indices = indices
            .into_iter()
            .filter(|i| seen.insert(*i))
            .take(MAX_SELECTION_INDICES)
            .collect();
        Self { indices }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}
