use geo_types::Geometry;

use crate::SelectionSet;

/// A single survey comment tied to a place on the map.
///
/// `time` is kept as a display string: the dashboard never does date math,
/// it only shows the value, and the preprocessor has already normalized it.
#[derive(Debug, Clone, PartialEq)]
pub struct CommentRecord {
    /// Response timestamp, already formatted for display
    pub time: String,
    /// Free-text comment, may be empty
    pub comment: String,
    /// Point or polygon in WGS84 degrees
    pub geometry: Geometry<f64>,
}

/// Ordered, immutable collection of comment records.
///
/// Row positions are stable for the lifetime of a dashboard session; the
/// table and the map both address records by position.
#[derive(Debug, Clone, Default)]
pub struct CommentSet {
    records: Vec<CommentRecord>,
}

impl CommentSet {
    #[must_use]
    pub fn new(records: Vec<CommentRecord>) -> Self {
        Self { records }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&CommentRecord> {
        self.records.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CommentRecord> {
        self.records.iter()
    }

    /// Records at the selected row positions, in selection order.
    ///
    /// Out-of-range indices are silently ignored: the table may have
    /// re-rendered with fewer rows than a stale selection refers to, and
    /// that must never panic or error.
    #[must_use]
    pub fn select(&self, selection: &SelectionSet) -> Vec<&CommentRecord> {
        selection.indices().iter().filter_map(|&i| self.records.get(i)).collect()
    }
}

impl From<Vec<CommentRecord>> for CommentSet {
    fn from(records: Vec<CommentRecord>) -> Self {
        Self::new(records)
    }
}
