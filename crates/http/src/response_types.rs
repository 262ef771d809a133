//! Response types (Serialize)

use serde::Serialize;

#[derive(Debug, Serialize)]
#[non_exhaustive]
pub struct VersionResponse {
    pub version: &'static str,
}

/// Dataset sizes, shown in the dashboard footer.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DatasetStats {
    pub boundaries: usize,
    pub comments: usize,
}
