//! Shared constants for surveymap.
//!
//! Centralizes the fixed presentation and ingest parameters so they are not
//! duplicated across crates.

/// Default map center, latitude (the dashboard opens over the study area).
pub const DEFAULT_MAP_CENTER_LAT: f64 = 33.7582;

/// Default map center, longitude.
pub const DEFAULT_MAP_CENTER_LON: f64 = -84.4229;

/// Default map zoom level.
pub const DEFAULT_MAP_ZOOM: u8 = 11;

/// Maximum number of row indices accepted in one selection request
/// (DoS protection — the table never has remotely this many rows).
pub const MAX_SELECTION_INDICES: usize = 10_000;

/// Sheet name shared by every survey export workbook.
pub const SURVEY_SHEET_NAME: &str = "Click on map to draw polygon an";

/// Column holding the well-known-text geometry in the survey exports.
pub const WKT_COLUMN: &str = "WKT";

/// Column holding the response timestamp in the survey exports.
pub const TIME_COLUMN: &str = "First Active Time";

/// Column holding the free-text comment in the survey exports.
pub const COMMENT_COLUMN: &str = "Add place-specific comment below:";

/// Feature property carrying the display timestamp.
pub const TIME_PROPERTY: &str = "time";

/// Feature property carrying the comment text.
pub const COMMENT_PROPERTY: &str = "comment";

/// Default output file name for the study-area boundary collection.
pub const BOUNDARY_FILE: &str = "sa.geojson";

/// Default output file name for the comment collection.
pub const COMMENTS_FILE: &str = "comments.geojson";

/// Default port for the dashboard server.
pub const DEFAULT_PORT: u16 = 8787;
