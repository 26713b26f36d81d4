//! Application constants for the WTMS merger
//!
//! This module contains the protocol markers, sentinel values, sheet layout
//! conventions, and default values used throughout the merge pipeline.

// =============================================================================
// KMA API Protocol
// =============================================================================

/// Surface observation endpoint on the KMA API hub
pub const KMA_API_BASE_URL: &str = "https://apihub.kma.go.kr/api/typ01/url/kma_sfctm3.php";

/// Marker preceding the data payload in a KMA response
pub const RESPONSE_START_MARKER: &str = "#START7777";

/// Marker following the data payload in a KMA response
pub const RESPONSE_END_MARKER: &str = "#7777END";

/// Responses shorter than this are treated as empty/garbage
pub const MIN_RESPONSE_LEN: usize = 100;

/// Payload lines at or below this length are discarded as implausible
pub const MIN_DATA_LINE_LEN: usize = 10;

/// Minimum whitespace-separated fields for a complete observation line
pub const MIN_FIELD_COUNT: usize = 12;

/// Missing-value sentinel as emitted by the provider, in every formatting
/// variant it uses (exact string comparison, never numeric)
pub const MISSING_SENTINELS: &[&str] = &["-9", "-9.0", "-9.00"];

/// Timestamp format of field 0 in an observation line
pub const KMA_TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M";

/// Maximum span of a single provider request, in days (inclusive window)
pub const MAX_WINDOW_DAYS: i64 = 31;

/// HTTP request timeout in seconds
pub const HTTP_TIMEOUT_SECS: u64 = 30;

/// Field positions of the five weather channels in an observation line
pub mod fields {
    pub const TEMPERATURE: usize = 11;
    pub const HUMIDITY: usize = 13;
    pub const PRECIPITATION: usize = 15;
    pub const SUNSHINE: usize = 33;
    pub const IRRADIANCE: usize = 34;
}

// =============================================================================
// Telemetry Sheet Layout
// =============================================================================

/// Row holding the free-text sheet title
pub const TITLE_ROW: usize = 0;

/// Row holding parameter names (optionally with a parenthesized unit suffix)
pub const PRIMARY_HEADER_ROW: usize = 1;

/// Row holding the field-kind labels under each parameter
pub const SECONDARY_HEADER_ROW: usize = 2;

/// First row of measurement data
pub const FIRST_DATA_ROW: usize = 3;

/// Fixed column positions preceding the parameter column groups
pub const OUTLET_COL: usize = 0;
pub const DATE_COL: usize = 1;
pub const TIME_COL: usize = 2;

/// Hour-unit suffix appended to time cells (e.g. "0시" for midnight)
pub const HOUR_SUFFIX: &str = "시";

/// Secondary-header labels for the five recognized field kinds
pub mod field_labels {
    pub const STANDARD: &str = "기준치";
    pub const VALUE: &str = "측정치";
    pub const STATUS: &str = "상태정보";
    pub const REPLACEMENT: &str = "대체값";
    pub const REPLACEMENT_CODE: &str = "대체코드";
}

/// Fallback title when the title cell is blank
pub const DEFAULT_SHEET_TITLE: &str = "하수처리장 측정데이터";

// =============================================================================
// Timestamp Formats
// =============================================================================

/// Format of the composed `"<date> <hour>:00"` record timestamp
pub const RECORD_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Hour-truncated key retained on observations and merged rows
pub const HOUR_KEY_FORMAT: &str = "%Y-%m-%d %H:00";

// =============================================================================
// Defaults
// =============================================================================

/// Default weather station (Gwangju) when none is specified
pub const DEFAULT_STATION_ID: u32 = 156;
