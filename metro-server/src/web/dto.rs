//! Query parameters accepted by the web endpoints.
//!
//! Parameter names follow WMATA's own casing so the client app can use the
//! same names for both APIs. Both are optional at this level; a missing
//! value is reported by validation rather than by the extractor.

use serde::Deserialize;

/// Query for line-scoped endpoints (`/station-list`, `/station-route`).
#[derive(Debug, Default, Deserialize)]
pub struct LineQuery {
    /// Two-letter line code, e.g. "SV"
    #[serde(rename = "LineCode")]
    pub line_code: Option<String>,
}

/// Query for station-scoped endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct StationQuery {
    /// Station code, e.g. "K05"
    #[serde(rename = "StationCode")]
    pub station_code: Option<String>,
}
