//! Station code types.

use std::fmt;

/// Error returned when a station code is missing from a request.
///
/// The message is sent verbatim to clients.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("StationCode must be included as a query string in the request")]
pub struct InvalidStationCode;

/// A WMATA station code, such as `"A15"` or `"K05"`.
///
/// Codes are passed upstream as-is; the only local check is that one was
/// supplied. Unknown codes are left for the upstream API to reject.
///
/// # Examples
///
/// ```
/// use metro_server::domain::StationCode;
///
/// let code = StationCode::parse("K05").unwrap();
/// assert_eq!(code.as_str(), "K05");
///
/// assert!(StationCode::parse("").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StationCode(String);

impl StationCode {
    /// Parse a station code from a query value.
    pub fn parse(s: &str) -> Result<Self, InvalidStationCode> {
        if s.is_empty() {
            return Err(InvalidStationCode);
        }
        Ok(StationCode(s.to_string()))
    }

    /// Parse an optional query value, treating absence as invalid.
    pub fn from_query(value: Option<&str>) -> Result<Self, InvalidStationCode> {
        value.map_or(Err(InvalidStationCode), Self::parse)
    }

    /// Returns the station code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationCode({})", self.0)
    }
}

impl fmt::Display for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
