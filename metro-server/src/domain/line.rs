//! Metro line codes.

use std::fmt;

/// Error returned when parsing an unknown line code.
///
/// The message is sent verbatim to clients.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("LineCode must be RD, BL, YL, OR, GR, or SV")]
pub struct InvalidLineCode;

/// One of the six Metrorail lines, identified by its two-letter code.
///
/// # Examples
///
/// ```
/// use metro_server::domain::LineCode;
///
/// let silver = LineCode::parse("SV").unwrap();
/// assert_eq!(silver.as_str(), "SV");
///
/// // Codes are case sensitive, as upstream treats them.
/// assert!(LineCode::parse("sv").is_err());
/// assert!(LineCode::parse("CHEWBACCA").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineCode {
    Red,
    Blue,
    Yellow,
    Orange,
    Green,
    Silver,
}

impl LineCode {
    /// Every line, in the order clients list them.
    pub const ALL: [LineCode; 6] = [
        LineCode::Red,
        LineCode::Blue,
        LineCode::Yellow,
        LineCode::Orange,
        LineCode::Green,
        LineCode::Silver,
    ];

    /// Parse a line code such as `"RD"`.
    pub fn parse(s: &str) -> Result<Self, InvalidLineCode> {
        match s {
            "RD" => Ok(LineCode::Red),
            "BL" => Ok(LineCode::Blue),
            "YL" => Ok(LineCode::Yellow),
            "OR" => Ok(LineCode::Orange),
            "GR" => Ok(LineCode::Green),
            "SV" => Ok(LineCode::Silver),
            _ => Err(InvalidLineCode),
        }
    }

    /// Returns the two-letter code.
    pub fn as_str(&self) -> &'static str {
        match self {
            LineCode::Red => "RD",
            LineCode::Blue => "BL",
            LineCode::Yellow => "YL",
            LineCode::Orange => "OR",
            LineCode::Green => "GR",
            LineCode::Silver => "SV",
        }
    }
}

impl fmt::Display for LineCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
