//! Station time handling.
//!
//! WMATA provides opening and train times as zero-padded 24-hour "HH:MM"
//! strings. The client application wants them in 12-hour form.

use chrono::{NaiveTime, Timelike};

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time {input:?}: {reason}")]
pub struct TimeError {
    input: String,
    reason: &'static str,
}

impl TimeError {
    fn new(input: &str, reason: &'static str) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }
}

/// Parse a time from "HH:MM" format.
///
/// # Examples
///
/// ```
/// use metro_server::domain::parse_hhmm;
///
/// assert!(parse_hhmm("00:00").is_ok());
/// assert!(parse_hhmm("23:59").is_ok());
///
/// assert!(parse_hhmm("1430").is_err());
/// assert!(parse_hhmm("9:30").is_err());
/// assert!(parse_hhmm("25:00").is_err());
/// ```
pub fn parse_hhmm(s: &str) -> Result<NaiveTime, TimeError> {
    // Must be exactly 5 characters: HH:MM
    if s.len() != 5 {
        return Err(TimeError::new(s, "expected HH:MM format"));
    }

    // chrono accepts unpadded and signed fields, so check the shape first
    let zero_padded = s
        .bytes()
        .enumerate()
        .all(|(i, b)| if i == 2 { b == b':' } else { b.is_ascii_digit() });
    if !zero_padded {
        return Err(TimeError::new(s, "expected zero-padded HH:MM"));
    }

    NaiveTime::parse_from_str(s, "%H:%M").map_err(|_| TimeError::new(s, "time out of range"))
}

/// Convert a 24-hour "HH:MM" string to 12-hour display form.
///
/// Afternoon hours lose their padding ("15:45" becomes "3:45 pm"), but
/// morning times are passed through untouched with an " am" suffix, so
/// the leading zero survives ("09:00" becomes "09:00 am"). Midnight is
/// not rewritten to 12 either: "00:05" becomes "00:05 am". Minutes are
/// always copied verbatim.
///
/// # Examples
///
/// ```
/// use metro_server::domain::to_twelve_hour;
///
/// assert_eq!(to_twelve_hour("15:45").unwrap(), "3:45 pm");
/// assert_eq!(to_twelve_hour("12:30").unwrap(), "12:30 pm");
/// assert_eq!(to_twelve_hour("09:00").unwrap(), "09:00 am");
/// ```
pub fn to_twelve_hour(s: &str) -> Result<String, TimeError> {
    let time = parse_hhmm(s)?;
    let minutes = &s[3..5];

    let formatted = match time.hour() {
        hour if hour > 12 => format!("{}:{minutes} pm", hour - 12),
        12 => format!("12:{minutes} pm"),
        _ => format!("{s} am"),
    };

    Ok(formatted)
}
