//! Domain types for the metro proxy.
//!
//! Request parameters are validated into these types before any upstream
//! call is made, so code that receives them can trust their validity.

mod line;
mod station;
mod time;

pub use line::{InvalidLineCode, LineCode};
pub use station::{InvalidStationCode, StationCode};
pub use time::{TimeError, parse_hhmm, to_twelve_hour};
