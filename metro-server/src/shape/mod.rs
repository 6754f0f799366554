//! Reshaping of raw WMATA responses into what the client app consumes.
//!
//! Everything here is a pure function of its input: no I/O, no hidden
//! state. Handlers fetch with a [`TransitApi`](crate::wmata::TransitApi)
//! and hand the raw records to these functions.

mod hours;
mod route;
mod stations;

pub use hours::{CLOSED_SENTINEL, StationHoursEntry, shape_station_hours};
pub use route::{RouteStop, shape_station_route};
pub use stations::{Station, shape_arrivals, shape_station_list};

use chrono::Weekday;

use crate::domain::TimeError;

/// Upstream data that cannot be reshaped.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    /// A station timings query should return exactly one record
    #[error("expected exactly one station timings record, got {0}")]
    TimingRecordCount(usize),

    /// An open day has no first or last train listed
    #[error("no {which} train listed for {day}")]
    MissingTrain { day: Weekday, which: &'static str },

    /// A time string was not "HH:MM"
    #[error(transparent)]
    Time(#[from] TimeError),

    /// A route circuit references a station not on the line's station list
    #[error("route references unknown station {0}")]
    UnknownStation(String),
}
