//! Line route assembly.
//!
//! A standard route is a list of track circuits; only some of them sit at a
//! station. Joining the station circuits with the line's station list gives
//! the named, ordered stops the client app draws.

use std::collections::HashMap;

use serde::Serialize;

use crate::wmata::{StationDto, TrackCircuit};

use super::ShapeError;

/// A station along a line's route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteStop {
    pub name: String,
    pub code: String,
    /// Position along the route, starting at 1.
    pub order: u32,
}

/// Join route circuits with station names.
///
/// Circuits without a station are skipped and do not consume an order
/// number. Every station circuit must match a station in `stations`.
pub fn shape_station_route(
    route: &[TrackCircuit],
    stations: &[StationDto],
) -> Result<Vec<RouteStop>, ShapeError> {
    let names: HashMap<&str, &str> = stations
        .iter()
        .map(|s| (s.code.as_str(), s.name.as_str()))
        .collect();

    route
        .iter()
        .filter_map(|circuit| circuit.station_code.as_deref())
        .zip(1..)
        .map(|(code, order)| -> Result<RouteStop, ShapeError> {
            let name = names
                .get(code)
                .ok_or_else(|| ShapeError::UnknownStation(code.to_string()))?;

            Ok(RouteStop {
                name: (*name).to_string(),
                code: code.to_string(),
                order,
            })
        })
        .collect()
}
