//! Station list and arrival predictions.

use serde::Serialize;
use serde_json::Value;

use crate::wmata::{PredictionsResponse, StationDto};

/// A station as the client app sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Station {
    pub code: String,
    pub name: String,
}

impl From<&StationDto> for Station {
    fn from(dto: &StationDto) -> Self {
        Self {
            code: dto.code.clone(),
            name: dto.name.clone(),
        }
    }
}

/// Map raw stations to `{code, name}`, sorted by name.
///
/// The sort is a plain byte-wise string comparison and is stable, so
/// stations with equal names keep their upstream order.
pub fn shape_station_list(raw: &[StationDto]) -> Vec<Station> {
    let mut stations: Vec<Station> = raw.iter().map(Station::from).collect();
    stations.sort_by(|a, b| a.name.cmp(&b.name));
    stations
}

/// Unwrap the prediction records. They are not reshaped.
pub fn shape_arrivals(raw: &PredictionsResponse) -> Vec<Value> {
    raw.trains.clone()
}
