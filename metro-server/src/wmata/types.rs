//! WMATA API response DTOs.
//!
//! These types map directly to the WMATA JSON responses, which use
//! PascalCase field names. Only the fields we reshape are typed; anything
//! passed through to clients untouched stays a `serde_json::Value`.

use serde::Deserialize;
use serde_json::Value;

/// Response from `Rail.svc/json/jStations`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StationsResponse {
    pub stations: Vec<StationDto>,
}

/// A station as listed by `jStations`.
///
/// Upstream also sends address, coordinates and line codes; we only need
/// the code and name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StationDto {
    pub code: String,
    pub name: String,
}

/// Response from `Rail.svc/json/jStationTimes`.
///
/// Contains one record per queried station.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StationTimesResponse {
    pub station_times: Vec<StationTimes>,
}

/// Opening hours and first/last trains for one station, per weekday.
///
/// The station code and name upstream sends alongside are not needed.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StationTimes {
    pub monday: DayTimes,
    pub tuesday: DayTimes,
    pub wednesday: DayTimes,
    pub thursday: DayTimes,
    pub friday: DayTimes,
    pub saturday: DayTimes,
    pub sunday: DayTimes,
}

impl StationTimes {
    /// Timings for a given weekday.
    pub fn day(&self, weekday: chrono::Weekday) -> &DayTimes {
        use chrono::Weekday;

        match weekday {
            Weekday::Mon => &self.monday,
            Weekday::Tue => &self.tuesday,
            Weekday::Wed => &self.wednesday,
            Weekday::Thu => &self.thursday,
            Weekday::Fri => &self.friday,
            Weekday::Sat => &self.saturday,
            Weekday::Sun => &self.sunday,
        }
    }
}

/// Timings for one station on one weekday.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DayTimes {
    /// Station opening time ("HH:MM"). "00:00" means closed all day.
    pub opening_time: String,

    /// First trains leaving the station, one per destination.
    #[serde(default)]
    pub first_trains: Vec<TrainTime>,

    /// Last trains leaving the station, one per destination.
    #[serde(default)]
    pub last_trains: Vec<TrainTime>,
}

/// A scheduled first or last train.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TrainTime {
    /// Departure time ("HH:MM").
    pub time: String,
}

/// Response from `StationPrediction.svc/json/GetPrediction`.
///
/// Prediction records are passed through to clients as-is.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PredictionsResponse {
    pub trains: Vec<Value>,
}

/// Response from `TrainPositions/StandardRoutes`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StandardRoutesResponse {
    pub standard_routes: Vec<StandardRoute>,
}

/// The ordered track circuits of one line in one direction.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StandardRoute {
    pub line_code: String,
    pub track_circuits: Vec<TrackCircuit>,
}

/// A segment of track. Only some circuits are at a station.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TrackCircuit {
    /// Station at this circuit, `None` between stations.
    pub station_code: Option<String>,
}
