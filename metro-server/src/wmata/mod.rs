//! WMATA (Washington Metro) API client.
//!
//! This module provides an HTTP client for the handful of WMATA Rail
//! endpoints the proxy reshapes.
//!
//! Key characteristics of the WMATA API:
//! - Every request must carry an `api_key` header
//! - JSON field names are PascalCase
//! - Times are zero-padded 24-hour "HH:MM" strings
//! - Standard routes list each line twice, once per direction

mod client;
mod error;
mod source;
mod types;

pub use client::{TransitApi, WmataClient, WmataConfig};
pub use error::WmataError;
pub use source::{DefaultSelector, Endpoint, ResponseSelector, StationOverride, UpstreamSource};
pub use types::{
    DayTimes, PredictionsResponse, StandardRoute, StandardRoutesResponse, StationDto,
    StationTimes, StationTimesResponse, StationsResponse, TrackCircuit, TrainTime,
};
