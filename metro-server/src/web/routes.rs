//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::Value;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, error};

use crate::domain::{InvalidLineCode, InvalidStationCode, LineCode, StationCode};
use crate::shape::{
    RouteStop, ShapeError, Station, StationHoursEntry, shape_arrivals, shape_station_hours,
    shape_station_list, shape_station_route,
};
use crate::wmata::{TransitApi, WmataError};

use super::dto::{LineQuery, StationQuery};
use super::state::AppState;

/// Create the application router.
pub fn create_router<A>(state: AppState<A>) -> Router
where
    A: TransitApi + 'static,
{
    Router::new()
        .route("/health", get(health))
        .route("/station-list", get(station_list::<A>))
        .route("/station-information", get(station_information::<A>))
        .route("/station-hours", get(station_hours::<A>))
        .route("/arrival-times", get(arrival_times::<A>))
        .route("/station-route", get(station_route::<A>))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Validate the `LineCode` parameter.
fn line_param(query: Result<Query<LineQuery>, QueryRejection>) -> Result<LineCode, AppError> {
    let value = query.ok().and_then(|Query(q)| q.line_code);
    Ok(LineCode::parse(value.as_deref().unwrap_or_default())?)
}

/// Validate the `StationCode` parameter.
fn station_param(
    query: Result<Query<StationQuery>, QueryRejection>,
) -> Result<StationCode, AppError> {
    let value = query.ok().and_then(|Query(q)| q.station_code);
    Ok(StationCode::from_query(value.as_deref())?)
}

/// Stations on a line, sorted by name.
async fn station_list<A: TransitApi>(
    State(state): State<AppState<A>>,
    query: Result<Query<LineQuery>, QueryRejection>,
) -> Result<Json<Vec<Station>>, AppError> {
    let line = line_param(query)?;

    let raw = state.transit.fetch_station_list(line).await?;
    debug!(%line, stations = raw.len(), "fetched station list");

    Ok(Json(shape_station_list(&raw)))
}

/// Station address and location, passed through from upstream.
async fn station_information<A: TransitApi>(
    State(state): State<AppState<A>>,
    query: Result<Query<StationQuery>, QueryRejection>,
) -> Result<Json<Value>, AppError> {
    let station = station_param(query)?;

    let info = state.transit.fetch_station_info(&station).await?;

    Ok(Json(info))
}

/// Weekly opening hours and first/last trains.
async fn station_hours<A: TransitApi>(
    State(state): State<AppState<A>>,
    query: Result<Query<StationQuery>, QueryRejection>,
) -> Result<Json<Vec<StationHoursEntry>>, AppError> {
    let station = station_param(query)?;

    let raw = state.transit.fetch_station_timings(&station).await?;

    Ok(Json(shape_station_hours(&raw)?))
}

/// Next-train predictions.
async fn arrival_times<A: TransitApi>(
    State(state): State<AppState<A>>,
    query: Result<Query<StationQuery>, QueryRejection>,
) -> Result<Json<Vec<Value>>, AppError> {
    let station = station_param(query)?;

    let raw = state.transit.fetch_next_trains(&station).await?;
    debug!(%station, trains = raw.trains.len(), "fetched predictions");

    Ok(Json(shape_arrivals(&raw)))
}

/// Ordered stations along a line.
async fn station_route<A: TransitApi>(
    State(state): State<AppState<A>>,
    query: Result<Query<LineQuery>, QueryRejection>,
) -> Result<Json<Vec<RouteStop>>, AppError> {
    let line = line_param(query)?;

    // Independent fetches; only their results are joined.
    let (route, stations) = futures::future::try_join(
        state.transit.fetch_standard_route(line),
        state.transit.fetch_station_list(line),
    )
    .await?;
    debug!(
        %line,
        circuits = route.len(),
        stations = stations.len(),
        "fetched route and stations"
    );

    Ok(Json(shape_station_route(&route, &stations)?))
}

/// Application error type.
///
/// Every variant is answered with a 500 and a plain-text message; clients
/// tell the cases apart by message only.
#[derive(Debug)]
pub enum AppError {
    Validation { message: String },
    Upstream { message: String },
    Data { message: String },
}

impl AppError {
    fn message(&self) -> &str {
        match self {
            AppError::Validation { message }
            | AppError::Upstream { message }
            | AppError::Data { message } => message,
        }
    }
}

impl From<InvalidLineCode> for AppError {
    fn from(e: InvalidLineCode) -> Self {
        AppError::Validation {
            message: e.to_string(),
        }
    }
}

impl From<InvalidStationCode> for AppError {
    fn from(e: InvalidStationCode) -> Self {
        AppError::Validation {
            message: e.to_string(),
        }
    }
}

impl From<WmataError> for AppError {
    fn from(e: WmataError) -> Self {
        AppError::Upstream {
            message: e.to_string(),
        }
    }
}

impl From<ShapeError> for AppError {
    fn from(e: ShapeError) -> Self {
        AppError::Data {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::INTERNAL_SERVER_ERROR;
        error!(error = ?self, "[{status}] {}", self.message());

        (status, self.message().to_string()).into_response()
    }
}
