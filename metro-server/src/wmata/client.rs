//! WMATA HTTP client.
//!
//! Provides async methods for the handful of WMATA endpoints the proxy
//! reshapes. Every request carries the `api_key` header.

use std::future::Future;
use std::path::PathBuf;

use reqwest::Url;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::domain::{LineCode, StationCode};

use super::error::WmataError;
use super::source::{Endpoint, ResponseSelector, UpstreamSource, read_mock};
use super::types::{
    PredictionsResponse, StandardRoutesResponse, StationDto, StationTimesResponse,
    StationsResponse, TrackCircuit,
};

/// Default base URL for the WMATA API.
const DEFAULT_BASE_URL: &str = "https://api.wmata.com";

/// Upstream transit API operations.
///
/// This abstraction lets the web layer run against a stub in tests.
pub trait TransitApi: Send + Sync {
    /// Stations served by a line.
    fn fetch_station_list(
        &self,
        line: LineCode,
    ) -> impl Future<Output = Result<Vec<StationDto>, WmataError>> + Send;

    /// Address and location details for a station, passed through untouched.
    fn fetch_station_info(
        &self,
        station: &StationCode,
    ) -> impl Future<Output = Result<Value, WmataError>> + Send;

    /// Opening hours and first/last trains for a station.
    fn fetch_station_timings(
        &self,
        station: &StationCode,
    ) -> impl Future<Output = Result<StationTimesResponse, WmataError>> + Send;

    /// Next-train predictions for a station.
    fn fetch_next_trains(
        &self,
        station: &StationCode,
    ) -> impl Future<Output = Result<PredictionsResponse, WmataError>> + Send;

    /// Ordered track circuits of a line.
    ///
    /// Upstream lists one route per direction. The two are mirror images of
    /// the same station sequence and nothing in the response says which is
    /// which, so only the first one listed is returned.
    fn fetch_standard_route(
        &self,
        line: LineCode,
    ) -> impl Future<Output = Result<Vec<TrackCircuit>, WmataError>> + Send;
}

/// Configuration for the WMATA client.
#[derive(Debug, Clone)]
pub struct WmataConfig {
    /// API key sent in the `api_key` header
    pub api_key: String,
    /// Base URL for the API (defaults to production WMATA)
    pub base_url: String,
    /// Request timeout in seconds; `None` leaves reqwest's default
    pub timeout_secs: Option<u64>,
    /// Where responses come from
    pub source: UpstreamSource,
}

impl WmataConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
            source: UpstreamSource::Live,
        }
    }

    /// Set a custom base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// Serve responses from mock files in `dir` instead of the API.
    pub fn with_mock_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.source = UpstreamSource::mock(dir);
        self
    }

    /// Serve responses from mock files, chosen by a custom selector.
    pub fn with_mock_selector(
        mut self,
        dir: impl Into<PathBuf>,
        selector: impl ResponseSelector + 'static,
    ) -> Self {
        self.source = UpstreamSource::mock_with(dir, selector);
        self
    }
}

/// WMATA API client.
#[derive(Debug, Clone)]
pub struct WmataClient {
    http: reqwest::Client,
    base_url: Url,
    source: UpstreamSource,
}

impl WmataClient {
    /// Create a new WMATA client with the given configuration.
    pub fn new(config: WmataConfig) -> Result<Self, WmataError> {
        let mut headers = HeaderMap::new();

        let api_key = HeaderValue::from_str(&config.api_key)
            .map_err(|_| WmataError::NotConfigured("invalid API key format".to_string()))?;
        headers.insert(HeaderName::from_static("api_key"), api_key);

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }
        let http = builder.build()?;

        let base_url = Url::parse(&config.base_url)
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| {
                WmataError::NotConfigured(format!("invalid base URL {:?}", config.base_url))
            })?;

        Ok(Self {
            http,
            base_url,
            source: config.source,
        })
    }

    /// Build an endpoint URL under the base URL.
    ///
    /// Each segment is percent-encoded, so a segment holding `/`, `?` or
    /// `#` stays a single path segment.
    fn endpoint_url(&self, segments: &[&str]) -> Result<Url, WmataError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| WmataError::NotConfigured("base URL cannot have a path".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// GET a JSON document, or read its mock stand-in.
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        param: &str,
        segments: &[&str],
        query: &[(&str, &str)],
    ) -> Result<T, WmataError> {
        if let UpstreamSource::Mock { dir, selector } = &self.source {
            let resource = selector.select(endpoint, param);
            debug!(?endpoint, %resource, "serving mock response");
            return read_mock(dir, &resource).await;
        }

        let url = self.endpoint_url(segments)?;
        debug!(?endpoint, %url, "upstream request");

        let response = self.http.get(url).query(query).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(WmataError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| WmataError::Json {
            message: e.to_string(),
        })
    }
}

impl TransitApi for WmataClient {
    async fn fetch_station_list(&self, line: LineCode) -> Result<Vec<StationDto>, WmataError> {
        let response: StationsResponse = self
            .get_json(
                Endpoint::StationList,
                line.as_str(),
                &["Rail.svc", "json", "jStations"],
                &[("LineCode", line.as_str())],
            )
            .await?;

        Ok(response.stations)
    }

    async fn fetch_station_info(&self, station: &StationCode) -> Result<Value, WmataError> {
        self.get_json(
            Endpoint::StationInfo,
            station.as_str(),
            &["Rail.svc", "json", "jStationInfo"],
            &[("StationCode", station.as_str())],
        )
        .await
    }

    async fn fetch_station_timings(
        &self,
        station: &StationCode,
    ) -> Result<StationTimesResponse, WmataError> {
        self.get_json(
            Endpoint::StationTimings,
            station.as_str(),
            &["Rail.svc", "json", "jStationTimes"],
            &[("StationCode", station.as_str())],
        )
        .await
    }

    async fn fetch_next_trains(
        &self,
        station: &StationCode,
    ) -> Result<PredictionsResponse, WmataError> {
        self.get_json(
            Endpoint::NextTrains,
            station.as_str(),
            &[
                "StationPrediction.svc",
                "json",
                "GetPrediction",
                station.as_str(),
            ],
            &[],
        )
        .await
    }

    async fn fetch_standard_route(&self, line: LineCode) -> Result<Vec<TrackCircuit>, WmataError> {
        let response: StandardRoutesResponse = self
            .get_json(
                Endpoint::StandardRoutes,
                line.as_str(),
                &["TrainPositions", "StandardRoutes"],
                &[("contentType", "json")],
            )
            .await?;

        response
            .standard_routes
            .into_iter()
            .find(|route| route.line_code == line.as_str())
            .map(|route| route.track_circuits)
            .ok_or_else(|| WmataError::RouteNotFound(line.to_string()))
    }
}
