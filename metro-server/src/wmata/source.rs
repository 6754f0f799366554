//! Where upstream responses come from.
//!
//! In production every call goes to the WMATA API. For offline development
//! and integration testing the client can instead serve upstream-shaped JSON
//! files from a local directory. Which file answers which call is decided by
//! a [`ResponseSelector`].

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::de::DeserializeOwned;

use super::error::WmataError;

/// The upstream operations the client performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    StationList,
    StationInfo,
    StationTimings,
    NextTrains,
    StandardRoutes,
}

/// Chooses which mock resource answers an upstream call.
pub trait ResponseSelector: Send + Sync {
    /// Resource name (file stem) for a call to `endpoint`.
    ///
    /// `param` is the line or station code the call was made with.
    fn select(&self, endpoint: Endpoint, param: &str) -> String;
}

/// One resource per endpoint, regardless of parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSelector;

impl ResponseSelector for DefaultSelector {
    fn select(&self, endpoint: Endpoint, _param: &str) -> String {
        let name = match endpoint {
            Endpoint::StationList => "station-list",
            Endpoint::StationInfo => "station-information",
            Endpoint::StationTimings => "station-timings",
            Endpoint::NextTrains => "next-trains",
            Endpoint::StandardRoutes => "standard-routes",
        };
        name.to_string()
    }
}

/// Serves a dedicated prediction resource for one station.
///
/// Predictions for `station_code` come from `{station_code}-times`; every
/// other call is delegated to the wrapped selector.
pub struct StationOverride<S> {
    station_code: String,
    inner: S,
}

impl<S: ResponseSelector> StationOverride<S> {
    pub fn new(station_code: impl Into<String>, inner: S) -> Self {
        Self {
            station_code: station_code.into(),
            inner,
        }
    }
}

impl<S: ResponseSelector> ResponseSelector for StationOverride<S> {
    fn select(&self, endpoint: Endpoint, param: &str) -> String {
        if endpoint == Endpoint::NextTrains && param == self.station_code {
            format!("{}-times", self.station_code)
        } else {
            self.inner.select(endpoint, param)
        }
    }
}

/// Source of upstream responses.
#[derive(Clone, Default)]
pub enum UpstreamSource {
    /// Call the real API.
    #[default]
    Live,

    /// Read `{dir}/{resource}.json`, with the resource picked by `selector`.
    Mock {
        dir: PathBuf,
        selector: Arc<dyn ResponseSelector>,
    },
}

impl UpstreamSource {
    /// Mock source using the default selector.
    pub fn mock(dir: impl Into<PathBuf>) -> Self {
        UpstreamSource::Mock {
            dir: dir.into(),
            selector: Arc::new(DefaultSelector),
        }
    }

    /// Mock source with a custom selector.
    pub fn mock_with(dir: impl Into<PathBuf>, selector: impl ResponseSelector + 'static) -> Self {
        UpstreamSource::Mock {
            dir: dir.into(),
            selector: Arc::new(selector),
        }
    }

    pub fn is_mock(&self) -> bool {
        matches!(self, UpstreamSource::Mock { .. })
    }
}

impl fmt::Debug for UpstreamSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpstreamSource::Live => f.write_str("Live"),
            UpstreamSource::Mock { dir, .. } => f.debug_struct("Mock").field("dir", dir).finish(),
        }
    }
}

/// Load and parse one mock resource.
pub(crate) async fn read_mock<T: DeserializeOwned>(
    dir: &Path,
    resource: &str,
) -> Result<T, WmataError> {
    let path = dir.join(format!("{resource}.json"));

    let json = tokio::fs::read_to_string(&path)
        .await
        .map_err(|e| WmataError::Mock {
            message: format!("failed to read {}: {e}", path.display()),
        })?;

    serde_json::from_str(&json).map_err(|e| WmataError::Mock {
        message: format!("failed to parse {}: {e}", path.display()),
    })
}
