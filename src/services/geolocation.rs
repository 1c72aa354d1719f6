use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::Duration;
use thiserror::Error;

use crate::models::Location;

/// Reasons a position could not be obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationError {
    #[error("Location permission denied")]
    PermissionDenied,

    #[error("Position unavailable")]
    PositionUnavailable,

    #[error("Timed out waiting for a position")]
    Timeout,

    #[error("Geolocation not supported")]
    Unsupported,
}

/// Source of the user's current position
pub trait GeolocationProvider {
    fn current_location(&self) -> impl Future<Output = Result<Location, LocationError>> + Send;
}

/// Position (or failure) reported by the client device
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportedLocation {
    location: Option<Location>,
    error: Option<LocationError>,
}

impl ReportedLocation {
    pub fn new(location: Option<Location>, error: Option<LocationError>) -> Self {
        Self { location, error }
    }
}

impl GeolocationProvider for ReportedLocation {
    async fn current_location(&self) -> Result<Location, LocationError> {
        if let Some(error) = self.error {
            return Err(error);
        }

        match self.location {
            Some(location) if location.is_valid() => Ok(location),
            Some(_) => Err(LocationError::PositionUnavailable),
            None => Err(LocationError::Unsupported),
        }
    }
}

/// Ask a provider for a position, giving up after `timeout`
///
/// Failures are logged and collapse to `None`: the pipeline only ever sees a
/// location or its absence.
pub async fn resolve_location<P>(provider: &P, timeout: Duration) -> Option<Location>
where
    P: GeolocationProvider,
{
    let outcome = match tokio::time::timeout(timeout, provider.current_location()).await {
        Ok(result) => result,
        Err(_) => Err(LocationError::Timeout),
    };

    match outcome {
        Ok(location) => Some(location),
        Err(LocationError::Unsupported) => {
            tracing::trace!("No location available, ranking by name");
            None
        }
        Err(e) => {
            tracing::info!("Proceeding without location: {}", e);
            None
        }
    }
}
