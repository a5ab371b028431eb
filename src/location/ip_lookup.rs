use crate::domain::{Coordinate, Position};
use crate::location::{LocationError, LocationProvider};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{info, instrument, warn};

/// Resolves the position from an IP geolocation endpoint such as `https://ipapi.co/json/`.
#[derive(Debug)]
pub struct IpLocationProvider {
    client: Client,
    url: String,
}

#[derive(Debug, Deserialize)]
struct IpLocationResponse {
    latitude: Option<f64>,
    longitude: Option<f64>,
    accuracy: Option<f64>,
    #[serde(default)]
    error: bool,
    reason: Option<String>,
}

impl IpLocationProvider {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        IpLocationProvider { client, url: url.into() }
    }
}

#[async_trait]
impl LocationProvider for IpLocationProvider {
    fn id(&self) -> &'static str {
        "ip"
    }

    fn is_supported(&self) -> bool {
        !self.url.is_empty()
    }

    #[instrument(skip(self), fields(url = %self.url))]
    async fn current_position(&self) -> Result<Position, LocationError> {
        info!("📍 Requesting location...");

        let response = self.client.get(&self.url).send().await.map_err(map_request_error)?;
        let status = response.status();
        if !status.is_success() {
            warn!(status_code = %status, "📍 Requesting location... failed");
            return Err(map_status(status));
        }

        let body = response.json::<IpLocationResponse>().await.map_err(map_request_error)?;
        if body.error {
            warn!(reason = ?body.reason, "📍 Requesting location... failed, the service reported an error");
            return Err(LocationError::PositionUnavailable);
        }

        let (Some(latitude), Some(longitude)) = (body.latitude, body.longitude) else {
            warn!("📍 Requesting location... failed, the response has no coordinates");
            return Err(LocationError::PositionUnavailable);
        };

        let coordinate = Coordinate::new(latitude, longitude);
        if let Err(e) = coordinate.validate() {
            warn!("📍 Requesting location... failed, {}", e);
            return Err(LocationError::PositionUnavailable);
        }

        info!(latitude, longitude, "📍 Requesting location... OK");
        Ok(Position::new(coordinate, body.accuracy))
    }
}

fn map_status(status: StatusCode) -> LocationError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => LocationError::PermissionDenied,
        _ => LocationError::PositionUnavailable,
    }
}

fn map_request_error(error: reqwest::Error) -> LocationError {
    if error.is_timeout() {
        warn!("📍 Requesting location... failed, timed out");
        LocationError::Timeout
    } else if error.is_connect() || error.is_decode() {
        warn!("📍 Requesting location... failed, {}", error);
        LocationError::PositionUnavailable
    } else {
        warn!("📍 Requesting location... failed, {}", error);
        LocationError::Unknown(error.to_string())
    }
}
