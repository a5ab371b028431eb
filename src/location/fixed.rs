use crate::domain::{Coordinate, Position};
use crate::location::{LocationError, LocationProvider};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Reports a preset coordinate, used to simulate the user's location.
#[derive(Debug)]
pub struct FixedLocationProvider {
    coordinate: Coordinate,
}

impl FixedLocationProvider {
    pub fn new(coordinate: Coordinate) -> Self {
        FixedLocationProvider { coordinate }
    }
}

#[async_trait]
impl LocationProvider for FixedLocationProvider {
    fn id(&self) -> &'static str {
        "fixed"
    }

    fn is_supported(&self) -> bool {
        true
    }

    #[instrument(skip(self))]
    async fn current_position(&self) -> Result<Position, LocationError> {
        debug!(latitude = self.coordinate.latitude, longitude = self.coordinate.longitude, "📍 Using fixed location");
        if !self.coordinate.is_valid() {
            return Err(LocationError::PositionUnavailable);
        }

        Ok(Position::new(self.coordinate, Some(0.0)))
    }
}

/// Stands in when no geolocation capability is available.
#[derive(Debug)]
pub struct UnsupportedLocationProvider;

#[async_trait]
impl LocationProvider for UnsupportedLocationProvider {
    fn id(&self) -> &'static str {
        "unsupported"
    }

    fn is_supported(&self) -> bool {
        false
    }

    async fn current_position(&self) -> Result<Position, LocationError> {
        Err(LocationError::PositionUnavailable)
    }
}
