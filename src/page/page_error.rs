use crate::geo_distance::GeoDistanceError;
use crate::location::LocationError;
use crate::map_view::{MapViewError, PresenterError};
use thiserror::Error;

/// Terminal failures of a page load, the display text is what the user gets to see.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PageError {
    #[error("Geolocation is not supported by this location provider.")]
    GeolocationUnsupported,
    #[error("User denied the request for Geolocation.")]
    PermissionDenied,
    #[error("Location information is unavailable.")]
    PositionUnavailable,
    #[error("The request to get user location timed out.")]
    Timeout,
    #[error("An unknown error occurred.")]
    UnknownLocationError,
    #[error("Invalid coordinates: {0}")]
    InvalidCoordinateRange(#[from] GeoDistanceError),
    #[error("The map could not be displayed: {0}")]
    MapView(#[from] MapViewError),
    #[error("The distance could not be displayed: {0}")]
    Presenter(#[from] PresenterError),
}

impl From<LocationError> for PageError {
    fn from(error: LocationError) -> Self {
        match error {
            LocationError::PermissionDenied => PageError::PermissionDenied,
            LocationError::PositionUnavailable => PageError::PositionUnavailable,
            LocationError::Timeout => PageError::Timeout,
            LocationError::Unknown(_) => PageError::UnknownLocationError,
        }
    }
}
