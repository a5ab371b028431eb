use serde::Serialize;
use thiserror::Error;

pub const KPU_SURREY_LIBRARY_NAME: &str = "KPU Surrey Library";
pub const KPU_SURREY_LIBRARY: Coordinate = Coordinate {
    latitude: 49.13196,
    longitude: -122.87123,
};

/// A point on the Earth in decimal degrees.
///
/// Construction does not check the ranges so that consumers such as the distance calculation can reject invalid
/// points explicitly, use [`Coordinate::validate`] for that.
#[derive(Clone, Copy, Default, Debug, PartialEq, Serialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Coordinate { latitude, longitude }
    }

    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }

    pub fn validate(&self) -> Result<(), InvalidCoordinateRange> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(InvalidCoordinateRange {
                latitude: self.latitude,
                longitude: self.longitude,
            })
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[error("coordinate ({latitude}, {longitude}) is out of range, latitude must be between -90 and 90 and longitude between -180 and 180")]
pub struct InvalidCoordinateRange {
    pub latitude: f64,
    pub longitude: f64,
}
