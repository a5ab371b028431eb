use crate::domain::Coordinate;
use chrono::{DateTime, Utc};

/// A location fix as delivered by a location provider.
#[derive(Clone, Debug, PartialEq)]
pub struct Position {
    pub coordinate: Coordinate,
    pub accuracy_m: Option<f64>,
    pub timestamp: DateTime<Utc>,
}

impl Position {
    pub fn new(coordinate: Coordinate, accuracy_m: Option<f64>) -> Self {
        Position {
            coordinate,
            accuracy_m,
            timestamp: Utc::now(),
        }
    }
}
