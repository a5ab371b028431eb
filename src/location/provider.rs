use crate::domain::Position;
use async_trait::async_trait;
use std::fmt::Debug;
use thiserror::Error;

/// Source of the user's current position.
#[async_trait]
pub trait LocationProvider: Debug + Send + Sync {
    fn id(&self) -> &'static str;

    /// Capability check, a provider that is not supported must not be asked for a position.
    fn is_supported(&self) -> bool;

    async fn current_position(&self) -> Result<Position, LocationError>;
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LocationError {
    #[error("permission to acquire the location was denied")]
    PermissionDenied,
    #[error("the position is unavailable")]
    PositionUnavailable,
    #[error("acquiring the location timed out")]
    Timeout,
    #[error("unknown location error: {0}")]
    Unknown(String),
}
