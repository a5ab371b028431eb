use crate::domain::Coordinate;
use std::fmt::{Debug, Display, Formatter};
use thiserror::Error;

pub const MAX_ZOOM: u8 = 19;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ViewHandle(pub(crate) usize);

impl Display for ViewHandle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "view#{}", self.0)
    }
}

/// An interactive tiled map.
pub trait MapView: Debug {
    fn create_view(&mut self, container_id: &str, center: Coordinate, zoom: u8) -> Result<ViewHandle, MapViewError>;

    fn add_tile_layer(&mut self, view: ViewHandle, url_template: &str, attribution: &str) -> Result<(), MapViewError>;

    fn add_marker(&mut self, view: ViewHandle, at: Coordinate, popup: &str, open_popup: bool) -> Result<(), MapViewError>;

    fn add_polyline(&mut self, view: ViewHandle, points: &[Coordinate], color: &str) -> Result<(), MapViewError>;
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MapViewError {
    #[error("unknown map view {0}")]
    UnknownView(ViewHandle),
    #[error("map container '{0}' is already initialized")]
    ContainerAlreadyInitialized(String),
    #[error("zoom level {0} is out of range, must be between 0 and {max}", max = MAX_ZOOM)]
    InvalidZoom(u8),
    #[error("a polyline needs at least two points, got {0}")]
    IncompletePolyline(usize),
}
