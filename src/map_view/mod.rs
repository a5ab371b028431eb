mod leaflet_page;
mod map_view;
mod presenter;

pub use leaflet_page::LeafletPage;
pub use map_view::{MapView, MapViewError, ViewHandle};
pub use presenter::{Presenter, PresenterError};

/// Everything the page controller drives: a map plus the text and alert surface around it.
pub trait Page: MapView + Presenter {}

impl<T: MapView + Presenter> Page for T {}
