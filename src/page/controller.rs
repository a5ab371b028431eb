use crate::app_config::AppConfig;
use crate::domain::{Coordinate, DistanceUnit, KPU_SURREY_LIBRARY, KPU_SURREY_LIBRARY_NAME, Position};
use crate::geo_distance;
use crate::location::{LocationError, LocationProvider};
use crate::map_view::{Page, ViewHandle};
use crate::page::PageError;
use tracing::{debug, info, instrument, warn};

pub const USER_MARKER_POPUP: &str = "Your Location";

#[derive(Clone, Debug)]
pub struct PageSettings {
    pub container_id: String,
    pub distance_element_id: String,
    pub zoom: u8,
    pub tile_url: String,
    pub attribution: String,
    pub polyline_color: String,
    pub unit: DistanceUnit,
    pub destination: Coordinate,
    pub destination_name: String,
}

impl PageSettings {
    pub fn from_config(config: &AppConfig) -> Self {
        PageSettings {
            container_id: config.page().container_id().to_string(),
            distance_element_id: config.page().distance_element_id().to_string(),
            zoom: config.map().zoom(),
            tile_url: config.map().tile_url().to_string(),
            attribution: config.map().attribution().to_string(),
            polyline_color: config.map().polyline_color().to_string(),
            unit: config.distance().unit(),
            destination: KPU_SURREY_LIBRARY,
            destination_name: KPU_SURREY_LIBRARY_NAME.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum PageState {
    AwaitingLocation,
    Ready { user: Coordinate, distance: f64 },
    Failed(PageError),
}

/// Drives a single page load: acquire the location once, then show the map and the distance to the destination.
#[derive(Debug)]
pub struct PageController<P: Page> {
    page: P,
    settings: PageSettings,
    view: Option<ViewHandle>,
    state: PageState,
}

impl<P: Page> PageController<P> {
    pub fn new(page: P, settings: PageSettings) -> Self {
        PageController {
            page,
            settings,
            view: None,
            state: PageState::AwaitingLocation,
        }
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    #[cfg(test)]
    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn into_page(self) -> P {
        self.page
    }

    #[instrument(skip_all, fields(provider = provider.id()))]
    pub async fn load(&mut self, provider: &dyn LocationProvider) -> &PageState {
        if !provider.is_supported() {
            warn!("📍 Geolocation is not supported by provider '{}'", provider.id());
            self.fail(PageError::GeolocationUnsupported);
            return &self.state;
        }

        info!("📍 Acquiring location...");
        let result = provider.current_position().await;
        self.on_position(result)
    }

    /// Handles a location fix or failure. Only the first one counts, anything arriving after the map has been created
    /// or the page has failed is ignored.
    #[instrument(skip_all)]
    pub fn on_position(&mut self, result: Result<Position, LocationError>) -> &PageState {
        if self.view.is_some() || self.state != PageState::AwaitingLocation {
            debug!(state = ?self.state, "📍 Ignoring location update, the page is no longer awaiting a location");
            return &self.state;
        }

        match result {
            Ok(position) => {
                info!(
                    latitude = position.coordinate.latitude,
                    longitude = position.coordinate.longitude,
                    accuracy_m = ?position.accuracy_m,
                    timestamp = %position.timestamp,
                    "📍 Acquiring location... OK"
                );

                match self.init_map(position.coordinate) {
                    Ok(distance) => {
                        info!("🔥 Distance to {}: {:.2} {}", self.settings.destination_name, distance, self.settings.unit);
                        self.state = PageState::Ready {
                            user: position.coordinate,
                            distance,
                        };
                    }
                    Err(error) => self.fail(error),
                }
            }
            Err(error) => {
                warn!("📍 Acquiring location... failed, {}", error);
                self.fail(error.into());
            }
        }

        &self.state
    }

    fn init_map(&mut self, user: Coordinate) -> Result<f64, PageError> {
        let Self { page, settings, view, .. } = self;

        let distance = geo_distance::distance(&user, &settings.destination, settings.unit)?;

        debug!("🗺️ Initializing map...");
        let handle = page.create_view(&settings.container_id, user, settings.zoom)?;
        *view = Some(handle);

        page.add_tile_layer(handle, &settings.tile_url, &settings.attribution)?;
        page.add_marker(handle, user, USER_MARKER_POPUP, false)?;
        page.add_marker(handle, settings.destination, &settings.destination_name, true)?;
        page.add_polyline(handle, &[user, settings.destination], &settings.polyline_color)?;
        debug!("🗺️ Initializing map... OK");

        let text = format!("Distance to {}: {:.2} {}", settings.destination_name, distance, settings.unit);
        page.set_text(&settings.distance_element_id, &text)?;

        Ok(distance)
    }

    fn fail(&mut self, error: PageError) {
        self.page.alert(&error.to_string());
        self.state = PageState::Failed(error);
    }
}
