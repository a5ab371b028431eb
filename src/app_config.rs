use crate::domain::{Coordinate, DistanceUnit};
use config::{Config, ConfigError};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    page: Page,
    map: Map,
    distance: Distance,
    location: Location,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::with_prefix("WAYFINDER").prefix_separator("_").separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn map(&self) -> &Map {
        &self.map
    }

    pub fn distance(&self) -> &Distance {
        &self.distance
    }

    pub fn location(&self) -> &Location {
        &self.location
    }
}

#[derive(Debug, Deserialize)]
pub struct Page {
    title: String,
    container_id: String,
    distance_element_id: String,
    output: String,
}

impl Page {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    pub fn distance_element_id(&self) -> &str {
        &self.distance_element_id
    }

    pub fn output(&self) -> &Path {
        Path::new(&self.output)
    }
}

#[derive(Debug, Deserialize)]
pub struct Map {
    zoom: u8,
    tile_url: String,
    attribution: String,
    polyline_color: String,
}

impl Map {
    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    pub fn tile_url(&self) -> &str {
        &self.tile_url
    }

    pub fn attribution(&self) -> &str {
        &self.attribution
    }

    pub fn polyline_color(&self) -> &str {
        &self.polyline_color
    }
}

#[derive(Debug, Deserialize)]
pub struct Distance {
    unit: DistanceUnit,
}

impl Distance {
    pub fn unit(&self) -> DistanceUnit {
        self.unit
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Ip,
    Fixed,
    #[serde(rename = "none")]
    Disabled,
}

#[derive(Debug, Deserialize)]
pub struct Location {
    provider: ProviderKind,
    url: String,
    #[serde(with = "humantime_serde")]
    timeout: Duration,
    fixed: Option<Coordinate>,
}

impl Location {
    pub fn provider(&self) -> ProviderKind {
        self.provider
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn fixed(&self) -> Option<Coordinate> {
        self.fixed
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                page: Page {
                    title: "Distance to KPU Surrey Library".to_string(),
                    container_id: "map".to_string(),
                    distance_element_id: "distance".to_string(),
                    output: "wayfinder.html".to_string(),
                },
                map: Map {
                    zoom: 13,
                    tile_url: "https://tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
                    attribution: "&copy; OpenStreetMap contributors".to_string(),
                    polyline_color: "blue".to_string(),
                },
                distance: Distance {
                    unit: DistanceUnit::Kilometers,
                },
                location: Location {
                    provider: ProviderKind::Fixed,
                    url: "https://ipapi.co/json/".to_string(),
                    timeout: Duration::from_secs(5),
                    fixed: Some(Coordinate::new(49.2, -122.9)),
                },
            },
        }
    }

    pub fn location_url(mut self, url: String) -> Self {
        self.config.location.url = url;
        self
    }

    pub fn location_timeout(mut self, timeout: Duration) -> Self {
        self.config.location.timeout = timeout;
        self
    }

    pub fn provider(mut self, provider: ProviderKind) -> Self {
        self.config.location.provider = provider;
        self
    }

    pub fn fixed_location(mut self, fixed: Option<Coordinate>) -> Self {
        self.config.location.fixed = fixed;
        self
    }

    pub fn unit(mut self, unit: DistanceUnit) -> Self {
        self.config.distance.unit = unit;
        self
    }

    pub fn zoom(mut self, zoom: u8) -> Self {
        self.config.map.zoom = zoom;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
