mod client;
mod fixed;
mod ip_lookup;
mod provider;

pub use client::{LocationClientError, new_client};
pub use fixed::{FixedLocationProvider, UnsupportedLocationProvider};
pub use ip_lookup::IpLocationProvider;
pub use provider::{LocationError, LocationProvider};

use crate::app_config::{AppConfig, ProviderKind};

/// Builds the location provider selected in the configuration.
pub fn from_config(config: &AppConfig) -> Result<Box<dyn LocationProvider>, LocationClientError> {
    let provider: Box<dyn LocationProvider> = match config.location().provider() {
        ProviderKind::Ip => Box::new(IpLocationProvider::new(new_client(config)?, config.location().url())),
        ProviderKind::Fixed => match config.location().fixed() {
            Some(coordinate) => Box::new(FixedLocationProvider::new(coordinate)),
            None => Box::new(UnsupportedLocationProvider),
        },
        ProviderKind::Disabled => Box::new(UnsupportedLocationProvider),
    };

    Ok(provider)
}
