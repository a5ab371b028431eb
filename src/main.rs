use crate::app_config::AppConfig;
use crate::map_view::LeafletPage;
use crate::page::{PageController, PageSettings, PageState};
use tracing::{error, info};

mod app_config;
mod coordinate_deserializer;
mod domain;
mod geo_distance;
mod location;
mod map_view;
mod page;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    info!("✅  Loaded configuration");

    let provider = location::from_config(&config)?;
    info!("✅  Initialized location provider '{}'", provider.id());

    let page = LeafletPage::new(config.page().title()).with_element(config.page().distance_element_id());
    let mut controller = PageController::new(page, PageSettings::from_config(&config));

    controller.load(provider.as_ref()).await;

    let outcome = match controller.state() {
        PageState::Ready { user, distance } => {
            info!(latitude = user.latitude, longitude = user.longitude, distance, "✅  Page is ready");
            Ok(())
        }
        PageState::Failed(page_error) => Err(page_error.clone()),
        PageState::AwaitingLocation => Ok(()),
    };

    controller.into_page().write_to(config.page().output()).await?;

    match outcome {
        Ok(()) => {
            info!("🔥 Open {} to see the map", config.page().output().display());
            Ok(())
        }
        Err(page_error) => {
            error!("❌ {}", page_error);
            Err(page_error.into())
        }
    }
}
