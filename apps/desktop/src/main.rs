use folio_core::FolioConfig;
use iced::{Application, Settings, Size};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod app;
mod article;
mod ui;

use app::FolioApp;

fn main() -> iced::Result {
    // Config first: it carries the log filter
    let (config, config_error) = match FolioConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (FolioConfig::default(), Some(e)),
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Starting Folio v{}", env!("CARGO_PKG_VERSION"));
    if let Some(e) = config_error {
        warn!("Invalid configuration, using defaults: {}", e);
    }

    let window = config.window;
    FolioApp::run(Settings {
        window: iced::window::Settings {
            size: Size::new(window.width, window.height),
            min_size: Some(Size::new(window.min_width, window.min_height)),
            position: iced::window::Position::Centered,
            ..Default::default()
        },
        flags: config,
        ..Default::default()
    })?;

    Ok(())
}
