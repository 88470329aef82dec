mod api;
mod app;
mod application;
mod domain;
mod ui;
mod utils;

use std::sync::Arc;

use iced::window;
use tracing_subscriber::EnvFilter;

use api::{AssetClient, AssetConfig};
use application::{DialogNotifier, DialogSaveTarget, ResumeDownloader};
use domain::{AppError, Content};

fn main() -> Result<(), AppError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,wgpu=warn,naga=warn,cosmic_text=warn")),
        )
        .init();

    let content = Content::bundled()?;
    let client = AssetClient::new(AssetConfig::from_env())?;
    let downloader = ResumeDownloader::new(
        client,
        Arc::new(DialogSaveTarget),
        Arc::new(DialogNotifier::new("Resume")),
    );

    let icon_data = include_bytes!("../assets/icon.png");

    let icon = match image::load_from_memory(icon_data) {
        Ok(img) => {
            let rgba = img.to_rgba8();
            let (width, height) = rgba.dimensions();
            window::icon::from_rgba(rgba.into_raw(), width, height).ok()
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to decode window icon");
            None
        }
    };

    tracing::info!("starting portfolio window");

    iced::application(
        move || app::Portfolio::new(content.clone(), downloader.clone()),
        app::update,
        app::view,
    )
    .title(app::title)
    .subscription(app::subscription)
    .window(window::Settings {
        icon,
        ..Default::default()
    })
    .run()?;

    Ok(())
}
