mod app;
mod config;
mod upload;
mod utils;

use anyhow::Result;
use app::{PdfUploader, UploadSession};
use clap::Parser;
use config::Config;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use upload::UploadDispatcher;

#[derive(Parser, Debug)]
#[command(version, about = "Send a local file to the PDF processing backend")]
struct Cli {
    /// Read configuration from this file instead of the platform config directory
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the upload endpoint URL
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "pdf_uploader=debug,info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(endpoint) = cli.endpoint {
        config.upload.endpoint = endpoint;
    }

    tracing::info!(endpoint = %config.upload.endpoint, "Starting uploader");

    // Uploads run here; the window thread only polls for finished attempts.
    let runtime = tokio::runtime::Runtime::new()?;
    let session = UploadSession::new(
        UploadDispatcher::from_config(&config.upload),
        runtime.handle().clone(),
    );

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([360.0, 240.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Upload de Arquivo",
        options,
        Box::new(move |cc| Box::new(PdfUploader::new(cc, session))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))?;

    Ok(())
}
