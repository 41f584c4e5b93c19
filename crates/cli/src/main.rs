use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vidbatch_core::{
    load_config, BatchConverter, BatchSettings, ConfigError, Converter, FfmpegConverter,
};

/// Application version
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Config file picked up from the working directory when `VIDBATCH_CONFIG` is unset.
const DEFAULT_CONFIG_FILE: &str = "vidbatch.toml";

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        // Configuration problems are reported on stdout next to the status lines
        if let Some(config_error) = e.downcast_ref::<ConfigError>() {
            println!("ERROR: {}", config_error);
        }
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Initialize logging; stdout is reserved for status lines
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("vidbatch {}", VERSION);

    // A .env file fills in variables the process environment does not already set
    match dotenvy::dotenv() {
        Ok(path) => info!("Loaded environment from {:?}", path),
        Err(e) if e.not_found() => {}
        Err(e) => return Err(e).context("Failed to read .env file"),
    }

    // Determine config path
    let config_path = std::env::var("VIDBATCH_CONFIG")
        .map(PathBuf::from)
        .ok()
        .or_else(|| {
            let default = Path::new(DEFAULT_CONFIG_FILE);
            default.exists().then(|| default.to_path_buf())
        });

    // Load configuration
    if let Some(path) = &config_path {
        info!("Loading configuration from {:?}", path);
    }
    let config = load_config(config_path.as_deref()).context("Failed to load configuration")?;
    let settings = BatchSettings::try_from(&config).context("Invalid configuration")?;

    debug!(
        "Effective configuration: {}",
        serde_json::to_string(&config).unwrap_or_default()
    );
    info!(
        "Converting {} -> {} in {:?}",
        settings.source_extension, settings.target_extension, settings.folder
    );

    let converter = FfmpegConverter::new(config.converter.clone());
    converter
        .validate()
        .await
        .with_context(|| format!("{:?} is not usable", config.converter.ffmpeg_path))?;

    let batch = BatchConverter::new(settings, converter);
    let mut stdout = std::io::stdout();
    let report = batch.run(&mut stdout).await.context("Batch aborted")?;

    debug!(
        "Batch report: {}",
        serde_json::to_string(&report).unwrap_or_default()
    );

    // Per-file failures do not change the exit status
    Ok(())
}
