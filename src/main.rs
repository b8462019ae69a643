use locations::app_config::AppConfig;
use locations::{load_locations, save_locations};
use std::env;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    info!("✅  Loaded configuration");

    let input = env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| config.input().file().map(PathBuf::from))
        .ok_or("no input file, pass it as the first argument or set input.file")?;

    let locations = load_locations(&input)?;
    let saved = save_locations(&locations, config.output().directory()).ok_or("locations were not saved")?;

    info!("🔥 Saved '{}' as '{}'", input.display(), saved.display());

    Ok(())
}
