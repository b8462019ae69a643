use crate::domain::LocationSet;
use crate::location_loader::factory::{SchemaError, from_document};
use serde_json::Value;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{error, info, instrument};

/// Reads and validates the location file at `path`.
///
/// Categories missing from the file are replaced by empty lists, every other problem is returned as an error.
#[instrument]
pub fn load_locations(path: &Path) -> Result<LocationSet, LoaderError> {
    info!("📁 Loading locations from '{}'...", path.display());

    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            error!("❌ Location file not found: '{}'", path.display());
            LoaderError::NotFound { path: path.to_path_buf() }
        } else {
            error!("❌ Unable to read '{}': {}", path.display(), source);
            LoaderError::Io {
                source,
                path: path.to_path_buf(),
            }
        }
    })?;

    let document = serde_json::from_str::<Value>(&content).map_err(|source| {
        error!("❌ Invalid JSON in '{}': {}", path.display(), source);
        LoaderError::Parse {
            source,
            path: path.to_path_buf(),
        }
    })?;

    let locations = from_document(&document)?;
    let counts = locations.counts();
    info!(
        "📁 Loading locations... OK, {} logistics centers, {} sales outlets, {} customers",
        counts.num_logistics_centers, counts.num_sales_outlets, counts.num_customers
    );

    Ok(locations)
}

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("location file not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("unable to read '{}': {}", path.display(), source)]
    Io { source: io::Error, path: PathBuf },
    #[error("invalid JSON format in '{}': {}", path.display(), source)]
    Parse { source: serde_json::Error, path: PathBuf },
    #[error(transparent)]
    Schema(#[from] SchemaError),
}
