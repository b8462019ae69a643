use crate::domain::LocationSet;
use crate::extensions::date_time_ext::Timestamps;
use crate::location_saver::envelope::Envelope;
use chrono::Local;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{error, info, instrument, warn};

/// Writes `locations` to a new `locations_<YYYYMMDD_HHMMSS>.json` file in `output_dir`, creating the directory if needed.
///
/// Returns the path of the written file, or `None` if nothing was written. The reason is logged, use
/// [`try_save_locations`] to get it as an error instead. A file saved within the same second in the same directory
/// is overwritten.
#[instrument(skip(locations))]
pub fn save_locations(locations: &LocationSet, output_dir: &Path) -> Option<PathBuf> {
    match try_save_locations(locations, output_dir) {
        Ok(path) => {
            info!("💾 Locations saved to '{}'", path.display());
            Some(path)
        }
        Err(SaverError::NothingToSave) => {
            warn!("⚠️ No locations to save");
            None
        }
        Err(err) => {
            error!("❌ Error saving locations: {}", err);
            None
        }
    }
}

#[instrument(skip(locations))]
pub fn try_save_locations(locations: &LocationSet, output_dir: &Path) -> Result<PathBuf, SaverError> {
    if locations.is_empty() {
        return Err(SaverError::NothingToSave);
    }

    fs::create_dir_all(output_dir).map_err(|source| SaverError::CreateDirectory {
        source,
        path: output_dir.to_path_buf(),
    })?;

    let path = output_dir.join(format!("locations_{}.json", Local::now().file_stamp()));
    let envelope = Envelope::new(&Local::now(), locations);

    let json = serde_json::to_string_pretty(&envelope).map_err(|source| SaverError::Serialize { source, path: path.clone() })?;
    fs::write(&path, json).map_err(|source| SaverError::Write { source, path: path.clone() })?;

    Ok(path)
}

#[derive(Error, Debug)]
pub enum SaverError {
    #[error("no locations to save")]
    NothingToSave,
    #[error("unable to create directory '{}': {}", path.display(), source)]
    CreateDirectory { source: io::Error, path: PathBuf },
    #[error("unable to serialize locations for '{}': {}", path.display(), source)]
    Serialize { source: serde_json::Error, path: PathBuf },
    #[error("unable to write '{}': {}", path.display(), source)]
    Write { source: io::Error, path: PathBuf },
}
