//! Loading, validating and saving the coordinates of logistics centers, sales outlets and customers.

pub mod app_config;
pub mod domain;
pub mod extensions;
mod location_loader;
mod location_saver;
#[cfg(test)]
mod test_support;

pub use domain::{Coordinate, CoordinateError, LocationCategory, LocationCounts, LocationSet};
pub use location_loader::{LoaderError, SchemaError, count_locations, from_document, is_valid_structure, load_locations};
pub use location_saver::{Envelope, Metadata, SaverError, save_locations, try_save_locations};
