mod coordinate_converter;
mod factory;
mod loader;
mod structure;

pub use factory::{SchemaError, from_document};
pub use loader::{LoaderError, load_locations};
pub use structure::{count_locations, is_valid_structure};
