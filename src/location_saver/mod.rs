mod envelope;
mod saver;

pub use envelope::{Envelope, Metadata};
pub use saver::{SaverError, save_locations, try_save_locations};
