mod coordinate;
mod location_category;
mod location_counts;
mod location_set;

pub use coordinate::{Coordinate, CoordinateError};
pub use location_category::LocationCategory;
pub use location_counts::LocationCounts;
pub use location_set::LocationSet;
