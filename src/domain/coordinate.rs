use serde::{Serialize, Serializer};
use std::fmt::{Display, Formatter};
use std::ops::RangeInclusive;
use thiserror::Error;

const LATITUDE_RANGE: RangeInclusive<f64> = -90.0..=90.0;
const LONGITUDE_RANGE: RangeInclusive<f64> = -180.0..=180.0;

/// A position in decimal degrees.
///
/// Can only be constructed through [`Coordinate::new`] (or the JSON conversion in the loader), so every instance
/// lies within the valid latitude and longitude ranges.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        if !LATITUDE_RANGE.contains(&latitude) {
            return Err(CoordinateError::LatitudeOutOfRange(latitude));
        }

        if !LONGITUDE_RANGE.contains(&longitude) {
            return Err(CoordinateError::LongitudeOutOfRange(longitude));
        }

        Ok(Coordinate { latitude, longitude })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.latitude, self.longitude)
    }
}

// Written as a `[latitude, longitude]` pair
impl Serialize for Coordinate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (self.latitude, self.longitude).serialize(serializer)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoordinateError {
    #[error("must be [latitude, longitude]")]
    NotAPair,
    #[error("{value} is not a finite number")]
    NotANumber { value: String },
    #[error("invalid latitude {0} (must be -90 to 90)")]
    LatitudeOutOfRange(f64),
    #[error("invalid longitude {0} (must be -180 to 180)")]
    LongitudeOutOfRange(f64),
}
