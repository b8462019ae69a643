use crate::domain::{Coordinate, CoordinateError};
use serde_json::Value;

impl TryFrom<&Value> for Coordinate {
    type Error = CoordinateError;

    /// Converts a `[latitude, longitude]` JSON array. Each component may be a number or a string holding a number.
    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let Some([latitude, longitude]) = value.as_array().map(Vec::as_slice) else {
            return Err(CoordinateError::NotAPair);
        };

        Coordinate::new(to_degrees(latitude)?, to_degrees(longitude)?)
    }
}

fn to_degrees(value: &Value) -> Result<f64, CoordinateError> {
    let degrees = match value {
        // Parsed from the source text, so numbers too large for an f64 become infinite instead of failing
        Value::Number(number) => number.as_str().parse::<f64>().ok(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };

    degrees.filter(|d| d.is_finite()).ok_or_else(|| CoordinateError::NotANumber { value: value.to_string() })
}
