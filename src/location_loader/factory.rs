use crate::domain::{Coordinate, CoordinateError, LocationCategory, LocationSet};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::warn;

/// Validates a parsed location document and converts it into a [`LocationSet`].
///
/// Every category is validated before the logistics centers are checked for emptiness, so a malformed category
/// is always reported first.
pub fn from_document(document: &Value) -> Result<LocationSet, SchemaError> {
    let root = document.as_object().ok_or(SchemaError::RootNotAnObject)?;
    let locations = root.get("locations").ok_or(SchemaError::MissingLocations)?;
    let locations = locations.as_object().ok_or(SchemaError::LocationsNotAnObject)?;

    let logistics_centers = category_from(locations, LocationCategory::LogisticsCenters)?;
    let sales_outlets = category_from(locations, LocationCategory::SalesOutlets)?;
    let customers = category_from(locations, LocationCategory::Customers)?;

    if logistics_centers.is_empty() {
        return Err(SchemaError::NoLogisticsCenters);
    }

    Ok(LocationSet::new(logistics_centers, sales_outlets, customers))
}

fn category_from(locations: &Map<String, Value>, category: LocationCategory) -> Result<Vec<Coordinate>, SchemaError> {
    let key = category.key();
    let Some(value) = locations.get(key) else {
        warn!("⚠️ Missing '{}' in locations, using an empty list", key);
        return Ok(Vec::new());
    };

    value
        .as_array()
        .ok_or(SchemaError::NotAList { key })?
        .iter()
        .enumerate()
        .map(|(index, element)| Coordinate::try_from(element).map_err(|source| SchemaError::InvalidCoordinate { key, index, source }))
        .collect()
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchemaError {
    #[error("JSON root must be an object")]
    RootNotAnObject,
    #[error("JSON must contain a 'locations' key")]
    MissingLocations,
    #[error("'locations' must be an object")]
    LocationsNotAnObject,
    #[error("'{key}' must be a list")]
    NotAList { key: &'static str },
    #[error("invalid location {index} in '{key}': {source}")]
    InvalidCoordinate {
        key: &'static str,
        index: usize,
        source: CoordinateError,
    },
    #[error("at least one logistics center is required")]
    NoLogisticsCenters,
}
