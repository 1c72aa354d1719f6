use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::domain::{CategoryFilter, Criteria, Location, RegionFilter};
use crate::services::geolocation::LocationError;

/// Request to search the office directory
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SearchOfficesRequest {
    #[validate(length(max = 200))]
    #[serde(alias = "search_text", rename = "searchText", default)]
    pub search_text: String,
    #[serde(default)]
    pub category: CategoryFilter,
    #[serde(alias = "department", default)]
    pub region: RegionFilter,
    /// Position reported by the client, if it has one
    #[serde(default)]
    pub location: Option<Location>,
    /// Why the client could not produce a position
    #[serde(alias = "location_error", rename = "locationError", default)]
    pub location_error: Option<LocationError>,
}

impl SearchOfficesRequest {
    pub fn criteria(&self) -> Criteria {
        Criteria {
            search_text: self.search_text.clone(),
            category: self.category.clone(),
            region: self.region.clone(),
        }
    }
}

/// Origin for a directions link
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Validate)]
pub struct DirectionsQuery {
    #[validate(custom(function = "validate_latitude"))]
    #[serde(alias = "from_lat", rename = "fromLat")]
    pub from_lat: f64,
    #[validate(custom(function = "validate_longitude"))]
    #[serde(alias = "from_lon", rename = "fromLon")]
    pub from_lon: f64,
}

fn validate_latitude(value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && (-90.0..=90.0).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::new("latitude_out_of_range"))
    }
}

fn validate_longitude(value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && (-180.0..=180.0).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::new("longitude_out_of_range"))
    }
}

impl DirectionsQuery {
    pub fn origin(&self) -> Location {
        Location::new(self.from_lat, self.from_lon)
    }
}
