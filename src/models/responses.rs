use serde::{Deserialize, Serialize};
use crate::models::domain::{Office, RankedOffice};

/// Response for the search endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchOfficesResponse {
    pub offices: Vec<RankedOffice>,
    #[serde(rename = "totalResults")]
    pub total_results: usize,
    #[serde(rename = "totalOffices")]
    pub total_offices: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub offices: usize,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

/// One selectable value of a filter control
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
}

/// Options for the category and region filters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FiltersResponse {
    pub categories: Vec<FilterOption>,
    pub regions: Vec<FilterOption>,
}

/// Favorite membership of one office
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteResponse {
    pub id: String,
    pub favorite: bool,
}

/// All favorites, as ids and as catalog records
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoritesResponse {
    pub ids: Vec<String>,
    pub offices: Vec<Office>,
}

/// Link to an external directions service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectionsResponse {
    pub url: String,
}
