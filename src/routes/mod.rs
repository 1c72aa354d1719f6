// Route exports
pub mod favorites;
pub mod offices;

use actix_web::{http::StatusCode, web, HttpResponse, ResponseError};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use crate::core::OfficeLocator;
use crate::models::ErrorResponse;
use crate::services::{FavoritesError, FavoritesStore, MapsLinks, SearchCache};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub locator: OfficeLocator,
    pub favorites: Arc<FavoritesStore>,
    pub links: MapsLinks,
    pub cache: Option<Arc<SearchCache>>,
    pub geolocation_timeout: Duration,
}

/// Errors returned by handlers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("Office not found: {0}")]
    OfficeNotFound(String),

    #[error("Failed to update favorites: {0}")]
    Favorites(#[from] FavoritesError),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::OfficeNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Favorites(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            ApiError::Validation(_) => "Validation failed",
            ApiError::OfficeNotFound(_) => "Not found",
            ApiError::Favorites(_) => "Favorites error",
        };

        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: error.to_string(),
            message: self.to_string(),
            status_code: self.status_code().as_u16(),
        })
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(offices::configure)
            .configure(favorites::configure),
    );
}
