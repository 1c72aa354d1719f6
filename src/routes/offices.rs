use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::models::{
    Criteria, DirectionsQuery, DirectionsResponse, FilterOption, FiltersResponse, HealthResponse,
    Location, SearchOfficesRequest, SearchOfficesResponse, ALL_CATEGORIES, ALL_REGIONS,
};
use crate::core::OfficeLocator;
use crate::routes::{ApiError, AppState};
use crate::services::{resolve_location, CacheKey, ReportedLocation};

/// Configure all office-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/filters", web::get().to(filter_options))
        .route("/offices", web::get().to(list_offices))
        .route("/offices/search", web::post().to(search_offices))
        .route("/offices/{id}", web::get().to(get_office))
        .route("/offices/{id}/directions", web::get().to(get_directions))
        .route("/offices/{id}/share", web::get().to(share_office));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        offices: state.locator.offices().len(),
    })
}

/// Options for the category and region selectors
async fn filter_options(state: web::Data<AppState>) -> HttpResponse {
    let categories = std::iter::once(FilterOption {
        value: ALL_CATEGORIES.to_string(),
        label: "Todos los Tipos".to_string(),
    })
    .chain(OfficeLocator::categories().into_iter().map(|category| FilterOption {
        value: category.to_string(),
        label: category.label().to_string(),
    }))
    .collect();

    let regions = std::iter::once(FilterOption {
        value: ALL_REGIONS.to_string(),
        label: "Todos".to_string(),
    })
    .chain(state.locator.regions().into_iter().map(|region| FilterOption {
        value: region.clone(),
        label: region,
    }))
    .collect();

    HttpResponse::Ok().json(FiltersResponse { categories, regions })
}

/// Every office, ordered by name
async fn list_offices(state: web::Data<AppState>) -> HttpResponse {
    let result = state.locator.search(&Criteria::default(), None);

    HttpResponse::Ok().json(SearchOfficesResponse {
        total_results: result.offices.len(),
        offices: result.offices,
        total_offices: result.total_offices,
    })
}

/// Search offices endpoint
///
/// POST /api/v1/offices/search
///
/// Request body:
/// ```json
/// {
///   "searchText": "string",
///   "category": "all|central|branch|agency|service_point",
///   "region": "all|<department>",
///   "location": { "latitude": -16.5, "longitude": -68.13, "accuracy": 20.0 },
///   "locationError": "permission_denied|position_unavailable|timeout|unsupported"
/// }
/// ```
async fn search_offices(
    state: web::Data<AppState>,
    req: web::Json<SearchOfficesRequest>,
) -> Result<HttpResponse, ApiError> {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for search request: field_errors={:?}", errors);
        return Err(ApiError::Validation(errors.to_string()));
    }

    let provider = ReportedLocation::new(req.location, req.location_error);
    let location = resolve_location(&provider, state.geolocation_timeout).await;
    let criteria = req.criteria();

    let cache_key = CacheKey::search(&criteria, location.as_ref());
    if let Some(cache) = &state.cache {
        if let Some(cached) = cache.get(&cache_key).await {
            return Ok(HttpResponse::Ok().json(cached));
        }
    }

    let result = state.locator.search(&criteria, location.as_ref());

    let response = SearchOfficesResponse {
        total_results: result.offices.len(),
        offices: result.offices,
        total_offices: result.total_offices,
    };

    tracing::info!(
        "Returning {} of {} offices (ranked by {})",
        response.total_results,
        response.total_offices,
        if location.is_some() { "distance" } else { "name" }
    );

    if let Some(cache) = &state.cache {
        cache.set(cache_key, response.clone()).await;
    }

    Ok(HttpResponse::Ok().json(response))
}

async fn get_office(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let office = state.locator.get(&id).ok_or(ApiError::OfficeNotFound(id))?;

    Ok(HttpResponse::Ok().json(office))
}

/// Directions link endpoint
///
/// GET /api/v1/offices/{id}/directions?fromLat={lat}&fromLon={lon}
async fn get_directions(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<DirectionsQuery>,
) -> Result<HttpResponse, ApiError> {
    if let Err(errors) = query.validate() {
        return Err(ApiError::Validation(errors.to_string()));
    }

    let id = path.into_inner();
    let office = state.locator.get(&id).ok_or(ApiError::OfficeNotFound(id))?;

    let destination = Location::new(office.latitude, office.longitude);
    let url = state.links.directions_url(&query.origin(), &destination);

    Ok(HttpResponse::Ok().json(DirectionsResponse { url }))
}

async fn share_office(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let office = state.locator.get(&id).ok_or(ApiError::OfficeNotFound(id))?;

    Ok(HttpResponse::Ok().json(state.links.share_payload(office)))
}
