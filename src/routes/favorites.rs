use actix_web::{web, HttpResponse};

use crate::models::{FavoriteResponse, FavoritesResponse};
use crate::routes::{ApiError, AppState};

/// Configure favorites routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/favorites", web::get().to(list_favorites))
        .route("/favorites/{id}", web::put().to(add_favorite))
        .route("/favorites/{id}", web::delete().to(remove_favorite))
        .route("/favorites/{id}/toggle", web::post().to(toggle_favorite));
}

async fn list_favorites(state: web::Data<AppState>) -> HttpResponse {
    let ids = state.favorites.ids().await;
    let offices = state.favorites.favorite_offices(state.locator.offices()).await;

    HttpResponse::Ok().json(FavoritesResponse { ids, offices })
}

fn ensure_office(state: &AppState, id: &str) -> Result<(), ApiError> {
    if state.locator.contains(id) {
        Ok(())
    } else {
        Err(ApiError::OfficeNotFound(id.to_string()))
    }
}

async fn add_favorite(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    ensure_office(&state, &id)?;

    state.favorites.add(&id).await?;
    tracing::debug!("Added favorite {}", id);

    Ok(HttpResponse::Ok().json(FavoriteResponse { id, favorite: true }))
}

/// Removing is idempotent and accepts ids no longer in the catalog
async fn remove_favorite(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    state.favorites.remove(&id).await?;
    tracing::debug!("Removed favorite {}", id);

    Ok(HttpResponse::Ok().json(FavoriteResponse { id, favorite: false }))
}

async fn toggle_favorite(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    ensure_office(&state, &id)?;

    let favorite = state.favorites.toggle(&id).await?;
    tracing::debug!("Toggled favorite {} -> {}", id, favorite);

    Ok(HttpResponse::Ok().json(FavoriteResponse { id, favorite }))
}
