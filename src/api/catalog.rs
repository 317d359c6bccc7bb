use axum::{extract::State, Json};

use super::extract::CurrentUser;
use super::AppState;
use crate::error::AppResult;
use crate::models::{CatalogItem, MediaKind};
use crate::services::catalog;

/// Returns the full anime collection as a JSON array
pub async fn list_anime(
    _user: CurrentUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<CatalogItem>>> {
    Ok(Json(catalog::list(&state.pool, MediaKind::Anime).await?))
}

/// Returns the full movie collection as a JSON array
pub async fn list_movies(
    _user: CurrentUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<CatalogItem>>> {
    Ok(Json(catalog::list(&state.pool, MediaKind::Movie).await?))
}
