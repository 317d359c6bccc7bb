use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use super::extract::CurrentUser;
use super::AppState;
use crate::error::{AppError, AppResult};
use crate::models::WatchlistEntry;
use crate::services::watchlist::{self, NewEntry};

#[derive(Debug, Deserialize)]
pub struct AddRequest {
    pub anime_id: Option<i64>,
    pub title: Option<String>,
    pub year: Option<String>,
    pub rating: Option<String>,
    pub image: Option<String>,
}

/// Adds a catalog item snapshot to the caller's watchlist
pub async fn add(
    user: CurrentUser,
    State(state): State<AppState>,
    Json(request): Json<AddRequest>,
) -> AppResult<Json<Value>> {
    let (anime_id, title) = match (request.anime_id, request.title) {
        (Some(id), Some(title)) if !title.is_empty() => (id, title),
        _ => return Err(AppError::InvalidInput("Missing required data".to_string())),
    };

    watchlist::add(
        &state.pool,
        user.user_id,
        NewEntry {
            anime_id,
            title,
            year: request.year,
            rating: request.rating,
            image: request.image,
        },
    )
    .await?;

    Ok(Json(json!({ "success": true })))
}

/// Removes one of the caller's watchlist entries
pub async fn remove(
    user: CurrentUser,
    State(state): State<AppState>,
    Path(entry_id): Path<i64>,
) -> AppResult<Json<Value>> {
    watchlist::remove(&state.pool, user.user_id, entry_id).await?;
    Ok(Json(json!({ "success": true })))
}

/// Returns the caller's watchlist, newest first
pub async fn get(
    user: CurrentUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<WatchlistEntry>>> {
    Ok(Json(watchlist::list(&state.pool, user.user_id).await?))
}
