//! Server-side sessions stored alongside the rest of the data.
//!
//! Each session is a row keyed by a random token carried in a browser cookie.
//! Expired rows are treated as absent and removed lazily on lookup.

use chrono::{Duration, Utc};
use sqlx::SqlitePool;
use tracing::info;
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::{Session, User};

/// Creates a session for a freshly authenticated user
pub async fn create(pool: &SqlitePool, user: &User, ttl_hours: i64) -> AppResult<Session> {
    let token = Uuid::new_v4().to_string();
    let expires_at = Utc::now().naive_utc() + Duration::hours(ttl_hours);

    let session = sqlx::query_as::<_, Session>(
        "INSERT INTO sessions (token, user_id, username, expires_at)
         VALUES (?, ?, ?, ?)
         RETURNING token, user_id, username, created_at, expires_at",
    )
    .bind(&token)
    .bind(user.id)
    .bind(&user.username)
    .bind(expires_at)
    .fetch_one(pool)
    .await?;

    info!(user_id = user.id, "session created");
    Ok(session)
}

/// Looks up a session by token, dropping it if it has expired
pub async fn get(pool: &SqlitePool, token: &str) -> AppResult<Option<Session>> {
    let session = sqlx::query_as::<_, Session>(
        "SELECT token, user_id, username, created_at, expires_at FROM sessions WHERE token = ?",
    )
    .bind(token)
    .fetch_optional(pool)
    .await?;

    match session {
        Some(session) if session.is_expired(Utc::now().naive_utc()) => {
            delete(pool, token).await?;
            Ok(None)
        }
        other => Ok(other),
    }
}

/// Deletes a session unconditionally; deleting a missing token is not an error
pub async fn delete(pool: &SqlitePool, token: &str) -> AppResult<()> {
    sqlx::query("DELETE FROM sessions WHERE token = ?")
        .bind(token)
        .execute(pool)
        .await?;
    Ok(())
}
