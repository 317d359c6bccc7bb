use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::cookie::CookieJar;

use super::AppState;
use crate::error::AppError;
use crate::services::session;

/// Name of the browser cookie holding the session token
pub const SESSION_COOKIE: &str = "watchbuddy_session";

/// The authenticated user behind the current request.
///
/// Resolved from the session cookie on every request; handlers that take this
/// extractor reject unauthenticated callers with 401. Page handlers take
/// `Option<CurrentUser>` instead and redirect to the login page.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user_id: i64,
    pub username: String,
}

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::Unauthorized)?;

        let token = jar
            .get(SESSION_COOKIE)
            .map(|cookie| cookie.value().to_string())
            .ok_or(AppError::Unauthorized)?;

        let session = session::get(&state.pool, &token)
            .await?
            .ok_or(AppError::Unauthorized)?;

        Ok(CurrentUser {
            user_id: session.user_id,
            username: session.username,
        })
    }
}
