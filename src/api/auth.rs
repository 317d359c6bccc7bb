use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::Deserialize;

use super::extract::SESSION_COOKIE;
use super::{pages, AppState};
use crate::error::{AppError, AppResult};
use crate::models::NewUser;
use crate::services::{auth, session};

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Validates credentials and establishes a session.
///
/// Failures re-render the login page with an inline message rather than
/// returning an API error, since this is a browser form submission.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> AppResult<Response> {
    match auth::login(&state.pool, &form.username, &form.password).await? {
        Some(user) => {
            let session =
                session::create(&state.pool, &user, state.config.session_ttl_hours).await?;
            let cookie = Cookie::build((SESSION_COOKIE, session.token))
                .path("/")
                .http_only(true)
                .build();
            Ok((jar.add(cookie), Redirect::to("/anime")).into_response())
        }
        None => Ok(pages::login_html(Some("Invalid username or password")).into_response()),
    }
}

/// Registers a new account and redirects to the login page.
///
/// A password mismatch is rejected before the store is touched.
pub async fn signup(
    State(state): State<AppState>,
    Form(form): Form<SignupForm>,
) -> AppResult<Response> {
    if form.password != form.confirm_password {
        return Ok(pages::signup_html(Some("Passwords do not match")).into_response());
    }

    let new_user = NewUser {
        username: form.username,
        email: form.email,
        password: form.password,
    };

    match auth::signup(&state.pool, &new_user).await {
        Ok(_) => Ok(Redirect::to("/login").into_response()),
        Err(AppError::Conflict(_)) => {
            Ok(pages::signup_html(Some("Username or email already exists")).into_response())
        }
        Err(e) => Err(e),
    }
}

/// Clears the session unconditionally and returns to the landing page
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> AppResult<Response> {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        session::delete(&state.pool, cookie.value()).await?;
    }
    let jar = jar.remove(Cookie::build(SESSION_COOKIE).path("/"));
    Ok((jar, Redirect::to("/")).into_response())
}
