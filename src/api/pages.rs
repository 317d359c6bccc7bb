//! Minimal HTML shells for the browser-facing routes.
//!
//! Full page rendering belongs to the front-end; these handlers only enforce
//! the session gate and hand back enough markup for the forms to work.

use axum::response::{Html, IntoResponse, Redirect, Response};

use super::extract::CurrentUser;

fn shell(title: &str, body: &str) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html>\n<html>\n<head><title>{title} - WatchBuddy</title></head>\n<body>\n{body}\n</body>\n</html>"
    ))
}

fn error_line(error: Option<&str>) -> String {
    match error {
        Some(msg) => format!("<p class=\"error\">{msg}</p>"),
        None => String::new(),
    }
}

pub fn login_html(error: Option<&str>) -> Html<String> {
    let body = format!(
        "<h1>Log in</h1>\n{}\n<form method=\"post\" action=\"/login\">\n\
         <input name=\"username\" placeholder=\"Username\" required>\n\
         <input name=\"password\" type=\"password\" placeholder=\"Password\" required>\n\
         <button type=\"submit\">Log in</button>\n</form>\n\
         <a href=\"/signup\">Create an account</a>",
        error_line(error)
    );
    shell("Log in", &body)
}

pub fn signup_html(error: Option<&str>) -> Html<String> {
    let body = format!(
        "<h1>Sign up</h1>\n{}\n<form method=\"post\" action=\"/signup\">\n\
         <input name=\"username\" placeholder=\"Username\" required>\n\
         <input name=\"email\" type=\"email\" placeholder=\"Email\" required>\n\
         <input name=\"password\" type=\"password\" placeholder=\"Password\" required>\n\
         <input name=\"confirm_password\" type=\"password\" placeholder=\"Confirm password\" required>\n\
         <button type=\"submit\">Sign up</button>\n</form>\n\
         <a href=\"/login\">Already have an account?</a>",
        error_line(error)
    );
    shell("Sign up", &body)
}

/// Public landing page
pub async fn index() -> Html<String> {
    shell(
        "Welcome",
        "<h1>WatchBuddy</h1>\n<p>Browse anime and movies, keep a watchlist, chat with ChatBuddy.</p>\n\
         <a href=\"/login\">Log in</a> or <a href=\"/signup\">sign up</a>",
    )
}

pub async fn login_page() -> Html<String> {
    login_html(None)
}

pub async fn signup_page() -> Html<String> {
    signup_html(None)
}

/// Renders a session-gated page, redirecting anonymous visitors to the login
/// page
fn gated(user: Option<CurrentUser>, title: &str) -> Response {
    match user {
        Some(user) => shell(
            title,
            &format!(
                "<h1>{title}</h1>\n<p>Signed in as {}</p>\n<a href=\"/logout\">Log out</a>",
                user.username
            ),
        )
        .into_response(),
        None => Redirect::to("/login").into_response(),
    }
}

pub async fn anime(user: Option<CurrentUser>) -> Response {
    gated(user, "Anime")
}

pub async fn movies(user: Option<CurrentUser>) -> Response {
    gated(user, "Movies")
}

pub async fn genres(user: Option<CurrentUser>) -> Response {
    gated(user, "Genres")
}

pub async fn chat(user: Option<CurrentUser>) -> Response {
    gated(user, "Chat")
}

pub async fn trending(user: Option<CurrentUser>) -> Response {
    gated(user, "Trending")
}

pub async fn watchlist(user: Option<CurrentUser>) -> Response {
    gated(user, "Watchlist")
}
