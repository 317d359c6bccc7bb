use axum::{
    http::StatusCode,
    routing::{delete, get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use super::{auth, catalog, chat, pages, watchlist, AppState};

/// Creates the main application router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // Pages
        .route("/", get(pages::index))
        .route("/login", get(pages::login_page).post(auth::login))
        .route("/signup", get(pages::signup_page).post(auth::signup))
        .route("/logout", get(auth::logout))
        .route("/anime", get(pages::anime))
        .route("/movies", get(pages::movies))
        .route("/genres", get(pages::genres))
        .route("/chat", get(pages::chat))
        .route("/trending", get(pages::trending))
        .route("/watchlist", get(pages::watchlist))
        // Catalog
        .route("/api/anime", get(catalog::list_anime))
        .route("/api/movies", get(catalog::list_movies))
        // Chat assistant
        .route("/chatbot", post(chat::chatbot))
        // Watchlist
        .route("/add_to_watchlist", post(watchlist::add))
        .route("/remove_from_watchlist/:id", delete(watchlist::remove))
        .route("/get_watchlist", get(watchlist::get))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> StatusCode {
    StatusCode::OK
}
