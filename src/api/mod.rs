pub mod auth;
pub mod catalog;
pub mod chat;
pub mod extract;
pub mod pages;
pub mod routes;
pub mod state;
pub mod watchlist;

pub use routes::create_router;
pub use state::AppState;
