pub mod auth;
pub mod catalog;
pub mod chat;
pub mod session;
pub mod watchlist;
