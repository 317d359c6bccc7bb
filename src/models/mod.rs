pub mod catalog;
pub mod session;
pub mod user;
pub mod watchlist;

pub use catalog::{CatalogItem, MediaKind};
pub use session::Session;
pub use user::{NewUser, User};
pub use watchlist::WatchlistEntry;
