use chrono::NaiveDateTime;
use serde::Serialize;

/// A user's saved reference to a catalog item.
///
/// Display fields are a snapshot taken at add time and are not kept in sync
/// with later catalog changes. At most one entry exists per (user, item) pair.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct WatchlistEntry {
    pub id: i64,
    #[serde(skip_serializing)]
    pub user_id: i64,
    pub anime_id: i64,
    pub title: String,
    pub year: Option<String>,
    pub rating: Option<String>,
    pub image: Option<String>,
    pub added_at: NaiveDateTime,
}
