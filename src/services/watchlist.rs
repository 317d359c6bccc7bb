use sqlx::SqlitePool;
use tracing::info;

use crate::error::{AppError, AppResult};
use crate::models::WatchlistEntry;

/// Snapshot of display fields captured when an item is saved
#[derive(Debug, Clone)]
pub struct NewEntry {
    pub anime_id: i64,
    pub title: String,
    pub year: Option<String>,
    pub rating: Option<String>,
    pub image: Option<String>,
}

/// Saves a catalog item to the user's watchlist.
///
/// At most one entry may exist per (user, item) pair; a second add for the
/// same pair fails with [`AppError::Conflict`] and leaves the stored row
/// untouched.
pub async fn add(pool: &SqlitePool, user_id: i64, entry: NewEntry) -> AppResult<WatchlistEntry> {
    let result = sqlx::query_as::<_, WatchlistEntry>(
        "INSERT INTO watchlist (user_id, anime_id, title, year, rating, image)
         VALUES (?, ?, ?, ?, ?, ?)
         RETURNING id, user_id, anime_id, title, year, rating, image, added_at",
    )
    .bind(user_id)
    .bind(entry.anime_id)
    .bind(&entry.title)
    .bind(&entry.year)
    .bind(&entry.rating)
    .bind(&entry.image)
    .fetch_one(pool)
    .await;

    match result {
        Ok(saved) => {
            info!(user_id, anime_id = saved.anime_id, "added watchlist entry");
            Ok(saved)
        }
        Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
            Err(AppError::Conflict("Already in watchlist".to_string()))
        }
        Err(e) => Err(e.into()),
    }
}

/// Removes an entry, but only if it belongs to the requesting user
pub async fn remove(pool: &SqlitePool, user_id: i64, entry_id: i64) -> AppResult<()> {
    let result = sqlx::query("DELETE FROM watchlist WHERE id = ? AND user_id = ?")
        .bind(entry_id)
        .bind(user_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Item not found".to_string()));
    }

    info!(user_id, entry_id, "removed watchlist entry");
    Ok(())
}

/// Returns the user's entries, most recently added first
pub async fn list(pool: &SqlitePool, user_id: i64) -> AppResult<Vec<WatchlistEntry>> {
    let entries = sqlx::query_as::<_, WatchlistEntry>(
        "SELECT id, user_id, anime_id, title, year, rating, image, added_at
         FROM watchlist
         WHERE user_id = ?
         ORDER BY added_at DESC, id DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, migrate};
    use crate::models::NewUser;
    use crate::services::auth;

    async fn pool_with_users() -> (SqlitePool, i64, i64) {
        let pool = create_pool("sqlite::memory:").await.unwrap();
        migrate(&pool).await.unwrap();
        let mut ids = Vec::new();
        for name in ["mika", "rin"] {
            let user = auth::signup(
                &pool,
                &NewUser {
                    username: name.to_string(),
                    email: format!("{}@example.com", name),
                    password: "pw".to_string(),
                },
            )
            .await
            .unwrap();
            ids.push(user.id);
        }
        (pool, ids[0], ids[1])
    }

    fn one_piece() -> NewEntry {
        NewEntry {
            anime_id: 1,
            title: "One Piece".to_string(),
            year: Some("1999".to_string()),
            rating: Some("8.75".to_string()),
            image: Some("https://example.com/op.jpg".to_string()),
        }
    }

    #[tokio::test]
    async fn test_duplicate_add_conflicts_and_keeps_one_row() {
        let (pool, mika, _) = pool_with_users().await;

        add(&pool, mika, one_piece()).await.unwrap();
        let second = add(&pool, mika, one_piece()).await;
        assert!(matches!(second, Err(AppError::Conflict(_))));

        assert_eq!(list(&pool, mika).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_same_item_for_two_users_is_fine() {
        let (pool, mika, rin) = pool_with_users().await;
        add(&pool, mika, one_piece()).await.unwrap();
        add(&pool, rin, one_piece()).await.unwrap();
        assert_eq!(list(&pool, mika).await.unwrap().len(), 1);
        assert_eq!(list(&pool, rin).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_remove_only_own_entries() {
        let (pool, mika, rin) = pool_with_users().await;
        let entry = add(&pool, mika, one_piece()).await.unwrap();

        // Another user cannot remove it
        let denied = remove(&pool, rin, entry.id).await;
        assert!(matches!(denied, Err(AppError::NotFound(_))));
        assert_eq!(list(&pool, mika).await.unwrap().len(), 1);

        remove(&pool, mika, entry.id).await.unwrap();
        assert!(list(&pool, mika).await.unwrap().is_empty());

        // Entry is gone now
        let missing = remove(&pool, mika, entry.id).await;
        assert!(matches!(missing, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_list_is_newest_first() {
        let (pool, mika, _) = pool_with_users().await;
        add(&pool, mika, one_piece()).await.unwrap();
        let mut bleach = one_piece();
        bleach.anime_id = 2;
        bleach.title = "Bleach".to_string();
        add(&pool, mika, bleach).await.unwrap();

        let entries = list(&pool, mika).await.unwrap();
        assert_eq!(entries[0].title, "Bleach");
        assert_eq!(entries[1].title, "One Piece");
    }
}
