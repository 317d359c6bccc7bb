use sqlx::SqlitePool;

use crate::error::AppResult;
use crate::models::{CatalogItem, MediaKind};

/// Returns every row of the given catalog table in natural storage order
pub async fn list(pool: &SqlitePool, kind: MediaKind) -> AppResult<Vec<CatalogItem>> {
    let items =
        sqlx::query_as::<_, CatalogItem>(&format!("SELECT * FROM {}", kind.table()))
            .fetch_all(pool)
            .await?;
    Ok(items)
}

/// Finds the first catalog item whose title contains the given fragment,
/// case-insensitively. Anime are searched before movies; first match wins.
pub async fn find_by_title_fragment(
    pool: &SqlitePool,
    fragment: &str,
) -> AppResult<Option<CatalogItem>> {
    let pattern = format!("%{}%", fragment);

    for kind in [MediaKind::Anime, MediaKind::Movie] {
        let item = sqlx::query_as::<_, CatalogItem>(&format!(
            "SELECT * FROM {} WHERE LOWER(title) LIKE ? LIMIT 1",
            kind.table()
        ))
        .bind(&pattern)
        .fetch_optional(pool)
        .await?;

        if item.is_some() {
            return Ok(item);
        }
    }

    Ok(None)
}

/// Picks up to `limit` random rows, optionally filtered by a genre keyword
/// against the free-text category tags
pub async fn random_by_genre(
    pool: &SqlitePool,
    kind: MediaKind,
    genre: Option<&str>,
    limit: i64,
) -> AppResult<Vec<CatalogItem>> {
    let items = match genre {
        Some(genre) => {
            sqlx::query_as::<_, CatalogItem>(&format!(
                "SELECT * FROM {} WHERE category LIKE ? ORDER BY RANDOM() LIMIT ?",
                kind.table()
            ))
            .bind(format!("%{}%", genre))
            .bind(limit)
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, CatalogItem>(&format!(
                "SELECT * FROM {} ORDER BY RANDOM() LIMIT ?",
                kind.table()
            ))
            .bind(limit)
            .fetch_all(pool)
            .await?
        }
    };
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, migrate, seed};

    async fn seeded_pool() -> SqlitePool {
        let pool = create_pool("sqlite::memory:").await.unwrap();
        migrate(&pool).await.unwrap();
        seed(&pool).await.unwrap();
        pool
    }

    #[tokio::test]
    async fn test_list_returns_full_tables() {
        let pool = seeded_pool().await;
        assert_eq!(list(&pool, MediaKind::Anime).await.unwrap().len(), 75);
        assert_eq!(list(&pool, MediaKind::Movie).await.unwrap().len(), 26);
    }

    #[tokio::test]
    async fn test_find_by_title_fragment_prefers_anime() {
        let pool = seeded_pool().await;

        let item = find_by_title_fragment(&pool, "one piece").await.unwrap();
        assert_eq!(item.unwrap().title, "One Piece");

        // A movie-only title still resolves through the second table
        let item = find_by_title_fragment(&pool, "spirited away").await.unwrap();
        let item = item.unwrap();
        assert_eq!(item.title, "Spirited Away");
        assert!(item.director.is_some());

        let none = find_by_title_fragment(&pool, "definitely not a title").await.unwrap();
        assert!(none.is_none());
    }

    #[tokio::test]
    async fn test_random_by_genre_filters_and_limits() {
        let pool = seeded_pool().await;

        let picks = random_by_genre(&pool, MediaKind::Anime, Some("action"), 3)
            .await
            .unwrap();
        assert!(!picks.is_empty() && picks.len() <= 3);
        assert!(picks.iter().all(|item| item.has_category("action")));

        let none = random_by_genre(&pool, MediaKind::Anime, Some("telenovela"), 3)
            .await
            .unwrap();
        assert!(none.is_empty());
    }
}
