use sqlx::SqlitePool;
use tracing::info;

use crate::models::CatalogItem;

const ANIME_SEED: &str = include_str!("../../assets/seed/anime.json");
const MOVIES_SEED: &str = include_str!("../../assets/seed/movies.json");

/// Populates the catalog tables from the embedded dataset.
///
/// Idempotent: each table is only filled when it is empty, so restarting the
/// server never duplicates or overwrites catalog rows.
pub async fn seed(pool: &SqlitePool) -> anyhow::Result<()> {
    seed_table(pool, "anime", ANIME_SEED).await?;
    seed_table(pool, "movies", MOVIES_SEED).await?;
    Ok(())
}

async fn seed_table(pool: &SqlitePool, table: &str, raw: &str) -> anyhow::Result<()> {
    let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await?;
    if count > 0 {
        return Ok(());
    }

    let items: Vec<CatalogItem> = serde_json::from_str(raw)?;
    let rows = items.len();

    let mut tx = pool.begin().await?;
    for item in items {
        let query = if table == "movies" {
            sqlx::query(
                "INSERT INTO movies (id, title, year, rating, image, modal_image, category, description, insights, director, duration)
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            )
            .bind(item.id)
            .bind(item.title)
            .bind(item.year)
            .bind(item.rating)
            .bind(item.image)
            .bind(item.modal_image)
            .bind(item.category)
            .bind(item.description)
            .bind(item.insights)
            .bind(item.director)
            .bind(item.duration)
        } else {
            sqlx::query(
                "INSERT INTO anime (id, title, year, rating, image, modal_image, category, description, insights)
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
            )
            .bind(item.id)
            .bind(item.title)
            .bind(item.year)
            .bind(item.rating)
            .bind(item.image)
            .bind(item.modal_image)
            .bind(item.category)
            .bind(item.description)
            .bind(item.insights)
        };
        query.execute(&mut *tx).await?;
    }
    tx.commit().await?;

    info!(table, rows, "seeded catalog table");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, migrate};

    #[tokio::test]
    async fn test_seed_fills_empty_tables_once() {
        let pool = create_pool("sqlite::memory:").await.unwrap();
        migrate(&pool).await.unwrap();

        seed(&pool).await.unwrap();
        let anime: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM anime")
            .fetch_one(&pool)
            .await
            .unwrap();
        let movies: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM movies")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(anime, 75);
        assert_eq!(movies, 26);

        // Running again must not duplicate anything
        seed(&pool).await.unwrap();
        let anime_again: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM anime")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(anime_again, 75);
    }

    #[test]
    fn test_embedded_datasets_parse() {
        let anime: Vec<CatalogItem> = serde_json::from_str(ANIME_SEED).unwrap();
        let movies: Vec<CatalogItem> = serde_json::from_str(MOVIES_SEED).unwrap();
        assert!(anime.iter().all(|a| a.director.is_none()));
        assert!(movies.iter().all(|m| m.director.is_some() && m.duration.is_some()));
    }
}
