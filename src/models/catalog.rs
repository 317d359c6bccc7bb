use serde::{Deserialize, Serialize};

/// Which catalog table a query targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Anime,
    Movie,
}

impl MediaKind {
    /// Table backing this kind of catalog item
    pub fn table(&self) -> &'static str {
        match self {
            MediaKind::Anime => "anime",
            MediaKind::Movie => "movies",
        }
    }
}

/// An anime or movie record shown in listings.
///
/// Immutable reference data populated once at first run. `year` and `rating`
/// are opaque display text (ratings in the dataset are sometimes percentages),
/// and `category` is comma-separated free text. `director` and `duration` are
/// only present for movies.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, PartialEq)]
pub struct CatalogItem {
    pub id: i64,
    pub title: String,
    pub year: Option<String>,
    pub rating: Option<String>,
    pub image: String,
    #[serde(rename = "modalImage")]
    pub modal_image: String,
    pub category: String,
    pub description: String,
    pub insights: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[sqlx(default)]
    pub director: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[sqlx(default)]
    pub duration: Option<String>,
}

impl CatalogItem {
    /// Case-insensitive check whether the category tags contain the genre
    pub fn has_category(&self, genre: &str) -> bool {
        self.category.to_lowercase().contains(&genre.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> CatalogItem {
        CatalogItem {
            id: 1,
            title: "One Piece".to_string(),
            year: Some("1999".to_string()),
            rating: Some("8.75".to_string()),
            image: "https://example.com/op.jpg".to_string(),
            modal_image: "https://example.com/op-large.jpg".to_string(),
            category: "Popular,Adventure,Fantasy,Action,Shonen".to_string(),
            description: "Pirates.".to_string(),
            insights: "A monumental saga.".to_string(),
            director: None,
            duration: None,
        }
    }

    #[test]
    fn test_serializes_modal_image_camel_case() {
        let json = serde_json::to_value(item()).unwrap();
        assert!(json.get("modalImage").is_some());
        assert!(json.get("modal_image").is_none());
        // Anime rows carry no movie-only fields
        assert!(json.get("director").is_none());
    }

    #[test]
    fn test_deserializes_seed_shape() {
        let raw = r#"{
            "id": 76,
            "title": "Weathering With You",
            "year": "2019",
            "rating": "7.5",
            "image": "i.jpg",
            "modalImage": "m.jpg",
            "category": "fantasy,romance",
            "description": "d",
            "insights": "i",
            "director": "Makoto Shinkai",
            "duration": "112 min"
        }"#;
        let item: CatalogItem = serde_json::from_str(raw).unwrap();
        assert_eq!(item.director.as_deref(), Some("Makoto Shinkai"));
    }

    #[test]
    fn test_has_category_is_case_insensitive() {
        assert!(item().has_category("action"));
        assert!(item().has_category("Shonen"));
        assert!(!item().has_category("romance"));
    }
}
