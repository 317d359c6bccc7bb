//! Rule-based chat assistant.
//!
//! Classification is a linear decision list over the lowercased message:
//! greeting, then title lookup, then recommendations, then watchlist view,
//! then a generic fallback. First match wins, and every branch is a single
//! fixed-shape query against the catalog store. There is no NLP here and
//! none is intended.

use serde::Serialize;
use sqlx::SqlitePool;

use crate::error::AppResult;
use crate::models::{CatalogItem, MediaKind, WatchlistEntry};
use crate::services::{catalog, watchlist};

const GREETING_WORDS: &[&str] = &["hello", "hi", "hey", "greetings"];
const RECOMMEND_WORDS: &[&str] = &["recommend", "suggest", "what to watch"];
const WATCHLIST_WORDS: &[&str] = &["show watchlist", "my watchlist", "whats in my watchlist"];

/// Fixed genre vocabulary matched against the free-text category tags
const GENRES: &[&str] = &[
    "action", "fantasy", "romance", "comedy", "drama", "sci-fi", "horror", "shonen", "seinen",
    "shojo",
];

const RECOMMEND_LIMIT: i64 = 3;

/// Assistant reply: a natural-language response plus an optional structured
/// payload whose shape depends on the matched rule
#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub response: String,
    #[serde(flatten)]
    pub payload: Option<ChatPayload>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChatPayload {
    Info { item: CatalogItem },
    Recommendations { results: Vec<CatalogItem> },
    Watchlist { items: Vec<WatchlistEntry> },
}

impl ChatReply {
    fn plain(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            payload: None,
        }
    }
}

fn contains_any(message: &str, words: &[&str]) -> bool {
    words.iter().any(|word| message.contains(word))
}

/// Extracts the first genre keyword present in the message, if any
fn extract_genre(message: &str) -> Option<&'static str> {
    GENRES.iter().find(|genre| message.contains(*genre)).copied()
}

/// Extracts the requested media type, defaulting to anime
fn extract_media_kind(message: &str) -> MediaKind {
    if message.contains("anime") {
        MediaKind::Anime
    } else if message.contains("movie") {
        MediaKind::Movie
    } else {
        MediaKind::Anime
    }
}

/// Classifies a free-text message and produces a reply for the given user.
///
/// Stateless per call; the only state consulted is the catalog store and the
/// caller's watchlist.
pub async fn respond(pool: &SqlitePool, user_id: i64, raw_message: &str) -> AppResult<ChatReply> {
    let message = raw_message.trim().to_lowercase();

    if message.is_empty() {
        return Ok(ChatReply::plain("Please type something so I can help you!"));
    }

    if contains_any(&message, GREETING_WORDS) {
        return Ok(ChatReply::plain(
            "👋 Hello! I'm ChatBuddy, your anime and movie assistant. How can I help you today?",
        ));
    }

    if let Some(item) = catalog::find_by_title_fragment(pool, &message).await? {
        return Ok(title_info_reply(item));
    }

    if contains_any(&message, RECOMMEND_WORDS) {
        return recommend(pool, &message).await;
    }

    if contains_any(&message, WATCHLIST_WORDS) {
        return show_watchlist(pool, user_id).await;
    }

    Ok(ChatReply::plain(
        "I'm here to help you with anime and movie recommendations and information! \
         Try asking about a specific title or asking for recommendations.",
    ))
}

fn title_info_reply(item: CatalogItem) -> ChatReply {
    let mut response = format!(
        "🎥 Here's information about <strong>{}</strong>:\n\n",
        item.title
    );
    response += &format!("📅 Year: {}\n", item.year.as_deref().unwrap_or("unknown"));
    response += &format!("⭐ Rating: {}\n", item.rating.as_deref().unwrap_or("unrated"));
    response += &format!("📝 Description: {}\n", item.description);
    response += &format!("\n💡 Insights: {}\n", item.insights);

    ChatReply {
        response,
        payload: Some(ChatPayload::Info { item }),
    }
}

async fn recommend(pool: &SqlitePool, message: &str) -> AppResult<ChatReply> {
    let genre = extract_genre(message);
    let kind = extract_media_kind(message);

    let results = catalog::random_by_genre(pool, kind, genre, RECOMMEND_LIMIT).await?;

    if results.is_empty() {
        return Ok(ChatReply::plain(
            "I couldn't find any recommendations. Try being more specific!",
        ));
    }

    let mut response = "🎬 Here are some recommendations for you:\n".to_string();
    for item in &results {
        response += &format!(
            "\n- <strong>{}</strong> ({}) ⭐ {}\n{}\n",
            item.title,
            item.year.as_deref().unwrap_or("unknown"),
            item.rating.as_deref().unwrap_or("unrated"),
            item.description
        );
    }

    Ok(ChatReply {
        response,
        payload: Some(ChatPayload::Recommendations { results }),
    })
}

async fn show_watchlist(pool: &SqlitePool, user_id: i64) -> AppResult<ChatReply> {
    let items = watchlist::list(pool, user_id).await?;

    if items.is_empty() {
        return Ok(ChatReply::plain(
            "Your watchlist is empty. Add some anime or movies to get started!",
        ));
    }

    let mut response = "📋 Here's your watchlist:\n\n".to_string();
    for item in &items {
        response += &format!(
            "- <strong>{}</strong> ({}) ⭐ {}\n",
            item.title,
            item.year.as_deref().unwrap_or("unknown"),
            item.rating.as_deref().unwrap_or("unrated")
        );
    }

    Ok(ChatReply {
        response,
        payload: Some(ChatPayload::Watchlist { items }),
    })
}
