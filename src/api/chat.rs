use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;
use serde_json::json;
use tracing::error;

use super::extract::CurrentUser;
use super::AppState;
use crate::services::chat;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

/// Runs the rule-based responder over a free-text message.
///
/// Storage failures are converted into an apologetic reply rather than a raw
/// error payload; there are no retries.
pub async fn chatbot(
    user: CurrentUser,
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> impl IntoResponse {
    match chat::respond(&state.pool, user.user_id, &request.message).await {
        Ok(reply) => Json(reply).into_response(),
        Err(err) => {
            error!("chatbot error: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "response": "Sorry, I encountered an error. Please try again later."
                })),
            )
                .into_response()
        }
    }
}
