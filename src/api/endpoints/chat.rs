//! Chat endpoints.
//!
//! - `POST /api/chat/send` — one grounded turn; the reply is always a
//!   model message (failures degrade inside the session)
//! - `GET /api/chat/messages` — full transcript
//! - `GET /api/chat/suggestions` — canned starter questions

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::analysis::chat::{ChatMessage, SUGGESTED_QUESTIONS};
use crate::api::error::ApiError;
use crate::api::types::ApiContext;

/// Upper bound on one chat message.
const MAX_MESSAGE_CHARS: usize = 2000;

#[derive(Deserialize)]
pub struct ChatSendRequest {
    pub message: String,
}

#[derive(Serialize)]
pub struct ChatSendResponse {
    pub reply: String,
}

pub async fn send(
    State(ctx): State<ApiContext>,
    Json(req): Json<ChatSendRequest>,
) -> Result<Json<ChatSendResponse>, ApiError> {
    let message = req.message.trim();
    if message.is_empty() {
        return Err(ApiError::BadRequest("Message cannot be empty".into()));
    }
    if message.chars().count() > MAX_MESSAGE_CHARS {
        return Err(ApiError::BadRequest(format!(
            "Message too long (max {MAX_MESSAGE_CHARS} chars)"
        )));
    }

    let mut guard = ctx.core.chat().lock().await;
    let session = guard.as_mut().ok_or(ApiError::NoReport)?;
    let reply = session.send(message).await;

    Ok(Json(ChatSendResponse { reply }))
}

#[derive(Serialize)]
pub struct ChatMessagesResponse {
    pub messages: Vec<ChatMessage>,
}

pub async fn messages(
    State(ctx): State<ApiContext>,
) -> Result<Json<ChatMessagesResponse>, ApiError> {
    let guard = ctx.core.chat().lock().await;
    let session = guard.as_ref().ok_or(ApiError::NoReport)?;
    Ok(Json(ChatMessagesResponse {
        messages: session.messages().to_vec(),
    }))
}

#[derive(Serialize)]
pub struct ChatSuggestionsResponse {
    pub suggestions: &'static [&'static str],
}

pub async fn suggestions() -> Json<ChatSuggestionsResponse> {
    Json(ChatSuggestionsResponse {
        suggestions: SUGGESTED_QUESTIONS,
    })
}
