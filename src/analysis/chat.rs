//! Follow-up chat grounded in the current analysis result.
//!
//! The session is grounded once at creation — the full result is
//! serialized into the system instruction — and each turn is a single
//! request/response against the generative API. History is not replayed
//! locally; whatever continuity exists beyond the grounding context is
//! the remote service's concern. A failed turn degrades to a fixed
//! apology so the conversation thread is never broken.

use std::sync::Arc;

use serde::Serialize;
use uuid::Uuid;

use crate::models::AnalysisResult;

use super::gemini::GenerativeClient;
use super::prompt::chat_system_instruction;

/// Opening message seeded into every new session.
pub const GREETING: &str = "I've analyzed your results. Do you have any specific questions \
about your metrics, or would you like advice on how to improve them?";

/// Reply shown when a turn fails; the error never propagates.
pub const TURN_FAILED_REPLY: &str = "Sorry, I encountered an error. Please try asking again.";

/// Reply shown when the model returns an empty response.
pub const EMPTY_REPLY: &str = "I apologize, I couldn't generate a response at the moment.";

/// Canned starter questions for the empty chat state.
pub const SUGGESTED_QUESTIONS: &[&str] = &[
    "What do my results mean?",
    "How can I improve my low values?",
    "What foods should I avoid?",
    "Is my cholesterol okay?",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: ChatRole,
    pub text: String,
    pub timestamp: String,
}

impl ChatMessage {
    fn new(role: ChatRole, text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            text,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// One conversation, grounded in one analysis result.
pub struct ChatSession {
    client: Arc<dyn GenerativeClient>,
    system_instruction: String,
    messages: Vec<ChatMessage>,
}

impl ChatSession {
    /// Ground a new session with the result and seed the greeting.
    pub fn new(client: Arc<dyn GenerativeClient>, result: &AnalysisResult) -> Self {
        Self {
            client,
            system_instruction: chat_system_instruction(result),
            messages: vec![ChatMessage::new(ChatRole::Model, GREETING.to_string())],
        }
    }

    /// One chat turn. Always returns a model reply — remote failures are
    /// absorbed into [`TURN_FAILED_REPLY`], empty responses into
    /// [`EMPTY_REPLY`]; both are appended to the transcript like any
    /// other reply.
    pub async fn send(&mut self, user_text: &str) -> String {
        self.messages
            .push(ChatMessage::new(ChatRole::User, user_text.to_string()));

        let reply = match self.client.reply(&self.system_instruction, user_text).await {
            Ok(text) if text.trim().is_empty() => EMPTY_REPLY.to_string(),
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(error = %e, "chat turn failed, degrading to apology");
                TURN_FAILED_REPLY.to_string()
            }
        };

        self.messages
            .push(ChatMessage::new(ChatRole::Model, reply.clone()));
        reply
    }

    /// Full transcript, oldest first.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }
}
