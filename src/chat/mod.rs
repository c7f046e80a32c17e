//! Branding assistant chat session
//!
//! The remote API is stateless, so the session owns the conversation: it
//! keeps the append-only history client-side and replays it in full on every
//! send. One session is constructed by the composition root and reused for
//! the life of the process.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::Result;
use crate::gemini::GenerativeService;

/// System instruction seeding every session
pub const SYSTEM_INSTRUCTION: &str = "You are a helpful and friendly branding assistant. \
     Answer questions about branding, marketing, and design.";

/// Reply substituted when a send fails, so the turn is never silently
/// dropped from the conversation.
pub const FALLBACK_REPLY: &str =
    "Sorry, I'm having trouble connecting right now. Please try again in a moment.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

impl ChatRole {
    /// Role name as the generateContent API spells it
    pub fn as_wire_str(&self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Model => "model",
        }
    }
}

/// One turn in the conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

impl ChatMessage {
    pub fn new(role: ChatRole, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
        }
    }
}

/// An ongoing conversation with the branding assistant.
///
/// History is append-only and never reordered or edited. The seed history
/// passed to [`ChatSession::new`] bootstraps the context; all later turns
/// accumulate through [`ChatSession::send`].
pub struct ChatSession {
    service: Arc<dyn GenerativeService>,
    history: Vec<ChatMessage>,
}

impl ChatSession {
    pub fn new(service: Arc<dyn GenerativeService>, seed_history: Vec<ChatMessage>) -> Self {
        Self {
            service,
            history: seed_history,
        }
    }

    /// Send one user turn and return the assistant's reply.
    ///
    /// The user turn is recorded before the request goes out. On failure the
    /// fixed [`FALLBACK_REPLY`] is appended in the assistant's place and the
    /// error is returned, leaving the conversation consistent either way.
    pub async fn send(&mut self, text: impl Into<String>) -> Result<String> {
        self.history.push(ChatMessage::new(ChatRole::User, text));
        debug!(turns = self.history.len(), "sending chat turn");

        match self.service.send_chat(SYSTEM_INSTRUCTION, &self.history).await {
            Ok(reply) => {
                self.history.push(ChatMessage::new(ChatRole::Model, reply.clone()));
                Ok(reply)
            }
            Err(err) => {
                warn!("chat send failed: {err}");
                self.history
                    .push(ChatMessage::new(ChatRole::Model, FALLBACK_REPLY));
                Err(err)
            }
        }
    }

    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }
}
