//! Responder seam for stakeholder chat
//!
//! The endpoint delegates reply generation to a [`StakeholderResponder`].
//! The shipped [`PlaceholderResponder`] never calls a model.

use crate::domain::entities::{ChatMessage, PLACEHOLDER_REPLY};

/// Errors a responder can report
#[derive(Debug, thiserror::Error)]
pub enum ResponderError {
    #[error("Responder unavailable: {0}")]
    Unavailable(String),

    #[error("Responder failed: {0}")]
    Failed(String),
}

/// Input to a responder
#[derive(Debug, Clone)]
pub struct ReplyRequest {
    pub conversation_id: String,
    pub system_prompt: String,
    pub message: String,
}

/// Produces the assistant reply for a stakeholder message
#[async_trait::async_trait]
pub trait StakeholderResponder: Send + Sync {
    async fn reply(&self, request: ReplyRequest) -> Result<ChatMessage, ResponderError>;
}

/// Responder that always answers with a fixed message
#[derive(Debug, Clone)]
pub struct PlaceholderResponder {
    reply: String,
}

impl PlaceholderResponder {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }
}

impl Default for PlaceholderResponder {
    fn default() -> Self {
        Self::new(PLACEHOLDER_REPLY)
    }
}

#[async_trait::async_trait]
impl StakeholderResponder for PlaceholderResponder {
    async fn reply(&self, request: ReplyRequest) -> Result<ChatMessage, ResponderError> {
        tracing::debug!(
            conversation_id = %request.conversation_id,
            message_len = request.message.len(),
            "Placeholder responder answering stakeholder message"
        );

        Ok(ChatMessage::assistant(self.reply.clone()))
    }
}
