//! Chat entities for the stakeholder portal

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::error::ChatError;

/// Default instructions handed to the responder
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are the Stakeholder Interface AI for this project.

Your role is to help stakeholders understand the project and capture their feedback.

You CAN:
- Explain the project's North Star and current status
- Answer questions about how features work
- Help stakeholders submit feedback, bugs, or feature requests
- Remember context from this conversation

You CANNOT:
- Execute any actions or tasks
- Access internal team documents
- Make promises about timelines or priorities
- Modify any data except capturing feedback

If asked to do something outside your capabilities, politely explain what you can help with instead.";

/// Canned reply returned until a model integration is wired in
pub const PLACEHOLDER_REPLY: &str =
    "This is the Stakeholder AI placeholder. Implement LLM integration per project requirements.";

/// Chat message role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

impl std::fmt::Display for ChatRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChatRole::User => write!(f, "user"),
            ChatRole::Assistant => write!(f, "assistant"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// Validated chat request
///
/// Parsed from an untyped JSON value so that a missing or non-string
/// `message` surfaces as `MessageRequired` rather than a decode failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatRequest {
    pub conversation_id: Option<String>,
    pub message: String,
}

impl ChatRequest {
    pub fn from_value(value: &Value) -> Result<Self, ChatError> {
        let message = value
            .get("message")
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .ok_or(ChatError::MessageRequired)?;

        let conversation_id = value
            .get("conversation_id")
            .and_then(Value::as_str)
            .filter(|id| !id.is_empty())
            .map(str::to_owned);

        Ok(Self {
            conversation_id,
            message: message.to_owned(),
        })
    }

    /// Caller-supplied conversation id, or a fresh one
    pub fn conversation_id_or_new(&self) -> String {
        self.conversation_id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string())
    }
}

/// Successful chat response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub conversation_id: String,
    pub message: ChatMessage,
}
