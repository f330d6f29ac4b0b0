//! Stakeholder domain: placeholder AI chat for the stakeholder portal
//!
//! The endpoint accepts a message and answers with a canned assistant reply.
//! Model integration plugs in behind [`StakeholderResponder`].

pub mod api;
pub mod domain;
pub mod error;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{
    ChatMessage, ChatRequest, ChatResponse, ChatRole, DEFAULT_SYSTEM_PROMPT, PLACEHOLDER_REPLY,
};
pub use domain::responder::{
    PlaceholderResponder, ReplyRequest, ResponderError, StakeholderResponder,
};
pub use error::ChatError;

// Re-export API types
pub use api::routes;
pub use api::StakeholderState;
