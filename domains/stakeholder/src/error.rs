//! Stakeholder chat errors
//!
//! The chat contract uses a flat `{"error": "<message>"}` body. Internal
//! failures are logged and reported without detail.

use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::domain::responder::ResponderError;

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Message is required")]
    MessageRequired,

    #[error("Failed to read request body: {0}")]
    Body(#[from] BytesRejection),

    #[error("Malformed request body: {0}")]
    MalformedBody(#[from] serde_json::Error),

    #[error(transparent)]
    Responder(#[from] ResponderError),
}

impl ChatError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ChatError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ChatError::MessageRequired => StatusCode::BAD_REQUEST,
            ChatError::Body(_) | ChatError::MalformedBody(_) | ChatError::Responder(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message exposed to the caller
    pub fn public_message(&self) -> &'static str {
        match self {
            ChatError::MethodNotAllowed => "Method not allowed",
            ChatError::MessageRequired => "Message is required",
            ChatError::Body(_) | ChatError::MalformedBody(_) | ChatError::Responder(_) => {
                "Internal server error"
            }
        }
    }
}

impl IntoResponse for ChatError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "Stakeholder AI error");
        }

        let body = Json(json!({ "error": self.public_message() }));

        (status, body).into_response()
    }
}
