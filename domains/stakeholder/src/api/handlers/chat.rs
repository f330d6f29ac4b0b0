//! Stakeholder chat handlers

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN,
        },
        StatusCode,
    },
    response::IntoResponse,
    Json,
};
use serde_json::Value;

use crate::api::middleware::StakeholderState;
use crate::domain::entities::{ChatRequest, ChatResponse};
use crate::domain::responder::ReplyRequest;
use crate::error::ChatError;

/// CORS preflight
pub async fn preflight() -> impl IntoResponse {
    (
        StatusCode::OK,
        [
            (ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (ACCESS_CONTROL_ALLOW_METHODS, "POST, OPTIONS"),
            (ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type, Authorization"),
        ],
    )
}

/// Every method other than POST and OPTIONS
pub async fn method_not_allowed() -> ChatError {
    ChatError::MethodNotAllowed
}

/// Answer a stakeholder message.
///
/// No authentication is enforced yet; add an auth extractor here once the
/// stakeholder portal issues credentials.
pub async fn send_message(
    State(state): State<StakeholderState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<impl IntoResponse, ChatError> {
    let body = body?;
    let payload: Value = serde_json::from_slice(&body)?;
    // Valid JSON that is not an object (`null`, `[]`, `"hi"`) has no message,
    // so it is a 400 rather than a 500. Only unparseable bodies are internal errors.
    let request = ChatRequest::from_value(&payload)?;

    let conversation_id = request.conversation_id_or_new();

    let message = state
        .responder
        .reply(ReplyRequest {
            conversation_id: conversation_id.clone(),
            system_prompt: state.system_prompt.to_string(),
            message: request.message,
        })
        .await?;

    tracing::info!(
        conversation_id = %conversation_id,
        resumed = request.conversation_id.is_some(),
        "Stakeholder message answered"
    );

    Ok((
        StatusCode::OK,
        [(ACCESS_CONTROL_ALLOW_ORIGIN, "*")],
        Json(ChatResponse {
            conversation_id,
            message,
        }),
    ))
}
