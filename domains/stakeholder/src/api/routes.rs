//! Route definitions for Stakeholder domain API

use axum::{routing::post, Router};

use super::handlers::chat;
use super::middleware::StakeholderState;

/// Create the stakeholder chat routes.
///
/// The chat handler is served at the router root; the app nests it under
/// its public path.
pub fn routes() -> Router<StakeholderState> {
    Router::new().route(
        "/",
        post(chat::send_message)
            .options(chat::preflight)
            .fallback(chat::method_not_allowed),
    )
}
