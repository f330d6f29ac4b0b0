//! Forge application composition root
//!
//! Composes all domain routers into a single application.

use axum::{extract::DefaultBodyLimit, http::Uri, Router};
use forge_common::{Config, Error};
use forge_stakeholder::StakeholderState;

/// Public path of the stakeholder chat endpoint
pub const STAKEHOLDER_AI_PATH: &str = "/v1/stakeholder-ai";

/// Maximum accepted request body size
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Create the main application router with all routes
pub fn create_app(config: &Config) -> Router {
    let stakeholder_state = StakeholderState::from_config(config);

    Router::new()
        .route("/health", axum::routing::get(health_check))
        .route(
            "/",
            axum::routing::get(|| async { concat!("Forge API v", env!("CARGO_PKG_VERSION")) }),
        )
        .nest(
            STAKEHOLDER_AI_PATH,
            forge_stakeholder::routes().with_state(stakeholder_state),
        )
        .fallback(not_found)
        // Enforced by the body extractors, so handlers keep their own error format
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

async fn not_found(uri: Uri) -> Error {
    Error::NotFound(format!("No route for {}", uri.path()))
}
