//! API layer for the Stakeholder domain
//!
//! Contains the chat handler, routes, and domain state definition.

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use middleware::StakeholderState;
pub use routes::routes;
