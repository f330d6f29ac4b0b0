//! Phase transition error types
//!
//! Shared by every crate that models a lifecycle as an explicit phase tag.

use thiserror::Error;

/// Errors that can occur during phase transitions
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StateError {
    #[error("Invalid transition: cannot apply {event} in phase {from}")]
    InvalidTransition { from: String, event: String },

    #[error("Guard condition failed: {0}")]
    GuardFailed(String),
}
