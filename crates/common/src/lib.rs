//! Shared utilities, configuration, and error handling for Forge
//!
//! This crate provides common functionality used across the Forge application:
//! - Configuration management following 12-factor principles
//! - Error types and handling
//! - Phase transition errors

pub mod config;
pub mod error;
pub mod state;

pub use config::Config;
pub use error::{Error, Result};
pub use state::StateError;
