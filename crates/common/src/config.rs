//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

/// Default HTTP port for the local server
pub const DEFAULT_PORT: u16 = 3000;

/// Default `tracing-subscriber` filter directive
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Stakeholder chat overrides; `None` keeps the built-in defaults
    pub stakeholder_system_prompt: Option<String>,
    pub stakeholder_reply: Option<String>,

    /// Log filter directive (`RUST_LOG` syntax) for the binaries' subscriber
    pub rust_log: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match var("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid port number, got {raw:?}"))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            stakeholder_system_prompt: var("STAKEHOLDER_SYSTEM_PROMPT"),
            stakeholder_reply: var("STAKEHOLDER_REPLY"),

            rust_log: var("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            port,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stakeholder_system_prompt: None,
            stakeholder_reply: None,
            rust_log: DEFAULT_LOG_FILTER.to_string(),
            port: DEFAULT_PORT,
        }
    }
}
