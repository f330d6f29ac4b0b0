//! Stakeholder domain state

use std::sync::Arc;

use forge_common::Config;

use crate::domain::entities::DEFAULT_SYSTEM_PROMPT;
use crate::domain::responder::{PlaceholderResponder, StakeholderResponder};

/// Application state for the Stakeholder domain
#[derive(Clone)]
pub struct StakeholderState {
    pub responder: Arc<dyn StakeholderResponder>,
    pub system_prompt: Arc<str>,
}

impl StakeholderState {
    pub fn new(responder: Arc<dyn StakeholderResponder>, system_prompt: impl Into<Arc<str>>) -> Self {
        Self {
            responder,
            system_prompt: system_prompt.into(),
        }
    }

    /// Placeholder responder with any reply/prompt overrides from config
    pub fn from_config(config: &Config) -> Self {
        let responder = match &config.stakeholder_reply {
            Some(reply) => PlaceholderResponder::new(reply.clone()),
            None => PlaceholderResponder::default(),
        };
        let system_prompt = config
            .stakeholder_system_prompt
            .as_deref()
            .unwrap_or(DEFAULT_SYSTEM_PROMPT);

        Self::new(Arc::new(responder), system_prompt)
    }
}

impl Default for StakeholderState {
    fn default() -> Self {
        Self::new(Arc::new(PlaceholderResponder::default()), DEFAULT_SYSTEM_PROMPT)
    }
}
