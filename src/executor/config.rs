//! HTTP request execution configuration.

use crate::config::RestClientConfig;
use serde::{Deserialize, Serialize};

/// Settings applied to every executed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionConfig {
    /// `Content-Type` used unless the request sets its own.
    pub default_content_type: String,

    /// `User-Agent` sent with every request.
    pub user_agent: String,
}

impl ExecutionConfig {
    pub fn new(default_content_type: impl Into<String>, user_agent: impl Into<String>) -> Self {
        Self {
            default_content_type: default_content_type.into(),
            user_agent: user_agent.into(),
        }
    }
}

impl From<&RestClientConfig> for ExecutionConfig {
    fn from(config: &RestClientConfig) -> Self {
        Self {
            default_content_type: config.default_content_type.clone(),
            user_agent: config.user_agent.clone(),
        }
    }
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self::from(&RestClientConfig::default())
    }
}
