//! Console configuration model.
//!
//! Loaded from `config.toml` by the infrastructure layer. Every field has a
//! default, so an empty or missing file yields the stock behaviour of the
//! mock service.

use serde::{Deserialize, Serialize};

use crate::error::{AssistantError, Result};

/// Root configuration.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Default tracing filter, overridden by `RUST_LOG`
    pub log_level: String,
    pub service: ServiceConfig,
    pub chat: ChatConfig,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            service: ServiceConfig::default(),
            chat: ChatConfig::default(),
        }
    }
}

impl ConsoleConfig {
    pub fn validate(&self) -> Result<()> {
        self.service.validate()?;
        self.chat.validate()?;
        Ok(())
    }
}

/// Behaviour of the simulated assistant service.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ServiceConfig {
    pub min_latency_ms: u64,
    pub max_latency_ms: u64,
    /// Probability in `[0, 1]` that a delete fails with a transient error
    pub delete_failure_rate: f64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            min_latency_ms: 100,
            max_latency_ms: 500,
            delete_failure_rate: 0.1,
        }
    }
}

impl ServiceConfig {
    /// No latency and no injected failures.
    pub fn instant() -> Self {
        Self {
            min_latency_ms: 0,
            max_latency_ms: 0,
            delete_failure_rate: 0.0,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_latency_ms > self.max_latency_ms {
            return Err(AssistantError::config(format!(
                "service.min_latency_ms ({}) exceeds service.max_latency_ms ({})",
                self.min_latency_ms, self.max_latency_ms
            )));
        }
        if !(0.0..=1.0).contains(&self.delete_failure_rate) {
            return Err(AssistantError::config(format!(
                "service.delete_failure_rate must be within [0, 1] (got {})",
                self.delete_failure_rate
            )));
        }
        Ok(())
    }
}

/// Behaviour of the simulated training chat.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ChatConfig {
    pub min_reply_delay_ms: u64,
    pub max_reply_delay_ms: u64,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            min_reply_delay_ms: 1000,
            max_reply_delay_ms: 2000,
        }
    }
}

impl ChatConfig {
    pub fn instant() -> Self {
        Self {
            min_reply_delay_ms: 0,
            max_reply_delay_ms: 0,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_reply_delay_ms > self.max_reply_delay_ms {
            return Err(AssistantError::config(format!(
                "chat.min_reply_delay_ms ({}) exceeds chat.max_reply_delay_ms ({})",
                self.min_reply_delay_ms, self.max_reply_delay_ms
            )));
        }
        Ok(())
    }
}
