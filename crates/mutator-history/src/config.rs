//! Configuration for the history engine.

use crate::error::{MutatorError, Result};
use serde::{Deserialize, Serialize};

/// Default number of undo entries retained before eviction starts.
pub const DEFAULT_LIMIT: usize = 50;

/// Configuration for a [`Mutator`](crate::Mutator).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MutatorConfig {
    /// Maximum undo entries kept replayable. Older entries are folded into
    /// the base snapshot and can no longer be undone.
    pub limit: usize,
}

impl Default for MutatorConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
        }
    }
}

impl MutatorConfig {
    /// Create a configuration with the given history limit.
    pub fn with_limit(limit: usize) -> Self {
        Self { limit }
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the limit is positive.
    pub fn validate(&self) -> Result<()> {
        if self.limit == 0 {
            return Err(MutatorError::InvalidConfig(
                "limit must be a positive integer".to_string(),
            ));
        }
        Ok(())
    }

    /// The limit the engine actually enforces: zero falls back to
    /// [`DEFAULT_LIMIT`].
    pub fn effective_limit(&self) -> usize {
        normalize_limit(self.limit)
    }
}

pub(crate) fn normalize_limit(limit: usize) -> usize {
    if limit == 0 {
        DEFAULT_LIMIT
    } else {
        limit
    }
}

/// Builder for engine configuration.
pub struct MutatorConfigBuilder {
    config: MutatorConfig,
}

impl MutatorConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: MutatorConfig::default(),
        }
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.config.limit = limit;
        self
    }

    pub fn build(self) -> MutatorConfig {
        self.config
    }
}

impl Default for MutatorConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
