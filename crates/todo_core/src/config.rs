//! Controller configuration.
//!
//! # Responsibility
//! - Define the quit/complete sentinels recognized by the read loop.
//! - Load overrides from environment-style key lookups.
//!
//! # Invariants
//! - Sentinels are non-empty after trimming.
//! - The two sentinels never compare equal (case-insensitive).

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const DEFAULT_QUIT_SENTINEL: &str = "quit";
pub const DEFAULT_COMPLETE_SENTINEL: &str = "done";

pub const QUIT_SENTINEL_ENV: &str = "TODO_QUIT_SENTINEL";
pub const COMPLETE_SENTINEL_ENV: &str = "TODO_COMPLETE_SENTINEL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    EmptySentinel(&'static str),
    DuplicateSentinel(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptySentinel(key) => write!(f, "sentinel `{key}` cannot be empty"),
            Self::DuplicateSentinel(value) => write!(
                f,
                "quit and complete sentinels must differ; both are `{value}`"
            ),
        }
    }
}

impl Error for ConfigError {}

/// Sentinel configuration for `Controller`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    pub quit_sentinel: String,
    pub complete_sentinel: String,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            quit_sentinel: DEFAULT_QUIT_SENTINEL.to_string(),
            complete_sentinel: DEFAULT_COMPLETE_SENTINEL.to_string(),
        }
    }
}

impl ControllerConfig {
    /// Builds a config from a key lookup, falling back to defaults for
    /// missing keys, then validates it.
    ///
    /// The CLI passes `|key| std::env::var(key).ok()`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(value) = lookup(QUIT_SENTINEL_ENV) {
            config.quit_sentinel = value.trim().to_string();
        }
        if let Some(value) = lookup(COMPLETE_SENTINEL_ENV) {
            config.complete_sentinel = value.trim().to_string();
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.quit_sentinel.trim().is_empty() {
            return Err(ConfigError::EmptySentinel(QUIT_SENTINEL_ENV));
        }
        if self.complete_sentinel.trim().is_empty() {
            return Err(ConfigError::EmptySentinel(COMPLETE_SENTINEL_ENV));
        }
        if self
            .quit_sentinel
            .trim()
            .eq_ignore_ascii_case(self.complete_sentinel.trim())
        {
            return Err(ConfigError::DuplicateSentinel(
                self.quit_sentinel.trim().to_string(),
            ));
        }
        Ok(())
    }
}
