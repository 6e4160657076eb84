//! Resolver configuration

use measure_word::MAX_SIZE;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Settings for [`measure_child`](crate::measure_child)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveConfig {
    /// Largest dimension a child may report on either axis
    pub max_dimension: u32,

    /// Emit per-child trace events
    pub trace: bool,
}

impl Default for ResolveConfig {
    fn default() -> Self {
        Self {
            max_dimension: MAX_SIZE,
            trace: false,
        }
    }
}

impl ResolveConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_dimension > MAX_SIZE {
            return Err(ConfigError::MaxDimensionTooLarge(self.max_dimension));
        }
        Ok(())
    }
}

/// Configuration error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// max_dimension must fit in a constraint word
    MaxDimensionTooLarge(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MaxDimensionTooLarge(value) => {
                write!(f, "max_dimension {} must be at most {}", value, MAX_SIZE)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
