//! Resolution error types

use measure_word::MeasureError;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("Constraint word error: {0}")]
    Word(#[from] MeasureError),

    #[error("Invalid resolve configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("Measured {axis} of {dimension} exceeds limit {limit}")]
    DimensionTooLarge {
        axis: &'static str,
        dimension: u32,
        limit: u32,
    },
}

pub type Result<T> = std::result::Result<T, ResolveError>;
