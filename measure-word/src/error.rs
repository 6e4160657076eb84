//! # Error Types for Constraint Words

use thiserror::Error;

use crate::encoding::MAX_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MeasureError {
    #[error("Size out of range: {size} (valid range: 0-{max})", max = MAX_SIZE)]
    OutOfRange { size: i64 },

    #[error("Unknown sizing mode tag: {tag:#04b}")]
    UnknownMode { tag: u32 },
}

impl MeasureError {
    /// Both kinds stem from caller input; nothing here is fatal
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            MeasureError::OutOfRange { .. } | MeasureError::UnknownMode { .. }
        )
    }

    /// True when the offending word did not come from the encoder
    pub fn is_foreign_word(&self) -> bool {
        matches!(self, MeasureError::UnknownMode { .. })
    }
}

pub type Result<T> = std::result::Result<T, MeasureError>;
