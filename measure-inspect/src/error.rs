//! Inspector errors

use measure_word::MeasureError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InspectError {
    #[error("{0}")]
    Word(#[from] MeasureError),

    #[error("Invalid constraint word at index {index}: 0x{raw:08X}")]
    InvalidWord { index: usize, raw: u32 },
}

pub type Result<T> = std::result::Result<T, InspectError>;
