//! # Codec Configuration
//!
//! Hosts decide what happens to sizes that do not fit in 30 bits. The
//! default rejects them; a host that prefers to keep laying out can clamp.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::encoding::MAX_SIZE;

/// Handling of sizes outside `[0, MAX_SIZE]` during encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OverflowPolicy {
    /// Fail with `MeasureError::OutOfRange`
    #[default]
    Reject,
    /// Saturate negatives to 0 and large values to `MAX_SIZE`
    Clamp,
}

/// Encoder configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CodecConfig {
    pub overflow: OverflowPolicy,
}

impl CodecConfig {
    pub const STRICT: Self = Self {
        overflow: OverflowPolicy::Reject,
    };

    pub const CLAMPING: Self = Self {
        overflow: OverflowPolicy::Clamp,
    };

    pub const fn new(overflow: OverflowPolicy) -> Self {
        Self { overflow }
    }

    /// Saturate a size into the encodable range
    #[inline]
    pub const fn clamp(size: i64) -> u32 {
        if size < 0 {
            0
        } else if size > MAX_SIZE as i64 {
            MAX_SIZE
        } else {
            size as u32
        }
    }
}

impl fmt::Display for CodecConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let policy = match self.overflow {
            OverflowPolicy::Reject => "reject",
            OverflowPolicy::Clamp => "clamp",
        };
        write!(f, "CodecConfig {{ overflow: {}, max_size: {} }}", policy, MAX_SIZE)
    }
}
