//! The packed constraint word and its codec operations

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::{CodecConfig, OverflowPolicy};
use crate::encoding::{extract_mode_tag, extract_size, pack, MAX_SIZE};
use crate::error::{MeasureError, Result};
use crate::mode::SizingMode;

/// A sizing mode and a 30-bit size packed into one `u32`
///
/// Words built through [`ConstraintWord::encode`] always carry an assigned
/// mode tag. [`ConstraintWord::from_raw`] accepts any bit pattern, so
/// [`ConstraintWord::mode`] stays fallible.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConstraintWord(u32);

impl ConstraintWord {
    /// Pack `size` and `mode`, rejecting sizes outside `[0, MAX_SIZE]`
    #[inline]
    pub fn encode(size: impl Into<i64>, mode: SizingMode) -> Result<Self> {
        Self::encode_with(size, mode, &CodecConfig::STRICT)
    }

    /// Pack `size` and `mode` under the given overflow policy
    pub fn encode_with(
        size: impl Into<i64>,
        mode: SizingMode,
        config: &CodecConfig,
    ) -> Result<Self> {
        let size = size.into();
        let size = match config.overflow {
            OverflowPolicy::Reject => {
                if !(0..=MAX_SIZE as i64).contains(&size) {
                    return Err(MeasureError::OutOfRange { size });
                }
                size as u32
            }
            OverflowPolicy::Clamp => CodecConfig::clamp(size),
        };
        Ok(Self(pack(mode.tag(), size)))
    }

    pub fn exact(size: impl Into<i64>) -> Result<Self> {
        Self::encode(size, SizingMode::Exact)
    }

    pub fn at_most(size: impl Into<i64>) -> Result<Self> {
        Self::encode(size, SizingMode::AtMost)
    }

    /// Unconstrained word with an advisory size of zero
    pub const fn unconstrained() -> Self {
        Self(pack(SizingMode::Unconstrained.tag(), 0))
    }

    /// Wrap an arbitrary bit pattern without validation
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Low 30 bits, for any word
    #[inline]
    pub const fn size(self) -> u32 {
        extract_size(self.0)
    }

    /// Raw 2-bit mode tag, including the reserved one
    #[inline]
    pub const fn mode_tag(self) -> u32 {
        extract_mode_tag(self.0)
    }

    /// Sizing mode, or `UnknownMode` for the reserved tag
    #[inline]
    pub fn mode(self) -> Result<SizingMode> {
        let tag = self.mode_tag();
        SizingMode::from_tag(tag).ok_or(MeasureError::UnknownMode { tag })
    }

    /// Same mode, different size
    pub fn with_size(self, size: impl Into<i64>) -> Result<Self> {
        Self::encode(size, self.mode()?)
    }

    /// `"<Mode> <size>"`, e.g. `"AtMost 30"`
    pub fn format(self) -> Result<String> {
        let mode = self.mode()?;
        Ok(format!("{} {}", mode.name(), self.size()))
    }
}

impl Default for ConstraintWord {
    fn default() -> Self {
        Self::unconstrained()
    }
}

impl From<ConstraintWord> for u32 {
    fn from(word: ConstraintWord) -> Self {
        word.raw()
    }
}

/// Renders like [`ConstraintWord::format`]; words with the reserved tag
/// show as `Unknown(0b11) <size>` instead of failing.
impl fmt::Display for ConstraintWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mode() {
            Ok(mode) => write!(f, "{} {}", mode, self.size()),
            Err(_) => write!(f, "Unknown({:#04b}) {}", self.mode_tag(), self.size()),
        }
    }
}

// ============================================================================
// Free-function codec API
// ============================================================================

#[inline]
pub fn encode(size: impl Into<i64>, mode: SizingMode) -> Result<ConstraintWord> {
    ConstraintWord::encode(size, mode)
}

#[inline]
pub fn decode_size(word: ConstraintWord) -> u32 {
    word.size()
}

#[inline]
pub fn decode_mode(word: ConstraintWord) -> Result<SizingMode> {
    word.mode()
}

pub fn format(word: ConstraintWord) -> Result<String> {
    word.format()
}
