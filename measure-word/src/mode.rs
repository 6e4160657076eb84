//! Sizing modes carried in the top two bits of a constraint word

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::encoding::{TAG_AT_MOST, TAG_EXACT, TAG_UNCONSTRAINED};

/// How a child must interpret the size that accompanies it
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SizingMode {
    /// No upper bound; the size is advisory
    Unconstrained = TAG_UNCONSTRAINED as u8,
    /// The child must use the size exactly
    Exact = TAG_EXACT as u8,
    /// The child may use up to the size, no more
    AtMost = TAG_AT_MOST as u8,
}

impl SizingMode {
    /// Every assigned mode, in tag order
    pub const ALL: [Self; 3] = [Self::Unconstrained, Self::Exact, Self::AtMost];

    /// 2-bit tag stored in the word
    #[inline]
    pub const fn tag(self) -> u32 {
        self as u32
    }

    /// Look up a mode by tag. The reserved tag `0b11` has no mode.
    #[inline]
    pub const fn from_tag(tag: u32) -> Option<Self> {
        match tag {
            TAG_UNCONSTRAINED => Some(Self::Unconstrained),
            TAG_EXACT => Some(Self::Exact),
            TAG_AT_MOST => Some(Self::AtMost),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Unconstrained => "Unconstrained",
            Self::Exact => "Exact",
            Self::AtMost => "AtMost",
        }
    }

    /// Whether the accompanying size bounds the child
    #[inline]
    pub const fn is_bounded(self) -> bool {
        !matches!(self, Self::Unconstrained)
    }
}

impl fmt::Display for SizingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
