//! # Constraint Word Bit Layout
//!
//! Centralized constants and raw helpers for code that inspects words
//! directly instead of going through [`ConstraintWord`](crate::ConstraintWord).
//!
//! ```text
//! [mode:2][size:30]
//! ```
//!
//! None of these helpers validate anything. `pack` masks its inputs, so a
//! caller that needs range checking must use
//! [`ConstraintWord::encode`](crate::ConstraintWord::encode).

// ============================================================================
// Bit Position Constants
// ============================================================================

/// Mode field: bits 30-31 (2 bits)
pub const MODE_SHIFT: u32 = 30;

/// Size field: bits 0-29 (30 bits)
pub const SIZE_SHIFT: u32 = 0;

// ============================================================================
// Field Masks
// ============================================================================

/// Mode tag mask before shifting (2 bits)
pub const MODE_TAG_MASK: u32 = 0x3;

/// Mode field mask in place
pub const MODE_MASK: u32 = MODE_TAG_MASK << MODE_SHIFT;

/// Size field mask (30 bits)
pub const SIZE_MASK: u32 = (1 << MODE_SHIFT) - 1;

/// Largest size a word can carry (2^30 - 1)
pub const MAX_SIZE: u32 = SIZE_MASK;

// ============================================================================
// Mode Tags
// ============================================================================

pub const TAG_UNCONSTRAINED: u32 = 0b00;
pub const TAG_EXACT: u32 = 0b01;
pub const TAG_AT_MOST: u32 = 0b10;

/// Never produced by the encoder
pub const TAG_RESERVED: u32 = 0b11;

// ============================================================================
// Field Extraction
// ============================================================================

/// Extract the 2-bit mode tag (bits 30-31)
#[inline]
pub const fn extract_mode_tag(word: u32) -> u32 {
    (word >> MODE_SHIFT) & MODE_TAG_MASK
}

/// Extract the size field (bits 0-29)
#[inline]
pub const fn extract_size(word: u32) -> u32 {
    (word >> SIZE_SHIFT) & SIZE_MASK
}

// ============================================================================
// Packing
// ============================================================================

/// Pack a tag and a size. Both are masked to their field width.
#[inline]
pub const fn pack(tag: u32, size: u32) -> u32 {
    ((tag & MODE_TAG_MASK) << MODE_SHIFT) | ((size & SIZE_MASK) << SIZE_SHIFT)
}

/// Replace the size field, keeping the mode bits
#[inline]
pub const fn with_size(word: u32, size: u32) -> u32 {
    (word & MODE_MASK) | (size & SIZE_MASK)
}

/// Check whether a tag is one of the three assigned modes
#[inline]
pub const fn is_assigned_tag(tag: u32) -> bool {
    tag == TAG_UNCONSTRAINED || tag == TAG_EXACT || tag == TAG_AT_MOST
}
