//! Raw word decoder

use measure_word::{ConstraintWord, SizingMode};
use crate::error::Result;

/// Split a raw word into its mode and size
pub fn decode(raw: u32) -> Result<(SizingMode, u32)> {
    let word = ConstraintWord::from_raw(raw);
    Ok((word.mode()?, word.size()))
}

/// Accept a raw word only if it carries an assigned mode tag
pub fn decode_word(raw: u32) -> Result<ConstraintWord> {
    let word = ConstraintWord::from_raw(raw);
    word.mode()?;
    Ok(word)
}
