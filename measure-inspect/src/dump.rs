//! Listings of word sequences

use crate::decoder::decode_word;
use crate::error::{InspectError, Result};
use crate::formatter::format_entry;

/// List every word, annotating the ones with a reserved mode tag
pub fn dump(words: &[u32]) -> String {
    let mut output = String::new();

    output.push_str("; Constraint words\n");
    output.push_str(&format!("; {} words\n", words.len()));
    output.push('\n');

    for (index, &raw) in words.iter().enumerate() {
        output.push_str(&format!("{:>4}:  ", index));
        output.push_str(&format_entry(raw));
        if decode_word(raw).is_err() {
            output.push_str("  ; not produced by the encoder");
        }
        output.push('\n');
    }

    output
}

/// Like [`dump`], but fails on the first foreign word
pub fn dump_strict(words: &[u32]) -> Result<String> {
    if let Some(index) = words.iter().position(|&raw| decode_word(raw).is_err()) {
        return Err(InspectError::InvalidWord {
            index,
            raw: words[index],
        });
    }
    Ok(dump(words))
}
