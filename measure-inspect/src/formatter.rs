//! Text rendering for raw words

use measure_word::ConstraintWord;

/// `0x40000064  Exact 100`, or `0xC0000001  <unknown mode 0b11> 1`
pub fn format_entry(raw: u32) -> String {
    format!("0x{:08X}  {}", raw, format_body(raw))
}

/// Both axes of one measure call, e.g. `w=Exact 320 h=AtMost 100`
pub fn format_axes(width: ConstraintWord, height: ConstraintWord) -> String {
    format!("w={} h={}", format_body(width.raw()), format_body(height.raw()))
}

fn format_body(raw: u32) -> String {
    let word = ConstraintWord::from_raw(raw);
    match word.format() {
        Ok(text) => text,
        Err(_) => format!("<unknown mode {:#04b}> {}", word.mode_tag(), word.size()),
    }
}
