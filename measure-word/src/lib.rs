//! # Layout Constraint Words
//!
//! A constraint word packs a sizing mode and a size hint into one `u32` so
//! containers can hand constraints to their children without allocating.
//!
//! ## Word Layout
//!
//! ```text
//! [mode:2][size:30]
//!  31..30  29..0
//! ```
//!
//! | Mode            | Tag    | High bits     |
//! |-----------------|--------|---------------|
//! | `Unconstrained` | `0b00` | `0x0000_0000` |
//! | `Exact`         | `0b01` | `0x4000_0000` |
//! | `AtMost`        | `0b10` | `0x8000_0000` |
//! | reserved        | `0b11` | `0xC000_0000` |
//!
//! The encoder never produces the reserved tag. Decoding a word that carries
//! it fails with [`MeasureError::UnknownMode`].
//!
//! ## Example
//!
//! ```rust
//! use measure_word::{ConstraintWord, SizingMode};
//!
//! let word = ConstraintWord::encode(40, SizingMode::Exact).unwrap();
//! assert_eq!(word.raw(), 0x4000_0028);
//! assert_eq!(word.size(), 40);
//! assert_eq!(word.mode().unwrap(), SizingMode::Exact);
//! assert_eq!(word.format().unwrap(), "Exact 40");
//! ```

pub mod encoding;
pub mod mode;
pub mod word;
pub mod error;
pub mod config;

pub use mode::SizingMode;
pub use word::{decode_mode, decode_size, encode, format, ConstraintWord};
pub use error::{MeasureError, Result};
pub use config::{CodecConfig, OverflowPolicy};
pub use encoding::{MAX_SIZE, MODE_MASK, MODE_SHIFT, SIZE_MASK};
