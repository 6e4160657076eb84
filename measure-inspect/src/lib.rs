//! # Constraint Word Inspector
//!
//! Render raw `u32` words as readable text for logs and debugging sessions.
//!
//! Words captured from a running layout pass may not have come from the
//! encoder, so everything here starts from a raw `u32` and reports the
//! reserved mode tag instead of assuming it away.
//!
//! ## Example
//!
//! ```rust
//! use measure_inspect::{dump, format_entry};
//!
//! assert_eq!(format_entry(0x4000_0064), "0x40000064  Exact 100");
//!
//! let listing = dump(&[0x4000_0064, 0x8000_001E, 0xC000_0001]);
//! assert!(listing.contains("; 3 words"));
//! assert!(listing.contains("<unknown mode 0b11> 1"));
//! ```

pub mod error;
pub mod decoder;
pub mod formatter;
pub mod dump;

pub use error::{InspectError, Result};
pub use decoder::{decode, decode_word};
pub use formatter::{format_axes, format_entry};
pub use dump::{dump, dump_strict};
