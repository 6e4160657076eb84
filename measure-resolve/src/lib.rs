//! # Constraint Word Consumers
//!
//! Turn a constraint word received from a container into a concrete size.
//!
//! A container encodes one [`ConstraintWord`](measure_word::ConstraintWord)
//! per axis for each child. The child answers with a [`MeasuredSize`]. This
//! crate covers the child side only: deciding which constraint each child
//! gets is the container's business.
//!
//! ## Example
//!
//! ```rust
//! use measure_word::ConstraintWord;
//! use measure_resolve::{measure_child, FixedSize, ResolveConfig};
//!
//! let child = FixedSize::new(50, 80);
//! let width = ConstraintWord::at_most(30).unwrap();
//! let height = ConstraintWord::unconstrained();
//!
//! let size = measure_child(&child, width, height, &ResolveConfig::default()).unwrap();
//! assert_eq!((size.width, size.height), (30, 80));
//! ```

pub mod error;
pub mod config;
pub mod resolve;
pub mod measurable;

pub use error::{ResolveError, Result};
pub use config::{ConfigError, ResolveConfig};
pub use resolve::{default_size, resolve_size};
pub use measurable::{measure_child, FillAvailable, FixedSize, Measurable, MeasuredSize};
