//! Collaborator interface for anything a container can measure

use measure_word::ConstraintWord;
use serde::{Deserialize, Serialize};
use tracing::{debug_span, trace, warn};

use crate::config::ResolveConfig;
use crate::error::{ResolveError, Result};
use crate::resolve::{default_size, resolve_size};

/// Resolved width and height of one child
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct MeasuredSize {
    pub width: u32,
    pub height: u32,
}

impl MeasuredSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Given the constraint words for both axes, produce a resolved size
pub trait Measurable {
    fn measure(&self, width: ConstraintWord, height: ConstraintWord) -> Result<MeasuredSize>;
}

/// A child with a preferred size, resolved per axis with [`resolve_size`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSize {
    pub preferred: MeasuredSize,
}

impl FixedSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            preferred: MeasuredSize::new(width, height),
        }
    }
}

impl Measurable for FixedSize {
    fn measure(&self, width: ConstraintWord, height: ConstraintWord) -> Result<MeasuredSize> {
        Ok(MeasuredSize {
            width: resolve_size(self.preferred.width, width)?,
            height: resolve_size(self.preferred.height, height)?,
        })
    }
}

/// A child that takes all the room it is offered, via [`default_size`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FillAvailable {
    /// Used on axes with no constraint
    pub minimum: MeasuredSize,
}

impl Measurable for FillAvailable {
    fn measure(&self, width: ConstraintWord, height: ConstraintWord) -> Result<MeasuredSize> {
        Ok(MeasuredSize {
            width: default_size(self.minimum.width, width)?,
            height: default_size(self.minimum.height, height)?,
        })
    }
}

/// Measure one child and check its answer against the configured limit
pub fn measure_child(
    child: &dyn Measurable,
    width: ConstraintWord,
    height: ConstraintWord,
    config: &ResolveConfig,
) -> Result<MeasuredSize> {
    config.validate()?;

    let span = debug_span!("measure_child", %width, %height);
    let _enter = span.enter();

    let measured = child.measure(width, height)?;

    for (axis, dimension) in [("width", measured.width), ("height", measured.height)] {
        if dimension > config.max_dimension {
            warn!(axis, dimension, limit = config.max_dimension, "measured dimension over limit");
            return Err(ResolveError::DimensionTooLarge {
                axis,
                dimension,
                limit: config.max_dimension,
            });
        }
    }

    if config.trace {
        trace!(width = measured.width, height = measured.height, "resolved");
    }

    Ok(measured)
}
