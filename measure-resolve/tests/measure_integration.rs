//! Measuring children behind the `Measurable` interface

use measure_resolve::{
    default_size, measure_child, resolve_size, FillAvailable, FixedSize, Measurable,
    MeasuredSize, ResolveConfig, ResolveError,
};
use measure_word::{ConstraintWord, SizingMode};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("measure_resolve=trace")
        .with_test_writer()
        .try_init();
}

/// Stacks children vertically, offering each the full width and whatever
/// height is left
struct Column {
    children: Vec<Box<dyn Measurable>>,
}

impl Measurable for Column {
    fn measure(&self, width: ConstraintWord, height: ConstraintWord) -> measure_resolve::Result<MeasuredSize> {
        let mut used = 0u32;
        let mut widest = 0u32;
        let bounded = height.mode()?.is_bounded();

        for child in &self.children {
            let remaining = if bounded {
                ConstraintWord::at_most(height.size().saturating_sub(used))?
            } else {
                ConstraintWord::unconstrained()
            };
            let size = child.measure(width, remaining)?;
            used += size.height;
            widest = widest.max(size.width);
        }

        Ok(MeasuredSize {
            width: resolve_size(widest, width)?,
            height: resolve_size(used, height)?,
        })
    }
}

#[test]
fn test_column_within_bound() {
    init_tracing();

    let column = Column {
        children: vec![
            Box::new(FixedSize::new(100, 40)),
            Box::new(FixedSize::new(60, 40)),
            Box::new(FixedSize::new(80, 40)),
        ],
    };
    let config = ResolveConfig { trace: true, ..ResolveConfig::default() };

    let size = measure_child(
        &column,
        ConstraintWord::at_most(320).unwrap(),
        ConstraintWord::at_most(100).unwrap(),
        &config,
    )
    .unwrap();

    // Third child only gets 20 of its 40
    assert_eq!(size, MeasuredSize::new(100, 100));
}

#[test]
fn test_column_unconstrained_height() {
    init_tracing();

    let column = Column {
        children: vec![
            Box::new(FixedSize::new(10, 25)),
            Box::new(FillAvailable { minimum: MeasuredSize::new(5, 5) }),
        ],
    };

    let size = measure_child(
        &column,
        ConstraintWord::exact(200).unwrap(),
        ConstraintWord::unconstrained(),
        &ResolveConfig::default(),
    )
    .unwrap();

    assert_eq!(size, MeasuredSize::new(200, 30));
}

#[test]
fn test_foreign_word_surfaces_as_word_error() {
    let column = Column { children: vec![] };
    let result = measure_child(
        &column,
        ConstraintWord::exact(10).unwrap(),
        ConstraintWord::from_raw(0xC000_0000),
        &ResolveConfig::default(),
    );
    assert!(matches!(result, Err(ResolveError::Word(_))));
}

#[test]
fn test_resolution_table() {
    let cases = [
        (SizingMode::Unconstrained, 0, 50, 50, 50),
        (SizingMode::Exact, 40, 50, 40, 40),
        (SizingMode::AtMost, 30, 50, 30, 30),
        (SizingMode::AtMost, 30, 20, 20, 30),
    ];

    for (mode, limit, request, resolved, default) in cases {
        let word = ConstraintWord::encode(limit, mode).unwrap();
        assert_eq!(resolve_size(request, word).unwrap(), resolved, "{}", word);
        assert_eq!(default_size(request, word).unwrap(), default, "{}", word);
    }
}
