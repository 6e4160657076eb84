//! Size resolution against a received constraint word
//!
//! | Mode            | `resolve_size`        | `default_size` |
//! |-----------------|-----------------------|----------------|
//! | `Unconstrained` | desired               | fallback       |
//! | `Exact`         | word size             | word size      |
//! | `AtMost`        | min(desired, word)    | word size      |

use measure_word::{ConstraintWord, Result, SizingMode};

/// Reconcile the size a child wants with the constraint it was given
#[inline]
pub fn resolve_size(desired: u32, word: ConstraintWord) -> Result<u32> {
    let limit = word.size();
    Ok(match word.mode()? {
        SizingMode::Unconstrained => desired,
        SizingMode::Exact => limit,
        SizingMode::AtMost => desired.min(limit),
    })
}

/// Size for a child with no preference of its own: it takes everything the
/// constraint allows, or `fallback` when nothing is imposed
#[inline]
pub fn default_size(fallback: u32, word: ConstraintWord) -> Result<u32> {
    Ok(match word.mode()? {
        SizingMode::Unconstrained => fallback,
        SizingMode::Exact | SizingMode::AtMost => word.size(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use measure_word::MeasureError;

    fn word(size: u32, mode: SizingMode) -> ConstraintWord {
        ConstraintWord::encode(size, mode).unwrap()
    }

    #[test]
    fn test_resolve_size() {
        assert_eq!(resolve_size(50, ConstraintWord::unconstrained()).unwrap(), 50);
        assert_eq!(resolve_size(50, word(40, SizingMode::Exact)).unwrap(), 40);
        assert_eq!(resolve_size(50, word(30, SizingMode::AtMost)).unwrap(), 30);
        assert_eq!(resolve_size(20, word(30, SizingMode::AtMost)).unwrap(), 20);
    }

    #[test]
    fn test_default_size() {
        assert_eq!(default_size(50, ConstraintWord::unconstrained()).unwrap(), 50);
        assert_eq!(default_size(50, word(40, SizingMode::Exact)).unwrap(), 40);
        assert_eq!(default_size(50, word(30, SizingMode::AtMost)).unwrap(), 30);
        assert_eq!(default_size(20, word(30, SizingMode::AtMost)).unwrap(), 30);
    }

    #[test]
    fn test_unconstrained_ignores_advisory_size() {
        let hint = word(999, SizingMode::Unconstrained);
        assert_eq!(resolve_size(10, hint).unwrap(), 10);
        assert_eq!(default_size(10, hint).unwrap(), 10);
    }

    #[test]
    fn test_exact_overrides_larger_request() {
        assert_eq!(resolve_size(10, word(200, SizingMode::Exact)).unwrap(), 200);
    }

    #[test]
    fn test_foreign_word_rejected() {
        let foreign = ConstraintWord::from_raw(0xC000_0010);
        assert_eq!(
            resolve_size(5, foreign).unwrap_err(),
            MeasureError::UnknownMode { tag: 3 }
        );
        assert_eq!(
            default_size(5, foreign).unwrap_err(),
            MeasureError::UnknownMode { tag: 3 }
        );
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use measure_word::MAX_SIZE;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_at_most_never_exceeds_limit(desired in any::<u32>(), limit in 0u32..=MAX_SIZE) {
            let word = ConstraintWord::at_most(limit).unwrap();
            prop_assert!(resolve_size(desired, word).unwrap() <= limit);
        }

        #[test]
        fn test_exact_always_limit(desired in any::<u32>(), limit in 0u32..=MAX_SIZE) {
            let word = ConstraintWord::exact(limit).unwrap();
            prop_assert_eq!(resolve_size(desired, word).unwrap(), limit);
            prop_assert_eq!(default_size(desired, word).unwrap(), limit);
        }
    }
}
