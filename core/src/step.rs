//! Arrow-key stepping of the segment under the caret.

use crate::canonical::{canonicalize, Canonical};
use crate::config::FieldConfig;
use crate::segment::{increment_segment, SegmentKind};

/// Direction of an arrow-key step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Up,
    Down,
}

impl StepDirection {
    fn sign(self) -> i32 {
        match self {
            StepDirection::Up => 1,
            StepDirection::Down => -1,
        }
    }
}

/// Step the segment under `caret` by one unit (100 for millis).
///
/// The caret is clamped to the field length first. The stepped value is
/// canonicalized against `value`, so stepping minutes past 59 leaves them
/// where they were and costs one cursor step; stepping below zero stays at
/// zero.
///
/// # Examples
///
/// ```
/// use timefield_core::{step_at, FieldConfig, StepDirection};
///
/// let config = FieldConfig::with_millis();
/// let out = step_at(&config, "12:34:56.789", 9, StepDirection::Up);
/// assert_eq!(out.value, "12:34:56.889");
///
/// let out = step_at(&config, "12:59:56.789", 4, StepDirection::Up);
/// assert_eq!(out.value, "12:59:56.789");
/// ```
pub fn step_at(
    config: &FieldConfig,
    value: &str,
    caret: usize,
    direction: StepDirection,
) -> Canonical {
    let caret = caret.min(config.max_len());
    let current = canonicalize(config, value, &config.default_value(), caret).value;

    let kind = SegmentKind::at_caret(caret, config.millis_enabled());
    let chars: Vec<char> = current.chars().collect();
    let range = kind.range();
    let segment: String = chars[range.clone()].iter().collect();
    let stepped = increment_segment(&segment, kind.step() * direction.sign());

    tracing::trace!(?kind, ?direction, %segment, %stepped, "stepping segment");

    let candidate: String = chars[..range.start]
        .iter()
        .copied()
        .chain(stepped.chars())
        .chain(chars[range.end..].iter().copied())
        .collect();

    canonicalize(config, &candidate, &current, caret)
}
