//! Fixed-width numeric segments of a time value.
//!
//! A time value is made of up to four segments (hours, minutes, seconds,
//! milliseconds). Each one is a zero-padded decimal string of a fixed width.
//! This module pads, truncates, range-checks and steps single segments; it
//! knows nothing about separators or the caret.

use std::ops::Range;

/// One numeric component of a time value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    Hours,
    Minutes,
    Seconds,
    Millis,
}

impl SegmentKind {
    /// Fixed width of the segment in characters.
    pub const fn width(self) -> usize {
        match self {
            SegmentKind::Millis => 3,
            _ => 2,
        }
    }

    /// Largest accepted value, `None` for hours which are unbounded.
    pub const fn max_value(self) -> Option<u32> {
        match self {
            SegmentKind::Hours => None,
            SegmentKind::Minutes | SegmentKind::Seconds => Some(59),
            SegmentKind::Millis => Some(999),
        }
    }

    /// Amount one arrow-key press adds or subtracts.
    pub const fn step(self) -> i32 {
        match self {
            SegmentKind::Millis => 100,
            _ => 1,
        }
    }

    /// Character range of the segment in the fully expanded `HH:MM:SS.mmm`
    /// layout.
    pub const fn range(self) -> Range<usize> {
        match self {
            SegmentKind::Hours => 0..2,
            SegmentKind::Minutes => 3..5,
            SegmentKind::Seconds => 6..8,
            SegmentKind::Millis => 9..12,
        }
    }

    /// Segment addressed by a caret offset.
    ///
    /// The caret is expected to be clamped to the field length already, so a
    /// caret past the seconds only lands on millis when they are shown.
    pub fn at_caret(caret: usize, millis_enabled: bool) -> Self {
        match caret {
            0..=2 => SegmentKind::Hours,
            3..=5 => SegmentKind::Minutes,
            6..=8 => SegmentKind::Seconds,
            _ if millis_enabled => SegmentKind::Millis,
            _ => SegmentKind::Seconds,
        }
    }

    /// Check whether an already formatted segment is valid for this kind:
    /// exactly `width()` ASCII digits, not above `max_value()`.
    pub fn accepts(self, segment: &str) -> bool {
        if segment.len() != self.width() || !is_number(segment) {
            return false;
        }
        match (self.max_value(), segment.parse::<u32>()) {
            (None, _) => true,
            (Some(max), Ok(value)) => value <= max,
            (Some(_), Err(_)) => false,
        }
    }

    /// All-zero segment of this width.
    pub fn zero(self) -> String {
        "0".repeat(self.width())
    }
}

/// True for a non-empty string made only of ASCII digits.
///
/// # Examples
///
/// ```
/// use timefield_core::is_number;
///
/// assert!(is_number("0"));
/// assert!(is_number("59"));
/// assert!(!is_number(""));
/// assert!(!is_number(" 1"));
/// assert!(!is_number("a"));
/// ```
pub fn is_number(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Pad a raw segment on the right with `0` and cut it to exactly `width`
/// characters, keeping the leftmost ones.
///
/// Empty input yields all zeros. Non-digit characters are kept as they are;
/// digit validation happens in the canonicalizer.
///
/// # Examples
///
/// ```
/// use timefield_core::format_segment;
///
/// assert_eq!(format_segment("", 2), "00");
/// assert_eq!(format_segment("1", 2), "10");
/// assert_eq!(format_segment("111", 2), "11");
/// assert_eq!(format_segment("9", 3), "900");
/// ```
pub fn format_segment(raw: &str, width: usize) -> String {
    raw.chars()
        .chain(std::iter::repeat('0'))
        .take(width)
        .collect()
}

/// Add a signed step to a zero-padded segment, keeping its width.
///
/// The result is floored at zero and left-padded with zeros. It is not
/// clamped at the segment's nominal maximum: stepping minutes `59` up gives
/// `60`, which the canonicalizer then rejects. A result that no longer fits
/// the width (hours `99` up, millis `999` up) leaves the segment unchanged,
/// as does a segment that is not numeric.
///
/// # Examples
///
/// ```
/// use timefield_core::increment_segment;
///
/// assert_eq!(increment_segment("12", 1), "13");
/// assert_eq!(increment_segment("00", -1), "00");
/// assert_eq!(increment_segment("789", 100), "889");
/// assert_eq!(increment_segment("99", 1), "99");
/// ```
pub fn increment_segment(segment: &str, step: i32) -> String {
    let width = segment.len();
    if !is_number(segment) {
        return segment.to_string();
    }
    let Ok(value) = segment.parse::<i64>() else {
        return segment.to_string();
    };

    let next = (value + i64::from(step)).max(0);
    let stepped = format!("{:0width$}", next, width = width);
    if stepped.len() > width {
        tracing::debug!(segment, step, "stepped value does not fit segment width");
        return segment.to_string();
    }
    stepped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_defaults_to_zeros() {
        assert_eq!(format_segment("", 2), "00");
        assert_eq!(format_segment("", 3), "000");
    }

    #[test]
    fn format_pads_and_truncates() {
        assert_eq!(format_segment("1", 2), "10");
        assert_eq!(format_segment("11", 2), "11");
        assert_eq!(format_segment("111", 2), "11");
        assert_eq!(format_segment("2", 2), "20");
        assert_eq!(format_segment("09", 3), "090");
    }

    #[test]
    fn format_keeps_garbage() {
        assert_eq!(format_segment("a", 2), "a0");
        assert_eq!(format_segment("5.7", 2), "5.");
    }

    #[test]
    fn is_number_basic() {
        assert!(is_number("0"));
        assert!(is_number("1"));
        assert!(is_number("0123"));
        assert!(!is_number(""));
        assert!(!is_number("a"));
        assert!(!is_number(" 1"));
        assert!(!is_number("-1"));
        assert!(!is_number("１"));
    }

    #[test]
    fn accepts_by_kind() {
        assert!(SegmentKind::Hours.accepts("99"));
        assert!(SegmentKind::Hours.accepts("24"));
        assert!(!SegmentKind::Hours.accepts("2a"));
        assert!(SegmentKind::Minutes.accepts("59"));
        assert!(!SegmentKind::Minutes.accepts("60"));
        assert!(!SegmentKind::Seconds.accepts("90"));
        assert!(SegmentKind::Millis.accepts("999"));
        assert!(!SegmentKind::Millis.accepts("99"));
    }

    #[test]
    fn caret_maps_to_segment() {
        assert_eq!(SegmentKind::at_caret(0, true), SegmentKind::Hours);
        assert_eq!(SegmentKind::at_caret(2, true), SegmentKind::Hours);
        assert_eq!(SegmentKind::at_caret(3, true), SegmentKind::Minutes);
        assert_eq!(SegmentKind::at_caret(5, true), SegmentKind::Minutes);
        assert_eq!(SegmentKind::at_caret(6, true), SegmentKind::Seconds);
        assert_eq!(SegmentKind::at_caret(8, true), SegmentKind::Seconds);
        assert_eq!(SegmentKind::at_caret(9, true), SegmentKind::Millis);
        assert_eq!(SegmentKind::at_caret(12, true), SegmentKind::Millis);
        assert_eq!(SegmentKind::at_caret(9, false), SegmentKind::Seconds);
    }

    #[test]
    fn increment_steps_and_floors() {
        assert_eq!(increment_segment("12", 1), "13");
        assert_eq!(increment_segment("12", -1), "11");
        assert_eq!(increment_segment("09", 1), "10");
        assert_eq!(increment_segment("00", -1), "00");
        assert_eq!(increment_segment("050", -100), "000");
        assert_eq!(increment_segment("789", -100), "689");
    }

    #[test]
    fn increment_does_not_clamp_to_nominal_max() {
        assert_eq!(increment_segment("59", 1), "60");
        assert_eq!(increment_segment("900", 99), "999");
    }

    #[test]
    fn increment_keeps_segment_on_width_overflow() {
        assert_eq!(increment_segment("99", 1), "99");
        assert_eq!(increment_segment("999", 100), "999");
    }

    #[test]
    fn increment_ignores_non_numeric() {
        assert_eq!(increment_segment("a1", 1), "a1");
        assert_eq!(increment_segment("", 1), "");
    }
}
