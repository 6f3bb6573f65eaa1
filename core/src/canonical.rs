//! Canonicalization of candidate time values.
//!
//! Every edit produces a candidate string that may be too short, too long or
//! hold an out-of-range segment. `canonicalize` repairs it segment by
//! segment against the previous valid value, so the field never shows an
//! invalid time:
//!
//! - a segment that is short or long is padded or truncated to its width;
//! - a segment that is not all digits, or above its maximum (59 for minutes
//!   and seconds), reverts to the previous value's segment;
//! - each reverted segment moves the cursor back by one.

use serde::{Deserialize, Serialize};

use crate::config::FieldConfig;
use crate::segment::{format_segment, SegmentKind};
use crate::DECIMAL_POINT;

/// A canonical time value and the caret offset that goes with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Canonical {
    /// Fixed-length, range-valid time string
    pub value: String,
    /// Caret offset after the edit (characters, 0-based)
    pub cursor: usize,
}

impl Canonical {
    pub fn new<T: Into<String>>(value: T, cursor: usize) -> Self {
        Canonical {
            value: value.into(),
            cursor,
        }
    }
}

/// Raw, unformatted segments split out of a time string.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct RawSegments<'a> {
    hours: &'a str,
    minutes: &'a str,
    seconds: &'a str,
    millis: &'a str,
}

impl<'a> RawSegments<'a> {
    /// Split a time string on `separator`; the seconds piece is split once
    /// more on the decimal point when `split_millis` is set.
    fn split(value: &'a str, separator: char, split_millis: bool) -> Self {
        let mut pieces = value.split(separator);
        let hours = pieces.next().unwrap_or("");
        let minutes = pieces.next().unwrap_or("");
        let mut seconds = pieces.next().unwrap_or("");
        let mut millis = "";

        if split_millis {
            if let Some((secs, frac)) = seconds.split_once(DECIMAL_POINT) {
                seconds = secs;
                millis = frac.split(DECIMAL_POINT).next().unwrap_or("");
            }
        }

        Self {
            hours,
            minutes,
            seconds,
            millis,
        }
    }

    fn get(&self, kind: SegmentKind) -> &'a str {
        match kind {
            SegmentKind::Hours => self.hours,
            SegmentKind::Minutes => self.minutes,
            SegmentKind::Seconds => self.seconds,
            SegmentKind::Millis => self.millis,
        }
    }
}

/// Repair `candidate` into a valid time string for `config`.
///
/// `previous` is the last valid value; rejected segments fall back to it.
/// The returned cursor is `cursor` minus one per rejected segment, saturating
/// at zero. The returned value always has `config.max_len()` characters.
///
/// # Examples
///
/// ```
/// use timefield_core::{canonicalize, FieldConfig};
///
/// let config = FieldConfig::with_millis();
/// let out = canonicalize(&config, "12:00:00.9", "00:00:00.000", 0);
/// assert_eq!(out.value, "12:00:00.900");
///
/// let out = canonicalize(&FieldConfig::hours_minutes(), "12:60", "00:00", 4);
/// assert_eq!(out.value, "12:00");
/// assert_eq!(out.cursor, 3);
/// ```
pub fn canonicalize(
    config: &FieldConfig,
    candidate: &str,
    previous: &str,
    cursor: usize,
) -> Canonical {
    let separator = config.separator();
    // The previous value loses its fraction even when millis are hidden, so
    // a stale `SS.mmm` never leaks into a seconds-only field.
    let old = RawSegments::split(previous, separator, true);
    let new = RawSegments::split(candidate, separator, config.millis_enabled());

    let mut cursor = cursor;
    let mut settle = |kind: SegmentKind| settle_segment(kind, &new, &old, &mut cursor);

    let hours = settle(SegmentKind::Hours);
    let minutes = settle(SegmentKind::Minutes);

    let mut value = String::with_capacity(config.max_len());
    value.push_str(&hours);
    value.push(separator);
    value.push_str(&minutes);

    if config.show_seconds {
        let seconds = settle(SegmentKind::Seconds);
        value.push(separator);
        value.push_str(&seconds);
    }

    if config.millis_enabled() {
        let millis = settle(SegmentKind::Millis);
        value.push(DECIMAL_POINT);
        value.push_str(&millis);
    }

    Canonical { value, cursor }
}

/// Format one segment of the candidate, reverting to the previous value's
/// segment when it is rejected.
fn settle_segment(
    kind: SegmentKind,
    new: &RawSegments<'_>,
    old: &RawSegments<'_>,
    cursor: &mut usize,
) -> String {
    let width = kind.width();
    let formatted = format_segment(new.get(kind), width);
    if kind.accepts(&formatted) {
        return formatted;
    }

    *cursor = cursor.saturating_sub(1);

    let fallback = format_segment(old.get(kind), width);
    let fallback = if kind.accepts(&fallback) {
        fallback
    } else {
        kind.zero()
    };

    tracing::debug!(
        segment = ?kind,
        rejected = %formatted,
        restored = %fallback,
        cursor = *cursor,
        "segment out of range, reverted"
    );
    fallback
}
