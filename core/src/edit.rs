//! Classification of raw edits made in a time field.
//!
//! The input surface reports an edit as the full new string plus the caret
//! offset after the edit. Comparing it with the old value tells what the user
//! did: inserted a character, replaced one, replaced a run, or removed one.
//! The classifier turns that into a candidate value with the masked-field
//! rules applied:
//!
//! - typing at a separator boundary auto-skips a typed separator and
//!   auto-inserts a missing one before a typed digit;
//! - typing the last digit of hours or minutes pre-advances the caret into
//!   the next segment;
//! - removing a separator or digit leaves a `0` placeholder so every segment
//!   keeps its width;
//! - anything that is not a digit reverts the edit.
//!
//! Numeric ranges are not checked here; the candidate goes through
//! [`canonicalize`](crate::canonicalize) next.

use crate::config::FieldConfig;
use crate::DECIMAL_POINT;

/// Caret offsets right after a separator slot (`HH:|MM:|SS`).
const AFTER_SEPARATOR: [usize; 2] = [3, 6];
/// Caret offset right after the decimal point slot (`HH:MM:SS.|mmm`).
const AFTER_DECIMAL: usize = 9;
/// Caret offsets right before a separator slot (`HH|:MM|:SS`).
const BEFORE_SEPARATOR: [usize; 2] = [2, 5];
/// Caret offset right before the decimal point slot (`HH:MM:SS|.mmm`).
const BEFORE_DECIMAL: usize = 8;

/// One raw edit reported by the input surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edit<'a> {
    /// Value before the edit (the last canonical value)
    pub old: &'a str,
    /// Full value reported after the edit
    pub new: &'a str,
    /// Caret offset after the edit (characters, 0-based)
    pub caret: usize,
}

/// Shape of an edit, decided from lengths and the characters around the
/// caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    /// New value is longer; holds the character before the caret
    Inserted(Option<char>),
    /// Same length; holds the character before the caret
    ReplacedSingle(Option<char>),
    /// Shorter, and the character before the caret is neither a digit nor a
    /// delimiter: a run was overwritten with something invalid
    ReplacedRun(char),
    /// Shorter otherwise; holds the old character at the caret
    Removed(Option<char>),
}

/// Classifier output, fed to the canonicalizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub value: String,
    pub cursor: usize,
}

impl Candidate {
    pub fn new<T: Into<String>>(value: T, cursor: usize) -> Self {
        Candidate {
            value: value.into(),
            cursor,
        }
    }
}

impl<'a> Edit<'a> {
    pub fn new(old: &'a str, new: &'a str, caret: usize) -> Self {
        Self { old, new, caret }
    }

    /// Classify the edit for the given separator.
    pub fn kind(&self, separator: char) -> EditKind {
        let old_len = self.old.chars().count();
        let new_len = self.new.chars().count();
        let before_caret = self
            .caret
            .checked_sub(1)
            .and_then(|i| self.new.chars().nth(i));

        if new_len > old_len {
            return EditKind::Inserted(before_caret);
        }
        if new_len == old_len {
            return EditKind::ReplacedSingle(before_caret);
        }
        match before_caret {
            Some(ch) if ch != separator && ch != DECIMAL_POINT && !ch.is_ascii_digit() => {
                EditKind::ReplacedRun(ch)
            }
            _ => EditKind::Removed(self.old.chars().nth(self.caret)),
        }
    }
}

/// Apply the masked-field rules to a raw edit.
///
/// # Examples
///
/// ```
/// use timefield_core::{classify, Edit, FieldConfig};
///
/// let config = FieldConfig::hours_minutes();
///
/// // A digit typed right after the hours jumps over the separator.
/// let out = classify(&config, &Edit::new("12:34", "121:34", 3));
/// assert_eq!(out.value, "12:14");
/// assert_eq!(out.cursor, 4);
///
/// // Letters are refused.
/// let out = classify(&config, &Edit::new("12:34", "a12:34", 1));
/// assert_eq!(out.value, "12:34");
/// assert_eq!(out.cursor, 0);
/// ```
pub fn classify(config: &FieldConfig, edit: &Edit<'_>) -> Candidate {
    let separator = config.separator();
    let new: Vec<char> = edit.new.chars().collect();
    let caret = edit.caret;

    let kind = edit.kind(separator);
    tracing::trace!(?kind, caret, new = edit.new, "classified edit");

    match kind {
        EditKind::Inserted(ch) => inserted(config, edit, &new, ch),
        EditKind::ReplacedSingle(Some(ch)) if ch.is_ascii_digit() => {
            if BEFORE_SEPARATOR.contains(&(caret - 1)) {
                // The user typed over a separator slot: keep the separator.
                let value = splice(&new, caret - 1, &[separator], caret);
                Candidate::new(value, caret)
            } else {
                Candidate::new(edit.new, caret)
            }
        }
        EditKind::ReplacedSingle(ch) => {
            tracing::debug!(?ch, "non-digit replacement refused");
            revert(edit)
        }
        EditKind::ReplacedRun(ch) => {
            tracing::debug!(%ch, "run replaced by non-digit refused");
            revert(edit)
        }
        EditKind::Removed(removed) => {
            let at_separator = BEFORE_SEPARATOR.contains(&caret) && removed == Some(separator);
            let at_decimal = caret == BEFORE_DECIMAL && removed == Some(DECIMAL_POINT);
            if at_separator || at_decimal {
                // Deleting a delimiter clears the digit before it instead.
                let delimiter = if at_separator { separator } else { DECIMAL_POINT };
                let value = splice(&new, caret - 1, &['0', delimiter], caret);
                Candidate::new(value, caret - 1)
            } else {
                let value = splice(&new, caret, &['0'], caret);
                Candidate::new(value, caret)
            }
        }
    }
}

fn inserted(config: &FieldConfig, edit: &Edit<'_>, new: &[char], ch: Option<char>) -> Candidate {
    let separator = config.separator();
    let caret = edit.caret;
    let max_len = config.max_len();

    if caret > max_len {
        tracing::debug!(caret, max_len, "insert past the end refused");
        return Candidate::new(edit.old, max_len);
    }

    let Some(ch) = ch else {
        return revert(edit);
    };

    let delimiter = if AFTER_SEPARATOR.contains(&caret) {
        Some(separator)
    } else if caret == AFTER_DECIMAL {
        Some(DECIMAL_POINT)
    } else {
        None
    };

    match delimiter {
        // Typed the delimiter that is already there: drop the duplicate.
        Some(delimiter) if ch == delimiter => {
            Candidate::new(splice(new, caret - 1, &[delimiter], caret + 1), caret)
        }
        // Typed a digit where the delimiter sits: the digit lands after it.
        Some(delimiter) if ch.is_ascii_digit() => Candidate::new(
            splice(new, caret - 1, &[delimiter, ch], caret + 2),
            caret + 1,
        ),
        _ if ch.is_ascii_digit() => {
            let value = splice(new, caret - 1, &[ch], caret + 1);
            let cursor = if BEFORE_SEPARATOR.contains(&caret) {
                caret + 1
            } else {
                caret
            };
            Candidate::new(value, cursor)
        }
        _ => {
            tracing::debug!(%ch, caret, "non-digit insert refused");
            revert(edit)
        }
    }
}

/// Keep the old value and step the caret back over the refused character.
fn revert(edit: &Edit<'_>) -> Candidate {
    Candidate::new(edit.old, edit.caret.saturating_sub(1))
}

/// `chars[..head] + middle + chars[tail..]`, with out-of-range bounds
/// clamped to the end of `chars`.
fn splice(chars: &[char], head: usize, middle: &[char], tail: usize) -> String {
    let head = head.min(chars.len());
    let tail = tail.min(chars.len());
    chars[..head]
        .iter()
        .chain(middle)
        .chain(&chars[tail..])
        .collect()
}
