//! Field context for frontend communication.
//!
//! The `FieldContext` struct is a plain data container. After feeding an
//! event to a [`TimeField`](crate::TimeField), the frontend reads these
//! fields to update the displayed text, place the caret and, when a change
//! is pending, call its own change handler.
//!
//! No callbacks or traits: the frontend owns every side effect.

/// Field context for frontend communication.
///
/// - `value`: canonical text to display
/// - `cursor`: caret offset to apply (already clamped to `value`)
/// - `change`: canonical value to hand to the change handler (consume and
///   clear with [`take_change`](Self::take_change))
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldContext {
    /// Text to display
    pub value: String,

    /// Caret offset within `value` (characters)
    pub cursor: usize,

    /// Pending change notification
    pub change: Option<String>,
}

impl FieldContext {
    /// Create a new empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the pending change, leaving none.
    pub fn take_change(&mut self) -> Option<String> {
        self.change.take()
    }

    /// Check if a change notification is pending.
    pub fn has_change(&self) -> bool {
        self.change.is_some()
    }

    /// Drop a pending change without delivering it.
    pub fn clear_change(&mut self) {
        self.change = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_change_consumes() {
        let mut ctx = FieldContext::new();
        assert!(!ctx.has_change());

        ctx.change = Some("12:34".to_string());
        assert!(ctx.has_change());
        assert_eq!(ctx.take_change().as_deref(), Some("12:34"));
        assert!(!ctx.has_change());
        assert_eq!(ctx.take_change(), None);
    }
}
