//! Stateful time field with event processing.
//!
//! `TimeField` holds one field's configuration and its current canonical
//! value. Raw input edits and key events go through the edit classifier or
//! the arrow-key stepper, then through the canonicalizer, and the outcome is
//! published in a [`FieldContext`] for the frontend to apply.

use crate::canonical::{canonicalize, Canonical};
use crate::config::FieldConfig;
use crate::context::FieldContext;
use crate::edit::{classify, Edit};
use crate::step::{step_at, StepDirection};

/// Key events a frontend may forward to the field.
///
/// Text-changing keys normally reach the field as an input edit (see
/// [`TimeField::on_input`]); only the vertical arrows are handled here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyEvent {
    /// Character key
    Char(char),
    /// Backspace key
    Backspace,
    /// Delete key
    Delete,
    /// Left arrow key
    Left,
    /// Right arrow key
    Right,
    /// Up arrow key (step segment up)
    Up,
    /// Down arrow key (step segment down)
    Down,
    /// Home key
    Home,
    /// End key
    End,
    /// Enter/Return key
    Enter,
    /// Escape key
    Escape,
    /// Ctrl + character
    Ctrl(char),
    /// Alt + character
    Alt(char),
}

/// Result of processing a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResult {
    /// Key was handled by the field
    Handled,
    /// Key was not handled (pass through to the frontend)
    NotHandled,
}

/// One time field instance.
#[derive(Debug, Clone)]
pub struct TimeField {
    config: FieldConfig,
    value: String,
    cursor: usize,
    context: FieldContext,
}

impl TimeField {
    /// Create a field, canonicalizing `initial` against the configuration's
    /// default value.
    pub fn new(config: FieldConfig, initial: Option<&str>) -> Self {
        let config = config.normalized();
        let default_value = config.default_value();
        let value = canonicalize(
            &config,
            initial.unwrap_or(default_value.as_str()),
            &default_value,
            0,
        )
        .value;

        let mut field = Self {
            config,
            value,
            cursor: 0,
            context: FieldContext::new(),
        };
        field.sync_to_context(None);
        field
    }

    /// Get the configuration.
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Get the current canonical value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Get the last caret offset.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Get a reference to the context for reading field state.
    pub fn context(&self) -> &FieldContext {
        &self.context
    }

    /// Get a mutable reference to the context.
    pub fn context_mut(&mut self) -> &mut FieldContext {
        &mut self.context
    }

    /// Replace the value from outside (e.g. the owner passes a new value).
    ///
    /// The new value is canonicalized against the default value, the caret
    /// stays where it was (clamped) and no change notification is raised.
    pub fn set_value(&mut self, value: &str) {
        let default_value = self.config.default_value();
        self.value = canonicalize(&self.config, value, &default_value, 0).value;
        self.cursor = self.cursor.min(self.config.max_len());
        self.sync_to_context(None);
    }

    /// Process a raw input edit: `new_value` is the full text the input
    /// surface reports and `caret` the caret offset after the edit.
    pub fn on_input(&mut self, new_value: &str, caret: usize) -> Canonical {
        let candidate = classify(&self.config, &Edit::new(&self.value, new_value, caret));
        let canonical = canonicalize(&self.config, &candidate.value, &self.value, candidate.cursor);
        self.apply(&canonical);
        Canonical::new(self.value.clone(), self.cursor)
    }

    /// Process a key event with the caret at `caret`.
    ///
    /// Up/Down step the segment under the caret and raise a change
    /// notification. All other keys are left to the frontend.
    pub fn process_key(&mut self, key: KeyEvent, caret: usize) -> KeyResult {
        let direction = match key {
            KeyEvent::Up => StepDirection::Up,
            KeyEvent::Down => StepDirection::Down,
            _ => return KeyResult::NotHandled,
        };

        let canonical = step_at(&self.config, &self.value, caret, direction);
        self.apply(&canonical);
        KeyResult::Handled
    }

    fn apply(&mut self, canonical: &Canonical) {
        self.value = canonical.value.clone();
        self.cursor = canonical.cursor.min(self.config.max_len());
        self.sync_to_context(Some(self.value.clone()));
    }

    fn sync_to_context(&mut self, change: Option<String>) {
        self.context.value = self.value.clone();
        self.context.cursor = self.cursor;
        if change.is_some() {
            self.context.change = change;
        }
    }
}

impl Default for TimeField {
    fn default() -> Self {
        Self::new(FieldConfig::default(), None)
    }
}
