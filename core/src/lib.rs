//! timefield-core
//!
//! Masked time-field engine shared by time input frontends. It keeps a
//! segmented time value (`HH:MM`, `HH:MM:SS` or `HH:MM:SS.mmm`) valid while
//! the user types into it, and says where the caret goes after each edit.
//!
//! The engine is made of pure functions over strings plus one stateful
//! wrapper:
//!
//! - `format_segment` / `increment_segment` - fixed-width segment helpers
//! - `canonicalize` - repair a candidate value against the previous one
//! - `classify` - apply the masked-field rules to a raw edit
//! - `step_at` - arrow-key stepping of the segment under the caret
//! - `TimeField` - one field instance publishing results in a `FieldContext`
//!
//! Rendering the input, placing the caret and calling the user's change
//! handler are left to the frontend.
//!
//! # Example
//!
//! ```
//! use timefield_core::{FieldConfig, TimeField};
//!
//! let mut field = TimeField::new(FieldConfig::with_seconds(), Some("12:34:56"));
//!
//! // The user types "1" right before the minutes separator.
//! let out = field.on_input("12:341:56", 6);
//! assert_eq!(out.value, "12:34:16");
//! assert_eq!(field.context_mut().take_change().as_deref(), Some("12:34:16"));
//! ```

pub mod segment;
pub use segment::{format_segment, increment_segment, is_number, SegmentKind};

pub mod config;
pub use config::FieldConfig;

pub mod canonical;
pub use canonical::{canonicalize, Canonical};

pub mod edit;
pub use edit::{classify, Candidate, Edit, EditKind};

pub mod step;
pub use step::{step_at, StepDirection};

pub mod context;
pub use context::FieldContext;

pub mod field;
pub use field::{KeyEvent, KeyResult, TimeField};

/// Default character between hours, minutes and seconds.
pub const DEFAULT_SEPARATOR: char = ':';

/// Character before the millisecond segment.
pub const DECIMAL_POINT: char = '.';
