//! Format configuration for a time field.
//!
//! A `FieldConfig` decides which segments a field shows and which character
//! separates hours, minutes and seconds. The decimal point before
//! milliseconds is always `.`. The configuration fixes the field's default
//! value and its length, which is also the largest caret offset.

use serde::{Deserialize, Serialize};

use crate::{DECIMAL_POINT, DEFAULT_SEPARATOR};

/// Display options for one time field.
///
/// `show_millis` only takes effect together with `show_seconds`; millis
/// without seconds yields the plain `HH:MM` shape.
///
/// # Example
///
/// ```
/// use timefield_core::FieldConfig;
///
/// let config = FieldConfig::new(true, true, '-');
/// assert_eq!(config.default_value(), "00-00-00.000");
/// assert_eq!(config.max_len(), 12);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Show the seconds segment (`HH:MM:SS`)
    pub show_seconds: bool,
    /// Show the milliseconds segment (`HH:MM:SS.mmm`), requires seconds
    pub show_millis: bool,
    /// Character between hours, minutes and seconds
    pub separator: char,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            show_seconds: false,
            show_millis: false,
            separator: DEFAULT_SEPARATOR,
        }
    }
}

impl FieldConfig {
    /// Create a configuration, falling back to `:` when `separator` cannot
    /// delimit digits (a digit or the decimal point).
    pub fn new(show_seconds: bool, show_millis: bool, separator: char) -> Self {
        Self {
            show_seconds,
            show_millis,
            separator,
        }
        .normalized()
    }

    /// Configuration showing hours and minutes.
    pub fn hours_minutes() -> Self {
        Self::default()
    }

    /// Configuration showing hours, minutes and seconds.
    pub fn with_seconds() -> Self {
        Self::new(true, false, DEFAULT_SEPARATOR)
    }

    /// Configuration showing hours, minutes, seconds and milliseconds.
    pub fn with_millis() -> Self {
        Self::new(true, true, DEFAULT_SEPARATOR)
    }

    /// Replace an unusable separator with the default one.
    pub fn normalized(mut self) -> Self {
        if !is_usable_separator(self.separator) {
            tracing::warn!(
                separator = %self.separator,
                "separator cannot delimit digits, using '{}'",
                DEFAULT_SEPARATOR
            );
            self.separator = DEFAULT_SEPARATOR;
        }
        self
    }

    /// The separator actually used between hours, minutes and seconds.
    pub fn separator(&self) -> char {
        if is_usable_separator(self.separator) {
            self.separator
        } else {
            DEFAULT_SEPARATOR
        }
    }

    /// Whether the millisecond segment is part of the value.
    pub fn millis_enabled(&self) -> bool {
        self.show_seconds && self.show_millis
    }

    /// Value used when nothing valid was supplied, e.g. `00:00:00`.
    pub fn default_value(&self) -> String {
        let sep = self.separator();
        let dot = DECIMAL_POINT;
        match (self.show_seconds, self.millis_enabled()) {
            (true, true) => format!("00{sep}00{sep}00{dot}000"),
            (true, false) => format!("00{sep}00{sep}00"),
            _ => format!("00{sep}00"),
        }
    }

    /// Length of every canonical value, and the largest caret offset.
    pub fn max_len(&self) -> usize {
        match (self.show_seconds, self.millis_enabled()) {
            (true, true) => 12,
            (true, false) => 8,
            _ => 5,
        }
    }

    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: FieldConfig = toml::from_str(&content)?;
        Ok(config.normalized())
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(
        &self,
        path: P,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<FieldConfig>(content).map(FieldConfig::normalized)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

fn is_usable_separator(ch: char) -> bool {
    !ch.is_ascii_digit() && ch != DECIMAL_POINT
}
