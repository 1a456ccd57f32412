//! Per-field form validation results.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Field name → user-facing error message.
///
/// An empty map means the form is valid. Field names match the form inputs
/// (`title`, `description`, `email`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormErrors(BTreeMap<String, String>);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an error for a field, replacing any previous one.
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Field names with errors, in sorted order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Adds `"{label} is required"` under `field` when `value` is blank after trimming.
    pub fn require(&mut self, field: &str, label: &str, value: &str) {
        if value.trim().is_empty() {
            self.insert(field, format!("{} is required", label));
        }
    }

    /// Converts into `Ok(())` when empty, `Err(self)` otherwise.
    pub fn into_result(self) -> Result<(), FormErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}

/// Local part, one '@', and a non-empty domain. Dotless domains pass, as
/// they do in a browser's `type="email"` input.
static EMAIL_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)*$").ok());

/// Loose address check equivalent to a browser's `type="email"` input.
pub fn looks_like_email(value: &str) -> bool {
    EMAIL_PATTERN
        .as_ref()
        .is_some_and(|re| re.is_match(value.trim()))
}
