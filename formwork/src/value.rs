//! Tagged field values, declared field kinds, and raw-input coercion.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Current value of every field, keyed by field name.
///
/// A field absent from the map is "unset"; rules receive it as `None`.
pub type FormValues = HashMap<String, Value>;

/// Validation failure message per field. Absence of a key means no failure.
pub type ErrorMap = HashMap<String, String>;

/// A single field value.
///
/// Forms carry scalars only: free text, checkbox booleans, and numbers set
/// programmatically. Numeric text typed by a user stays a `Str`; the
/// `numeric` rule validates it without coercing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Free-form text.
    Str(String),
    /// Checkbox-style boolean.
    Bool(bool),
    /// Numeric value (programmatic only).
    Num(f64),
}

impl Value {
    /// Get the text content, if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Get the boolean content, if this is a boolean value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the numeric content, if this is a number value.
    pub fn as_num(&self) -> Option<f64> {
        match self {
            Self::Num(n) => Some(*n),
            _ => None,
        }
    }

    /// Check whether the value is an empty or whitespace-only string.
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Str(s) if s.trim().is_empty())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Num(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Num(n as f64)
    }
}

/// Declared kind of a field, fixed at schema-definition time.
///
/// The kind decides how raw UI input is coerced into a [`Value`]; it is
/// never inferred from the input at runtime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    /// Free-text field; raw input is kept as the raw string.
    #[default]
    Text,
    /// Checkbox-like field; raw input is coerced to a boolean.
    Checkbox,
}

impl FieldKind {
    /// Coerce raw UI input into a typed [`Value`] for this kind.
    pub fn coerce(self, raw: RawInput) -> Value {
        match (self, raw) {
            (Self::Checkbox, RawInput::Toggle(b)) => Value::Bool(b),
            (Self::Checkbox, RawInput::Text(s)) => Value::Bool(s == "true" || s == "on"),
            (Self::Text, RawInput::Text(s)) => Value::Str(s),
            (Self::Text, RawInput::Toggle(b)) => Value::Bool(b),
        }
    }
}

/// Raw input as delivered by a rendering layer, before coercion.
#[derive(Debug, Clone, PartialEq)]
pub enum RawInput {
    /// Text typed into a field.
    Text(String),
    /// Checkbox toggle state.
    Toggle(bool),
}

impl From<&str> for RawInput {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for RawInput {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<bool> for RawInput {
    fn from(b: bool) -> Self {
        Self::Toggle(b)
    }
}
