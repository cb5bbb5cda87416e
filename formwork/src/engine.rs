//! Validation engine: runs rule chains against a full value snapshot.

use std::fmt;

use crate::rules::Rule;
use crate::schema::Schema;
use crate::value::{ErrorMap, FormValues, Value};

/// Run a rule chain against one field value and the full snapshot.
///
/// Returns the message of the first failing rule, or `None` when the chain
/// is empty or every rule passes. Never panics for well-typed input; a rule
/// that cannot interpret its value either fails with its message or passes.
pub fn validate_field(rules: &[Rule], value: Option<&Value>, all: &FormValues) -> Option<String> {
    for rule in rules {
        if let Err(message) = rule.check(value, all) {
            return Some(message);
        }
    }
    None
}

/// Validate every field declared in the schema against the snapshot.
///
/// Fields absent from the schema are always valid.
pub fn validate_all(schema: &Schema, values: &FormValues) -> ValidationReport {
    let mut errors = ErrorMap::new();
    for field in schema.fields() {
        if let Some(message) = validate_field(field.rules(), values.get(field.name()), values) {
            errors.insert(field.name().to_string(), message);
        }
    }
    ValidationReport { errors }
}

/// A single field's validation failure, for display layers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// The field that failed validation.
    pub field: String,
    /// Human-readable failure message.
    pub message: String,
}

impl FieldError {
    /// Create a new field error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of validating a whole form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    errors: ErrorMap,
}

impl ValidationReport {
    /// Check if every field passed validation.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Check if any field failed validation.
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// The full error map. Absence of a key means no failure.
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// Consume the report, keeping the error map.
    pub fn into_errors(self) -> ErrorMap {
        self.errors
    }

    /// Failure message for one field, if it failed.
    pub fn message(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// All failures as display pairs, sorted by field name.
    pub fn field_errors(&self) -> Vec<FieldError> {
        let mut errors: Vec<FieldError> = self
            .errors
            .iter()
            .map(|(field, message)| FieldError::new(field, message))
            .collect();
        errors.sort_by(|a, b| a.field.cmp(&b.field));
        errors
    }

    /// The first failure in field-name order, if any.
    pub fn first_error(&self) -> Option<FieldError> {
        self.field_errors().into_iter().next()
    }
}
