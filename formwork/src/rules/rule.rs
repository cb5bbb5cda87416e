//! The rule type shared by every constructor in the library.

use std::fmt;
use std::sync::Arc;

use crate::value::{FormValues, Value};

/// Type alias for the boxed check closure behind a [`Rule`].
type CheckFn = dyn Fn(Option<&Value>, &FormValues) -> Result<(), String> + Send + Sync;

/// A single validation rule for one field.
///
/// A rule is a pure function of the field's current value and the full value
/// snapshot (for cross-field rules). `Err` carries the human-readable failure
/// message; `Ok(())` means the rule passed. Rules never mutate their inputs
/// and identical inputs always yield identical results.
///
/// Rules are cheap to clone; clones share the underlying closure.
#[derive(Clone)]
pub struct Rule {
    check: Arc<CheckFn>,
}

impl Rule {
    /// Create a rule from a check closure.
    pub fn new<F>(check: F) -> Self
    where
        F: Fn(Option<&Value>, &FormValues) -> Result<(), String> + Send + Sync + 'static,
    {
        Self {
            check: Arc::new(check),
        }
    }

    /// Run the rule against a field value and the full snapshot.
    pub fn check(&self, value: Option<&Value>, all: &FormValues) -> Result<(), String> {
        (self.check)(value, all)
    }

    /// Replace whatever message this rule would produce with a fixed one.
    ///
    /// For composite rules this collapses the per-predicate messages into a
    /// single combined pass/fail message.
    pub fn with_message(self, message: impl Into<String>) -> Self {
        let message = message.into();
        let inner = self.check;
        Self {
            check: Arc::new(move |value, all| (inner)(value, all).map_err(|_| message.clone())),
        }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule").finish_non_exhaustive()
    }
}

/// Non-empty text content of a value, for rules that no-op on unset or
/// empty fields (presence is `required`'s job).
pub(crate) fn non_empty_text(value: Option<&Value>) -> Option<&str> {
    match value {
        Some(Value::Str(s)) if !s.is_empty() => Some(s),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_message_overrides_failure_only() {
        let rule = Rule::new(|value, _all| match value {
            Some(_) => Ok(()),
            None => Err("original".to_string()),
        })
        .with_message("override");

        let all = FormValues::new();
        assert_eq!(rule.check(None, &all), Err("override".to_string()));
        assert_eq!(rule.check(Some(&Value::from("x")), &all), Ok(()));
    }
}
