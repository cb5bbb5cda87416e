//! Cross-field rules: checks that depend on another field's current value.

use chrono::NaiveDate;

use crate::rules::Rule;
use crate::rules::rule::non_empty_text;
use crate::value::Value;

/// Require a present value to equal another field's current value.
///
/// Used for confirmation fields. Unset values pass; presence is
/// `required`'s job.
pub fn equals_field(other: impl Into<String>) -> Rule {
    let other = other.into();
    Rule::new(move |value, all| match value {
        Some(v) if all.get(&other) != Some(v) => Err(format!("Must match {other}")),
        _ => Ok(()),
    })
}

/// Evaluate `inner` only while another field holds an expected value.
///
/// While the condition field differs from `expected` (or is unset), the
/// wrapped rule is inactive and the field is valid.
pub fn when_field_is(other: impl Into<String>, expected: impl Into<Value>, inner: Rule) -> Rule {
    let other = other.into();
    let expected = expected.into();
    Rule::new(move |value, all| {
        if all.get(&other) == Some(&expected) {
            inner.check(value, all)
        } else {
            Ok(())
        }
    })
}

/// Require an ISO date (`YYYY-MM-DD`) to be strictly after another field's
/// date.
///
/// Compares two field values only, never the clock. Passes when either side
/// is unset or unparseable; format enforcement belongs to `pattern` or
/// `required`.
pub fn after_field(other: impl Into<String>) -> Rule {
    let other = other.into();
    Rule::new(move |value, all| {
        match (parse_date(value), parse_date(all.get(&other))) {
            (Some(end), Some(start)) if end <= start => Err(format!("Must be after {other}")),
            _ => Ok(()),
        }
    })
}

fn parse_date(value: Option<&Value>) -> Option<NaiveDate> {
    let text = non_empty_text(value)?;
    NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::pattern;
    use crate::value::FormValues;

    fn values(pairs: &[(&str, Value)]) -> FormValues {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_equals_field() {
        let rule = equals_field("password");
        let all = values(&[
            ("password", Value::from("Abc12345!")),
            ("confirm_password", Value::from("Abc12345!")),
        ]);
        assert!(rule.check(all.get("confirm_password"), &all).is_ok());

        let all = values(&[
            ("password", Value::from("Abc12345!")),
            ("confirm_password", Value::from("mismatch")),
        ]);
        assert!(rule.check(all.get("confirm_password"), &all).is_err());

        // Unset value passes; required() owns presence.
        assert!(rule.check(None, &all).is_ok());
    }

    #[test]
    fn test_equals_field_custom_message() {
        let rule = equals_field("password").with_message("Passwords must match");
        let all = values(&[("password", Value::from("a"))]);
        assert_eq!(
            rule.check(Some(&Value::from("b")), &all),
            Err("Passwords must match".to_string())
        );
    }

    #[test]
    fn test_when_field_is_gates_inner_rule() {
        let rule = when_field_is(
            "country",
            "Mexico",
            pattern(r"^(\+52\s?)?[0-9]{10}$", "Invalid Mexican phone number"),
        );

        let all = values(&[("country", Value::from("Mexico")), ("phone", Value::from("abc"))]);
        assert!(rule.check(all.get("phone"), &all).is_err());

        let all = values(&[("country", Value::from("Mexico")), ("phone", Value::from("5512345678"))]);
        assert!(rule.check(all.get("phone"), &all).is_ok());

        // Condition field holds a different value: rule is inactive.
        let all = values(&[("country", Value::from("USA")), ("phone", Value::from("abc"))]);
        assert!(rule.check(all.get("phone"), &all).is_ok());

        // Condition field unset: rule is inactive.
        let all = values(&[("phone", Value::from("abc"))]);
        assert!(rule.check(all.get("phone"), &all).is_ok());
    }

    #[test]
    fn test_after_field() {
        let rule = after_field("start_date");
        let all = values(&[("start_date", Value::from("2026-01-10"))]);

        assert!(rule.check(Some(&Value::from("2026-01-11")), &all).is_ok());
        assert!(rule.check(Some(&Value::from("2026-01-10")), &all).is_err());
        assert!(rule.check(Some(&Value::from("2026-01-09")), &all).is_err());

        // Unparseable or unset dates pass through.
        assert!(rule.check(Some(&Value::from("soon")), &all).is_ok());
        assert!(rule.check(None, &all).is_ok());
    }

    #[test]
    fn test_missing_condition_field_is_deterministic() {
        // A rule referencing a nonexistent field never activates.
        let rule = when_field_is("no_such_field", "x", pattern("^$", "boom"));
        let all = values(&[("phone", Value::from("abc"))]);
        assert!(rule.check(all.get("phone"), &all).is_ok());
    }
}
