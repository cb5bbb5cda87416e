//! Single-field rules: presence, length bounds, and format checks.

use crate::rules::Rule;
use crate::rules::rule::non_empty_text;
use crate::value::Value;

/// Require the field to carry a meaningful value.
///
/// Fails on unset fields, `false` booleans, and empty or whitespace-only
/// strings. Meaningful falsy values such as `0` pass.
pub fn required() -> Rule {
    Rule::new(|value, _all| match value {
        None => Err("This field is required".to_string()),
        Some(Value::Bool(false)) => Err("This field is required".to_string()),
        Some(v) if v.is_blank() => Err("This field is required".to_string()),
        Some(_) => Ok(()),
    })
}

/// Require minimum length (in characters). No-op on unset or empty values.
pub fn min_length(min: usize) -> Rule {
    Rule::new(move |value, _all| match non_empty_text(value) {
        Some(s) if s.chars().count() < min => {
            Err(format!("Must be at least {min} characters"))
        }
        _ => Ok(()),
    })
}

/// Require maximum length (in characters). No-op on unset or empty values.
pub fn max_length(max: usize) -> Rule {
    Rule::new(move |value, _all| match non_empty_text(value) {
        Some(s) if s.chars().count() > max => {
            Err(format!("Must be at most {max} characters"))
        }
        _ => Ok(()),
    })
}

/// Require the value to match a regex pattern. No-op on unset or empty
/// values.
///
/// An invalid pattern is a configuration error and panics at rule
/// construction time.
pub fn pattern(pattern: &str, message: impl Into<String>) -> Rule {
    let message = message.into();
    let re = regex::Regex::new(pattern).expect("Invalid regex pattern");
    Rule::new(move |value, _all| match non_empty_text(value) {
        Some(s) if !re.is_match(s) => Err(message.clone()),
        _ => Ok(()),
    })
}

/// Require the value to parse as a number when present.
///
/// Number values pass as-is; text must parse as a float. Unset, empty, and
/// boolean values pass.
pub fn numeric() -> Rule {
    Rule::new(|value, _all| match value {
        Some(Value::Str(s)) if !s.trim().is_empty() && s.trim().parse::<f64>().is_err() => {
            Err("Must be a number".to_string())
        }
        _ => Ok(()),
    })
}

/// Require a valid email address. No-op on unset or empty values.
pub fn email() -> Rule {
    Rule::new(|value, _all| match non_empty_text(value) {
        Some(s) if !email_address::EmailAddress::is_valid(s) => {
            Err("Invalid email address".to_string())
        }
        _ => Ok(()),
    })
}

/// Require a valid URL. No-op on unset or empty values.
pub fn url() -> Rule {
    Rule::new(|value, _all| match non_empty_text(value) {
        Some(s) if url::Url::parse(s).is_err() => Err("Invalid URL".to_string()),
        _ => Ok(()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::FormValues;

    fn check(rule: &Rule, value: Option<Value>) -> Result<(), String> {
        let all = FormValues::new();
        rule.check(value.as_ref(), &all)
    }

    #[test]
    fn test_required() {
        let rule = required();
        assert!(check(&rule, None).is_err());
        assert!(check(&rule, Some(Value::from(""))).is_err());
        assert!(check(&rule, Some(Value::from("   "))).is_err());
        assert!(check(&rule, Some(Value::from(false))).is_err());
        assert!(check(&rule, Some(Value::from("x"))).is_ok());
        assert!(check(&rule, Some(Value::from(true))).is_ok());
        // Zero is falsy but meaningful.
        assert!(check(&rule, Some(Value::from(0i64))).is_ok());
    }

    #[test]
    fn test_length_bounds() {
        assert!(check(&min_length(3), Some(Value::from("ab"))).is_err());
        assert!(check(&min_length(3), Some(Value::from("abc"))).is_ok());
        assert!(check(&max_length(3), Some(Value::from("abcd"))).is_err());
        assert!(check(&max_length(3), Some(Value::from("abc"))).is_ok());

        // Empty and unset delegate to required().
        assert!(check(&min_length(3), Some(Value::from(""))).is_ok());
        assert!(check(&min_length(3), None).is_ok());

        // Bounds count characters, not bytes.
        assert!(check(&max_length(3), Some(Value::from("åäö"))).is_ok());
    }

    #[test]
    fn test_pattern() {
        let rule = pattern(r"^[0-9]{4}$", "Must be four digits");
        assert!(check(&rule, Some(Value::from("1234"))).is_ok());
        assert_eq!(
            check(&rule, Some(Value::from("12x4"))),
            Err("Must be four digits".to_string())
        );
        assert!(check(&rule, Some(Value::from(""))).is_ok());
    }

    #[test]
    fn test_numeric() {
        let rule = numeric();
        assert!(check(&rule, Some(Value::from("42"))).is_ok());
        assert!(check(&rule, Some(Value::from("-3.5"))).is_ok());
        assert!(check(&rule, Some(Value::from(7i64))).is_ok());
        assert!(check(&rule, Some(Value::from("abc"))).is_err());
        assert!(check(&rule, None).is_ok());
    }

    #[test]
    fn test_email() {
        let rule = email();
        assert!(check(&rule, Some(Value::from("user@example.com"))).is_ok());
        assert!(check(&rule, Some(Value::from("not-an-email"))).is_err());
        assert!(check(&rule, Some(Value::from(""))).is_ok());
    }

    #[test]
    fn test_url() {
        let rule = url();
        assert!(check(&rule, Some(Value::from("https://example.com"))).is_ok());
        assert!(check(&rule, Some(Value::from("not a url"))).is_err());
        assert!(check(&rule, None).is_ok());
    }
}
