//! Composite password-strength rule.

use serde::{Deserialize, Serialize};

use crate::rules::Rule;
use crate::rules::rule::non_empty_text;

/// Symbols accepted by the symbol-class check.
const SYMBOLS: &str = "!@#$%^&*";

/// Configuration for the [`strength`] rule.
///
/// Each predicate can be toggled independently; the default requires eight
/// characters and all four character classes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthConfig {
    /// Minimum length in characters.
    pub min_length: usize,
    /// Require at least one uppercase letter.
    pub require_uppercase: bool,
    /// Require at least one lowercase letter.
    pub require_lowercase: bool,
    /// Require at least one digit.
    pub require_digit: bool,
    /// Require at least one symbol (`!@#$%^&*`).
    pub require_symbol: bool,
}

impl Default for StrengthConfig {
    fn default() -> Self {
        Self {
            min_length: 8,
            require_uppercase: true,
            require_lowercase: true,
            require_digit: true,
            require_symbol: true,
        }
    }
}

/// Check password strength against a set of independent predicates.
///
/// The first failing predicate wins and contributes its own message; chain
/// [`Rule::with_message`] to collapse them into a single combined message.
/// No-op on unset or empty values (presence is `required`'s job).
pub fn strength(config: StrengthConfig) -> Rule {
    Rule::new(move |value, _all| {
        let Some(s) = non_empty_text(value) else {
            return Ok(());
        };

        if s.chars().count() < config.min_length {
            return Err(format!("Must be at least {} characters", config.min_length));
        }
        if config.require_uppercase && !s.chars().any(|c| c.is_uppercase()) {
            return Err("Must contain at least one uppercase letter".to_string());
        }
        if config.require_lowercase && !s.chars().any(|c| c.is_lowercase()) {
            return Err("Must contain at least one lowercase letter".to_string());
        }
        if config.require_digit && !s.chars().any(|c| c.is_ascii_digit()) {
            return Err("Must contain at least one digit".to_string());
        }
        if config.require_symbol && !s.chars().any(|c| SYMBOLS.contains(c)) {
            return Err(format!("Must contain at least one symbol ({SYMBOLS})"));
        }

        Ok(())
    })
}
