//! Rule library: parametrized constructors producing [`Rule`] values.
//!
//! Every constructor returns a pure rule over `(field value, full snapshot)`
//! with a default message; override the message with [`Rule::with_message`].
//!
//! # Example
//!
//! ```
//! use formwork::rules::{email, equals_field, min_length, required};
//! use formwork::value::{FormValues, Value};
//!
//! let chain = vec![
//!     required().with_message("Email is required"),
//!     email(),
//! ];
//!
//! let mut all = FormValues::new();
//! all.insert("email".to_string(), Value::from("user@example.com"));
//! for rule in &chain {
//!     assert!(rule.check(all.get("email"), &all).is_ok());
//! }
//! ```

mod basic;
mod cross;
mod rule;
mod strength;

pub use basic::{email, max_length, min_length, numeric, pattern, required, url};
pub use cross::{after_field, equals_field, when_field_is};
pub use rule::Rule;
pub use strength::{StrengthConfig, strength};
