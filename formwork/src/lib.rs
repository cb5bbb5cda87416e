//! Form state and validation engine.
//!
//! A renderer-agnostic controller for form-shaped state: per-field values,
//! ordered validator chains with cross-field rules, touched tracking with
//! real-time feedback gating, and race-free asynchronous submission. The
//! caller supplies initial values and a rule table and renders the state
//! however it likes; nothing here draws, routes, or persists.
//!
//! # Example
//!
//! ```
//! use formwork::prelude::*;
//!
//! # async fn demo() {
//! let schema = Schema::builder()
//!     .field("email", [required(), email()])
//!     .field("password", [required(), strength(StrengthConfig::default())])
//!     .field("confirm", [required(), equals_field("password")])
//!     .checkbox("terms", [required()])
//!     .build();
//!
//! let form = Form::new(schema, FormValues::new());
//! form.change("email", "user@example.com");
//! form.blur("email");
//!
//! let outcome = form
//!     .submit(|values| async move {
//!         println!("delivering {} field(s)", values.len());
//!         Ok::<(), std::io::Error>(())
//!     })
//!     .await;
//!
//! if let Some(report) = outcome.report() {
//!     for error in report.field_errors() {
//!         eprintln!("{error}");
//!     }
//! }
//! # }
//! ```

pub mod engine;
pub mod form;
pub mod rules;
pub mod schema;
pub mod value;

pub use engine::{FieldError, ValidationReport};
pub use form::{Form, SubmitError, SubmitOutcome};
pub use schema::{FieldSpec, Schema, SchemaBuilder};
pub use value::{ErrorMap, FieldKind, FormValues, RawInput, Value};

pub mod prelude {
    pub use crate::engine::{FieldError, ValidationReport, validate_all, validate_field};
    pub use crate::form::{Form, SubmitError, SubmitOutcome};
    pub use crate::rules::{
        Rule, StrengthConfig, after_field, email, equals_field, max_length, min_length, numeric,
        pattern, required, strength, url, when_field_is,
    };
    pub use crate::schema::{FieldSpec, Schema, SchemaBuilder};
    pub use crate::value::{ErrorMap, FieldKind, FormValues, RawInput, Value};
}
