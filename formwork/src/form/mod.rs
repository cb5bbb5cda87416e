//! Form controller: field values, error and touched maps, and submission.
//!
//! [`Form`] holds the mutable state the validation engine is stateless
//! about, and decides when validation runs: on blur, on change after a
//! field was touched, and on submit.

mod outcome;
mod state;

pub use outcome::{SubmitError, SubmitOutcome};
pub use state::Form;
