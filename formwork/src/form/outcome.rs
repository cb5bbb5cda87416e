//! Submit outcome and submission error types.

use crate::engine::ValidationReport;

/// Error returned by a caller-supplied submit handler.
///
/// Caught at the controller boundary and surfaced through
/// [`SubmitOutcome::Failed`]; never re-thrown into a surrounding context.
#[derive(Debug, thiserror::Error)]
#[error("submit handler failed: {source}")]
pub struct SubmitError {
    #[source]
    source: Box<dyn std::error::Error + Send + Sync>,
}

impl SubmitError {
    /// Wrap a handler error.
    pub fn new(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Borrow the underlying handler error.
    pub fn get_ref(&self) -> &(dyn std::error::Error + Send + Sync) {
        self.source.as_ref()
    }

    /// Consume the wrapper, keeping the handler error.
    pub fn into_inner(self) -> Box<dyn std::error::Error + Send + Sync> {
        self.source
    }
}

/// Result of a submit attempt.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Validation passed and the submit handler resolved successfully.
    Completed,
    /// Validation failed; the handler was never invoked.
    Rejected(ValidationReport),
    /// Another submit was still awaiting its handler; this one was ignored.
    AlreadyInFlight,
    /// Validation passed but the submit handler returned an error.
    Failed(SubmitError),
}

impl SubmitOutcome {
    /// Check if the submit went through.
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Check if validation rejected the submit.
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }

    /// The validation report, when the submit was rejected.
    pub fn report(&self) -> Option<&ValidationReport> {
        match self {
            Self::Rejected(report) => Some(report),
            _ => None,
        }
    }

    /// The handler error, when the submit failed.
    pub fn error(&self) -> Option<&SubmitError> {
        match self {
            Self::Failed(error) => Some(error),
            _ => None,
        }
    }
}
