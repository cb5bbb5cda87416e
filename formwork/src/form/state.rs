use std::collections::HashSet;
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::engine;
use crate::form::{SubmitError, SubmitOutcome};
use crate::schema::Schema;
use crate::value::{ErrorMap, FormValues, RawInput, Value};

/// Mutable state owned by a form instance.
#[derive(Debug, Default)]
struct FormInner {
    /// Current value per field.
    values: FormValues,
    /// Failure message per field, written only when the field is validated.
    errors: ErrorMap,
    /// Fields that received a blur at least once. Monotonic until reset.
    touched: HashSet<String>,
}

/// Form controller: owns values, errors, touched state, and the submitting
/// flag, and mediates change/blur/submit/reset events.
///
/// `Form` is a cheap-to-clone handle; clones share the same state, so a
/// rendering layer can keep one per widget. Each operation takes the
/// interior lock once, so events appear atomic to concurrent observers.
/// Errors are recorded only when a field is validated (on blur, on change
/// after the field was touched, and on submit), so untouched fields never
/// surface errors before submission.
///
/// # Example
///
/// ```
/// use formwork::prelude::*;
///
/// let schema = Schema::builder()
///     .field("username", [required()])
///     .build();
/// let form = Form::new(schema, FormValues::new());
///
/// form.change("username", "norpie");
/// form.blur("username");
/// assert!(form.is_valid());
/// ```
#[derive(Debug, Clone)]
pub struct Form {
    /// The rule table, fixed at construction.
    schema: Arc<Schema>,
    /// Initial snapshot restored by `reset`.
    initial: Arc<FormValues>,
    /// Mutable per-instance state.
    inner: Arc<RwLock<FormInner>>,
    /// True only while a valid submit's handler is in flight.
    submitting: Arc<AtomicBool>,
    /// True once any value changed since construction or the last reset.
    dirty: Arc<AtomicBool>,
}

impl Form {
    /// Create a form from a schema and an initial value snapshot.
    ///
    /// The form never reads ambient state; everything it knows arrives
    /// through these two arguments.
    pub fn new(schema: Schema, initial: FormValues) -> Self {
        Self {
            schema: Arc::new(schema),
            inner: Arc::new(RwLock::new(FormInner {
                values: initial.clone(),
                errors: ErrorMap::new(),
                touched: HashSet::new(),
            })),
            initial: Arc::new(initial),
            submitting: Arc::new(AtomicBool::new(false)),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// The rule table this form validates against.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    fn read(&self) -> RwLockReadGuard<'_, FormInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, FormInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// Snapshot of the current values.
    pub fn values(&self) -> FormValues {
        self.read().values.clone()
    }

    /// Current value of one field.
    pub fn value(&self, name: &str) -> Option<Value> {
        self.read().values.get(name).cloned()
    }

    /// Snapshot of the current error map.
    pub fn errors(&self) -> ErrorMap {
        self.read().errors.clone()
    }

    /// Current failure message for one field, if recorded.
    pub fn error(&self, name: &str) -> Option<String> {
        self.read().errors.get(name).cloned()
    }

    /// Check whether a field has been blurred at least once.
    pub fn is_touched(&self, name: &str) -> bool {
        self.read().touched.contains(name)
    }

    /// Snapshot of all touched field names.
    pub fn touched(&self) -> HashSet<String> {
        self.read().touched.clone()
    }

    /// Check whether no failures are currently recorded.
    ///
    /// Untouched fields may not have been validated yet; `submit` is the
    /// authoritative whole-form check.
    pub fn is_valid(&self) -> bool {
        self.read().errors.is_empty()
    }

    /// Check whether a submit handler is currently in flight.
    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::SeqCst)
    }

    /// Check whether any value changed since construction or the last reset.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    // -------------------------------------------------------------------------
    // Event handlers
    // -------------------------------------------------------------------------

    /// Record a user edit to one field.
    ///
    /// Raw input is coerced per the field's declared kind (checkbox-like
    /// fields become booleans, everything else keeps the raw string). If the
    /// field was already touched, it is re-validated against the new
    /// snapshot immediately; untouched fields only store the value.
    pub fn change(&self, name: &str, raw: impl Into<RawInput>) {
        let value = self.schema.kind_of(name).coerce(raw.into());
        self.store(name, value);
    }

    /// Record that one field lost focus.
    ///
    /// Marks the field touched (idempotent) and validates it regardless of
    /// prior touched state.
    pub fn blur(&self, name: &str) {
        let mut inner = self.write();
        inner.touched.insert(name.to_string());
        self.revalidate(&mut inner, name);
        log::trace!("blur: {name}");
    }

    /// Programmatically set a field value, bypassing kind coercion.
    ///
    /// Follows the same touched-gated re-validation as [`Form::change`].
    pub fn set_value(&self, name: &str, value: impl Into<Value>) {
        self.store(name, value.into());
    }

    /// Programmatically record a failure message for a field.
    pub fn set_error(&self, name: &str, message: impl Into<String>) {
        self.write().errors.insert(name.to_string(), message.into());
    }

    fn store(&self, name: &str, value: Value) {
        let mut inner = self.write();
        inner.values.insert(name.to_string(), value);
        self.dirty.store(true, Ordering::SeqCst);
        if inner.touched.contains(name) {
            self.revalidate(&mut inner, name);
        }
    }

    /// Re-run one field's chain and update its error entry in place.
    fn revalidate(&self, inner: &mut FormInner, name: &str) {
        let message = engine::validate_field(
            self.schema.rules_of(name),
            inner.values.get(name),
            &inner.values,
        );
        match message {
            Some(message) => {
                inner.errors.insert(name.to_string(), message);
            }
            None => {
                inner.errors.remove(name);
            }
        }
    }

    // -------------------------------------------------------------------------
    // Submission
    // -------------------------------------------------------------------------

    /// Validate the whole form and, if valid, run the caller's submit
    /// handler with a snapshot of the values.
    ///
    /// Every declared field is marked touched first so all failures become
    /// visible. On any failure the handler is never invoked and the
    /// submitting flag is never set. While a handler is in flight a second
    /// submit returns [`SubmitOutcome::AlreadyInFlight`]; change and blur
    /// events keep working. A handler error is caught here and returned as
    /// [`SubmitOutcome::Failed`]; the submitting flag clears either way.
    pub async fn submit<F, Fut, E>(&self, on_valid: F) -> SubmitOutcome
    where
        F: FnOnce(FormValues) -> Fut,
        Fut: Future<Output = Result<(), E>>,
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        let snapshot = {
            // The in-flight check and the flag set share the write lock, so
            // two submits cannot both pass validation and interleave.
            let mut inner = self.write();
            if self.submitting.load(Ordering::SeqCst) {
                log::debug!("submit ignored: another submit is in flight");
                return SubmitOutcome::AlreadyInFlight;
            }

            for field in self.schema.fields() {
                inner.touched.insert(field.name().to_string());
            }
            let report = engine::validate_all(&self.schema, &inner.values);
            inner.errors = report.errors().clone();
            if report.is_invalid() {
                log::debug!("submit rejected: {} field(s) invalid", report.errors().len());
                return SubmitOutcome::Rejected(report);
            }

            self.submitting.store(true, Ordering::SeqCst);
            inner.values.clone()
        };

        log::debug!("submit accepted, awaiting handler");
        let result = on_valid(snapshot).await;
        self.submitting.store(false, Ordering::SeqCst);

        match result {
            Ok(()) => SubmitOutcome::Completed,
            Err(error) => {
                let error = SubmitError::new(error);
                log::debug!("{error}");
                SubmitOutcome::Failed(error)
            }
        }
    }

    /// Restore the initial snapshot and clear errors, touched state, the
    /// submitting flag, and the dirty flag.
    pub fn reset(&self) {
        let mut inner = self.write();
        inner.values = (*self.initial).clone();
        inner.errors.clear();
        inner.touched.clear();
        self.submitting.store(false, Ordering::SeqCst);
        self.dirty.store(false, Ordering::SeqCst);
        log::debug!("form reset to initial snapshot");
    }
}
