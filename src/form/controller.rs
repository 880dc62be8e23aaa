use serde_json::Value;
use tracing::{debug, error, warn};

use crate::domain::SavedEntity;
use crate::notify::{GENERIC_FAILURE_MESSAGE, Notifier, REVIEW_ERRORS_MESSAGE, SAVED_MESSAGE};
use crate::service::MutationError;

use super::state::FormState;
use super::validation::ValidationPolicy;

/// Where the form sits in its lifecycle. `Clean` is both the initial state
/// and the terminal state of a successful submission; any edit re-enters
/// `Dirty`, including after a rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Clean,
    Dirty,
    Validating,
    SubmittingRemote,
    ValidationFailed,
    ServerRejected,
}

/// Tri-state outcome of a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionResult {
    /// Persisted, or nothing to do (a clean form submits as a no-op success).
    Saved,
    /// Client-side validation failed; no network call was made.
    Invalid,
    /// The server rejected the mutation, or the transport failed.
    Rejected,
}

impl SubmissionResult {
    pub const fn is_saved(self) -> bool {
        matches!(self, Self::Saved)
    }
}

/// Drives one editor's submit lifecycle: skip when clean, validate, persist
/// through the mutation seam, and reconcile whatever comes back. The form is
/// left in its pre-submit edited state on every failure so the user can
/// correct and retry.
#[derive(Debug)]
pub struct FormController {
    state: FormState,
    policy: ValidationPolicy,
    phase: FormPhase,
    submitting: bool,
    error_list: Vec<String>,
}

impl FormController {
    pub fn new(state: FormState, policy: ValidationPolicy) -> Self {
        Self {
            state,
            policy,
            phase: FormPhase::Clean,
            submitting: false,
            error_list: Vec::new(),
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Reseeds from a fresh entity snapshot, dropping edits and errors.
    pub fn reset(&mut self, state: FormState) {
        self.state = state;
        self.phase = FormPhase::Clean;
        self.error_list.clear();
    }

    pub fn set_field(&mut self, field: &str, value: impl Into<Value>) {
        self.state.set(field, value);
        self.phase = FormPhase::Dirty;
    }

    pub fn set_nested_field(&mut self, field: &str, key: &str, value: impl Into<Value>) {
        self.state.set_nested(field, key, value);
        self.phase = FormPhase::Dirty;
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Advisory loading flag; callers disable the save control while true.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Field-scoped server errors flattened into one ordered list for
    /// prominent display above the form.
    pub fn error_list(&self) -> &[String] {
        &self.error_list
    }

    /// Validates and persists the current form.
    ///
    /// `persist` performs the mutation; `refetch` re-synchronizes the backing
    /// entity after a successful save. The submitting flag is cleared on
    /// every exit path.
    pub fn submit<P, R>(
        &mut self,
        notifier: &mut dyn Notifier,
        persist: P,
        refetch: R,
    ) -> SubmissionResult
    where
        P: FnOnce(&Value) -> Result<SavedEntity, MutationError>,
        R: FnOnce() -> anyhow::Result<()>,
    {
        if !self.state.is_dirty() {
            debug!("no changes detected, submission skipped");
            return SubmissionResult::Saved;
        }
        self.submitting = true;
        let result = self.run_submission(notifier, persist, refetch);
        self.submitting = false;
        result
    }

    fn run_submission<P, R>(
        &mut self,
        notifier: &mut dyn Notifier,
        persist: P,
        refetch: R,
    ) -> SubmissionResult
    where
        P: FnOnce(&Value) -> Result<SavedEntity, MutationError>,
        R: FnOnce() -> anyhow::Result<()>,
    {
        self.phase = FormPhase::Validating;
        self.state.clear_errors();
        self.error_list.clear();

        let issues = self.policy.validate(&self.state);
        if !issues.is_empty() {
            self.state.replace_errors(issues);
            notifier.error(REVIEW_ERRORS_MESSAGE);
            self.phase = FormPhase::ValidationFailed;
            return SubmissionResult::Invalid;
        }

        self.phase = FormPhase::SubmittingRemote;
        match persist(&self.state.to_payload()) {
            Ok(saved) => {
                if let Err(err) = refetch() {
                    warn!(error = %err, "refetch after save failed");
                }
                notifier.success(SAVED_MESSAGE);
                self.state.mark_clean();
                self.phase = FormPhase::Clean;
                debug!(uuid = %saved.uuid, "entity persisted");
                SubmissionResult::Saved
            }
            Err(MutationError::Rejected(rejection)) => {
                error!(message = ?rejection.message, "mutation rejected");
                if rejection.message.is_none() && rejection.field_errors.is_empty() {
                    notifier.error(GENERIC_FAILURE_MESSAGE);
                } else {
                    if !rejection.field_errors.is_empty() {
                        self.error_list = rejection
                            .field_errors
                            .values()
                            .flatten()
                            .cloned()
                            .collect();
                        self.state.replace_errors(rejection.field_errors);
                    }
                    if let Some(message) = rejection.message {
                        notifier.error(&message);
                    }
                }
                self.phase = FormPhase::ServerRejected;
                SubmissionResult::Rejected
            }
            Err(err @ MutationError::Transport(_)) => {
                error!(error = %err, "mutation failed");
                notifier.error(GENERIC_FAILURE_MESSAGE);
                self.phase = FormPhase::ServerRejected;
                SubmissionResult::Rejected
            }
        }
    }
}
