use super::domain::{ProfileDraft, ProfilePayload, SubmissionPhase, ValidityState};
use super::payload::{self, KeyMaterial};

/// Seam to the applicant's profile resource. The write is a single atomic
/// upsert; the concrete transport lives with the embedding application.
pub trait ProfileStore: Send + Sync {
    fn upsert(&self, payload: &ProfilePayload) -> Result<(), StoreError>;
}

/// Failure of the external write.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("profile store unavailable: {0}")]
    Unavailable(String),
    #[error("profile store rejected the write: {0}")]
    Rejected(String),
}

/// Result of one submit attempt, for the caller to act on: `Submitted` is the
/// navigate-away signal, `ValidationBlocked` carries the flags to display.
#[derive(Debug)]
pub enum SubmitOutcome {
    Submitted(ProfilePayload),
    ValidationBlocked(ValidityState),
    SubmissionFailed,
    InFlight,
}

/// Drives the `Idle -> Saving -> Idle` lifecycle and invokes the store at
/// most once per attempt. There is no retry and no cancellation; a failed
/// write only logs and reverts to `Idle`.
#[derive(Debug)]
pub struct SubmissionController {
    pub(crate) phase: SubmissionPhase,
}

impl Default for SubmissionController {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionController {
    pub fn new() -> Self {
        Self {
            phase: SubmissionPhase::Idle,
        }
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    /// Attempt to submit the draft. The gate is consulted first; positions
    /// must also be consistent even though they do not feed `can_submit`, so
    /// a duplicate desired position blocks dispatch the same way a missing
    /// required field does.
    pub fn submit<S>(
        &mut self,
        draft: &ProfileDraft,
        store: &S,
        keys: &mut dyn KeyMaterial,
    ) -> SubmitOutcome
    where
        S: ProfileStore + ?Sized,
    {
        if self.phase == SubmissionPhase::Saving {
            return SubmitOutcome::InFlight;
        }

        let validity = *draft.validity();
        if !validity.can_submit || !validity.positions {
            return SubmitOutcome::ValidationBlocked(validity);
        }

        let Some(payload) = payload::build(draft, keys) else {
            return SubmitOutcome::ValidationBlocked(validity);
        };

        self.phase = SubmissionPhase::Saving;
        let outcome = match store.upsert(&payload) {
            Ok(()) => SubmitOutcome::Submitted(payload),
            Err(err) => {
                tracing::warn!(error = %err, "profile save failed");
                SubmitOutcome::SubmissionFailed
            }
        };
        self.phase = SubmissionPhase::Idle;
        outcome
    }
}
