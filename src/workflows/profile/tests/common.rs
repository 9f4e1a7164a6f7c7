use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use chrono::NaiveDate;

use crate::config::DraftPolicy;
use crate::workflows::profile::attachment::Attachment;
use crate::workflows::profile::domain::{ProfileDraft, ProfilePayload};
use crate::workflows::profile::payload::KeyMaterial;
use crate::workflows::profile::service::{ProfileStore, StoreError};

pub(super) fn policy() -> DraftPolicy {
    DraftPolicy::default()
}

pub(super) fn pdf(name: &str, byte_size: u64) -> Attachment {
    Attachment {
        name: name.to_string(),
        byte_size,
        mime_type: mime::APPLICATION_PDF,
    }
}

pub(super) fn png(name: &str) -> Attachment {
    Attachment {
        name: name.to_string(),
        byte_size: 1_000,
        mime_type: mime::IMAGE_PNG,
    }
}

/// Draft satisfying the gate: class "25", primary major "CS", a small valid
/// PDF, and one desired position.
pub(super) fn filled_draft() -> ProfileDraft {
    let mut draft = ProfileDraft::new(policy());
    draft.set_class_number("25");
    draft.edit_major(0, "CS").expect("primary row exists");
    draft.select_cv(pdf("resume", 1_000)).expect("pdf accepted");
    draft.edit_position(0, "Backend").expect("position row exists");
    draft
}

/// Deterministic key material so payload tests assert exact storage keys.
pub(super) struct FixedKeys;

impl KeyMaterial for FixedKeys {
    fn random_alnum(&mut self, len: usize) -> String {
        "Zx9QmT4bLkWp".chars().take(len).collect()
    }

    fn today(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, 22).expect("valid date")
    }
}

/// In-memory store recording every upsert; can be armed to fail once.
#[derive(Default)]
pub(super) struct MemoryStore {
    writes: Mutex<Vec<ProfilePayload>>,
    fail_next: AtomicBool,
}

impl MemoryStore {
    pub(super) fn fail_next(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    pub(super) fn writes(&self) -> Vec<ProfilePayload> {
        self.writes.lock().expect("store mutex poisoned").clone()
    }
}

impl ProfileStore for MemoryStore {
    fn upsert(&self, payload: &ProfilePayload) -> Result<(), StoreError> {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(StoreError::Unavailable("connection reset".to_string()));
        }
        self.writes
            .lock()
            .expect("store mutex poisoned")
            .push(payload.clone());
        Ok(())
    }
}
