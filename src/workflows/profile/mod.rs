//! Applicant profile draft intake: field validation, dynamic major/position
//! lists, résumé attachment rules, and the gated submission lifecycle.
//!
//! The draft is a single in-memory editing session. Every mutation re-runs the
//! pure validity recompute before returning, so callers always observe a
//! consistent [`ValidityState`]. The actual profile write goes through the
//! [`ProfileStore`] seam; rendering and routing stay with the caller.

pub mod attachment;
pub mod domain;
pub mod lists;
pub mod payload;
pub mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use attachment::{Attachment, AttachmentError, AttachmentGuard};
pub use domain::{ProfileDraft, ProfilePayload, SubmissionPhase, ValidityState};
pub use lists::{EntryList, ListError, ListRules, Row, RowKey};
pub use payload::{KeyMaterial, SystemKeyMaterial};
pub use service::{ProfileStore, StoreError, SubmissionController, SubmitOutcome};
