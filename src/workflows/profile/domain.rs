use serde::{Deserialize, Serialize};

use crate::config::DraftPolicy;

use super::attachment::{Attachment, AttachmentError, AttachmentGuard};
use super::lists::{EntryList, ListError, ListRules};

/// Derived validity flags, recomputed after every mutation and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValidityState {
    pub class_number: bool,
    pub majors: bool,
    pub attachment: bool,
    pub positions: bool,
    /// Aggregate gate: class number, majors, and attachment valid plus at
    /// least one non-blank major. Positions are excluded here; the controller
    /// still refuses dispatch while they are inconsistent.
    pub can_submit: bool,
}

/// Wire shape of the applicant's profile resource, used both for the upsert
/// payload and for seeding an edit session from a stored profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePayload {
    pub enroll_year: i32,
    pub department: String,
    pub positions: Vec<String>,
    pub cv_key: String,
}

/// Submission lifecycle phase. `Saving` is the mutual-exclusion guard keeping
/// a second submit from being dispatched while one is outstanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SubmissionPhase {
    Idle,
    Saving,
}

impl SubmissionPhase {
    pub const fn label(self) -> &'static str {
        match self {
            SubmissionPhase::Idle => "idle",
            SubmissionPhase::Saving => "saving",
        }
    }
}

/// The in-progress profile being edited: raw field state plus the validity
/// snapshot derived from it. One instance per editing session.
#[derive(Debug, Clone)]
pub struct ProfileDraft {
    policy: DraftPolicy,
    class_number: String,
    majors: EntryList,
    cv: AttachmentGuard,
    positions: EntryList,
    validity: ValidityState,
}

impl ProfileDraft {
    /// Fresh draft for the create flow: everything blank, one empty row per
    /// list.
    pub fn new(policy: DraftPolicy) -> Self {
        let majors = EntryList::new(ListRules::majors(&policy));
        let positions = EntryList::new(ListRules::positions(&policy));
        Self::assemble(policy, String::new(), majors, AttachmentGuard::new(), positions)
    }

    /// Draft seeded from a stored profile for the edit flow. The class number
    /// is recovered from the enroll year, majors from the comma-joined
    /// department. The résumé must be re-selected; stored keys are not
    /// reusable as attachments.
    pub fn from_existing(profile: &ProfilePayload, policy: DraftPolicy) -> Self {
        let class_number = (profile.enroll_year - 2000).to_string();
        let majors = EntryList::seeded(
            ListRules::majors(&policy),
            profile.department.split(',').map(String::from),
        );
        let positions = if profile.positions.is_empty() {
            EntryList::new(ListRules::positions(&policy))
        } else {
            EntryList::seeded(ListRules::positions(&policy), profile.positions.clone())
        };
        Self::assemble(policy, class_number, majors, AttachmentGuard::new(), positions)
    }

    fn assemble(
        policy: DraftPolicy,
        class_number: String,
        majors: EntryList,
        cv: AttachmentGuard,
        positions: EntryList,
    ) -> Self {
        let mut draft = Self {
            policy,
            class_number,
            majors,
            cv,
            positions,
            validity: ValidityState {
                class_number: false,
                majors: false,
                attachment: false,
                positions: false,
                can_submit: false,
            },
        };
        draft.refresh();
        draft
    }

    pub fn policy(&self) -> &DraftPolicy {
        &self.policy
    }

    pub fn class_number(&self) -> &str {
        &self.class_number
    }

    pub fn majors(&self) -> &EntryList {
        &self.majors
    }

    pub fn positions(&self) -> &EntryList {
        &self.positions
    }

    pub fn attachment(&self) -> Option<&Attachment> {
        self.cv.current()
    }

    pub fn validity(&self) -> &ValidityState {
        &self.validity
    }

    pub fn set_class_number(&mut self, value: impl Into<String>) {
        self.class_number = value.into();
        self.refresh();
    }

    /// Append a blank major row; no-op (returns `false`) at the ceiling.
    pub fn add_major(&mut self) -> bool {
        let appended = self.majors.push_blank();
        self.refresh();
        appended
    }

    pub fn edit_major(&mut self, index: usize, value: impl Into<String>) -> Result<(), ListError> {
        let result = self.majors.edit(index, value);
        self.refresh();
        result
    }

    /// Remove a major row. Index 0 is the primary major and is rejected with
    /// [`ListError::ProtectedEntry`].
    pub fn remove_major(&mut self, index: usize) -> Result<(), ListError> {
        let result = self.majors.remove(index);
        self.refresh();
        result
    }

    pub fn add_position(&mut self) -> bool {
        let appended = self.positions.push_blank();
        self.refresh();
        appended
    }

    /// Edit a position row; the value is clipped to the character cap before
    /// storage, so validators never see an over-long entry.
    pub fn edit_position(
        &mut self,
        index: usize,
        value: impl Into<String>,
    ) -> Result<(), ListError> {
        let result = self.positions.edit(index, value);
        self.refresh();
        result
    }

    pub fn remove_position(&mut self, index: usize) -> Result<(), ListError> {
        let result = self.positions.remove(index);
        self.refresh();
        result
    }

    /// Select a résumé file; non-PDF candidates are rejected and leave the
    /// slot unchanged.
    pub fn select_cv(&mut self, candidate: Attachment) -> Result<(), AttachmentError> {
        let result = self.cv.select(candidate);
        self.refresh();
        result
    }

    pub fn clear_cv(&mut self) {
        self.cv.clear();
        self.refresh();
    }

    fn refresh(&mut self) {
        self.validity = ValidityState::evaluate(self);
    }
}
