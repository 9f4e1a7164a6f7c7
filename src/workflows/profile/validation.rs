use std::collections::HashSet;

use super::attachment::Attachment;
use super::domain::{ProfileDraft, ValidityState};

/// Exactly two characters, both ASCII decimal digits. A longer all-digit
/// string fails the length constraint; the two checks are conjunctive.
pub fn class_number_valid(value: &str) -> bool {
    value.len() == 2 && value.bytes().all(|b| b.is_ascii_digit())
}

/// The primary major (index 0) must be non-empty, and the full list as given
/// must carry no duplicate values. Equality is exact-string: two blank rows
/// past the head count as duplicates, and no trimming is applied here.
pub fn majors_valid(values: &[&str]) -> bool {
    let primary_filled = values.first().is_some_and(|first| !first.is_empty());
    let mut seen = HashSet::new();
    let all_distinct = values.iter().all(|value| seen.insert(*value));
    primary_filled && all_distinct
}

/// Trim every entry, ignore blanks, then require the remainder to be pairwise
/// distinct and within the length cap. Blank rows stay in the list as
/// user-visible placeholders; they just do not participate in the check.
pub fn positions_valid(values: &[&str], max_chars: usize) -> bool {
    let filled: Vec<&str> = values
        .iter()
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .collect();

    let within_cap = filled.iter().all(|value| value.chars().count() <= max_chars);
    let mut seen = HashSet::new();
    let no_duplicates = filled.iter().all(|value| seen.insert(*value));

    within_cap && no_duplicates
}

/// Present, PDF, and strictly under the size ceiling.
pub fn attachment_valid(attachment: &Attachment, max_bytes: u64) -> bool {
    attachment.mime_type == mime::APPLICATION_PDF && attachment.byte_size < max_bytes
}

impl ValidityState {
    /// Recompute every flag from the current draft. Each validator runs
    /// unconditionally so no flag is left stale by short-circuiting.
    pub fn evaluate(draft: &ProfileDraft) -> ValidityState {
        let policy = draft.policy();

        let class_number = class_number_valid(draft.class_number());

        let major_values: Vec<&str> = draft.majors().values().collect();
        let majors = majors_valid(&major_values);

        let attachment = draft
            .attachment()
            .is_some_and(|file| attachment_valid(file, policy.max_attachment_bytes));

        let position_values: Vec<&str> = draft.positions().values().collect();
        let positions = positions_valid(&position_values, policy.max_position_chars);

        let has_named_major = major_values.iter().any(|value| !value.is_empty());
        let can_submit = class_number && majors && attachment && has_named_major;

        ValidityState {
            class_number,
            majors,
            attachment,
            positions,
            can_submit,
        }
    }
}
