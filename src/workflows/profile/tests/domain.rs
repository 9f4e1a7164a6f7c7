use super::common::*;
use crate::workflows::profile::domain::{ProfileDraft, ProfilePayload};

fn stored_profile() -> ProfilePayload {
    ProfilePayload {
        enroll_year: 2025,
        department: "CS,Math".to_string(),
        positions: vec!["Backend".to_string()],
        cv_key: "static/private/CV/Zx9QmT4bLk_251122/resume.pdf".to_string(),
    }
}

#[test]
fn from_existing_recovers_editable_fields() {
    let draft = ProfileDraft::from_existing(&stored_profile(), policy());

    assert_eq!(draft.class_number(), "25");
    let majors: Vec<&str> = draft.majors().values().collect();
    assert_eq!(majors, vec!["CS", "Math"]);
    let positions: Vec<&str> = draft.positions().values().collect();
    assert_eq!(positions, vec!["Backend"]);

    // The résumé is not recoverable from a storage key.
    assert!(draft.attachment().is_none());
    assert!(!draft.validity().can_submit);
}

#[test]
fn from_existing_seeds_one_blank_position_row_when_none_stored() {
    let mut profile = stored_profile();
    profile.positions.clear();
    let draft = ProfileDraft::from_existing(&profile, policy());
    assert_eq!(draft.positions().len(), 1);
    assert_eq!(draft.positions().get(0), Some(""));
}

#[test]
fn payload_serializes_with_camel_case_field_names() {
    let json = serde_json::to_value(stored_profile()).expect("serializes");
    assert!(json.get("enrollYear").is_some());
    assert!(json.get("department").is_some());
    assert!(json.get("positions").is_some());
    assert!(json.get("cvKey").is_some());
    assert_eq!(json["enrollYear"], 2025);
}

#[test]
fn every_mutation_refreshes_validity_synchronously() {
    let mut draft = ProfileDraft::new(policy());
    assert!(!draft.validity().class_number);

    draft.set_class_number("25");
    assert!(draft.validity().class_number);

    draft.edit_major(0, "CS").expect("primary row exists");
    assert!(draft.validity().majors);

    draft.select_cv(pdf("resume", 1_000)).expect("pdf accepted");
    assert!(draft.validity().attachment);
    assert!(draft.validity().can_submit);

    draft.clear_cv();
    assert!(!draft.validity().can_submit);
}
