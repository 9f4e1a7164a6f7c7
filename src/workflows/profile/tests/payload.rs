use super::common::*;
use crate::workflows::profile::domain::ProfileDraft;
use crate::workflows::profile::payload::{self, storage_key, KeyMaterial};

#[test]
fn storage_key_follows_the_documented_layout() {
    let mut keys = FixedKeys;
    let key = storage_key("resume", &mut keys);
    assert_eq!(key, "static/private/CV/Zx9QmT4bLk_251122/resume.pdf");
}

#[test]
fn system_key_material_draws_ten_alnum_chars() {
    use crate::workflows::profile::payload::SystemKeyMaterial;

    let mut keys = SystemKeyMaterial;
    let random = keys.random_alnum(10);
    assert_eq!(random.len(), 10);
    assert!(random.bytes().all(|b| b.is_ascii_alphanumeric()));
}

#[test]
fn build_emits_the_wire_payload_from_a_gated_draft() {
    let mut draft = filled_draft();
    draft.add_major();
    draft.edit_major(1, "Math").expect("row exists");
    draft.add_position();
    draft.edit_position(1, "  Infra  ").expect("row exists");

    let mut keys = FixedKeys;
    let payload = payload::build(&draft, &mut keys).expect("gated draft builds");

    assert_eq!(payload.enroll_year, 2025);
    assert_eq!(payload.department, "CS,Math");
    assert_eq!(payload.positions, vec!["Backend", "Infra"]);
    assert_eq!(
        payload.cv_key,
        "static/private/CV/Zx9QmT4bLk_251122/resume.pdf"
    );
}

#[test]
fn department_join_skips_blank_major_rows() {
    let mut draft = filled_draft();
    draft.add_major();

    let mut keys = FixedKeys;
    let payload = payload::build(&draft, &mut keys).expect("blank rows tolerated");
    assert_eq!(payload.department, "CS");
}

#[test]
fn blank_position_rows_are_dropped_from_the_payload() {
    let mut draft = filled_draft();
    draft.add_position();
    draft.edit_position(1, "   ").expect("row exists");

    let mut keys = FixedKeys;
    let payload = payload::build(&draft, &mut keys).expect("builds");
    assert_eq!(payload.positions, vec!["Backend"]);
}

#[test]
fn build_refuses_a_draft_without_an_attachment() {
    let mut draft = filled_draft();
    draft.clear_cv();
    let mut keys = FixedKeys;
    assert!(payload::build(&draft, &mut keys).is_none());
}

#[test]
fn key_material_date_formats_zero_padded() {
    struct EarlyDate;
    impl KeyMaterial for EarlyDate {
        fn random_alnum(&mut self, len: usize) -> String {
            "0".repeat(len)
        }
        fn today(&self) -> chrono::NaiveDate {
            chrono::NaiveDate::from_ymd_opt(2026, 1, 5).expect("valid date")
        }
    }

    let key = storage_key("cv", &mut EarlyDate);
    assert_eq!(key, "static/private/CV/0000000000_260105/cv.pdf");
}
