use chrono::{Local, NaiveDate};
use rand::Rng;

use super::domain::{ProfileDraft, ProfilePayload};

const KEY_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
const KEY_RANDOM_LEN: usize = 10;
const CV_KEY_PREFIX: &str = "static/private/CV";

/// Source of the non-deterministic inputs to storage-key generation. Tests
/// substitute a fixed implementation so the emitted key is exact.
pub trait KeyMaterial {
    fn random_alnum(&mut self, len: usize) -> String;
    fn today(&self) -> NaiveDate;
}

/// Production key material: thread-local RNG and the local system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemKeyMaterial;

impl KeyMaterial for SystemKeyMaterial {
    fn random_alnum(&mut self, len: usize) -> String {
        let mut rng = rand::thread_rng();
        (0..len)
            .map(|_| KEY_ALPHABET[rng.gen_range(0..KEY_ALPHABET.len())] as char)
            .collect()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Storage key for the uploaded résumé:
/// `static/private/CV/{10 alnum}_{YYMMDD}/{file name}.pdf`.
pub fn storage_key(file_name: &str, keys: &mut dyn KeyMaterial) -> String {
    let random = keys.random_alnum(KEY_RANDOM_LEN);
    let date = keys.today().format("%y%m%d");
    format!("{CV_KEY_PREFIX}/{random}_{date}/{file_name}.pdf")
}

/// Convert a gated draft into the immutable upsert payload. Returns `None`
/// when the draft is not actually submittable (missing attachment or a class
/// number that does not parse), which the controller reports as blocked.
pub fn build(draft: &ProfileDraft, keys: &mut dyn KeyMaterial) -> Option<ProfilePayload> {
    let class_number: i32 = draft.class_number().parse().ok()?;
    let attachment = draft.attachment()?;

    let department = draft
        .majors()
        .values()
        .filter(|value| !value.is_empty())
        .collect::<Vec<_>>()
        .join(",");

    let positions = draft
        .positions()
        .values()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(String::from)
        .collect();

    Some(ProfilePayload {
        enroll_year: 2000 + class_number,
        department,
        positions,
        cv_key: storage_key(&attachment.name, keys),
    })
}
