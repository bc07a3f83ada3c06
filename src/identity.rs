//! Identity document format validation and display masking.
//!
//! Only syntactic checks are performed here — checksum-free format rules
//! for the two supported schemes. Real document verification is a
//! downstream administrative action.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::model::IdScheme;

static PAN_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]$").unwrap());
static AADHAR_FORMAT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{12}$").unwrap());

/// Mask character used when an ID field is not focused.
const MASK_CHAR: char = '*';

/// Tri-state verdict: no input yet, or an explicit pass/fail.
///
/// The workflow must block submission only on `Invalid`/`Unknown` — the
/// distinction lets the presentation layer stay quiet before the user has
/// typed anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Validity {
    Unknown,
    Valid,
    Invalid,
}

impl Validity {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Canonical form for both schemes: whitespace stripped, uppercased.
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase()
}

/// Check `raw` against the format rule of `scheme`.
///
/// Empty input yields `Unknown` — no verdict exists before any input.
/// Pure: no side effects, never fails.
pub fn validate(scheme: IdScheme, raw: &str) -> Validity {
    let value = normalize(raw);
    if value.is_empty() {
        return Validity::Unknown;
    }
    let ok = match scheme {
        IdScheme::Pan => PAN_FORMAT.is_match(&value),
        IdScheme::Aadhar => AADHAR_FORMAT.is_match(&value),
    };
    if ok {
        Validity::Valid
    } else {
        Validity::Invalid
    }
}

/// Inline format guidance for the presentation layer.
pub fn format_hint(scheme: IdScheme) -> &'static str {
    match scheme {
        IdScheme::Pan => "Format: 5 Letters, 4 Digits, 1 Letter (e.g., ABCDE1234F)",
        IdScheme::Aadhar => "Format: 12 Digits (e.g., 123456789012)",
    }
}

/// Render an ID value for display: all but the last 4 characters masked,
/// unless the field has active input focus.
///
/// Display rule only — the underlying value is always stored unmasked.
pub fn mask_for_display(raw: &str, focused: bool) -> String {
    if focused || raw.is_empty() {
        return raw.to_string();
    }
    let len = raw.chars().count();
    if len < 4 {
        return MASK_CHAR.to_string().repeat(len);
    }
    let visible: String = raw.chars().skip(len - 4).collect();
    format!("{}{}", MASK_CHAR.to_string().repeat(len - 4), visible)
}
