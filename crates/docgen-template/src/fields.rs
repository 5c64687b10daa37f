//! Prioritized field-value resolution.
//!
//! This is the single normalization point that absorbs header-naming
//! variance across uploader conventions (Thai-only headers, bilingual,
//! English-only).

use docgen_model::RawRow;

/// Resolves a field from a row using an ordered candidate-key list.
///
/// Returns the value of the first key whose cell is present and usable
/// (non-blank, non-empty text); otherwise the empty string. Never fails.
#[must_use]
pub fn resolve(row: &RawRow, candidates: &[&str]) -> String {
    for key in candidates {
        if let Some(cell) = row.get(*key)
            && cell.is_usable()
        {
            return cell.to_text();
        }
    }
    String::new()
}

/// Strips a leading "หน่วยที่ N:" prefix from a unit name, if present.
///
/// Accepts both the ASCII colon and the full-width colon the source
/// spreadsheets use interchangeably. Anything that does not match the
/// pattern is returned unchanged.
#[must_use]
pub fn unit_title(raw: &str) -> String {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("หน่วยที่") else {
        return trimmed.to_string();
    };

    let rest = rest.trim_start();
    let digits = rest.chars().take_while(char::is_ascii_digit).count();
    if digits == 0 {
        return trimmed.to_string();
    }
    let rest = rest[digits..].trim_start();

    let Some(rest) = rest.strip_prefix(':').or_else(|| rest.strip_prefix('：')) else {
        return trimmed.to_string();
    };

    rest.trim().to_string()
}
