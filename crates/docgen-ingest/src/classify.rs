//! Heuristic sheet classification from column headers.
//!
//! Classification is an ordered dispatch table of `(predicate, role)`
//! pairs evaluated in a fixed sequence; the first predicate that matches
//! binds the sheet. A sheet matching several rules therefore gets the
//! role of whichever rule runs first. Only headers are consulted, never
//! cell values.

use docgen_model::SheetRole;

/// Headers indicating a learning-unit name column.
const UNIT_NAME_MARKERS: &[&str] = &["unit_name", "ชื่อหน่วย", "หน่วยการเรียน"];
/// Headers indicating a learning-outcome column.
const OUTCOME_MARKERS: &[&str] = &["outcome", "ผลลัพธ์"];
/// Headers indicating a competency/TPQI indicator column.
const COMPETENCY_MARKERS: &[&str] = &["tpqi", "ตัวบ่งชี้", "competency"];
/// Headers indicating an objective column.
const OBJECTIVE_MARKERS: &[&str] = &["objective", "วัตถุประสงค์", "purpose"];
/// Headers indicating lesson content.
const CONTENT_MARKERS: &[&str] = &["content", "เนื้อหา", "สาระ"];
/// Headers indicating references/further reading.
const REFERENCE_MARKERS: &[&str] = &["reference", "referrence", "อ้างอิง", "การค้นคว้า"];
/// Headers indicating tests, exams, or exercises.
const TEST_MARKERS: &[&str] = &[
    "test",
    "แบบทดสอบ",
    "แบบฝึกหัด",
    "exam",
    "exercise",
    "คำถาม",
];
/// Headers indicating answer keys.
const ANSWER_MARKERS: &[&str] = &["answer", "เฉลย", "solutions", "คำตอบ"];

/// Narrow sheets (few columns) get the benefit of the doubt for content
/// and test classification.
const NARROW_SHEET_COLUMNS: usize = 5;

/// Lower-cased header vocabulary of one sheet.
#[derive(Debug)]
struct HeaderVocabulary {
    tokens: Vec<String>,
}

impl HeaderVocabulary {
    fn from_columns(columns: &[String]) -> Self {
        Self {
            tokens: columns
                .iter()
                .map(|c| c.trim().to_lowercase())
                .collect(),
        }
    }

    /// True when any header contains any marker as a substring.
    fn has_any(&self, markers: &[&str]) -> bool {
        self.tokens
            .iter()
            .any(|token| markers.iter().any(|marker| token.contains(marker)))
    }

    fn is_narrow(&self) -> bool {
        self.tokens.len() <= NARROW_SHEET_COLUMNS
    }
}

/// Ordered classification rules; evaluation order is load-bearing.
const RULES: &[(fn(&HeaderVocabulary) -> bool, SheetRole)] = &[
    (is_unit_sheet, SheetRole::Unit),
    (is_content_sheet, SheetRole::Content),
    (is_test_sheet, SheetRole::Test),
];

fn is_unit_sheet(vocab: &HeaderVocabulary) -> bool {
    let has_unit = vocab.has_any(UNIT_NAME_MARKERS);
    (has_unit && vocab.has_any(OUTCOME_MARKERS) && vocab.has_any(COMPETENCY_MARKERS))
        || (has_unit && vocab.has_any(OBJECTIVE_MARKERS))
}

fn is_content_sheet(vocab: &HeaderVocabulary) -> bool {
    let has_content = vocab.has_any(CONTENT_MARKERS);
    (has_content && (vocab.has_any(REFERENCE_MARKERS) || vocab.is_narrow()))
        || (has_content && vocab.has_any(UNIT_NAME_MARKERS) && !vocab.has_any(OUTCOME_MARKERS))
}

fn is_test_sheet(vocab: &HeaderVocabulary) -> bool {
    let has_test = vocab.has_any(TEST_MARKERS);
    (has_test && vocab.has_any(ANSWER_MARKERS)) || (has_test && vocab.is_narrow())
}

/// Assigns a semantic role to a sheet from its column headers.
///
/// Deterministic for a fixed header set; returns [`SheetRole::Unknown`]
/// when no rule matches.
#[must_use]
pub fn classify_columns(columns: &[String]) -> SheetRole {
    let vocab = HeaderVocabulary::from_columns(columns);
    for (predicate, role) in RULES {
        if predicate(&vocab) {
            return *role;
        }
    }
    SheetRole::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cols(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| (*n).to_string()).collect()
    }

    #[test]
    fn unit_requires_name_outcome_and_competency() {
        assert_eq!(
            classify_columns(&cols(&["Unit_name", "Outcome", "tpqi"])),
            SheetRole::Unit
        );
        assert_eq!(
            classify_columns(&cols(&["ชื่อหน่วย", "ผลลัพธ์การเรียนรู้", "competency"])),
            SheetRole::Unit
        );
    }

    #[test]
    fn unit_name_with_objective_is_enough() {
        assert_eq!(
            classify_columns(&cols(&["Unit_name", "objective"])),
            SheetRole::Unit
        );
    }

    #[test]
    fn content_with_reference_matches() {
        assert_eq!(
            classify_columns(&cols(&["content", "references", "a", "b", "c", "d", "e"])),
            SheetRole::Content
        );
    }

    #[test]
    fn narrow_content_sheet_matches_without_reference() {
        assert_eq!(
            classify_columns(&cols(&["เนื้อหา", "x"])),
            SheetRole::Content
        );
    }

    #[test]
    fn test_sheet_needs_answers_or_narrow_headers() {
        assert_eq!(
            classify_columns(&cols(&["แบบทดสอบ", "เฉลย"])),
            SheetRole::Test
        );
        assert_eq!(classify_columns(&cols(&["test", "x"])), SheetRole::Test);
        assert_eq!(
            classify_columns(&cols(&["test", "a", "b", "c", "d", "e", "f"])),
            SheetRole::Unknown
        );
    }

    #[test]
    fn first_matching_rule_wins() {
        // Carries both unit and content vocabulary; the unit rule runs
        // first and binds the sheet.
        assert_eq!(
            classify_columns(&cols(&["Unit_name", "objective", "content", "references"])),
            SheetRole::Unit
        );
    }

    #[test]
    fn classification_is_deterministic() {
        let columns = cols(&["Unit_name", "Outcome", "tpqi", "objective"]);
        let first = classify_columns(&columns);
        for _ in 0..10 {
            assert_eq!(classify_columns(&columns), first);
        }
    }

    #[test]
    fn unrelated_headers_are_unknown() {
        assert_eq!(
            classify_columns(&cols(&["name", "age", "address"])),
            SheetRole::Unknown
        );
        assert_eq!(classify_columns(&[]), SheetRole::Unknown);
    }
}
