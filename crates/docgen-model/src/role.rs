use std::fmt;

use serde::{Deserialize, Serialize};

/// Semantic role assigned to a sheet from its header vocabulary.
///
/// The taxonomy is closed: every sheet gets exactly one of these four
/// values, assigned once at classification time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SheetRole {
    /// Learning-unit rows (unit name, outcome, competency indicator).
    Unit,
    /// Content rows (lesson content, references).
    Content,
    /// Test/exercise rows (questions with answer keys).
    Test,
    /// Anything the classifier could not place.
    Unknown,
}

impl SheetRole {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unit => "unit",
            Self::Content => "content",
            Self::Test => "test",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for SheetRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_lowercase() {
        let json = serde_json::to_string(&SheetRole::Unit).unwrap();
        assert_eq!(json, "\"unit\"");
        let back: SheetRole = serde_json::from_str("\"content\"").unwrap();
        assert_eq!(back, SheetRole::Content);
    }

    #[test]
    fn role_display_matches_as_str() {
        for role in [
            SheetRole::Unit,
            SheetRole::Content,
            SheetRole::Test,
            SheetRole::Unknown,
        ] {
            assert_eq!(role.to_string(), role.as_str());
        }
    }
}
