//! Per-request session identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier generated fresh for every generation request.
///
/// Namespaces output filenames so concurrent requests never collide on
/// the shared output directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    /// Millisecond timestamp plus a random suffix.
    #[must_use]
    pub fn generate() -> Self {
        let millis = chrono::Utc::now().timestamp_millis();
        let suffix: String = uuid::Uuid::new_v4().simple().to_string();
        Self(format!("{millis}-{}", &suffix[..6]))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First eight characters, used as the filename suffix.
    #[must_use]
    pub fn short(&self) -> &str {
        let end = self
            .0
            .char_indices()
            .nth(8)
            .map_or(self.0.len(), |(i, _)| i);
        &self.0[..end]
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_is_eight_chars() {
        let session = SessionId::generate();
        assert_eq!(session.short().chars().count(), 8);
        assert!(session.as_str().starts_with(session.short()));
    }

    #[test]
    fn sessions_are_distinct() {
        assert_ne!(SessionId::generate(), SessionId::generate());
    }
}
