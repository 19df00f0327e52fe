use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single stored revision of a prompt.
///
/// Records are addressed by `(reference, versioning)`. Versions of one
/// reference are ordered by comparing `versioning` as a plain string, so
/// numeric tokens must be zero-padded by the caller: `"9"` sorts after
/// `"10"`, while `"0009"` sorts before `"0010"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prompt {
    /// Groups all versions of one logical prompt (partition key).
    pub reference: String,
    /// Distinguishes revisions within a reference (sort key).
    pub versioning: String,
    /// Opaque prompt text.
    pub content: String,
    /// Set when the record is written.
    pub created_at: DateTime<Utc>,
}

impl Prompt {
    /// Creates a new prompt record stamped with the current time.
    pub fn new(
        reference: impl Into<String>,
        versioning: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            reference: reference.into(),
            versioning: versioning.into(),
            content: content.into(),
            created_at: Utc::now(),
        }
    }

    /// Sets a specific creation time (useful for testing and decoding).
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }
}
