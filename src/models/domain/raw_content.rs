use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Identifies one fetch/produce cycle of generated content. Parse results and
/// answers must never cross generations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GenerationId(Uuid);

impl GenerationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for GenerationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for GenerationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One generated quiz document as handed over by the content backend.
/// Immutable once received.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawContent {
    pub generation: GenerationId,
    pub body: String,
    /// Per-question explanation text supplied by the adaptive-content
    /// collaborator when the document carries no shared answer-key section.
    /// Keyed by the literal question number as it appears in the source.
    #[serde(default)]
    pub answer_details: BTreeMap<u32, String>,
}

impl RawContent {
    pub fn new(generation: GenerationId, body: impl Into<String>) -> Self {
        Self {
            generation,
            body: body.into(),
            answer_details: BTreeMap::new(),
        }
    }

    pub fn with_answer_details(mut self, answer_details: BTreeMap<u32, String>) -> Self {
        self.answer_details = answer_details;
        self
    }

    /// SHA-256 hex digest of the body. Ties a parse result to the exact text
    /// that produced it, independent of generation-id reuse.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.body.as_bytes());
        hasher
            .finalize()
            .iter()
            .map(|byte| format!("{:02x}", byte))
            .collect()
    }
}
