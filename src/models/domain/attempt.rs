use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::answer::UserAnswer;
use super::raw_content::GenerationId;
use super::score::ScoreResult;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttemptState {
    /// Parsing succeeded; no answer recorded yet.
    Loaded,
    /// At least one answer recorded; answers may still change.
    Answering,
    /// Terminal. The score is frozen and answer edits are rejected.
    Submitted,
}

/// One student pass over one generation of parsed content.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizAttempt {
    pub id: Uuid,
    pub generation: GenerationId,
    pub fingerprint: String,
    pub state: AttemptState,
    pub answers: BTreeMap<String, UserAnswer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ScoreResult>,
    pub started_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<DateTime<Utc>>,
}

impl QuizAttempt {
    /// Seconds between start and submission, for the feedback collaborator.
    /// `None` until the attempt is submitted.
    pub fn elapsed_seconds(&self) -> Option<i64> {
        self.submitted_at
            .map(|submitted| (submitted - self.started_at).num_seconds())
    }
}
