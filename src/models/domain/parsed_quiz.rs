use serde::{Deserialize, Serialize};

use super::answer::AnswerSource;
use super::question::QuestionRecord;
use super::raw_content::GenerationId;

/// The structured form of one generated document. Built once when content is
/// loaded and immutable for the lifetime of a quiz attempt; regenerated
/// content gets a fresh parse, never an update of an old one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedQuiz {
    pub generation: GenerationId,
    /// SHA-256 digest of the source body, see [`super::RawContent::fingerprint`].
    pub fingerprint: String,
    /// All text before the first detected question boundary; may be empty.
    pub intro: String,
    pub questions: Vec<QuestionRecord>,
    pub answer_source: AnswerSource,
}

impl ParsedQuiz {
    pub fn question(&self, question_id: &str) -> Option<&QuestionRecord> {
        self.questions.iter().find(|q| q.id == question_id)
    }
}
