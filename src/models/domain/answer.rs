use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::grading::ANSWER_JOIN_SEPARATOR;

/// One resolved answer-key line: the question it belongs to plus the raw
/// explanatory text captured for it. An ordinal with no entry means the
/// question is ungradable, not incorrect.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerKeyEntry {
    pub ordinal: u32,
    pub raw_answer: String,
}

/// Where authoritative answers come from for one parse result.
///
/// The "selected" marks inside checkbox option lines deliberately do not feed
/// this type: they reflect how the source was drafted, not a verified correct
/// answer. The real key lives in a shared section or in per-question
/// explanation prose.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnswerSource {
    /// A shared "Answer Key" section, at most one entry per ordinal.
    KeySection(Vec<AnswerKeyEntry>),
    /// Per-question explanation prose keyed by ordinal; the answer is
    /// recovered from it via layered heuristics at grading time.
    InlineExplanations(BTreeMap<u32, String>),
}

impl AnswerSource {
    pub fn is_empty(&self) -> bool {
        match self {
            AnswerSource::KeySection(entries) => entries.is_empty(),
            AnswerSource::InlineExplanations(details) => details.is_empty(),
        }
    }
}

/// One submitted answer as supplied by the UI collaborator. Absence of a
/// `UserAnswer` for a question means unanswered.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAnswer {
    pub question_id: String,
    pub value: AnswerValue,
}

/// The UI sends either a scalar or a list; both shapes are accepted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Single(String),
    Multi(Vec<String>),
}

impl AnswerValue {
    /// Formats the value as one comparable string. Multi-valued answers are
    /// not expected for choice questions but are joined rather than rejected:
    /// the engine has no authority to validate UI-side input shapes.
    pub fn joined(&self) -> String {
        match self {
            AnswerValue::Single(value) => value.clone(),
            AnswerValue::Multi(values) => values.join(ANSWER_JOIN_SEPARATOR),
        }
    }
}
