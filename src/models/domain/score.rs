use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Session-level grading outcome, computed once at submission.
///
/// `None` in `per_question` means the question was ungradable — no
/// authoritative answer could be resolved, or nothing was submitted. An
/// ungradable question counts toward `total` but never toward
/// `correct_count`, and it stays distinguishable from "answered, wrong" all
/// the way to the review UI.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub correct_count: usize,
    pub total: usize,
    /// Rounded to an integer in 0..=100; an empty quiz scores 0.
    pub percentage: u8,
    pub per_question: BTreeMap<String, Option<bool>>,
}
