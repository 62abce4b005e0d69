use std::collections::BTreeMap;

use log::debug;

use crate::constants::grading::FREE_TEXT_MATCH_THRESHOLD;
use crate::errors::{AppError, AppResult};
use crate::models::domain::{AnswerSource, QuestionKind, QuestionRecord, ScoreResult, UserAnswer};

use super::explanation_service::ExplanationService;

pub struct GradingService;

impl GradingService {
    /// Resolves the authoritative raw answer for one ordinal, whichever
    /// source the parse produced. The evaluator stays agnostic to the path.
    pub fn resolve_raw_answer(answer_source: &AnswerSource, ordinal: u32) -> Option<String> {
        match answer_source {
            AnswerSource::KeySection(entries) => entries
                .iter()
                .find(|entry| entry.ordinal == ordinal)
                .map(|entry| entry.raw_answer.clone()),
            AnswerSource::InlineExplanations(details) => {
                ExplanationService::extract_answer(details.get(&ordinal).map(String::as_str))
            }
        }
    }

    /// Judges one question. `None` means ungradable: no authoritative answer
    /// was resolved, or nothing was submitted.
    pub fn evaluate(
        question: &QuestionRecord,
        raw_answer: Option<&str>,
        user_answer: Option<&UserAnswer>,
    ) -> Option<bool> {
        let raw_answer = raw_answer?;
        let user_answer = user_answer?;
        let submitted = user_answer.value.joined();

        match question.kind {
            QuestionKind::MultipleChoice | QuestionKind::TrueFalse => Some(
                submitted.trim().to_lowercase() == raw_answer.trim().to_lowercase(),
            ),
            QuestionKind::FreeText => Self::grade_free_text(raw_answer, &submitted),
        }
    }

    /// Token-overlap grading: the fraction of reference tokens found in the
    /// submitted text by substring containment in either direction, which
    /// tolerates pluralization and minor spelling drift without an
    /// edit-distance model. A reference that tokenizes to nothing is
    /// ungradable rather than guessed at.
    fn grade_free_text(raw_answer: &str, submitted: &str) -> Option<bool> {
        let keywords = tokenize(raw_answer);
        if keywords.is_empty() {
            debug!("reference answer has no tokens to match against");
            return None;
        }

        let submitted_tokens = tokenize(submitted);
        let matched = keywords
            .iter()
            .filter(|keyword| {
                submitted_tokens
                    .iter()
                    .any(|token| token.contains(keyword.as_str()) || keyword.contains(token.as_str()))
            })
            .count();

        let ratio = matched as f64 / keywords.len() as f64;
        Some(ratio >= FREE_TEXT_MATCH_THRESHOLD)
    }

    /// Folds per-question verdicts into a session-level result.
    ///
    /// A `userAnswers` key that names no known question is a caller bug and
    /// fails loudly; everything else — missing answers, missing key entries —
    /// stays representable as data.
    pub fn aggregate(
        questions: &[QuestionRecord],
        answer_source: &AnswerSource,
        user_answers: &BTreeMap<String, UserAnswer>,
    ) -> AppResult<ScoreResult> {
        for question_id in user_answers.keys() {
            if !questions.iter().any(|q| q.id == *question_id) {
                return Err(AppError::UnknownQuestion(question_id.clone()));
            }
        }

        let mut per_question = BTreeMap::new();
        let mut correct_count = 0;
        for question in questions {
            let raw_answer = Self::resolve_raw_answer(answer_source, question.ordinal);
            let verdict = Self::evaluate(
                question,
                raw_answer.as_deref(),
                user_answers.get(&question.id),
            );
            if verdict == Some(true) {
                correct_count += 1;
            }
            per_question.insert(question.id.clone(), verdict);
        }

        let total = questions.len();
        let percentage = if total == 0 {
            0
        } else {
            (100.0 * correct_count as f64 / total as f64).round() as u8
        };

        Ok(ScoreResult {
            correct_count,
            total,
            percentage,
            per_question,
        })
    }
}

fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
