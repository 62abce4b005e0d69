use std::collections::BTreeMap;

use chrono::Utc;
use log::debug;
use uuid::Uuid;
use validator::Validate;

use crate::errors::{AppError, AppResult};
use crate::models::domain::{AttemptState, ParsedQuiz, QuizAttempt, ScoreResult, UserAnswer};
use crate::models::dto::{AnswerInput, SubmitAttemptInput};

use super::grading_service::GradingService;

/// The stateful consumer side of the engine: owns the `Loaded -> Answering ->
/// Submitted` lifecycle and the generation check the purely functional
/// services assume but do not enforce.
pub struct AttemptService;

impl AttemptService {
    /// Opens a fresh attempt over one parse result.
    pub fn start(parsed: &ParsedQuiz) -> QuizAttempt {
        QuizAttempt {
            id: Uuid::new_v4(),
            generation: parsed.generation,
            fingerprint: parsed.fingerprint.clone(),
            state: AttemptState::Loaded,
            answers: BTreeMap::new(),
            result: None,
            started_at: Utc::now(),
            submitted_at: None,
        }
    }

    /// Records or replaces one answer. Legal only before submission, and only
    /// against the parse the attempt was started from.
    pub fn record_answer(
        attempt: &mut QuizAttempt,
        parsed: &ParsedQuiz,
        input: AnswerInput,
    ) -> AppResult<()> {
        input.validate()?;
        ensure_open(attempt)?;
        ensure_same_generation(attempt, parsed)?;

        if parsed.question(&input.question_id).is_none() {
            return Err(AppError::UnknownQuestion(input.question_id));
        }

        attempt.state = AttemptState::Answering;
        let answer = UserAnswer::from(input);
        attempt.answers.insert(answer.question_id.clone(), answer);
        Ok(())
    }

    /// Records a full answer set in one call. Fails on the first bad input
    /// and leaves the earlier answers in place.
    pub fn record_answers(
        attempt: &mut QuizAttempt,
        parsed: &ParsedQuiz,
        input: SubmitAttemptInput,
    ) -> AppResult<()> {
        for answer in input.answers {
            Self::record_answer(attempt, parsed, answer)?;
        }
        Ok(())
    }

    /// Grades the attempt once and freezes the result. Terminal: a submitted
    /// attempt rejects both resubmission and further answer edits.
    pub fn submit(attempt: &mut QuizAttempt, parsed: &ParsedQuiz) -> AppResult<ScoreResult> {
        ensure_open(attempt)?;
        ensure_same_generation(attempt, parsed)?;

        let result =
            GradingService::aggregate(&parsed.questions, &parsed.answer_source, &attempt.answers)?;

        debug!(
            "attempt {} submitted: {}/{} correct ({}%)",
            attempt.id, result.correct_count, result.total, result.percentage
        );

        attempt.result = Some(result.clone());
        attempt.state = AttemptState::Submitted;
        attempt.submitted_at = Some(Utc::now());
        Ok(result)
    }
}

fn ensure_open(attempt: &QuizAttempt) -> AppResult<()> {
    if attempt.state == AttemptState::Submitted {
        return Err(AppError::AttemptClosed(format!(
            "attempt {} was already submitted",
            attempt.id
        )));
    }
    Ok(())
}

/// Stale answers must never be scored against a newer parse, and vice versa;
/// both the generation id and the content fingerprint have to line up.
fn ensure_same_generation(attempt: &QuizAttempt, parsed: &ParsedQuiz) -> AppResult<()> {
    if attempt.generation != parsed.generation || attempt.fingerprint != parsed.fingerprint {
        return Err(AppError::StaleGeneration(format!(
            "attempt {} was started against generation {}",
            attempt.id, attempt.generation
        )));
    }
    Ok(())
}
