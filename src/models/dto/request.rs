use serde::Deserialize;
use validator::Validate;

use crate::models::domain::{AnswerValue, UserAnswer};

/// One answer as the UI collaborator submits it.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AnswerInput {
    #[validate(length(min = 1, max = 64))]
    pub question_id: String,
    pub value: AnswerValue,
}

impl From<AnswerInput> for UserAnswer {
    fn from(input: AnswerInput) -> Self {
        UserAnswer {
            question_id: input.question_id,
            value: input.value,
        }
    }
}

/// A full answer set submitted in one call.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitAttemptInput {
    #[validate(nested)]
    pub answers: Vec<AnswerInput>,
}
