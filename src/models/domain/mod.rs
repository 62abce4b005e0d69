pub mod answer;
pub mod attempt;
pub mod parsed_quiz;
pub mod question;
pub mod raw_content;
pub mod score;

pub use answer::{AnswerKeyEntry, AnswerSource, AnswerValue, UserAnswer};
pub use attempt::{AttemptState, QuizAttempt};
pub use parsed_quiz::ParsedQuiz;
pub use question::{Difficulty, QuestionKind, QuestionRecord};
pub use raw_content::{GenerationId, RawContent};
pub use score::ScoreResult;
