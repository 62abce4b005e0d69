pub mod request;

pub use request::{AnswerInput, SubmitAttemptInput};
