pub mod answer_key_service;
pub mod attempt_service;
pub mod explanation_service;
pub mod grading_service;
pub mod parser_service;
pub mod question_service;
pub mod segmenter_service;

pub use answer_key_service::AnswerKeyService;
pub use attempt_service::AttemptService;
pub use explanation_service::ExplanationService;
pub use grading_service::GradingService;
pub use parser_service::ParserService;
pub use question_service::QuestionService;
pub use segmenter_service::{QuestionSpan, SegmentedContent, SegmenterService};
