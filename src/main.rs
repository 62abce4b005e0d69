use quiz_engine::config::Config;
use quiz_engine::models::domain::{GenerationId, RawContent};
use quiz_engine::services::ParserService;

fn main() {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .expect("usage: quiz-engine <quiz-text-file>");
    let body = std::fs::read_to_string(&path).expect("failed to read quiz text file");

    let parser = ParserService::new(Config::from_env());
    let parsed = parser.parse(&RawContent::new(GenerationId::new(), body));

    println!("parsed {} question(s) from {}", parsed.questions.len(), path);
    println!(
        "{}",
        serde_json::to_string_pretty(&parsed).expect("parse result serializes")
    );
}
