use std::collections::BTreeMap;

use quiz_engine::config::Config;
use quiz_engine::models::domain::{AnswerSource, GenerationId, QuestionKind, RawContent};
use quiz_engine::services::{GradingService, ParserService};

fn parser() -> ParserService {
    ParserService::new(Config::from_env())
}

const GEOGRAPHY_QUIZ: &str = "Here is a short geography check.\n\
    \n\
    ### Question 1: What is the capital of France?\n\
    - [ ] Berlin\n\
    - [x] Paris\n\
    - [ ] Rome\n\
    \n\
    ### Question 2: True or false, the Seine flows through Paris.\n\
    \n\
    ## Answer Key\n\
    1. Paris\n\
    2. True";

#[test]
fn parses_a_generated_document_end_to_end() {
    let content = RawContent::new(GenerationId::new(), GEOGRAPHY_QUIZ);
    let parsed = parser().parse(&content);

    assert_eq!(parsed.intro, "Here is a short geography check.");
    assert_eq!(parsed.questions.len(), 2);

    let first = &parsed.questions[0];
    assert_eq!(first.id, "q1");
    assert_eq!(first.kind, QuestionKind::MultipleChoice);
    assert_eq!(first.options, vec!["Berlin", "Paris", "Rome"]);
    assert!(!first.prompt_text.contains("- ["));

    let second = &parsed.questions[1];
    assert_eq!(second.kind, QuestionKind::TrueFalse);
    assert!(second.options.is_empty());

    assert_eq!(
        GradingService::resolve_raw_answer(&parsed.answer_source, 1),
        Some("Paris".to_string())
    );
    assert_eq!(
        GradingService::resolve_raw_answer(&parsed.answer_source, 2),
        Some("True".to_string())
    );
}

#[test]
fn parsing_is_idempotent() {
    let content = RawContent::new(GenerationId::new(), GEOGRAPHY_QUIZ);
    let parser = parser();

    let first = parser.parse(&content);
    let second = parser.parse(&content);

    assert_eq!(first, second);
}

#[test]
fn ordinals_are_renumbered_positionally() {
    // Source numbering with a duplicate and a gap must not desynchronize
    // list order from the emitted ordinals.
    let body = "Question 1: first\nQuestion 1: second\nQuestion 5: third";
    let parsed = parser().parse(&RawContent::new(GenerationId::new(), body));

    let ordinals: Vec<u32> = parsed.questions.iter().map(|q| q.ordinal).collect();
    let ids: Vec<&str> = parsed.questions.iter().map(|q| q.id.as_str()).collect();
    assert_eq!(ordinals, vec![1, 2, 3]);
    assert_eq!(ids, vec!["q1", "q2", "q3"]);
}

#[test]
fn answer_key_follows_offset_source_numbering() {
    // Questions numbered 2 and 3 in the source, key numbered the same way:
    // entries land on the matching questions, not on literal positions.
    let body = "Question 2: What is two plus two?\n\
                Question 3: What is three plus three?\n\
                Answers\n\
                2. four\n\
                3. six";
    let parsed = parser().parse(&RawContent::new(GenerationId::new(), body));

    assert_eq!(
        GradingService::resolve_raw_answer(&parsed.answer_source, 1),
        Some("four".to_string())
    );
    assert_eq!(
        GradingService::resolve_raw_answer(&parsed.answer_source, 2),
        Some("six".to_string())
    );
}

#[test]
fn key_entries_matching_no_question_are_dropped() {
    let body = "Question 1: only one question\nAnswer Key\n1. yes\n7. orphaned";
    let parsed = parser().parse(&RawContent::new(GenerationId::new(), body));

    match &parsed.answer_source {
        AnswerSource::KeySection(entries) => {
            assert_eq!(entries.len(), 1);
            assert_eq!(entries[0].ordinal, 1);
        }
        other => panic!("expected a key section, got {:?}", other),
    }
}

#[test]
fn options_are_non_empty_iff_multiple_choice() {
    let body = "Question 1: Pick one.\n- [ ] a\n- [ ] b\n\
                Question 2: True or false, this holds.\n\
                Question 3: Explain briefly.";
    let parsed = parser().parse(&RawContent::new(GenerationId::new(), body));

    for question in &parsed.questions {
        assert_eq!(
            !question.options.is_empty(),
            question.kind == QuestionKind::MultipleChoice,
            "question {} violates the exclusivity invariant",
            question.id
        );
    }
}

#[test]
fn zero_question_boundaries_is_a_representable_outcome() {
    let parsed = parser().parse(&RawContent::new(
        GenerationId::new(),
        "A cheat sheet with headings\nbut no numbered questions.",
    ));

    assert!(parsed.questions.is_empty());
    assert!(matches!(
        &parsed.answer_source,
        AnswerSource::KeySection(entries) if entries.is_empty()
    ));
}

#[test]
fn inline_details_become_the_answer_source_when_no_key_section_exists() {
    let body = "Question 1: Where do light reactions happen?";
    let details = BTreeMap::from([(1, "Answer: the thylakoid membrane".to_string())]);
    let content =
        RawContent::new(GenerationId::new(), body).with_answer_details(details);

    let parsed = parser().parse(&content);

    assert!(matches!(
        parsed.answer_source,
        AnswerSource::InlineExplanations(_)
    ));
    assert_eq!(
        GradingService::resolve_raw_answer(&parsed.answer_source, 1),
        Some("the thylakoid membrane".to_string())
    );
}

#[test]
fn a_key_section_wins_over_inline_details() {
    let body = "Question 1: Where do light reactions happen?\nAnswer Key\n1. thylakoid";
    let details = BTreeMap::from([(1, "Answer: somewhere else".to_string())]);
    let content =
        RawContent::new(GenerationId::new(), body).with_answer_details(details);

    let parsed = parser().parse(&content);

    assert!(matches!(parsed.answer_source, AnswerSource::KeySection(_)));
    assert_eq!(
        GradingService::resolve_raw_answer(&parsed.answer_source, 1),
        Some("thylakoid".to_string())
    );
}

#[test]
fn question_list_is_capped_at_the_configured_maximum() {
    let config = Config {
        max_questions: 2,
        verbose_parse_logging: false,
    };
    let body = "Question 1: a\nQuestion 2: b\nQuestion 3: c\nQuestion 4: d";

    let parsed = ParserService::new(config).parse(&RawContent::new(GenerationId::new(), body));

    assert_eq!(parsed.questions.len(), 2);
}

#[test]
fn fingerprint_ties_the_parse_to_its_source_text() {
    let generation = GenerationId::new();
    let parsed_a = parser().parse(&RawContent::new(generation, "Question 1: a"));
    let parsed_b = parser().parse(&RawContent::new(generation, "Question 1: b"));

    assert_ne!(parsed_a.fingerprint, parsed_b.fingerprint);
}
