use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::domain::{Difficulty, QuestionKind, QuestionRecord};

use super::segmenter_service::QuestionSpan;

static CHECKBOX_OPTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*[-*•]\s*\[\s*[x✓]?\s*\]\s*(.+)$").expect("checkbox option pattern is valid")
});

static TRUE_FALSE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\btrue\s*(?:or|/)\s*false\b").expect("true/false pattern is valid")
});

static DIFFICULTY_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)[(\[]?\**\s*(?:difficulty|level)\s*:\s*(easy|medium|hard)\s*\**[)\]]?")
        .expect("difficulty tag pattern is valid")
});

pub struct QuestionService;

impl QuestionService {
    /// Converts one question span into a typed record: inferred kind, cleaned
    /// prompt, option list, difficulty tag.
    ///
    /// A "selected" mark inside a checkbox option is stripped along with the
    /// marker and never treated as the correct answer — the authoritative
    /// answer always comes from the answer key or the inline explanation.
    pub fn structure(span: &QuestionSpan) -> QuestionRecord {
        let kind = Self::classify(&span.text);

        let options = if kind == QuestionKind::MultipleChoice {
            span.text
                .lines()
                .filter_map(|line| CHECKBOX_OPTION.captures(line))
                .map(|caps| caps[1].trim().to_string())
                .collect()
        } else {
            Vec::new()
        };

        let difficulty = DIFFICULTY_TAG
            .captures(&span.text)
            .and_then(|caps| Difficulty::parse(&caps[1]));

        let without_options = span
            .text
            .lines()
            .filter(|line| !CHECKBOX_OPTION.is_match(line))
            .collect::<Vec<_>>()
            .join("\n");
        let prompt_text = DIFFICULTY_TAG
            .replace_all(&without_options, "")
            .trim()
            .to_string();

        QuestionRecord {
            id: QuestionRecord::id_for_ordinal(span.ordinal),
            ordinal: span.ordinal,
            kind,
            prompt_text,
            options,
            difficulty,
        }
    }

    /// Classification runs on the raw span, before any cleaning. First match
    /// wins: checkbox option lines outrank a "true or false" phrasing in the
    /// prompt, and anything else is free text.
    fn classify(text: &str) -> QuestionKind {
        if text.lines().any(|line| CHECKBOX_OPTION.is_match(line)) {
            return QuestionKind::MultipleChoice;
        }
        if TRUE_FALSE.is_match(text) {
            return QuestionKind::TrueFalse;
        }
        QuestionKind::FreeText
    }
}
