use std::collections::BTreeSet;

use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::domain::AnswerKeyEntry;

// A key entry starts at a line-leading question number, optionally preceded
// by an "Answer"/"Question" word, and runs to the next such number.
static KEY_ENTRY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?mi)^\s*(?:\*\*)?\s*(?:(?:answer|question|q)\s*#?\s*)?(\d+)\s*[.):\-]\s*")
        .expect("answer key entry pattern is valid")
});

pub struct AnswerKeyService;

impl AnswerKeyService {
    /// Converts the answer-key span into one entry per question number.
    ///
    /// The `ordinal` on each returned entry is the literal number the key
    /// section used; correlation with positional question ordinals happens in
    /// the parser. An absent span, or one with no recognizable groups, yields
    /// an empty list — an entry is never fabricated.
    pub fn resolve_key(answer_key_span: Option<&str>) -> Vec<AnswerKeyEntry> {
        let Some(span) = answer_key_span else {
            return Vec::new();
        };

        let markers: Vec<(usize, usize, u32)> = KEY_ENTRY
            .captures_iter(span)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let number = caps[1].parse().ok()?;
                Some((whole.start(), whole.end(), number))
            })
            .collect();

        let mut seen = BTreeSet::new();
        let mut entries = Vec::new();
        for (index, &(_, end, number)) in markers.iter().enumerate() {
            let until = markers.get(index + 1).map(|m| m.0).unwrap_or(span.len());
            let raw_answer = span[end..until].trim();
            if raw_answer.is_empty() {
                continue;
            }
            if !seen.insert(number) {
                warn!(
                    "duplicate answer key entry for question {}, keeping the first",
                    number
                );
                continue;
            }
            entries.push(AnswerKeyEntry {
                ordinal: number,
                raw_answer: raw_answer.to_string(),
            });
        }
        entries
    }
}
