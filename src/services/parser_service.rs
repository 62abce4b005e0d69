use std::collections::BTreeMap;

use log::{debug, warn};

use crate::config::Config;
use crate::models::domain::{AnswerKeyEntry, AnswerSource, ParsedQuiz, QuestionRecord, RawContent};

use super::answer_key_service::AnswerKeyService;
use super::question_service::QuestionService;
use super::segmenter_service::{QuestionSpan, SegmenterService};

pub struct ParserService {
    config: Config,
}

impl ParserService {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Parses one generation of raw content into an immutable [`ParsedQuiz`].
    ///
    /// Total and deterministic: every input string, including the empty
    /// string, has a defined output. Zero questions is a normal result the
    /// caller must handle, not an error.
    pub fn parse(&self, content: &RawContent) -> ParsedQuiz {
        let mut segmented = SegmenterService::segment(&content.body);

        if segmented.questions.len() > self.config.max_questions {
            warn!(
                "content produced {} question spans, keeping the first {}",
                segmented.questions.len(),
                self.config.max_questions
            );
            segmented.questions.truncate(self.config.max_questions);
        }

        if self.config.verbose_parse_logging {
            for span in &segmented.questions {
                debug!(
                    "question span {} (source number {}), {} chars",
                    span.ordinal,
                    span.source_number,
                    span.text.len()
                );
            }
        }

        let questions: Vec<QuestionRecord> = segmented
            .questions
            .iter()
            .map(QuestionService::structure)
            .collect();

        // A shared key section always wins over inline details.
        let answer_source =
            if segmented.answer_key_span.is_some() || content.answer_details.is_empty() {
                let entries = AnswerKeyService::resolve_key(segmented.answer_key_span.as_deref());
                AnswerSource::KeySection(rekey_entries(entries, &segmented.questions))
            } else {
                AnswerSource::InlineExplanations(rekey_details(
                    &content.answer_details,
                    &segmented.questions,
                ))
            };

        ParsedQuiz {
            generation: content.generation,
            fingerprint: content.fingerprint(),
            intro: segmented.intro,
            questions,
            answer_source,
        }
    }
}

/// Re-keys answer entries from the literal numbers the key section used to
/// the positional ordinals the questions ended up with. The first question to
/// carry a literal number claims it; an entry matching no question is dropped
/// rather than guessed at.
fn rekey_entries(entries: Vec<AnswerKeyEntry>, spans: &[QuestionSpan]) -> Vec<AnswerKeyEntry> {
    let by_source = source_number_index(spans);
    entries
        .into_iter()
        .filter_map(|entry| match by_source.get(&entry.ordinal) {
            Some(&ordinal) => Some(AnswerKeyEntry {
                ordinal,
                raw_answer: entry.raw_answer,
            }),
            None => {
                warn!(
                    "answer key entry {} matches no question, dropping it",
                    entry.ordinal
                );
                None
            }
        })
        .collect()
}

fn rekey_details(details: &BTreeMap<u32, String>, spans: &[QuestionSpan]) -> BTreeMap<u32, String> {
    let by_source = source_number_index(spans);
    details
        .iter()
        .filter_map(|(source_number, detail)| match by_source.get(source_number) {
            Some(&ordinal) => Some((ordinal, detail.clone())),
            None => {
                warn!(
                    "answer detail {} matches no question, dropping it",
                    source_number
                );
                None
            }
        })
        .collect()
}

fn source_number_index(spans: &[QuestionSpan]) -> BTreeMap<u32, u32> {
    let mut by_source = BTreeMap::new();
    for span in spans {
        by_source.entry(span.source_number).or_insert(span.ordinal);
    }
    by_source
}
