use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

/// One detected question block: positional ordinal, the literal number the
/// heading carried, and the span text (heading line included).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionSpan {
    pub ordinal: u32,
    pub source_number: u32,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct SegmentedContent {
    pub intro: String,
    pub questions: Vec<QuestionSpan>,
    pub answer_key_span: Option<String>,
}

// A question boundary is a heading-like line: decoration (markdown hashes,
// bold markers, emoji) may precede the marker word, but no other words may.
static QUESTION_BOUNDARY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[^a-z0-9]*(?:question|q)\s*[.#]?\s*(\d+)\b")
        .expect("question boundary pattern is valid")
});

pub struct SegmenterService;

impl SegmenterService {
    /// Splits one raw text blob into an introduction, an ordered list of
    /// question spans, and an optional answer-key span.
    ///
    /// Emitted ordinals are positional: exactly `1..N` in source order, no
    /// matter what literal numbers the headings carry. The literal number is
    /// kept alongside so answer-key entries can be correlated later. Zero
    /// detected boundaries is a normal outcome, not an error.
    pub fn segment(raw: &str) -> SegmentedContent {
        let mut intro_lines: Vec<&str> = Vec::new();
        let mut questions: Vec<QuestionSpan> = Vec::new();
        let mut key_lines: Option<Vec<&str>> = None;
        let mut current: Option<(u32, Vec<&str>)> = None;

        for line in raw.lines() {
            if let Some(lines) = key_lines.as_mut() {
                lines.push(line);
                continue;
            }

            if is_answer_key_boundary(line) {
                flush(&mut current, &mut questions);
                key_lines = Some(Vec::new());
                continue;
            }

            if let Some(number) = question_boundary_number(line) {
                flush(&mut current, &mut questions);
                current = Some((number, vec![line]));
                continue;
            }

            match current.as_mut() {
                Some((_, lines)) => lines.push(line),
                None => intro_lines.push(line),
            }
        }
        flush(&mut current, &mut questions);

        debug!(
            "segmented content into {} question span(s), answer key {}",
            questions.len(),
            if key_lines.is_some() {
                "present"
            } else {
                "absent"
            }
        );

        SegmentedContent {
            intro: intro_lines.join("\n").trim().to_string(),
            questions,
            answer_key_span: key_lines.map(|lines| lines.join("\n").trim().to_string()),
        }
    }
}

fn flush(current: &mut Option<(u32, Vec<&str>)>, questions: &mut Vec<QuestionSpan>) {
    if let Some((source_number, lines)) = current.take() {
        let ordinal = questions.len() as u32 + 1;
        questions.push(QuestionSpan {
            ordinal,
            source_number,
            text: lines.join("\n").trim().to_string(),
        });
    }
}

fn question_boundary_number(line: &str) -> Option<u32> {
    QUESTION_BOUNDARY
        .captures(line)
        .and_then(|caps| caps[1].parse().ok())
}

fn is_answer_key_boundary(line: &str) -> bool {
    let heading = normalized_heading(line);
    heading.starts_with("answer key") || heading == "answers"
}

/// Strips heading decoration (hashes, bold markers, emoji, whitespace) from
/// both ends and lowercases the remainder.
fn normalized_heading(line: &str) -> String {
    line.trim_start_matches(|c: char| !c.is_alphanumeric())
        .trim_end_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase()
}
