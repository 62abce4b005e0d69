use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;

static LABELLED_ANSWER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:correct\s+answer|answer)\s*:\s*([^\n]+)")
        .expect("labelled answer pattern is valid")
});

// Cuts a labelled value short when another label follows on the same line.
static NEXT_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\s*\b(?:explanation|reasoning|reason|note|why)\s*:.*$")
        .expect("trailing label pattern is valid")
});

static LEADING_CHOICE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*\(([A-Za-z])\)\s*(\S.*)").expect("leading choice pattern is valid")
});

pub struct ExplanationService;

impl ExplanationService {
    /// Recovers one canonical answer string from free-form explanation prose,
    /// used when a question carries an inline answer detail instead of a
    /// shared key section.
    ///
    /// Heuristics are layered, first success wins:
    /// 1. an explicit "Correct Answer:"/"Answer:" label, value running to the
    ///    next label or line break;
    /// 2. a leading parenthesized option letter, on the theory that the
    ///    labelled option is restated first;
    /// 3. `None` — the caller treats the question as ungradable and must not
    ///    guess.
    pub fn extract_answer(detail: Option<&str>) -> Option<String> {
        let detail = detail?;

        if let Some(caps) = LABELLED_ANSWER.captures(detail) {
            let value = NEXT_LABEL.replace(&caps[1], "");
            let value = value.trim();
            if !value.is_empty() {
                return Some(value.to_string());
            }
        }

        if let Some(caps) = LEADING_CHOICE.captures(detail) {
            let value = caps[2].trim();
            if !value.is_empty() {
                return Some(value.to_string());
            }
        }

        warn!("no answer could be extracted from explanation text");
        None
    }
}
