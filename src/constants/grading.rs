/// Minimum token-overlap ratio for a free-text answer to count as correct.
pub const FREE_TEXT_MATCH_THRESHOLD: f64 = 0.6;

/// An older grading path elsewhere in the product compares against 0.5.
/// Which of the two values is canonical is an unresolved product decision;
/// the engine grades with [`FREE_TEXT_MATCH_THRESHOLD`] only, and this
/// constant keeps the discrepancy visible until that decision lands.
pub const LEGACY_FREE_TEXT_MATCH_THRESHOLD: f64 = 0.5;

/// Separator used when a multi-valued answer must be compared as one string.
pub const ANSWER_JOIN_SEPARATOR: &str = ", ";
