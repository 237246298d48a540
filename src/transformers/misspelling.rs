//! Whole-word misspelling correction.
//!
//! A misspelled token is only replaced when both of its neighbours are *splitable*:
//! the start/end of the text, a space or common punctuation.
//! This keeps `accademiz` from being rewritten inside `xaccademizx`.
use super::Transform;

/// Start of text marker.
pub const ALPHA: char = '\u{2}';
/// End of text marker.
pub const OMEGA: char = '\u{3}';

/// Characters that can delimit a misspelled token.
pub const SPLITABLES: [char; 15] = [
    ALPHA, OMEGA, ' ', '.', ',', ':', '-', '\'', '(', ')', '?', '!', '&', ';', '"',
];

/// Fixes known transcription errors, in table order.
///
/// Replacements are applied one pair after the other, so if two entries overlap
/// the later one sees the output of the earlier one.
#[derive(Debug, Clone, Default)]
pub struct MisspellingFixer {
    pairs: Vec<(String, String)>,
}

impl MisspellingFixer {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }

    /// Number of (misspelled, correct) pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn fix(&self, text: &str) -> String {
        self.pairs
            .iter()
            .fold(text.to_string(), |text, (wrong, right)| {
                replace_bounded(&text, wrong, right)
            })
    }
}

impl Transform for MisspellingFixer {
    fn transform_own(&self, text: String) -> String {
        self.fix(&text)
    }
}

/// `None` stands for the start or end of the text.
#[inline]
fn is_splitable(c: Option<char>) -> bool {
    match c {
        None => true,
        Some(c) => SPLITABLES.contains(&c),
    }
}

/// Replaces every occurrence of `from` in `text` that is bounded by splitables on both sides.
fn replace_bounded(text: &str, from: &str, to: &str) -> String {
    if from.is_empty() || !text.contains(from) {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for (idx, _) in text.match_indices(from) {
        let end = idx + from.len();
        let before = text[..idx].chars().next_back();
        let after = text[end..].chars().next();
        if is_splitable(before) && is_splitable(after) {
            out.push_str(&text[last..idx]);
            out.push_str(to);
            last = end;
        }
    }
    out.push_str(&text[last..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixer() -> MisspellingFixer {
        MisspellingFixer::new(vec![
            ("accademiz".to_string(), "academia".to_string()),
            ("recor".to_string(), "record".to_string()),
            ("7and".to_string(), "7 and".to_string()),
        ])
    }

    #[test]
    fn bounded_by_punctuation() {
        assert_eq!(fixer().fix(". accademiz ."), ". academia .");
    }

    #[test]
    fn not_bounded() {
        assert_eq!(fixer().fix("xaccademizx"), "xaccademizx");
    }

    #[test]
    fn text_edges_are_boundaries() {
        assert_eq!(fixer().fix("accademiz"), "academia");
        assert_eq!(fixer().fix("(accademiz)"), "(academia)");
    }

    #[test]
    fn adjacent_occurrences() {
        assert_eq!(fixer().fix("recor recor"), "record record");
    }

    #[test]
    fn prefix_of_longer_word() {
        // "record" starts with "recor" but is followed by a letter
        assert_eq!(fixer().fix("a record"), "a record");
    }

    #[test]
    fn idempotent() {
        let f = fixer();
        let once = f.fix("the recor of 7and accademiz, really");
        assert_eq!(once, "the record of 7 and academia, really");
        assert_eq!(f.fix(&once), once);
    }

    #[test]
    fn control_markers() {
        let text = format!("{ALPHA}accademiz{OMEGA}");
        assert_eq!(fixer().fix(&text), format!("{ALPHA}academia{OMEGA}"));
    }

    #[test]
    fn transform_own() {
        let f = fixer();
        assert_eq!(f.transform_own("accademiz".to_string()), "academia");
    }
}
