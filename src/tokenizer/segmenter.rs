//! Default [Tokenizer], based on Unicode text segmentation.
//!
//! Sentences come from UAX #29 sentence boundaries, merged back when a boundary
//! follows a known abbreviation.
//!
//! Words are whitespace-separated chunks from which prefix/suffix punctuation is peeled,
//! with hyphens between letters (or between digits) split as infixes.
//! Entity tags like `AGENT-1` are kept whole.
use std::collections::HashSet;

use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

use super::Tokenizer;

/// Longer entries first, so that `` is peeled before `.
const PREFIXES: [&str; 11] = ["``", "\"", "(", "[", "{", "`", "$", "£", "€", "<", "*"];

const SUFFIXES: [&str; 17] = [
    "''", "'s", "'S", "’s", "n't", "\"", ")", "]", "}", ",", ";", ":", "!", "?", "%", "'", "…",
];

lazy_static! {
    /// Abbreviations that keep their final period.
    static ref ABBREVIATIONS: HashSet<&'static str> = [
        "Mr", "Mrs", "Ms", "Dr", "Prof", "St", "Jr", "Sr", "Mt", "Ft", "Co", "Corp", "Inc",
        "Ltd", "No", "vs", "etc", "Jan", "Feb", "Mar", "Apr", "Aug", "Sep", "Sept", "Oct",
        "Nov", "Dec", "Pa", "Ala", "Ariz", "Calif", "Colo", "Conn", "Fla", "Ga", "Ill", "Ind",
        "Kan", "Ky", "La", "Md", "Mass", "Mich", "Minn", "Miss", "Mo", "Neb", "Nev", "Okla",
        "Ore", "Tenn", "Va", "Wash", "Wis", "Sc", "abbrv",
    ]
    .into_iter()
    .collect();

    /// Dotted initialisms: U.S, B.S, A.F.C, D.C
    static ref INITIALISM: Regex = Regex::new(r"^(?:\p{L}\.)+\p{L}$").unwrap();
}

/// Stateless tokenizer, cheap to create for every worker.
#[derive(Debug, Clone, Copy, Default)]
pub struct Segmenter;

impl Tokenizer for Segmenter {
    fn sentence_split(&self, text: &str) -> Vec<String> {
        let mut sentences: Vec<String> = Vec::new();

        for sentence in text.unicode_sentences() {
            let sentence = sentence.trim();
            if sentence.is_empty() {
                continue;
            }

            match sentences.last_mut() {
                Some(last) if ends_with_abbreviation(last) => {
                    last.push(' ');
                    last.push_str(sentence);
                }
                _ => sentences.push(sentence.to_string()),
            }
        }

        sentences
    }

    fn word_tokenize(&self, text: &str, lower: bool) -> String {
        let text = if lower {
            text.to_lowercase()
        } else {
            text.to_string()
        };

        text.split_whitespace().flat_map(split_chunk).join(" ")
    }
}

/// `word` is expected to end with a period.
/// Only the last piece of a hyphenated word counts: `Vincent-St.` ends with `St.`.
fn is_abbreviation(word: &str) -> bool {
    let word = word.rsplit(['-', '–']).next().unwrap_or(word);
    let stem = match word.strip_suffix('.') {
        Some(stem) if !stem.is_empty() => stem,
        _ => return false,
    };

    // single initial: "J."
    let mut chars = stem.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return c.is_uppercase();
    }

    // "..", "..."
    if stem.chars().all(|c| c == '.') {
        return true;
    }

    ABBREVIATIONS.contains(stem) || INITIALISM.is_match(stem)
}

/// Dotted initialisms (`U.S.`, `D.C.`) often end a sentence, so they do not hold it open.
fn ends_with_abbreviation(sentence: &str) -> bool {
    sentence
        .split_whitespace()
        .next_back()
        .map(|word| word.trim_start_matches(|c: char| PREFIXES.iter().any(|p| p.starts_with(c))))
        .map(|word| is_abbreviation(word) && !is_initialism(word))
        .unwrap_or(false)
}

fn is_initialism(word: &str) -> bool {
    word.strip_suffix('.')
        .map(|stem| INITIALISM.is_match(stem))
        .unwrap_or(false)
}

/// Punctuation tokens that are already whole (`''`, `n't`, ...).
fn is_affix(token: &str) -> bool {
    PREFIXES.contains(&token) || SUFFIXES.contains(&token)
}

/// Splits a whitespace-free chunk into tokens.
fn split_chunk(chunk: &str) -> Vec<&str> {
    let mut prefixes = Vec::new();
    let mut suffixes = Vec::new();
    let mut rest = chunk;

    while let Some(prefix) = PREFIXES
        .iter()
        .find(|p| !is_affix(rest) && rest.len() > p.len() && rest.starts_with(**p))
    {
        prefixes.push(&rest[..prefix.len()]);
        rest = &rest[prefix.len()..];
    }

    loop {
        if is_affix(rest) {
            break;
        }
        if let Some(suffix) = SUFFIXES
            .iter()
            .find(|s| rest.len() > s.len() && rest.ends_with(**s))
        {
            let cut = rest.len() - suffix.len();
            suffixes.push(&rest[cut..]);
            rest = &rest[..cut];
            continue;
        }
        if rest.len() > 1 && rest.ends_with('.') && !is_abbreviation(rest) {
            let cut = rest.len() - 1;
            suffixes.push(&rest[cut..]);
            rest = &rest[..cut];
            continue;
        }
        break;
    }

    let mut tokens = prefixes;
    tokens.extend(split_infixes(rest));
    tokens.extend(suffixes.into_iter().rev());
    tokens
}

/// Splits on hyphens that sit between two letters or two digits.
fn split_infixes(core: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = core.char_indices().collect();
    let mut tokens = Vec::new();
    let mut start = 0;

    for window in chars.windows(3) {
        let (_, before) = window[0];
        let (idx, c) = window[1];
        let (_, after) = window[2];
        let between_letters = before.is_alphabetic() && after.is_alphabetic();
        let between_digits = before.is_ascii_digit() && after.is_ascii_digit();
        if c == '-' && (between_letters || between_digits) {
            tokens.push(&core[start..idx]);
            tokens.push(&core[idx..idx + 1]);
            start = idx + 1;
        }
    }

    if start < core.len() || tokens.is_empty() {
        tokens.push(&core[start..]);
    }
    tokens.retain(|t| !t.is_empty());
    tokens
}
