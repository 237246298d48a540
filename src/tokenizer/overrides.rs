//! Hand-made corrections of sentence splits.
//!
//! Sentence segmenters trip on abbreviations ("St.", "Jr.", "B.S.", "Sc. D.").
//! Each entry maps a complete observed split to the right one; there is no partial matching.
//! A different split of the same document text is corrected too.
use std::collections::HashMap;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::Tokenizer;

/// One entry of `fix_tokenize.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenizeOverride {
    pub split: Vec<String>,
    pub fixed: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct TokenizeOverrides {
    entries: Vec<TokenizeOverride>,
    /// Observed split -> fixed split.
    table: HashMap<Vec<String>, Vec<String>>,
    /// Whitespace-normalized document text (of either side) -> fixed split.
    by_text: HashMap<String, Vec<String>>,
}

/// Joins sentences back into a document, with single spaces.
fn document_text<S: AsRef<str>>(sentences: &[S]) -> String {
    sentences
        .iter()
        .flat_map(|s| s.as_ref().split_whitespace())
        .join(" ")
}

impl TokenizeOverrides {
    pub fn new<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = TokenizeOverride>,
    {
        let entries: Vec<TokenizeOverride> = entries.into_iter().collect();
        let mut table = HashMap::with_capacity(entries.len());
        let mut by_text = HashMap::with_capacity(entries.len());

        for entry in &entries {
            table.insert(entry.split.clone(), entry.fixed.clone());
            by_text.insert(document_text(&entry.split), entry.fixed.clone());
            by_text
                .entry(document_text(&entry.fixed))
                .or_insert_with(|| entry.fixed.clone());
        }

        Self {
            entries,
            table,
            by_text,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the corrected split if `sentences` is a known failure, `sentences` otherwise.
    ///
    /// A known failure is either the exact observed split, or any split of the same document text,
    /// since the observed split depends on the segmenter that produced it.
    pub fn apply(&self, sentences: Vec<String>) -> Vec<String> {
        if let Some(fixed) = self.table.get(&sentences) {
            return fixed.clone();
        }
        match self.by_text.get(&document_text(&sentences)) {
            Some(fixed) => fixed.clone(),
            None => sentences,
        }
    }

    /// Entries are stored as raw corpus sentences, while the aligner splits word-tokenized text.
    /// This rewrites both sides of every entry through the provided tokenizer so that they can match.
    pub fn tokenized_with<T: Tokenizer>(&self, tokenizer: &T) -> Self {
        let tokenize = |sentences: &[String]| -> Vec<String> {
            sentences
                .iter()
                .map(|s| tokenizer.word_tokenize(s, false))
                .collect()
        };
        Self::new(self.entries.iter().map(|entry| TokenizeOverride {
            split: tokenize(&entry.split),
            fixed: tokenize(&entry.fixed),
        }))
    }
}
