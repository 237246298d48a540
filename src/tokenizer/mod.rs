/*! Sentence and word tokenization

Holds a [Tokenizer] trait for plugging other tokenizers in.

The default one, [Segmenter], uses Unicode text segmentation (UAX #29) for sentences and
affix rules for words. Known sentence splitting failures are fixed afterwards by [TokenizeOverrides]. !*/
mod overrides;
mod segmenter;

pub use overrides::{TokenizeOverride, TokenizeOverrides};
pub use segmenter::Segmenter;

/// All tokenizers should implement [Tokenizer] to be useable by the aligner.
///
/// Implementations are not expected to be shared between threads:
/// each worker owns its own instance.
pub trait Tokenizer {
    /// Splits a text into an ordered list of sentences.
    fn sentence_split(&self, text: &str) -> Vec<String>;

    /// Returns the tokens of `text` joined by single spaces.
    fn word_tokenize(&self, text: &str, lower: bool) -> String;
}
