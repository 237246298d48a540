//! # webnlg-align
//!
//! Sentence-level alignment of the enriched WebNLG corpus.
//!
//! Each corpus verbalisation is split into sentences, and each sentence is paired with the
//! triples it verbalises, its delexicalised template and the entities its tags stand for.
//! See [alignment] for the core algorithm and [pipelines] for corpus-wide runs.
pub mod alignment;
pub mod error;
pub mod io;
pub mod pipelines;
pub mod rephrase;
pub mod tables;
pub mod tokenizer;
pub mod transformers;
