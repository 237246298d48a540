//! Per-document alignment events and counters.
use std::fmt;
use std::ops::AddAssign;

use serde::Serialize;

use super::record::AlignedSentence;

/// Outcome of one alignment step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Aligned(AlignedSentence),
    Dirty(DirtyReason),
    Coref(CorefReason),
}

/// Corpus defects for which (part of) a document is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirtyReason {
    /// Some sentence triple groups were empty.
    EmptyTripleGroups(usize),
    MissingTagMap,
    NoTripleGroups,
    LengthMismatch {
        templates: usize,
        texts: usize,
        groups: usize,
    },
}

impl DirtyReason {
    /// How much this adds to the dirty data counter.
    pub fn weight(&self) -> usize {
        match self {
            DirtyReason::EmptyTripleGroups(n) => *n,
            _ => 1,
        }
    }
}

impl fmt::Display for DirtyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirtyReason::EmptyTripleGroups(n) => write!(f, "{n} empty triple groups"),
            DirtyReason::MissingTagMap => write!(f, "no references"),
            DirtyReason::NoTripleGroups => write!(f, "no triple groups"),
            DirtyReason::LengthMismatch {
                templates,
                texts,
                groups,
            } => write!(
                f,
                "length mismatch: {templates} template sentences, {texts} text sentences, {groups} triple groups"
            ),
        }
    }
}

/// Coreference failures of a single sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorefReason {
    /// Template tags and kept tags differ. The sentence is still yielded.
    TagMismatch { sentence: usize },
    /// Nothing could be aligned. The sentence is skipped.
    Unaligned { sentence: usize },
}

impl fmt::Display for CorefReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CorefReason::TagMismatch { sentence } => {
                write!(f, "sentence {sentence}: template tags differ from triple tags")
            }
            CorefReason::Unaligned { sentence } => {
                write!(f, "sentence {sentence}: no triple left after pruning")
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Counters {
    pub aligned: usize,
    pub dirty: usize,
    pub corefs: usize,
    /// Documents aborted on an integrity error.
    pub integrity: usize,
}

impl Counters {
    pub fn record(&mut self, event: &Event) {
        match event {
            Event::Aligned(_) => self.aligned += 1,
            Event::Dirty(reason) => self.dirty += reason.weight(),
            Event::Coref(_) => self.corefs += 1,
        }
    }
}

impl AddAssign for Counters {
    fn add_assign(&mut self, rhs: Self) {
        self.aligned += rhs.aligned;
        self.dirty += rhs.dirty;
        self.corefs += rhs.corefs;
        self.integrity += rhs.integrity;
    }
}

impl fmt::Display for Counters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "aligned: {}, dirty: {}, corefs: {}, integrity: {}",
            self.aligned, self.dirty, self.corefs, self.integrity
        )
    }
}
