/*! Sentence alignment engine

Splits a [DocumentRecord] into sentences and pairs each sentence (text and template) with
the triple group the corpus attributes to it.

Document-level stages (template fixes, tokenization, coreference collapsing, sentence splitting
and the length check) run when [Aligner::align] is called. Per-sentence pruning runs lazily,
as the returned [Alignment] is iterated.
!*/
use std::collections::VecDeque;

use log::{debug, warn};

use super::canonical::{canonicalize, prune};
use super::event::{CorefReason, DirtyReason, Event};
use super::record::{AlignedSentence, DocumentRecord, Triple};
use super::tag::TagMap;
use crate::error::Error;
use crate::tables::Tables;
use crate::tokenizer::{TokenizeOverrides, Tokenizer};
use crate::transformers::{MisspellingFixer, Transform};

/// Aligns documents using a set of [Tables] and a [Tokenizer].
///
/// An aligner holds no per-document state, but its tokenizer is not meant to be shared:
/// build one aligner per worker.
pub struct Aligner<'t, T: Tokenizer> {
    tables: &'t Tables,
    tokenizer: T,
    overrides: TokenizeOverrides,
    fix_spelling: bool,
}

/// A sentence ready to be pruned: (triples, text, template).
type SentenceParts = (Vec<Triple>, String, String);

impl<'t, T: Tokenizer> Aligner<'t, T> {
    pub fn new(tables: &'t Tables, tokenizer: T) -> Self {
        let overrides = tables.tokenize_overrides.tokenized_with(&tokenizer);
        Self {
            tables,
            tokenizer,
            overrides,
            fix_spelling: true,
        }
    }

    /// Enables or disables misspelling fixes on sentence texts (enabled by default).
    pub fn with_spelling(mut self, fix_spelling: bool) -> Self {
        self.fix_spelling = fix_spelling;
        self
    }

    /// Aligns a document.
    ///
    /// The returned iterator yields corpus defects as [Event::Dirty] and [Event::Coref]
    /// alongside aligned sentences, and ends after an integrity [Error].
    pub fn align(&self, doc: &DocumentRecord) -> Alignment<'t> {
        let mut events = VecDeque::new();
        match self.prepare(doc, &mut events) {
            Ok(Some((tag_to_entity, sentences))) => Alignment {
                entry_id: doc.entry_id.clone(),
                pending: events,
                sentences: sentences.into_iter().enumerate().collect(),
                tag_to_entity,
                fixer: self.fix_spelling.then_some(&self.tables.misspelling),
            },
            Ok(None) => Alignment::done(doc, events),
            Err(e) => {
                events.push_back(Err(e));
                Alignment::done(doc, events)
            }
        }
    }

    /// Document-level stages. Returns [None] if the whole document is rejected.
    fn prepare(
        &self,
        doc: &DocumentRecord,
        events: &mut VecDeque<Result<Event, Error>>,
    ) -> Result<Option<(TagMap, Vec<SentenceParts>)>, Error> {
        let mut dirty = |reason: DirtyReason| {
            debug!("{}: {}", doc.entry_id, reason);
            events.push_back(Ok(Event::Dirty(reason)));
        };

        let template = self
            .tables
            .template_words
            .transform_own(doc.raw_template.clone());

        let text = self.tokenizer.word_tokenize(&doc.raw_text, false);
        let template = self.tokenizer.word_tokenize(&template, false);

        let groups: Vec<Vec<Triple>> = doc
            .sentence_groups
            .iter()
            .filter(|group| !group.is_empty())
            .cloned()
            .collect();
        let empty_groups = doc.sentence_groups.len() - groups.len();
        if empty_groups > 0 {
            dirty(DirtyReason::EmptyTripleGroups(empty_groups));
        }

        if doc.tag_to_entity.is_empty() {
            dirty(DirtyReason::MissingTagMap);
            return Ok(None);
        }
        if groups.is_empty() {
            if empty_groups == 0 {
                dirty(DirtyReason::NoTripleGroups);
            }
            return Ok(None);
        }

        let (tag_to_entity, template) = canonicalize(&doc.tag_to_entity, &template)?;
        let groups: Vec<Vec<Triple>> = groups
            .into_iter()
            .map(|group| group.into_iter().map(Triple::unquoted).collect())
            .collect();

        let (templates, texts) = if groups.len() == 1 {
            (vec![template], vec![text])
        } else {
            (
                self.tokenizer.sentence_split(&template),
                self.overrides.apply(self.tokenizer.sentence_split(&text)),
            )
        };

        if templates.len() != texts.len() || texts.len() != groups.len() {
            dirty(DirtyReason::LengthMismatch {
                templates: templates.len(),
                texts: texts.len(),
                groups: groups.len(),
            });
            return Ok(None);
        }

        let sentences = groups
            .into_iter()
            .zip(texts)
            .zip(templates)
            .map(|((triples, text), template)| (triples, text, template))
            .collect();

        Ok(Some((tag_to_entity, sentences)))
    }
}

/// Lazy sequence of alignment events for one document.
///
/// Not restartable: once exhausted, it yields nothing more.
#[derive(Debug)]
pub struct Alignment<'t> {
    entry_id: String,
    pending: VecDeque<Result<Event, Error>>,
    sentences: VecDeque<(usize, SentenceParts)>,
    tag_to_entity: TagMap,
    fixer: Option<&'t MisspellingFixer>,
}

impl<'t> Alignment<'t> {
    fn done(doc: &DocumentRecord, pending: VecDeque<Result<Event, Error>>) -> Self {
        Self {
            entry_id: doc.entry_id.clone(),
            pending,
            sentences: VecDeque::new(),
            tag_to_entity: TagMap::new(),
            fixer: None,
        }
    }

    fn align_sentence(&mut self, sentence: usize, parts: SentenceParts) {
        let (triples, text, template) = parts;
        let pruned = prune(&triples, &template, &self.tag_to_entity);

        if pruned.mismatch {
            let reason = CorefReason::TagMismatch { sentence };
            warn!("{}: {}: {:?}", self.entry_id, reason, pruned.template);
            self.pending.push_back(Ok(Event::Coref(reason)));
        }

        if pruned.is_empty() || text.is_empty() {
            let reason = CorefReason::Unaligned { sentence };
            debug!("{}: {}", self.entry_id, reason);
            self.pending.push_back(Ok(Event::Coref(reason)));
            return;
        }

        let text = match self.fixer {
            Some(fixer) => fixer.transform_own(text),
            None => text,
        };

        self.pending
            .push_back(Ok(Event::Aligned(AlignedSentence {
                triples: pruned.triples,
                template: pruned.template,
                text,
                tag_to_entity: pruned.tag_to_entity,
            })));
    }
}

impl<'t> Iterator for Alignment<'t> {
    type Item = Result<Event, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(event) = self.pending.pop_front() {
                return Some(event);
            }
            let (sentence, parts) = self.sentences.pop_front()?;
            self.align_sentence(sentence, parts);
        }
    }
}
