//! Alignment pipeline
//!
//! For each requested split:
//! 1. XML files are discovered under `<src>/<split>` and sorted.
//! 1. Files are read and aligned in parallel, each rayon worker owning its own [Aligner].
//! 1. Per-file counters are summed once workers return.
//! 1. Aligned sentences are written to `<dst>/<train|valid|test>.jsonl`, in file order.
//!
//! Corpus defects are counted, never fatal. A file that cannot be read is logged and skipped,
//! and a document hitting an integrity error is counted and skipped.
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{debug, error, info};
use rayon::prelude::*;
use serde::Serialize;

use crate::alignment::{AlignedSentence, Aligner, Counters, Event};
use crate::error::Error;
use crate::io::reader::{read_file, Corpus, Split};
use crate::io::writer::{WriterJsonl, WriterTrait};
use crate::tables::Tables;
use crate::tokenizer::{Segmenter, Tokenizer};

use super::Pipeline;

pub struct Align {
    src: PathBuf,
    dst: PathBuf,
    splits: Vec<Split>,
    tables: Arc<Tables>,
    fix_spelling: bool,
    parallel: bool,
}

/// Outcome of a split alignment.
#[derive(Debug, Clone, Serialize)]
pub struct SplitSummary {
    pub split: String,
    pub output: PathBuf,
    pub files: usize,
    pub failed_files: usize,
    pub counters: Counters,
}

impl Align {
    pub fn new(src: PathBuf, dst: PathBuf, splits: Vec<Split>, tables: Arc<Tables>) -> Self {
        debug!("aligning splits {:?}", splits);
        Self {
            src,
            dst,
            splits,
            tables,
            fix_spelling: true,
            parallel: true,
        }
    }

    pub fn with_spelling(mut self, fix_spelling: bool) -> Self {
        self.fix_spelling = fix_spelling;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    fn aligner(&self) -> Aligner<'_, Segmenter> {
        Aligner::new(&self.tables, Segmenter).with_spelling(self.fix_spelling)
    }

    /// Aligns every document of a file.
    fn process_file<T: Tokenizer>(
        aligner: &Aligner<T>,
        path: &Path,
    ) -> Result<(Vec<AlignedSentence>, Counters), Error> {
        let docs = read_file(path)?;
        let mut counters = Counters::default();
        let mut sentences = Vec::new();

        for doc in &docs {
            for event in aligner.align(doc) {
                match event {
                    Ok(event) => {
                        counters.record(&event);
                        if let Event::Aligned(sentence) = event {
                            sentences.push(sentence);
                        }
                    }
                    Err(e) => {
                        error!("{:?} {}: {}", path, doc.entry_id, e);
                        counters.integrity += 1;
                    }
                }
            }
        }

        info!(
            "{:?}: {} documents, {}",
            path.file_name().unwrap_or_default(),
            docs.len(),
            counters
        );
        Ok((sentences, counters))
    }

    fn run_split(&self, split: Split) -> Result<SplitSummary, Error> {
        let files = Corpus::new(&self.src).files(split)?;
        info!("[{}]: {} files", split, files.len());

        let results: Vec<_> = if self.parallel {
            files
                .par_iter()
                .map_init(|| self.aligner(), |aligner, path| Self::process_file(aligner, path))
                .collect()
        } else {
            let aligner = self.aligner();
            files
                .iter()
                .map(|path| Self::process_file(&aligner, path))
                .collect()
        };

        let mut writer = WriterJsonl::new(&self.dst, split.output_name())?;
        let mut counters = Counters::default();
        let mut failed_files = 0;

        for (path, result) in files.iter().zip(results) {
            match result {
                Ok((sentences, file_counters)) => {
                    writer.write(sentences)?;
                    counters += file_counters;
                }
                Err(e) => {
                    error!("could not read {:?}: {}", path, e);
                    failed_files += 1;
                }
            }
        }
        writer.close()?;

        info!(
            "[{}]: saved {} entries into {:?} ({})",
            split,
            writer.written(),
            writer.path(),
            counters
        );

        Ok(SplitSummary {
            split: split.to_string(),
            output: writer.path().to_path_buf(),
            files: files.len(),
            failed_files,
            counters,
        })
    }
}

impl Pipeline<Vec<SplitSummary>> for Align {
    fn run(&self) -> Result<Vec<SplitSummary>, Error> {
        if !self.src.is_dir() {
            return Err(Error::Custom(format!(
                "source has to be a directory: {:?}",
                self.src
            )));
        }
        if !self.dst.exists() {
            info!("destination {:?} does not exist. Creating", self.dst);
            std::fs::create_dir_all(&self.dst)?;
        }

        self.splits
            .iter()
            .map(|split| self.run_split(*split))
            .collect()
    }
}
