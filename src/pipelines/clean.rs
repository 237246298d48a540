//! Corpus pre-pass.
//!
//! Applies the line correction table to every XML file of the raw corpus,
//! rewriting only the files whose content changed.
use std::path::PathBuf;
use std::sync::Arc;

use log::{error, info};
use rayon::prelude::*;
use serde::Serialize;

use crate::error::Error;
use crate::io::reader::Corpus;
use crate::tables::Tables;
use crate::transformers::CleanStats;

use super::Pipeline;

pub struct Clean {
    src: PathBuf,
    tables: Arc<Tables>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CleanSummary {
    pub files: usize,
    pub changed: usize,
    pub replaced: usize,
    pub dropped: usize,
    pub failed: usize,
}

impl CleanSummary {
    fn add(&mut self, stats: &CleanStats) {
        self.files += 1;
        self.changed += usize::from(stats.changed);
        self.replaced += stats.replaced;
        self.dropped += stats.dropped;
    }
}

impl Clean {
    pub fn new(src: PathBuf, tables: Arc<Tables>) -> Self {
        Self { src, tables }
    }
}

impl Pipeline<CleanSummary> for Clean {
    fn run(&self) -> Result<CleanSummary, Error> {
        if !self.src.is_dir() {
            return Err(Error::Custom(format!(
                "source has to be a directory: {:?}",
                self.src
            )));
        }

        let files = Corpus::new(&self.src).all_files()?;
        info!("cleaning {} files in {:?}", files.len(), self.src);

        let results: Vec<_> = files
            .par_iter()
            .map(|path| (path, self.tables.corrections.clean_file(path)))
            .collect();

        let mut summary = CleanSummary::default();
        for (path, result) in results {
            match result {
                Ok(stats) => summary.add(&stats),
                Err(e) => {
                    error!("could not clean {:?}: {}", path, e);
                    summary.failed += 1;
                }
            }
        }

        info!(
            "{} files, {} changed ({} lines replaced, {} dropped), {} failed",
            summary.files, summary.changed, summary.replaced, summary.dropped, summary.failed
        );
        Ok(summary)
    }
}
