/*! JSON lines writer.

Writes one [AlignedSentence] per line to `<dst>/<name>.jsonl`, truncating existing files.
!*/
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::debug;

use crate::alignment::AlignedSentence;
use crate::error;

use super::WriterTrait;

pub struct WriterJsonl {
    path: PathBuf,
    handle: BufWriter<File>,
    written: usize,
}

impl WriterJsonl {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of records written so far.
    pub fn written(&self) -> usize {
        self.written
    }
}

impl WriterTrait for WriterJsonl {
    type Item = AlignedSentence;

    fn new(dst: &Path, name: &str) -> Result<Self, error::Error> {
        if !dst.is_dir() {
            std::fs::create_dir_all(dst)?;
        }
        let path = dst.join(format!("{name}.jsonl"));
        debug!("creating {:?}", path);
        let handle = BufWriter::new(File::create(&path)?);
        Ok(Self {
            path,
            handle,
            written: 0,
        })
    }

    fn write(&mut self, sentences: Vec<AlignedSentence>) -> Result<(), error::Error> {
        for sentence in &sentences {
            self.write_single(sentence)?;
        }
        Ok(())
    }

    fn write_single(&mut self, sentence: &AlignedSentence) -> Result<(), error::Error> {
        serde_json::to_writer(&mut self.handle, sentence)?;
        self.handle.write_all(b"\n")?;
        self.written += 1;
        Ok(())
    }

    fn close(&mut self) -> Result<(), error::Error> {
        self.handle.flush()?;
        Ok(())
    }
}
