/*! Line-level corrections of the raw corpus files.

The corpus ships with several thousand hand-annotated lines that are broken in ways no
pattern rule can safely catch (missing periods, duplicated sentence boundaries, mis-ordered
sentence ids). Each known-bad line is keyed by
`(path suffix, zero-based line number, stripped line content)` and is either replaced or dropped.
!*/
use std::collections::{HashMap, HashSet};
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Applied to every line before the table lookup.
const LEGACY_LINE_FIX: (&str, &str) = (
    " (abbrv. Acta Palaeontol. Pol)",
    " (abbrv Acta Palaeontol Pol)",
);

/// One entry of the correction table, as stored in `corrections.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CorrectionEntry {
    /// Path suffix, e.g. `train/1triples/Airport.xml`.
    pub file: String,
    /// Zero-based line number.
    pub line: usize,
    /// Stripped line content.
    pub text: String,
    /// `None` drops the line.
    pub replacement: Option<String>,
}

type Key = (String, usize, String);

#[derive(Debug, Clone, Default)]
pub struct Corrections {
    table: HashMap<Key, Option<String>>,
    files: HashSet<String>,
}

/// Outcome of cleaning a single file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanStats {
    pub replaced: usize,
    pub dropped: usize,
    pub changed: bool,
}

impl std::ops::AddAssign for CleanStats {
    fn add_assign(&mut self, rhs: Self) {
        self.replaced += rhs.replaced;
        self.dropped += rhs.dropped;
        self.changed |= rhs.changed;
    }
}

impl Corrections {
    pub fn new<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = CorrectionEntry>,
    {
        let mut table = HashMap::new();
        let mut files = HashSet::new();
        for entry in entries {
            files.insert(entry.file.clone());
            table.insert((entry.file, entry.line, entry.text), entry.replacement);
        }
        Self { table, files }
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Returns true if at least one entry targets the provided path suffix.
    pub fn has_file(&self, file: &str) -> bool {
        self.files.contains(file)
    }

    /// Corrects a single line.
    ///
    /// `line` may carry indentation and its line terminator, both are preserved.
    /// Returns `None` when the line has to be dropped.
    pub fn apply(&self, file: &str, line_ix: usize, line: &str) -> Option<String> {
        let line = line.replace(LEGACY_LINE_FIX.0, LEGACY_LINE_FIX.1);
        let text = line.trim();

        match self
            .table
            .get(&(file.to_string(), line_ix, text.to_string()))
        {
            None => Some(line),
            Some(None) => None,
            Some(Some(replacement)) if replacement.is_empty() => None,
            Some(Some(replacement)) => Some(line.replace(text, replacement)),
        }
    }

    /// Corrects every line of `content`, returning the corrected content and statistics.
    pub fn apply_content(&self, file: &str, content: &str) -> (String, CleanStats) {
        let mut stats = CleanStats::default();
        let mut out = String::with_capacity(content.len());

        for (line_ix, line) in content.split_inclusive('\n').enumerate() {
            match self.apply(file, line_ix, line) {
                Some(fixed) => {
                    if fixed != line {
                        stats.replaced += 1;
                    }
                    out.push_str(&fixed);
                }
                None => stats.dropped += 1,
            }
        }

        stats.changed = out != content;
        (out, stats)
    }

    /// Cleans a corpus file in place.
    /// The file is only rewritten if its content actually changed.
    pub fn clean_file(&self, path: &Path) -> Result<CleanStats, Error> {
        let file = path_suffix(path);
        if !self.has_file(&file) {
            return Ok(CleanStats::default());
        }

        let content = std::fs::read_to_string(path)?;
        let (fixed, stats) = self.apply_content(&file, &content);
        if stats.changed {
            debug!(
                "{:?}: {} lines replaced, {} dropped",
                path, stats.replaced, stats.dropped
            );
            std::fs::write(path, fixed)?;
        }
        Ok(stats)
    }
}

/// Last three components of a path, `/`-joined (`<split>/<size>triples/<category>.xml`).
pub fn path_suffix(path: &Path) -> String {
    let components: Vec<_> = path
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect();
    let start = components.len().saturating_sub(3);
    components[start..].join("/")
}
