/*! Versioned correction and lookup tables.

Every table is a JSON file. The versions shipped under `data/` are embedded in the binary,
and a directory holding files with the same names can be provided to override them.

Tables are loaded once and are read-only afterwards: share them behind an [std::sync::Arc].
!*/
use std::path::Path;

use log::{debug, info};
use serde::de::DeserializeOwned;
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::error::Error;
use crate::rephrase::{Rephraser, UnitEntry, UnitTable};
use crate::tokenizer::{TokenizeOverride, TokenizeOverrides};
use crate::transformers::{CorrectionEntry, Corrections, MisspellingFixer, TemplateWordFix};

pub const CORRECTIONS: &str = "corrections.json";
pub const FIX_TOKENIZE: &str = "fix_tokenize.json";
pub const MISSPELLING: &str = "misspelling.json";
pub const FIX_TEMPLATE_WORD: &str = "fix_template_word.json";
pub const REPHRASING: &str = "rephrasing.json";
pub const REPHRASING_MUST: &str = "rephrasing_must.json";
pub const UNITS: &str = "units.json";

/// (file name, embedded content)
const EMBEDDED: [(&str, &str); 7] = [
    (CORRECTIONS, include_str!("../data/corrections.json")),
    (FIX_TOKENIZE, include_str!("../data/fix_tokenize.json")),
    (MISSPELLING, include_str!("../data/misspelling.json")),
    (FIX_TEMPLATE_WORD, include_str!("../data/fix_template_word.json")),
    (REPHRASING, include_str!("../data/rephrasing.json")),
    (REPHRASING_MUST, include_str!("../data/rephrasing_must.json")),
    (UNITS, include_str!("../data/units.json")),
];

/// Identification of a loaded table, used to audit which version a run used.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TableInfo {
    pub name: String,
    pub sha256: String,
    pub entries: usize,
}

/// Every table the alignment needs.
#[derive(Debug, Clone)]
pub struct Tables {
    pub corrections: Corrections,
    pub tokenize_overrides: TokenizeOverrides,
    pub misspelling: MisspellingFixer,
    pub template_words: TemplateWordFix,
    pub rephraser: Rephraser,
    infos: Vec<TableInfo>,
}

impl Tables {
    /// Tables shipped with the crate.
    pub fn embedded() -> Result<Self, Error> {
        Self::build(|name| {
            EMBEDDED
                .iter()
                .find(|(n, _)| *n == name)
                .map(|(_, content)| content.to_string())
                .ok_or_else(|| Error::Custom(format!("no embedded table named {name}")))
        })
    }

    /// Loads tables from `dir`, falling back on the embedded version for missing files.
    pub fn from_dir(dir: &Path) -> Result<Self, Error> {
        info!("loading tables from {:?}", dir);
        Self::build(|name| {
            let path = dir.join(name);
            if path.exists() {
                debug!("using {:?}", path);
                Ok(std::fs::read_to_string(path)?)
            } else {
                debug!("{} not found in {:?}, using embedded version", name, dir);
                EMBEDDED
                    .iter()
                    .find(|(n, _)| *n == name)
                    .map(|(_, content)| content.to_string())
                    .ok_or_else(|| Error::Custom(format!("no embedded table named {name}")))
            }
        })
    }

    /// Uses `dir` if provided, embedded tables otherwise.
    pub fn load(dir: Option<&Path>) -> Result<Self, Error> {
        match dir {
            Some(dir) => Self::from_dir(dir),
            None => Self::embedded(),
        }
    }

    fn build<F>(read: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Result<String, Error>,
    {
        let mut infos = Vec::with_capacity(EMBEDDED.len());

        let corrections: Vec<CorrectionEntry> = parse(CORRECTIONS, &read, &mut infos)?;
        let overrides: Vec<TokenizeOverride> = parse(FIX_TOKENIZE, &read, &mut infos)?;
        let misspelling: Vec<(String, String)> = parse(MISSPELLING, &read, &mut infos)?;
        let template_words: Vec<(String, String)> = parse(FIX_TEMPLATE_WORD, &read, &mut infos)?;
        let rephrasing: Vec<(String, Vec<String>)> = parse(REPHRASING, &read, &mut infos)?;
        let rephrasing_must: Vec<(String, String)> = parse(REPHRASING_MUST, &read, &mut infos)?;
        let units: Vec<UnitEntry> = parse(UNITS, &read, &mut infos)?;

        Ok(Self {
            corrections: Corrections::new(corrections),
            tokenize_overrides: TokenizeOverrides::new(overrides),
            misspelling: MisspellingFixer::new(misspelling),
            template_words: TemplateWordFix::new(template_words),
            rephraser: Rephraser::new(rephrasing, rephrasing_must, UnitTable::new(units)),
            infos,
        })
    }

    /// Name, digest and entry count of each table.
    pub fn infos(&self) -> &[TableInfo] {
        &self.infos
    }
}

/// Parses a table (a JSON array) and records its digest.
fn parse<T, F>(name: &str, read: &F, infos: &mut Vec<TableInfo>) -> Result<Vec<T>, Error>
where
    T: DeserializeOwned,
    F: Fn(&str) -> Result<String, Error>,
{
    let content = read(name)?;
    let entries: Vec<T> = serde_json::from_str(&content)?;

    infos.push(TableInfo {
        name: name.to_string(),
        sha256: format!("{:x}", Sha256::digest(content.as_bytes())),
        entries: entries.len(),
    });

    Ok(entries)
}
