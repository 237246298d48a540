/*! Corpus layout

The raw corpus holds one directory per split (`train`, `dev`, `test`), each containing
XML files nested by triple count (`1triples/Astronaut.xml`, ...).
!*/
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::debug;

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Split {
    Train,
    Dev,
    Test,
}

impl Split {
    pub const ALL: [Split; 3] = [Split::Train, Split::Dev, Split::Test];

    /// Directory name in the raw corpus.
    pub fn as_str(&self) -> &'static str {
        match self {
            Split::Train => "train",
            Split::Dev => "dev",
            Split::Test => "test",
        }
    }

    /// Output file stem. `dev` is written as `valid`.
    pub fn output_name(&self) -> &'static str {
        match self {
            Split::Dev => "valid",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Split {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "train" => Ok(Split::Train),
            "dev" | "valid" => Ok(Split::Dev),
            "test" => Ok(Split::Test),
            other => Err(Error::UnknownSplit(other.to_string())),
        }
    }
}

/// Raw corpus rooted at a directory.
#[derive(Debug, Clone)]
pub struct Corpus {
    root: PathBuf,
}

impl Corpus {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Every XML file under `root`, sorted.
    pub fn all_files(&self) -> Result<Vec<PathBuf>, Error> {
        Self::xml_files(&self.root)
    }

    /// XML files of a split, sorted.
    pub fn files(&self, split: Split) -> Result<Vec<PathBuf>, Error> {
        Self::xml_files(&self.root.join(split.as_str()))
    }

    fn xml_files(dir: &Path) -> Result<Vec<PathBuf>, Error> {
        let pattern = dir.join("**").join("*.xml");
        let pattern = pattern
            .to_str()
            .ok_or_else(|| Error::Custom(format!("non UTF-8 path: {:?}", dir)))?;

        let mut files = glob::glob(pattern)?.collect::<Result<Vec<_>, _>>()?;
        files.sort();
        debug!("{} xml files in {:?}", files.len(), dir);

        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn splits() {
        assert_eq!("dev".parse::<Split>().unwrap(), Split::Dev);
        assert_eq!(Split::Dev.output_name(), "valid");
        assert_eq!(Split::Train.output_name(), "train");
        assert!(matches!(
            "validation".parse::<Split>(),
            Err(Error::UnknownSplit(_))
        ));
    }

    #[test]
    fn discover_files() {
        let dir = tempfile::tempdir().unwrap();
        let train = dir.path().join("train");
        fs::create_dir_all(train.join("2triples")).unwrap();
        fs::create_dir_all(train.join("1triples")).unwrap();
        fs::write(train.join("2triples").join("Astronaut.xml"), "").unwrap();
        fs::write(train.join("1triples").join("Building.xml"), "").unwrap();
        fs::write(train.join("1triples").join("Airport.xml"), "").unwrap();
        fs::write(train.join("1triples").join("notes.txt"), "").unwrap();

        let corpus = Corpus::new(dir.path());
        let files = corpus.files(Split::Train).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|f| f.strip_prefix(&train).unwrap().to_path_buf())
            .collect();
        assert_eq!(
            names,
            vec![
                PathBuf::from("1triples/Airport.xml"),
                PathBuf::from("1triples/Building.xml"),
                PathBuf::from("2triples/Astronaut.xml"),
            ]
        );

        assert!(corpus.files(Split::Test).unwrap().is_empty());
        assert_eq!(corpus.all_files().unwrap().len(), 3);
    }
}
