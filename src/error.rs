//! Error enum
use std::fmt;

/// Errors that stop an operation.
///
/// Corpus defects (empty triple groups, length mismatches, coreference problems)
/// are *not* errors: they are reported as [crate::alignment::Event]s and counted.
#[derive(Debug)]
#[allow(dead_code)]
pub enum Error {
    Io(std::io::Error),
    Serde(serde_json::Error),
    Xml(quick_xml::DeError),
    Glob(glob::GlobError),
    GlobPattern(glob::PatternError),
    /// A parenthesized unit that is not in the unit table.
    UnknownUnit(String),
    /// The coreference collapsing precondition does not hold for a document.
    Integrity(String),
    UnknownSplit(String),
    Custom(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {e}"),
            Error::Serde(e) => write!(f, "json error: {e}"),
            Error::Xml(e) => write!(f, "xml error: {e}"),
            Error::Glob(e) => write!(f, "glob error: {e}"),
            Error::GlobPattern(e) => write!(f, "glob pattern error: {e}"),
            Error::UnknownUnit(unit) => write!(f, "{unit} is unknown"),
            Error::Integrity(msg) => write!(f, "integrity violation: {msg}"),
            Error::UnknownSplit(split) => write!(f, "unknown data split: {split}"),
            Error::Custom(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}

impl From<quick_xml::DeError> for Error {
    fn from(e: quick_xml::DeError) -> Error {
        Error::Xml(e)
    }
}

impl From<glob::GlobError> for Error {
    fn from(e: glob::GlobError) -> Error {
        Error::Glob(e)
    }
}

impl From<glob::PatternError> for Error {
    fn from(e: glob::PatternError) -> Error {
        Error::GlobPattern(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}
