/*! Corpus reading utilities

[corpus] discovers the XML files of each split, [xml] turns them into [crate::alignment::DocumentRecord]s.
!*/
pub mod corpus;
pub mod xml;

pub use corpus::{Corpus, Split};
pub use xml::{parse_str, read_file};
