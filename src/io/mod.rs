/*!
# IO utilities

Corpus reading ([reader]) and aligned record writing ([writer]).
!*/
pub mod reader;
pub mod writer;
