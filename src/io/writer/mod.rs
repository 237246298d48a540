/*!
# Record writing

Aligned sentences are written as JSON lines, one file per split.
!*/
mod writer_jsonl;
mod writertrait;

pub use writer_jsonl::WriterJsonl;
pub use writertrait::WriterTrait;
