//! Pipelines.
//!
//! - [Clean] patches known-bad lines of the raw corpus files in place.
//! - [Align] aligns every split of a (cleaned) raw corpus and writes JSON lines.
//!
//! Both implement the light [pipeline::Pipeline] trait.
mod align;
mod clean;
#[allow(clippy::module_inception)]
pub mod pipeline;

pub use align::{Align, SplitSummary};
pub use clean::{Clean, CleanSummary};
pub use pipeline::Pipeline;
