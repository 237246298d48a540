/*! Text transformers.

Rewrites raw corpus text before alignment: known misspellings, template-specific word artifacts,
and hand-annotated line corrections applied to the raw corpus files.

!*/

mod corrections;
mod misspelling;
mod template_words;
mod transform;

pub use corrections::{CleanStats, CorrectionEntry, Corrections};
pub use misspelling::{MisspellingFixer, SPLITABLES};
pub use template_words::TemplateWordFix;
pub use transform::Transform;
