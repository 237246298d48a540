//! Transform trait.

/// Text-to-text rewriting.
pub trait Transform {
    /// Takes ownership of the text and returns the rewritten one.
    fn transform_own(&self, text: String) -> String;
}
