use std::path::Path;

use crate::error::Error;

/// Writers of aligned records.
pub trait WriterTrait {
    type Item;

    /// Creates a writer for file `name` in `dst`.
    fn new(dst: &Path, name: &str) -> Result<Self, Error>
    where
        Self: Sized;
    fn write(&mut self, vals: Vec<Self::Item>) -> Result<(), Error>;
    fn write_single(&mut self, val: &Self::Item) -> Result<(), Error>;
    /// Flushes pending content.
    fn close(&mut self) -> Result<(), Error>;
}
