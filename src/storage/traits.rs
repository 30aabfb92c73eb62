use std::path::PathBuf;

use crate::domain::NewsDocument;
use crate::errors::NewsResult;

#[cfg_attr(test, mockall::automock)]
pub trait ContentStore: Send + Sync {
    /// Make sure the destination exists before the first write
    fn prepare(&self) -> NewsResult<()>;
    /// Persist a document, replacing any file of the same name
    fn write(&self, document: &NewsDocument) -> NewsResult<PathBuf>;
}
