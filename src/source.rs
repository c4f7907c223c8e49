// Document loading — the filesystem seam.
//
// The comparison pipeline never touches the filesystem directly; it goes
// through DocumentSource, so tests can substitute an in-memory source and a
// hosting process can plug in whatever storage it has.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Supplies raw document text for a path-like identifier.
pub trait DocumentSource {
    /// Return the full text of the document, or an error if it does not
    /// exist or cannot be read — the pipeline treats both the same way.
    fn load(&self, path: &Path) -> Result<String>;
}

/// Reads documents straight from the local filesystem.
#[derive(Debug, Default)]
pub struct FsDocumentSource;

impl DocumentSource for FsDocumentSource {
    fn load(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path)
            .with_context(|| format!("cannot read document: {}", path.display()))
    }
}
