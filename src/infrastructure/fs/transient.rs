//! Transient output file for the compiled document
//!
//! One path is allocated per session and reused for every recompile so the
//! host's reference to "the compiled document" stays valid across reloads.
//! The file is removed when the session is dropped.

use std::io;
use std::path::Path;

use tempfile::TempPath;

const PREFIX: &str = "conkie-";
const SUFFIX: &str = ".html";

#[derive(Debug)]
pub struct TransientDocument {
    path: TempPath,
}

impl TransientDocument {
    /// Allocate a fresh `conkie-*.html` path in the system temp directory
    pub fn allocate() -> io::Result<Self> {
        Self::allocate_in(&std::env::temp_dir())
    }

    /// Allocate a fresh `conkie-*.html` path in `dir`
    pub fn allocate_in(dir: &Path) -> io::Result<Self> {
        let file = tempfile::Builder::new()
            .prefix(PREFIX)
            .suffix(SUFFIX)
            .tempfile_in(dir)?;
        Ok(Self {
            path: file.into_temp_path(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
