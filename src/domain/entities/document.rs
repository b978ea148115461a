//! Compiled document entity

use std::path::{Path, PathBuf};

use super::ResolvedTheme;

/// Result of a successful compile pass
///
/// `path` is the transient file the host loads. It is stable across
/// recompiles within one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledDocument {
    path: PathBuf,
    theme: ResolvedTheme,
    marker_count: usize,
    module_count: usize,
}

impl CompiledDocument {
    pub fn new(path: PathBuf, theme: ResolvedTheme, marker_count: usize, module_count: usize) -> Self {
        Self {
            path,
            theme,
            marker_count,
            module_count,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn theme(&self) -> &ResolvedTheme {
        &self.theme
    }

    /// Number of asset references inlined
    pub fn marker_count(&self) -> usize {
        self.marker_count
    }

    /// Number of packages resolved
    pub fn module_count(&self) -> usize {
        self.module_count
    }

    /// `file://` URL suitable for a document-rendering host
    pub fn url(&self) -> String {
        format!("file://{}", self.path.display())
    }
}
