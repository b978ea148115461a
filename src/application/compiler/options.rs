//! Compile Options
//!
//! Inputs of a compile session.

use std::path::{Path, PathBuf};

use crate::domain::entities::ThemeReference;
use crate::domain::value_objects::ModuleBlacklist;

/// Options for the theme compiler
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Theme file path or package name
    pub theme: ThemeReference,
    /// Conkie's own location: searched for theme packages and exposed as
    /// `paths.root` to templates
    pub root_dir: PathBuf,
    /// Sets `debugMode` in the template context
    pub debug: bool,
    /// Module names never resolved as packages
    pub blacklist: ModuleBlacklist,
    /// Directory for the transient document (system temp dir when `None`)
    pub transient_dir: Option<PathBuf>,
}

impl CompileOptions {
    pub fn new(theme: impl Into<String>) -> Self {
        Self {
            theme: ThemeReference::new(theme),
            root_dir: default_root_dir(),
            debug: false,
            blacklist: ModuleBlacklist::default(),
            transient_dir: None,
        }
    }

    pub fn with_root_dir(mut self, root_dir: impl Into<PathBuf>) -> Self {
        self.root_dir = absolutize(&root_dir.into());
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_blacklist(mut self, blacklist: ModuleBlacklist) -> Self {
        self.blacklist = blacklist;
        self
    }

    pub fn with_transient_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.transient_dir = Some(dir.into());
        self
    }
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self::new(ThemeReference::DEFAULT)
    }
}

/// Directory holding the running executable, falling back to the working
/// directory
pub fn default_root_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| absolutize(Path::new(".")))
}

/// Make `path` absolute against the working directory without touching the
/// file system
pub fn absolutize(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
