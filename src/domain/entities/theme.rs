//! Theme entities - what the user asked for and where it was found

use std::fmt;
use std::path::{Path, PathBuf};

use super::InstalledPackage;

/// Raw theme reference as supplied on the command line or in config
///
/// Either a file system path to an HTML entry file or the name of an
/// installed theme package. Which one it is only becomes known once the
/// theme locator has probed both.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ThemeReference(String);

impl ThemeReference {
    /// Theme used when none is configured
    pub const DEFAULT: &'static str = "conkie-theme-default";

    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The reference interpreted as a path
    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }
}

impl Default for ThemeReference {
    fn default() -> Self {
        Self::new(Self::DEFAULT)
    }
}

impl fmt::Display for ThemeReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How a theme reference was resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeSource {
    /// The reference named an existing file
    File,
    /// The reference named an installed package
    Package { name: String },
}

/// A theme reference resolved to an entry file
///
/// `base_dir` is the directory every local asset reference is resolved
/// against. Immutable for the lifetime of a compile pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTheme {
    entry_file: PathBuf,
    base_dir: PathBuf,
    source: ThemeSource,
}

impl ResolvedTheme {
    /// Theme given directly as an HTML file
    pub fn from_file(entry_file: impl Into<PathBuf>) -> Self {
        let entry_file = entry_file.into();
        let base_dir = parent_dir(&entry_file);
        Self {
            entry_file,
            base_dir,
            source: ThemeSource::File,
        }
    }

    /// Theme given as a package; the entry is the manifest's `main`
    pub fn from_package(package: &InstalledPackage) -> Self {
        let entry_file = package.entry_file();
        let base_dir = parent_dir(&entry_file);
        Self {
            entry_file,
            base_dir,
            source: ThemeSource::Package {
                name: package.name().to_string(),
            },
        }
    }

    pub fn entry_file(&self) -> &Path {
        &self.entry_file
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn source(&self) -> &ThemeSource {
        &self.source
    }

    /// Package name when the theme came from an installed package
    pub fn package_name(&self) -> Option<&str> {
        match &self.source {
            ThemeSource::Package { name } => Some(name),
            ThemeSource::File => None,
        }
    }
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
