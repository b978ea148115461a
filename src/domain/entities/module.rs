//! Module entities - package names referenced by a theme and where they live

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use crate::domain::value_objects::ModuleBlacklist;

/// An installed package as reported by a package locator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledPackage {
    name: String,
    /// Entry file relative to `install_dir` (manifest `main`)
    main: String,
    install_dir: PathBuf,
}

impl InstalledPackage {
    /// Manifest entry used when `main` is missing
    pub const DEFAULT_MAIN: &'static str = "index.js";

    pub fn new(name: impl Into<String>, main: impl Into<String>, install_dir: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            main: main.into(),
            install_dir: install_dir.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn main(&self) -> &str {
        &self.main
    }

    pub fn install_dir(&self) -> &Path {
        &self.install_dir
    }

    /// Main entry resolved against the package directory
    pub fn entry_file(&self) -> PathBuf {
        self.install_dir.join(&self.main)
    }
}

/// A module reference resolved to its install directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedModule {
    name: String,
    install_dir: PathBuf,
}

impl ResolvedModule {
    pub fn new(name: impl Into<String>, install_dir: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            install_dir: install_dir.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn install_dir(&self) -> &Path {
        &self.install_dir
    }

    /// Path of a file shipped inside this module
    pub fn asset_path(&self, relative_file: &str) -> PathBuf {
        self.install_dir.join(relative_file)
    }
}

/// The set of modules found for one compile pass
///
/// Built from locator results in precedence order: the first package seen
/// for a name wins, so local installs shadow global ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedModules {
    by_name: BTreeMap<String, ResolvedModule>,
}

impl ResolvedModules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_packages<'a>(packages: impl IntoIterator<Item = &'a InstalledPackage>) -> Self {
        let mut modules = Self::new();
        for package in packages {
            modules.insert(ResolvedModule::new(package.name(), package.install_dir()));
        }
        modules
    }

    /// Add a module unless one with the same name is already present
    pub fn insert(&mut self, module: ResolvedModule) {
        self.by_name.entry(module.name.clone()).or_insert(module);
    }

    pub fn get(&self, name: &str) -> Option<&ResolvedModule> {
        self.by_name.get(name)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.by_name.keys().map(String::as_str)
    }
}

/// Accumulator of module names referenced during discovery and scanning
///
/// Keeps first-seen order and drops duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleRequests {
    names: Vec<String>,
    seen: BTreeSet<String>,
}

impl ModuleRequests {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>) {
        let name = name.into();
        if self.seen.insert(name.clone()) {
            self.names.push(name);
        }
    }

    pub fn extend<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            self.push(name);
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Names that must be looked up, with blacklisted names removed
    pub fn to_find(&self, blacklist: &ModuleBlacklist) -> Vec<String> {
        self.names
            .iter()
            .filter(|name| !blacklist.contains(name))
            .cloned()
            .collect()
    }
}
