//! Package locator port
//!
//! Finds installed packages by name. Used twice per compile pass: once to
//! find a theme package, once (batched) to find every referenced module.

use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::domain::entities::InstalledPackage;
use crate::error::ConkieResult;

/// Which package names a query accepts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameFilter {
    Exact(String),
    AnyOf(BTreeSet<String>),
}

impl NameFilter {
    pub fn matches(&self, name: &str) -> bool {
        match self {
            NameFilter::Exact(expected) => expected == name,
            NameFilter::AnyOf(names) => names.contains(name),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            NameFilter::Exact(name) => name.is_empty(),
            NameFilter::AnyOf(names) => names.is_empty(),
        }
    }
}

/// A package search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageQuery {
    pub filter: NameFilter,
    /// Directories whose local package trees are searched, in precedence order
    pub search_from: Vec<PathBuf>,
    /// Search package trees local to `search_from`
    pub local: bool,
    /// Search globally installed packages (after local ones)
    pub global: bool,
}

impl PackageQuery {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            filter: NameFilter::Exact(name.into()),
            search_from: Vec::new(),
            local: true,
            global: true,
        }
    }

    pub fn any_of<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            filter: NameFilter::AnyOf(names.into_iter().map(Into::into).collect()),
            search_from: Vec::new(),
            local: true,
            global: true,
        }
    }

    /// Add a directory to search from; earlier directories take precedence
    pub fn search_from(mut self, dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        if !self.search_from.contains(&dir) {
            self.search_from.push(dir);
        }
        self
    }
}

/// Abstract package locator
///
/// Results are ordered by precedence (local before global, nearer before
/// farther). A name may appear more than once; callers take the first.
pub trait PackageLocator: Send + Sync {
    fn find(&self, query: &PackageQuery) -> ConkieResult<Vec<InstalledPackage>>;
}

impl<T: PackageLocator + ?Sized> PackageLocator for &T {
    fn find(&self, query: &PackageQuery) -> ConkieResult<Vec<InstalledPackage>> {
        (**self).find(query)
    }
}
