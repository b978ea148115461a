//! `node_modules` package locator
//!
//! Themes and their assets are distributed as npm packages. A package named
//! `acme-css` installed under a root lives at `<root>/acme-css` and carries a
//! `package.json` whose `name` matches.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::entities::InstalledPackage;
use crate::domain::ports::{NameFilter, PackageLocator, PackageQuery};
use crate::error::{ConkieError, ConkieResult};
use crate::infrastructure::fs::conkie_home_dir;

const NODE_MODULES: &str = "node_modules";
const MANIFEST: &str = "package.json";

#[derive(Debug, Deserialize)]
struct PackageManifest {
    name: Option<String>,
    main: Option<String>,
}

/// Locates packages in local `node_modules` trees and global install roots
#[derive(Debug, Clone)]
pub struct NodeModulesLocator {
    global_roots: Vec<PathBuf>,
}

impl Default for NodeModulesLocator {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeModulesLocator {
    /// Locator using the platform's usual global install roots
    pub fn new() -> Self {
        Self {
            global_roots: default_global_roots(),
        }
    }

    /// Locator that never searches global roots
    pub fn local_only() -> Self {
        Self {
            global_roots: Vec::new(),
        }
    }

    /// Append global roots, searched after the existing ones
    pub fn with_global_roots<I>(mut self, roots: I) -> Self
    where
        I: IntoIterator<Item = PathBuf>,
    {
        for root in roots {
            if !self.global_roots.contains(&root) {
                self.global_roots.push(root);
            }
        }
        self
    }

    pub fn global_roots(&self) -> &[PathBuf] {
        &self.global_roots
    }

    /// Every root a query searches, in precedence order
    pub fn roots(&self, query: &PackageQuery) -> Vec<PathBuf> {
        let mut roots: Vec<PathBuf> = Vec::new();
        let mut add = |root: PathBuf| {
            if !roots.contains(&root) {
                roots.push(root);
            }
        };

        if query.local {
            for start in &query.search_from {
                for dir in start.ancestors() {
                    if dir.file_name().is_some_and(|n| n == NODE_MODULES) {
                        add(dir.to_path_buf());
                    } else {
                        add(dir.join(NODE_MODULES));
                    }
                }
            }
        }

        if query.global {
            for root in &self.global_roots {
                add(root.clone());
            }
        }

        roots.retain(|root| root.is_dir());
        roots
    }
}

impl PackageLocator for NodeModulesLocator {
    fn find(&self, query: &PackageQuery) -> ConkieResult<Vec<InstalledPackage>> {
        let names: Vec<&str> = match &query.filter {
            NameFilter::Exact(name) => vec![name.as_str()],
            NameFilter::AnyOf(names) => names.iter().map(String::as_str).collect(),
        };

        let mut found = Vec::new();
        for root in self.roots(query) {
            for name in &names {
                if let Some(package) = read_package(&root.join(name), name)? {
                    found.push(package);
                }
            }
        }
        Ok(found)
    }
}

/// Read the package installed at `dir`, if it is the package `name`
///
/// Missing directories or manifests are not errors; a manifest that is not
/// valid JSON is.
pub fn read_package(dir: &Path, name: &str) -> ConkieResult<Option<InstalledPackage>> {
    let manifest_path = dir.join(MANIFEST);
    let content = match std::fs::read_to_string(&manifest_path) {
        Ok(content) => content,
        Err(_) => return Ok(None),
    };

    let manifest: PackageManifest =
        serde_json::from_str(&content).map_err(|e| ConkieError::InvalidManifest {
            path: manifest_path.clone(),
            message: e.to_string(),
        })?;

    if manifest.name.as_deref().is_some_and(|n| n != name) {
        return Ok(None);
    }

    let main = manifest
        .main
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| InstalledPackage::DEFAULT_MAIN.to_string());

    Ok(Some(InstalledPackage::new(name, main, dir)))
}

/// Global npm install roots for this platform
pub fn default_global_roots() -> Vec<PathBuf> {
    let mut roots = Vec::new();

    if let Ok(prefix) = std::env::var("NPM_CONFIG_PREFIX") {
        let prefix = PathBuf::from(prefix);
        roots.push(prefix.join("lib").join(NODE_MODULES));
        roots.push(prefix.join(NODE_MODULES));
    }
    if let Some(home) = conkie_home_dir() {
        roots.push(home.join(".npm-global").join("lib").join(NODE_MODULES));
    }
    roots.push(PathBuf::from("/usr/local/lib").join(NODE_MODULES));
    roots.push(PathBuf::from("/usr/lib").join(NODE_MODULES));

    roots
}
