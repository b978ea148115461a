//! Module blacklist value object
//!
//! Names the host runtime injects into theme scripts itself. These are never
//! looked up as installed packages and `require` calls naming them are left
//! untouched when local scripts are rewritten.
//!
//! Node core modules are a separate, narrower rule: they only keep local
//! `require` calls verbatim. A theme may still inline assets from an npm
//! package that shares a core name (`events`, `buffer`, `util`).

use std::collections::BTreeSet;

/// Provided by the browser shell or already bundled with the application
const HOST_GLOBALS: &[&str] = &["electron", "lodash"];

/// Node core modules, available to theme scripts without installation
const NODE_CORE: &[&str] = &[
    "assert",
    "buffer",
    "child_process",
    "cluster",
    "crypto",
    "dgram",
    "dns",
    "events",
    "fs",
    "http",
    "https",
    "net",
    "os",
    "path",
    "process",
    "querystring",
    "readline",
    "stream",
    "string_decoder",
    "timers",
    "tls",
    "tty",
    "url",
    "util",
    "vm",
    "zlib",
];

/// Package part of a specifier: `@scope/name` or the first path segment
///
/// `fs/promises` names `fs`, `@acme/widgets/dist/x` names `@acme/widgets`.
pub fn package_name(specifier: &str) -> &str {
    let mut slashes = specifier.match_indices('/').map(|(at, _)| at);
    let end = if specifier.starts_with('@') {
        slashes.nth(1)
    } else {
        slashes.next()
    };
    &specifier[..end.unwrap_or(specifier.len())]
}

/// Node core module specifiers, including `node:` and subpath forms
pub fn is_core_module(specifier: &str) -> bool {
    specifier.starts_with("node:") || NODE_CORE.contains(&package_name(specifier))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleBlacklist {
    names: BTreeSet<String>,
}

impl ModuleBlacklist {
    /// Built-in names plus user-configured extras
    pub fn with_extra<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut blacklist = Self::default();
        blacklist.names.extend(extra.into_iter().map(Into::into));
        blacklist
    }

    /// Whether the package named by `specifier` is provided by the host
    pub fn contains(&self, specifier: &str) -> bool {
        self.names.contains(package_name(specifier))
    }

    /// Whether a `require` call naming `specifier` stays as written
    pub fn provides(&self, specifier: &str) -> bool {
        is_core_module(specifier) || self.contains(specifier)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl Default for ModuleBlacklist {
    fn default() -> Self {
        Self {
            names: HOST_GLOBALS
                .iter()
                .map(|name| name.to_string())
                .collect(),
        }
    }
}
