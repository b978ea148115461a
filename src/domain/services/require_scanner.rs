//! `require` scanning and rewriting for local theme scripts
//!
//! Local scripts are inlined into a document that lives in a temporary
//! directory, so bare package names in `require` calls would no longer
//! resolve. They are rewritten to the absolute install directory of the
//! package instead. Blacklisted names and Node core modules are provided by
//! the host and stay as they are. Subpath specifiers (`moment/locale/fr`)
//! resolve through their package.

use crate::domain::entities::ResolvedModules;
use crate::domain::value_objects::{is_core_module, package_name, ModuleBlacklist};
use crate::error::{ConkieError, ConkieResult};

use super::matcher::require_calls;

/// Whether a specifier names a package rather than a file
///
/// `./x`, `../x` and `/x` are paths and are never treated as module references.
pub fn is_package_specifier(name: &str) -> bool {
    !(name.starts_with('.') || name.starts_with('/') || name.starts_with('\\'))
}

/// Package names referenced by `require` calls in `content`, in order
///
/// Core modules are skipped; the host always provides them.
pub fn scan_requires(content: &str) -> Vec<String> {
    require_calls(content)
        .into_iter()
        .filter(|call| is_package_specifier(call.name) && !is_core_module(call.name))
        .map(|call| package_name(call.name).to_string())
        .collect()
}

/// Rewrite package `require` calls to absolute install directories
///
/// Host-provided names and path specifiers are copied through byte for byte.
/// A package name missing from `modules` is fatal.
pub fn rewrite_requires(
    content: &str,
    modules: &ResolvedModules,
    blacklist: &ModuleBlacklist,
    requested_by: &str,
) -> ConkieResult<String> {
    let mut output = String::with_capacity(content.len());
    let mut cursor = 0;

    for call in require_calls(content) {
        if !is_package_specifier(call.name) || blacklist.provides(call.name) {
            continue;
        }

        let package = package_name(call.name);
        let module = modules
            .get(package)
            .ok_or_else(|| ConkieError::ModuleResolution {
                module: package.to_string(),
                requested_by: requested_by.to_string(),
            })?;

        let target = format!("{}{}", module.install_dir().display(), &call.name[package.len()..]);
        let escaped = target.replace('\\', "\\\\");

        output.push_str(&content[cursor..call.span.start]);
        output.push_str("require(");
        output.push(call.quote);
        output.push_str(&escaped);
        output.push(call.quote);
        output.push(')');
        cursor = call.span.end;
    }

    output.push_str(&content[cursor..]);
    Ok(output)
}
