//! Module resolution
//!
//! One batched lookup for every requested module. Names that are not found
//! are not errors here; the splice phase fails only if it needs them.

use std::path::Path;

use crate::domain::entities::ResolvedModules;
use crate::domain::ports::{PackageLocator, PackageQuery};
use crate::error::ConkieResult;

/// Resolve `names`, preferring the theme's own package tree over Conkie's
pub(crate) fn resolve_modules<PL: PackageLocator>(
    locator: &PL,
    names: &[String],
    theme_dir: &Path,
    root_dir: &Path,
) -> ConkieResult<ResolvedModules> {
    if names.is_empty() {
        return Ok(ResolvedModules::new());
    }

    let query = PackageQuery::any_of(names.iter().cloned())
        .search_from(theme_dir)
        .search_from(root_dir);
    let packages = locator.find(&query)?;

    Ok(ResolvedModules::from_packages(&packages))
}
