//! Theme location
//!
//! A theme reference is probed as a file path and searched for as a package
//! at the same time. A regular file wins; otherwise the first package found
//! supplies its `main` entry.

use std::path::Path;
use std::thread;

use crate::domain::entities::{ResolvedTheme, ThemeReference};
use crate::domain::ports::{FileKind, FileSystem, PackageLocator, PackageQuery};
use crate::error::{ConkieError, ConkieResult};

use crate::domain::services::join;
use super::options::absolutize;

pub(crate) fn locate_theme<FS, PL>(
    fs: &FS,
    locator: &PL,
    reference: &ThemeReference,
    root_dir: &Path,
) -> ConkieResult<ResolvedTheme>
where
    FS: FileSystem,
    PL: PackageLocator,
{
    let query = PackageQuery::named(reference.as_str()).search_from(root_dir);

    let (stat, packages) = thread::scope(|scope| {
        // Not-found and permission errors both mean "not a path"
        let stat = scope.spawn(|| fs.stat(reference.as_path()).ok().flatten());
        let packages = scope.spawn(|| locator.find(&query));
        (join(stat), join(packages))
    });

    if stat == Some(FileKind::File) {
        return Ok(ResolvedTheme::from_file(absolutize(reference.as_path())));
    }

    match packages?.first() {
        Some(package) => Ok(ResolvedTheme::from_package(package)),
        None => Err(ConkieError::ThemeNotFound {
            reference: reference.to_string(),
        }),
    }
}
