//! Local script scanning
//!
//! Reads every local script a theme references and collects the packages
//! their `require` calls name. The content is kept on the marker for the
//! splice phase.

use std::path::Path;
use std::thread;

use crate::domain::entities::{AssetMarker, MarkerKind, ModuleRequests};
use crate::domain::ports::FileSystem;
use crate::domain::services::scan_requires;
use crate::error::{ConkieError, ConkieResult};

use crate::domain::services::join;

/// Read a required file, naming what asked for it on failure
pub(crate) fn read_asset<FS: FileSystem>(
    fs: &FS,
    path: &Path,
    requested_by: &str,
) -> ConkieResult<String> {
    fs.read(path).map_err(|source| ConkieError::AssetRead {
        path: path.to_path_buf(),
        requested_by: requested_by.to_string(),
        source,
    })
}

/// Load local script content into `markers` and add their `require`d
/// packages to `requests`
pub(crate) fn scan_local_scripts<FS: FileSystem>(
    fs: &FS,
    base_dir: &Path,
    markers: &mut [AssetMarker],
    requests: &mut ModuleRequests,
) -> ConkieResult<()> {
    let loaded: Vec<ConkieResult<String>> = thread::scope(|scope| {
        let handles: Vec<_> = markers
            .iter()
            .filter(|m| m.kind() == MarkerKind::LocalJs)
            .map(|marker| {
                let path = base_dir.join(marker.file());
                scope.spawn(move || read_asset(fs, &path, MarkerKind::LocalJs.preload_name()))
            })
            .collect();
        handles.into_iter().map(join).collect()
    });

    let locals = markers
        .iter_mut()
        .filter(|m| m.kind() == MarkerKind::LocalJs);
    for (marker, content) in locals.zip(loaded) {
        let content = content?;
        requests.extend(scan_requires(&content));
        marker.set_content(content);
    }
    Ok(())
}
