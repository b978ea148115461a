//! Splice phase
//!
//! Three independent passes, one per marker kind, each producing the
//! splices for its own placeholders. They run concurrently and are joined
//! before the splices are applied to the markup in one go.

use std::thread;

use crate::domain::entities::{AssetMarker, MarkerKind, ResolvedModules};
use crate::domain::ports::{CompileEvent, CompileEventSink, FileSystem};
use crate::domain::services::{apply_splices, rewrite_requires, Splice};
use crate::domain::value_objects::ModuleBlacklist;
use crate::error::{ConkieError, ConkieResult};

use crate::domain::services::join;
use super::scan::read_asset;

pub(crate) struct SpliceInput<'a> {
    pub markup: &'a str,
    pub markers: &'a [AssetMarker],
    pub modules: &'a ResolvedModules,
    pub blacklist: &'a ModuleBlacklist,
}

pub(crate) fn splice_assets<FS: FileSystem>(
    fs: &FS,
    events: &dyn CompileEventSink,
    input: &SpliceInput<'_>,
) -> ConkieResult<String> {
    let passes: Vec<ConkieResult<Vec<Splice>>> = thread::scope(|scope| {
        let css = scope.spawn(|| package_pass(fs, events, input, MarkerKind::Css));
        let js = scope.spawn(|| package_pass(fs, events, input, MarkerKind::BundledJs));
        let local = scope.spawn(|| local_pass(events, input));
        vec![join(css), join(js), join(local)]
    });

    let mut splices = Vec::with_capacity(input.markers.len());
    for pass in passes {
        splices.extend(pass?);
    }
    Ok(apply_splices(input.markup, &splices))
}

/// Inline CSS or bundled JS shipped by packages
fn package_pass<FS: FileSystem>(
    fs: &FS,
    events: &dyn CompileEventSink,
    input: &SpliceInput<'_>,
    kind: MarkerKind,
) -> ConkieResult<Vec<Splice>> {
    let mut splices = Vec::new();
    for marker in input.markers.iter().filter(|m| m.kind() == kind) {
        let name = marker.module().unwrap_or_default();
        let module = input
            .modules
            .get(name)
            .ok_or_else(|| ConkieError::ModuleResolution {
                module: name.to_string(),
                requested_by: marker.requested_by(),
            })?;

        let path = module.asset_path(marker.file());
        events.on_event(CompileEvent::AssetRead {
            kind,
            path: path.clone(),
        });
        let content = read_asset(fs, &path, kind.preload_name())?;
        splices.push(Splice::new(marker, &content));
    }
    Ok(splices)
}

/// Inline local scripts with their `require` calls pointed at install dirs
fn local_pass(events: &dyn CompileEventSink, input: &SpliceInput<'_>) -> ConkieResult<Vec<Splice>> {
    let mut splices = Vec::new();
    for marker in input
        .markers
        .iter()
        .filter(|m| m.kind() == MarkerKind::LocalJs)
    {
        events.on_event(CompileEvent::LocalScriptRewritten {
            path: marker.file().into(),
        });
        let rewritten = rewrite_requires(
            marker.content().unwrap_or_default(),
            input.modules,
            input.blacklist,
            &marker.requested_by(),
        )?;
        splices.push(Splice::new(marker, &rewritten));
    }
    Ok(splices)
}
