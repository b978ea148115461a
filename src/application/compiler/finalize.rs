//! Document finalizer
//!
//! Runs the template pass over the spliced markup and writes the result to
//! the session's transient document.

use std::path::PathBuf;

use crate::domain::entities::ResolvedTheme;
use crate::domain::ports::{CompileEvent, CompileEventSink, FileSystem};
use crate::domain::services::{render, render_context};
use crate::error::{ConkieError, ConkieResult};

use super::session::CompileSession;

pub(crate) fn finalize_document<FS: FileSystem>(
    fs: &FS,
    events: &dyn CompileEventSink,
    session: &CompileSession,
    theme: &ResolvedTheme,
    markup: &str,
) -> ConkieResult<PathBuf> {
    let options = session.options();
    let context = render_context(&options.root_dir, theme.base_dir(), options.debug);
    let document = render(markup, &context);

    let (path, allocated) = session.transient_or_allocate().map_err(|source| {
        ConkieError::Write {
            path: options
                .transient_dir
                .clone()
                .unwrap_or_else(std::env::temp_dir),
            source,
        }
    })?;
    if allocated {
        events.on_event(CompileEvent::TransientAllocated { path: path.clone() });
    }

    fs.write(&path, &document)
        .map_err(|source| ConkieError::Write {
            path: path.clone(),
            source,
        })?;
    Ok(path)
}
