//! Theme Compiler Use Case
//!
//! Orchestrates one compile pass:
//! 1. Locate the theme (file path or package)
//! 2. Read the entry markup
//! 3. Discover asset references and replace them with placeholders
//! 4. Read local scripts and collect their `require`d packages
//! 5. Resolve every requested package in one lookup
//! 6. Splice the asset contents in after their placeholders
//! 7. Render the template and write the transient document
//!
//! Each phase finishes before the next starts. The first fatal error ends
//! the pass; nothing from a failed pass is kept.

use std::sync::Arc;

use crate::domain::entities::{CompiledDocument, ResolvedTheme};
use crate::domain::ports::{
    CompileEvent, CompileEventSink, FileSystem, NoopEventSink, PackageLocator,
};
use crate::domain::services::AssetDiscoverer;
use crate::domain::value_objects::CompilePhase;
use crate::error::ConkieResult;

use super::finalize::finalize_document;
use super::locate::locate_theme;
use super::resolve::resolve_modules;
use super::scan::{read_asset, scan_local_scripts};
use super::session::CompileSession;
use super::splice::{splice_assets, SpliceInput};

const ENTRY_REQUESTER: &str = "theme entry";

/// Theme compiler - runs compile passes for a session
pub struct ThemeCompiler<FS, PL>
where
    FS: FileSystem,
    PL: PackageLocator,
{
    file_system: FS,
    locator: PL,
    discoverer: AssetDiscoverer,
    events: Arc<dyn CompileEventSink>,
}

impl<FS, PL> ThemeCompiler<FS, PL>
where
    FS: FileSystem,
    PL: PackageLocator,
{
    pub fn new(file_system: FS, locator: PL) -> Self {
        Self {
            file_system,
            locator,
            discoverer: AssetDiscoverer::default(),
            events: Arc::new(NoopEventSink),
        }
    }

    /// Report progress to `events`
    pub fn with_events(mut self, events: Arc<dyn CompileEventSink>) -> Self {
        self.events = events;
        self
    }

    /// Replace the asset reference shapes recognised during discovery
    pub fn with_discoverer(mut self, discoverer: AssetDiscoverer) -> Self {
        self.discoverer = discoverer;
        self
    }

    pub fn file_system(&self) -> &FS {
        &self.file_system
    }

    pub fn locator(&self) -> &PL {
        &self.locator
    }

    /// Run one full pass
    ///
    /// Waits for any pass already running on `session` to finish first.
    pub fn compile(&self, session: &CompileSession) -> ConkieResult<CompiledDocument> {
        let _flight = session.begin();

        match self.run_pass(session) {
            Ok(document) => {
                self.enter(session, CompilePhase::Ready);
                self.events.on_event(CompileEvent::Compiled {
                    path: document.path().to_path_buf(),
                    markers: document.marker_count(),
                    modules: document.module_count(),
                });
                Ok(document)
            }
            Err(err) => {
                self.enter(session, CompilePhase::Failed);
                self.events.on_event(CompileEvent::Failed {
                    message: err.to_string(),
                });
                Err(err)
            }
        }
    }

    /// Resolve the theme without compiling it
    pub fn locate(&self, session: &CompileSession) -> ConkieResult<ResolvedTheme> {
        let options = session.options();
        locate_theme(
            &self.file_system,
            &self.locator,
            &options.theme,
            &options.root_dir,
        )
    }

    fn run_pass(&self, session: &CompileSession) -> ConkieResult<CompiledDocument> {
        let options = session.options();
        let fs = &self.file_system;

        self.enter(session, CompilePhase::LocatingTheme);
        let theme = self.locate(session)?;
        self.events.on_event(CompileEvent::ThemeResolved {
            entry: theme.entry_file().to_path_buf(),
            package: theme.package_name().map(str::to_string),
        });

        self.enter(session, CompilePhase::ReadingEntry);
        let content = read_asset(fs, theme.entry_file(), ENTRY_REQUESTER)?;

        self.enter(session, CompilePhase::Discovering);
        let mut discovery = self.discoverer.discover(&content);

        self.enter(session, CompilePhase::ScanningLocal);
        scan_local_scripts(
            fs,
            theme.base_dir(),
            &mut discovery.markers,
            &mut discovery.module_requests,
        )?;

        self.enter(session, CompilePhase::ResolvingModules);
        let names = discovery.module_requests.to_find(&options.blacklist);
        self.events.on_event(CompileEvent::ModulesRequested {
            names: names.clone(),
        });
        let modules = resolve_modules(&self.locator, &names, theme.base_dir(), &options.root_dir)?;

        self.enter(session, CompilePhase::Splicing);
        let markup = splice_assets(
            fs,
            self.events.as_ref(),
            &SpliceInput {
                markup: &discovery.markup,
                markers: &discovery.markers,
                modules: &modules,
                blacklist: &options.blacklist,
            },
        )?;

        self.enter(session, CompilePhase::Finalizing);
        let path = finalize_document(fs, self.events.as_ref(), session, &theme, &markup)?;

        Ok(CompiledDocument::new(
            path,
            theme,
            discovery.markers.len(),
            modules.len(),
        ))
    }

    fn enter(&self, session: &CompileSession, phase: CompilePhase) {
        session.set_phase(phase);
        self.events.on_event(CompileEvent::PhaseChanged { phase });
    }
}
