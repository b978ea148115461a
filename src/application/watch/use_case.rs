//! Watch Use Case implementation

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::channel;
use std::sync::Arc;
use std::time::Instant;

use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

use crate::application::compiler::{CompileSession, ThemeCompiler};
use crate::domain::entities::CompiledDocument;
use crate::domain::ports::{FileSystem, PackageLocator};
use crate::domain::value_objects::ContentHash;
use crate::error::{ConkieError, ConkieResult};

use super::event::{WatchEvent, WatchOptions, WatcherState};

/// Decides whether a reported path is a real edit
///
/// Editors often rewrite files without changing them; those events are
/// dropped by comparing content hashes. The transient document is never a
/// change, even when it lives inside the watched tree.
#[derive(Debug, Default)]
pub struct ChangeFilter {
    hashes: HashMap<PathBuf, ContentHash>,
    ignored: Vec<PathBuf>,
}

impl ChangeFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ignore(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        if !self.ignored.contains(&path) {
            self.ignored.push(path);
        }
    }

    /// Record the current content of `path`; `true` if it differs from
    /// what was last seen
    pub fn observe(&mut self, path: &Path) -> bool {
        if self.ignored.iter().any(|ignored| ignored == path) {
            return false;
        }

        match std::fs::read(path) {
            Ok(bytes) => {
                let hash = ContentHash::from_bytes(&bytes);
                match self.hashes.get(path) {
                    Some(old) if *old == hash => false,
                    _ => {
                        self.hashes.insert(path.to_path_buf(), hash);
                        true
                    }
                }
            }
            // Removed files matter once we have seen them; directories never do
            Err(_) => self.hashes.remove(path).is_some(),
        }
    }

    /// Record every file under `dir` without reporting changes
    ///
    /// Skips `node_modules` and hidden directories.
    pub fn seed(&mut self, dir: &Path) {
        let Ok(entries) = std::fs::read_dir(dir) else {
            return;
        };
        for entry in entries.flatten() {
            let path = entry.path();
            let hidden = entry.file_name().to_string_lossy().starts_with('.');
            match entry.file_type() {
                Ok(kind) if kind.is_dir() => {
                    if !hidden && entry.file_name() != "node_modules" {
                        self.seed(&path);
                    }
                }
                Ok(kind) if kind.is_file() => {
                    self.observe(&path);
                }
                _ => {}
            }
        }
    }

    /// Number of files whose content is being tracked
    pub fn tracked(&self) -> usize {
        self.hashes.len()
    }
}

/// Watch Use Case
///
/// Recompiles the theme whenever its directory changes. Passes never
/// overlap: changes that arrive while a pass is running are collected and
/// handled by the next one.
pub struct WatchUseCase<FS, PL>
where
    FS: FileSystem,
    PL: PackageLocator,
{
    compiler: ThemeCompiler<FS, PL>,
    session: CompileSession,
    options: WatchOptions,
}

impl<FS, PL> WatchUseCase<FS, PL>
where
    FS: FileSystem,
    PL: PackageLocator,
{
    pub fn new(compiler: ThemeCompiler<FS, PL>, session: CompileSession) -> Self {
        Self {
            compiler,
            session,
            options: WatchOptions::default(),
        }
    }

    pub fn with_options(mut self, options: WatchOptions) -> Self {
        self.options = options;
        self
    }

    pub fn session(&self) -> &CompileSession {
        &self.session
    }

    pub fn compiler(&self) -> &ThemeCompiler<FS, PL> {
        &self.compiler
    }

    /// Run one pass, reporting it as watch events
    pub fn recompile<F>(&self, on_event: &F) -> Option<CompiledDocument>
    where
        F: Fn(WatchEvent),
    {
        on_event(WatchEvent::CompileStarted);
        match self.compiler.compile(&self.session) {
            Ok(document) => {
                on_event(WatchEvent::Compiled {
                    path: document.path().display().to_string(),
                });
                Some(document)
            }
            Err(e) => {
                on_event(WatchEvent::Error {
                    message: e.to_string(),
                });
                None
            }
        }
    }

    /// Start watching (blocking)
    ///
    /// Compiles once, then recompiles after every debounced burst of changes
    /// until `running` is cleared. Fails only if the theme cannot be located
    /// or the watcher cannot be started; failed passes are reported as
    /// [`WatchEvent::Error`] and watching continues.
    pub fn start<F>(&self, running: Arc<AtomicBool>, on_event: F) -> ConkieResult<()>
    where
        F: Fn(WatchEvent),
    {
        let theme = self.compiler.locate(&self.session)?;
        let watch_dir = theme
            .base_dir()
            .canonicalize()
            .unwrap_or_else(|_| theme.base_dir().to_path_buf());

        on_event(WatchEvent::WatchStarted {
            theme: theme.entry_file().display().to_string(),
            watching: watch_dir.display().to_string(),
        });

        self.recompile(&on_event);

        let (tx, rx) = channel();
        let mut watcher = RecommendedWatcher::new(
            move |res: Result<Event, notify::Error>| {
                if let Ok(event) = res {
                    if matches!(event.kind, EventKind::Access(_)) {
                        return;
                    }
                    for path in event.paths {
                        let _ = tx.send(path);
                    }
                }
            },
            Config::default(),
        )
        .map_err(|e| ConkieError::Watch(e.to_string()))?;

        watcher
            .watch(&watch_dir, RecursiveMode::Recursive)
            .map_err(|e| ConkieError::Watch(e.to_string()))?;

        let mut filter = ChangeFilter::new();
        filter.seed(&watch_dir);
        let mut state = WatcherState::with_debounce(self.options.debounce);

        // notify may report pre-existing files right after registration
        let cooldown_end = Instant::now() + self.options.startup_cooldown;
        while Instant::now() < cooldown_end {
            if let Ok(path) = rx.recv_timeout(self.options.poll) {
                filter.observe(&path);
            }
        }

        while running.load(Ordering::SeqCst) {
            if let Ok(path) = rx.recv_timeout(self.options.poll) {
                if let Some(transient) = self.session.transient_path() {
                    filter.ignore(transient.canonicalize().unwrap_or(transient));
                }
                let path = path.canonicalize().unwrap_or(path);
                if filter.observe(&path) {
                    state.add_change(path);
                }
            }

            if state.should_compile() {
                for path in state.take_changes() {
                    on_event(WatchEvent::FileChanged {
                        path: path.display().to_string(),
                    });
                }
                self.recompile(&on_event);
            }
        }

        on_event(WatchEvent::Shutdown);
        Ok(())
    }
}
