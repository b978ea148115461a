//! Compile Event Port
//!
//! Provides an observable interface for compile passes.
//! Enables verbose console logging, JSON event streams, and testing.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::domain::entities::MarkerKind;
use crate::domain::value_objects::CompilePhase;

/// Event emitted during a compile pass
#[derive(Debug, Clone, PartialEq)]
pub enum CompileEvent {
    /// Pipeline moved to a new phase
    PhaseChanged { phase: CompilePhase },

    /// Theme reference resolved to an entry file
    ThemeResolved {
        entry: PathBuf,
        package: Option<String>,
    },

    /// Module names that will be looked up
    ModulesRequested { names: Vec<String> },

    /// A package asset is being read for inlining
    AssetRead { kind: MarkerKind, path: PathBuf },

    /// A local script's `require` calls are being rewritten
    LocalScriptRewritten { path: PathBuf },

    /// Transient output file allocated for this session
    TransientAllocated { path: PathBuf },

    /// Pass finished; document written
    Compiled {
        path: PathBuf,
        markers: usize,
        modules: usize,
    },

    /// Pass aborted
    Failed { message: String },
}

impl CompileEvent {
    /// Minimum `-v` count at which the event is worth showing
    pub fn verbosity(&self) -> u8 {
        match self {
            CompileEvent::Failed { .. } => 0,
            CompileEvent::Compiled { .. } => 1,
            CompileEvent::ThemeResolved { .. } | CompileEvent::TransientAllocated { .. } => 2,
            CompileEvent::ModulesRequested { .. }
            | CompileEvent::AssetRead { .. }
            | CompileEvent::LocalScriptRewritten { .. } => 3,
            CompileEvent::PhaseChanged { .. } => 4,
        }
    }
}

/// Trait for receiving compile events
///
/// Implementations can be:
/// - ConsoleEventSink: Verbosity-gated, colored log lines
/// - JsonEventSink: NDJSON event stream for automation
/// - NoopEventSink: Silent operation
pub trait CompileEventSink: Send + Sync {
    /// Handle a compile event
    fn on_event(&self, event: CompileEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl CompileEventSink for NoopEventSink {
    fn on_event(&self, _event: CompileEvent) {}
}

impl<T: CompileEventSink + ?Sized> CompileEventSink for Arc<T> {
    fn on_event(&self, event: CompileEvent) {
        (**self).on_event(event)
    }
}

/// Event sink that keeps every event in memory
#[derive(Debug, Default, Clone)]
pub struct RecordingEventSink {
    events: Arc<Mutex<Vec<CompileEvent>>>,
}

impl RecordingEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of events recorded so far
    pub fn events(&self) -> Vec<CompileEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    /// Phases recorded so far, in order
    pub fn phases(&self) -> Vec<CompilePhase> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                CompileEvent::PhaseChanged { phase } => Some(phase),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        if let Ok(mut events) = self.events.lock() {
            events.clear();
        }
    }
}

impl CompileEventSink for RecordingEventSink {
    fn on_event(&self, event: CompileEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}
