//! JSON Event Sink
//!
//! Outputs compile events as NDJSON for scripts and automation.

use crate::domain::ports::{CompileEvent, CompileEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Sink writing to stderr, for runs that keep stdout for the document
    pub fn stderr() -> Self {
        Self::with_writer(io::stderr())
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    /// Write one NDJSON line
    pub fn emit(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

/// JSON object for one compile event
pub fn event_json(event: &CompileEvent) -> serde_json::Value {
    match event {
        CompileEvent::PhaseChanged { phase } => serde_json::json!({
            "event": "phase",
            "phase": phase,
        }),

        CompileEvent::ThemeResolved { entry, package } => serde_json::json!({
            "event": "theme_resolved",
            "entry": entry.display().to_string(),
            "package": package,
        }),

        CompileEvent::ModulesRequested { names } => serde_json::json!({
            "event": "modules_requested",
            "names": names,
        }),

        CompileEvent::AssetRead { kind, path } => serde_json::json!({
            "event": "asset_read",
            "kind": kind,
            "path": path.display().to_string(),
        }),

        CompileEvent::LocalScriptRewritten { path } => serde_json::json!({
            "event": "local_script_rewritten",
            "path": path.display().to_string(),
        }),

        CompileEvent::TransientAllocated { path } => serde_json::json!({
            "event": "transient_allocated",
            "path": path.display().to_string(),
        }),

        CompileEvent::Compiled {
            path,
            markers,
            modules,
        } => serde_json::json!({
            "event": "compiled",
            "status": "success",
            "path": path.display().to_string(),
            "markers": markers,
            "modules": modules,
        }),

        CompileEvent::Failed { message } => serde_json::json!({
            "event": "failed",
            "status": "error",
            "message": message,
        }),
    }
}

impl CompileEventSink for JsonEventSink {
    fn on_event(&self, event: CompileEvent) {
        self.emit(event_json(&event));
    }
}
