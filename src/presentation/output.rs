//! Output Rendering
//!
//! One reporter per run: either `[Conkie]` log lines on stderr or an NDJSON
//! stream. Compile events, watch events, config warnings and host messages
//! all go through it.

use std::path::Path;
use std::sync::Arc;

use serde_json::json;

use crate::application::WatchEvent;
use crate::config::{Config, ConfigWarning};
use crate::domain::ports::CompileEventSink;
use crate::infrastructure::{ConsoleEventSink, JsonEventSink};

use super::context::OutputContext;

#[derive(Clone)]
pub enum Reporter {
    Console(Arc<ConsoleEventSink>),
    Json(Arc<JsonEventSink>),
}

impl Reporter {
    /// Reporter for `ctx`; `stdout_reserved` moves NDJSON to stderr
    pub fn new(ctx: &OutputContext, stdout_reserved: bool) -> Self {
        if ctx.json {
            let sink = if stdout_reserved {
                JsonEventSink::stderr()
            } else {
                JsonEventSink::stdout()
            };
            Reporter::Json(Arc::new(sink))
        } else {
            Reporter::Console(Arc::new(ConsoleEventSink::stderr(ctx.verbosity, ctx.color)))
        }
    }

    /// Sink handed to the compiler
    pub fn events(&self) -> Arc<dyn CompileEventSink> {
        match self {
            Reporter::Console(sink) => sink.clone() as Arc<dyn CompileEventSink>,
            Reporter::Json(sink) => sink.clone() as Arc<dyn CompileEventSink>,
        }
    }

    /// Log line shown from `-v` count `level` on; dropped in JSON mode
    pub fn info(&self, level: u8, message: &str) {
        if let Reporter::Console(sink) = self {
            if sink.verbosity() >= level {
                sink.line(message);
            }
        }
    }

    pub fn error(&self, message: &str) {
        match self {
            Reporter::Console(sink) => sink.error(message),
            Reporter::Json(sink) => sink.emit(json!({
                "event": "error",
                "message": message,
            })),
        }
    }

    pub fn warning(&self, warning: &ConfigWarning) {
        match self {
            Reporter::Console(sink) => sink.line(&format!("WARN {warning}")),
            Reporter::Json(sink) => sink.emit(json!({
                "event": "config_warning",
                "key": warning.key,
                "file": warning.file.display().to_string(),
                "line": warning.line,
                "suggestion": warning.suggestion,
            })),
        }
    }

    /// Settings the document host acts on rather than the compiler
    pub fn host_settings(&self, config: &Config) {
        match self {
            Reporter::Console(_) => {
                self.info(
                    3,
                    &format!(
                        "Stats refresh {}ms on power, {}ms on battery",
                        config.refresh.power_ms, config.refresh.battery_ms
                    ),
                );
                if config.debug_stats {
                    self.info(3, "Stats payloads will be echoed");
                }
                if config.background {
                    self.info(3, "Running detached from parent");
                }
            }
            Reporter::Json(sink) => sink.emit(json!({
                "event": "host_settings",
                "refresh_power_ms": config.refresh.power_ms,
                "refresh_battery_ms": config.refresh.battery_ms,
                "debug_stats": config.debug_stats,
                "background": config.background,
            })),
        }
    }

    /// Host-side document notifications
    pub fn document(&self, action: DocumentAction, path: &Path) {
        match self {
            Reporter::Console(_) => match action {
                DocumentAction::Loaded => {
                    self.info(1, &format!("Showing {}", path.display()));
                }
                DocumentAction::Reloaded => self.info(1, "Theme reloaded"),
            },
            Reporter::Json(sink) => sink.emit(json!({
                "event": action.as_str(),
                "path": path.display().to_string(),
            })),
        }
    }

    /// Watch loop progress
    ///
    /// Failed passes are already reported by the compile sink, so console
    /// output skips [`WatchEvent::Error`].
    pub fn watch_event(&self, event: &WatchEvent) {
        match self {
            Reporter::Json(sink) => match serde_json::from_str(&event.to_json()) {
                Ok(value) => sink.emit(value),
                Err(_) => sink.emit(json!({"event": "error", "command": "watch"})),
            },
            Reporter::Console(_) => match event {
                WatchEvent::WatchStarted { watching, .. } => {
                    self.info(2, &format!("Watching {watching}"));
                }
                WatchEvent::FileChanged { path } => {
                    self.info(1, &format!("Detected change on {path}"));
                }
                WatchEvent::Shutdown => self.info(2, "Stopped watching"),
                WatchEvent::CompileStarted
                | WatchEvent::Compiled { .. }
                | WatchEvent::Error { .. } => {}
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentAction {
    Loaded,
    Reloaded,
}

impl DocumentAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentAction::Loaded => "document_loaded",
            DocumentAction::Reloaded => "document_reloaded",
        }
    }
}
