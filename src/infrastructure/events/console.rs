//! Console Event Sink
//!
//! Human-readable log lines on stderr, prefixed with a `[Conkie]` tag and
//! gated by the `-v` count. Stdout stays free for `--print` output.

use std::io::{self, Write};
use std::sync::Mutex;

use crossterm::style::Stylize;

use crate::domain::ports::{CompileEvent, CompileEventSink};

const TAG: &str = "[Conkie]";

pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    verbosity: u8,
    color: bool,
}

impl ConsoleEventSink {
    /// Sink writing to stderr
    pub fn stderr(verbosity: u8, color: bool) -> Self {
        Self::with_writer(io::stderr(), verbosity, color)
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W, verbosity: u8, color: bool) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            verbosity,
            color,
        }
    }

    pub fn verbosity(&self) -> u8 {
        self.verbosity
    }

    /// Write a free-form line with the `[Conkie]` tag
    pub fn line(&self, message: &str) {
        let line = format!("{} {}", tag(self.color), message);
        self.write_line(&line);
    }

    /// Write an error line; never gated by verbosity
    pub fn error(&self, message: &str) {
        let line = format!("{} {}", tag(self.color), error_text(message, self.color));
        self.write_line(&line);
    }

    fn write_line(&self, line: &str) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }
}

impl CompileEventSink for ConsoleEventSink {
    fn on_event(&self, event: CompileEvent) {
        if event.verbosity() > self.verbosity {
            return;
        }
        self.write_line(&format_event(&event, self.color));
    }
}

fn tag(color: bool) -> String {
    if color {
        TAG.blue().to_string()
    } else {
        TAG.to_string()
    }
}

fn value(text: impl std::fmt::Display, color: bool) -> String {
    if color {
        text.to_string().cyan().to_string()
    } else {
        text.to_string()
    }
}

fn error_text(message: &str, color: bool) -> String {
    let text = format!("ERR {}", message);
    if color {
        text.red().to_string()
    } else {
        text
    }
}

/// Render one event as a tagged log line
pub fn format_event(event: &CompileEvent, color: bool) -> String {
    let body = match event {
        CompileEvent::PhaseChanged { phase } => format!("Phase {}", value(phase, color)),
        CompileEvent::ThemeResolved {
            entry,
            package: None,
        } => format!("Using theme path {}", value(entry.display(), color)),
        CompileEvent::ThemeResolved {
            entry,
            package: Some(name),
        } => format!(
            "Using theme module {} with HTML path {}",
            value(name, color),
            value(entry.display(), color)
        ),
        CompileEvent::ModulesRequested { names } if names.is_empty() => {
            "No modules to look up".to_string()
        }
        CompileEvent::ModulesRequested { names } => {
            format!("Looking up modules {}", value(names.join(", "), color))
        }
        CompileEvent::AssetRead { kind, path } => format!(
            "Inlining {} {}",
            kind.preload_name(),
            value(path.display(), color)
        ),
        CompileEvent::LocalScriptRewritten { path } => {
            format!("Rewriting requires in {}", value(path.display(), color))
        }
        CompileEvent::TransientAllocated { path } => {
            format!("Setup temp file {}", value(path.display(), color))
        }
        CompileEvent::Compiled {
            path,
            markers,
            modules,
        } => format!(
            "Compiled {} ({} assets, {} modules)",
            value(path.display(), color),
            markers,
            modules
        ),
        CompileEvent::Failed { message } => error_text(message, color),
    };
    format!("{} {}", tag(color), body)
}
