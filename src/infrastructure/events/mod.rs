//! Event Sink Implementations
//!
//! Concrete implementations of CompileEventSink:
//! - ConsoleEventSink: Tagged log lines on stderr, gated by verbosity
//! - JsonEventSink: NDJSON output for scripts and automation

mod console;
mod json;

pub use console::{format_event, ConsoleEventSink};
pub use json::{event_json, JsonEventSink};
