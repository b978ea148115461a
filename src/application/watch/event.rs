//! Watch event types and options

use std::collections::HashSet;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Debounce duration in milliseconds
pub const DEBOUNCE_MS: u64 = 100;

/// Watch loop timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatchOptions {
    /// Quiet period after the last change before recompiling
    pub debounce: Duration,
    /// Events arriving this soon after the watcher starts are dropped
    pub startup_cooldown: Duration,
    /// How long the loop waits for an event before checking the running flag
    pub poll: Duration,
}

impl Default for WatchOptions {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(DEBOUNCE_MS),
            startup_cooldown: Duration::from_millis(500),
            poll: Duration::from_millis(50),
        }
    }
}

impl WatchOptions {
    pub fn with_startup_cooldown(mut self, cooldown: Duration) -> Self {
        self.startup_cooldown = cooldown;
        self
    }
}

/// Watch event types for NDJSON output
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum WatchEvent {
    /// Watch started
    WatchStarted { theme: String, watching: String },
    /// File changed
    FileChanged { path: String },
    /// Recompilation started
    CompileStarted,
    /// Document rewritten; the host should reload it
    Compiled { path: String },
    /// Pass failed; the host keeps showing the previous document
    Error { message: String },
    /// Watch stopped
    Shutdown,
}

impl WatchEvent {
    /// Convert to JSON string with "command": "watch" field included
    pub fn to_json(&self) -> String {
        let mut value =
            serde_json::to_value(self).unwrap_or_else(|_| serde_json::json!({"event": "error"}));
        if let Some(obj) = value.as_object_mut() {
            obj.insert("command".to_string(), serde_json::json!("watch"));
        }
        serde_json::to_string(&value).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Watcher state for debouncing
#[derive(Debug)]
pub struct WatcherState {
    pending_changes: HashSet<PathBuf>,
    last_change: Option<Instant>,
    debounce: Duration,
}

impl Default for WatcherState {
    fn default() -> Self {
        Self::new()
    }
}

impl WatcherState {
    pub fn new() -> Self {
        Self::with_debounce(Duration::from_millis(DEBOUNCE_MS))
    }

    pub fn with_debounce(debounce: Duration) -> Self {
        Self {
            pending_changes: HashSet::new(),
            last_change: None,
            debounce,
        }
    }

    /// Add a file change to pending changes
    pub fn add_change(&mut self, path: PathBuf) {
        self.pending_changes.insert(path);
        self.last_change = Some(Instant::now());
    }

    /// Whether the burst has gone quiet and a recompile is due
    pub fn should_compile(&self) -> bool {
        match self.last_change {
            Some(last) => !self.pending_changes.is_empty() && last.elapsed() >= self.debounce,
            None => false,
        }
    }

    /// Take all pending changes (sorted), resetting state
    pub fn take_changes(&mut self) -> Vec<PathBuf> {
        let mut changes: Vec<_> = self.pending_changes.drain().collect();
        changes.sort();
        self.last_change = None;
        changes
    }

    pub fn has_pending(&self) -> bool {
        !self.pending_changes.is_empty()
    }
}
