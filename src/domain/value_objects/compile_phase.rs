//! Compile pipeline states

use std::fmt;

/// State of the theme compile pipeline
///
/// A pass moves strictly forward from `LocatingTheme` to `Ready`, or drops
/// into `Failed` from whichever phase reported a fatal error. A new pass
/// (watch-triggered) always starts again at `LocatingTheme`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CompilePhase {
    #[default]
    Idle,
    LocatingTheme,
    ReadingEntry,
    Discovering,
    ScanningLocal,
    ResolvingModules,
    Splicing,
    Finalizing,
    Ready,
    Failed,
}

impl CompilePhase {
    /// Phases of a successful pass, in order
    pub const PASS: [CompilePhase; 8] = [
        CompilePhase::LocatingTheme,
        CompilePhase::ReadingEntry,
        CompilePhase::Discovering,
        CompilePhase::ScanningLocal,
        CompilePhase::ResolvingModules,
        CompilePhase::Splicing,
        CompilePhase::Finalizing,
        CompilePhase::Ready,
    ];

    /// Whether no pass is in progress
    pub fn is_settled(&self) -> bool {
        matches!(
            self,
            CompilePhase::Idle | CompilePhase::Ready | CompilePhase::Failed
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CompilePhase::Idle => "idle",
            CompilePhase::LocatingTheme => "locating_theme",
            CompilePhase::ReadingEntry => "reading_entry",
            CompilePhase::Discovering => "discovering",
            CompilePhase::ScanningLocal => "scanning_local",
            CompilePhase::ResolvingModules => "resolving_modules",
            CompilePhase::Splicing => "splicing",
            CompilePhase::Finalizing => "finalizing",
            CompilePhase::Ready => "ready",
            CompilePhase::Failed => "failed",
        }
    }
}

impl fmt::Display for CompilePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
