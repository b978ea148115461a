//! Output context
//!
//! Decides, once per run, how events are shown: NDJSON or log lines, how
//! many `-v` levels, and whether log lines are colored.

use is_terminal::IsTerminal;

use crate::config::{ColorMode, Config};

/// What the terminal on stderr can do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub is_tty: bool,
    pub supports_color: bool,
}

pub fn detect_capabilities() -> TerminalCapabilities {
    detect_capabilities_impl(|key| std::env::var(key).ok(), std::io::stderr().is_terminal())
}

fn detect_capabilities_impl(
    get_env: impl Fn(&str) -> Option<String>,
    is_tty: bool,
) -> TerminalCapabilities {
    let term_is_dumb = get_env("TERM").is_some_and(|term| term.eq_ignore_ascii_case("dumb"));
    let no_color = get_env("NO_COLOR").is_some();

    TerminalCapabilities {
        is_tty,
        supports_color: is_tty && !term_is_dumb && !no_color,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputContext {
    pub json: bool,
    pub verbosity: u8,
    pub color: bool,
}

impl OutputContext {
    /// Resolve from the final configuration (CLI flags already applied)
    pub fn new(config: &Config) -> Self {
        Self::from_caps(config, detect_capabilities())
    }

    pub(crate) fn from_caps(config: &Config, caps: TerminalCapabilities) -> Self {
        let color = match config.output.color {
            ColorMode::Never => false,
            ColorMode::Always => true,
            ColorMode::Auto => caps.supports_color,
        };

        Self {
            json: config.output.json,
            verbosity: config.verbosity(),
            color: color && !config.output.json,
        }
    }
}
