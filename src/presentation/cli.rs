//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Every flag is optional; unset flags leave the configured value alone
//! - `CONKIE_ARGS` replaces the process arguments when the launcher sets it

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

use crate::config::{ColorMode, Config, MAX_VERBOSITY};

/// Environment variable carrying launcher-encoded arguments
pub const CONKIE_ARGS_VAR: &str = "CONKIE_ARGS";

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

impl From<ColorWhen> for ColorMode {
    fn from(when: ColorWhen) -> Self {
        match when {
            ColorWhen::Auto => ColorMode::Auto,
            ColorWhen::Always => ColorMode::Always,
            ColorWhen::Never => ColorMode::Never,
        }
    }
}

/// Conkie - desktop widget shell theme compiler
#[derive(Parser, Debug, Default)]
#[command(name = "conkie")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enter debug mode. Show as window and enable dev-tools
    #[arg(short, long)]
    pub debug: bool,

    /// Be verbose. Specify multiple times for increasing verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Main theme HTML file or theme package name (default "conkie-theme-default")
    #[arg(short, long, value_name = "THEME")]
    pub theme: Option<String>,

    /// Detach from parent (prevents quitting when parent process dies)
    #[arg(short, long)]
    pub background: bool,

    /// Stats refresh interval in ms when on power
    #[arg(long, value_name = "MS")]
    pub refresh: Option<u64>,

    /// Stats refresh interval in ms when on battery
    #[arg(long, value_name = "MS")]
    pub refresh_battery: Option<u64>,

    /// Show stats payloads sent to the theme
    #[arg(long)]
    pub debug_stats: bool,

    /// Watch the theme directory and reload on any changes
    #[arg(long)]
    pub watch: bool,

    /// Disable colors
    #[arg(long, conflicts_with = "color")]
    pub no_color: bool,

    /// Color output mode
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Emit NDJSON events instead of log lines
    #[arg(long)]
    pub json: bool,

    /// Read configuration from this file instead of the user config
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Compile once, write the document to stdout and exit
    #[arg(long, conflicts_with = "watch")]
    pub print: bool,
}

impl Cli {
    /// Parse `CONKIE_ARGS` when set, else the process arguments
    pub fn from_env() -> Result<Self, clap::Error> {
        match std::env::var(CONKIE_ARGS_VAR) {
            Ok(raw) if !raw.trim().is_empty() => match launcher_args(&raw) {
                Some(args) => Self::try_parse_from(args),
                None => Err(clap::Error::raw(
                    clap::error::ErrorKind::InvalidValue,
                    format!("{CONKIE_ARGS_VAR} is not a JSON array of strings\n"),
                )),
            },
            _ => Self::try_parse_from(std::env::args_os()),
        }
    }

    /// Layer the flags given on the command line over `config`
    pub fn apply(&self, config: &mut Config) {
        if let Some(theme) = &self.theme {
            config.theme = theme.clone();
        }
        config.debug |= self.debug;
        config.watch |= self.watch;
        config.debug_stats |= self.debug_stats;
        config.background |= self.background;

        if let Some(ms) = self.refresh {
            config.refresh.power_ms = ms;
        }
        if let Some(ms) = self.refresh_battery {
            config.refresh.battery_ms = ms;
        }

        if self.verbose > 0 {
            config.output.verbosity = self.verbose.min(MAX_VERBOSITY);
        }
        if self.no_color {
            config.output.color = ColorMode::Never;
        } else if let Some(when) = self.color {
            config.output.color = when.into();
        }
        config.output.json |= self.json;

        // Printing the document is a one-shot compile
        if self.print {
            config.watch = false;
        }
    }
}

/// Decode launcher arguments
///
/// The launcher stores its whole argument vector, interpreter and script
/// included, as a JSON array. Both leading entries are replaced with the
/// program name.
pub fn launcher_args(raw: &str) -> Option<Vec<OsString>> {
    let argv: Vec<String> = serde_json::from_str(raw).ok()?;
    let mut args = vec![OsString::from("conkie")];
    args.extend(argv.into_iter().skip(2).map(OsString::from));
    Some(args)
}
