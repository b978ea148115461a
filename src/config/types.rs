//! Configuration types

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::entities::ThemeReference;
use crate::domain::value_objects::{ModuleBlacklist, RefreshPolicy};
use crate::error::ConkieResult;

use super::loader::{self, ConfigWarning};

/// Highest `-v` level that changes output
pub const MAX_VERBOSITY: u8 = 4;

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    /// 0..=4, same scale as repeated `-v`
    #[serde(default)]
    pub verbosity: u8,

    #[serde(default)]
    pub color: ColorMode,

    /// NDJSON events instead of human output
    #[serde(default)]
    pub json: bool,
}

/// Package resolution configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ModulesConfig {
    /// Names never resolved, on top of the built-in list
    #[serde(default)]
    pub blacklist: Vec<String>,

    /// Global package roots searched after the defaults
    #[serde(default)]
    pub global_roots: Vec<PathBuf>,
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Theme file path or package name
    #[serde(default = "default_theme")]
    pub theme: String,

    #[serde(default)]
    pub debug: bool,

    #[serde(default)]
    pub watch: bool,

    #[serde(default)]
    pub debug_stats: bool,

    #[serde(default)]
    pub background: bool,

    #[serde(default)]
    pub refresh: RefreshPolicy,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub modules: ModulesConfig,
}

fn default_theme() -> String {
    ThemeReference::DEFAULT.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            debug: false,
            watch: false,
            debug_stats: false,
            background: false,
            refresh: RefreshPolicy::default(),
            output: OutputConfig::default(),
            modules: ModulesConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> ConkieResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> ConkieResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load the explicit file, else the user config, else defaults
    ///
    /// Environment overrides are applied on top.
    pub fn load_or_default(explicit: Option<&Path>) -> ConkieResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(explicit)
    }

    /// Apply environment variable overrides (CONKIE_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Built-in blacklist plus `modules.blacklist`
    pub fn blacklist(&self) -> ModuleBlacklist {
        ModuleBlacklist::with_extra(self.modules.blacklist.iter().cloned())
    }

    pub fn theme_reference(&self) -> ThemeReference {
        ThemeReference::new(self.theme.clone())
    }

    pub fn verbosity(&self) -> u8 {
        self.output.verbosity.min(MAX_VERBOSITY)
    }
}
