//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConkieError, ConkieResult};
use crate::infrastructure::fs::conkie_config_dir;

use super::types::{ColorMode, Config, MAX_VERBOSITY};

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{line}")?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{suggestion}'?)")?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ConkieResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ConkieError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Path of the per-user config file
pub fn user_config_path() -> Option<PathBuf> {
    conkie_config_dir().map(|dir| dir.join("conkie").join("config.toml"))
}

/// Load `explicit`, else the user config if present, else defaults
///
/// An explicit file must exist; a missing user file is not an error.
pub fn load_or_default(explicit: Option<&Path>) -> ConkieResult<(Config, Vec<ConfigWarning>)> {
    let loaded = match explicit {
        Some(path) => Some(load_with_warnings(path)?),
        None => match user_config_path() {
            Some(path) if path.is_file() => Some(load_with_warnings(&path)?),
            _ => None,
        },
    };

    let (config, warnings) = loaded.unwrap_or_default();
    Ok((with_env_overrides(config), warnings))
}

/// Apply environment variable overrides (CONKIE_* prefix)
pub fn with_env_overrides(mut config: Config) -> Config {
    if let Ok(theme) = std::env::var("CONKIE_THEME") {
        if !theme.trim().is_empty() {
            config.theme = theme;
        }
    }

    // CONKIE_VERBOSITY: a number, or quiet/verbose/debug
    if let Ok(verbosity) = std::env::var("CONKIE_VERBOSITY") {
        let level = match verbosity.trim().to_lowercase().as_str() {
            "quiet" => Some(0),
            "verbose" => Some(2),
            "debug" => Some(MAX_VERBOSITY),
            other => other.parse::<u8>().ok(),
        };
        if let Some(level) = level {
            config.output.verbosity = level.min(MAX_VERBOSITY);
        }
    }

    if let Ok(val) = std::env::var("CONKIE_WATCH") {
        config.watch = env_flag(&val);
    }

    if let Ok(val) = std::env::var("CONKIE_DEBUG") {
        config.debug = env_flag(&val);
    }

    if let Ok(val) = std::env::var("CONKIE_COLOR") {
        if let Some(color) = ColorMode::parse(&val) {
            config.output.color = color;
        }
    }

    config
}

fn env_flag(val: &str) -> bool {
    !matches!(val.trim().to_lowercase().as_str(), "" | "0" | "false" | "no" | "off")
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "theme",
        "debug",
        "watch",
        "debug_stats",
        "background",
        "refresh",
        "power_ms",
        "battery_ms",
        "output",
        "verbosity",
        "color",
        "json",
        "modules",
        "blacklist",
        "global_roots",
    ];

    CANDIDATES
        .iter()
        .map(|candidate| (*candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a = a.as_bytes();
    let b = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, &ac) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
