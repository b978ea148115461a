//! Home directory resolution with test isolation support.
//!
//! `dirs::home_dir()` ignores `HOME` on some platforms, so tests that need a
//! private home (global package roots, user config) set `CONKIE_TEST_HOME`
//! instead.

use std::path::PathBuf;

/// Environment variable for test isolation of home directory.
pub const CONKIE_TEST_HOME_VAR: &str = "CONKIE_TEST_HOME";

/// Home directory for Conkie-internal paths
///
/// - `Some(PathBuf)` - `CONKIE_TEST_HOME` if set, else the system home
/// - `None` - if neither can be resolved
pub fn conkie_home_dir() -> Option<PathBuf> {
    std::env::var(CONKIE_TEST_HOME_VAR)
        .ok()
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
}

/// Directory holding `conkie/config.toml`
pub fn conkie_config_dir() -> Option<PathBuf> {
    match std::env::var(CONKIE_TEST_HOME_VAR) {
        Ok(home) => Some(PathBuf::from(home).join(".config")),
        Err(_) => dirs::config_dir(),
    }
}
