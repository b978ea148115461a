//! Configuration module for Conkie
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (CONKIE_*)
//! 3. User config (`<config dir>/conkie/config.toml`), or `--config <file>`
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{user_config_path, ConfigWarning};
pub use types::{ColorMode, Config, ModulesConfig, OutputConfig, MAX_VERBOSITY};
