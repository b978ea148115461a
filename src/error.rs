//! Error types for Conkie
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Conkie operations
pub type ConkieResult<T> = Result<T, ConkieError>;

/// Main error type for Conkie operations
///
/// Every variant is terminal for the compile pass that produced it.
#[derive(Error, Debug)]
pub enum ConkieError {
    /// Neither a theme file nor an installed theme package matched
    #[error("no theme file or matching module found for '{reference}'")]
    ThemeNotFound { reference: String },

    /// A CSS, JS or local JS asset could not be read
    #[error("error loading {requested_by} file \"{}\": {source}", path.display())]
    AssetRead {
        path: PathBuf,
        requested_by: String,
        #[source]
        source: std::io::Error,
    },

    /// A referenced package is not installed in any search root
    #[error("cannot find module \"{module}\" required by {requested_by}")]
    ModuleResolution {
        module: String,
        requested_by: String,
    },

    /// The compiled document could not be written
    #[error("cannot write compiled document \"{}\": {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A package manifest could not be parsed
    #[error("invalid package manifest {}: {message}", path.display())]
    InvalidManifest { path: PathBuf, message: String },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {}: {message}", file.display())]
    Config { file: PathBuf, message: String },

    /// File system watcher could not be started
    #[error("watch error: {0}")]
    Watch(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
