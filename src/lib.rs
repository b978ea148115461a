//! Conkie - desktop widget shell theme compiler
//!
//! Conkie renders a themeable HTML/CSS/JS overlay on the desktop background.
//! This crate assembles the document the widget window displays: it locates a
//! theme (file path or installed package), discovers the CSS/JS assets the
//! theme references, resolves their packages, and inlines everything into one
//! self-contained file. In watch mode the document is rebuilt whenever the
//! theme directory changes.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{CompileOptions, CompileSession, ThemeCompiler, WatchEvent, WatchUseCase};
pub use config::Config;
pub use domain::entities::{CompiledDocument, ResolvedTheme, ThemeReference};
pub use error::{ConkieError, ConkieResult};
