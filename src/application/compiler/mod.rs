//! Compiler Module
//!
//! Turns a theme reference into one self-contained document.
//!
//! ## Structure
//!
//! - `options` - Compile inputs (`CompileOptions`)
//! - `session` - Per-process context (`CompileSession`)
//! - `locate` - Theme path / package probing
//! - `scan` - Entry and local script reading
//! - `resolve` - Batched module resolution
//! - `splice` - Concurrent inlining passes
//! - `finalize` - Template pass and transient write
//! - `use_case` - Pass orchestration (`ThemeCompiler`)
//!
//! ## Usage
//!
//! ```ignore
//! use conkie::application::{CompileOptions, CompileSession, ThemeCompiler};
//!
//! let compiler = ThemeCompiler::new(LocalFs::new(), NodeModulesLocator::new());
//! let session = CompileSession::new(CompileOptions::new("conkie-theme-default"));
//! let document = compiler.compile(&session)?;
//! ```

mod finalize;
mod locate;
mod options;
mod resolve;
mod scan;
mod session;
mod splice;
mod use_case;

pub use options::{absolutize, default_root_dir, CompileOptions};
pub use session::CompileSession;
pub use use_case::ThemeCompiler;
