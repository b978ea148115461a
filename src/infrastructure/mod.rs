//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system, transient document, home directories
//! - `packages/` - `node_modules` package locator
//! - `events/` - Console and JSON event sinks

pub mod events;
pub mod fs;
pub mod packages;

// Re-export for convenience
pub use events::{ConsoleEventSink, JsonEventSink};
pub use fs::{LocalFs, TransientDocument};
pub use packages::NodeModulesLocator;
