//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `ThemeCompiler` - Runs a compile pass (locate, discover, resolve, splice, finalize)
//! - `WatchUseCase` - Recompiles on theme directory changes

pub mod compiler;
pub mod watch;

pub use compiler::{CompileOptions, CompileSession, ThemeCompiler};
pub use watch::{ChangeFilter, WatchEvent, WatchOptions, WatchUseCase, WatcherState, DEBOUNCE_MS};
