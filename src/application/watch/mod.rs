//! Watch Use Case
//!
//! Recompiles the theme whenever its directory changes.
//! It orchestrates:
//! - File system monitoring (via `notify` crate)
//! - Content-hash filtering of editor save noise
//! - Debouncing (100ms default)
//! - Single-flight recompilation through the shared `CompileSession`
//!
//! ## Usage
//!
//! ```ignore
//! let use_case = WatchUseCase::new(compiler, session);
//! use_case.start(running, |event| { ... });
//! ```

mod event;
mod use_case;


pub use event::{WatchEvent, WatchOptions, WatcherState, DEBOUNCE_MS};
pub use use_case::{ChangeFilter, WatchUseCase};
