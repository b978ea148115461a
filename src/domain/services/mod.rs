//! Domain Services
//!
//! Pure theme compilation logic that operates on domain entities.
//! These services have no I/O dependencies and are easily testable.

pub mod discoverer;
pub mod matcher;
pub mod require_scanner;
pub mod splicer;
pub mod template;

pub use discoverer::{AssetDiscoverer, Discovery};
pub use matcher::{
    default_patterns, require_calls, AssetMatch, AssetPattern, ModuleScriptPattern,
    ModuleStylesheetPattern, RequireCall, ThemeScriptPattern,
};
pub use require_scanner::{is_package_specifier, rewrite_requires, scan_requires};
pub use splicer::{apply_splices, Splice};
pub use template::{render, render_context};

use std::thread::ScopedJoinHandle;

/// Join a scoped branch, re-raising its panic on the caller
pub(crate) fn join<T>(handle: ScopedJoinHandle<'_, T>) -> T {
    handle
        .join()
        .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
}
