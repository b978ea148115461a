//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod blacklist;
mod compile_phase;
mod hash;
mod refresh;

pub use blacklist::{is_core_module, package_name, ModuleBlacklist};
pub use compile_phase::CompilePhase;
pub use hash::ContentHash;
pub use refresh::{PowerMode, RefreshPolicy};
