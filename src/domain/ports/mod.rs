//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod compile_events;
pub mod file_system;
pub mod package_locator;

pub use compile_events::{CompileEvent, CompileEventSink, NoopEventSink, RecordingEventSink};
pub use file_system::{FileKind, FileSystem};
pub use package_locator::{NameFilter, PackageLocator, PackageQuery};
