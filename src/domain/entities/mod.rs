//! Domain Entities
//!
//! Entities live for the duration of a single compile pass.

mod document;
mod marker;
mod module;
mod theme;

pub use document::CompiledDocument;
pub use marker::{AssetMarker, MarkerKind};
pub use module::{InstalledPackage, ModuleRequests, ResolvedModule, ResolvedModules};
pub use theme::{ResolvedTheme, ThemeReference, ThemeSource};
