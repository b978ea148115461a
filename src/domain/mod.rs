//! Domain Layer
//!
//! The core of Conkie - theme compilation rules without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Theme references, asset markers, resolved modules, compiled documents
//! - `value_objects/` - Immutable value types (ModuleBlacklist, RefreshPolicy, CompilePhase)
//! - `services/` - Pure services (pattern matchers, discovery, require rewriting, splicing, templating)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
