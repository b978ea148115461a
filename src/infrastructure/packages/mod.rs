//! Package locators

mod node_modules;

pub use node_modules::{default_global_roots, read_package, NodeModulesLocator};
