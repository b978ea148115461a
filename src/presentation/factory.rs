//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::sync::Arc;

use crate::application::{CompileOptions, CompileSession, ThemeCompiler, WatchUseCase};
use crate::config::Config;
use crate::domain::ports::CompileEventSink;
use crate::infrastructure::{LocalFs, NodeModulesLocator};

/// Type alias for the concrete ThemeCompiler with all dependencies
pub type ConcreteThemeCompiler = ThemeCompiler<LocalFs, NodeModulesLocator>;

/// Type alias for the concrete WatchUseCase with all dependencies
pub type ConcreteWatchUseCase = WatchUseCase<LocalFs, NodeModulesLocator>;

/// Compile inputs taken from the final configuration
pub fn compile_options(config: &Config) -> CompileOptions {
    CompileOptions::new(config.theme.clone())
        .with_debug(config.debug)
        .with_blacklist(config.blacklist())
}

/// Package locator searching the default and configured global roots
pub fn create_locator(config: &Config) -> NodeModulesLocator {
    NodeModulesLocator::new().with_global_roots(config.modules.global_roots.iter().cloned())
}

/// Create a theme compiler reporting to `events`
pub fn create_theme_compiler(
    config: &Config,
    events: Arc<dyn CompileEventSink>,
) -> ConcreteThemeCompiler {
    ThemeCompiler::new(LocalFs::new(), create_locator(config)).with_events(events)
}

/// Create a watch use case owning a fresh session
pub fn create_watch_use_case(
    config: &Config,
    events: Arc<dyn CompileEventSink>,
) -> ConcreteWatchUseCase {
    WatchUseCase::new(
        create_theme_compiler(config, events),
        CompileSession::new(compile_options(config)),
    )
}
