//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap), including launcher-encoded arguments
//! - Creating use cases with infrastructure dependencies
//! - Output: log lines or NDJSON, and the document host
//!
//! ## Usage
//!
//! ```ignore
//! use conkie::presentation::factory;
//!
//! let compiler = factory::create_theme_compiler(&config, reporter.events());
//! let session = CompileSession::new(factory::compile_options(&config));
//! let document = compiler.compile(&session)?;
//! ```

pub mod cli;
pub mod context;
pub mod factory;
pub mod host;
pub mod output;

pub use cli::{launcher_args, Cli, ColorWhen, CONKIE_ARGS_VAR};
pub use context::OutputContext;
pub use factory::{compile_options, create_theme_compiler, create_watch_use_case};
pub use host::{watch_handler, ConsoleHost, DocumentHost};
pub use output::{DocumentAction, Reporter};
