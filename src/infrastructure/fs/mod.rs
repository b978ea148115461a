//! File System Implementations
//!
//! Concrete implementations of the FileSystem port, plus the transient
//! output file used for compiled documents.

mod home;
mod local;
mod transient;

pub use home::{conkie_config_dir, conkie_home_dir, CONKIE_TEST_HOME_VAR};
pub use local::LocalFs;
pub use transient::TransientDocument;
