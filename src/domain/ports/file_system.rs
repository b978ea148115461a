//! FileSystem port - abstraction over file I/O operations
//!
//! The compile pipeline only ever stats, reads and writes. Implementations
//! must be shareable across the concurrent branches of a phase.

use std::io;
use std::path::Path;

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O with atomic writes
pub trait FileSystem: Send + Sync {
    /// Read file content as UTF-8 text
    fn read(&self, path: &Path) -> io::Result<String>;

    /// Replace a file's content atomically
    fn write(&self, path: &Path, content: &str) -> io::Result<()>;

    /// Stat a path; `Ok(None)` when nothing exists there
    fn stat(&self, path: &Path) -> io::Result<Option<FileKind>>;

    /// Whether the path is an existing regular file (missing is not an error)
    fn is_file(&self, path: &Path) -> bool {
        matches!(self.stat(path), Ok(Some(FileKind::File)))
    }

    fn is_dir(&self, path: &Path) -> bool {
        matches!(self.stat(path), Ok(Some(FileKind::Directory)))
    }
}

/// What a stat call found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    File,
    Directory,
    Other,
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn read(&self, path: &Path) -> io::Result<String> {
        (**self).read(path)
    }

    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        (**self).write(path, content)
    }

    fn stat(&self, path: &Path) -> io::Result<Option<FileKind>> {
        (**self).stat(path)
    }
}
