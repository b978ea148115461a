//! Document host
//!
//! Whatever displays the compiled document. The widget window itself is
//! outside this crate; the console host only reports what it would show.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use crate::application::WatchEvent;

use super::output::{DocumentAction, Reporter};

pub trait DocumentHost {
    /// Show the document at `path` for the first time
    fn load(&mut self, path: &Path);

    /// The document at `path` was rewritten; refresh the view
    fn reload(&mut self, path: &Path);

    /// Document currently shown
    fn current(&self) -> Option<&Path>;
}

/// Host that reports loads and reloads through the run's reporter
pub struct ConsoleHost {
    reporter: Reporter,
    current: Option<PathBuf>,
}

impl ConsoleHost {
    pub fn new(reporter: Reporter) -> Self {
        Self {
            reporter,
            current: None,
        }
    }
}

impl DocumentHost for ConsoleHost {
    fn load(&mut self, path: &Path) {
        self.reporter.document(DocumentAction::Loaded, path);
        self.current = Some(path.to_path_buf());
    }

    fn reload(&mut self, path: &Path) {
        if self.current.as_deref() == Some(path) {
            self.reporter.document(DocumentAction::Reloaded, path);
        } else {
            self.load(path);
        }
    }

    fn current(&self) -> Option<&Path> {
        self.current.as_deref()
    }
}

/// Watch callback: report every event and reload the host after each
/// successful pass
pub fn watch_handler<'a, H: DocumentHost>(
    host: &'a RefCell<H>,
    reporter: &'a Reporter,
) -> impl Fn(WatchEvent) + 'a {
    move |event| {
        reporter.watch_event(&event);
        if let WatchEvent::Compiled { path } = &event {
            host.borrow_mut().reload(Path::new(path));
        }
    }
}
