//! Compile session
//!
//! The context object every compile pass runs in. It lives for the whole
//! process and owns the only state that survives between passes: the
//! transient document path. Everything else is rebuilt from scratch on each
//! pass.

use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::value_objects::CompilePhase;
use crate::infrastructure::fs::TransientDocument;

use super::options::CompileOptions;

pub struct CompileSession {
    options: CompileOptions,
    phase: Mutex<CompilePhase>,
    transient: Mutex<Option<TransientDocument>>,
    /// Held for the duration of a pass
    flight: Mutex<()>,
}

impl CompileSession {
    pub fn new(options: CompileOptions) -> Self {
        Self {
            options,
            phase: Mutex::new(CompilePhase::Idle),
            transient: Mutex::new(None),
            flight: Mutex::new(()),
        }
    }

    pub fn options(&self) -> &CompileOptions {
        &self.options
    }

    pub fn phase(&self) -> CompilePhase {
        *self.phase.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Transient document path, once the first pass has allocated it
    pub fn transient_path(&self) -> Option<PathBuf> {
        self.transient
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|doc| doc.path().to_path_buf())
    }

    /// Whether a pass is running right now
    pub fn is_compiling(&self) -> bool {
        self.flight.try_lock().is_err()
    }

    /// Block until no other pass is in flight, then claim the session
    pub(crate) fn begin(&self) -> MutexGuard<'_, ()> {
        self.flight.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn set_phase(&self, phase: CompilePhase) {
        *self.phase.lock().unwrap_or_else(PoisonError::into_inner) = phase;
    }

    /// Path of the transient document, allocating it on first use
    ///
    /// The second value is `true` when the path was allocated by this call.
    pub(crate) fn transient_or_allocate(&self) -> std::io::Result<(PathBuf, bool)> {
        let mut transient = self.transient.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(doc) = transient.as_ref() {
            return Ok((doc.path().to_path_buf(), false));
        }

        let doc = match &self.options.transient_dir {
            Some(dir) => TransientDocument::allocate_in(dir)?,
            None => TransientDocument::allocate()?,
        };
        let path = doc.path().to_path_buf();
        *transient = Some(doc);
        Ok((path, true))
    }
}
