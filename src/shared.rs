//! Shared Library
//!
//! Thread-safe handle around a [`Library`].
//!
//! ## Concurrency Model: Single Writer
//!
//! One `parking_lot::Mutex` guards the whole store. Every command, reads
//! included, runs under it, so each operation still sees and leaves a
//! consistent store and the invariants hold exactly as in the
//! single-threaded case.

use parking_lot::Mutex;

use crate::error::Result;
use crate::library::Library;
use crate::protocol::{Command, Response};

/// A library that can be shared across threads (usually via `Arc`)
#[derive(Debug, Default)]
pub struct SharedLibrary {
    /// The store; only touched with the lock held
    inner: Mutex<Library>,
}

impl SharedLibrary {
    /// Create an empty shared library
    pub fn new() -> Self {
        Self::from_library(Library::new())
    }

    /// Take ownership of an existing library
    pub fn from_library(library: Library) -> Self {
        Self {
            inner: Mutex::new(library),
        }
    }

    /// Execute a command under the store lock
    pub fn execute(&self, command: Command) -> Result<Response> {
        let mut library = self.inner.lock();
        library.execute(command)
    }

    /// Run a read-only closure against a consistent view of the store
    pub fn read<R>(&self, f: impl FnOnce(&Library) -> R) -> R {
        let library = self.inner.lock();
        f(&library)
    }

    /// Release the inner library
    pub fn into_inner(self) -> Library {
        self.inner.into_inner()
    }
}
