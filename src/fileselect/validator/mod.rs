//! # Existence Validation
//!
//! The resolver never touches the filesystem directly. It asks an [`ExistenceCheck`]
//! whether a path exists, which keeps the engine testable without real files.
//!
//! ## Implementations
//!
//! - [`fs::FsValidator`]: Production check backed by a filesystem status query
//! - [`memory::InMemoryPaths`]: A fixed set of "existing" paths for tests, which also
//!   counts how often it was asked
//!
//! Any failure of the underlying query (not found, permission denied, invalid path)
//! means "does not exist". Callers never see the error kind.

pub mod fs;
pub mod memory;

pub trait ExistenceCheck {
    /// Does `path` currently exist?
    fn exists(&self, path: &str) -> bool;
}

impl<T: ExistenceCheck + ?Sized> ExistenceCheck for &T {
    fn exists(&self, path: &str) -> bool {
        (**self).exists(path)
    }
}
