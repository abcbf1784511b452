use super::ExistenceCheck;
use std::fs;

/// Checks existence with `fs::metadata`, following symlinks.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsValidator;

impl ExistenceCheck for FsValidator {
    fn exists(&self, path: &str) -> bool {
        match fs::metadata(path) {
            Ok(_) => true,
            Err(e) => {
                tracing::debug!(path, error = %e, "existence check failed");
                false
            }
        }
    }
}
