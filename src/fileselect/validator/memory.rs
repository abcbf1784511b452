use super::ExistenceCheck;
use std::cell::Cell;
use std::collections::HashSet;

/// In-memory existence check for testing.
/// Only the registered paths exist; every query is counted.
#[derive(Debug, Default)]
pub struct InMemoryPaths {
    paths: HashSet<String>,
    queries: Cell<usize>,
}

impl InMemoryPaths {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
            queries: Cell::new(0),
        }
    }

    pub fn insert(&mut self, path: impl Into<String>) {
        self.paths.insert(path.into());
    }

    /// Number of times [`ExistenceCheck::exists`] has been called.
    pub fn queries(&self) -> usize {
        self.queries.get()
    }
}

impl ExistenceCheck for InMemoryPaths {
    fn exists(&self, path: &str) -> bool {
        self.queries.set(self.queries.get() + 1);
        self.paths.contains(path)
    }
}
