//! Test doubles for the storage layer.

use std::cell::Cell;

use super::{Database, KvStore};
use crate::error::StorageError;

/// In-memory store whose next `get` can be made to fail once.
pub(crate) struct Flaky {
    inner: Database,
    fail_get: Cell<bool>,
}

impl Default for Flaky {
    fn default() -> Self {
        Self {
            inner: Database::open_memory().expect("in-memory database"),
            fail_get: Cell::new(false),
        }
    }
}

impl Flaky {
    pub(crate) fn fail_next_get(&self) {
        self.fail_get.set(true);
    }
}

impl KvStore for Flaky {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.fail_get.replace(false) {
            return Err(StorageError::Locked);
        }
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.inner.remove(key)
    }
}
