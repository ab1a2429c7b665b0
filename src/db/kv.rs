//! Durable key-value storage port.
//!
//! The ledger only ever needs `get`/`set` on a single key, so any backend that
//! can hold one text blob per key will do. `DbPool` is the durable one;
//! `MemoryStore` backs tests and throwaway runs.

use crate::errors::{AppError, AppResult};
use std::collections::HashMap;
use std::io;

pub trait KeyValueStore {
    /// Returns `None` when nothing was ever stored under `key`.
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Replaces the whole value stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &mut T {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        (**self).set(key, value)
    }
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    read_only: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with raw content, e.g. a corrupt payload.
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut values = HashMap::new();
        values.insert(key.to_string(), value.to_string());
        Self {
            values,
            read_only: false,
        }
    }

    /// When set, every `set` fails with an I/O error.
    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        if self.read_only {
            return Err(AppError::from(io::Error::other("store is read-only")));
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
