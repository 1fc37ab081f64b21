use std::{
    collections::HashMap,
    io,
    sync::{Mutex, MutexGuard},
};

use super::{Result, StorageBackend};

/// Volatile backend for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: Mutex<HashMap<String, String>>,
    read_only: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend whose writes always fail, for exercising rollback paths.
    pub fn read_only() -> Self {
        Self {
            values: Mutex::new(HashMap::new()),
            read_only: true,
        }
    }

    pub fn with_value(self, key: &str, value: &str) -> Self {
        self.lock().insert(key.to_string(), value.to_string());
        self
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.values
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl StorageBackend for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.get(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        if self.read_only {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("storage is read-only, cannot write `{key}`"),
            )
            .into());
        }
        self.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
