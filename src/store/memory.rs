//! In-memory storage backend.
//!
//! The test double for the browser's key-value store. An optional byte quota
//! across all slots makes capacity-exhaustion paths reproducible: a write that
//! would push total stored bytes past the quota fails with `StorageFull` and
//! leaves the previous slot contents untouched.

use crate::{
    errors::{Error, Result},
    store::StorageBackend,
};
use std::{
    collections::HashMap,
    sync::Mutex,
};

/// HashMap-backed [`StorageBackend`].
#[derive(Default)]
pub struct MemoryBackend {
    slots: Mutex<HashMap<String, String>>,
    quota_bytes: Option<usize>,
}

impl MemoryBackend {
    /// Unlimited in-memory backend.
    #[must_use]
    pub fn new() -> MemoryBackend {
        MemoryBackend::default()
    }

    /// Backend that rejects writes once total stored bytes would exceed
    /// `quota_bytes`, mimicking the storage quota of the real medium.
    #[must_use]
    pub fn with_quota(quota_bytes: usize) -> MemoryBackend {
        MemoryBackend {
            slots: Mutex::new(HashMap::new()),
            quota_bytes: Some(quota_bytes),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        // a poisoned lock means a panic mid-read; the map itself is still valid
        self.slots.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl StorageBackend for MemoryBackend {
    fn read_slot(&self, slot: &str) -> Result<Option<String>> {
        Ok(self.lock().get(slot).cloned())
    }

    fn write_slot(&self, slot: &str, payload: &str) -> Result<()> {
        let mut slots = self.lock();
        if let Some(quota) = self.quota_bytes {
            let others: usize = slots
                .iter()
                .filter(|(name, _)| name.as_str() != slot)
                .map(|(_, v)| v.len())
                .sum();
            if others + payload.len() > quota {
                return Err(Error::StorageFull {
                    slot: slot.to_string(),
                });
            }
        }
        slots.insert(slot.to_string(), payload.to_string());
        Ok(())
    }

    fn remove_slot(&self, slot: &str) -> Result<()> {
        self.lock().remove(slot);
        Ok(())
    }
}
