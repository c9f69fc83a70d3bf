//! Generic whole-collection CRUD over one storage slot.
//!
//! Every mutation reads the full collection, applies the change in memory, and
//! writes the full collection back. `update` and `delete` report whether they
//! found their target instead of silently no-opping, so callers can surface
//! "record vanished" instead of assuming the write applied.

use crate::{
    errors::{Error, Result},
    store::StorageBackend,
};
use serde::{Serialize, de::DeserializeOwned};
use std::{marker::PhantomData, sync::Arc};
use uuid::Uuid;

/// A record type that can live in a [`Collection`].
pub trait Record: Serialize + DeserializeOwned + Clone {
    /// The record's unique id. Uniqueness is the creator's responsibility
    /// (v4 uuids at construction); the collection never checks.
    fn id(&self) -> Uuid;
}

impl Record for crate::entities::Product {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Record for crate::entities::Quotation {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// Typed view of one slot.
pub struct Collection<T: Record> {
    backend: Arc<dyn StorageBackend>,
    slot: &'static str,
    entity: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Record> Collection<T> {
    pub(crate) fn new(
        backend: Arc<dyn StorageBackend>,
        slot: &'static str,
        entity: &'static str,
    ) -> Collection<T> {
        Collection {
            backend,
            slot,
            entity,
            _marker: PhantomData,
        }
    }

    /// Returns the full persisted collection in insertion order, or an empty
    /// vector if the slot was never written.
    pub fn get_all(&self) -> Result<Vec<T>> {
        match self.backend.read_slot(self.slot)? {
            None => Ok(Vec::new()),
            Some(raw) => serde_json::from_str(&raw).map_err(|source| Error::Corrupt {
                slot: self.slot.to_string(),
                source,
            }),
        }
    }

    /// Linear scan for a record by id.
    pub fn get_by_id(&self, id: Uuid) -> Result<Option<T>> {
        Ok(self.get_all()?.into_iter().find(|item| item.id() == id))
    }

    /// Like [`Collection::get_by_id`] but a missing record is a hard
    /// [`Error::NotFound`], for callers that loaded the id moments ago.
    pub fn require(&self, id: Uuid) -> Result<T> {
        self.get_by_id(id)?.ok_or(Error::NotFound {
            entity: self.entity,
            id,
        })
    }

    /// Appends a record and persists the whole collection. No uniqueness
    /// check; on persist failure nothing is written and the caller's draft
    /// remains valid for a retry.
    pub fn add(&self, item: &T) -> Result<()> {
        let mut items = self.get_all()?;
        items.push(item.clone());
        self.save_all(&items)
    }

    /// Replaces the first record whose id matches. Returns `false` (and
    /// writes nothing) when no record has that id.
    pub fn update(&self, item: &T) -> Result<bool> {
        let mut items = self.get_all()?;
        let Some(existing) = items.iter_mut().find(|i| i.id() == item.id()) else {
            return Ok(false);
        };
        *existing = item.clone();
        self.save_all(&items)?;
        Ok(true)
    }

    /// Removes a record by id. Returns `false` (and writes nothing) when no
    /// record has that id.
    pub fn delete(&self, id: Uuid) -> Result<bool> {
        let mut items = self.get_all()?;
        let before = items.len();
        items.retain(|item| item.id() != id);
        if items.len() == before {
            return Ok(false);
        }
        self.save_all(&items)?;
        Ok(true)
    }

    /// Wholesale replace, used by bulk operations that already hold the full
    /// updated collection.
    pub fn save_all(&self, items: &[T]) -> Result<()> {
        let payload = serde_json::to_string(items)?;
        self.backend.write_slot(self.slot, &payload)
    }
}
