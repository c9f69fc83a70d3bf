//! File-backed storage backend.
//!
//! One JSON file per slot under a data directory. A write goes to a temp file
//! first and is renamed into place, so a slot always holds either its previous
//! contents or the complete new payload, matching the whole-collection-replace
//! contract. Disk-full conditions surface as `StorageFull`.

use crate::{
    errors::{Error, Result},
    store::StorageBackend,
};
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use tracing::debug;

/// Directory-of-JSON-files [`StorageBackend`].
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    /// Opens (creating if needed) the data directory.
    ///
    /// # Errors
    /// Returns an I/O error if the directory cannot be created.
    pub fn open(dir: impl AsRef<Path>) -> Result<FileBackend> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        debug!(dir = %dir.display(), "opened file-backed store");
        Ok(FileBackend { dir })
    }

    fn slot_path(&self, slot: &str) -> PathBuf {
        self.dir.join(format!("{slot}.json"))
    }

    fn map_write_error(slot: &str, e: io::Error) -> Error {
        match e.kind() {
            io::ErrorKind::StorageFull | io::ErrorKind::QuotaExceeded => Error::StorageFull {
                slot: slot.to_string(),
            },
            _ => Error::Io(e),
        }
    }
}

impl StorageBackend for FileBackend {
    fn read_slot(&self, slot: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.slot_path(slot)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::Io(e)),
        }
    }

    fn write_slot(&self, slot: &str, payload: &str) -> Result<()> {
        let tmp = self.dir.join(format!(".{slot}.tmp"));
        fs::write(&tmp, payload).map_err(|e| {
            let _ = fs::remove_file(&tmp);
            Self::map_write_error(slot, e)
        })?;
        fs::rename(&tmp, self.slot_path(slot)).map_err(|e| {
            let _ = fs::remove_file(&tmp);
            Self::map_write_error(slot, e)
        })
    }

    fn remove_slot(&self, slot: &str) -> Result<()> {
        match fs::remove_file(self.slot_path(slot)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::Io(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::{
        store::{Store, StorageBackend},
        test_utils::test_product,
    };
    use std::sync::Arc;

    #[test]
    fn slots_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let product = test_product("QD-1", 1000);
        {
            let backend = Arc::new(FileBackend::open(dir.path()).unwrap());
            let store = Store::open(backend as Arc<dyn StorageBackend>);
            store.products().add(&product).unwrap();
        }
        let backend = Arc::new(FileBackend::open(dir.path()).unwrap());
        let store = Store::open(backend as Arc<dyn StorageBackend>);
        assert!(store.products().get_by_id(product.id).unwrap().is_some());
    }

    #[test]
    fn missing_slot_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::open(dir.path()).unwrap();
        assert!(backend.read_slot("quotations").unwrap().is_none());
        backend.remove_slot("quotations").unwrap();
    }

    #[test]
    fn write_replaces_wholesale() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::open(dir.path()).unwrap();
        backend.write_slot("cart", "[1,2,3]").unwrap();
        backend.write_slot("cart", "[]").unwrap();
        assert_eq!(backend.read_slot("cart").unwrap().as_deref(), Some("[]"));
    }
}
