//! Persistent store - synchronous whole-collection CRUD over named slots.
//!
//! The storage medium is a key-value space of named string slots, each holding
//! one serialized JSON collection. Every write replaces a whole slot; there is
//! no partial write and no cross-process locking (last writer wins, a
//! documented non-goal). The backend is injectable: [`MemoryBackend`] for
//! tests, [`FileBackend`] for production. Business logic never touches a
//! backend directly; it goes through [`Store`] and [`Collection`].

pub mod collection;
pub mod file;
pub mod memory;

pub use collection::{Collection, Record};
pub use file::FileBackend;
pub use memory::MemoryBackend;

use crate::{
    entities::{CartItem, Product, Quotation},
    errors::{Error, Result},
    seed,
};
use std::sync::Arc;
use tracing::{info, warn};

/// Slot holding the product collection.
pub const PRODUCTS_SLOT: &str = "products";
/// Slot holding the quotation collection.
pub const QUOTATIONS_SLOT: &str = "quotations";
/// Slot holding the transient cart.
pub const CART_SLOT: &str = "cart";
/// Slot holding the admin-auth flag.
pub const ADMIN_AUTH_SLOT: &str = "admin_auth";

/// A synchronous key-value medium of named string slots.
///
/// Implementations signal quota exhaustion with [`Error::StorageFull`]; every
/// other failure maps to its ordinary error variant. A `write_slot` either
/// lands the whole payload or leaves the previous slot contents intact.
pub trait StorageBackend: Send + Sync {
    /// Reads a slot, `None` if it was never written.
    fn read_slot(&self, slot: &str) -> Result<Option<String>>;

    /// Replaces a slot's contents wholesale.
    fn write_slot(&self, slot: &str, payload: &str) -> Result<()>;

    /// Deletes a slot; missing slots are fine.
    fn remove_slot(&self, slot: &str) -> Result<()>;
}

/// Facade over the four fixed slots.
///
/// Owns the serialized collections exclusively: every in-memory copy handed
/// out by [`Collection::get_all`] is a draft with no authority until written
/// back.
#[derive(Clone)]
pub struct Store {
    backend: Arc<dyn StorageBackend>,
}

impl Store {
    /// Opens the store and performs first-run seeding: when the products slot
    /// has never been written, the built-in reference catalog is persisted
    /// into it. Seeding failure (typically quota exhaustion from a tiny test
    /// backend) is logged and skipped so the application still starts.
    pub fn open(backend: Arc<dyn StorageBackend>) -> Store {
        let store = Store { backend };
        store.seed_if_empty();
        store
    }

    fn seed_if_empty(&self) {
        match self.backend.read_slot(PRODUCTS_SLOT) {
            Ok(Some(_)) => {}
            Ok(None) => {
                let catalog = seed::reference_catalog();
                info!(count = catalog.len(), "seeding reference catalog");
                if let Err(e) = self.products().save_all(&catalog) {
                    warn!("seeding reference catalog failed, starting empty: {e}");
                }
            }
            Err(e) => warn!("could not inspect products slot, skipping seed: {e}"),
        }
    }

    /// The product collection.
    #[must_use]
    pub fn products(&self) -> Collection<Product> {
        Collection::new(Arc::clone(&self.backend), PRODUCTS_SLOT, "product")
    }

    /// The quotation collection.
    #[must_use]
    pub fn quotations(&self) -> Collection<Quotation> {
        Collection::new(Arc::clone(&self.backend), QUOTATIONS_SLOT, "quotation")
    }

    /// Loads the transient cart, empty if none was saved.
    pub fn load_cart(&self) -> Result<Vec<CartItem>> {
        match self.backend.read_slot(CART_SLOT)? {
            None => Ok(Vec::new()),
            Some(raw) => serde_json::from_str(&raw).map_err(|source| Error::Corrupt {
                slot: CART_SLOT.to_string(),
                source,
            }),
        }
    }

    /// Replaces the saved cart.
    pub fn save_cart(&self, cart: &[CartItem]) -> Result<()> {
        let payload = serde_json::to_string(cart)?;
        self.backend.write_slot(CART_SLOT, &payload)
    }

    /// Empties the cart slot, typically after checkout.
    pub fn clear_cart(&self) -> Result<()> {
        self.backend.remove_slot(CART_SLOT)
    }

    /// Whether the admin-auth flag is set.
    pub fn is_admin(&self) -> Result<bool> {
        Ok(matches!(
            self.backend.read_slot(ADMIN_AUTH_SLOT)?.as_deref(),
            Some("true")
        ))
    }

    /// Sets or clears the admin-auth flag.
    pub fn set_admin(&self, admin: bool) -> Result<()> {
        if admin {
            self.backend.write_slot(ADMIN_AUTH_SLOT, "true")
        } else {
            self.backend.remove_slot(ADMIN_AUTH_SLOT)
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn open_seeds_reference_catalog_once() {
        let backend = memory_backend();
        let store = Store::open(Arc::clone(&backend) as Arc<dyn StorageBackend>);
        let products = store.products().get_all().unwrap();
        assert_eq!(products.len(), seed::reference_catalog().len());
        assert!(products.iter().all(|p| p.is_locked && p.is_active));

        // reopening the same backend must not duplicate the seed
        let reopened = Store::open(backend as Arc<dyn StorageBackend>);
        assert_eq!(
            reopened.products().get_all().unwrap().len(),
            products.len()
        );
    }

    #[test]
    fn quotations_start_empty() {
        let store = memory_store();
        assert!(store.quotations().get_all().unwrap().is_empty());
    }

    #[test]
    fn seed_failure_is_skipped_not_fatal() {
        // quota too small for 38 products: open must still succeed, empty
        let backend = quota_backend(64);
        let store = Store::open(backend as Arc<dyn StorageBackend>);
        assert!(store.products().get_all().unwrap().is_empty());
    }

    #[test]
    fn cart_round_trip_and_clear() {
        let store = memory_store();
        assert!(store.load_cart().unwrap().is_empty());

        let mut cart = Vec::new();
        crate::entities::cart::add_to_cart(&mut cart, test_product("QD-C1", 1000), 2);
        store.save_cart(&cart).unwrap();
        assert_eq!(store.load_cart().unwrap(), cart);

        store.clear_cart().unwrap();
        assert!(store.load_cart().unwrap().is_empty());
    }

    #[test]
    fn full_admin_workflow_over_seeded_store() {
        use crate::{
            core::{catalog, quotes},
            entities::{QuoteStatus, cart},
        };
        use std::collections::HashSet;

        let store = memory_store();

        // Step 1: seeded catalog is all locked
        let seeded = store.products().get_all().unwrap();
        assert_eq!(seeded.len(), 38);
        assert!(seeded.iter().all(|p| p.is_locked));

        // Step 2: add a manual product; markup derives the selling price
        let mut manual = test_product("QD-900", 1000);
        assert_eq!(manual.selling_price, 1100);
        store.products().add(&manual).unwrap();

        // Step 3: inverse price edit back-derives the cost, then persists
        manual.set_selling_price(1050).unwrap();
        assert_eq!(manual.original_price, 955);
        assert!(store.products().update(&manual).unwrap());

        // Step 4: bulk delete selecting everything removes only the manual one
        let all = store.products().get_all().unwrap();
        let ids: HashSet<_> = all.iter().map(|p| p.id).collect();
        let survivors = catalog::bulk_delete(all, &ids);
        store.products().save_all(&survivors).unwrap();
        assert_eq!(store.products().get_all().unwrap().len(), 38);

        // Step 5: cart to quotation to adjustments
        let mut basket = Vec::new();
        cart::add_to_cart(&mut basket, manual, 2);
        store.save_cart(&basket).unwrap();

        let mut quote = cart::checkout(
            store.load_cart().unwrap(),
            "Q-2026-001",
            crate::entities::Customer::default(),
        );
        assert_eq!(quote.subtotal, 2100);
        quotes::apply_adjustments(&mut quote, 300, 2500).unwrap();
        assert_eq!(quote.grand_total, 0); // clamped, not negative
        quotes::set_status(&mut quote, QuoteStatus::Sent);

        store.quotations().add(&quote).unwrap();
        store.clear_cart().unwrap();

        let persisted = store.quotations().require(quote.id).unwrap();
        assert_eq!(persisted.status, QuoteStatus::Sent);
        assert_eq!(persisted.grand_total, 0);
        assert!(store.load_cart().unwrap().is_empty());
    }

    #[test]
    fn admin_flag_round_trip() {
        let store = memory_store();
        assert!(!store.is_admin().unwrap());
        store.set_admin(true).unwrap();
        assert!(store.is_admin().unwrap());
        store.set_admin(false).unwrap();
        assert!(!store.is_admin().unwrap());
    }
}
