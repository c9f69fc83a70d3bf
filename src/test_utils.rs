//! Shared test utilities.
//!
//! Helper functions for building memory-backed stores and test entities with
//! sensible defaults. Only compiled for tests.

use crate::{
    entities::{Category, Customer, Product, Quotation},
    store::{MemoryBackend, StorageBackend, Store},
};
use std::sync::Arc;

/// A fresh unlimited in-memory backend.
pub fn memory_backend() -> Arc<MemoryBackend> {
    Arc::new(MemoryBackend::new())
}

/// An in-memory backend that fails with `StorageFull` once total stored
/// bytes would exceed `quota_bytes`.
pub fn quota_backend(quota_bytes: usize) -> Arc<MemoryBackend> {
    Arc::new(MemoryBackend::with_quota(quota_bytes))
}

/// Opens a store over the given backend.
pub fn store_over(backend: Arc<MemoryBackend>) -> Store {
    Store::open(backend as Arc<dyn StorageBackend>)
}

/// A memory-backed store with the reference catalog seeded.
pub fn memory_store() -> Store {
    store_over(memory_backend())
}

/// A memory-backed store with the seeded catalog wiped, for tests that want
/// full control over the product collection.
pub fn empty_store() -> Store {
    let store = memory_store();
    store
        .products()
        .save_all(&[])
        .unwrap_or_else(|e| panic!("failed to empty seeded store: {e}"));
    store
}

/// An unlocked office-table product with the given code and cost.
///
/// # Defaults
/// * `name`: "Test Product <code>"
/// * `category`: `OfficeTable`
pub fn test_product(code: &str, cost: i64) -> Product {
    let mut product = Product::new(code, format!("Test Product {code}"), Category::OfficeTable, cost)
        .unwrap_or_else(|e| panic!("test product invalid: {e}"));
    product.description = Some("A test product".to_string());
    product
}

/// A locked (seeded-style) product with explicit name and category.
pub fn locked_product(code: &str, name: &str, category: Category, cost: i64) -> Product {
    let mut product = Product::new(code, name, category, cost)
        .unwrap_or_else(|e| panic!("test product invalid: {e}"));
    product.is_locked = true;
    product
}

/// A draft quotation with a single synthetic line whose selling price equals
/// `subtotal`, so the quote's stored subtotal is exactly `subtotal`.
pub fn test_quotation(number: &str, subtotal: i64) -> Quotation {
    let mut product = test_product("QD-LINE", 0);
    product.selling_price = subtotal;
    Quotation::new(
        number,
        Customer {
            name: "Test Customer".to_string(),
            ..Customer::default()
        },
        vec![crate::entities::QuoteItem {
            product,
            quantity: 1,
        }],
    )
}
