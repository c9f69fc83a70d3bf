//! Product catalog business logic - filtering and bulk mutation.
//!
//! Every bulk operation is collection-in/collection-out: it takes the full
//! product list the caller just loaded, applies the change to the selected
//! ids, and returns the full updated list ready for `save_all`. Locked seed
//! records can be re-priced or re-imaged like anything else, but bulk delete
//! must never remove them, even when they are selected.

use crate::entities::{Category, Product};
use std::collections::HashSet;
use uuid::Uuid;

/// Filters the catalog by free-text query and category.
///
/// The query matches case-insensitively as a substring of name, code, or
/// category label; the category, when given, must match exactly. The two
/// predicates combine with AND. An empty query matches everything.
#[must_use]
pub fn filter(products: &[Product], query: &str, category: Option<Category>) -> Vec<Product> {
    let needle = query.trim().to_lowercase();
    products
        .iter()
        .filter(|p| category.is_none_or(|c| p.category == c))
        .filter(|p| {
            needle.is_empty()
                || p.name.to_lowercase().contains(&needle)
                || p.code.to_lowercase().contains(&needle)
                || p.category.label().to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Sets the visibility flag on every selected product; others pass through
/// unchanged.
#[must_use]
pub fn bulk_set_active(
    products: Vec<Product>,
    ids: &HashSet<Uuid>,
    is_active: bool,
) -> Vec<Product> {
    products
        .into_iter()
        .map(|mut p| {
            if ids.contains(&p.id) {
                p.is_active = is_active;
            }
            p
        })
        .collect()
}

/// Reassigns the category of every selected product. `None` means the caller
/// left the category picker empty: the whole operation is a no-op.
#[must_use]
pub fn bulk_set_category(
    products: Vec<Product>,
    ids: &HashSet<Uuid>,
    category: Option<Category>,
) -> Vec<Product> {
    let Some(category) = category else {
        return products;
    };
    products
        .into_iter()
        .map(|mut p| {
            if ids.contains(&p.id) {
                p.category = category;
            }
            p
        })
        .collect()
}

/// Removes every selected product except locked ones, which survive even when
/// their id is in the selection.
#[must_use]
pub fn bulk_delete(products: Vec<Product>, ids: &HashSet<Uuid>) -> Vec<Product> {
    products
        .into_iter()
        .filter(|p| p.is_locked || !ids.contains(&p.id))
        .collect()
}
