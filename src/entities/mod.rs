//! Entity module - the persisted data model.
//!
//! Plain serde structs: products, quotations with embedded product snapshots,
//! and the transient cart. Each record type carries its own id; the store
//! serializes whole collections of these as JSON.

pub mod cart;
pub mod product;
pub mod quotation;

pub use cart::CartItem;
pub use product::{Category, Product};
pub use quotation::{Customer, Quotation, QuoteItem, QuoteStatus};
