//! Core business logic - pure, store-agnostic operations over the entities.
//!
//! Everything here is collection-in/collection-out or draft-mutating; nothing
//! touches a storage backend. The admin flow is: load a collection from the
//! store, run it through these functions, save the result back.

pub mod catalog;
pub mod images;
pub mod pricing;
pub mod quotes;
