//! `quote-desk` - back-office core for an office furniture storefront
//!
//! This crate provides the data layer behind a single-tenant storefront and
//! its admin dashboard: whole-collection persistence for products and
//! quotations, the fixed-markup pricing rule, catalog and quotation managers,
//! and pluggable seams for the PDF-export and generative-AI collaborators.

// Deny the most critical lints that could lead to bugs or security issues
#![deny(
    // Security and correctness
    unsafe_code,
    unsafe_op_in_unsafe_fn,

    // Code quality - things that are almost always bugs
    unreachable_code,
    unreachable_patterns,
    unused_must_use,

    // Documentation - broken links are bugs
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
)]
// Warn on things that should be fixed but aren't necessarily bugs
#![warn(
    missing_docs,

    // Clippy categories for overall code quality
    clippy::all,
    clippy::pedantic,

    // Correctness
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::exit,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used,

    // Style consistency
    clippy::enum_glob_use,
    clippy::inconsistent_struct_constructor,
    clippy::must_use_candidate,
    clippy::semicolon_if_nothing_returned,
    clippy::wildcard_imports,

    // Future compatibility
    future_incompatible,
    rust_2018_idioms,
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,  // Common pattern in Rust
    clippy::missing_errors_doc,        // Will add gradually
    clippy::missing_panics_doc,        // Will add gradually
)]

/// Generative-AI collaborator seam - prompts, reply parsing, orchestration
pub mod ai;
/// Configuration loading for the admin binary
pub mod config;
/// Core business logic - pricing, catalog, image-list, and quotation operations
pub mod core;
/// Persisted data model - products, quotations, cart
pub mod entities;
/// Unified error types and result handling
pub mod errors;
/// Document-export collaborator seam - view preparation and renderer trait
pub mod export;
/// The fixed reference catalog seeded on first run
pub mod seed;
/// Persistent store - injectable backends and whole-collection CRUD
pub mod store;

#[cfg(test)]
pub mod test_utils;
