//! Quotation entity - a customer's priced request with embedded product snapshots.
//!
//! Each line item carries a full copy of the product at quote time so that
//! later catalog edits never change what was quoted. `subtotal` is computed
//! once at creation and stored as a fact; only the adjustments (delivery fee,
//! discount) are edited afterwards, and every such edit must go through
//! `core::quotes::apply_adjustments` so the grand total is recomputed.

use crate::entities::product::Product;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Quotation workflow state.
///
/// The transition graph is deliberately complete: any state can move to any
/// other, and nothing is terminal (a rejected quote can be reopened to draft).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuoteStatus {
    /// Newly created from checkout, not yet sent.
    Draft,
    /// Delivered to the customer.
    Sent,
    /// Accepted by the customer.
    Approved,
    /// Declined by the customer.
    Rejected,
}

impl QuoteStatus {
    /// Human-facing label, identical to the serialized form.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            QuoteStatus::Draft => "Draft",
            QuoteStatus::Sent => "Sent",
            QuoteStatus::Approved => "Approved",
            QuoteStatus::Rejected => "Rejected",
        }
    }
}

impl std::fmt::Display for QuoteStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Customer contact details. Plain strings, no validation beyond presence.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Contact person.
    pub name: String,
    /// Company name, may be empty for walk-in customers.
    #[serde(default)]
    pub company: String,
    /// Email address.
    #[serde(default)]
    pub email: String,
    /// Phone number.
    #[serde(default)]
    pub phone: String,
    /// Delivery address.
    #[serde(default)]
    pub address: String,
}

/// One quotation line: a product snapshot frozen at quote time plus quantity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuoteItem {
    /// Product as it was when the quote was created; never refreshed from the
    /// live catalog.
    pub product: Product,
    /// Units quoted.
    pub quantity: u32,
}

impl QuoteItem {
    /// Line total in whole pesos.
    #[must_use]
    pub fn line_total(&self) -> i64 {
        self.product.selling_price * i64::from(self.quantity)
    }
}

/// A submitted quotation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quotation {
    /// Opaque unique identifier.
    pub id: Uuid,
    /// Human-facing quote number, separately editable.
    pub number: String,
    /// Creation timestamp.
    pub date: DateTime<Utc>,
    /// Customer details.
    pub customer: Customer,
    /// Ordered line items.
    pub items: Vec<QuoteItem>,
    /// Workflow state.
    pub status: QuoteStatus,
    /// Sum of line totals, computed at creation and stored thereafter.
    pub subtotal: i64,
    /// Non-negative delivery adjustment in whole pesos.
    #[serde(default)]
    pub delivery_fee: i64,
    /// Non-negative discount in whole pesos.
    #[serde(default)]
    pub discount: i64,
    /// `max(0, subtotal + delivery_fee - discount)`; recomputed on every
    /// adjustment edit before persisting.
    pub grand_total: i64,
}

impl Quotation {
    /// Creates a draft quotation from already-snapshotted line items.
    /// `subtotal` and `grand_total` start equal since no adjustments exist yet.
    #[must_use]
    pub fn new(number: impl Into<String>, customer: Customer, items: Vec<QuoteItem>) -> Quotation {
        let subtotal: i64 = items.iter().map(QuoteItem::line_total).sum();
        Quotation {
            id: Uuid::new_v4(),
            number: number.into(),
            date: Utc::now(),
            customer,
            items,
            status: QuoteStatus::Draft,
            subtotal,
            delivery_fee: 0,
            discount: 0,
            grand_total: subtotal,
        }
    }
}
