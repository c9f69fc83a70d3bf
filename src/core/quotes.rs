//! Quotation business logic - adjustments, status, and filtering.
//!
//! The one true invariant-enforcing operation in the system lives here:
//! [`apply_adjustments`] recomputes the grand total from the stored subtotal
//! and the two adjustments on every edit. Callers must route every fee or
//! discount change through it before persisting; a stale grand total in the
//! store is a defect, not an accepted state.

use crate::{
    entities::{Quotation, QuoteStatus},
    errors::{Error, Result},
};

/// `max(0, subtotal + delivery_fee - discount)`: the total never goes
/// negative, even when the discount exceeds everything else.
#[must_use]
pub fn grand_total(subtotal: i64, delivery_fee: i64, discount: i64) -> i64 {
    (subtotal + delivery_fee - discount).max(0)
}

/// Sets the delivery fee and discount and unconditionally recomputes the
/// grand total from the stored subtotal.
///
/// # Errors
/// Returns a validation error when either adjustment is negative; the
/// quotation is left untouched in that case.
pub fn apply_adjustments(quote: &mut Quotation, delivery_fee: i64, discount: i64) -> Result<()> {
    if delivery_fee < 0 {
        return Err(Error::validation(format!(
            "delivery fee cannot be negative: {delivery_fee}"
        )));
    }
    if discount < 0 {
        return Err(Error::validation(format!(
            "discount cannot be negative: {discount}"
        )));
    }
    quote.delivery_fee = delivery_fee;
    quote.discount = discount;
    quote.grand_total = grand_total(quote.subtotal, delivery_fee, discount);
    Ok(())
}

/// Moves a quotation to `status`. The transition graph is complete: any state
/// is reachable from any other and nothing is terminal, so there is no table
/// to consult and no error to return.
pub fn set_status(quote: &mut Quotation, status: QuoteStatus) {
    quote.status = status;
}

/// Filters quotations by case-insensitive substring match against the quote
/// number, the customer name, or the status label. An empty query matches
/// everything.
#[must_use]
pub fn filter(quotes: &[Quotation], query: &str) -> Vec<Quotation> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return quotes.to_vec();
    }
    quotes
        .iter()
        .filter(|q| {
            q.number.to_lowercase().contains(&needle)
                || q.customer.name.to_lowercase().contains(&needle)
                || q.status.label().to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}
