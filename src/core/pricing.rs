//! Pricing rule - fixed 10% markup between base cost and selling price.
//!
//! All amounts are whole pesos (`i64`). The forward direction rounds up so the
//! store never undercharges; the inverse direction rounds half-up. The two are
//! inverse-ish but not exact inverses: a round-trip may drift by one peso, which
//! is accepted rather than corrected. Both functions expect non-negative input;
//! the entity setters validate before calling in here.

/// Markup numerator: selling price is cost * 11 / 10.
const MARKUP_NUM: i64 = 11;
/// Markup denominator.
const MARKUP_DEN: i64 = 10;

/// Derives the customer-facing selling price from a base cost:
/// `ceil(cost * 1.10)`, in whole pesos.
#[must_use]
pub fn selling_from_cost(cost: i64) -> i64 {
    debug_assert!(cost >= 0, "cost must be non-negative");
    (cost * MARKUP_NUM + (MARKUP_DEN - 1)) / MARKUP_DEN
}

/// Derives the base cost back from an edited selling price:
/// `round(price / 1.10)` with half-up rounding, in whole pesos.
///
/// This is the inverse edit path. Because both directions round, the pair of
/// price fields can legitimately drift by one peso after a manual selling-price
/// edit; that drift is kept as entered.
#[must_use]
pub fn cost_from_selling(price: i64) -> i64 {
    debug_assert!(price >= 0, "price must be non-negative");
    // round(price * 10 / 11) half-up: (2*num + den) / (2*den)
    (price * 2 * MARKUP_DEN + MARKUP_NUM) / (2 * MARKUP_NUM)
}
