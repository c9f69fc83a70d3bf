//! Cart entity - transient client-side accumulation before checkout.
//!
//! A cart item is the same product-snapshot-plus-quantity shape a quotation
//! line uses; checkout simply freezes the cart into a draft quotation. The
//! cart itself has no persistence contract beyond the store's cart slot.

use crate::entities::{
    product::Product,
    quotation::{Customer, Quotation, QuoteItem},
};
use serde::{Deserialize, Serialize};

/// One cart line: a product snapshot plus quantity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Product as it was when added to the cart.
    pub product: Product,
    /// Units requested.
    pub quantity: u32,
}

/// Adds a product to the cart, merging by product id: adding a product that is
/// already in the cart bumps its quantity instead of appending a second line.
pub fn add_to_cart(cart: &mut Vec<CartItem>, product: Product, quantity: u32) {
    if let Some(line) = cart.iter_mut().find(|line| line.product.id == product.id) {
        line.quantity += quantity;
    } else {
        cart.push(CartItem { product, quantity });
    }
}

/// Sum of `selling_price * quantity` over the cart, in whole pesos.
#[must_use]
pub fn cart_subtotal(cart: &[CartItem]) -> i64 {
    cart.iter()
        .map(|line| line.product.selling_price * i64::from(line.quantity))
        .sum()
}

/// Freezes the cart into a draft quotation with the given number and customer.
/// The quotation's subtotal is computed here, once, and stored.
#[must_use]
pub fn checkout(cart: Vec<CartItem>, number: impl Into<String>, customer: Customer) -> Quotation {
    let items = cart
        .into_iter()
        .map(|line| QuoteItem {
            product: line.product,
            quantity: line.quantity,
        })
        .collect();
    Quotation::new(number, customer, items)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::entities::product::Category;

    #[test]
    fn adding_same_product_merges_quantity() {
        let product = Product::new("QD-1", "Chair", Category::OfficeChair, 1000).unwrap();
        let mut cart = Vec::new();
        add_to_cart(&mut cart, product.clone(), 2);
        add_to_cart(&mut cart, product, 3);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart[0].quantity, 5);
    }

    #[test]
    fn checkout_freezes_subtotal() {
        let chair = Product::new("QD-1", "Chair", Category::OfficeChair, 1000).unwrap();
        let desk = Product::new("QD-2", "Desk", Category::OfficeTable, 2000).unwrap();
        let mut cart = Vec::new();
        add_to_cart(&mut cart, chair, 2);
        add_to_cart(&mut cart, desk, 1);
        assert_eq!(cart_subtotal(&cart), 1100 * 2 + 2200);

        let quote = checkout(cart, "Q-2026-003", Customer::default());
        assert_eq!(quote.subtotal, 4400);
        assert_eq!(quote.items.len(), 2);
    }
}
