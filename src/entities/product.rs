//! Product entity - a catalog record with a derived selling price.
//!
//! Prices are a linked pair: the standard edit path sets the base cost and
//! derives the selling price through the markup rule, while the inverse path
//! edits the selling price and back-derives the cost. Editing any other field
//! never touches either price. Locked products come from the seeded reference
//! catalog; their identity fields are read-only in the UI but price and image
//! edits remain allowed, so nothing here blocks them.

use crate::{
    core::pricing,
    errors::{Error, Result},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Closed set of furniture categories.
///
/// Extending the set is a code change, not a data migration. The serde names
/// double as the human-facing labels used in filters and AI prompts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Task and mesh chairs.
    #[serde(rename = "Office Chair")]
    OfficeChair,
    /// High-back managerial seating.
    #[serde(rename = "Executive Chair")]
    ExecutiveChair,
    /// Standard desks and staff tables.
    #[serde(rename = "Office Table")]
    OfficeTable,
    /// Managerial desks.
    #[serde(rename = "Executive Table")]
    ExecutiveTable,
    /// Meeting and boardroom tables.
    #[serde(rename = "Conference Table")]
    ConferenceTable,
    /// Front-desk counters.
    #[serde(rename = "Reception Desk")]
    ReceptionDesk,
    /// Lounge and visitor sofas.
    #[serde(rename = "Sofa")]
    Sofa,
    /// Wooden and steel storage cabinets.
    #[serde(rename = "Cabinet")]
    Cabinet,
    /// Mobile and fixed pedestal drawers.
    #[serde(rename = "Pedestal")]
    Pedestal,
    /// Modular workstations and partitions.
    #[serde(rename = "Workstation")]
    Workstation,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 10] = [
        Category::OfficeChair,
        Category::ExecutiveChair,
        Category::OfficeTable,
        Category::ExecutiveTable,
        Category::ConferenceTable,
        Category::ReceptionDesk,
        Category::Sofa,
        Category::Cabinet,
        Category::Pedestal,
        Category::Workstation,
    ];

    /// Human-facing label, identical to the serialized form.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Category::OfficeChair => "Office Chair",
            Category::ExecutiveChair => "Executive Chair",
            Category::OfficeTable => "Office Table",
            Category::ExecutiveTable => "Executive Table",
            Category::ConferenceTable => "Conference Table",
            Category::ReceptionDesk => "Reception Desk",
            Category::Sofa => "Sofa",
            Category::Cabinet => "Cabinet",
            Category::Pedestal => "Pedestal",
            Category::Workstation => "Workstation",
        }
    }

    /// Case-insensitive label lookup, used when parsing AI suggestions.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Category> {
        let wanted = label.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A catalog product.
///
/// `images` is ordered and order is meaningful: index 0 is the primary display
/// image (the catalog thumbnail). Entries are either remote `http(s)` URLs or
/// embedded `data:` URIs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier, assigned at creation and immutable.
    pub id: Uuid,
    /// Short human-readable SKU. Unique in practice but not enforced.
    pub code: String,
    /// Display name.
    pub name: String,
    /// Furniture category.
    pub category: Category,
    /// Free-text dimensions, e.g. "120 x 60 x 75 cm".
    #[serde(default)]
    pub dimensions: Option<String>,
    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// Base cost in whole pesos.
    pub original_price: i64,
    /// Customer-facing price in whole pesos, derived from `original_price`
    /// through the markup rule (or entered directly via the inverse path).
    pub selling_price: i64,
    /// Ordered image URIs, primary first.
    #[serde(default)]
    pub images: Vec<String>,
    /// True for records seeded from the reference catalog; identity fields are
    /// read-only in the editor and bulk delete must never remove them.
    #[serde(default)]
    pub is_locked: bool,
    /// Visibility flag: inactive products are hidden from the public catalog
    /// but retained in storage.
    #[serde(default = "default_active")]
    pub is_active: bool,
}

const fn default_active() -> bool {
    true
}

impl Product {
    /// Creates an unlocked, active product with a fresh id and the selling
    /// price derived from `original_price`.
    ///
    /// # Errors
    /// Returns a validation error if `code` or `name` is blank or the cost is
    /// negative.
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        category: Category,
        original_price: i64,
    ) -> Result<Product> {
        let code = code.into();
        let name = name.into();
        if code.trim().is_empty() {
            return Err(Error::validation("product code cannot be empty"));
        }
        if name.trim().is_empty() {
            return Err(Error::validation("product name cannot be empty"));
        }
        if original_price < 0 {
            return Err(Error::validation(format!(
                "cost cannot be negative: {original_price}"
            )));
        }
        Ok(Product {
            id: Uuid::new_v4(),
            code: code.trim().to_string(),
            name: name.trim().to_string(),
            category,
            dimensions: None,
            description: None,
            original_price,
            selling_price: pricing::selling_from_cost(original_price),
            images: Vec::new(),
            is_locked: false,
            is_active: true,
        })
    }

    /// Standard price edit: sets the base cost and re-derives the selling
    /// price, keeping `selling_price == ceil(original_price * 1.10)`.
    ///
    /// # Errors
    /// Returns a validation error for a negative cost.
    pub fn set_original_price(&mut self, cost: i64) -> Result<()> {
        if cost < 0 {
            return Err(Error::validation(format!("cost cannot be negative: {cost}")));
        }
        self.original_price = cost;
        self.selling_price = pricing::selling_from_cost(cost);
        Ok(())
    }

    /// Inverse price edit: the entered selling price is kept as-is and the
    /// base cost is back-derived as `round(selling_price / 1.10)`. Rounding
    /// drift from this path is accepted, not corrected.
    ///
    /// # Errors
    /// Returns a validation error for a negative price.
    pub fn set_selling_price(&mut self, price: i64) -> Result<()> {
        if price < 0 {
            return Err(Error::validation(format!(
                "selling price cannot be negative: {price}"
            )));
        }
        self.selling_price = price;
        self.original_price = pricing::cost_from_selling(price);
        Ok(())
    }

    /// The catalog thumbnail: the first image, if any.
    #[must_use]
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn new_product_derives_selling_price() {
        let product = Product::new("QD-100", "Staff Desk", Category::OfficeTable, 1000).unwrap();
        assert_eq!(product.selling_price, 1100);
        assert!(!product.is_locked);
        assert!(product.is_active);
    }

    #[test]
    fn new_product_rejects_blank_identity() {
        assert!(Product::new("", "Desk", Category::OfficeTable, 100).is_err());
        assert!(Product::new("QD-1", "   ", Category::OfficeTable, 100).is_err());
        assert!(Product::new("QD-1", "Desk", Category::OfficeTable, -5).is_err());
    }

    #[test]
    fn cost_edit_keeps_markup_invariant() {
        let mut product = Product::new("QD-100", "Staff Desk", Category::OfficeTable, 1000).unwrap();
        product.set_original_price(999).unwrap();
        assert_eq!(product.selling_price, 1099);
        assert!(product.set_original_price(-1).is_err());
        // failed edit leaves the record untouched
        assert_eq!(product.original_price, 999);
    }

    #[test]
    fn selling_edit_back_derives_cost() {
        let mut product = Product::new("QD-100", "Staff Desk", Category::OfficeTable, 1000).unwrap();
        product.set_selling_price(1050).unwrap();
        assert_eq!(product.original_price, 955);
        assert_eq!(product.selling_price, 1050); // kept as entered
    }

    #[test]
    fn non_price_edits_leave_prices_alone() {
        let mut product = Product::new("QD-100", "Staff Desk", Category::OfficeTable, 1000).unwrap();
        product.name = "Renamed Desk".to_string();
        product.category = Category::ExecutiveTable;
        assert_eq!(product.original_price, 1000);
        assert_eq!(product.selling_price, 1100);
    }

    #[test]
    fn primary_image_is_first() {
        let mut product = Product::new("QD-100", "Staff Desk", Category::OfficeTable, 1000).unwrap();
        assert!(product.primary_image().is_none());
        product.images = vec![
            "https://cdn.example.com/front.png".to_string(),
            "https://cdn.example.com/side.png".to_string(),
        ];
        assert_eq!(product.primary_image(), Some("https://cdn.example.com/front.png"));
    }

    #[test]
    fn category_labels_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_label(category.label()), Some(category));
        }
        assert_eq!(Category::from_label("office chair"), Some(Category::OfficeChair));
        assert_eq!(Category::from_label("Throne"), None);
    }

    #[test]
    fn category_serializes_as_label() {
        let json = serde_json::to_string(&Category::OfficeChair).unwrap();
        assert_eq!(json, "\"Office Chair\"");
    }
}
