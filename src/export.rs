//! Document export - the PDF collaborator seam.
//!
//! Rendering and pagination belong to an external library behind the
//! [`DocumentRenderer`] trait. The core's obligation is to hand that
//! collaborator a stable, already-filtered-and-sorted product view and
//! resolved image bytes; nothing here holds state.

use crate::{
    core::catalog,
    entities::{Category, Product, Quotation},
    errors::Result,
};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

/// Sort order for a catalog export.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Alphabetical by product name.
    #[default]
    Name,
    /// Grouped by category label.
    Category,
    /// Cheapest first.
    PriceAsc,
    /// Most expensive first.
    PriceDesc,
    /// By SKU code.
    Code,
}

/// Which columns the rendered catalog includes.
#[derive(Clone, Copy, Debug)]
pub struct ColumnFlags {
    /// SKU code column.
    pub code: bool,
    /// Category column.
    pub category: bool,
    /// Dimensions column.
    pub dimensions: bool,
    /// Description column.
    pub description: bool,
    /// Selling-price column.
    pub price: bool,
    /// Per-row primary image.
    pub image: bool,
}

impl Default for ColumnFlags {
    fn default() -> ColumnFlags {
        ColumnFlags {
            code: true,
            category: true,
            dimensions: true,
            description: false,
            price: true,
            image: true,
        }
    }
}

/// Layout options passed through to the renderer.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExportOptions {
    /// Column-inclusion flags.
    pub columns: ColumnFlags,
    /// Sort key for the product rows.
    pub sort: SortKey,
}

/// Produces the stable filtered-and-sorted view a renderer consumes.
///
/// Filtering reuses the catalog manager's predicates; the sort is stable, so
/// products equal under the key keep their collection order.
#[must_use]
pub fn prepare_products(
    products: &[Product],
    query: &str,
    category: Option<Category>,
    sort: SortKey,
) -> Vec<Product> {
    let mut view = catalog::filter(products, query, category);
    match sort {
        SortKey::Name => view.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase())),
        SortKey::Category => view.sort_by(|a, b| a.category.label().cmp(b.category.label())),
        SortKey::PriceAsc => view.sort_by_key(|p| p.selling_price),
        SortKey::PriceDesc => view.sort_by_key(|p| std::cmp::Reverse(p.selling_price)),
        SortKey::Code => view.sort_by(|a, b| a.code.cmp(&b.code)),
    }
    view
}

/// Decodes an embedded `data:` URI to raw image bytes for the renderer.
/// Returns `None` for remote URLs (the renderer fetches those itself) and for
/// malformed data URIs.
#[must_use]
pub fn data_uri_bytes(uri: &str) -> Option<Vec<u8>> {
    let rest = uri.strip_prefix("data:")?;
    let (_, encoded) = rest.split_once(";base64,")?;
    BASE64.decode(encoded).ok()
}

/// The external rendering collaborator.
///
/// Implementations turn a prepared view into a downloadable paginated
/// document. The core never blocks its data-integrity guarantees on this: a
/// render failure surfaces to the caller and touches no persisted state.
pub trait DocumentRenderer {
    /// Renders a product catalog with the given layout options.
    fn render_catalog(&self, products: &[Product], options: &ExportOptions) -> Result<Vec<u8>>;

    /// Renders a single quotation.
    fn render_quotation(&self, quote: &Quotation) -> Result<Vec<u8>>;
}
