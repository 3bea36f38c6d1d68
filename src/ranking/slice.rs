//! Display slice and card text helpers.

use crate::model::Product;

/// Number of cards shown while the section is collapsed.
pub const INITIAL_PRODUCT_COUNT: usize = 6;

/// Suffix appended to every price.
pub const DEFAULT_CURRENCY_SUFFIX: &str = "원";

/// Products to display: all of them when expanded, otherwise the first
/// [`INITIAL_PRODUCT_COUNT`] in the order supplied.
pub fn visible(products: &[Product], expanded: bool) -> &[Product] {
    visible_with_limit(products, expanded, INITIAL_PRODUCT_COUNT)
}

/// Like [`visible`] with a configurable collapsed count.
pub fn visible_with_limit(products: &[Product], expanded: bool, limit: usize) -> &[Product] {
    if expanded {
        products
    } else {
        &products[..products.len().min(limit)]
    }
}

/// Rank shown on the card at `index` of the displayed slice.
pub fn rank_badge(index: usize) -> usize {
    index + 1
}

/// `10000` becomes `"10000 원"`. No grouping separators.
pub fn format_price(selling_price: f64) -> String {
    format_price_with(selling_price, DEFAULT_CURRENCY_SUFFIX)
}

pub fn format_price_with(selling_price: f64, suffix: &str) -> String {
    format!("{selling_price} {suffix}")
}
