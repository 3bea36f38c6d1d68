//! The ranking section's logic: filters, view state, display slice and the
//! render tree derived from them.
//!
//! Nothing in here touches the terminal. The `tui` module draws a
//! [`RenderTree`] and translates input into [`Interaction`]s.

mod click;
mod filters;
mod render_tree;
mod slice;
mod state;

#[cfg(test)]
pub(crate) use click::log_capture;
pub use click::{click_product, LogClickHandler, ProductClickHandler};
pub use filters::{icon_for_label, CategoryFilter, CycleFilter, TargetFilter, FALLBACK_ICON};
pub use render_tree::{
    render_tree, CategoryTab, DisplayOptions, ProductCard, RenderTree, TargetTab, SECTION_TITLE,
};
pub use slice::{
    format_price, format_price_with, rank_badge, visible, visible_with_limit,
    DEFAULT_CURRENCY_SUFFIX, INITIAL_PRODUCT_COUNT,
};
pub use state::{Interaction, ViewState, COLLAPSE_LABEL, SHOW_MORE_LABEL};
