//! Pure description of what the section shows for a given state.
//!
//! [`render_tree`] is the only place that combines the product list with
//! the view state. The terminal widget and the JSON output both consume the
//! resulting [`RenderTree`].

use super::filters::{CategoryFilter, TargetFilter};
use super::slice::{
    format_price_with, rank_badge, visible_with_limit, DEFAULT_CURRENCY_SUFFIX,
    INITIAL_PRODUCT_COUNT,
};
use super::state::ViewState;
use crate::model::{Product, ProductId};
use serde::Serialize;

/// Section heading.
pub const SECTION_TITLE: &str = "실시간 급상승 선물랭킹";

/// Presentation knobs that do not belong to the view state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayOptions {
    pub title: String,
    pub initial_count: usize,
    pub currency_suffix: String,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            title: SECTION_TITLE.to_string(),
            initial_count: INITIAL_PRODUCT_COUNT,
            currency_suffix: DEFAULT_CURRENCY_SUFFIX.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetTab {
    pub filter: TargetFilter,
    pub label: &'static str,
    pub icon: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTab {
    pub filter: CategoryFilter,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCard {
    /// 1-based position within the displayed slice.
    pub rank: usize,
    pub id: ProductId,
    pub name: String,
    pub image_url: String,
    pub brand_name: String,
    pub price_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderTree {
    pub title: String,
    pub target_tabs: Vec<TargetTab>,
    pub category_tabs: Vec<CategoryTab>,
    pub cards: Vec<ProductCard>,
    pub expanded: bool,
    pub toggle_label: &'static str,
}

impl RenderTree {
    pub fn active_target(&self) -> Option<TargetFilter> {
        self.target_tabs.iter().find(|t| t.active).map(|t| t.filter)
    }

    pub fn active_category(&self) -> Option<CategoryFilter> {
        self.category_tabs.iter().find(|c| c.active).map(|c| c.filter)
    }

    pub fn ranks(&self) -> Vec<usize> {
        self.cards.iter().map(|c| c.rank).collect()
    }
}

/// Build the render tree for `products` under `state`.
pub fn render_tree(products: &[Product], state: ViewState, options: &DisplayOptions) -> RenderTree {
    let target_tabs = TargetFilter::ORDERED
        .into_iter()
        .map(|filter| TargetTab {
            filter,
            label: filter.label(),
            icon: filter.icon(),
            active: state.is_target_active(filter),
        })
        .collect();

    let category_tabs = CategoryFilter::ORDERED
        .into_iter()
        .map(|filter| CategoryTab {
            filter,
            label: filter.label(),
            active: state.is_category_active(filter),
        })
        .collect();

    let cards = visible_with_limit(products, state.expanded, options.initial_count)
        .iter()
        .enumerate()
        .map(|(index, product)| ProductCard {
            rank: rank_badge(index),
            id: product.id.clone(),
            name: product.name.clone(),
            image_url: product.image_url.clone(),
            brand_name: product.brand_name().to_string(),
            price_text: format_price_with(product.selling_price(), &options.currency_suffix),
        })
        .collect();

    RenderTree {
        title: options.title.clone(),
        target_tabs,
        category_tabs,
        cards,
        expanded: state.expanded,
        toggle_label: state.toggle_label(),
    }
}
