//! **The "실시간 급상승 선물랭킹" storefront section, in the terminal.**
//!
//! `gift-ranking` shows a ranked list of gift products under a row of
//! audience tabs (전체 / 여성이 / 남성이 / 청소년이) and a strip of category
//! buttons. The first six products are shown until "더보기" expands the list;
//! "접기" collapses it again. Clicking a product reports it through a
//! pluggable handler.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: [`Product`] and the JSON catalog loader.
//! - **[`ranking`]**: the section's logic. [`ViewState`] holds the selected
//!   tabs and expansion, [`Interaction`] describes one user action, and
//!   [`render_tree`] turns products plus state into a [`RenderTree`]. Nothing
//!   in here knows about terminals.
//! - **[`tui`]**: draws a [`RenderTree`] with ratatui and maps key and mouse
//!   input back to [`Interaction`]s.
//! - **[`config`]**: YAML configuration, validation and persisted preferences.
//! - **[`cli`]**: handlers behind the `gift-ranking` binary.
//!
//! ## Getting Started
//!
//! ```
//! use gift_ranking::{render_tree, DisplayOptions, Interaction, Product, ViewState};
//!
//! let products: Vec<Product> = (1..=8u64)
//!     .map(|i| Product::new(i, format!("Gift {i}")).with_price(10000.0))
//!     .collect();
//!
//! let state = ViewState::new();
//! let tree = render_tree(&products, state, &DisplayOptions::default());
//! assert_eq!(tree.cards.len(), 6);
//! assert_eq!(tree.toggle_label, "더보기");
//! assert_eq!(tree.cards[0].price_text, "10000 원");
//!
//! let expanded = state.apply(Interaction::ToggleExpanded);
//! let tree = render_tree(&products, expanded, &DisplayOptions::default());
//! assert_eq!(tree.ranks(), vec![1, 2, 3, 4, 5, 6, 7, 8]);
//! assert_eq!(tree.toggle_label, "접기");
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
// Pedantic lints: allow categories that are design choices for this codebase
#![allow(
    // Cast safety: usize↔u16 casts are pervasive in TUI layout math and all
    // values are bounded by the terminal size
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    // Doc completeness: # Errors / # Panics sections are aspirational
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // TUI render functions are inherently long, splitting hurts readability
    clippy::too_many_lines,
    // Variable names like `min`/`mid` or `old`/`new` are clear in context
    clippy::similar_names
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod ranking;
pub mod tui;

// Re-export main types for convenience
pub use config::{AppConfig, ConfigError, DisplayConfig, TuiConfig, Validatable};
pub use error::{ErrorContext, RankingError, Result};
pub use model::{load_products, parse_products, BrandInfo, Price, Product, ProductId};
pub use ranking::{
    click_product, render_tree, CategoryFilter, CycleFilter, DisplayOptions, Interaction,
    LogClickHandler, ProductClickHandler, RenderTree, TargetFilter, ViewState,
};
