//! Product data supplied to the ranking section.
//!
//! Products arrive fully formed from the storefront's query layer and are
//! never re-ranked here. The [`catalog`] module is the thin loader that
//! stands in for that layer on the command line.

pub mod catalog;
mod product;

pub use catalog::{ensure_unique_ids, load_products, parse_products};
pub use product::{BrandInfo, Price, Product, ProductId};
