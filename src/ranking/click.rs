//! Product click capability.
//!
//! Clicking a card has no effect on the view state. The side effect lives
//! behind [`ProductClickHandler`] so callers decide what a click does; the
//! default only logs.

use crate::model::Product;

pub trait ProductClickHandler {
    fn on_product_click(&self, product: &Product);
}

impl<F> ProductClickHandler for F
where
    F: Fn(&Product),
{
    fn on_product_click(&self, product: &Product) {
        self(product);
    }
}

/// Emits one diagnostic `tracing` event per click.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogClickHandler;

impl ProductClickHandler for LogClickHandler {
    fn on_product_click(&self, product: &Product) {
        tracing::info!(id = %product.id, "상품 클릭: {}", product.name);
    }
}

/// Resolve the card at `index` of `displayed` and hand it to `handler`.
///
/// Returns the clicked product, or `None` when the index is past the slice.
pub fn click_product<'a>(
    displayed: &'a [Product],
    index: usize,
    handler: &dyn ProductClickHandler,
) -> Option<&'a Product> {
    let product = displayed.get(index)?;
    handler.on_product_click(product);
    Some(product)
}


#[cfg(test)]
mod tests {
    use super::log_capture::capture;
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_closure_handler_receives_product() {
        let clicked = RefCell::new(Vec::new());
        let handler = |p: &Product| clicked.borrow_mut().push(p.name.clone());
        let products = vec![Product::new(1u64, "Cake"), Product::new(2u64, "Coffee")];

        let hit = click_product(&products, 1, &handler);

        assert_eq!(hit.map(|p| p.name.as_str()), Some("Coffee"));
        assert_eq!(*clicked.borrow(), vec!["Coffee".to_string()]);
    }

    #[test]
    fn test_out_of_range_click_is_ignored() {
        let clicked = RefCell::new(0usize);
        let handler = |_: &Product| *clicked.borrow_mut() += 1;

        assert!(click_product(&[], 0, &handler).is_none());
        assert_eq!(*clicked.borrow(), 0);
    }

    #[test]
    fn test_log_handler_does_not_panic_without_subscriber() {
        LogClickHandler.on_product_click(&Product::new(9u64, "Flowers"));
    }

    #[test]
    fn test_log_handler_emits_one_line_per_click() {
        let products = vec![Product::new(9u64, "Flowers"), Product::new(10u64, "Candle")];
        let logs = capture(|| {
            click_product(&products, 0, &LogClickHandler);
            click_product(&products, 5, &LogClickHandler);
        });

        let lines = logs.lines();
        assert_eq!(lines.len(), 1, "{lines:?}");
        assert!(lines[0].contains("상품 클릭: Flowers"), "{lines:?}");
        assert!(lines[0].contains("INFO"));
    }
}
