//! Render command handler.
//!
//! Implements the `render` subcommand: draw the section once for a given
//! state and print it as text or as the JSON render tree.

use crate::config::AppConfig;
use crate::error::{RankingError, Result};
use crate::model::{load_products, Product};
use crate::ranking::{click_product, render_tree, visible_with_limit, LogClickHandler, ViewState};
use crate::tui::{buffer_to_text, render_to_buffer};
use std::path::PathBuf;

/// Output format for the `render` subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum RenderFormat {
    /// The section as it appears in the terminal, without colors
    #[default]
    Text,
    /// The render tree as JSON
    Json,
}

/// Configuration for the render command
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Product catalog, or `-` for stdin
    pub products_path: PathBuf,
    pub state: ViewState,
    /// Ids of displayed products to click before rendering
    pub click_ids: Vec<String>,
    pub format: RenderFormat,
    pub width: u16,
    pub app: AppConfig,
}

/// Run the render command
#[allow(clippy::needless_pass_by_value)]
pub fn run_render(config: RenderConfig) -> Result<()> {
    let products = load_products(&config.products_path)?;
    let output = render_output(&products, &config)?;
    println!("{output}");
    Ok(())
}

/// Produce the text `run_render` prints.
pub fn render_output(products: &[Product], config: &RenderConfig) -> Result<String> {
    if config.width < crate::tui::constants::MIN_WIDTH {
        return Err(RankingError::validation(format!(
            "width {} is below the minimum of {}",
            config.width,
            crate::tui::constants::MIN_WIDTH
        )));
    }

    let options = config.app.display.options();
    let displayed = visible_with_limit(products, config.state.expanded, options.initial_count);
    for id in &config.click_ids {
        let clicked = displayed
            .iter()
            .position(|p| p.id.to_string() == *id)
            .and_then(|index| click_product(displayed, index, &LogClickHandler));
        if clicked.is_none() {
            tracing::warn!("Product {id} is not among the {} displayed", displayed.len());
        }
    }

    let tree = render_tree(products, config.state, &options);
    match config.format {
        RenderFormat::Text => {
            let buf = render_to_buffer(&tree, config.app.display.columns, config.width)?;
            Ok(buffer_to_text(&buf))
        }
        RenderFormat::Json => serde_json::to_string_pretty(&tree)
            .map_err(|e| RankingError::validation(format!("render tree serialization: {e}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::{log_capture, TargetFilter};

    fn config(format: RenderFormat) -> RenderConfig {
        RenderConfig {
            products_path: PathBuf::from("-"),
            state: ViewState::new().with_target(TargetFilter::Teens),
            click_ids: vec!["1".to_string(), "7".to_string()],
            format,
            width: 96,
            app: AppConfig::default(),
        }
    }

    fn products() -> Vec<Product> {
        (1..=7u64)
            .map(|i| {
                Product::new(i, format!("Gift {i}"))
                    .with_brand(format!("Brand {i}"))
                    .with_price(2500.0)
            })
            .collect()
    }

    #[test]
    fn test_text_output() {
        let text = render_output(&products(), &config(RenderFormat::Text)).expect("render");
        assert!(text.contains("실시간 급상승 선물랭킹"));
        assert!(text.contains("청소년이"));
        assert!(text.contains("더보기"));
        assert!(text.contains("Gift 6"));
        assert!(!text.contains("Gift 7"));
    }

    #[test]
    fn test_json_output() {
        let json = render_output(&products(), &config(RenderFormat::Json)).expect("render");
        let value: serde_json::Value = serde_json::from_str(&json).expect("json");
        assert_eq!(value["cards"].as_array().map(Vec::len), Some(6));
        assert_eq!(value["toggle_label"], "더보기");
        assert_eq!(value["target_tabs"][3]["active"], true);
    }

    #[test]
    fn test_oversized_expanded_catalog_rejected() {
        let products: Vec<Product> = (1..=40_000u64)
            .map(|i| Product::new(i, format!("Gift {i}")))
            .collect();
        let mut config = config(RenderFormat::Text);
        config.state = config.state.with_expanded(true);
        config.click_ids.clear();

        let err = render_output(&products, &config).unwrap_err();
        assert!(matches!(err, RankingError::Validation(ref m) if m.contains("40000 cards")));

        config.state = config.state.with_expanded(false);
        let text = render_output(&products, &config).expect("collapsed render");
        assert!(text.contains("Gift 6"));
    }

    #[test]
    fn test_click_ids_log_displayed_products() {
        let mut config = config(RenderFormat::Json);
        config.click_ids = vec!["3".to_string()];
        let logs = log_capture::capture(|| {
            render_output(&products(), &config).expect("render");
        });

        let clicks: Vec<String> = logs
            .lines()
            .into_iter()
            .filter(|line| line.contains("상품 클릭"))
            .collect();
        assert_eq!(clicks.len(), 1, "{clicks:?}");
        assert!(clicks[0].contains("상품 클릭: Gift 3"));
    }

    #[test]
    fn test_hidden_click_id_only_warns() {
        let logs = log_capture::capture(|| {
            render_output(&products(), &config(RenderFormat::Json)).expect("render");
        });

        let lines = logs.lines();
        assert!(lines.iter().any(|l| l.contains("상품 클릭: Gift 1")));
        assert!(lines.iter().any(|l| l.contains("WARN") && l.contains("Product 7")));
        assert!(!lines.iter().any(|l| l.contains("상품 클릭: Gift 7")));
    }

    #[test]
    fn test_narrow_width_rejected() {
        let mut config = config(RenderFormat::Text);
        config.width = 10;
        let err = render_output(&products(), &config).unwrap_err();
        assert!(matches!(err, RankingError::Validation(_)));
    }
}
