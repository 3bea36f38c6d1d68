//! View command handler.
//!
//! Implements the `view` subcommand: the interactive ranking section.

use crate::config::AppConfig;
use crate::error::{RankingError, Result};
use crate::model::load_products;
use crate::ranking::{render_tree, ViewState};
use crate::tui::{buffer_to_text, render_to_buffer, run_tui, App, DEFAULT_RENDER_WIDTH};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Configuration for the view command
#[derive(Debug, Clone)]
pub struct ViewConfig {
    /// Product catalog, or `-` for stdin
    pub products_path: PathBuf,
    /// State at startup
    pub state: ViewState,
    pub app: AppConfig,
}

/// Run the view command
#[allow(clippy::needless_pass_by_value)]
pub fn run_view(config: ViewConfig) -> Result<()> {
    let products = load_products(&config.products_path)?;
    tracing::info!("Loaded {} products", products.len());

    // Piped output gets a single static frame
    if !std::io::stdout().is_terminal() {
        tracing::debug!("stdout is not a terminal; rendering once");
        let tree = render_tree(&products, config.state, &config.app.display.options());
        let buf = render_to_buffer(&tree, config.app.display.columns, DEFAULT_RENDER_WIDTH)?;
        println!("{}", buffer_to_text(&buf));
        return Ok(());
    }

    let mut app = App::new(products, &config.app).with_state(config.state);
    run_tui(&mut app).map_err(|e| RankingError::terminal(e.to_string()))
}
