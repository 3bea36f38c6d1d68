//! Application state for the TUI.

use super::layout::{scroll_to_show, RankingLayout};
use crate::config::AppConfig;
use crate::model::Product;
use crate::ranking::{
    click_product, render_tree, visible_with_limit, DisplayOptions, Interaction, LogClickHandler,
    ProductClickHandler, RenderTree, ViewState,
};

/// Keyboard cursor movement within the card grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    Left,
    Right,
    Up,
    Down,
}

/// Main application state
pub struct App {
    /// Products in ranking order, as loaded
    pub(crate) products: Vec<Product>,
    /// Filter tabs and expansion
    pub(crate) state: ViewState,
    pub(crate) options: DisplayOptions,
    /// Cards per grid row
    pub(crate) columns: usize,
    /// Index of the focused card within the displayed slice
    pub(crate) cursor: usize,
    /// First grid row drawn
    pub(crate) scroll: usize,
    /// Should quit
    pub(crate) should_quit: bool,
    /// Status message to display until the next keypress
    pub(crate) status_message: Option<String>,
    pub(crate) mouse_enabled: bool,
    pub(crate) tick_rate_ms: u64,
    /// Geometry of the last frame, used for mouse hit testing
    pub(crate) last_layout: Option<RankingLayout>,
    click_handler: Box<dyn ProductClickHandler>,
}

impl App {
    pub fn new(products: Vec<Product>, config: &AppConfig) -> Self {
        Self {
            products,
            state: ViewState::new(),
            options: config.display.options(),
            columns: config.display.columns.max(1),
            cursor: 0,
            scroll: 0,
            should_quit: false,
            status_message: None,
            mouse_enabled: config.tui.mouse_enabled,
            tick_rate_ms: config.tui.tick_rate_ms,
            last_layout: None,
            click_handler: Box::new(LogClickHandler),
        }
    }

    /// Replace what happens when a product card is clicked.
    #[must_use]
    pub fn with_click_handler(mut self, handler: impl ProductClickHandler + 'static) -> Self {
        self.click_handler = Box::new(handler);
        self
    }

    /// Start from a state other than the mount default.
    #[must_use]
    pub fn with_state(mut self, state: ViewState) -> Self {
        self.state = state;
        self
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// The products currently on screen, in ranking order.
    pub fn displayed(&self) -> &[Product] {
        visible_with_limit(&self.products, self.state.expanded, self.options.initial_count)
    }

    pub fn tree(&self) -> RenderTree {
        render_tree(&self.products, self.state, &self.options)
    }

    /// Focused card, if any card is displayed.
    pub fn focused(&self) -> Option<usize> {
        (!self.displayed().is_empty()).then_some(self.cursor)
    }

    /// Apply one interaction. Product clicks go to the click handler and
    /// leave the view state untouched.
    pub fn dispatch(&mut self, interaction: Interaction) {
        tracing::debug!(?interaction, "dispatch");

        if let Interaction::ClickProduct(index) = interaction {
            let displayed =
                visible_with_limit(&self.products, self.state.expanded, self.options.initial_count);
            if let Some(product) = click_product(displayed, index, self.click_handler.as_ref()) {
                let message = format!("상품 클릭: {}", product.name);
                self.cursor = index;
                self.set_status_message(message);
            }
            return;
        }

        self.state = self.state.apply(interaction);
        self.clamp_cursor();
    }

    /// Click the card under the keyboard cursor.
    pub fn activate_cursor(&mut self) {
        if let Some(index) = self.focused() {
            self.dispatch(Interaction::ClickProduct(index));
        }
    }

    pub fn move_cursor(&mut self, movement: CursorMove) {
        let count = self.displayed().len();
        let columns = self.columns;
        let column = self.cursor % columns;
        let next = match movement {
            CursorMove::Left => (column > 0).then(|| self.cursor - 1),
            CursorMove::Right => (column + 1 < columns).then(|| self.cursor + 1),
            CursorMove::Up => self.cursor.checked_sub(columns),
            CursorMove::Down => Some(self.cursor + columns),
        };
        if let Some(next) = next.filter(|&n| n < count) {
            self.cursor = next;
            self.ensure_cursor_visible();
        }
    }

    /// Scroll the grid by `rows`, dragging the cursor along so it stays on
    /// screen.
    pub fn scroll_by(&mut self, rows: isize) {
        let (max_scroll, rows_fit) = self
            .last_layout
            .as_ref()
            .map_or((usize::MAX, 0), |l| (l.max_scroll, l.rows_fit));
        self.scroll = self.scroll.saturating_add_signed(rows).min(max_scroll);

        if rows_fit > 0 {
            let row = self.cursor / self.columns;
            let column = self.cursor % self.columns;
            let last_row = self.scroll + rows_fit - 1;
            let row = row.clamp(self.scroll, last_row);
            self.cursor = row * self.columns + column;
            self.clamp_cursor();
        }
    }

    pub(crate) fn ensure_cursor_visible(&mut self) {
        if let Some(rows_fit) = self.last_layout.as_ref().map(|l| l.rows_fit) {
            self.scroll = scroll_to_show(self.cursor / self.columns, self.scroll, rows_fit);
        }
    }

    fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.displayed().len().saturating_sub(1));
    }

    /// Set a status message
    pub fn set_status_message(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
    }

    pub fn clear_status_message(&mut self) {
        self.status_message = None;
    }
}
