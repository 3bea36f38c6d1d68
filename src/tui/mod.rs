//! Interactive terminal rendering of the ranking section using ratatui.
//!
//! The section is drawn from a [`crate::ranking::RenderTree`]. Input is
//! mapped to [`crate::ranking::Interaction`]s through the same
//! [`RankingLayout`] that placed the widgets, and [`App`] applies them.

mod app;
pub(crate) mod constants;
mod events;
pub mod layout;
mod section;
pub mod theme;
mod ui;
pub(crate) mod widgets;

// Theme exports
pub use theme::{
    colors, current_theme_name, set_theme, toggle_theme, ColorScheme, Styles, Theme,
};

pub use app::{App, CursorMove};
pub use events::{handle_key_event, handle_mouse_event, Event, EventHandler};
pub use layout::RankingLayout;
pub use section::RankingView;
pub use constants::DEFAULT_RENDER_WIDTH;
pub use ui::{buffer_to_text, render_to_buffer, run_tui};
