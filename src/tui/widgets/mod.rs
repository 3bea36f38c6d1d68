//! Widgets that make up the ranking section.

mod category_tab;
mod product_card;
mod rank_badge;
mod target_tab;
mod toggle_button;

pub use category_tab::CategoryTabWidget;
pub use product_card::ProductCardWidget;
pub use rank_badge::RankBadge;
pub use target_tab::TargetTabWidget;
pub use toggle_button::ToggleButton;

use super::constants::{MIN_HEIGHT, MIN_WIDTH};
use super::theme::{colors, Styles};
use ratatui::{
    prelude::*,
    widgets::{Clear, Paragraph},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate a string with an ellipsis, using Unicode display width.
pub fn truncate_str(s: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut width = 0;
    let mut truncated: String = s
        .chars()
        .take_while(|ch| {
            let w = UnicodeWidthChar::width(*ch).unwrap_or(0);
            if width + w > max_width - 1 {
                return false;
            }
            width += w;
            true
        })
        .collect();
    truncated.push('…');
    truncated
}

/// X offset that centers `text` inside `width` cells.
pub fn center_offset(text: &str, width: u16) -> u16 {
    let text_width = u16::try_from(UnicodeWidthStr::width(text)).unwrap_or(u16::MAX);
    width.saturating_sub(text_width) / 2
}

/// Check whether the terminal can hold the section.
pub fn check_terminal_size(width: u16, height: u16) -> Result<(), (u16, u16)> {
    if width < MIN_WIDTH || height < MIN_HEIGHT {
        Err((MIN_WIDTH, MIN_HEIGHT))
    } else {
        Ok(())
    }
}

/// Render a "terminal too small" message.
pub fn render_size_warning(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::styled("Terminal too small", Styles::warning()),
        Line::from(""),
        Line::from(vec![
            Span::raw("Current: "),
            Span::styled(
                format!("{}x{}", area.width, area.height),
                Style::default().fg(colors().text_default),
            ),
        ]),
        Line::from(vec![
            Span::raw("Required: "),
            Span::styled(
                format!("{MIN_WIDTH}x{MIN_HEIGHT}"),
                Style::default().fg(colors().blue600),
            ),
        ]),
    ];

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        area,
    );
}
