//! "더보기" / "접기" button under the grid.

use crate::tui::theme::Styles;
use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph, Widget},
};

pub struct ToggleButton<'a> {
    label: &'a str,
}

impl<'a> ToggleButton<'a> {
    pub fn new(label: &'a str) -> Self {
        Self { label }
    }
}

impl Widget for ToggleButton<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.label)
            .style(Styles::more_button())
            .alignment(Alignment::Center)
            .block(Block::bordered().border_style(Styles::more_button_border()))
            .render(area, buf);
    }
}
