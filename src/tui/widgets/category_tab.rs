//! Category button inside the sort strip.

use super::center_offset;
use crate::ranking::CategoryTab;
use crate::tui::theme::Styles;
use ratatui::{prelude::*, widgets::Widget};

pub struct CategoryTabWidget<'a> {
    tab: &'a CategoryTab,
}

impl<'a> CategoryTabWidget<'a> {
    pub fn new(tab: &'a CategoryTab) -> Self {
        Self { tab }
    }
}

impl Widget for CategoryTabWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let style = Styles::sort_button(self.tab.active);
        let y = area.y + area.height / 2;
        buf.set_stringn(
            area.x + center_offset(self.tab.label, area.width),
            y,
            self.tab.label,
            usize::from(area.width),
            style,
        );
    }
}
