//! Audience tab: a profile icon box above a label.

use super::center_offset;
use crate::ranking::TargetTab;
use crate::tui::constants::PROFILE_ICON_WIDTH;
use crate::tui::theme::Styles;
use ratatui::{prelude::*, widgets::Widget};

pub struct TargetTabWidget<'a> {
    tab: &'a TargetTab,
}

impl<'a> TargetTabWidget<'a> {
    pub fn new(tab: &'a TargetTab) -> Self {
        Self { tab }
    }
}

impl Widget for TargetTabWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let icon_width = PROFILE_ICON_WIDTH.min(area.width);
        let icon_box = Rect::new(
            area.x + (area.width - icon_width) / 2,
            area.y,
            icon_width,
            1,
        );
        let icon_style = Styles::profile_icon(self.tab.active);
        buf.set_style(icon_box, icon_style);
        buf.set_stringn(
            icon_box.x + center_offset(self.tab.icon, icon_box.width),
            icon_box.y,
            self.tab.icon,
            usize::from(icon_box.width),
            icon_style,
        );

        if area.height > 1 {
            buf.set_stringn(
                area.x + center_offset(self.tab.label, area.width),
                area.y + 1,
                self.tab.label,
                usize::from(area.width),
                Styles::filter_label(self.tab.active),
            );
        }
    }
}
