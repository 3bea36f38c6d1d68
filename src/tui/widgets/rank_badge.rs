//! Rank badge drawn in the top-left corner of each product card.

use crate::tui::theme::Styles;
use ratatui::{prelude::*, widgets::Widget};
use unicode_width::UnicodeWidthStr;

/// A red badge with the card's 1-based position in the displayed slice.
#[derive(Debug, Clone)]
pub struct RankBadge {
    label: String,
}

impl RankBadge {
    /// Badge showing a card's rank, as computed by the render tree.
    pub fn new(rank: usize) -> Self {
        Self {
            label: rank.to_string(),
        }
    }

    pub fn text(&self) -> String {
        format!(" {} ", self.label)
    }

    /// Cells the badge occupies.
    pub fn width(&self) -> u16 {
        u16::try_from(self.text().width()).unwrap_or(u16::MAX)
    }
}

impl Widget for RankBadge {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 3 || area.height < 1 {
            return;
        }
        buf.set_stringn(
            area.x,
            area.y,
            self.text(),
            usize::from(area.width),
            Styles::rank_badge(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_text() {
        assert_eq!(RankBadge::new(1).text(), " 1 ");
        assert_eq!(RankBadge::new(12).text(), " 12 ");
        assert_eq!(RankBadge::new(12).width(), 4);
    }

    #[test]
    fn test_badge_renders_styled_cells() {
        let area = Rect::new(0, 0, 5, 1);
        let mut buf = Buffer::empty(area);
        RankBadge::new(3).render(area, &mut buf);

        assert_eq!(buf[(1, 0)].symbol(), "3");
        assert_eq!(buf[(1, 0)].style().bg, Styles::rank_badge().bg);
        assert_eq!(buf[(4, 0)].symbol(), " ");
    }

    #[test]
    fn test_badge_skips_tiny_area() {
        let area = Rect::new(0, 0, 2, 1);
        let mut buf = Buffer::empty(area);
        RankBadge::new(1).render(area, &mut buf);
        assert_eq!(buf, Buffer::empty(area));
    }
}
