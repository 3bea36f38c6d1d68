//! Geometry of the ranking section.
//!
//! The same [`RankingLayout`] drives drawing and mouse hit testing, so a
//! click always lands on what was drawn under it.

use super::constants::{
    CARD_HEIGHT, SORT_STRIP_HEIGHT, TARGET_TAB_HEIGHT, TITLE_HEIGHT, TOGGLE_HEIGHT,
    TOGGLE_WIDTH_PERCENT,
};
use super::theme::Spacing;
use crate::ranking::{CategoryFilter, Interaction, TargetFilter};
use ratatui::layout::Rect;

/// A card's position within the displayed slice and where it is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardSlot {
    pub index: usize,
    pub area: Rect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankingLayout {
    pub title: Rect,
    pub target_tabs: [Rect; 4],
    pub sort_strip: Rect,
    pub category_tabs: [Rect; 3],
    pub grid: Rect,
    pub cards: Vec<CardSlot>,
    pub toggle: Rect,
    /// First grid row drawn, after clamping.
    pub scroll: usize,
    pub max_scroll: usize,
    pub rows_fit: usize,
    pub columns: usize,
}

impl RankingLayout {
    /// Lay out the section in `area` for `card_count` displayed cards.
    pub fn compute(area: Rect, card_count: usize, columns: usize, scroll: usize) -> Self {
        let columns = columns.max(1);
        let inner = Rect {
            x: area.x.saturating_add(1),
            width: area.width.saturating_sub(2),
            ..area
        };

        let mut rows = RowCursor::new(inner);
        let title = rows.take(TITLE_HEIGHT);
        rows.skip(Spacing::SPACING4);
        let target_row = rows.take(TARGET_TAB_HEIGHT);
        rows.skip(Spacing::SPACING4);
        let sort_strip = rows.take(SORT_STRIP_HEIGHT);
        rows.skip(Spacing::SPACING4);

        let toggle_top = inner
            .bottom()
            .saturating_sub(TOGGLE_HEIGHT)
            .max(rows.y);
        let toggle_width =
            (u32::from(inner.width) * u32::from(TOGGLE_WIDTH_PERCENT) / 100) as u16;
        let toggle = Rect::new(
            inner.x + (inner.width - toggle_width) / 2,
            toggle_top,
            toggle_width,
            inner.bottom().saturating_sub(toggle_top).min(TOGGLE_HEIGHT),
        );

        let grid_bottom = toggle_top.saturating_sub(Spacing::SPACING4).max(rows.y);
        let grid = Rect::new(inner.x, rows.y, inner.width, grid_bottom - rows.y);

        let target_tabs = to_array(split_columns(target_row, 4, Spacing::SPACING2));
        let strip_inset = Rect {
            x: sort_strip.x.saturating_add(Spacing::SPACING2),
            width: sort_strip.width.saturating_sub(Spacing::SPACING2 * 2),
            ..sort_strip
        };
        let category_tabs = to_array(split_columns(strip_inset, 3, 0));

        let gap = Spacing::SPACING2;
        let rows_fit = if grid.height >= CARD_HEIGHT {
            usize::from((grid.height + gap) / (CARD_HEIGHT + gap))
        } else {
            0
        };
        let total_rows = card_count.div_ceil(columns);
        let max_scroll = total_rows.saturating_sub(rows_fit);
        let scroll = scroll.min(max_scroll);

        let column_rects = split_columns(grid, columns, gap);
        let mut cards = Vec::new();
        for (offset, row) in (scroll..total_rows.min(scroll + rows_fit)).enumerate() {
            let y = grid.y + offset as u16 * (CARD_HEIGHT + gap);
            for (col, col_rect) in column_rects.iter().enumerate() {
                let index = row * columns + col;
                if index >= card_count {
                    break;
                }
                cards.push(CardSlot {
                    index,
                    area: Rect::new(col_rect.x, y, col_rect.width, CARD_HEIGHT),
                });
            }
        }

        Self {
            title,
            target_tabs,
            sort_strip,
            category_tabs,
            grid,
            cards,
            toggle,
            scroll,
            max_scroll,
            rows_fit,
            columns,
        }
    }

    /// Rows needed to show `card_count` cards without scrolling, or `None`
    /// when that is taller than a buffer can be.
    pub fn required_height(card_count: usize, columns: usize) -> Option<u16> {
        let gap = Spacing::SPACING2;
        let rows = u16::try_from(card_count.div_ceil(columns.max(1))).ok()?;
        let grid = match rows {
            0 => 0,
            rows => rows
                .checked_mul(CARD_HEIGHT)?
                .checked_add((rows - 1).checked_mul(gap)?)?,
        };
        let chrome = TITLE_HEIGHT
            + Spacing::SPACING4
            + TARGET_TAB_HEIGHT
            + Spacing::SPACING4
            + SORT_STRIP_HEIGHT
            + Spacing::SPACING4
            + Spacing::SPACING4
            + TOGGLE_HEIGHT;
        grid.checked_add(chrome)
    }

    /// Map a terminal cell to the interaction it triggers.
    pub fn hit(&self, x: u16, y: u16) -> Option<Interaction> {
        if let Some(pos) = self.target_tabs.iter().position(|r| contains(*r, x, y)) {
            return TargetFilter::from_position(pos).map(Interaction::SelectTarget);
        }
        if let Some(pos) = self.category_tabs.iter().position(|r| contains(*r, x, y)) {
            return CategoryFilter::from_position(pos).map(Interaction::SelectCategory);
        }
        if let Some(slot) = self.cards.iter().find(|s| contains(s.area, x, y)) {
            return Some(Interaction::ClickProduct(slot.index));
        }
        if contains(self.toggle, x, y) {
            return Some(Interaction::ToggleExpanded);
        }
        None
    }
}

/// Scroll offset that keeps grid row `row` inside a window of `rows_fit`.
pub fn scroll_to_show(row: usize, scroll: usize, rows_fit: usize) -> usize {
    if rows_fit == 0 || row < scroll {
        row
    } else if row >= scroll + rows_fit {
        row + 1 - rows_fit
    } else {
        scroll
    }
}

/// Split `area` into `n` equal columns separated by `gap` cells. Leftover
/// cells go to the leftmost columns.
pub fn split_columns(area: Rect, n: usize, gap: u16) -> Vec<Rect> {
    if n == 0 {
        return Vec::new();
    }
    let n16 = n as u16;
    let usable = area.width.saturating_sub(gap * (n16 - 1));
    let base = usable / n16;
    let extra = usable % n16;

    let mut x = area.x;
    (0..n16)
        .map(|i| {
            let width = base + u16::from(i < extra);
            let rect = Rect::new(x, area.y, width, area.height);
            x += width + gap;
            rect
        })
        .collect()
}

fn to_array<const N: usize>(rects: Vec<Rect>) -> [Rect; N] {
    let mut out = [Rect::default(); N];
    for (slot, rect) in out.iter_mut().zip(rects) {
        *slot = rect;
    }
    out
}

fn contains(r: Rect, x: u16, y: u16) -> bool {
    x >= r.x && x < r.right() && y >= r.y && y < r.bottom()
}

/// Hands out horizontal bands top to bottom.
struct RowCursor {
    area: Rect,
    y: u16,
}

impl RowCursor {
    fn new(area: Rect) -> Self {
        Self { area, y: area.y }
    }

    fn take(&mut self, height: u16) -> Rect {
        let height = height.min(self.area.bottom().saturating_sub(self.y));
        let rect = Rect::new(self.area.x, self.y, self.area.width, height);
        self.y += height;
        rect
    }

    fn skip(&mut self, height: u16) {
        self.y = (self.y + height).min(self.area.bottom());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_layout(cards: usize) -> RankingLayout {
        let height = RankingLayout::required_height(cards, 3).expect("height fits");
        RankingLayout::compute(Rect::new(0, 0, 80, height), cards, 3, 0)
    }

    #[test]
    fn test_split_columns_covers_width() {
        let cols = split_columns(Rect::new(2, 0, 20, 1), 3, 1);
        assert_eq!(cols.len(), 3);
        assert_eq!(cols[0].x, 2);
        assert_eq!(cols.iter().map(|c| c.width).sum::<u16>(), 18);
        assert_eq!(cols[2].right(), 22);
    }

    #[test]
    fn test_required_height_fits_every_card() {
        for count in [0, 1, 3, 6, 8] {
            let layout = full_layout(count);
            assert_eq!(layout.cards.len(), count, "count {count}");
            assert_eq!(layout.max_scroll, 0);
        }
    }

    #[test]
    fn test_regions_do_not_overlap_vertically() {
        let layout = full_layout(6);
        assert!(layout.title.bottom() <= layout.target_tabs[0].y);
        assert!(layout.target_tabs[0].bottom() <= layout.sort_strip.y);
        assert!(layout.sort_strip.bottom() <= layout.grid.y);
        assert!(layout.grid.bottom() <= layout.toggle.y);
    }

    #[test]
    fn test_hit_maps_each_region() {
        let layout = full_layout(6);

        for (i, tab) in layout.target_tabs.iter().enumerate() {
            assert_eq!(
                layout.hit(tab.x, tab.y),
                TargetFilter::from_position(i).map(Interaction::SelectTarget)
            );
        }
        for (i, tab) in layout.category_tabs.iter().enumerate() {
            assert_eq!(
                layout.hit(tab.x + tab.width - 1, tab.y + 1),
                CategoryFilter::from_position(i).map(Interaction::SelectCategory)
            );
        }
        for slot in &layout.cards {
            assert_eq!(
                layout.hit(slot.area.x + 1, slot.area.y + 2),
                Some(Interaction::ClickProduct(slot.index))
            );
        }
        assert_eq!(
            layout.hit(layout.toggle.x + 2, layout.toggle.y + 1),
            Some(Interaction::ToggleExpanded)
        );
        assert_eq!(layout.hit(0, layout.title.y), None);
    }

    #[test]
    fn test_cards_fill_rows_left_to_right() {
        let layout = full_layout(5);
        let first_row_y = layout.cards[0].area.y;
        assert!(layout.cards[..3].iter().all(|s| s.area.y == first_row_y));
        assert!(layout.cards[3].area.y > first_row_y);
        assert_eq!(layout.cards[3].area.x, layout.cards[0].area.x);
    }

    #[test]
    fn test_scroll_is_clamped_and_windows_rows() {
        // room for exactly one card row
        let height = RankingLayout::required_height(3, 3).expect("height fits");
        let layout = RankingLayout::compute(Rect::new(0, 0, 80, height), 8, 3, 10);
        assert_eq!(layout.rows_fit, 1);
        assert_eq!(layout.max_scroll, 2);
        assert_eq!(layout.scroll, 2);
        let indices: Vec<_> = layout.cards.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![6, 7]);
    }

    #[test]
    fn test_required_height_rejects_oversized_grid() {
        assert_eq!(RankingLayout::required_height(6, 3), Some(24));
        // 10_923 rows of five cells plus gaps no longer fit in a u16
        assert_eq!(RankingLayout::required_height(32_769, 3), None);
        assert_eq!(RankingLayout::required_height(usize::MAX, 1), None);
    }

    #[test]
    fn test_scroll_to_show() {
        assert_eq!(scroll_to_show(0, 2, 2), 0);
        assert_eq!(scroll_to_show(2, 0, 2), 1);
        assert_eq!(scroll_to_show(1, 0, 2), 0);
        assert_eq!(scroll_to_show(5, 0, 0), 5);
    }

    #[test]
    fn test_toggle_is_centered_at_seventy_percent() {
        let layout = full_layout(0);
        assert_eq!(layout.toggle.width, 78 * 70 / 100);
        let left = layout.toggle.x - 1;
        let right = 79 - layout.toggle.right();
        assert!(left.abs_diff(right) <= 1);
    }
}
