//! The ranking section as one widget.

use super::layout::RankingLayout;
use super::theme::{colors, Styles};
use super::widgets::{
    truncate_str, CategoryTabWidget, ProductCardWidget, TargetTabWidget, ToggleButton,
};
use crate::ranking::RenderTree;
use ratatui::{prelude::*, widgets::Widget};

/// Draws a [`RenderTree`] into the regions of a [`RankingLayout`].
///
/// The layout must have been computed for `tree.cards.len()` cards.
pub struct RankingView<'a> {
    tree: &'a RenderTree,
    layout: &'a RankingLayout,
    focused: Option<usize>,
}

impl<'a> RankingView<'a> {
    pub fn new(tree: &'a RenderTree, layout: &'a RankingLayout) -> Self {
        Self {
            tree,
            layout,
            focused: None,
        }
    }

    /// Highlight the card at this index of the displayed slice.
    #[must_use]
    pub fn focused(mut self, index: Option<usize>) -> Self {
        self.focused = index;
        self
    }
}

impl Widget for RankingView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(colors().background));

        let title = self.layout.title;
        if title.height > 0 {
            let width = usize::from(title.width);
            buf.set_stringn(
                title.x,
                title.y,
                truncate_str(&self.tree.title, width),
                width,
                Styles::section_title(),
            );
        }

        for (tab, rect) in self.tree.target_tabs.iter().zip(self.layout.target_tabs) {
            TargetTabWidget::new(tab).render(rect, buf);
        }

        buf.set_style(self.layout.sort_strip, Styles::sort_strip());
        for (tab, rect) in self
            .tree
            .category_tabs
            .iter()
            .zip(self.layout.category_tabs)
        {
            CategoryTabWidget::new(tab).render(rect, buf);
        }

        for slot in &self.layout.cards {
            if let Some(card) = self.tree.cards.get(slot.index) {
                ProductCardWidget::new(card)
                    .focused(self.focused == Some(slot.index))
                    .render(slot.area, buf);
            }
        }

        if self.layout.toggle.height > 0 {
            ToggleButton::new(self.tree.toggle_label).render(self.layout.toggle, buf);
        }
    }
}
