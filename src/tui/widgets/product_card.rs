//! Product card: rank badge, image placeholder, brand lines and price.

use super::{truncate_str, RankBadge};
use crate::ranking::ProductCard;
use crate::tui::theme::Styles;
use ratatui::{prelude::*, widgets::Widget};

/// Shown in place of the image when a product has no URL.
const NO_IMAGE: &str = "이미지 없음";

pub struct ProductCardWidget<'a> {
    card: &'a ProductCard,
    focused: bool,
}

impl<'a> ProductCardWidget<'a> {
    pub fn new(card: &'a ProductCard) -> Self {
        Self {
            card,
            focused: false,
        }
    }

    #[must_use]
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn image_line(&self) -> String {
        if self.card.image_url.is_empty() {
            format!("▣ {NO_IMAGE}")
        } else {
            format!("▣ {}", self.card.image_url)
        }
    }
}

impl Widget for ProductCardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        if self.focused {
            buf.set_style(area, Styles::card_focused());
        }
        let width = usize::from(area.width);

        // Row 0: rank badge followed by the product name
        let badge = RankBadge::new(self.card.rank);
        let badge_width = badge.width().min(area.width);
        badge.render(Rect::new(area.x, area.y, badge_width, 1), buf);
        let name_x = area.x + badge_width + 1;
        if name_x < area.right() {
            let room = usize::from(area.right() - name_x);
            buf.set_stringn(
                name_x,
                area.y,
                truncate_str(&self.card.name, room),
                room,
                Styles::product_name(),
            );
        }

        // The brand appears twice, once muted and once strong.
        let rows: [(String, Style); 4] = [
            (self.image_line(), Styles::image_placeholder()),
            (self.card.brand_name.clone(), Styles::brand_name()),
            (self.card.brand_name.clone(), Styles::brand_name_strong()),
            (self.card.price_text.clone(), Styles::price()),
        ];
        for (offset, (text, style)) in rows.iter().enumerate() {
            let y = area.y + 1 + offset as u16;
            if y >= area.bottom() {
                break;
            }
            if offset == 0 {
                buf.set_style(Rect::new(area.x, y, area.width, 1), *style);
            }
            buf.set_stringn(area.x, y, truncate_str(text, width), width, *style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductId;

    fn card() -> ProductCard {
        ProductCard {
            rank: 2,
            id: ProductId::from(7u64),
            name: "Cake".to_string(),
            image_url: "https://img/cake.png".to_string(),
            brand_name: "Bakery".to_string(),
            price_text: "10000 원".to_string(),
        }
    }

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect::<String>()
            .trim_end()
            .to_string()
    }

    #[test]
    fn test_card_rows() {
        let area = Rect::new(0, 0, 30, 5);
        let mut buf = Buffer::empty(area);
        ProductCardWidget::new(&card()).render(area, &mut buf);

        assert_eq!(row(&buf, 0), " 2  Cake");
        assert_eq!(row(&buf, 1), "▣ https://img/cake.png");
        assert_eq!(row(&buf, 2), "Bakery");
        assert_eq!(row(&buf, 3), "Bakery");
        assert!(row(&buf, 4).starts_with("10000"));
    }

    #[test]
    fn test_brand_lines_use_distinct_styles() {
        let area = Rect::new(0, 0, 30, 5);
        let mut buf = Buffer::empty(area);
        ProductCardWidget::new(&card()).render(area, &mut buf);

        assert_eq!(buf[(0, 2)].style().fg, Styles::brand_name().fg);
        assert_eq!(buf[(0, 3)].style().fg, Styles::brand_name_strong().fg);
    }

    #[test]
    fn test_missing_image_and_short_area() {
        let mut no_image = card();
        no_image.image_url.clear();
        let area = Rect::new(0, 0, 30, 2);
        let mut buf = Buffer::empty(area);
        ProductCardWidget::new(&no_image).render(area, &mut buf);

        assert!(row(&buf, 1).starts_with("▣ "));
        assert!(row(&buf, 1).contains('이'));
    }

    #[test]
    fn test_focus_fills_background() {
        let area = Rect::new(0, 0, 30, 5);
        let mut buf = Buffer::empty(area);
        ProductCardWidget::new(&card())
            .focused(true)
            .render(area, &mut buf);
        assert_eq!(buf[(29, 4)].style().bg, Styles::card_focused().bg);
    }
}
