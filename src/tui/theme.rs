//! Design tokens and style presets for the ranking section.
//!
//! Colors follow the storefront design system's token names (`blue700`,
//! `gray1000`, ...) so widgets read like the web styles they mirror. The
//! active theme is process-global and switchable at runtime.

use crate::config::canonical_theme;
use ratatui::prelude::*;
use std::sync::{PoisonError, RwLock};

/// Color tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme {
    // Text
    pub text_default: Color,
    pub text_sub: Color,
    /// Foreground on saturated backgrounds (badges, active icons)
    pub on_accent: Color,

    // Gray scale
    pub gray100: Color,
    pub gray300: Color,
    pub gray1000: Color,

    // Blue scale
    pub blue200: Color,
    pub blue500: Color,
    pub blue600: Color,
    pub blue700: Color,
    pub blue800: Color,

    pub red700: Color,

    // Surfaces
    pub border_default: Color,
    pub background: Color,
    pub background_alt: Color,

    // Terminal chrome
    pub shortcut: Color,
    pub warning: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::dark()
    }
}

impl ColorScheme {
    /// Const dark scheme for static initialization
    const fn dark_const() -> Self {
        Self {
            text_default: Color::Rgb(230, 232, 235),
            text_sub: Color::Rgb(150, 155, 165),
            on_accent: Color::White,

            gray100: Color::Rgb(38, 40, 46),
            gray300: Color::Rgb(60, 63, 70),
            gray1000: Color::Rgb(245, 246, 248),

            blue200: Color::Rgb(28, 42, 66),
            blue500: Color::Rgb(110, 170, 255),
            blue600: Color::Rgb(90, 150, 240),
            blue700: Color::Rgb(45, 120, 245),
            blue800: Color::Rgb(170, 205, 255),

            red700: Color::Rgb(235, 64, 52),

            border_default: Color::Rgb(90, 94, 102),
            background: Color::Reset,
            background_alt: Color::Rgb(30, 30, 40),

            shortcut: Color::Yellow,
            warning: Color::Yellow,
        }
    }

    /// Dark scheme (default)
    pub const fn dark() -> Self {
        Self::dark_const()
    }

    /// Light scheme, closest to the web storefront
    pub const fn light() -> Self {
        Self {
            text_default: Color::Rgb(42, 48, 56),
            text_sub: Color::Rgb(134, 139, 148),
            on_accent: Color::White,

            gray100: Color::Rgb(247, 248, 249),
            gray300: Color::Rgb(238, 239, 241),
            gray1000: Color::Rgb(26, 26, 26),

            blue200: Color::Rgb(232, 243, 255),
            blue500: Color::Rgb(102, 178, 255),
            blue600: Color::Rgb(58, 145, 255),
            blue700: Color::Rgb(33, 124, 249),
            blue800: Color::Rgb(24, 100, 224),

            red700: Color::Rgb(250, 52, 44),

            border_default: Color::Rgb(220, 222, 227),
            background: Color::Rgb(255, 255, 255),
            background_alt: Color::Rgb(240, 240, 245),

            shortcut: Color::Rgb(180, 140, 0),
            warning: Color::Rgb(180, 140, 0),
        }
    }

    /// High contrast scheme (accessibility)
    pub const fn high_contrast() -> Self {
        Self {
            text_default: Color::White,
            text_sub: Color::Gray,
            on_accent: Color::Black,

            gray100: Color::Rgb(20, 20, 20),
            gray300: Color::DarkGray,
            gray1000: Color::White,

            blue200: Color::Rgb(0, 0, 60),
            blue500: Color::LightBlue,
            blue600: Color::LightCyan,
            blue700: Color::LightBlue,
            blue800: Color::White,

            red700: Color::LightRed,

            border_default: Color::White,
            background: Color::Black,
            background_alt: Color::Rgb(20, 20, 20),

            shortcut: Color::LightYellow,
            warning: Color::LightYellow,
        }
    }
}

/// Spacing tokens, in terminal cells.
pub struct Spacing;

impl Spacing {
    pub const SPACING2: u16 = 1;
    pub const SPACING4: u16 = 1;
}

/// Global theme instance (runtime switchable)
static THEME: RwLock<Theme> = RwLock::new(Theme::dark_const());

/// Theme configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub colors: ColorScheme,
    pub name: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    const fn dark_const() -> Self {
        Self {
            colors: ColorScheme::dark_const(),
            name: "dark",
        }
    }

    pub const fn dark() -> Self {
        Self::dark_const()
    }

    pub const fn light() -> Self {
        Self {
            colors: ColorScheme::light(),
            name: "light",
        }
    }

    pub const fn high_contrast() -> Self {
        Self {
            colors: ColorScheme::high_contrast(),
            name: "high-contrast",
        }
    }

    /// Theme for a name accepted by `tui.theme`. Unknown names fall back
    /// to dark.
    pub fn from_name(name: &str) -> Self {
        match canonical_theme(name) {
            Some("light") => Self::light(),
            Some("high-contrast") => Self::high_contrast(),
            _ => Self::dark(),
        }
    }

    /// Get the next theme in the rotation
    pub fn next(&self) -> Self {
        match self.name {
            "dark" => Self::light(),
            "light" => Self::high_contrast(),
            _ => Self::dark(),
        }
    }
}

/// Get the current theme name
pub fn current_theme_name() -> &'static str {
    THEME.read().unwrap_or_else(PoisonError::into_inner).name
}

/// Set the current theme
pub fn set_theme(theme: Theme) {
    *THEME.write().unwrap_or_else(PoisonError::into_inner) = theme;
}

/// Rotate to the next theme (dark -> light -> high-contrast -> dark)
pub fn toggle_theme() -> &'static str {
    let mut theme = THEME.write().unwrap_or_else(PoisonError::into_inner);
    *theme = theme.next();
    theme.name
}

/// Convenience function to get current colors
pub fn colors() -> ColorScheme {
    THEME.read().unwrap_or_else(PoisonError::into_inner).colors
}

// ============================================================================
// Style Helpers
// ============================================================================

/// Style presets for the section's elements.
pub struct Styles;

impl Styles {
    /// Section heading (title1Bold)
    pub fn section_title() -> Style {
        Style::default().fg(colors().text_default).bold()
    }

    /// Round profile icon above each target tab
    pub fn profile_icon(active: bool) -> Style {
        let scheme = colors();
        if active {
            Style::default().bg(scheme.blue700).fg(scheme.on_accent).bold()
        } else {
            Style::default().bg(scheme.gray300).fg(scheme.blue500).bold()
        }
    }

    /// Target tab label (label1Regular / label1Bold)
    pub fn filter_label(active: bool) -> Style {
        let scheme = colors();
        if active {
            Style::default().fg(scheme.blue700).bold()
        } else {
            Style::default().fg(scheme.text_default)
        }
    }

    /// Background strip behind the category buttons
    pub fn sort_strip() -> Style {
        Style::default().bg(colors().blue200)
    }

    /// Category button text
    pub fn sort_button(active: bool) -> Style {
        let scheme = colors();
        let style = Style::default().bg(scheme.blue200);
        if active {
            style.fg(scheme.blue800).bold()
        } else {
            style.fg(scheme.blue600)
        }
    }

    /// Rank badge in the card corner (label2Bold on red700)
    pub fn rank_badge() -> Style {
        let scheme = colors();
        Style::default().bg(scheme.red700).fg(scheme.on_accent).bold()
    }

    /// Image placeholder row
    pub fn image_placeholder() -> Style {
        let scheme = colors();
        Style::default().bg(scheme.gray100).fg(scheme.text_sub)
    }

    pub fn product_name() -> Style {
        Style::default().fg(colors().text_default)
    }

    /// First brand line (label2Regular, textSub)
    pub fn brand_name() -> Style {
        Style::default().fg(colors().text_sub)
    }

    /// Second brand line, darker
    pub fn brand_name_strong() -> Style {
        Style::default().fg(colors().gray1000)
    }

    /// Price (title2Bold)
    pub fn price() -> Style {
        Style::default().fg(colors().gray1000).bold()
    }

    /// Card under the keyboard cursor
    pub fn card_focused() -> Style {
        Style::default().bg(colors().gray100)
    }

    pub fn more_button() -> Style {
        Style::default().fg(colors().text_default)
    }

    pub fn more_button_border() -> Style {
        Style::default().fg(colors().border_default)
    }

    /// Status bar background style
    pub fn status_bar() -> Style {
        Style::default().bg(colors().background_alt)
    }

    pub fn status_message() -> Style {
        Style::default().fg(colors().text_default).bold()
    }

    /// Keyboard shortcut style
    pub fn shortcut_key() -> Style {
        Style::default().fg(colors().shortcut)
    }

    /// Shortcut description style
    pub fn shortcut_desc() -> Style {
        Style::default().fg(colors().text_sub)
    }

    pub fn warning() -> Style {
        Style::default().fg(colors().warning).bold()
    }
}

// ============================================================================
// Footer Hints
// ============================================================================

/// Shortcut hints shown in the footer.
pub fn footer_hints() -> Vec<(&'static str, &'static str)> {
    vec![
        ("1-4/Tab", "target"),
        ("c", "category"),
        ("m", "more"),
        ("←↑↓→", "move"),
        ("Enter", "open"),
        ("PgUp/Dn", "scroll"),
        ("T", "theme"),
        ("q", "quit"),
    ]
}

/// Render footer hints as spans
pub fn render_footer_hints(hints: &[(&str, &str)]) -> Vec<Span<'static>> {
    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(format!("[{key}]"), Styles::shortcut_key()));
        spans.push(Span::styled((*desc).to_string(), Styles::shortcut_desc()));
    }

    spans
}
