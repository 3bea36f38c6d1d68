//! Event polling and key/mouse dispatch.

use super::app::{App, CursorMove};
use super::constants::PAGE_ROWS;
use super::theme::toggle_theme;
use crate::config::TuiPreferences;
use crate::ranking::{CycleFilter, Interaction, TargetFilter};
use crossterm::event::{
    self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton,
    MouseEvent, MouseEventKind,
};
use std::time::Duration;

/// Application event
#[derive(Debug)]
pub enum Event {
    /// Key press event
    Key(KeyEvent),
    /// Mouse event
    Mouse(MouseEvent),
    /// Terminal tick (for animations)
    Tick,
    /// Resize event
    Resize(u16, u16),
}

/// Event handler
pub struct EventHandler {
    /// Tick rate in milliseconds
    tick_rate: Duration,
}

impl EventHandler {
    /// Create a new event handler
    pub const fn new(tick_rate: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate),
        }
    }

    /// Poll for the next event
    pub fn next(&self) -> Result<Event, std::io::Error> {
        if event::poll(self.tick_rate)? {
            match event::read()? {
                CrosstermEvent::Key(key) => Ok(Event::Key(key)),
                CrosstermEvent::Mouse(mouse) => Ok(Event::Mouse(mouse)),
                CrosstermEvent::Resize(width, height) => Ok(Event::Resize(width, height)),
                _ => Ok(Event::Tick),
            }
        } else {
            Ok(Event::Tick)
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_TICK_RATE_MS)
    }
}

/// Handle key events and update app state
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    // Windows reports releases too
    if key.kind != KeyEventKind::Press {
        return;
    }

    // Clear any status message on key press
    app.clear_status_message();

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    let state = app.state();
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Char(c @ '1'..='4') => {
            let position = usize::from(c as u8 - b'1');
            if let Some(target) = TargetFilter::from_position(position) {
                app.dispatch(Interaction::SelectTarget(target));
            }
        }
        KeyCode::Tab => app.dispatch(Interaction::SelectTarget(state.target.next())),
        KeyCode::BackTab => app.dispatch(Interaction::SelectTarget(state.target.prev())),
        KeyCode::Char('c') => app.dispatch(Interaction::SelectCategory(state.category.next())),
        KeyCode::Char('C') => app.dispatch(Interaction::SelectCategory(state.category.prev())),
        KeyCode::Char('m' | ' ') => app.dispatch(Interaction::ToggleExpanded),
        KeyCode::Left | KeyCode::Char('h') => app.move_cursor(CursorMove::Left),
        KeyCode::Right | KeyCode::Char('l') => app.move_cursor(CursorMove::Right),
        KeyCode::Up | KeyCode::Char('k') => app.move_cursor(CursorMove::Up),
        KeyCode::Down | KeyCode::Char('j') => app.move_cursor(CursorMove::Down),
        KeyCode::Enter => app.activate_cursor(),
        KeyCode::PageUp => app.scroll_by(-(PAGE_ROWS as isize)),
        KeyCode::PageDown => app.scroll_by(PAGE_ROWS as isize),
        KeyCode::Char('T') => {
            // Toggle theme (dark -> light -> high-contrast) and save preference
            let theme_name = toggle_theme();
            let prefs = TuiPreferences {
                theme: theme_name.to_string(),
            };
            if let Err(e) = prefs.save() {
                tracing::warn!("Failed to save theme preference: {e}");
            }
            app.set_status_message(format!("Theme: {theme_name}"));
        }
        _ => {}
    }
}

pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    if !app.mouse_enabled {
        return;
    }

    match mouse.kind {
        MouseEventKind::ScrollUp => app.scroll_by(-1),
        MouseEventKind::ScrollDown => app.scroll_by(1),
        MouseEventKind::Down(MouseButton::Left) => {
            // Clear status message on click
            app.clear_status_message();
            let hit = app
                .last_layout
                .as_ref()
                .and_then(|layout| layout.hit(mouse.column, mouse.row));
            if let Some(interaction) = hit {
                app.dispatch(interaction);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::model::Product;
    use crate::ranking::CategoryFilter;
    use crate::tui::layout::RankingLayout;
    use crossterm::event::KeyEventState;
    use ratatui::layout::Rect;

    fn app() -> App {
        let products = (1..=8u64).map(|i| Product::new(i, format!("Gift {i}"))).collect();
        App::new(products, &AppConfig::default())
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn click(app: &mut App, x: u16, y: u16) {
        handle_mouse_event(
            app,
            MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column: x,
                row: y,
                modifiers: KeyModifiers::NONE,
            },
        );
    }

    #[test]
    fn test_number_keys_select_targets() {
        let mut app = app();
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.state().target, TargetFilter::Men);
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.state().target, TargetFilter::All);
    }

    #[test]
    fn test_tab_cycles_targets() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.state().target, TargetFilter::Women);
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.state().target, TargetFilter::Teens);
    }

    #[test]
    fn test_category_and_expand_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.state().category, CategoryFilter::MostGifted);
        press(&mut app, KeyCode::Char('C'));
        assert_eq!(app.state().category, CategoryFilter::MostWanted);

        press(&mut app, KeyCode::Char('m'));
        assert!(app.state().expanded);
        press(&mut app, KeyCode::Char(' '));
        assert!(!app.state().expanded);
    }

    #[test]
    fn test_enter_clicks_focused_card() {
        let mut app = app();
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.status_message(), Some("상품 클릭: Gift 2"));

        // next key clears the message
        press(&mut app, KeyCode::Left);
        assert_eq!(app.status_message(), None);
    }

    #[test]
    fn test_quit_keys() {
        for code in [KeyCode::Char('q'), KeyCode::Esc] {
            let mut app = app();
            press(&mut app, code);
            assert!(app.should_quit());
        }
        let mut app = app();
        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit());
        assert_eq!(app.state().category, CategoryFilter::MostWanted);
    }

    #[test]
    fn test_release_events_are_ignored() {
        let mut app = app();
        let release = KeyEvent {
            code: KeyCode::Char('m'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        handle_key_event(&mut app, release);
        assert!(!app.state().expanded);
    }

    #[test]
    fn test_mouse_clicks_use_last_layout() {
        let mut app = app();
        click(&mut app, 5, 5);
        assert_eq!(app.state(), crate::ranking::ViewState::default(), "no layout yet");

        let height = RankingLayout::required_height(6, 3).expect("height fits");
        let layout = RankingLayout::compute(Rect::new(0, 0, 80, height), 6, 3, 0);
        let women = layout.target_tabs[1];
        let toggle = layout.toggle;
        let third_card = layout.cards[2].area;
        app.last_layout = Some(layout);

        click(&mut app, women.x + 1, women.y);
        assert_eq!(app.state().target, TargetFilter::Women);

        click(&mut app, third_card.x + 1, third_card.y + 1);
        assert_eq!(app.status_message(), Some("상품 클릭: Gift 3"));

        click(&mut app, toggle.x + 1, toggle.y + 1);
        assert!(app.state().expanded);
    }

    #[test]
    fn test_mouse_disabled() {
        let mut app = app();
        app.mouse_enabled = false;
        let height = RankingLayout::required_height(6, 3).expect("height fits");
        let layout = RankingLayout::compute(Rect::new(0, 0, 80, height), 6, 3, 0);
        let toggle = layout.toggle;
        app.last_layout = Some(layout);

        click(&mut app, toggle.x + 1, toggle.y + 1);
        assert!(!app.state().expanded);
    }
}
