//! Terminal setup, the draw loop and the static renderer.

use super::app::App;
use super::events::{handle_key_event, handle_mouse_event, Event, EventHandler};
use super::layout::RankingLayout;
use super::section::RankingView;
use super::theme::{footer_hints, render_footer_hints, Styles};
use super::widgets::{check_terminal_size, render_size_warning};
use crate::error::{RankingError, Result};
use crate::ranking::RenderTree;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Paragraph, Widget},
};
use std::io::{self, stdout};
use unicode_width::UnicodeWidthStr;

/// Run the TUI application
pub fn run_tui(app: &mut App) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if app.mouse_enabled {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, app);

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn event_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    let events = EventHandler::new(app.tick_rate_ms);

    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            Event::Key(key) => handle_key_event(app, key),
            Event::Mouse(mouse) => handle_mouse_event(app, mouse),
            Event::Resize(_, _) | Event::Tick => {}
        }

        if app.should_quit {
            tracing::debug!("quit requested");
            return Ok(());
        }
    }
}

/// Main render function
pub(crate) fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Check minimum terminal size
    if check_terminal_size(area.width, area.height).is_err() {
        app.last_layout = None;
        render_size_warning(frame, area);
        return;
    }

    let [section_area, footer_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    let tree = app.tree();
    let layout = RankingLayout::compute(section_area, tree.cards.len(), app.columns, app.scroll);
    app.scroll = layout.scroll;

    frame.render_widget(
        RankingView::new(&tree, &layout).focused(app.focused()),
        section_area,
    );
    render_footer(frame, footer_area, app);

    app.last_layout = Some(layout);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    // Show status message if set, otherwise show shortcut hints
    let line = match app.status_message() {
        Some(msg) => Line::from(vec![
            Span::styled("ℹ ", Styles::status_message()),
            Span::styled(msg.to_string(), Styles::status_message()),
        ]),
        None => Line::from(render_footer_hints(&footer_hints())),
    };
    frame.render_widget(
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .style(Styles::status_bar()),
        area,
    );
}

/// Draw `tree` into an off-screen buffer tall enough for every card.
///
/// Fails when the cards need more rows than a buffer can hold.
pub fn render_to_buffer(tree: &RenderTree, columns: usize, width: u16) -> Result<Buffer> {
    let height = RankingLayout::required_height(tree.cards.len(), columns).ok_or_else(|| {
        RankingError::validation(format!(
            "{} cards in {} columns do not fit in one rendered frame",
            tree.cards.len(),
            columns.max(1)
        ))
    })?;
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    let layout = RankingLayout::compute(area, tree.cards.len(), columns, 0);
    RankingView::new(tree, &layout).render(area, &mut buf);
    Ok(buf)
}

/// Plain text of a buffer, one line per row, trailing spaces trimmed.
pub fn buffer_to_text(buf: &Buffer) -> String {
    let area = buf.area;
    let mut lines = Vec::with_capacity(usize::from(area.height));
    for y in area.top()..area.bottom() {
        let mut line = String::new();
        let mut skip = 0;
        for x in area.left()..area.right() {
            if skip > 0 {
                // cell hidden behind a wide character
                skip -= 1;
                continue;
            }
            let symbol = buf[(x, y)].symbol();
            skip = symbol.width().saturating_sub(1);
            line.push_str(symbol);
        }
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}
