//! Frame composition: the menu area on top, a status panel at the bottom.
use anyhow::Result;
use menu_core::Vec2;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::{canvas::BufferCanvas, terminal::Tui, theme::MenuTheme};
use crate::state::AppState;

const HELP: &str = "arrows/hjkl move | x confirm | z back | c open/close | q quit";

/// Render one frame of the demo.
pub fn render(terminal: &mut Tui, state: &AppState, origin: Vec2) -> Result<()> {
    terminal.draw(|frame| draw(frame, state, origin))?;
    Ok(())
}

/// Lays out and draws the whole screen into `frame`.
pub fn draw(frame: &mut Frame, state: &AppState, origin: Vec2) {
    let theme = MenuTheme::new();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Menu area
            Constraint::Length(4), // Status
        ])
        .split(frame.area());

    draw_menu(frame, chunks[0], state, origin, &theme);
    draw_status(frame, chunks[1], state, &theme);
}

fn draw_menu(frame: &mut Frame, area: Rect, state: &AppState, origin: Vec2, theme: &MenuTheme) {
    let offset = origin + Vec2::new(i32::from(area.x), i32::from(area.y));
    if let Some(view) = state.view(offset) {
        let mut canvas = BufferCanvas::new(frame.buffer_mut(), area, theme);
        view.draw(&mut canvas);
    }
}

fn draw_status(frame: &mut Frame, area: Rect, state: &AppState, theme: &MenuTheme) {
    let title = match state.current_panel() {
        Some(panel) => format!(" Menu: {} ", panel),
        None => " Menu (closed) ".to_string(),
    };

    let lines = vec![
        Line::from(Span::styled(state.last_action.as_str(), theme.status_style())),
        Line::from(Span::styled(HELP, theme.help_style())),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .title_alignment(Alignment::Left),
    );
    frame.render_widget(paragraph, area);
}
