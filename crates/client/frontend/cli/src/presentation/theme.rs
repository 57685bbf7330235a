//! Glyphs and colours for drawing menu patches in a terminal.
//!
//! The pixel skin addresses patches by sheet offset; here each patch maps to
//! a single box-drawing or arrow glyph instead.

use menu_core::{FramePart, Patch};
use ratatui::style::{Color, Modifier, Style};

/// Terminal skin for the menu.
#[derive(Clone, Copy, Debug, Default)]
pub struct MenuTheme;

impl MenuTheme {
    pub fn new() -> Self {
        Self
    }

    pub fn glyph(&self, patch: Patch) -> char {
        match patch {
            Patch::Frame(part) => match part {
                FramePart::TopLeft => '┌',
                FramePart::Top | FramePart::Bottom => '─',
                FramePart::TopRight => '┐',
                FramePart::Left | FramePart::Right => '│',
                FramePart::Centre => ' ',
                FramePart::BottomLeft => '└',
                FramePart::BottomRight => '┘',
            },
            Patch::ScrollUp => '▲',
            Patch::ScrollDown => '▼',
            Patch::Expand => '►',
            Patch::Cursor => '▶',
        }
    }

    pub fn patch_style(&self, patch: Patch) -> Style {
        match patch {
            Patch::Frame(_) => Style::default().fg(Color::Cyan),
            Patch::ScrollUp | Patch::ScrollDown => Style::default().fg(Color::Yellow),
            Patch::Expand => Style::default().fg(Color::LightBlue),
            Patch::Cursor => Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        }
    }

    pub fn text_style(&self, enabled: bool) -> Style {
        if enabled {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    }

    pub fn status_style(&self) -> Style {
        Style::default().fg(Color::White)
    }

    pub fn help_style(&self) -> Style {
        Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::ITALIC)
    }
}
