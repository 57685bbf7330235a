//! Terminal rendering: setup, theme, the ratatui-backed menu canvas and
//! the frame layout.

pub mod canvas;
pub mod terminal;
pub mod theme;
pub mod ui;
