//! Input processing for the menu demo.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application only deals in [`MenuInput`] events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use menu_core::MenuInput;

/// High-level outcome of processing a keyboard event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Forward a logical event to the menu.
    Menu(MenuInput),
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into menu events.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a higher-level command.
    pub fn handle_key(&self, key: KeyEvent) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            KeyCode::Char(ch) => self.handle_char(ch),
            KeyCode::Left => KeyAction::Menu(MenuInput::Left),
            KeyCode::Right => KeyAction::Menu(MenuInput::Right),
            KeyCode::Up => KeyAction::Menu(MenuInput::Up),
            KeyCode::Down => KeyAction::Menu(MenuInput::Down),
            KeyCode::Enter => KeyAction::Menu(MenuInput::Confirm),
            KeyCode::Backspace | KeyCode::Esc => KeyAction::Menu(MenuInput::Back),
            _ => KeyAction::None,
        }
    }

    fn handle_char(&self, raw: char) -> KeyAction {
        let ch = raw.to_ascii_lowercase();
        let input = match ch {
            'q' => return KeyAction::Quit,
            'h' => MenuInput::Left,
            'j' => MenuInput::Down,
            'k' => MenuInput::Up,
            'l' => MenuInput::Right,
            'x' => MenuInput::Confirm,
            'z' => MenuInput::Back,
            'c' => MenuInput::Toggle,
            _ => return KeyAction::None,
        };
        KeyAction::Menu(input)
    }
}
