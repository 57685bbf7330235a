//! Application state: the menu tree, its navigator and the last selection.

use menu_core::{MenuConfig, MenuInput, MenuManager, MenuNode, MenuOutcome, MenuView, Vec2};

/// Message shown before anything has been selected.
pub const NOTHING_SELECTED: &str = "Nothing Selected";

/// Mutable application state driven by the event loop.
#[derive(Debug)]
pub struct AppState {
    root: MenuNode,
    manager: MenuManager,
    /// Human-readable result of the most recent selection.
    pub last_action: String,
}

impl AppState {
    /// Takes ownership of a built tree and opens it.
    pub fn new(root: MenuNode, config: &MenuConfig) -> Self {
        let mut manager = MenuManager::with_config(config);
        manager.open(&root);
        Self {
            root,
            manager,
            last_action: NOTHING_SELECTED.to_string(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.manager.is_open()
    }

    pub fn depth(&self) -> usize {
        self.manager.depth()
    }

    /// Applies one input. Returns true when the screen needs a redraw.
    ///
    /// Confirming an enabled leaf records it and closes the menu.
    pub fn apply(&mut self, input: MenuInput) -> bool {
        let selection = match self.manager.dispatch(&mut self.root, input) {
            MenuOutcome::Ignored => return false,
            MenuOutcome::Selected(leaf) => {
                Some(format!("Selected: {} ID: {}", leaf.name(), leaf.id()))
            }
            outcome => {
                tracing::trace!(?input, ?outcome, "menu input");
                None
            }
        };

        if let Some(message) = selection {
            tracing::info!("{}", message);
            self.last_action = message;
            self.manager.close();
        }
        true
    }

    /// Render description of the open panels, if any.
    pub fn view(&self, offset: Vec2) -> Option<MenuView> {
        self.manager.view(&self.root, offset)
    }

    /// Title of the innermost open panel.
    pub fn current_panel(&self) -> Option<&str> {
        self.manager.top(&self.root).map(MenuNode::name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::battle_menu;

    fn state() -> AppState {
        let config = MenuConfig::cell_grid();
        AppState::new(battle_menu(&config).unwrap(), &config)
    }

    #[test]
    fn starts_open_on_root() {
        let state = state();
        assert!(state.is_open());
        assert_eq!(state.current_panel(), Some("root"));
        assert_eq!(state.last_action, NOTHING_SELECTED);
    }

    #[test]
    fn selection_is_recorded_and_closes_menu() {
        let mut state = state();

        assert!(state.apply(MenuInput::Confirm));

        assert_eq!(state.last_action, "Selected: Attack ID: 1000");
        assert!(!state.is_open());
        assert!(state.view(Vec2::ZERO).is_none());
    }

    #[test]
    fn disabled_item_leaves_everything_as_is() {
        let mut state = state();
        for input in [
            MenuInput::Down,
            MenuInput::Down,
            MenuInput::Down,
            MenuInput::Confirm,
            MenuInput::Right,
            MenuInput::Down,
        ] {
            state.apply(input);
        }
        assert_eq!(state.current_panel(), Some("Items"));

        assert!(!state.apply(MenuInput::Confirm));
        assert!(state.is_open());
        assert_eq!(state.last_action, NOTHING_SELECTED);
    }

    #[test]
    fn toggle_reopens_at_root() {
        let mut state = state();
        state.apply(MenuInput::Down);
        state.apply(MenuInput::Confirm);
        assert_eq!(state.depth(), 2);

        assert!(state.apply(MenuInput::Toggle));
        assert!(!state.is_open());
        assert!(state.apply(MenuInput::Toggle));
        assert_eq!(state.depth(), 1);
    }

    #[test]
    fn move_against_edge_needs_no_redraw() {
        let mut state = state();
        assert!(!state.apply(MenuInput::Up));
        assert!(state.apply(MenuInput::Down));
    }

    #[test]
    fn input_while_closed_needs_no_redraw() {
        let mut state = state();
        state.apply(MenuInput::Back);
        assert!(!state.is_open());
        assert!(!state.apply(MenuInput::Up));
        assert!(!state.apply(MenuInput::Confirm));
    }
}
