//! Logical input events understood by the menu.

/// One logical input event delivered to a [`MenuManager`](crate::MenuManager).
///
/// Hosts translate their own key or pad state into these; every event is
/// valid to deliver in every state.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum MenuInput {
    Up,
    Down,
    Left,
    Right,
    /// Descend into the selected submenu or select the current leaf.
    Confirm,
    /// Leave the innermost panel; closes the menu from the root panel.
    Back,
    /// Open the menu when closed, close it when open.
    Toggle,
}

impl MenuInput {
    /// True for the four cursor movements.
    pub const fn is_directional(self) -> bool {
        matches!(self, Self::Up | Self::Down | Self::Left | Self::Right)
    }
}
