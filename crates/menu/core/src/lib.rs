//! Hierarchical pop-up menu navigation.
//!
//! `menu-core` owns the menu tree ([`MenuNode`]), the paged grid cursor each
//! node carries, and the panel stack ([`MenuManager`]) that walks nested
//! submenus. It never draws: hosts pull a [`MenuView`] or hand a
//! [`MenuCanvas`] to [`MenuManager::draw`]. Every input is valid in every
//! state; the only fallible step is [`MenuNode::build`].
pub mod config;
pub mod error;
pub mod geometry;
pub mod input;
pub mod manager;
pub mod node;
pub mod view;
pub use config::MenuConfig;
pub use error::BuildError;
pub use geometry::Vec2;
pub use input::MenuInput;
pub use manager::{MenuManager, MenuOutcome};
pub use node::{CommandId, ConfirmTarget, MenuNode};
pub use view::{
    CursorRect, FramePart, ItemView, MenuCanvas, MenuView, PanelView, Patch, ScrollHints,
};
