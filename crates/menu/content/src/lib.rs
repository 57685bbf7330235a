//! Data-driven menu definitions and loaders.
//!
//! Menus can be described in code with [`MenuSpec`] or loaded from files:
//! - Menu trees (RON)
//! - Layout configuration (TOML)
//!
//! Loaded descriptions are turned into built [`menu_core::MenuNode`] trees;
//! nothing here survives past construction.

pub mod tree;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use tree::MenuSpec;

#[cfg(feature = "loaders")]
pub use loaders::{LayoutLoader, LoadResult, TreeLoader};
