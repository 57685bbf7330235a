//! Terminal host for the pop-up menu engine.
//!
//! The host owns the menu tree, turns key presses into [`menu_core::MenuInput`]
//! events and draws the open panels through a ratatui-backed
//! [`menu_core::MenuCanvas`].
//!
//! # Architecture
//!
//! - `state`: tree, navigator and last selection; no terminal access
//! - `event`: per-frame input polling and redraw decisions
//! - `presentation`: terminal setup, theme, canvas and frame layout

mod app;
mod config;
pub mod demo;
mod event;
mod input;
pub mod logging;
pub mod presentation;
mod state;

pub use app::CliApp;
pub use config::CliConfig;
pub use state::AppState;
