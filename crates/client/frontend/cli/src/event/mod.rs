//! Event handling for the menu demo.
//!
//! The loop polls the keyboard once per frame, routes the decoded input to
//! the application state and redraws when something changed.

mod r#loop;

pub use r#loop::EventLoop;
