//! Command implementations for xtask
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod clean;
mod inspect_tree;
mod tail_logs;

pub use clean::Clean;
pub use inspect_tree::InspectTree;
pub use tail_logs::TailLogs;
