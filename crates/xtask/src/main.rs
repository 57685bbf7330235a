//! Development tasks for the menu workspace
//!
//! This binary provides development utilities using the cargo-xtask pattern.
//! Run with: `cargo xtask <command>`

mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Clean, InspectTree, TailLogs};

/// Development tasks for the menu workspace
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tools for the menu workspace", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Follow the menu demo log
    TailLogs(TailLogs),

    /// Clean demo logs
    Clean(Clean),

    /// Build a menu tree file and print its layout
    InspectTree(InspectTree),
}

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    match cli.command {
        Command::TailLogs(cmd) => cmd.execute(),
        Command::Clean(cmd) => cmd.execute(),
        Command::InspectTree(cmd) => cmd.execute(),
    }
}
