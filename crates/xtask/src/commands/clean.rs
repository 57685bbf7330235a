//! Clean demo logs command
//!
//! Removes the session logs written by `menu-demo`, either all of them or a
//! single session. Prompts for confirmation unless `--yes` is given.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use std::io::{self, Write};
use std::path::PathBuf;

use menu_cli::logging;

/// Clean demo logs
#[derive(Parser, Debug)]
pub struct Clean {
    /// Skip confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Specific session to clean (defaults to every session)
    #[arg(long)]
    pub session: Option<String>,
}

impl Clean {
    pub fn execute(self) -> Result<()> {
        let log_dir = logging::log_dir();

        let Some((label, target)) = self.target(log_dir)? else {
            println!("{}", style("Nothing to clean: no logs yet").dim());
            return Ok(());
        };

        println!("{}", style("Clean menu demo logs").yellow().bold());
        println!();
        println!("The following will be deleted:");
        println!("  {} {}", style("->").cyan(), style(&label).bold());
        println!("    {}", style(target.display()).dim());
        println!();

        if !self.yes && !confirm()? {
            println!("{}", style("Cancelled").dim());
            return Ok(());
        }

        print!("Deleting {}... ", label);
        io::stdout().flush()?;
        std::fs::remove_dir_all(&target)
            .with_context(|| format!("Failed to delete: {}", target.display()))?;
        println!("{}", style("done").green());

        Ok(())
    }

    fn target(&self, log_dir: PathBuf) -> Result<Option<(String, PathBuf)>> {
        let sessions = logging::sessions(&log_dir)?;
        match &self.session {
            Some(session_id) => {
                let Some(session) = sessions.into_iter().find(|s| &s.id == session_id) else {
                    eprintln!(
                        "{} Session not found: {}",
                        style("x").red().bold(),
                        style(session_id).cyan()
                    );
                    anyhow::bail!("Session directory does not exist");
                };
                Ok(Some((format!("Session logs ({session_id})"), session.dir)))
            }
            None if log_dir.exists() => Ok(Some((
                format!("All logs ({} sessions)", sessions.len()),
                log_dir,
            ))),
            None => Ok(None),
        }
    }
}

/// Prompt user for confirmation
fn confirm() -> Result<bool> {
    print!("{} ", style("Proceed? [y/N]").yellow().bold());
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    let input = input.trim().to_lowercase();
    Ok(input == "y" || input == "yes")
}
