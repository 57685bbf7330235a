//! Tail demo logs command
//!
//! Follows a `menu-demo` session log, optionally narrowed to one crate's
//! events (`--target menu_core`) or a minimum level. Menu selections and
//! warnings are highlighted.

use anyhow::{Context, Result};
use clap::Parser;
use console::{StyledObject, style};
use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::time::Duration;
use tracing::Level;

use menu_cli::logging::{self, LogSession};

/// Message logged by the core when an enabled leaf is confirmed.
const SELECTION_EVENT: &str = "menu entry selected";

/// Follow the menu demo log
#[derive(Parser, Debug)]
pub struct TailLogs {
    /// Session ID to follow (defaults to the newest)
    pub session: Option<String>,

    /// Number of matching lines to show from history before following
    #[arg(short = 'n', long, default_value = "10")]
    pub lines: usize,

    /// Only show events whose target starts with this prefix (e.g. menu_core)
    #[arg(short, long)]
    pub target: Option<String>,

    /// Most verbose level to show (error, warn, info, debug, trace)
    #[arg(short, long, default_value = "trace")]
    pub level: Level,

    /// Poll interval in milliseconds
    #[arg(long, default_value = "100")]
    pub poll_interval: u64,
}

/// Level, target and message of one formatted event line.
#[derive(Debug, PartialEq, Eq)]
struct LogLine<'a> {
    level: Level,
    target: &'a str,
    message: &'a str,
}

impl<'a> LogLine<'a> {
    /// Parses `<timestamp> <LEVEL> <target>: <message>`.
    fn parse(line: &'a str) -> Option<Self> {
        let (_, rest) = line.trim_start().split_once(char::is_whitespace)?;
        let rest = rest.trim_start();
        let (level, rest) = rest.split_once(char::is_whitespace)?;
        let (target, message) = rest.trim_start().split_once(": ")?;
        if target.contains(char::is_whitespace) {
            return None;
        }
        Some(Self {
            level: level.parse().ok()?,
            target,
            message,
        })
    }
}

impl TailLogs {
    pub fn execute(self) -> Result<()> {
        let log_dir = logging::log_dir();
        let session = self.pick_session(&logging::sessions(&log_dir)?)?;
        let log_path = session.log_file();

        println!("{}", style("Following menu demo log").green().bold());
        println!("  Session:  {}", style(&session.id).cyan());
        println!("  Log file: {}", style(log_path.display()).dim());
        if let Some(target) = &self.target {
            println!("  Target:   {}", style(target).cyan());
        }
        println!();

        let file = File::open(&log_path)
            .with_context(|| format!("Failed to open log file: {}", log_path.display()))?;
        let mut reader = BufReader::new(file);

        for line in self.history(&mut reader)? {
            println!("{}", self.paint(&line));
        }
        self.follow(reader)
    }

    fn pick_session(&self, sessions: &[LogSession]) -> Result<LogSession> {
        let found = match &self.session {
            Some(id) => sessions.iter().find(|session| &session.id == id),
            None => sessions.first(),
        };
        match found {
            Some(session) => Ok(session.clone()),
            None => {
                eprintln!("{}", style("No matching demo session").red().bold());
                eprintln!("  Run the demo first to generate logs:");
                eprintln!("    {}", style("cargo run -p menu-cli").cyan());
                anyhow::bail!("No session log found")
            }
        }
    }

    /// Whether a line passes the target and level filters. Lines that do
    /// not parse as events (wrapped output) only pass when no filter is set.
    fn matches(&self, line: &str) -> bool {
        match LogLine::parse(line) {
            Some(event) => {
                event.level <= self.level
                    && self
                        .target
                        .as_deref()
                        .is_none_or(|prefix| event.target.starts_with(prefix))
            }
            None => self.target.is_none() && self.level == Level::TRACE,
        }
    }

    /// The last `lines` matching lines already in the file.
    fn history(&self, reader: &mut impl BufRead) -> Result<VecDeque<String>> {
        let mut kept = VecDeque::with_capacity(self.lines);
        let mut line = String::new();
        while reader.read_line(&mut line)? > 0 {
            let trimmed = line.trim_end();
            if self.lines > 0 && self.matches(trimmed) {
                if kept.len() == self.lines {
                    kept.pop_front();
                }
                kept.push_back(trimmed.to_owned());
            }
            line.clear();
        }
        Ok(kept)
    }

    fn follow(&self, mut reader: impl BufRead) -> Result<()> {
        let poll_interval = Duration::from_millis(self.poll_interval);
        let mut line = String::new();
        loop {
            let read = reader
                .read_line(&mut line)
                .context("Failed to read log file")?;
            if read == 0 {
                std::thread::sleep(poll_interval);
                continue;
            }
            // A partial line stays buffered until the writer finishes it.
            if line.ends_with('\n') {
                let trimmed = line.trim_end();
                if self.matches(trimmed) {
                    println!("{}", self.paint(trimmed));
                }
                line.clear();
            }
        }
    }

    fn paint<'a>(&self, line: &'a str) -> StyledObject<&'a str> {
        match LogLine::parse(line) {
            Some(event) if event.message.starts_with(SELECTION_EVENT) => {
                style(line).green().bold()
            }
            Some(event) if event.level == Level::ERROR => style(line).red(),
            Some(event) if event.level == Level::WARN => style(line).yellow(),
            Some(event) if event.level >= Level::DEBUG => style(line).dim(),
            _ => style(line),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::path::PathBuf;

    use super::*;

    const LOG: &str = "\
2026-01-01T10:00:00.000001Z  INFO menu_cli::app: menu loaded tree=\"root\" entries=5
2026-01-01T10:00:01.000001Z DEBUG menu_core::manager: menu opened menu=root
2026-01-01T10:00:02.000001Z TRACE menu_core::node::cursor: cursor moved menu=root direction=\"down\"
2026-01-01T10:00:03.000001Z DEBUG menu_core::manager: menu entry selected menu=root selected=Attack id=1000
2026-01-01T10:00:04.000001Z  WARN menu_cli::presentation::terminal: Failed to restore terminal: gone
";

    fn tail(args: &[&str]) -> TailLogs {
        TailLogs::parse_from(std::iter::once("tail-logs").chain(args.iter().copied()))
    }

    fn history(args: &[&str]) -> Vec<String> {
        tail(args)
            .history(&mut Cursor::new(LOG))
            .unwrap()
            .into_iter()
            .collect()
    }

    #[test]
    fn parses_formatted_event_lines() {
        let line = LOG.lines().nth(3).unwrap();
        let event = LogLine::parse(line).unwrap();
        assert_eq!(event.level, Level::DEBUG);
        assert_eq!(event.target, "menu_core::manager");
        assert!(event.message.starts_with(SELECTION_EVENT));

        assert!(LogLine::parse("  continued output").is_none());
        assert!(LogLine::parse("").is_none());
    }

    #[test]
    fn target_prefix_keeps_core_events_only() {
        let kept = history(&["--target", "menu_core"]);
        assert_eq!(kept.len(), 3);
        assert!(kept.iter().all(|line| line.contains("menu_core::")));
    }

    #[test]
    fn level_and_count_limit_history() {
        let kept = history(&["--level", "info"]);
        assert_eq!(kept.len(), 2);
        assert!(kept[1].contains("WARN"));

        let kept = history(&["-n", "2", "--target", "menu_core", "--level", "debug"]);
        assert_eq!(kept.len(), 2);
        assert!(kept[1].contains(SELECTION_EVENT));
    }

    #[test]
    fn picks_named_or_newest_session() {
        let sessions = [
            LogSession {
                id: "session_20".into(),
                started: 20,
                dir: PathBuf::from("/logs/session_20"),
            },
            LogSession {
                id: "session_10".into(),
                started: 10,
                dir: PathBuf::from("/logs/session_10"),
            },
        ];

        assert_eq!(tail(&[]).pick_session(&sessions).unwrap().started, 20);
        assert_eq!(
            tail(&["session_10"]).pick_session(&sessions).unwrap().started,
            10
        );
        assert!(tail(&["session_99"]).pick_session(&sessions).is_err());
    }
}
