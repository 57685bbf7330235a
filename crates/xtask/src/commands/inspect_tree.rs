//! Inspect menu tree files
//!
//! Loads a RON menu description, builds it, and prints the measured tree.

use anyhow::Result;
use clap::Parser;
use console::style;
use serde::Serialize;
use std::path::PathBuf;

use menu_content::{LayoutLoader, TreeLoader};
use menu_core::{MenuConfig, MenuNode};

/// Inspect a menu tree file
#[derive(Parser)]
pub struct InspectTree {
    /// Path to the RON tree description
    #[arg(value_name = "FILE")]
    path: PathBuf,

    /// Layout TOML to build with (defaults to the terminal cell grid)
    #[arg(short, long, value_name = "FILE")]
    layout: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Indented tree with ids and panel sizes
    Summary,
    /// Full JSON output
    Json,
}

/// Measured view of one node, as printed by `--format json`.
#[derive(Debug, Serialize)]
struct NodeReport {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<i32>,
    enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    table: Option<(i32, i32)>,
    total_rows: i32,
    size_in_patches: (i32, i32),
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<NodeReport>,
}

impl NodeReport {
    fn from_node(node: &MenuNode) -> Self {
        let size = node.size_in_patches();
        Self {
            name: node.name().to_owned(),
            id: (!node.id().is_none()).then_some(node.id().0),
            enabled: node.is_enabled(),
            table: node.table().map(|table| (table.x, table.y)),
            total_rows: node.total_rows(),
            size_in_patches: (size.x, size.y),
            children: node.children().iter().map(Self::from_node).collect(),
        }
    }

    fn count(&self) -> usize {
        1 + self.children.iter().map(Self::count).sum::<usize>()
    }
}

impl InspectTree {
    pub fn execute(self) -> Result<()> {
        let config = match &self.layout {
            Some(path) => LayoutLoader::load(path)?,
            None => MenuConfig::cell_grid(),
        };
        let root = TreeLoader::load(&self.path, &config)?;
        let report = NodeReport::from_node(&root);

        match self.format {
            OutputFormat::Summary => {
                println!("{} {}", style("Tree File:").bold().cyan(), self.path.display());
                println!("{} {}", style("Nodes:").bold().cyan(), report.count());
                println!();
                print_node(&report, 0);
            }
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        }

        Ok(())
    }
}

fn print_node(node: &NodeReport, depth: usize) {
    let indent = "  ".repeat(depth);
    let name = if node.enabled {
        style(node.name.as_str()).bold()
    } else {
        style(node.name.as_str()).dim()
    };

    match node.table {
        Some((columns, rows)) => println!(
            "{indent}{name} {} {}",
            style(format!("[{columns}x{rows}, {} rows]", node.total_rows)).yellow(),
            style(format!(
                "{}x{} patches",
                node.size_in_patches.0, node.size_in_patches.1
            ))
            .dim()
        ),
        None => {
            let id = node.id.map_or_else(|| "-".to_string(), |id| id.to_string());
            let state = if node.enabled { "" } else { " (disabled)" };
            println!("{indent}{name} {}{state}", style(format!("#{id}")).cyan());
        }
    }

    for child in &node.children {
        print_node(child, depth + 1);
    }
}
