//! Glue code tying configuration, the menu tree and the terminal UI together.
use anyhow::{Context, Result};
use menu_content::{LayoutLoader, TreeLoader};
use menu_core::{MenuConfig, MenuNode};

use crate::config::CliConfig;
use crate::demo;
use crate::event::EventLoop;
use crate::presentation::terminal;
use crate::state::AppState;

pub struct CliApp {
    cli_config: CliConfig,
    menu_config: MenuConfig,
    root: MenuNode,
}

impl CliApp {
    /// Resolves the layout and tree named by `cli_config`, falling back to
    /// the terminal layout and the built-in battle menu.
    pub fn load(cli_config: CliConfig) -> Result<Self> {
        let menu_config = match &cli_config.layout_path {
            Some(path) => LayoutLoader::load(path)?,
            None => MenuConfig::cell_grid(),
        };

        let root = match &cli_config.tree_path {
            Some(path) => TreeLoader::load(path, &menu_config)?,
            None => demo::battle_menu(&menu_config).context("Failed to build battle menu")?,
        };

        tracing::info!(
            tree = root.name(),
            entries = root.children().len(),
            "menu loaded"
        );

        Ok(Self {
            cli_config,
            menu_config,
            root,
        })
    }

    pub async fn run(self) -> Result<()> {
        tracing::info!("Menu demo starting...");

        let CliApp {
            cli_config,
            menu_config,
            root,
        } = self;

        let app_state = AppState::new(root, &menu_config);
        if !app_state.is_open() {
            tracing::warn!("Menu tree is empty; press q to quit");
        }

        // Guard first so a failed init still leaves raw mode.
        let _guard = terminal::TerminalGuard;
        let mut tui = terminal::init()?;

        let final_state = EventLoop::new(app_state, cli_config).run(&mut tui).await?;

        tracing::info!(last_action = %final_state.last_action, "Menu demo finished");
        Ok(())
    }
}
