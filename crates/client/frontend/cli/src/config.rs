//! Terminal host configuration.
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use menu_core::Vec2;

/// Terminal demo configuration.
///
/// Layout parameters of the menu itself live in [`menu_core::MenuConfig`];
/// this only covers what the host decides.
#[derive(Clone, Debug)]
pub struct CliConfig {
    /// RON menu tree to load instead of the built-in battle menu.
    pub tree_path: Option<PathBuf>,
    /// TOML layout to load instead of the terminal defaults.
    pub layout_path: Option<PathBuf>,
    /// Screen cell of the outermost panel's top-left corner.
    pub origin: Vec2,
    /// Interval between input polls and redraws.
    pub frame_interval: Duration,
}

impl CliConfig {
    pub const DEFAULT_ORIGIN: Vec2 = Vec2::new(2, 1);
    pub const DEFAULT_FRAME_MS: u64 = 16;

    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `MENU_TREE_PATH` - RON menu tree (default: built-in battle menu)
    /// - `MENU_LAYOUT_PATH` - TOML layout (default: one patch per cell)
    /// - `MENU_ORIGIN_X`, `MENU_ORIGIN_Y` - Outer panel position (default: 2, 1)
    /// - `MENU_FRAME_MS` - Poll interval in milliseconds (default: 16)
    pub fn from_env() -> Self {
        let mut config = Self {
            tree_path: env::var_os("MENU_TREE_PATH").map(PathBuf::from),
            layout_path: env::var_os("MENU_LAYOUT_PATH").map(PathBuf::from),
            ..Self::default()
        };

        if let Some(x) = read_env::<i32>("MENU_ORIGIN_X") {
            config.origin.x = x.max(0);
        }
        if let Some(y) = read_env::<i32>("MENU_ORIGIN_Y") {
            config.origin.y = y.max(0);
        }
        if let Some(ms) = read_env::<u64>("MENU_FRAME_MS") {
            config.frame_interval = Duration::from_millis(ms.max(1));
        }

        config
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            tree_path: None,
            layout_path: None,
            origin: Self::DEFAULT_ORIGIN,
            frame_interval: Duration::from_millis(Self::DEFAULT_FRAME_MS),
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
