//! Menu layout loader.

use std::path::Path;

use menu_core::MenuConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for menu layout from TOML files.
///
/// Every key is optional; missing keys keep the [`MenuConfig`] defaults.
///
/// ```toml
/// padding = { x = 2, y = 0 }
/// window_offset = { x = 4, y = 2 }
/// patch_size = { x = 1, y = 1 }
/// ```
pub struct LayoutLoader;

impl LayoutLoader {
    /// Load a layout from a TOML file.
    pub fn load(path: &Path) -> LoadResult<MenuConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse a layout from TOML text.
    pub fn parse(content: &str) -> LoadResult<MenuConfig> {
        let config: MenuConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse layout TOML: {}", e))?;

        if config.patch_size.x <= 0 || config.patch_size.y <= 0 {
            anyhow::bail!("patch_size must be positive, got {}", config.patch_size);
        }
        Ok(config)
    }
}
