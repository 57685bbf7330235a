//! Menu tree loader.

use std::path::Path;

use anyhow::Context;
use menu_core::{MenuConfig, MenuNode};

use crate::loaders::{LoadResult, read_file};
use crate::tree::MenuSpec;

/// Loader for menu trees from RON files.
pub struct TreeLoader;

impl TreeLoader {
    /// Load a tree description without building it.
    pub fn load_spec(path: &Path) -> LoadResult<MenuSpec> {
        let content = read_file(path)?;
        Self::parse_spec(&content).with_context(|| format!("in {}", path.display()))
    }

    /// Parse a tree description from RON text.
    pub fn parse_spec(content: &str) -> LoadResult<MenuSpec> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse menu RON: {}", e))
    }

    /// Load and build a tree, ready to hand to a `MenuManager`.
    pub fn load(path: &Path, config: &MenuConfig) -> LoadResult<MenuNode> {
        let spec = Self::load_spec(path)?;
        let root = spec
            .build(config)
            .with_context(|| format!("Failed to build menu tree from {}", path.display()))?;

        tracing::debug!(
            path = %path.display(),
            nodes = spec.node_count(),
            "loaded menu tree"
        );
        Ok(root)
    }
}
