use crate::Vec2;

/// Layout constants and tunable parameters shared by nodes and the manager.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MenuConfig {
    /// Empty cells between neighbouring entries of a panel grid.
    pub padding: Vec2,
    /// Screen offset applied to each nested panel relative to its parent.
    pub window_offset: Vec2,
    /// Size of a single skin patch in screen units.
    pub patch_size: Vec2,
}

impl MenuConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_PADDING: Vec2 = Vec2::new(2, 0);
    pub const DEFAULT_WINDOW_OFFSET: Vec2 = Vec2::new(4, 4);
    pub const DEFAULT_PATCH_SIZE: Vec2 = Vec2::new(8, 8);

    pub fn new() -> Self {
        Self {
            padding: Self::DEFAULT_PADDING,
            window_offset: Self::DEFAULT_WINDOW_OFFSET,
            patch_size: Self::DEFAULT_PATCH_SIZE,
        }
    }

    /// Layout for hosts where one patch is one screen cell (terminals).
    pub fn cell_grid() -> Self {
        Self {
            padding: Self::DEFAULT_PADDING,
            window_offset: Vec2::new(4, 2),
            patch_size: Vec2::ONE,
        }
    }
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self::new()
    }
}
