//! Bottom-up measurement pass.

use super::MenuNode;
use crate::{BuildError, Vec2};

impl MenuNode {
    /// Measures this node and every descendant container.
    ///
    /// Each container's cell size is the largest label among its children,
    /// and its panel size is
    /// `table * cell + (table - 1) * padding + 2` patches (one-patch border).
    /// Navigation state is re-clamped against the new geometry, so building
    /// again after editing the tree is safe.
    ///
    /// # Errors
    ///
    /// Fails on the first container (in post-order) whose table is missing,
    /// has a non-positive dimension or yields a panel too large for `i32`.
    pub fn build(&mut self) -> Result<(), BuildError> {
        if self.children.is_empty() {
            self.cell_size = Vec2::ZERO;
            self.size_in_patches = Vec2::ZERO;
            self.total_rows = 0;
            self.clamp_cursor();
            return Ok(());
        }

        let table = self.table.ok_or_else(|| BuildError::MissingTable {
            name: self.name.clone(),
        })?;
        if table.x <= 0 || table.y <= 0 {
            return Err(BuildError::InvalidTable {
                name: self.name.clone(),
                columns: table.x,
                rows: table.y,
            });
        }

        let mut cell_size = Vec2::ZERO;
        for child in &mut self.children {
            if child.has_children() {
                child.build()?;
            }
            cell_size = cell_size.max(child.measured_size());
        }

        let too_large = || BuildError::TableTooLarge {
            name: self.name.clone(),
            columns: table.x,
            rows: table.y,
        };
        table.x.checked_mul(table.y).ok_or_else(too_large)?;
        let size_in_patches = Vec2::new(
            panel_extent(table.x, cell_size.x, self.padding.x).ok_or_else(too_large)?,
            panel_extent(table.y, cell_size.y, self.padding.y).ok_or_else(too_large)?,
        );

        let count = self.child_count();
        self.cell_size = cell_size;
        self.size_in_patches = size_in_patches;
        self.total_rows = count / table.x + i32::from(count % table.x > 0);

        self.top_visible_row = self.top_visible_row.clamp(0, self.max_top_row());
        self.clamp_cursor();

        tracing::trace!(
            menu = %self.name,
            cell = %self.cell_size,
            patches = %self.size_in_patches,
            rows = self.total_rows,
            "built menu node"
        );
        Ok(())
    }

    pub(crate) fn child_count(&self) -> i32 {
        i32::try_from(self.children.len()).unwrap_or(i32::MAX)
    }
}

/// `cells * cell + (cells - 1) * padding + 2`, or `None` on overflow.
fn panel_extent(cells: i32, cell: i32, padding: i32) -> Option<i32> {
    cells
        .checked_mul(cell)?
        .checked_add((cells - 1).checked_mul(padding)?)?
        .checked_add(2)
}
