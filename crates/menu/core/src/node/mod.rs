//! Menu tree nodes.
//!
//! A [`MenuNode`] is either a leaf command (carries a [`CommandId`]) or a
//! container whose children are laid out on a paged grid. Trees are
//! described through the construction API, measured once by
//! [`MenuNode::build`], and then navigated with the directional operations
//! (`on_up`, `on_down`, `on_left`, `on_right`) or, more commonly, through a
//! [`MenuManager`](crate::MenuManager).

mod build;
mod cursor;
mod layout;

use std::collections::HashMap;
use std::fmt;

use crate::{MenuConfig, Vec2};

/// Application-defined identifier reported when a leaf is confirmed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CommandId(pub i32);

impl CommandId {
    /// Conventional id of container nodes.
    pub const NONE: Self = Self(-1);

    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == Self::NONE.0
    }
}

impl Default for CommandId {
    fn default() -> Self {
        Self::NONE
    }
}

impl fmt::Display for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What confirming the current entry of a node means.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfirmTarget {
    /// The selected child is a container; descend into `children[index]`.
    Descend(usize),
    /// The selected child is a leaf (or there is nothing to descend into).
    Leaf,
}

/// A node of the menu tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuNode {
    name: String,
    id: CommandId,
    enabled: bool,
    children: Vec<MenuNode>,
    index: HashMap<String, usize>,
    table: Option<Vec2>,
    padding: Vec2,

    // derived by build()
    cell_size: Vec2,
    size_in_patches: Vec2,
    total_rows: i32,

    // navigation state
    cursor: Vec2,
    cursor_index: usize,
    top_visible_row: i32,
}

impl MenuNode {
    /// Name given to nodes created through [`MenuNode::root`].
    pub const ROOT_NAME: &'static str = "root";

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: CommandId::NONE,
            enabled: true,
            children: Vec::new(),
            index: HashMap::new(),
            table: None,
            padding: MenuConfig::DEFAULT_PADDING,
            cell_size: Vec2::ZERO,
            size_in_patches: Vec2::ZERO,
            total_rows: 0,
            cursor: Vec2::ZERO,
            cursor_index: 0,
            top_visible_row: 0,
        }
    }

    pub fn root() -> Self {
        Self::new(Self::ROOT_NAME)
    }

    // ===== construction =====

    /// Returns the child called `name`, appending a new enabled child if
    /// none exists yet. Insertion order is display order.
    pub fn get_or_create_child(&mut self, name: &str) -> &mut MenuNode {
        let slot = match self.index.get(name) {
            Some(&slot) => slot,
            None => {
                let slot = self.children.len();
                self.children.push(MenuNode::new(name));
                self.index.insert(name.to_owned(), slot);
                slot
            }
        };
        &mut self.children[slot]
    }

    pub fn set_id(&mut self, id: i32) -> &mut Self {
        self.id = CommandId(id);
        self
    }

    pub fn set_enabled(&mut self, enabled: bool) -> &mut Self {
        self.enabled = enabled;
        self
    }

    /// Sets the grid used to lay out this node's children:
    /// `columns` cells per row and `rows` rows per visible page.
    pub fn set_table(&mut self, columns: i32, rows: i32) -> &mut Self {
        self.table = Some(Vec2::new(columns, rows));
        self
    }

    /// Sets the empty cells between neighbouring entries.
    pub fn set_padding(&mut self, padding: Vec2) -> &mut Self {
        self.padding = padding;
        self
    }

    // ===== queries =====

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> CommandId {
        self.id
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn children(&self) -> &[MenuNode] {
        &self.children
    }

    pub(crate) fn child_at_mut(&mut self, slot: usize) -> Option<&mut MenuNode> {
        self.children.get_mut(slot)
    }

    /// Looks up a child by name without creating it.
    pub fn child(&self, name: &str) -> Option<&MenuNode> {
        self.index.get(name).map(|&slot| &self.children[slot])
    }

    /// Mutable lookup by name without creating the child.
    pub fn child_mut(&mut self, name: &str) -> Option<&mut MenuNode> {
        let slot = *self.index.get(name)?;
        self.children.get_mut(slot)
    }

    pub fn table(&self) -> Option<Vec2> {
        self.table
    }

    pub fn padding(&self) -> Vec2 {
        self.padding
    }

    /// Bounding box of this node's own label in grid cells.
    pub fn measured_size(&self) -> Vec2 {
        let width = i32::try_from(self.name.chars().count()).unwrap_or(i32::MAX);
        Vec2::new(width, 1)
    }

    /// Largest measured size among the children; valid after `build()`.
    pub fn cell_size(&self) -> Vec2 {
        self.cell_size
    }

    /// Panel size in patches including the one-patch border; valid after `build()`.
    pub fn size_in_patches(&self) -> Vec2 {
        self.size_in_patches
    }

    pub fn total_rows(&self) -> i32 {
        self.total_rows
    }

    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    pub fn cursor_index(&self) -> usize {
        self.cursor_index
    }

    pub fn top_visible_row(&self) -> i32 {
        self.top_visible_row
    }

    /// The child under the cursor, if the node has any children.
    pub fn selected(&self) -> Option<&MenuNode> {
        self.children.get(self.cursor_index)
    }

    /// Reports whether confirming now would descend or confirm a leaf.
    pub fn on_confirm(&self) -> ConfirmTarget {
        match self.selected() {
            Some(child) if child.has_children() => ConfirmTarget::Descend(self.cursor_index),
            _ => ConfirmTarget::Leaf,
        }
    }

    /// Number of columns, treating an unset table as a single column.
    fn columns(&self) -> i32 {
        self.table.map_or(1, |table| table.x.max(1))
    }

    /// Rows visible per page, treating an unset table as one row.
    fn page_rows(&self) -> i32 {
        self.table.map_or(1, |table| table.y.max(1))
    }

    /// Largest valid `top_visible_row`.
    fn max_top_row(&self) -> i32 {
        (self.total_rows - self.page_rows()).max(0)
    }
}
