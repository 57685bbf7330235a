//! Panel stack and traversal state machine.
//!
//! The manager never owns the tree. It remembers the open path as child
//! indices from the root and every call borrows the caller's root, so the
//! host keeps full ownership between frames. A path that no longer matches
//! the tree (the host edited it while open) resolves to "no panel" and the
//! affected call does nothing.

use crate::view::{MenuCanvas, MenuView};
use crate::{ConfirmTarget, MenuConfig, MenuInput, MenuNode, Vec2};

/// Result of routing one [`MenuInput`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuOutcome<'n> {
    /// Nothing changed (closed menu, move against an edge, disabled entry,
    /// childless root).
    Ignored,
    /// The innermost panel's cursor or visible page changed.
    Moved,
    /// A submenu was pushed; `depth` is the new panel count.
    Descended { depth: usize },
    /// The innermost panel was popped; `depth` is the new panel count.
    Ascended { depth: usize },
    Opened,
    Closed,
    /// An enabled leaf was confirmed. The menu stays open; hosts usually
    /// close it in response.
    Selected(&'n MenuNode),
}

impl MenuOutcome<'_> {
    pub fn is_ignored(&self) -> bool {
        matches!(self, Self::Ignored)
    }
}

#[derive(Clone, Debug)]
pub struct MenuManager {
    window_offset: Vec2,
    patch_size: Vec2,
    open: bool,
    /// Child index taken at each level below the root.
    trail: Vec<usize>,
}

impl MenuManager {
    pub fn new() -> Self {
        Self::with_config(&MenuConfig::default())
    }

    pub fn with_config(config: &MenuConfig) -> Self {
        Self {
            window_offset: config.window_offset,
            patch_size: config.patch_size,
            open: false,
            trail: Vec::new(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Number of open panels; zero when closed.
    pub fn depth(&self) -> usize {
        if self.open { self.trail.len() + 1 } else { 0 }
    }

    /// Child indices from the root to the innermost panel.
    pub fn path(&self) -> &[usize] {
        &self.trail
    }

    // ===== lifecycle =====

    /// Resets the stack to `[root]`, even if already open.
    ///
    /// A root without children has nothing to show; the menu is left closed
    /// and the call returns `false`.
    pub fn open(&mut self, root: &MenuNode) -> bool {
        if !root.has_children() {
            self.close();
            tracing::warn!(menu = %root.name(), "ignoring open of a menu without entries");
            return false;
        }
        self.open = true;
        self.trail.clear();
        tracing::debug!(menu = %root.name(), "menu opened");
        true
    }

    pub fn close(&mut self) {
        if self.open {
            tracing::debug!(depth = self.depth(), "menu closed");
        }
        self.open = false;
        self.trail.clear();
    }

    // ===== stack queries =====

    /// The innermost open panel.
    pub fn top<'n>(&self, root: &'n MenuNode) -> Option<&'n MenuNode> {
        if !self.open {
            return None;
        }
        self.trail
            .iter()
            .try_fold(root, |node, &slot| node.children().get(slot))
    }

    fn top_mut<'n>(&self, root: &'n mut MenuNode) -> Option<&'n mut MenuNode> {
        if !self.open {
            return None;
        }
        let mut node = root;
        for &slot in &self.trail {
            node = node.child_at_mut(slot)?;
        }
        Some(node)
    }

    /// Open panels from outermost to innermost. Stops early at a stale index.
    pub fn panels<'n>(&self, root: &'n MenuNode) -> Vec<&'n MenuNode> {
        if !self.open {
            return Vec::new();
        }
        let mut panels = Vec::with_capacity(self.trail.len() + 1);
        let mut node = root;
        panels.push(node);
        for &slot in &self.trail {
            match node.children().get(slot) {
                Some(child) => {
                    node = child;
                    panels.push(node);
                }
                None => break,
            }
        }
        panels
    }

    // ===== input =====

    pub fn on_up(&mut self, root: &mut MenuNode) {
        self.step(root, MenuNode::on_up);
    }

    pub fn on_down(&mut self, root: &mut MenuNode) {
        self.step(root, MenuNode::on_down);
    }

    pub fn on_left(&mut self, root: &mut MenuNode) {
        self.step(root, MenuNode::on_left);
    }

    pub fn on_right(&mut self, root: &mut MenuNode) {
        self.step(root, MenuNode::on_right);
    }

    /// Applies `movement` to the innermost panel. Returns true when the
    /// cursor or the visible page changed.
    fn step(&mut self, root: &mut MenuNode, movement: fn(&mut MenuNode)) -> bool {
        let Some(top) = self.top_mut(root) else {
            return false;
        };
        let before = (top.cursor(), top.top_visible_row());
        movement(top);
        (top.cursor(), top.top_visible_row()) != before
    }

    /// Confirms the entry under the innermost cursor.
    ///
    /// Returns the selected leaf when it is enabled. Confirming an enabled
    /// submenu pushes it and returns `None`; disabled entries are ignored.
    pub fn on_confirm<'n>(&mut self, root: &'n MenuNode) -> Option<&'n MenuNode> {
        let top = self.top(root)?;
        match top.on_confirm() {
            ConfirmTarget::Leaf => {
                let selected = top.selected().filter(|leaf| leaf.is_enabled())?;
                tracing::debug!(
                    menu = %top.name(),
                    selected = %selected.name(),
                    id = %selected.id(),
                    "menu entry selected"
                );
                Some(selected)
            }
            ConfirmTarget::Descend(slot) => {
                let child = top.children().get(slot)?;
                if child.is_enabled() {
                    self.trail.push(slot);
                    tracing::debug!(menu = %child.name(), depth = self.depth(), "submenu opened");
                }
                None
            }
        }
    }

    /// Pops the innermost panel. Popping the root panel closes the menu.
    pub fn on_back(&mut self) {
        if !self.open {
            return;
        }
        if self.trail.pop().is_some() {
            tracing::debug!(depth = self.depth(), "submenu closed");
        } else {
            self.close();
        }
    }

    /// Routes one logical event and reports what it did.
    pub fn dispatch<'n>(&mut self, root: &'n mut MenuNode, input: MenuInput) -> MenuOutcome<'n> {
        let moved = match input {
            MenuInput::Up => self.step(root, MenuNode::on_up),
            MenuInput::Down => self.step(root, MenuNode::on_down),
            MenuInput::Left => self.step(root, MenuNode::on_left),
            MenuInput::Right => self.step(root, MenuNode::on_right),
            MenuInput::Confirm => {
                let depth = self.depth();
                return match self.on_confirm(root) {
                    Some(leaf) => MenuOutcome::Selected(leaf),
                    None if self.depth() > depth => MenuOutcome::Descended {
                        depth: self.depth(),
                    },
                    None => MenuOutcome::Ignored,
                };
            }
            MenuInput::Back => {
                if !self.open {
                    return MenuOutcome::Ignored;
                }
                self.on_back();
                return if self.open {
                    MenuOutcome::Ascended {
                        depth: self.depth(),
                    }
                } else {
                    MenuOutcome::Closed
                };
            }
            MenuInput::Toggle => {
                return if self.open {
                    self.close();
                    MenuOutcome::Closed
                } else if self.open(root) {
                    MenuOutcome::Opened
                } else {
                    MenuOutcome::Ignored
                };
            }
        };
        if moved {
            MenuOutcome::Moved
        } else {
            MenuOutcome::Ignored
        }
    }

    // ===== rendering =====

    /// Describes every open panel, each cascaded by the window offset from
    /// the previous one starting at `offset`.
    pub fn view(&self, root: &MenuNode, offset: Vec2) -> Option<MenuView> {
        let mut origin = offset;
        let mut panels = Vec::new();
        for node in self.panels(root) {
            panels.push(node.view(origin, self.patch_size));
            origin += self.window_offset;
        }
        let cursor = panels.last()?.cursor;
        Some(MenuView { panels, cursor })
    }

    /// Draws the open panels through `canvas`; does nothing when closed.
    pub fn draw<C: MenuCanvas + ?Sized>(&self, root: &MenuNode, canvas: &mut C, offset: Vec2) {
        if let Some(view) = self.view(root, offset) {
            view.draw(canvas);
        }
    }
}

impl Default for MenuManager {
    fn default() -> Self {
        Self::new()
    }
}
