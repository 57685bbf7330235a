//! Render descriptions of open panels.
//!
//! The core never touches pixels. Each frame the host pulls a [`MenuView`]
//! (or calls [`MenuManager::draw`](crate::MenuManager::draw)) and blits skin
//! patches and labels through its own primitives, exposed to the core as a
//! [`MenuCanvas`].

use bitflags::bitflags;

use crate::{CommandId, Vec2};

/// Nine-slice part of a panel frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum FramePart {
    TopLeft,
    Top,
    TopRight,
    Left,
    Centre,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
}

impl FramePart {
    /// Classifies the patch at `(column, row)` of a panel `size` patches large.
    pub fn at(column: i32, row: i32, size: Vec2) -> Self {
        let horizontal = edge_index(column, size.x);
        let vertical = edge_index(row, size.y);
        match (horizontal, vertical) {
            (0, 0) => Self::TopLeft,
            (1, 0) => Self::Top,
            (2, 0) => Self::TopRight,
            (0, 1) => Self::Left,
            (1, 1) => Self::Centre,
            (2, 1) => Self::Right,
            (0, _) => Self::BottomLeft,
            (1, _) => Self::Bottom,
            _ => Self::BottomRight,
        }
    }

    /// Patch coordinate inside the 3x3 frame block of the skin sheet.
    pub const fn sheet_offset(self) -> Vec2 {
        match self {
            Self::TopLeft => Vec2::new(0, 0),
            Self::Top => Vec2::new(1, 0),
            Self::TopRight => Vec2::new(2, 0),
            Self::Left => Vec2::new(0, 1),
            Self::Centre => Vec2::new(1, 1),
            Self::Right => Vec2::new(2, 1),
            Self::BottomLeft => Vec2::new(0, 2),
            Self::Bottom => Vec2::new(1, 2),
            Self::BottomRight => Vec2::new(2, 2),
        }
    }
}

fn edge_index(position: i32, extent: i32) -> i32 {
    if position <= 0 {
        0
    } else if position >= extent - 1 {
        2
    } else {
        1
    }
}

/// Named patch of the menu skin sheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Patch {
    Frame(FramePart),
    ScrollUp,
    ScrollDown,
    Expand,
    Cursor,
}

impl Patch {
    /// Location of the patch in the skin sheet, in patch units.
    pub const fn sheet_offset(self) -> Vec2 {
        match self {
            Self::Frame(part) => part.sheet_offset(),
            Self::ScrollUp => Vec2::new(3, 0),
            Self::Expand => Vec2::new(3, 1),
            Self::ScrollDown => Vec2::new(3, 2),
            Self::Cursor => Vec2::new(4, 0),
        }
    }

    /// Extent of the patch in patch units.
    pub const fn span(self) -> Vec2 {
        match self {
            Self::Cursor => Vec2::new(2, 2),
            _ => Vec2::ONE,
        }
    }
}

bitflags! {
    /// Scroll hint glyphs a panel should show.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ScrollHints: u8 {
        /// Rows exist above the visible page.
        const UP = 1 << 0;
        /// Rows exist below the visible page.
        const DOWN = 1 << 1;
    }
}

/// One visible entry of a panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemView {
    pub label: String,
    pub id: CommandId,
    pub enabled: bool,
    pub has_children: bool,
    /// Screen position of the label.
    pub position: Vec2,
    /// Screen position of the expand indicator, for container entries.
    pub expand_at: Option<Vec2>,
}

/// Screen rectangle of the cursor highlight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorRect {
    pub position: Vec2,
    pub size: Vec2,
}

/// Everything needed to draw one panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PanelView {
    pub name: String,
    pub origin: Vec2,
    pub patch_size: Vec2,
    pub size_in_patches: Vec2,
    pub items: Vec<ItemView>,
    pub scroll: ScrollHints,
    pub scroll_up_at: Vec2,
    pub scroll_down_at: Vec2,
    pub cursor: CursorRect,
}

impl PanelView {
    /// Panel extent in screen units.
    pub fn size(&self) -> Vec2 {
        self.size_in_patches * self.patch_size
    }

    /// Every border and fill patch of the panel with its screen position,
    /// row by row.
    pub fn frame_patches(&self) -> impl Iterator<Item = (Vec2, Patch)> + '_ {
        let size = self.size_in_patches;
        (0..size.y).flat_map(move |row| {
            (0..size.x).map(move |column| {
                let position = Vec2::new(column, row) * self.patch_size + self.origin;
                (position, Patch::Frame(FramePart::at(column, row, size)))
            })
        })
    }

    /// Issues the draw calls for this panel, excluding the cursor.
    pub fn draw<C: MenuCanvas + ?Sized>(&self, canvas: &mut C) {
        for (position, patch) in self.frame_patches() {
            canvas.draw_patch(position, self.patch_size, patch);
        }
        if self.scroll.contains(ScrollHints::UP) {
            canvas.draw_patch(self.scroll_up_at, self.patch_size, Patch::ScrollUp);
        }
        if self.scroll.contains(ScrollHints::DOWN) {
            canvas.draw_patch(self.scroll_down_at, self.patch_size, Patch::ScrollDown);
        }
        for item in &self.items {
            canvas.draw_text(item.position, &item.label, item.enabled);
            if let Some(expand_at) = item.expand_at {
                canvas.draw_patch(expand_at, self.patch_size, Patch::Expand);
            }
        }
    }
}

/// Render description of every open panel, outermost first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuView {
    pub panels: Vec<PanelView>,
    /// Cursor of the innermost panel.
    pub cursor: CursorRect,
}

impl MenuView {
    pub fn innermost(&self) -> Option<&PanelView> {
        self.panels.last()
    }

    /// Draws all panels in stack order, then the cursor on top.
    pub fn draw<C: MenuCanvas + ?Sized>(&self, canvas: &mut C) {
        for panel in &self.panels {
            panel.draw(canvas);
        }
        if let Some(panel) = self.innermost() {
            canvas.draw_patch(self.cursor.position, panel.patch_size, Patch::Cursor);
        }
    }
}

/// Drawing primitives supplied by the host.
///
/// Positions are in host screen units; `patch_size` is the size of a single
/// patch, multiply by [`Patch::span`] for the drawn extent.
pub trait MenuCanvas {
    fn draw_patch(&mut self, position: Vec2, patch_size: Vec2, patch: Patch);

    fn draw_text(&mut self, position: Vec2, text: &str, enabled: bool);
}
