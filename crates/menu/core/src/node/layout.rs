//! Per-panel render description.

use super::MenuNode;
use crate::Vec2;
use crate::view::{CursorRect, ItemView, PanelView, ScrollHints};

impl MenuNode {
    /// Describes this node's panel drawn at `origin`, with `patch_size`
    /// screen units per patch. Only the visible page of children is listed.
    pub fn view(&self, origin: Vec2, patch_size: Vec2) -> PanelView {
        let columns = self.columns();
        let page_rows = self.page_rows();
        let pitch = self.cell_size + self.padding;
        let to_screen = |patch: Vec2| patch * patch_size + origin;

        let columns_len = columns as usize;
        let first = (self.top_visible_row.max(0) as usize).saturating_mul(columns_len);
        let last = first
            .saturating_add((page_rows as usize).saturating_mul(columns_len))
            .min(self.children.len());
        let items = self
            .children
            .get(first..last)
            .unwrap_or_default()
            .iter()
            .enumerate()
            .map(|(slot, child)| {
                let slot = slot as i32;
                let cell = Vec2::new(slot % columns, slot / columns);
                let label_at = cell * pitch + Vec2::ONE;
                ItemView {
                    label: child.name.clone(),
                    id: child.id,
                    enabled: child.enabled,
                    has_children: child.has_children(),
                    position: to_screen(label_at),
                    expand_at: child
                        .has_children()
                        .then(|| to_screen(label_at + Vec2::new(self.cell_size.x, 0))),
                }
            })
            .collect();

        let mut scroll = ScrollHints::empty();
        if self.top_visible_row > 0 {
            scroll |= ScrollHints::UP;
        }
        if self.total_rows - self.top_visible_row > page_rows {
            scroll |= ScrollHints::DOWN;
        }

        let size = self.size_in_patches;
        let visible_cursor = Vec2::new(self.cursor.x, self.cursor.y - self.top_visible_row);
        let cursor = CursorRect {
            position: visible_cursor * pitch * patch_size
                + origin
                + Vec2::new(-patch_size.x, patch_size.y),
            size: patch_size * 2,
        };

        PanelView {
            name: self.name.clone(),
            origin,
            patch_size,
            size_in_patches: size,
            items,
            scroll,
            scroll_up_at: to_screen(Vec2::new(size.x - 2, 0)),
            scroll_down_at: to_screen(Vec2::new(size.x - 2, size.y - 1)),
            cursor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spells(count: usize) -> MenuNode {
        let mut node = MenuNode::new("Black");
        node.set_table(3, 4);
        for i in 0..count {
            node.get_or_create_child(&format!("Spell{i:02}"))
                .set_id(5001 + i as i32)
                .set_enabled(i != 14);
        }
        node.build().unwrap();
        node
    }

    #[test]
    fn first_page_lists_rows_per_page_times_columns() {
        let node = spells(35);
        let view = node.view(Vec2::ZERO, Vec2::ONE);

        assert_eq!(view.items.len(), 12);
        assert_eq!(view.items[0].label, "Spell00");
        assert_eq!(view.items[11].label, "Spell11");
        assert_eq!(view.scroll, ScrollHints::DOWN);
    }

    #[test]
    fn last_page_is_partial_and_hints_up() {
        let mut node = spells(35);
        for _ in 0..20 {
            node.on_down();
        }
        // 12 rows, 4 per page.
        assert_eq!(node.top_visible_row(), 8);

        let view = node.view(Vec2::ZERO, Vec2::ONE);
        assert_eq!(view.items.len(), 11);
        assert_eq!(view.items[0].label, "Spell24");
        assert_eq!(view.scroll, ScrollHints::UP);
    }

    #[test]
    fn middle_page_hints_both_ways() {
        let mut node = spells(35);
        for _ in 0..4 {
            node.on_down();
        }
        let view = node.view(Vec2::ZERO, Vec2::ONE);
        assert_eq!(view.scroll, ScrollHints::UP | ScrollHints::DOWN);
        assert_eq!(view.items[11].label, "Spell14");
        assert!(!view.items[11].enabled);
    }

    #[test]
    fn positions_follow_cell_pitch_and_patch_size() {
        let node = spells(6);
        let origin = Vec2::new(30, 30);
        let view = node.view(origin, Vec2::new(8, 8));

        // cell (7,1) + padding (2,0) = pitch (9,1); border of one patch.
        assert_eq!(view.items[0].position, Vec2::new(38, 38));
        assert_eq!(view.items[1].position, Vec2::new(30 + 10 * 8, 38));
        assert_eq!(view.items[3].position, Vec2::new(38, 30 + 2 * 8));
        assert_eq!(view.size_in_patches, Vec2::new(3 * 7 + 2 * 2 + 2, 4 + 2));
        assert_eq!(view.scroll_down_at, origin + Vec2::new(25 * 8, 5 * 8));
        assert_eq!(view.cursor.position, Vec2::new(22, 38));
        assert_eq!(view.cursor.size, Vec2::new(16, 16));
    }

    #[test]
    fn cursor_rect_is_relative_to_visible_page() {
        let mut node = spells(35);
        node.set_cursor(Vec2::new(1, 9));
        let top = node.top_visible_row();
        let view = node.view(Vec2::ZERO, Vec2::ONE);

        let row_on_page = 9 - top;
        assert_eq!(view.cursor.position, Vec2::new(9 - 1, row_on_page + 1));
    }

    #[test]
    fn containers_carry_expand_indicator() {
        let mut root = MenuNode::root();
        root.set_table(1, 4);
        root.get_or_create_child("Attack").set_id(1000);
        root.get_or_create_child("Magic")
            .set_table(1, 2)
            .get_or_create_child("White");
        root.build().unwrap();

        let view = root.view(Vec2::ZERO, Vec2::ONE);
        assert_eq!(view.items[0].expand_at, None);
        assert!(view.items[1].has_children);
        assert_eq!(view.items[1].expand_at, Some(Vec2::new(1 + 6, 2)));
    }

    #[test]
    fn unbuilt_huge_table_views_without_overflow() {
        let mut node = MenuNode::new("Wide");
        node.set_table(65536, 65536);

        let view = node.view(Vec2::ZERO, Vec2::ONE);
        assert!(view.items.is_empty());
        assert!(view.scroll.is_empty());
    }

    #[test]
    fn leaf_view_is_empty() {
        let leaf = MenuNode::new("Attack");
        let view = leaf.view(Vec2::ZERO, Vec2::ONE);
        assert!(view.items.is_empty());
        assert!(view.scroll.is_empty());
        assert_eq!(view.frame_patches().count(), 0);
    }
}
