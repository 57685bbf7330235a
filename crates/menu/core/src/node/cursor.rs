//! Grid cursor movement and vertical paging.
//!
//! Every move runs the same three steps: step the raw cursor (wrapping
//! rows on horizontal overflow), scroll the visible window toward the raw
//! cursor row, then clamp the cursor back onto an existing child. Scrolling
//! sees the unclamped cursor, which is what lets a move past a partial last
//! row still page the window.

use super::MenuNode;
use crate::Vec2;

impl MenuNode {
    pub fn on_up(&mut self) {
        self.cursor.y -= 1;
        self.maybe_row_up();
        self.finish_move("up");
    }

    pub fn on_down(&mut self) {
        self.cursor.y += 1;
        self.maybe_row_down();
        self.finish_move("down");
    }

    pub fn on_left(&mut self) {
        self.cursor.x -= 1;
        self.maybe_row_up();
        self.finish_move("left");
    }

    pub fn on_right(&mut self) {
        self.cursor.x += 1;
        self.maybe_row_down();
        self.finish_move("right");
    }

    /// Replaces the cursor cell, clamping it onto an existing child and
    /// scrolling the window so the cursor row is visible.
    pub fn set_cursor(&mut self, cursor: Vec2) {
        let last_row = (self.total_rows - 1).max(0);
        self.cursor = Vec2::new(
            cursor.x.clamp(0, self.columns() - 1),
            cursor.y.clamp(0, last_row),
        );
        self.clamp_cursor();

        let page_rows = self.page_rows();
        if self.cursor.y < self.top_visible_row {
            self.top_visible_row = self.cursor.y;
        } else if self.cursor.y > self.top_visible_row + page_rows - 1 {
            self.top_visible_row = self.cursor.y - page_rows + 1;
        }
        self.top_visible_row = self.top_visible_row.clamp(0, self.max_top_row());
    }

    fn maybe_row_up(&mut self) {
        if self.cursor.x < 0 {
            self.cursor.y -= 1;
            self.cursor.x = self.columns() - 1;
        }
        if self.cursor.y < self.top_visible_row {
            self.top_visible_row = (self.top_visible_row - 1).clamp(0, self.max_top_row());
        }
    }

    fn maybe_row_down(&mut self) {
        if self.cursor.x > self.columns() - 1 {
            self.cursor.y += 1;
            self.cursor.x = 0;
        }
        if self.cursor.y > self.top_visible_row + self.page_rows() - 1 {
            self.top_visible_row = (self.top_visible_row + 1).clamp(0, self.max_top_row());
        }
    }

    /// Pulls the cursor back onto an existing child and refreshes
    /// `cursor_index`.
    pub(crate) fn clamp_cursor(&mut self) {
        let count = self.child_count();
        if count == 0 {
            self.cursor = Vec2::ZERO;
            self.cursor_index = 0;
            return;
        }

        let columns = self.columns();
        let raw = self.cursor.y * columns + self.cursor.x;
        if raw >= count {
            let last = count - 1;
            self.cursor = Vec2::new(last % columns, last / columns);
            self.cursor_index = last as usize;
        } else if raw < 0 {
            self.cursor = Vec2::ZERO;
            self.cursor_index = 0;
        } else {
            self.cursor_index = raw as usize;
        }
    }

    fn finish_move(&mut self, direction: &'static str) {
        self.clamp_cursor();
        tracing::trace!(
            menu = %self.name,
            direction,
            cursor = %self.cursor,
            index = self.cursor_index,
            top = self.top_visible_row,
            "cursor moved"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(columns: i32, rows: i32, count: usize) -> MenuNode {
        let mut node = MenuNode::new("grid");
        node.set_table(columns, rows);
        for i in 0..count {
            node.get_or_create_child(&format!("item{i}")).set_id(i as i32);
        }
        node.build().unwrap();
        node
    }

    #[test]
    fn left_from_first_column_wraps_to_previous_row() {
        let mut node = grid(3, 4, 9);
        node.set_cursor(Vec2::new(0, 2));

        node.on_left();

        assert_eq!(node.cursor(), Vec2::new(2, 1));
        assert_eq!(node.cursor_index(), 5);
    }

    #[test]
    fn right_from_last_column_wraps_to_next_row() {
        let mut node = grid(3, 4, 9);
        node.set_cursor(Vec2::new(2, 0));

        node.on_right();

        assert_eq!(node.cursor(), Vec2::new(0, 1));
        assert_eq!(node.cursor_index(), 3);
    }

    #[test]
    fn right_past_last_child_clamps_to_last_child() {
        // 5 items, 2 columns: the last row holds only index 4.
        let mut node = grid(2, 4, 5);
        node.set_cursor(Vec2::new(0, 2));

        node.on_right();

        assert_eq!(node.cursor(), Vec2::new(0, 2));
        assert_eq!(node.cursor_index(), 4);
    }

    #[test]
    fn down_into_missing_cell_snaps_to_last_child() {
        let mut node = grid(2, 4, 5);
        node.set_cursor(Vec2::new(1, 1));

        node.on_down();

        assert_eq!(node.cursor(), Vec2::new(0, 2));
        assert_eq!(node.cursor_index(), 4);
    }

    #[test]
    fn moves_before_first_child_snap_to_origin() {
        let mut node = grid(3, 2, 6);

        node.on_up();
        assert_eq!(node.cursor(), Vec2::ZERO);

        node.on_left();
        assert_eq!(node.cursor(), Vec2::ZERO);

        node.set_cursor(Vec2::new(2, 0));
        node.on_up();
        assert_eq!(node.cursor(), Vec2::ZERO);
        assert_eq!(node.cursor_index(), 0);
    }

    #[test]
    fn window_scrolls_down_and_back_up() {
        // 6 rows of 3, 2 rows per page.
        let mut node = grid(3, 2, 18);

        node.on_down();
        assert_eq!(node.top_visible_row(), 0);
        node.on_down();
        assert_eq!(node.top_visible_row(), 1);
        for _ in 0..10 {
            node.on_down();
        }
        assert_eq!(node.cursor().y, 5);
        assert_eq!(node.top_visible_row(), 4);

        node.on_up();
        assert_eq!(node.top_visible_row(), 4);
        node.on_up();
        node.on_up();
        assert_eq!(node.cursor().y, 2);
        assert_eq!(node.top_visible_row(), 2);
    }

    #[test]
    fn horizontal_wrap_scrolls_the_window() {
        let mut node = grid(2, 1, 6);

        node.on_right();
        assert_eq!(node.top_visible_row(), 0);
        node.on_right();
        assert_eq!(node.cursor(), Vec2::new(0, 1));
        assert_eq!(node.top_visible_row(), 1);

        node.on_left();
        assert_eq!(node.cursor(), Vec2::new(1, 0));
        assert_eq!(node.top_visible_row(), 0);
    }

    #[test]
    fn short_list_never_scrolls() {
        let mut node = grid(2, 4, 6);
        for _ in 0..6 {
            node.on_down();
            node.on_right();
        }
        assert_eq!(node.top_visible_row(), 0);
        assert_eq!(node.cursor_index(), 5);
    }

    #[test]
    fn moves_on_empty_or_unbuilt_nodes_are_harmless() {
        let mut empty = MenuNode::new("empty");
        empty.on_down();
        empty.on_right();
        empty.on_left();
        empty.on_up();
        assert_eq!(empty.cursor(), Vec2::ZERO);
        assert_eq!(empty.cursor_index(), 0);
        assert!(empty.selected().is_none());
    }

    #[test]
    fn set_cursor_scrolls_target_row_into_view() {
        let mut node = grid(3, 2, 18);

        node.set_cursor(Vec2::new(1, 4));
        assert_eq!(node.cursor_index(), 13);
        assert_eq!(node.top_visible_row(), 3);

        node.set_cursor(Vec2::new(9, -3));
        assert_eq!(node.cursor(), Vec2::new(2, 0));
        assert_eq!(node.top_visible_row(), 0);
    }
}
