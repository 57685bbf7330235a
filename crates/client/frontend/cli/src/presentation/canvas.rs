//! `MenuCanvas` over a ratatui buffer.

use menu_core::{MenuCanvas, Patch, Vec2};
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::Style,
};

use crate::presentation::theme::MenuTheme;

/// Draws menu patches and labels into a ratatui [`Buffer`], one screen unit
/// per terminal cell. Anything outside `clip` is dropped.
pub struct BufferCanvas<'a> {
    buffer: &'a mut Buffer,
    clip: Rect,
    theme: &'a MenuTheme,
}

impl<'a> BufferCanvas<'a> {
    pub fn new(buffer: &'a mut Buffer, clip: Rect, theme: &'a MenuTheme) -> Self {
        let clip = clip.intersection(buffer.area);
        Self {
            buffer,
            clip,
            theme,
        }
    }

    fn put(&mut self, at: Vec2, glyph: char, style: Style) {
        let (Ok(x), Ok(y)) = (u16::try_from(at.x), u16::try_from(at.y)) else {
            return;
        };
        if !self.clip.contains(Position::new(x, y)) {
            return;
        }
        if let Some(cell) = self.buffer.cell_mut((x, y)) {
            cell.set_char(glyph).set_style(style);
        }
    }
}

impl MenuCanvas for BufferCanvas<'_> {
    fn draw_patch(&mut self, position: Vec2, patch_size: Vec2, patch: Patch) {
        let glyph = self.theme.glyph(patch);
        let style = self.theme.patch_style(patch);

        match patch {
            Patch::Frame(_) => {
                for dy in 0..patch_size.y {
                    for dx in 0..patch_size.x {
                        self.put(position + Vec2::new(dx, dy), glyph, style);
                    }
                }
            }
            // The cursor rectangle starts one patch left of the label gap;
            // a single pointer in the gap reads better in a terminal.
            Patch::Cursor => self.put(position + Vec2::new(patch_size.x, 0), glyph, style),
            _ => self.put(position, glyph, style),
        }
    }

    fn draw_text(&mut self, position: Vec2, text: &str, enabled: bool) {
        let style = self.theme.text_style(enabled);
        for (column, glyph) in (0..).zip(text.chars()) {
            self.put(position + Vec2::new(column, 0), glyph, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use menu_core::{MenuConfig, MenuManager, MenuNode};
    use ratatui::style::Color;

    use super::*;

    fn commands() -> MenuNode {
        let mut root = MenuNode::root();
        root.set_table(1, 4);
        root.get_or_create_child("Attack").set_id(1000);
        root.get_or_create_child("Magic")
            .set_table(1, 1)
            .get_or_create_child("Fire")
            .set_id(5001);
        root.get_or_create_child("Escape")
            .set_id(1003)
            .set_enabled(false);
        root.build().unwrap();
        root
    }

    fn row(buffer: &Buffer, y: u16, from: u16, to: u16) -> String {
        (from..to)
            .map(|x| buffer.cell((x, y)).map_or(" ", |cell| cell.symbol()))
            .collect()
    }

    fn draw(root: &MenuNode, menu: &MenuManager, offset: Vec2, area: Rect) -> Buffer {
        let theme = MenuTheme::new();
        let mut buffer = Buffer::empty(area);
        let mut canvas = BufferCanvas::new(&mut buffer, area, &theme);
        menu.draw(root, &mut canvas, offset);
        buffer
    }

    #[test]
    fn draws_frame_labels_and_cursor() {
        let root = commands();
        let mut menu = MenuManager::with_config(&MenuConfig::cell_grid());
        menu.open(&root);

        let buffer = draw(&root, &menu, Vec2::ZERO, Rect::new(0, 0, 20, 8));

        // 1x4 table of 6-wide cells: 8x6 panel.
        assert_eq!(row(&buffer, 0, 0, 8), "┌──────┐");
        assert_eq!(row(&buffer, 1, 0, 8), "▶Attack│");
        assert_eq!(row(&buffer, 2, 0, 8), "│Magic ►");
        assert_eq!(row(&buffer, 5, 0, 8), "└──────┘");

        let escape = buffer.cell((1, 3)).unwrap();
        assert_eq!(escape.symbol(), "E");
        assert_eq!(escape.fg, Color::DarkGray);
    }

    #[test]
    fn nested_panel_is_cascaded() {
        let mut root = commands();
        let mut menu = MenuManager::with_config(&MenuConfig::cell_grid());
        menu.open(&root);
        menu.on_down(&mut root);
        menu.on_confirm(&root);

        let buffer = draw(&root, &menu, Vec2::ZERO, Rect::new(0, 0, 20, 8));

        // cell_grid offsets nested panels by (4, 2).
        assert_eq!(row(&buffer, 2, 4, 10), "┌────┐");
        assert_eq!(row(&buffer, 3, 4, 10), "▶Fire│");
        // The outer cursor is no longer drawn.
        assert_eq!(buffer.cell((0, 1)).unwrap().symbol(), "│");
    }

    #[test]
    fn clips_to_area_without_panicking() {
        let root = commands();
        let mut menu = MenuManager::with_config(&MenuConfig::cell_grid());
        menu.open(&root);

        let buffer = draw(&root, &menu, Vec2::new(-3, -2), Rect::new(0, 0, 4, 3));
        // Screen row 0 shows panel row 2.
        assert_eq!(row(&buffer, 0, 0, 4), "gic ");
        assert_eq!(row(&buffer, 1, 0, 4), "cape");

        let buffer = draw(&root, &menu, Vec2::new(100, 100), Rect::new(0, 0, 4, 3));
        assert_eq!(row(&buffer, 0, 0, 4), "    ");
    }
}
