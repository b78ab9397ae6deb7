//! Font metrics and text drawing.

use crate::{
    error::Result,
    geom::{Point, Rect},
    graphics::Graphics,
};

/// A font: measures and draws strings through a [`Graphics`] context.
pub trait Font {
    /// Width of `text` in pixels.
    fn width(&self, text: &str) -> u32;

    /// Line height in pixels.
    fn height(&self) -> u32;

    /// Draw `text` with its top-left corner at `at`, in the current color.
    fn draw_string(&self, g: &mut dyn Graphics, text: &str, at: Point) -> Result<()>;

    /// Index of the character at horizontal offset `x` within `text`.
    fn string_index_at(&self, text: &str, x: i32) -> usize {
        let mut end = 0;
        for (i, c) in text.char_indices() {
            end = i + c.len_utf8();
            if self.width(&text[..end]) as i64 > x as i64 {
                return i;
            }
        }
        end
    }
}

/// The built-in font: every glyph is a fixed-size cell drawn as an outlined
/// box, so layout can be tested without any font backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultFont {
    /// Width of one glyph cell.
    pub glyph_width: u32,
    /// Height of one glyph cell.
    pub glyph_height: u32,
}

impl Default for DefaultFont {
    fn default() -> Self {
        Self {
            glyph_width: 8,
            glyph_height: 8,
        }
    }
}

impl Font for DefaultFont {
    fn width(&self, text: &str) -> u32 {
        (text.chars().count() as u32).saturating_mul(self.glyph_width)
    }

    fn height(&self) -> u32 {
        self.glyph_height
    }

    fn draw_string(&self, g: &mut dyn Graphics, text: &str, at: Point) -> Result<()> {
        let mut x = at.x;
        for c in text.chars() {
            if !c.is_whitespace() {
                g.draw_rectangle(Rect::new(
                    x + 1,
                    at.y + 1,
                    self.glyph_width.saturating_sub(2),
                    self.glyph_height.saturating_sub(2),
                ))?;
            }
            x = x.saturating_add(self.glyph_width as i32);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics() -> Result<()> {
        let f = DefaultFont::default();
        assert_eq!(f.width("tabs"), 32);
        assert_eq!(f.width(""), 0);
        assert_eq!(f.height(), 8);
        assert_eq!(f.string_index_at("tabs", 0), 0);
        assert_eq!(f.string_index_at("tabs", 9), 1);
        assert_eq!(f.string_index_at("tabs", 100), 4);
        Ok(())
    }
}
