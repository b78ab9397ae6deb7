//! Container widget.

use crate::{
    DrawContext,
    error::Result,
    geom::Rect,
    graphics::Graphics,
    widget::Widget,
};

/// A widget whose children area is its whole dimension. Children are added
/// through [`Core::add`](crate::Core::add).
#[derive(Debug, Clone)]
pub struct Container {
    /// Fill the background before drawing children.
    opaque: bool,
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

impl Container {
    /// Construct an opaque container.
    pub fn new() -> Self {
        Self { opaque: true }
    }

    /// Build a container that draws no background.
    pub fn transparent() -> Self {
        Self { opaque: false }
    }

    /// Does the container fill its background?
    pub fn is_opaque(&self) -> bool {
        self.opaque
    }

    /// Set whether the container fills its background.
    pub fn set_opaque(&mut self, opaque: bool) {
        self.opaque = opaque;
    }
}

impl Widget for Container {
    fn draw(&mut self, g: &mut dyn Graphics, ctx: &DrawContext) -> Result<()> {
        if self.opaque {
            g.set_color(ctx.palette().background);
            g.fill_rectangle(ctx.dimension().at_origin())?;
        }
        Ok(())
    }

    fn children_area(&self, size: Rect) -> Option<Rect> {
        Some(size)
    }
}
