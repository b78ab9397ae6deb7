use std::mem;

use crate::{
    error::Result,
    geom::{Point, Rect},
    graphics::{ClipStack, Graphics},
    style::Color,
};

/// A recorded drawing primitive, in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOp {
    /// A single point.
    Point {
        /// Location.
        at: Point,
        /// Color.
        color: Color,
    },
    /// A line between two points.
    Line {
        /// Start point.
        from: Point,
        /// End point.
        to: Point,
        /// Color.
        color: Color,
    },
    /// A rectangle outline, clipped.
    Rectangle {
        /// Visible part of the rectangle.
        rect: Rect,
        /// Color.
        color: Color,
    },
    /// A filled rectangle, clipped.
    Fill {
        /// Visible part of the rectangle.
        rect: Rect,
        /// Color.
        color: Color,
    },
}

/// A [`Graphics`] implementation that records every visible primitive.
///
/// Rectangles are clipped to the current clip area. Points outside it are
/// dropped, and lines are kept if either end point is visible.
#[derive(Debug, Clone)]
pub struct RecordingGraphics {
    /// Clip areas.
    clip: ClipStack,
    /// Current color.
    color: Color,
    /// Recorded primitives.
    ops: Vec<DrawOp>,
}

impl Default for RecordingGraphics {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingGraphics {
    /// An empty recorder.
    pub fn new() -> Self {
        Self {
            clip: ClipStack::new(),
            color: Color::BLACK,
            ops: Vec::new(),
        }
    }

    /// Recorded primitives in draw order.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Take the recorded primitives, leaving the recorder empty.
    pub fn take(&mut self) -> Vec<DrawOp> {
        mem::take(&mut self.ops)
    }

    /// Filled rectangles in draw order.
    pub fn fills(&self) -> Vec<Rect> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Fill { rect, .. } => Some(*rect),
                _ => None,
            })
            .collect()
    }
}

impl Graphics for RecordingGraphics {
    fn clip_stack(&self) -> &ClipStack {
        &self.clip
    }

    fn clip_stack_mut(&mut self) -> &mut ClipStack {
        &mut self.clip
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn color(&self) -> Color {
        self.color
    }

    fn draw_point(&mut self, p: Point) -> Result<()> {
        if self.clip.is_visible(p) {
            self.ops.push(DrawOp::Point {
                at: self.clip.to_screen(p),
                color: self.color,
            });
        }
        Ok(())
    }

    fn draw_line(&mut self, a: Point, b: Point) -> Result<()> {
        if self.clip.is_visible(a) || self.clip.is_visible(b) {
            self.ops.push(DrawOp::Line {
                from: self.clip.to_screen(a),
                to: self.clip.to_screen(b),
                color: self.color,
            });
        }
        Ok(())
    }

    fn draw_rectangle(&mut self, r: Rect) -> Result<()> {
        if let Some(rect) = self.clip.clip_rect(r) {
            self.ops.push(DrawOp::Rectangle {
                rect,
                color: self.color,
            });
        }
        Ok(())
    }

    fn fill_rectangle(&mut self, r: Rect) -> Result<()> {
        if let Some(rect) = self.clip.clip_rect(r) {
            self.ops.push(DrawOp::Fill {
                rect,
                color: self.color,
            });
        }
        Ok(())
    }
}
