//! The drawing boundary.
//!
//! The toolkit never touches pixels. Hosts implement [`Graphics`] on top of
//! whatever renderer they use; the toolkit pushes a clip area for every
//! widget it draws, and widgets issue primitives in coordinates relative to
//! the innermost clip area.

use crate::{
    error::Result,
    geom::{Frame, Point, Rect},
    style::{Color, Palette},
};

/// A clip area on the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipArea {
    /// The visible region in screen space, already intersected with every
    /// enclosing clip area. May be empty.
    pub clip: Rect,
    /// Screen-space origin that drawing coordinates are relative to.
    pub offset: Point,
}

/// Stack of nested clip areas.
///
/// Each pushed area is given relative to the offset of the area below it.
/// The effective clip region is the intersection of every area on the stack.
#[derive(Debug, Clone, Default)]
pub struct ClipStack {
    /// Stacked clip areas, innermost last.
    stack: Vec<ClipArea>,
}

impl ClipStack {
    /// An empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push an area relative to the current offset. Returns `true` if the
    /// resulting clip region is non-empty.
    pub fn push(&mut self, area: Rect) -> bool {
        let entry = match self.stack.last() {
            None => ClipArea {
                clip: area,
                offset: area.tl,
            },
            Some(top) => {
                let abs = area.shift(top.offset);
                let clip = abs
                    .intersect(&top.clip)
                    .unwrap_or_else(|| Rect::new(abs.tl.x, abs.tl.y, 0, 0));
                ClipArea {
                    clip,
                    offset: abs.tl,
                }
            }
        };
        self.stack.push(entry);
        !entry.clip.is_empty()
    }

    /// Pop the innermost area.
    pub fn pop(&mut self) -> Option<ClipArea> {
        self.stack.pop()
    }

    /// The innermost area.
    pub fn top(&self) -> Option<&ClipArea> {
        self.stack.last()
    }

    /// Number of stacked areas.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Translate a point from the current drawing space to screen space.
    pub fn to_screen(&self, p: Point) -> Point {
        match self.top() {
            Some(top) => p + top.offset,
            None => p,
        }
    }

    /// Translate a rectangle to screen space and clip it. Returns `None` if
    /// nothing remains visible.
    pub fn clip_rect(&self, r: Rect) -> Option<Rect> {
        match self.top() {
            Some(top) => r.shift(top.offset).intersect(&top.clip),
            None => (!r.is_empty()).then_some(r),
        }
    }

    /// Is a point in the current drawing space visible?
    pub fn is_visible(&self, p: Point) -> bool {
        match self.top() {
            Some(top) => top.clip.contains_point(p + top.offset),
            None => true,
        }
    }
}

/// A drawing context implemented by the host.
///
/// All coordinates are relative to the innermost clip area. Implementations
/// own a [`ClipStack`] and expose it so the provided clip methods work
/// unchanged.
pub trait Graphics {
    /// The clip stack.
    fn clip_stack(&self) -> &ClipStack;

    /// The clip stack, mutably.
    fn clip_stack_mut(&mut self) -> &mut ClipStack;

    /// Push a clip area. Returns `true` if anything inside it is visible.
    fn push_clip_area(&mut self, area: Rect) -> bool {
        self.clip_stack_mut().push(area)
    }

    /// Pop the innermost clip area.
    fn pop_clip_area(&mut self) {
        self.clip_stack_mut().pop();
    }

    /// The innermost clip area.
    fn clip_area(&self) -> Option<ClipArea> {
        self.clip_stack().top().copied()
    }

    /// Set the color used by subsequent primitives.
    fn set_color(&mut self, color: Color);

    /// The current color.
    fn color(&self) -> Color;

    /// Draw a single point.
    fn draw_point(&mut self, p: Point) -> Result<()>;

    /// Draw a line between two points, inclusive.
    fn draw_line(&mut self, a: Point, b: Point) -> Result<()>;

    /// Draw a rectangle outline.
    fn draw_rectangle(&mut self, r: Rect) -> Result<()>;

    /// Fill a rectangle.
    fn fill_rectangle(&mut self, r: Rect) -> Result<()>;
}

/// Draw a bevelled frame of `border` thickness around the edge of `outer`.
/// The top and left edges use the shadow of the base color, the bottom and
/// right edges use its highlight.
pub fn draw_bevel_frame(
    g: &mut dyn Graphics,
    palette: &Palette,
    outer: Rect,
    border: u32,
) -> Result<()> {
    let frame = Frame::new(outer, border);
    if frame.is_zero() {
        return Ok(());
    }
    g.set_color(palette.base.shadow());
    for r in frame.upper_segments() {
        g.fill_rectangle(r)?;
    }
    g.set_color(palette.base.highlight());
    for r in frame.lower_segments() {
        g.fill_rectangle(r)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_push() -> Result<()> {
        let mut s = ClipStack::new();
        assert!(s.push(Rect::new(0, 0, 100, 100)));
        assert!(s.push(Rect::new(10, 10, 50, 50)));
        assert_eq!(s.top().map(|c| c.offset), Some(Point::new(10, 10)));
        assert!(s.push(Rect::new(45, 45, 20, 20)));
        let top = *s.top().expect("pushed");
        assert_eq!(top.offset, Point::new(55, 55));
        assert_eq!(top.clip, Rect::new(55, 55, 5, 5));
        assert_eq!(s.clip_rect(Rect::new(0, 0, 10, 10)), Some(Rect::new(55, 55, 5, 5)));
        assert_eq!(s.to_screen(Point::new(1, 2)), Point::new(56, 57));
        assert!(!s.push(Rect::new(10, 10, 5, 5)));
        s.pop();
        s.pop();
        assert_eq!(s.depth(), 2);
        Ok(())
    }

    #[test]
    fn negative_offsets() -> Result<()> {
        let mut s = ClipStack::new();
        s.push(Rect::new(0, 0, 20, 20));
        assert!(s.push(Rect::new(-5, -5, 10, 10)));
        let top = *s.top().expect("pushed");
        assert_eq!(top.offset, Point::new(-5, -5));
        assert_eq!(top.clip, Rect::new(0, 0, 5, 5));
        assert!(s.is_visible(Point::new(5, 5)));
        assert!(!s.is_visible(Point::new(4, 5)));
        Ok(())
    }
}
