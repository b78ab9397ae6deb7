use super::Rect;

/// A frame extracted from a rectangle
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub struct Frame {
    /// The top of the frame, not including corners
    pub top: Rect,
    /// The bottom of the frame, not including corners
    pub bottom: Rect,
    /// The left of the frame, not including corners
    pub left: Rect,
    /// The right of the frame, not including corners
    pub right: Rect,
    /// The top left corner
    pub topleft: Rect,
    /// The top right corner
    pub topright: Rect,
    /// The bottom left corner
    pub bottomleft: Rect,
    /// The bottom right corner
    pub bottomright: Rect,
    /// The original outer rect
    outer_rect: Rect,
    /// The border width
    border: u32,
}

impl Frame {
    /// Construct a new frame. If the rect is too small to fit the specified
    /// frame, we return a zero Frame.
    pub fn new(rect: Rect, border: u32) -> Self {
        if border == 0 || rect.w <= border.saturating_mul(2) || rect.h <= border.saturating_mul(2) {
            return Self {
                outer_rect: rect,
                border,
                ..Default::default()
            };
        }
        let b = border as i32;
        let (x, y) = (rect.tl.x, rect.tl.y);
        let right_x = rect.right() - b;
        let bottom_y = rect.bottom() - b;
        let inner_w = rect.w - 2 * border;
        let inner_h = rect.h - 2 * border;
        Self {
            top: Rect::new(x + b, y, inner_w, border),
            bottom: Rect::new(x + b, bottom_y, inner_w, border),
            left: Rect::new(x, y + b, border, inner_h),
            right: Rect::new(right_x, y + b, border, inner_h),
            topleft: Rect::new(x, y, border, border),
            topright: Rect::new(right_x, y, border, border),
            bottomleft: Rect::new(x, bottom_y, border, border),
            bottomright: Rect::new(right_x, bottom_y, border, border),
            outer_rect: rect,
            border,
        }
    }

    /// Is this a zero frame with no drawable segments?
    pub fn is_zero(&self) -> bool {
        self.top.is_empty() && self.left.is_empty() && self.topleft.is_empty()
    }

    /// The outer rectangle this frame was carved from.
    pub fn outer(&self) -> Rect {
        self.outer_rect
    }

    /// The rectangle enclosed by the frame.
    pub fn inner(&self) -> Rect {
        self.outer_rect
            .inner(self.border)
            .unwrap_or_else(|_| Rect::new(self.outer_rect.tl.x, self.outer_rect.tl.y, 0, 0))
    }

    /// Segments lit from the top-left: top and left edges with the three
    /// corners they touch.
    pub fn upper_segments(&self) -> [Rect; 5] {
        [
            self.topleft,
            self.top,
            self.topright,
            self.left,
            self.bottomleft,
        ]
    }

    /// Segments on the bottom-right: bottom and right edges with their shared
    /// corner.
    pub fn lower_segments(&self) -> [Rect; 3] {
        [self.bottom, self.right, self.bottomright]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Result;

    #[test]
    fn tframe() -> Result<()> {
        let r = Rect::new(-1, -1, 7, 5);
        let f = Frame::new(r, 1);
        assert_eq!(f.top, Rect::new(0, -1, 5, 1));
        assert_eq!(f.bottom, Rect::new(0, 3, 5, 1));
        assert_eq!(f.left, Rect::new(-1, 0, 1, 3));
        assert_eq!(f.right, Rect::new(5, 0, 1, 3));
        assert_eq!(f.bottomright, Rect::new(5, 3, 1, 1));
        assert_eq!(f.inner(), Rect::new(0, 0, 5, 3));
        assert_eq!(f.outer(), r);
        Ok(())
    }

    #[test]
    fn too_small() -> Result<()> {
        let f = Frame::new(Rect::new(0, 0, 2, 2), 1);
        assert!(f.is_zero());
        assert!(Frame::new(Rect::new(0, 0, 10, 10), 0).is_zero());
        Ok(())
    }
}
