use super::Point;
use crate::{Error, Result};

/// Clamp a 64-bit coordinate into the `i32` range.
fn clamp_i32(v: i64) -> i32 {
    v.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

/// A rectangle with a signed origin and unsigned size.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub struct Rect {
    /// Top-left corner.
    pub tl: Point,
    /// Width.
    pub w: u32,
    /// Height.
    pub h: u32,
}

impl Rect {
    /// Construct a rectangle from coordinates and size.
    pub fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self {
            tl: Point { x, y },
            w,
            h,
        }
    }

    /// A zero-sized rectangle at the origin.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Does this rect have a zero size?
    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// Left edge (inclusive).
    pub fn left(&self) -> i32 {
        self.tl.x
    }

    /// Top edge (inclusive).
    pub fn top(&self) -> i32 {
        self.tl.y
    }

    /// Right edge (exclusive).
    pub fn right(&self) -> i32 {
        clamp_i32(self.tl.x as i64 + self.w as i64)
    }

    /// Bottom edge (exclusive).
    pub fn bottom(&self) -> i32 {
        clamp_i32(self.tl.y as i64 + self.h as i64)
    }

    /// The same size, located at the origin.
    pub fn at_origin(&self) -> Self {
        Self::new(0, 0, self.w, self.h)
    }

    /// Does this rectangle contain the point?
    pub fn contains_point(&self, p: impl Into<Point>) -> bool {
        let p = p.into();
        p.x >= self.left() && p.x < self.right() && p.y >= self.top() && p.y < self.bottom()
    }

    /// Does this rectangle completely enclose the other? An empty rectangle
    /// is enclosed by any rectangle that contains its origin.
    pub fn contains_rect(&self, other: &Self) -> bool {
        other.left() >= self.left()
            && other.top() >= self.top()
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Given a point that falls within this rectangle, rebase the point to be
    /// relative to our origin. If the point falls outside the rect, an error is
    /// returned.
    pub fn rebase(&self, pt: impl Into<Point>) -> Result<Point> {
        let pt = pt.into();
        if !self.contains_point(pt) {
            return Err(Error::OutsideRect(pt));
        }
        Ok(pt - self.tl)
    }

    /// Shift the rectangle by an offset.
    pub fn shift(&self, offset: impl Into<Point>) -> Self {
        Self {
            tl: self.tl + offset.into(),
            w: self.w,
            h: self.h,
        }
    }

    /// Intersect with another rectangle in the same coordinate space.
    pub fn intersect(&self, other: &Self) -> Option<Self> {
        let left = self.left().max(other.left());
        let top = self.top().max(other.top());
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right <= left || bottom <= top {
            return None;
        }
        Some(Self::new(
            left,
            top,
            (right as i64 - left as i64) as u32,
            (bottom as i64 - top as i64) as u32,
        ))
    }

    /// Do the two rectangles overlap with a non-empty area?
    pub fn intersects(&self, other: &Self) -> bool {
        self.intersect(other).is_some()
    }

    /// The smallest rectangle enclosing both.
    pub fn union(&self, other: &Self) -> Self {
        let left = self.left().min(other.left());
        let top = self.top().min(other.top());
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Self::new(
            left,
            top,
            (right as i64 - left as i64) as u32,
            (bottom as i64 - top as i64) as u32,
        )
    }

    /// Grow the rectangle by `n` on every side.
    pub fn expand(&self, n: u32) -> Self {
        let n_i = n.min(i32::MAX as u32) as i32;
        Self {
            tl: self.tl - Point::new(n_i, n_i),
            w: self.w.saturating_add(n.saturating_mul(2)),
            h: self.h.saturating_add(n.saturating_mul(2)),
        }
    }

    /// Extracts an inner rectangle, given a border width.
    pub fn inner(&self, border: u32) -> Result<Self> {
        let twice = border.saturating_mul(2);
        if self.w < twice || self.h < twice {
            return Err(Error::BorderTooLarge {
                border,
                w: self.w,
                h: self.h,
            });
        }
        let b = border as i32;
        Ok(Self {
            tl: self.tl + Point::new(b, b),
            w: self.w - twice,
            h: self.h - twice,
        })
    }
}

impl From<(i32, i32, u32, u32)> for Rect {
    fn from(v: (i32, i32, u32, u32)) -> Self {
        Self::new(v.0, v.1, v.2, v.3)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn contains() -> Result<()> {
        let r = Rect::new(10, 10, 10, 10);
        assert!(r.contains_point((10, 10)));
        assert!(r.contains_point((19, 19)));
        assert!(!r.contains_point((20, 19)));
        assert!(!r.contains_point((9, 10)));
        assert!(r.contains_rect(&Rect::new(12, 12, 8, 8)));
        assert!(!r.contains_rect(&Rect::new(12, 12, 9, 8)));
        Ok(())
    }

    #[test]
    fn rebase() -> Result<()> {
        let r = Rect::new(-5, 5, 10, 10);
        assert_eq!(r.rebase((0, 5))?, Point::new(5, 0));
        assert!(r.rebase((5, 5)).is_err());
        Ok(())
    }

    #[test]
    fn intersect() -> Result<()> {
        let a = Rect::new(0, 0, 10, 10);
        assert_eq!(
            a.intersect(&Rect::new(5, -5, 10, 10)),
            Some(Rect::new(5, 0, 5, 5))
        );
        assert_eq!(a.intersect(&Rect::new(10, 0, 5, 5)), None);
        assert_eq!(a.intersect(&Rect::new(2, 2, 0, 4)), None);
        Ok(())
    }

    #[test]
    fn expand_inner() -> Result<()> {
        let r = Rect::new(2, 2, 4, 6);
        assert_eq!(r.expand(2), Rect::new(0, 0, 8, 10));
        assert_eq!(r.expand(2).inner(2)?, r);
        assert!(Rect::new(0, 0, 3, 8).inner(2).is_err());
        Ok(())
    }

    #[test]
    fn union() -> Result<()> {
        let a = Rect::new(0, 0, 4, 4);
        let b = Rect::new(6, -2, 2, 2);
        assert_eq!(a.union(&b), Rect::new(0, -2, 8, 6));
        Ok(())
    }

    proptest! {
        #[test]
        fn intersection_is_contained(
            ax in -100i32..100, ay in -100i32..100, aw in 0u32..100, ah in 0u32..100,
            bx in -100i32..100, by in -100i32..100, bw in 0u32..100, bh in 0u32..100,
        ) {
            let a = Rect::new(ax, ay, aw, ah);
            let b = Rect::new(bx, by, bw, bh);
            let i = a.intersect(&b);
            prop_assert_eq!(i, b.intersect(&a));
            if let Some(i) = i {
                prop_assert!(a.contains_rect(&i));
                prop_assert!(b.contains_rect(&i));
                prop_assert!(!i.is_empty());
            }
        }

        #[test]
        fn union_contains_both(
            ax in -100i32..100, ay in -100i32..100, aw in 0u32..100, ah in 0u32..100,
            bx in -100i32..100, by in -100i32..100, bw in 0u32..100, bh in 0u32..100,
        ) {
            let a = Rect::new(ax, ay, aw, ah);
            let b = Rect::new(bx, by, bw, bh);
            let u = a.union(&b);
            prop_assert!(u.contains_rect(&a));
            prop_assert!(u.contains_rect(&b));
        }
    }
}
