#![forbid(unsafe_code)]

//! Geometric primitives.

/// A rectangle for layout bounds and hit testing.
///
/// Uses terminal coordinates (0-indexed, origin at top-left).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    /// Left edge (inclusive).
    pub x: u16,
    /// Top edge (inclusive).
    pub y: u16,
    /// Width in cells.
    pub width: u16,
    /// Height in cells.
    pub height: u16,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from origin with given size.
    #[inline]
    pub const fn from_size(width: u16, height: u16) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    /// Area in cells.
    #[inline]
    pub const fn area(&self) -> u32 {
        self.width as u32 * self.height as u32
    }

    /// Check if the rectangle has zero area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub const fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Compute the intersection with another rectangle.
    ///
    /// Returns an empty rectangle if the rectangles don't overlap.
    pub fn intersection(&self, other: &Rect) -> Rect {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if x < right && y < bottom {
            Rect::new(x, y, right - x, bottom - y)
        } else {
            Rect::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Rect;

    #[test]
    fn rect_contains_edges() {
        let rect = Rect::new(2, 3, 4, 5);
        assert!(rect.contains(2, 3));
        assert!(rect.contains(5, 7));
        assert!(!rect.contains(6, 3));
        assert!(!rect.contains(2, 8));
    }

    #[test]
    fn rect_contains_boundary_conditions() {
        let r = Rect::new(0, 0, 5, 5);
        // Top-left corner (inclusive)
        assert!(r.contains(0, 0));
        // Right/bottom edges are exclusive
        assert!(r.contains(4, 4));
        assert!(!r.contains(5, 0));
        assert!(!r.contains(0, 5));
    }

    #[test]
    fn rect_contains_empty_rect() {
        let r = Rect::new(5, 5, 0, 0);
        // Empty rect contains nothing, not even its own origin
        assert!(!r.contains(5, 5));
    }

    #[test]
    fn rect_intersection_overlaps() {
        let a = Rect::new(0, 0, 4, 4);
        let b = Rect::new(2, 2, 4, 4);
        assert_eq!(a.intersection(&b), Rect::new(2, 2, 2, 2));
    }

    #[test]
    fn rect_intersection_no_overlap_is_empty() {
        let a = Rect::new(0, 0, 2, 2);
        let b = Rect::new(3, 3, 2, 2);
        assert_eq!(a.intersection(&b), Rect::default());
    }

    #[test]
    fn rect_intersection_adjacent_no_overlap() {
        // Rects share an edge but don't overlap (right edge is exclusive)
        let a = Rect::new(0, 0, 5, 5);
        let b = Rect::new(5, 0, 5, 5);
        assert!(a.intersection(&b).is_empty());
    }

    #[test]
    fn rect_right_bottom_saturating() {
        let r = Rect::new(u16::MAX - 5, u16::MAX - 3, 100, 100);
        assert_eq!(r.right(), u16::MAX);
        assert_eq!(r.bottom(), u16::MAX);
    }

    #[test]
    fn rect_area_and_is_empty() {
        assert_eq!(Rect::new(0, 0, 10, 20).area(), 200);
        assert!(Rect::new(5, 5, 0, 10).is_empty());
        assert!(!Rect::new(0, 0, 1, 1).is_empty());
    }

    mod props {
        use super::Rect;
        use proptest::prelude::*;

        fn rects() -> impl Strategy<Value = Rect> {
            (0u16..100, 0u16..100, 0u16..100, 0u16..100)
                .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
        }

        proptest! {
            #[test]
            fn intersection_is_commutative(a in rects(), b in rects()) {
                prop_assert_eq!(a.intersection(&b), b.intersection(&a));
            }

            #[test]
            fn intersection_is_contained_in_both(a in rects(), b in rects()) {
                let i = a.intersection(&b);
                prop_assert!(i.area() <= a.area());
                prop_assert!(i.area() <= b.area());
                if !i.is_empty() {
                    prop_assert!(a.contains(i.x, i.y));
                    prop_assert!(b.contains(i.x, i.y));
                    prop_assert!(a.contains(i.right() - 1, i.bottom() - 1));
                    prop_assert!(b.contains(i.right() - 1, i.bottom() - 1));
                }
            }

            #[test]
            fn point_in_intersection_is_in_both(
                a in rects(),
                b in rects(),
                x in 0u16..200,
                y in 0u16..200,
            ) {
                let i = a.intersection(&b);
                prop_assert_eq!(i.contains(x, y), a.contains(x, y) && b.contains(x, y));
            }
        }
    }
}
