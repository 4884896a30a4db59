//! Rectangular region on the drawing plane

use super::{Point, Size};

/// A rectangular region with half-open extents
///
/// The region covers `x..x + width` horizontally and `y..y + height`
/// vertically: the right and bottom edges are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    /// Create a new rectangle
    pub const fn new(x: i32, y: i32, width: u16, height: u16) -> Self {
        Self { x, y, width, height }
    }

    /// Create a rectangle at origin with given size
    pub const fn sized(width: u16, height: u16) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Empty rectangle
    pub const fn empty() -> Self {
        Self::new(0, 0, 0, 0)
    }

    /// Check if the rectangle is empty
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Get the size
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Get the left edge x coordinate
    pub const fn left(&self) -> i32 {
        self.x
    }

    /// Get the right edge x coordinate (exclusive)
    pub const fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    /// Get the top edge y coordinate
    pub const fn top(&self) -> i32 {
        self.y
    }

    /// Get the bottom edge y coordinate (exclusive)
    pub const fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }

    /// Check if a point is inside this rectangle
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Check if a point is inside this rectangle
    pub const fn contains_point(&self, point: Point) -> bool {
        self.contains(point.x, point.y)
    }

    /// Move the rectangle by an offset
    pub const fn translate(&self, offset: Point) -> Self {
        Self::new(self.x + offset.x, self.y + offset.y, self.width, self.height)
    }

    /// Get the intersection of two rectangles
    ///
    /// Disjoint rectangles intersect to [`Rect::empty`], so intersection is
    /// commutative and associative.
    pub fn intersect(&self, other: &Rect) -> Self {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if x >= right || y >= bottom {
            Self::empty()
        } else {
            Self::new(x, y, (right - x) as u16, (bottom - y) as u16)
        }
    }

    /// Iterate over all positions in this rectangle, row by row
    pub fn positions(&self) -> impl Iterator<Item = (i32, i32)> {
        let x_start = self.x;
        let x_end = self.right();
        let y_start = self.y;
        let y_end = self.bottom();

        (y_start..y_end).flat_map(move |y| (x_start..x_end).map(move |x| (x, y)))
    }
}

impl From<(i32, i32, u16, u16)> for Rect {
    fn from((x, y, width, height): (i32, i32, u16, u16)) -> Self {
        Self::new(x, y, width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_creation() {
        let r = Rect::new(5, 10, 80, 24);
        assert_eq!(r.x, 5);
        assert_eq!(r.y, 10);
        assert_eq!(r.width, 80);
        assert_eq!(r.height, 24);
    }

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(5, 10, 80, 24);
        assert_eq!(r.left(), 5);
        assert_eq!(r.right(), 85);
        assert_eq!(r.top(), 10);
        assert_eq!(r.bottom(), 34);
    }

    #[test]
    fn test_rect_contains() {
        let r = Rect::new(5, 5, 10, 10);
        assert!(r.contains(5, 5));
        assert!(r.contains(14, 14));
        assert!(!r.contains(4, 5)); // Left of rect
        assert!(!r.contains(15, 5)); // Right of rect (exclusive)
        assert!(!r.contains(5, 4)); // Above rect
        assert!(!r.contains(5, 15)); // Below rect (exclusive)
    }

    #[test]
    fn test_rect_negative_origin() {
        let r = Rect::new(-2, -2, 4, 4);
        assert!(r.contains(-2, -2));
        assert!(r.contains(1, 1));
        assert!(!r.contains(2, 0));
    }

    #[test]
    fn test_rect_intersect() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 5, 10, 10);
        let intersection = a.intersect(&b);
        assert_eq!(intersection, Rect::new(5, 5, 5, 5));

        // No intersection
        let c = Rect::new(20, 20, 10, 10);
        assert!(a.intersect(&c).is_empty());
    }

    #[test]
    fn test_rect_intersect_commutes_and_associates() {
        let a = Rect::new(0, 0, 10, 8);
        let b = Rect::new(3, -2, 10, 6);
        let c = Rect::new(-5, 1, 11, 11);

        assert_eq!(a.intersect(&b), b.intersect(&a));
        assert_eq!(a.intersect(&b).intersect(&c), a.intersect(&b.intersect(&c)));
        assert_eq!(a.intersect(&c).intersect(&b), a.intersect(&b).intersect(&c));
    }

    #[test]
    fn test_rect_positions() {
        let r = Rect::new(0, 0, 3, 2);
        let positions: Vec<_> = r.positions().collect();
        assert_eq!(positions, vec![
            (0, 0), (1, 0), (2, 0),
            (0, 1), (1, 1), (2, 1),
        ]);
    }
}
