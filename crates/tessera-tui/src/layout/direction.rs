//! Main axis of a linear layout

use crate::geometry::{Point, Size};

/// Axis along which a box lays out its children
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Direction {
    /// Children side by side, left to right
    #[default]
    Horizontal,
    /// Children stacked, top to bottom
    Vertical,
}

impl Direction {
    /// Extent of `size` along this axis
    pub const fn main(self, size: Size) -> u16 {
        match self {
            Direction::Horizontal => size.width,
            Direction::Vertical => size.height,
        }
    }

    /// Extent of `size` across this axis
    pub const fn cross(self, size: Size) -> u16 {
        match self {
            Direction::Horizontal => size.height,
            Direction::Vertical => size.width,
        }
    }

    /// Size with `main` cells along the axis and `cross` across it
    pub const fn size(self, main: u16, cross: u16) -> Size {
        match self {
            Direction::Horizontal => Size::new(main, cross),
            Direction::Vertical => Size::new(cross, main),
        }
    }

    /// Offset of a child that starts `pos` cells along the axis
    pub const fn offset(self, pos: i32) -> Point {
        match self {
            Direction::Horizontal => Point::new(pos, 0),
            Direction::Vertical => Point::new(0, pos),
        }
    }

    /// Pick this axis' entry out of a `(horizontal, vertical)` pair
    pub fn pick<T>(self, (horizontal, vertical): (T, T)) -> T {
        match self {
            Direction::Horizontal => horizontal,
            Direction::Vertical => vertical,
        }
    }
}
