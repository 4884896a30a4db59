//! Size with width and height

/// Size representing width and height in terminal cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

impl Size {
    /// Create a new size
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Zero size
    pub const fn zero() -> Self {
        Self { width: 0, height: 0 }
    }

    /// Check if the size is empty (zero area)
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Calculate the area (number of cells)
    pub const fn area(&self) -> u32 {
        self.width as u32 * self.height as u32
    }

    /// Grow both extents, saturating at `u16::MAX`
    pub const fn grow(self, dw: u16, dh: u16) -> Self {
        Self::new(self.width.saturating_add(dw), self.height.saturating_add(dh))
    }

    /// Shrink both extents, saturating at zero
    pub const fn shrink(self, dw: u16, dh: u16) -> Self {
        Self::new(self.width.saturating_sub(dw), self.height.saturating_sub(dh))
    }

    /// Component-wise maximum
    pub fn max(self, other: Size) -> Self {
        Self::new(self.width.max(other.width), self.height.max(other.height))
    }
}

impl From<(u16, u16)> for Size {
    fn from((width, height): (u16, u16)) -> Self {
        Self { width, height }
    }
}
