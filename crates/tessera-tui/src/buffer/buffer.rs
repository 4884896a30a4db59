//! Sparse buffer of painted cells

use std::collections::BTreeMap;

use super::Cell;
use crate::geometry::Rect;

/// Sparse mapping from absolute position to cell
///
/// Cells are keyed by `(y, x)` so iteration is row-major and every flush of
/// the same buffer writes cells in the same order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Buffer {
    cells: BTreeMap<(i32, i32), Cell>,
}

impl Buffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cells written since the last clear
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if nothing has been written
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Get the cell at a position
    pub fn get(&self, x: i32, y: i32) -> Option<&Cell> {
        self.cells.get(&(y, x))
    }

    /// Write a cell, replacing whatever was there
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) {
        self.cells.insert((y, x), cell);
    }

    /// Fill an area with a cell
    pub fn fill(&mut self, area: Rect, cell: Cell) {
        for (x, y) in area.positions() {
            self.set(x, y, cell);
        }
    }

    /// Remove every cell
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Iterate over cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (i32, i32, &Cell)> {
        self.cells.iter().map(|(&(y, x), cell)| (x, y, cell))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Color;

    #[test]
    fn test_buffer_get_set() {
        let mut buf = Buffer::new();
        buf.set(5, 2, Cell::new('X').fg(Color::Red));

        let cell = buf.get(5, 2).unwrap();
        assert_eq!(cell.symbol, 'X');
        assert_eq!(cell.fg, Color::Red);
        assert!(buf.get(2, 5).is_none());
    }

    #[test]
    fn test_buffer_row_major_order() {
        let mut buf = Buffer::new();
        buf.set(3, 1, Cell::new('d'));
        buf.set(0, 1, Cell::new('c'));
        buf.set(9, 0, Cell::new('b'));
        buf.set(-1, 0, Cell::new('a'));

        let symbols: String = buf.iter().map(|(_, _, c)| c.symbol).collect();
        assert_eq!(symbols, "abcd");
    }

    #[test]
    fn test_buffer_overwrite() {
        let mut buf = Buffer::new();
        buf.set(1, 1, Cell::new('A'));
        buf.set(1, 1, Cell::new('B'));
        assert_eq!(buf.len(), 1);
        assert_eq!(buf.get(1, 1).unwrap().symbol, 'B');
    }

    #[test]
    fn test_buffer_fill() {
        let mut buf = Buffer::new();
        buf.fill(Rect::new(1, 1, 3, 3), Cell::new('#').fg(Color::Blue));

        assert!(buf.get(0, 0).is_none());
        assert_eq!(buf.get(1, 1).unwrap().symbol, '#');
        assert_eq!(buf.get(3, 3).unwrap().symbol, '#');
        assert!(buf.get(4, 4).is_none());
        assert_eq!(buf.len(), 9);
    }

    #[test]
    fn test_buffer_clear() {
        let mut buf = Buffer::new();
        buf.set(2, 2, Cell::new('X'));
        buf.clear();
        assert!(buf.is_empty());
    }
}
