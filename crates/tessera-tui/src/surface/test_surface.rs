//! In-memory surface for rendering tests

use std::fmt;

use unicode_width::UnicodeWidthChar;

use super::Surface;
use crate::buffer::Cell;
use crate::error::Result;
use crate::geometry::{Point, Size};

/// A surface that keeps the last frame in memory
///
/// `Display` renders the frame as text, one line per row. A double-width rune
/// covers the cell after it, so that cell is not printed.
#[derive(Debug, Clone)]
pub struct TestSurface {
    size: Size,
    cells: Vec<Cell>,
    cursor: Option<Point>,
    frames: usize,
}

impl TestSurface {
    /// Create a blank surface
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            size: Size::new(width, height),
            cells: vec![Cell::empty(); Size::new(width, height).area() as usize],
            cursor: None,
            frames: 0,
        }
    }

    /// Change the extent; the contents are cleared
    pub fn resize(&mut self, width: u16, height: u16) {
        *self = Self {
            frames: self.frames,
            ..Self::new(width, height)
        };
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.size.width && y < self.size.height)
            .then(|| y as usize * self.size.width as usize + x as usize)
    }

    /// Cell at a position in the last frame
    pub fn cell(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Text of one row
    pub fn row(&self, y: u16) -> String {
        let mut line = String::new();
        let mut skip = false;
        for x in 0..self.size.width {
            if std::mem::take(&mut skip) {
                continue;
            }
            if let Some(cell) = self.cell(x, y) {
                line.push(cell.symbol);
                skip = cell.symbol.width() == Some(2);
            }
        }
        line
    }

    /// Cursor position, or `None` when hidden
    pub fn cursor(&self) -> Option<Point> {
        self.cursor
    }

    /// Number of frames completed
    pub fn frames(&self) -> usize {
        self.frames
    }
}

impl Surface for TestSurface {
    fn begin(&mut self) -> Result<()> {
        self.cells.fill(Cell::empty());
        Ok(())
    }

    fn set_cell(&mut self, x: u16, y: u16, cell: &Cell) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = *cell;
        }
    }

    fn set_cursor(&mut self, x: u16, y: u16) {
        self.cursor = Some(Point::new(x as i32, y as i32));
    }

    fn hide_cursor(&mut self) {
        self.cursor = None;
    }

    fn end(&mut self) -> Result<()> {
        self.frames += 1;
        Ok(())
    }

    fn size(&self) -> Size {
        self.size
    }
}

impl fmt::Display for TestSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.size.height {
            writeln!(f, "{}", self.row(y))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_display() {
        let mut surface = TestSurface::new(3, 2);
        surface.begin().unwrap();
        surface.set_cell(0, 0, &Cell::new('a'));
        surface.set_cell(2, 1, &Cell::new('b'));
        surface.set_cell(5, 5, &Cell::new('x'));
        surface.end().unwrap();

        assert_eq!(surface.to_string(), "a  \n  b\n");
        assert_eq!(surface.frames(), 1);
    }

    #[test]
    fn test_surface_begin_clears() {
        let mut surface = TestSurface::new(2, 1);
        surface.set_cell(0, 0, &Cell::new('z'));
        surface.begin().unwrap();
        assert_eq!(surface.row(0), "  ");
    }

    #[test]
    fn test_surface_wide_rune() {
        let mut surface = TestSurface::new(4, 1);
        surface.set_cell(0, 0, &Cell::new('世'));
        surface.set_cell(2, 0, &Cell::new('x'));
        assert_eq!(surface.row(0), "世x ");
    }

    #[test]
    fn test_surface_cursor() {
        let mut surface = TestSurface::new(4, 4);
        assert_eq!(surface.cursor(), None);
        surface.set_cursor(1, 2);
        assert_eq!(surface.cursor(), Some(Point::new(1, 2)));
        surface.hide_cursor();
        assert_eq!(surface.cursor(), None);
    }
}
