//! Drawing targets the painter flushes frames into

mod test_surface;

pub use test_surface::TestSurface;

use crate::buffer::Cell;
use crate::error::Result;
use crate::geometry::Size;

/// A cell grid that receives one frame at a time
///
/// A frame is bracketed by [`begin`](Surface::begin) and
/// [`end`](Surface::end). Cells not written between the two are blank once
/// the frame ends. Cursor changes take effect on `end`.
pub trait Surface {
    /// Start a new frame
    fn begin(&mut self) -> Result<()>;

    /// Write one cell; positions outside [`size`](Surface::size) are ignored
    fn set_cell(&mut self, x: u16, y: u16, cell: &Cell);

    /// Show the cursor at a position
    fn set_cursor(&mut self, x: u16, y: u16);

    /// Hide the cursor
    fn hide_cursor(&mut self);

    /// Finish the frame and present it
    fn end(&mut self) -> Result<()>;

    /// Current extent in cells
    fn size(&self) -> Size;
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn begin(&mut self) -> Result<()> {
        (**self).begin()
    }

    fn set_cell(&mut self, x: u16, y: u16, cell: &Cell) {
        (**self).set_cell(x, y, cell)
    }

    fn set_cursor(&mut self, x: u16, y: u16) {
        (**self).set_cursor(x, y)
    }

    fn hide_cursor(&mut self) {
        (**self).hide_cursor()
    }

    fn end(&mut self) -> Result<()> {
        (**self).end()
    }

    fn size(&self) -> Size {
        (**self).size()
    }
}
