//! Terminal surface wrapping crossterm operations

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::EnableBracketedPaste,
    execute, queue,
    style::{Attribute, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{self, enable_raw_mode, Clear, ClearType, EnterAlternateScreen},
};
use std::io::{self, Stdout, Write};
use tracing::trace;

use super::RawModeGuard;
use crate::buffer::{Buffer, Cell};
use crate::error::Result;
use crate::geometry::{Point, Size};
use crate::style::Color;
use crate::surface::Surface;

/// Terminal surface over crossterm
///
/// Frames are diffed against the previous one: only changed cells are
/// written, and cells that disappeared are blanked.
pub struct Terminal<W: Write = Stdout> {
    out: W,
    size: Size,
    /// Frame being assembled between `begin` and `end`
    frame: Buffer,
    /// Last presented frame, `None` forces a full redraw
    prev: Option<Buffer>,
    cursor: Option<Point>,
}

impl Terminal<Stdout> {
    /// Create a terminal over stdout, sized from the real terminal
    pub fn new() -> Result<Self> {
        let (width, height) = terminal::size()?;
        Ok(Self::with_writer(io::stdout(), Size::new(width, height)))
    }

    /// Enter raw mode with RAII guard
    ///
    /// This will:
    /// 1. Enable raw mode
    /// 2. Enter alternate screen
    /// 3. Hide the cursor
    /// 4. Enable bracketed paste mode
    ///
    /// The returned guard will cleanup when dropped.
    pub fn enter_raw_mode(&mut self) -> Result<RawModeGuard> {
        enable_raw_mode()?;
        execute!(self.out, EnterAlternateScreen, Hide, EnableBracketedPaste)?;
        self.invalidate();
        Ok(RawModeGuard::new())
    }

    /// Refresh size from terminal (call after resize event)
    pub fn refresh_size(&mut self) -> Result<()> {
        let (width, height) = terminal::size()?;
        self.resize(Size::new(width, height));
        Ok(())
    }
}

impl<W: Write> Terminal<W> {
    /// Create a terminal writing escape sequences to `out`
    pub fn with_writer(out: W, size: Size) -> Self {
        Self {
            out,
            size,
            frame: Buffer::new(),
            prev: None,
            cursor: None,
        }
    }

    /// Set a new extent; the next frame is drawn in full
    pub fn resize(&mut self, size: Size) {
        self.size = size;
        self.invalidate();
    }

    /// Force the next frame to be a full redraw
    pub fn invalidate(&mut self) {
        self.prev = None;
    }

    /// Borrow the underlying writer
    pub fn writer(&self) -> &W {
        &self.out
    }

    fn draw_cell(&mut self, x: u16, y: u16, cell: &Cell, last: &mut (Color, Color)) -> io::Result<()> {
        queue!(self.out, MoveTo(x, y))?;

        // Only change colors if needed
        if (cell.fg, cell.bg) != *last {
            queue!(self.out, SetForegroundColor(cell.fg.into()))?;
            queue!(self.out, SetBackgroundColor(cell.bg.into()))?;
            *last = (cell.fg, cell.bg);
        }

        for attr in cell.modifier.attributes() {
            queue!(self.out, SetAttribute(attr))?;
        }

        queue!(self.out, Print(cell.symbol))?;

        if !cell.modifier.is_empty() {
            queue!(self.out, SetAttribute(Attribute::Reset))?;
            // Attribute reset also drops colors on some terminals
            *last = (Color::Reset, Color::Reset);
            queue!(self.out, ResetColor)?;
        }
        Ok(())
    }

    fn present(&mut self) -> io::Result<usize> {
        let frame = std::mem::take(&mut self.frame);
        let mut last = (Color::Reset, Color::Reset);
        let mut written = 0;

        queue!(self.out, ResetColor)?;
        match self.prev.take() {
            None => {
                queue!(self.out, Clear(ClearType::All))?;
                for (x, y, cell) in frame.iter() {
                    self.draw_cell(x as u16, y as u16, cell, &mut last)?;
                    written += 1;
                }
            }
            Some(prev) => {
                for (x, y, cell) in frame.iter() {
                    if prev.get(x, y) != Some(cell) {
                        self.draw_cell(x as u16, y as u16, cell, &mut last)?;
                        written += 1;
                    }
                }
                let blank = Cell::empty();
                for (x, y, _) in prev.iter() {
                    if frame.get(x, y).is_none() {
                        self.draw_cell(x as u16, y as u16, &blank, &mut last)?;
                        written += 1;
                    }
                }
            }
        }

        match self.cursor {
            Some(pos) => queue!(self.out, MoveTo(pos.x as u16, pos.y as u16), Show)?,
            None => queue!(self.out, Hide)?,
        }
        self.out.flush()?;
        self.prev = Some(frame);
        Ok(written)
    }
}

impl<W: Write> Surface for Terminal<W> {
    fn begin(&mut self) -> Result<()> {
        self.frame.clear();
        Ok(())
    }

    fn set_cell(&mut self, x: u16, y: u16, cell: &Cell) {
        if x < self.size.width && y < self.size.height {
            self.frame.set(x as i32, y as i32, *cell);
        }
    }

    fn set_cursor(&mut self, x: u16, y: u16) {
        self.cursor = Some(Point::new(x as i32, y as i32));
    }

    fn hide_cursor(&mut self) {
        self.cursor = None;
    }

    fn end(&mut self) -> Result<()> {
        let written = self.present()?;
        trace!(written, "terminal frame presented");
        Ok(())
    }

    fn size(&self) -> Size {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(term: &mut Terminal<Vec<u8>>, cells: &[(u16, u16, char)]) -> String {
        term.out.clear();
        term.begin().unwrap();
        for &(x, y, ch) in cells {
            term.set_cell(x, y, &Cell::new(ch));
        }
        term.end().unwrap();
        String::from_utf8_lossy(term.writer()).into_owned()
    }

    #[test]
    fn test_first_frame_draws_everything() {
        let mut term = Terminal::with_writer(Vec::new(), Size::new(10, 2));
        let out = frame(&mut term, &[(0, 0, 'h'), (1, 0, 'i')]);
        assert!(out.contains('h'));
        assert!(out.contains('i'));
    }

    #[test]
    fn test_unchanged_cells_are_skipped() {
        let mut term = Terminal::with_writer(Vec::new(), Size::new(10, 2));
        frame(&mut term, &[(0, 0, 'a'), (1, 0, 'b')]);
        let out = frame(&mut term, &[(0, 0, 'a'), (1, 0, 'c')]);
        assert!(!out.contains('a'));
        assert!(out.contains('c'));
    }

    #[test]
    fn test_out_of_bounds_cells_dropped() {
        let mut term = Terminal::with_writer(Vec::new(), Size::new(2, 1));
        let out = frame(&mut term, &[(5, 0, 'q')]);
        assert!(!out.contains('q'));
    }

    #[test]
    fn test_invalidate_forces_full_redraw() {
        let mut term = Terminal::with_writer(Vec::new(), Size::new(4, 1));
        frame(&mut term, &[(0, 0, 'k')]);
        term.invalidate();
        let out = frame(&mut term, &[(0, 0, 'k')]);
        assert!(out.contains('k'));
    }
}
