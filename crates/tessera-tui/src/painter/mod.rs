//! Rendering context widgets draw through
//!
//! Widgets draw in local coordinates. The painter maps them through the sum of
//! the pushed offsets, drops anything outside the active mask and records the
//! rest in a sparse buffer that [`Painter::flush`] hands to the surface.

mod border;

pub use border::{BorderChars, BorderType};

use tracing::trace;

use crate::buffer::{Buffer, Cell};
use crate::error::Result;
use crate::geometry::{Point, Rect};
use crate::style::Style;
use crate::surface::Surface;
use crate::text::rune_width;
use crate::theme::Theme;
use crate::widget::Widget;

/// Stateful drawing context over a surface and a theme
pub struct Painter<'a> {
    surface: &'a mut dyn Surface,
    theme: &'a Theme,
    buffer: Buffer,
    transforms: Vec<Point>,
    mask: Rect,
    style: Style,
    cursor: Option<Point>,
}

impl<'a> Painter<'a> {
    /// Create a painter whose mask covers the whole surface
    pub fn new(surface: &'a mut dyn Surface, theme: &'a Theme) -> Self {
        let size = surface.size();
        Self {
            surface,
            theme,
            buffer: Buffer::new(),
            transforms: Vec::new(),
            mask: Rect::sized(size.width, size.height),
            style: Style::new(),
            cursor: None,
        }
    }

    /// Theme used by [`Painter::with_style`]
    pub fn theme(&self) -> &Theme {
        self.theme
    }

    /// Cells painted since the last repaint
    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    /// Sum of all pushed offsets
    pub fn offset(&self) -> Point {
        self.transforms.iter().fold(Point::origin(), |acc, &p| acc + p)
    }

    /// Active clip rectangle in absolute coordinates
    pub fn mask(&self) -> Rect {
        self.mask
    }

    /// Style applied to drawn cells
    pub fn style(&self) -> Style {
        self.style
    }

    /// Push an offset for subsequent drawing
    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.transforms.push(Point::new(dx, dy));
    }

    /// Pop the most recent offset; does nothing when none is pushed
    pub fn restore(&mut self) {
        self.transforms.pop();
    }

    fn map(&self, x: i32, y: i32) -> Point {
        Point::new(x, y) + self.offset()
    }

    /// Draw a rune at a local position
    pub fn draw_rune(&mut self, x: i32, y: i32, c: char) {
        let at = self.map(x, y);
        if self.mask.contains_point(at) {
            let cell = Cell::new(c).style(self.style);
            self.buffer.set(at.x, at.y, cell);
        }
    }

    /// Draw text from a local position, advancing by each rune's width
    pub fn draw_text(&mut self, x: i32, y: i32, text: &str) {
        let mut x = x;
        for c in text.chars() {
            self.draw_rune(x, y, c);
            x += rune_width(c) as i32;
        }
    }

    /// Draw `─` from `x1` to `x2` inclusive
    pub fn draw_horizontal_line(&mut self, x1: i32, x2: i32, y: i32) {
        let glyph = BorderType::Single.chars().horizontal;
        for x in x1..=x2 {
            self.draw_rune(x, y, glyph);
        }
    }

    /// Draw `│` from `y1` to `y2` inclusive
    pub fn draw_vertical_line(&mut self, x: i32, y1: i32, y2: i32) {
        let glyph = BorderType::Single.chars().vertical;
        for y in y1..=y2 {
            self.draw_rune(x, y, glyph);
        }
    }

    /// Draw a border around `rect`
    ///
    /// Rectangles narrower or shorter than two cells are skipped.
    pub fn draw_rect(&mut self, rect: Rect, border: BorderType) {
        if !border.has_border() || rect.width < 2 || rect.height < 2 {
            return;
        }
        let chars = border.chars();
        let (left, top) = (rect.left(), rect.top());
        let (right, bottom) = (rect.right() - 1, rect.bottom() - 1);

        for x in left + 1..right {
            self.draw_rune(x, top, chars.horizontal);
            self.draw_rune(x, bottom, chars.horizontal);
        }
        for y in top + 1..bottom {
            self.draw_rune(left, y, chars.vertical);
            self.draw_rune(right, y, chars.vertical);
        }
        self.draw_rune(left, top, chars.top_left);
        self.draw_rune(right, top, chars.top_right);
        self.draw_rune(left, bottom, chars.bottom_left);
        self.draw_rune(right, bottom, chars.bottom_right);
    }

    /// Fill `rect` with spaces in the current style
    pub fn fill_rect(&mut self, rect: Rect) {
        for (x, y) in rect.positions() {
            self.draw_rune(x, y, ' ');
        }
    }

    /// Show the cursor at a local position when the frame is flushed
    ///
    /// Positions outside the mask leave the cursor hidden.
    pub fn draw_cursor(&mut self, x: i32, y: i32) {
        let at = self.map(x, y);
        if self.mask.contains_point(at) {
            self.cursor = Some(at);
        }
    }

    /// Run `f` with drawing clipped to `rect` (local coordinates)
    ///
    /// The new mask is the intersection with the current one, so nested masks
    /// only ever shrink.
    pub fn with_mask<R>(&mut self, rect: Rect, f: impl FnOnce(&mut Self) -> R) -> R {
        let mapped = rect.translate(self.offset());
        let saved = self.mask;
        self.mask = saved.intersect(&mapped);
        let result = f(self);
        self.mask = saved;
        result
    }

    /// Run `f` with the theme style `name` merged over the current style
    pub fn with_style<R>(&mut self, name: &str, f: impl FnOnce(&mut Self) -> R) -> R {
        let style = self.theme.style(name);
        self.with_overlay(style, f)
    }

    /// Run `f` with `style` merged over the current style
    pub fn with_overlay<R>(&mut self, style: Style, f: impl FnOnce(&mut Self) -> R) -> R {
        let saved = self.style;
        self.style = saved.merge(style);
        let result = f(self);
        self.style = saved;
        result
    }

    /// Run `f` with an offset pushed, popping it afterwards
    pub fn with_translation<R>(&mut self, dx: i32, dy: i32, f: impl FnOnce(&mut Self) -> R) -> R {
        self.translate(dx, dy);
        let result = f(self);
        self.restore();
        result
    }

    /// Send the buffered frame to the surface
    pub fn flush(&mut self) -> Result<()> {
        self.surface.begin()?;
        for (x, y, cell) in self.buffer.iter() {
            if let (Ok(x), Ok(y)) = (u16::try_from(x), u16::try_from(y)) {
                self.surface.set_cell(x, y, cell);
            }
        }
        match self.cursor.map(|p| (u16::try_from(p.x), u16::try_from(p.y))) {
            Some((Ok(x), Ok(y))) => self.surface.set_cursor(x, y),
            _ => self.surface.hide_cursor(),
        }
        self.surface.end()?;
        trace!(cells = self.buffer.len(), cursor = ?self.cursor, "flushed frame");
        Ok(())
    }

    /// Lay out, draw and flush `widget` at the surface size
    pub fn repaint(&mut self, widget: &mut dyn Widget) -> Result<()> {
        let size = self.surface.size();
        self.mask = Rect::sized(size.width, size.height);
        self.buffer.clear();
        self.transforms.clear();
        self.style = self.theme.style("normal");
        self.cursor = None;

        widget.resize(size);
        widget.draw(self);
        self.flush()
    }
}
