//! Two-dimensional grid container

use std::collections::BTreeMap;

use tracing::warn;

use crate::event::KeyEvent;
use crate::geometry::{Rect, Size};
use crate::layout::{distribute_stretched, LayoutItem, SizePolicy};
use crate::painter::{BorderType, Painter};
use crate::widget::Widget;

/// Widgets arranged in columns and rows
///
/// Column widths and row heights are laid out independently: each track
/// takes the largest hints of the widgets in it and a policy combined with
/// [`SizePolicy::for_track`]. Tracks with a stretch factor share leftover
/// space by weight. With a border, the outer edge and every divider between
/// tracks take one cell.
pub struct Grid {
    cols: usize,
    rows: usize,
    cells: BTreeMap<(usize, usize), Box<dyn Widget>>,
    border: bool,
    column_stretch: BTreeMap<usize, u16>,
    row_stretch: BTreeMap<usize, u16>,
    column_widths: Vec<u16>,
    row_heights: Vec<u16>,
    size: Size,
}

/// Which axis a track runs along
#[derive(Clone, Copy)]
enum Track {
    Column,
    Row,
}

impl Grid {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            cells: BTreeMap::new(),
            border: false,
            column_stretch: BTreeMap::new(),
            row_stretch: BTreeMap::new(),
            column_widths: vec![0; cols],
            row_heights: vec![0; rows],
            size: Size::zero(),
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Place a widget, replacing any previous occupant
    ///
    /// Positions outside the grid are ignored.
    pub fn set_cell(&mut self, col: usize, row: usize, widget: impl Widget + 'static) {
        self.set_boxed(col, row, Box::new(widget));
    }

    fn set_boxed(&mut self, col: usize, row: usize, widget: Box<dyn Widget>) {
        if col >= self.cols || row >= self.rows {
            warn!(col, row, cols = self.cols, rows = self.rows, "grid cell out of range");
            return;
        }
        self.cells.insert((col, row), widget);
    }

    pub fn cell(&self, col: usize, row: usize) -> Option<&dyn Widget> {
        self.cells.get(&(col, row)).map(|c| c.as_ref())
    }

    /// Add a row at the bottom filled from the left; extra widgets are dropped
    pub fn append_row<I>(&mut self, widgets: I)
    where
        I: IntoIterator<Item = Box<dyn Widget>>,
    {
        let row = self.rows;
        self.rows += 1;
        self.row_heights.push(0);
        for (col, widget) in widgets.into_iter().enumerate().take(self.cols) {
            self.cells.insert((col, row), widget);
        }
    }

    /// Remove a row, moving the rows below it up; out-of-range rows are ignored
    pub fn remove_row(&mut self, row: usize) {
        if row >= self.rows {
            warn!(row, rows = self.rows, "grid remove_row out of range");
            return;
        }
        let cells = std::mem::take(&mut self.cells);
        self.cells = cells
            .into_iter()
            .filter(|((_, r), _)| *r != row)
            .map(|((c, r), w)| if r > row { ((c, r - 1), w) } else { ((c, r), w) })
            .collect();

        let stretch = std::mem::take(&mut self.row_stretch);
        self.row_stretch = stretch
            .into_iter()
            .filter(|(r, _)| *r != row)
            .map(|(r, w)| if r > row { (r - 1, w) } else { (r, w) })
            .collect();

        self.rows -= 1;
        self.row_heights.remove(row);
    }

    pub fn set_column_stretch(&mut self, col: usize, weight: u16) {
        if col >= self.cols {
            warn!(col, cols = self.cols, "grid column stretch out of range");
            return;
        }
        self.column_stretch.insert(col, weight);
    }

    pub fn set_row_stretch(&mut self, row: usize, weight: u16) {
        if row >= self.rows {
            warn!(row, rows = self.rows, "grid row stretch out of range");
            return;
        }
        self.row_stretch.insert(row, weight);
    }

    pub fn set_border(&mut self, enabled: bool) {
        self.border = enabled;
    }

    pub fn bordered(mut self) -> Self {
        self.border = true;
        self
    }

    /// Widths assigned by the last resize
    pub fn column_widths(&self) -> &[u16] {
        &self.column_widths
    }

    /// Heights assigned by the last resize
    pub fn row_heights(&self) -> &[u16] {
        &self.row_heights
    }

    fn overhead(&self, track: Track) -> u16 {
        if !self.border {
            return 0;
        }
        let count = match track {
            Track::Column => self.cols,
            Track::Row => self.rows,
        };
        u16::try_from(count + 1).unwrap_or(u16::MAX)
    }

    fn track_items(&self, track: Track) -> Vec<LayoutItem> {
        let count = match track {
            Track::Column => self.cols,
            Track::Row => self.rows,
        };
        let extent = |s: Size| match track {
            Track::Column => s.width,
            Track::Row => s.height,
        };

        (0..count)
            .map(|i| {
                let members = self.cells.iter().filter(|((c, r), _)| match track {
                    Track::Column => *c == i,
                    Track::Row => *r == i,
                });
                let mut item = LayoutItem::default();
                let mut policies = Vec::new();
                for (_, widget) in members {
                    item.min = item.min.max(extent(widget.min_size_hint()));
                    item.hint = item.hint.max(extent(widget.size_hint()));
                    let (h, v) = widget.size_policy();
                    policies.push(match track {
                        Track::Column => h,
                        Track::Row => v,
                    });
                }
                item.policy = SizePolicy::for_track(policies);
                item
            })
            .collect()
    }

    fn stretch(&self, track: Track) -> Vec<u16> {
        let (count, weights) = match track {
            Track::Column => (self.cols, &self.column_stretch),
            Track::Row => (self.rows, &self.row_stretch),
        };
        (0..count)
            .map(|i| weights.get(&i).copied().unwrap_or(0))
            .collect()
    }

    fn hint_along(&self, track: Track, value: impl Fn(&LayoutItem) -> u16) -> u16 {
        self.track_items(track)
            .iter()
            .fold(self.overhead(track), |acc, item| acc.saturating_add(value(item)))
    }

    fn policy_along(&self, track: Track) -> SizePolicy {
        if self
            .track_items(track)
            .iter()
            .any(|item| item.policy == SizePolicy::Expanding)
        {
            SizePolicy::Expanding
        } else {
            SizePolicy::Preferred
        }
    }

    /// Offsets of each track's first cell
    fn starts(extents: &[u16], border: bool) -> Vec<i32> {
        let gap = border as i32;
        let mut pos = gap;
        extents
            .iter()
            .map(|&extent| {
                let start = pos;
                pos += extent as i32 + gap;
                start
            })
            .collect()
    }

    fn draw_border(&self, painter: &mut Painter<'_>, xs: &[i32], ys: &[i32]) {
        let (w, h) = (self.size.width as i32, self.size.height as i32);
        let chars = BorderType::Single.chars();

        painter.draw_rect(Rect::sized(self.size.width, self.size.height), BorderType::Single);
        for &x in xs.iter().skip(1) {
            let x = x - 1;
            painter.draw_vertical_line(x, 1, h - 2);
            painter.draw_rune(x, 0, chars.top_tee);
            painter.draw_rune(x, h - 1, chars.bottom_tee);
        }
        for &y in ys.iter().skip(1) {
            let y = y - 1;
            painter.draw_horizontal_line(1, w - 2, y);
            painter.draw_rune(0, y, chars.left_tee);
            painter.draw_rune(w - 1, y, chars.right_tee);
            for &x in xs.iter().skip(1) {
                painter.draw_rune(x - 1, y, chars.cross);
            }
        }
    }

    /// Draw the border and every cell; `row_style` names a theme style that
    /// fills and styles a whole row
    pub(crate) fn draw_grid(
        &self,
        painter: &mut Painter<'_>,
        row_style: impl Fn(usize) -> Option<&'static str>,
    ) {
        let xs = Self::starts(&self.column_widths, self.border);
        let ys = Self::starts(&self.row_heights, self.border);

        if self.border {
            painter.with_style("box.border", |p| self.draw_border(p, &xs, &ys));
        }

        for (row, (&y, &height)) in ys.iter().zip(&self.row_heights).enumerate() {
            let style = row_style(row);
            for (col, (&x, &width)) in xs.iter().zip(&self.column_widths).enumerate() {
                let area = Rect::sized(width, height);
                let cell = self.cells.get(&(col, row));
                painter.with_translation(x, y, |p| {
                    p.with_mask(area, |p| match style {
                        Some(name) => p.with_style(name, |p| {
                            p.fill_rect(area);
                            if let Some(cell) = cell {
                                cell.draw(p);
                            }
                        }),
                        None => {
                            if let Some(cell) = cell {
                                cell.draw(p);
                            }
                        }
                    })
                });
            }
        }
    }
}

impl Widget for Grid {
    fn draw(&self, painter: &mut Painter<'_>) {
        self.draw_grid(painter, |_| None);
    }

    fn size(&self) -> Size {
        self.size
    }

    fn resize(&mut self, size: Size) {
        self.size = size;
        let width = size.width.saturating_sub(self.overhead(Track::Column));
        let height = size.height.saturating_sub(self.overhead(Track::Row));

        self.column_widths = distribute_stretched(
            &self.track_items(Track::Column),
            &self.stretch(Track::Column),
            width,
        );
        self.row_heights =
            distribute_stretched(&self.track_items(Track::Row), &self.stretch(Track::Row), height);

        for (&(col, row), widget) in self.cells.iter_mut() {
            widget.resize(Size::new(self.column_widths[col], self.row_heights[row]));
        }
    }

    fn size_hint(&self) -> Size {
        Size::new(
            self.hint_along(Track::Column, |i| i.hint),
            self.hint_along(Track::Row, |i| i.hint),
        )
    }

    fn min_size_hint(&self) -> Size {
        Size::new(
            self.hint_along(Track::Column, |i| i.min),
            self.hint_along(Track::Row, |i| i.min),
        )
    }

    fn size_policy(&self) -> (SizePolicy, SizePolicy) {
        (self.policy_along(Track::Column), self.policy_along(Track::Row))
    }

    fn on_key_event(&mut self, event: &KeyEvent) {
        for widget in self.cells.values_mut() {
            widget.on_key_event(event);
        }
    }

    fn is_focused(&self) -> bool {
        self.cells.values().any(|c| c.is_focused())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::TestSurface;
    use crate::theme::Theme;
    use crate::widget::builtin::Label;

    fn render(widget: &mut dyn Widget, width: u16, height: u16) -> String {
        let mut surface = TestSurface::new(width, height);
        let theme = Theme::new();
        Painter::new(&mut surface, &theme).repaint(widget).unwrap();
        surface.to_string()
    }

    fn letters() -> Grid {
        let mut grid = Grid::new(2, 2).bordered();
        grid.set_cell(0, 0, Label::new("a"));
        grid.set_cell(1, 0, Label::new("b"));
        grid.set_cell(0, 1, Label::new("c"));
        grid.set_cell(1, 1, Label::new("d"));
        grid
    }

    #[test]
    fn test_hint_includes_dividers() {
        assert_eq!(letters().size_hint(), Size::new(5, 5));
        let mut plain = letters();
        plain.set_border(false);
        assert_eq!(plain.size_hint(), Size::new(2, 2));
    }

    #[test]
    fn test_bordered_render() {
        let mut grid = letters();
        assert_eq!(
            render(&mut grid, 5, 5),
            "┌─┬─┐\n│a│b│\n├─┼─┤\n│c│d│\n└─┴─┘\n"
        );
    }

    #[test]
    fn test_stretch_weights() {
        let mut grid = Grid::new(3, 1).bordered();
        grid.set_column_stretch(0, 1);
        grid.set_column_stretch(1, 2);
        grid.set_column_stretch(2, 1);

        grid.resize(Size::new(26, 3));
        assert_eq!(grid.column_widths(), &[6, 11, 5]);
        grid.resize(Size::new(24, 3));
        assert_eq!(grid.column_widths(), &[5, 10, 5]);
    }

    #[test]
    fn test_stretch_excludes_unweighted() {
        let mut grid = Grid::new(2, 1);
        grid.set_cell(0, 0, Label::new("ab"));
        grid.set_cell(1, 0, Label::new("cd"));
        grid.set_column_stretch(1, 1);
        grid.resize(Size::new(10, 1));
        assert_eq!(grid.column_widths(), &[2, 8]);
    }

    #[test]
    fn test_out_of_range_cell_ignored() {
        let mut grid = Grid::new(1, 1);
        grid.set_cell(1, 0, Label::new("x"));
        grid.set_cell(0, 3, Label::new("x"));
        assert!(grid.cell(0, 0).is_none());
        assert_eq!(grid.size_hint(), Size::zero());
    }

    #[test]
    fn test_append_and_remove_row() {
        let mut grid = Grid::new(2, 0);
        for text in ["r0", "r1", "r2"] {
            grid.append_row(vec![Box::new(Label::new(text)) as Box<dyn Widget>]);
        }
        assert_eq!(grid.rows(), 3);

        grid.remove_row(1);
        grid.remove_row(5);
        assert_eq!(grid.rows(), 2);
        assert_eq!(render(&mut grid, 3, 2), "r0 \nr2 \n");
    }
}
