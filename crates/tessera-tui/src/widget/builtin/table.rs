//! Table with row selection, built on [`Grid`]

use tracing::debug;

use super::{Grid, Label};
use crate::event::{Key, KeyEvent};
use crate::geometry::Size;
use crate::layout::SizePolicy;
use crate::painter::Painter;
use crate::widget::Widget;

/// Rows of cells with an optional selected row
///
/// Layout, borders and stretch factors come from the wrapped grid. Up/Down
/// move the selection while focused; the selected row is drawn with
/// `table.cell.selected`, the others with `table.cell`.
pub struct Table {
    grid: Grid,
    selected: Option<usize>,
    focused: bool,
    on_selection_changed: Option<Box<dyn FnMut(Option<usize>)>>,
}

impl Table {
    pub fn new(cols: usize) -> Self {
        Self {
            grid: Grid::new(cols, 0),
            selected: None,
            focused: false,
            on_selection_changed: None,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Stretch factor for a column of the wrapped grid
    pub fn set_column_stretch(&mut self, col: usize, weight: u16) {
        self.grid.set_column_stretch(col, weight);
    }

    pub fn set_border(&mut self, enabled: bool) {
        self.grid.set_border(enabled);
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn append_row<I>(&mut self, widgets: I)
    where
        I: IntoIterator<Item = Box<dyn Widget>>,
    {
        self.grid.append_row(widgets);
    }

    /// Append a row of labels
    pub fn append_text_row<I, S>(&mut self, texts: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.grid.append_row(
            texts
                .into_iter()
                .map(|t| Box::new(Label::new(t)) as Box<dyn Widget>),
        );
    }

    /// Remove a row, adjusting the selection the way a list does
    pub fn remove_row(&mut self, row: usize) {
        let in_range = row < self.grid.rows();
        self.grid.remove_row(row);
        if !in_range {
            return;
        }
        match self.selected {
            Some(sel) if sel == row => self.set_selected(None),
            Some(sel) if sel > row => self.set_selected(Some(sel - 1)),
            _ => {}
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Select a row (`None` clears); rows past the end clear the selection
    pub fn set_selected(&mut self, selected: Option<usize>) {
        let selected = selected.filter(|&r| r < self.grid.rows());
        if selected == self.selected {
            return;
        }
        debug!(?selected, "table selection changed");
        self.selected = selected;
        if let Some(handler) = self.on_selection_changed.as_mut() {
            handler(selected);
        }
    }

    pub fn on_selection_changed(&mut self, handler: impl FnMut(Option<usize>) + 'static) {
        self.on_selection_changed = Some(Box::new(handler));
    }
}

impl Widget for Table {
    fn draw(&self, painter: &mut Painter<'_>) {
        let selected = self.selected;
        self.grid.draw_grid(painter, |row| {
            if Some(row) == selected {
                Some("table.cell.selected")
            } else {
                Some("table.cell")
            }
        });
    }

    fn size(&self) -> Size {
        self.grid.size()
    }

    fn resize(&mut self, size: Size) {
        self.grid.resize(size);
    }

    fn size_hint(&self) -> Size {
        self.grid.size_hint()
    }

    fn min_size_hint(&self) -> Size {
        self.grid.min_size_hint()
    }

    fn size_policy(&self) -> (SizePolicy, SizePolicy) {
        self.grid.size_policy()
    }

    fn on_key_event(&mut self, event: &KeyEvent) {
        if !self.focused {
            return;
        }
        match (event.key, self.selected) {
            (Key::Up, Some(sel)) => self.set_selected(Some(sel.saturating_sub(1))),
            (Key::Down, Some(sel)) if sel + 1 < self.grid.rows() => {
                self.set_selected(Some(sel + 1))
            }
            (Key::Up | Key::Down, None) => self.set_selected(Some(0)),
            _ => {}
        }
    }

    fn is_focused(&self) -> bool {
        self.focused
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }
}
