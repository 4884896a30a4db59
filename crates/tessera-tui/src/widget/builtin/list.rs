//! Selectable list of items

use tracing::warn;

use crate::event::{Key, KeyEvent};
use crate::geometry::{Rect, Size};
use crate::layout::SizePolicy;
use crate::painter::Painter;
use crate::text::str_width;
use crate::widget::{Widget, WidgetBase};

/// Vertical list with an optional selected item
///
/// Up/Down move the selection while focused and Enter activates the
/// selected item. The list scrolls so the selection stays visible.
pub struct List {
    base: WidgetBase,
    items: Vec<String>,
    selected: Option<usize>,
    /// Index of the first visible item
    pos: usize,
    on_item_activated: Option<Box<dyn FnMut(usize, &str)>>,
    on_selection_changed: Option<Box<dyn FnMut(Option<usize>)>>,
}

impl Default for List {
    fn default() -> Self {
        Self::new()
    }
}

impl List {
    pub fn new() -> Self {
        Self {
            base: WidgetBase::new(),
            items: Vec::new(),
            selected: None,
            pos: 0,
            on_item_activated: None,
            on_selection_changed: None,
        }
    }

    /// Create a list from items
    pub fn with_items<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list = Self::new();
        list.add_items(items);
        list
    }

    pub fn add_item<S: Into<String>>(&mut self, item: S) {
        self.items.push(item.into());
    }

    pub fn add_items<I, S>(&mut self, items: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.items.extend(items.into_iter().map(Into::into));
    }

    /// Remove the item at `index`
    ///
    /// Out-of-range indices are ignored. Removing the selected item clears
    /// the selection; removing one above it shifts the selection up.
    pub fn remove_item(&mut self, index: usize) {
        if index >= self.items.len() {
            warn!(index, len = self.items.len(), "list remove_item out of range");
            return;
        }
        self.items.remove(index);

        match self.selected {
            Some(sel) if sel == index => self.set_selected(None),
            Some(sel) if sel > index => self.set_selected(Some(sel - 1)),
            _ => {}
        }
        self.pos = self.pos.min(self.items.len().saturating_sub(1));
    }

    /// Remove every item and clear the selection
    pub fn remove_items(&mut self) {
        self.items.clear();
        self.pos = 0;
        self.set_selected(None);
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&str> {
        self.selected.and_then(|i| self.items.get(i)).map(String::as_str)
    }

    /// Select an item (`None` clears); out-of-range indices clear the selection
    pub fn set_selected(&mut self, selected: Option<usize>) {
        let selected = selected.filter(|&i| i < self.items.len());
        if selected == self.selected {
            return;
        }
        self.selected = selected;
        self.scroll_to_selection();
        if let Some(handler) = self.on_selection_changed.as_mut() {
            handler(selected);
        }
    }

    /// Index of the first visible item
    pub fn scroll_position(&self) -> usize {
        self.pos
    }

    pub fn on_item_activated(&mut self, handler: impl FnMut(usize, &str) + 'static) {
        self.on_item_activated = Some(Box::new(handler));
    }

    pub fn on_selection_changed(&mut self, handler: impl FnMut(Option<usize>) + 'static) {
        self.on_selection_changed = Some(Box::new(handler));
    }

    pub fn set_size_policy(&mut self, horizontal: SizePolicy, vertical: SizePolicy) {
        self.base.policy = (horizontal, vertical);
    }

    fn scroll_to_selection(&mut self) {
        let Some(sel) = self.selected else {
            return;
        };
        let height = self.base.size.height as usize;
        if sel < self.pos {
            self.pos = sel;
        } else if height > 0 && sel >= self.pos + height {
            self.pos = sel + 1 - height;
        }
    }

    fn move_up(&mut self) {
        match self.selected {
            Some(sel) => self.set_selected(Some(sel.saturating_sub(1))),
            None => self.set_selected(Some(0)),
        }
    }

    fn move_down(&mut self) {
        match self.selected {
            Some(sel) if sel + 1 < self.items.len() => self.set_selected(Some(sel + 1)),
            Some(_) => {}
            None => self.set_selected(Some(0)),
        }
    }
}

impl Widget for List {
    fn draw(&self, painter: &mut Painter<'_>) {
        let size = self.base.size;
        let visible = self.items.iter().enumerate().skip(self.pos).take(size.height as usize);
        for (row, (index, item)) in visible.enumerate() {
            let style = if Some(index) == self.selected {
                "list.item.selected"
            } else {
                "list.item"
            };
            painter.with_style(style, |p| {
                p.fill_rect(Rect::new(0, row as i32, size.width, 1));
                p.draw_text(0, row as i32, item);
            });
        }
    }

    fn size(&self) -> Size {
        self.base.size
    }

    fn resize(&mut self, size: Size) {
        self.base.size = size;
        self.scroll_to_selection();
    }

    fn size_hint(&self) -> Size {
        let width = self.items.iter().map(|i| str_width(i)).max().unwrap_or(0);
        Size::new(width as u16, self.items.len() as u16)
    }

    fn size_policy(&self) -> (SizePolicy, SizePolicy) {
        self.base.policy
    }

    fn on_key_event(&mut self, event: &KeyEvent) {
        if !self.base.focused {
            return;
        }
        match event.key {
            Key::Up => self.move_up(),
            Key::Down => self.move_down(),
            Key::Enter => {
                if let Some(sel) = self.selected {
                    if let Some(handler) = self.on_item_activated.as_mut() {
                        handler(sel, &self.items[sel]);
                    }
                }
            }
            _ => {}
        }
    }

    fn is_focused(&self) -> bool {
        self.base.focused
    }

    fn set_focused(&mut self, focused: bool) {
        self.base.focused = focused;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{Color, Style};
    use crate::surface::TestSurface;
    use crate::theme::Theme;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn list(n: usize) -> List {
        List::with_items((0..n).map(|i| format!("item{i}")))
    }

    #[test]
    fn test_remove_selected_item() {
        let mut l = list(4);
        l.set_selected(Some(2));
        l.remove_item(2);
        assert_eq!(l.selected(), None);
        assert_eq!(l.items(), &["item0", "item1", "item3"]);
    }

    #[test]
    fn test_remove_before_selection_shifts() {
        let mut l = list(4);
        l.set_selected(Some(2));
        l.remove_item(0);
        assert_eq!(l.selected(), Some(1));
        assert_eq!(l.selected_item(), Some("item2"));
    }

    #[test]
    fn test_remove_after_selection_keeps() {
        let mut l = list(4);
        l.set_selected(Some(1));
        l.remove_item(3);
        assert_eq!(l.selected(), Some(1));
    }

    #[test]
    fn test_remove_out_of_range_ignored() {
        let mut l = list(2);
        l.set_selected(Some(1));
        l.remove_item(5);
        assert_eq!(l.len(), 2);
        assert_eq!(l.selected(), Some(1));
    }

    #[test]
    fn test_navigation_clamps() {
        let mut l = list(3);
        l.set_focused(true);
        l.on_key_event(&KeyEvent::new(Key::Down));
        assert_eq!(l.selected(), Some(0));
        l.on_key_event(&KeyEvent::new(Key::Up));
        assert_eq!(l.selected(), Some(0));
        for _ in 0..5 {
            l.on_key_event(&KeyEvent::new(Key::Down));
        }
        assert_eq!(l.selected(), Some(2));
    }

    #[test]
    fn test_callbacks() {
        let changes = Rc::new(RefCell::new(Vec::new()));
        let activated = Rc::new(RefCell::new(None));
        let mut l = list(3);
        l.set_focused(true);
        let c = changes.clone();
        l.on_selection_changed(move |sel| c.borrow_mut().push(sel));
        let a = activated.clone();
        l.on_item_activated(move |i, item| *a.borrow_mut() = Some((i, item.to_string())));

        l.on_key_event(&KeyEvent::new(Key::Down));
        l.on_key_event(&KeyEvent::new(Key::Down));
        l.on_key_event(&KeyEvent::new(Key::Enter));
        l.remove_item(1);

        assert_eq!(*changes.borrow(), vec![Some(0), Some(1), None]);
        assert_eq!(*activated.borrow(), Some((1, "item1".to_string())));
    }

    #[test]
    fn test_scrolls_to_selection() {
        let mut l = list(6);
        l.resize(Size::new(5, 2));
        l.set_selected(Some(4));
        assert_eq!(l.scroll_position(), 3);

        let mut surface = TestSurface::new(5, 2);
        let theme = Theme::new().with_style("list.item.selected", Style::new().fg(Color::Red));
        Painter::new(&mut surface, &theme).repaint(&mut l).unwrap();
        assert_eq!(surface.to_string(), "item3\nitem4\n");
        assert_eq!(surface.cell(0, 1).unwrap().fg, Color::Red);
        assert_eq!(surface.cell(0, 0).unwrap().fg, Color::Reset);
    }
}
