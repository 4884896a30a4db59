//! Single-line text entry

use tracing::trace;

use crate::event::{Key, KeyEvent};
use crate::geometry::{Rect, Size};
use crate::layout::SizePolicy;
use crate::painter::Painter;
use crate::text::{rune_width, RuneBuffer};
use crate::widget::{Widget, WidgetBase};

/// How an entry displays its text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EchoMode {
    /// Show the text as typed
    #[default]
    Normal,
    /// Show `*` for every rune
    Password,
}

/// Single-line editable text field
///
/// The entry scrolls horizontally so the cursor stays visible: the
/// offset (in columns) keeps the cursor column in
/// `offset..=offset + width - 1`, grows only when the cursor would leave
/// the right edge, and shrinks only when the text after the cursor no
/// longer fills the field.
pub struct Entry {
    base: WidgetBase,
    text: RuneBuffer,
    offset: usize,
    echo: EchoMode,
    on_submit: Option<Box<dyn FnMut(&str)>>,
    on_changed: Option<Box<dyn FnMut(&str)>>,
}

impl Default for Entry {
    fn default() -> Self {
        Self::new()
    }
}

impl Entry {
    /// Create an empty entry
    pub fn new() -> Self {
        Self {
            base: WidgetBase::with_policy(SizePolicy::Expanding, SizePolicy::Maximum),
            text: RuneBuffer::new(),
            offset: 0,
            echo: EchoMode::Normal,
            on_submit: None,
            on_changed: None,
        }
    }

    /// Current text
    pub fn text(&self) -> String {
        self.text.text()
    }

    /// Replace the text; the cursor moves to the end
    pub fn set_text(&mut self, text: &str) {
        self.text.set_text(text);
        self.scroll_to_cursor();
    }

    pub fn echo_mode(&self) -> EchoMode {
        self.echo
    }

    pub fn set_echo_mode(&mut self, echo: EchoMode) {
        self.echo = echo;
        self.scroll_to_cursor();
    }

    /// Cursor index in runes
    pub fn cursor(&self) -> usize {
        self.text.cursor()
    }

    /// First visible column
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Set the handler run on Enter
    pub fn on_submit(&mut self, handler: impl FnMut(&str) + 'static) {
        self.on_submit = Some(Box::new(handler));
    }

    /// Set the handler run after every edit
    pub fn on_changed(&mut self, handler: impl FnMut(&str) + 'static) {
        self.on_changed = Some(Box::new(handler));
    }

    pub fn set_size_policy(&mut self, horizontal: SizePolicy, vertical: SizePolicy) {
        self.base.policy = (horizontal, vertical);
    }

    fn display_width(&self, c: char) -> usize {
        match self.echo {
            EchoMode::Normal => rune_width(c),
            EchoMode::Password => 1,
        }
    }

    fn display_text(&self) -> String {
        match self.echo {
            EchoMode::Normal => self.text.text(),
            EchoMode::Password => "*".repeat(self.text.len()),
        }
    }

    /// Column of the cursor in the unscrolled text
    fn cursor_column(&self) -> usize {
        self.text.runes()[..self.text.cursor()]
            .iter()
            .map(|&c| self.display_width(c))
            .sum()
    }

    fn text_width(&self) -> usize {
        self.text.runes().iter().map(|&c| self.display_width(c)).sum()
    }

    fn scroll_to_cursor(&mut self) {
        let width = self.base.size.width as usize;
        if width == 0 {
            self.offset = 0;
            return;
        }
        let cursor = self.cursor_column();
        let lowest = (cursor + 1).saturating_sub(width);
        let trailing = (self.text_width() + 1).saturating_sub(width);
        self.offset = self.offset.min(cursor).min(trailing).max(lowest);
    }

    fn changed(&mut self) {
        if let Some(handler) = self.on_changed.as_mut() {
            handler(&self.text.text());
        }
    }
}

impl Widget for Entry {
    fn draw(&self, painter: &mut Painter<'_>) {
        let size = self.base.size;
        let style = if self.base.focused {
            "entry.focused"
        } else {
            "entry"
        };
        painter.with_mask(Rect::sized(size.width, size.height), |p| {
            p.with_style(style, |p| {
                p.fill_rect(Rect::sized(size.width, 1));
                p.draw_text(-(self.offset as i32), 0, &self.display_text());
            });
            if self.base.focused {
                p.draw_cursor(self.cursor_column() as i32 - self.offset as i32, 0);
            }
        });
    }

    fn size(&self) -> Size {
        self.base.size
    }

    fn resize(&mut self, size: Size) {
        self.base.size = size;
        self.scroll_to_cursor();
    }

    fn size_hint(&self) -> Size {
        Size::new(10, 1)
    }

    fn min_size_hint(&self) -> Size {
        Size::new(1, 1)
    }

    fn size_policy(&self) -> (SizePolicy, SizePolicy) {
        self.base.policy
    }

    fn on_key_event(&mut self, event: &KeyEvent) {
        if !self.base.focused {
            return;
        }

        let mut edited = true;
        if let Some(c) = event.text() {
            self.text.insert_rune(c);
        } else if event.key == Key::Enter {
            if let Some(handler) = self.on_submit.as_mut() {
                handler(&self.text.text());
            }
            edited = false;
        } else if event.key == Key::Backspace {
            self.text.backspace();
        } else if event.key == Key::Delete || event.is_ctrl('d') {
            self.text.delete();
        } else if event.is_ctrl('k') {
            self.text.kill();
        } else {
            edited = false;
            if event.key == Key::Left || event.is_ctrl('b') {
                self.text.move_backward();
            } else if event.key == Key::Right || event.is_ctrl('f') {
                self.text.move_forward();
            } else if event.key == Key::Home || event.is_ctrl('a') {
                self.text.move_to_line_start();
            } else if event.key == Key::End || event.is_ctrl('e') {
                self.text.move_to_line_end();
            } else {
                return;
            }
        }

        self.scroll_to_cursor();
        trace!(cursor = self.text.cursor(), offset = self.offset, "entry updated");
        if edited {
            self.changed();
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
    use crate::geometry::Point;
    use crate::surface::TestSurface;
    use crate::theme::Theme;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn focused_entry(width: u16) -> Entry {
        let mut entry = Entry::new();
        entry.set_focused(true);
        entry.resize(Size::new(width, 1));
        entry
    }

    fn type_str(entry: &mut Entry, s: &str) {
        for c in s.chars() {
            entry.on_key_event(&KeyEvent::rune(c));
        }
    }

    #[test]
    fn test_entry_editing_keys() {
        let mut entry = focused_entry(20);
        type_str(&mut entry, "hello");
        entry.on_key_event(&KeyEvent::new(Key::Backspace));
        entry.on_key_event(&KeyEvent::ctrl('a'));
        entry.on_key_event(&KeyEvent::ctrl('d'));
        assert_eq!(entry.text(), "ell");
        entry.on_key_event(&KeyEvent::ctrl('f'));
        entry.on_key_event(&KeyEvent::ctrl('k'));
        assert_eq!(entry.text(), "e");
        entry.on_key_event(&KeyEvent::new(Key::Home));
        type_str(&mut entry, "x");
        entry.on_key_event(&KeyEvent::ctrl('e'));
        assert_eq!(entry.cursor(), 2);
        assert_eq!(entry.text(), "xe");
    }

    #[test]
    fn test_entry_ignores_keys_unfocused() {
        let mut entry = Entry::new();
        type_str(&mut entry, "abc");
        assert_eq!(entry.text(), "");
    }

    #[test]
    fn test_entry_callbacks() {
        let submitted = Rc::new(RefCell::new(Vec::new()));
        let changes = Rc::new(RefCell::new(0));
        let mut entry = focused_entry(10);
        let s = submitted.clone();
        entry.on_submit(move |text| s.borrow_mut().push(text.to_string()));
        let c = changes.clone();
        entry.on_changed(move |_| *c.borrow_mut() += 1);

        type_str(&mut entry, "go");
        entry.on_key_event(&KeyEvent::new(Key::Left));
        entry.on_key_event(&KeyEvent::new(Key::Enter));

        assert_eq!(*submitted.borrow(), vec!["go".to_string()]);
        assert_eq!(*changes.borrow(), 2);
    }

    #[test]
    fn test_entry_offset_keeps_cursor_visible() {
        let mut entry = focused_entry(5);
        entry.set_text("0123456789");
        entry.on_key_event(&KeyEvent::new(Key::Home));
        assert_eq!(entry.offset(), 0);

        let mut last = 0;
        for _ in 0..10 {
            entry.on_key_event(&KeyEvent::new(Key::Right));
            let cx = entry.cursor_column();
            let offset = entry.offset();
            assert!(offset <= cx && cx <= offset + 4, "cursor {cx} offset {offset}");
            assert!(offset >= last);
            if cx <= 4 {
                assert_eq!(offset, 0);
            }
            last = offset;
        }
        assert_eq!(entry.offset(), 6);

        // Moving left only scrolls once the cursor reaches the left edge
        for _ in 0..4 {
            entry.on_key_event(&KeyEvent::new(Key::Left));
        }
        assert_eq!(entry.offset(), 6);
        entry.on_key_event(&KeyEvent::new(Key::Left));
        assert_eq!(entry.offset(), 5);
    }

    #[test]
    fn test_entry_offset_shrinks_when_text_removed() {
        let mut entry = focused_entry(5);
        entry.set_text("0123456789");
        assert_eq!(entry.offset(), 6);
        entry.on_key_event(&KeyEvent::new(Key::Backspace));
        entry.on_key_event(&KeyEvent::new(Key::Backspace));
        assert_eq!(entry.offset(), 4);
    }

    #[test]
    fn test_entry_draw_scrolled_with_cursor() {
        let mut entry = focused_entry(5);
        entry.set_text("abcdefgh");
        let mut surface = TestSurface::new(5, 1);
        let theme = Theme::new();
        Painter::new(&mut surface, &theme).repaint(&mut entry).unwrap();
        assert_eq!(surface.to_string(), "efgh \n");
        assert_eq!(surface.cursor(), Some(Point::new(4, 0)));
    }

    #[test]
    fn test_entry_password() {
        let mut entry = focused_entry(8);
        entry.set_echo_mode(EchoMode::Password);
        entry.set_text("秘密");
        let mut surface = TestSurface::new(8, 1);
        let theme = Theme::new();
        Painter::new(&mut surface, &theme).repaint(&mut entry).unwrap();
        assert_eq!(surface.to_string(), "**      \n");
        assert_eq!(surface.cursor(), Some(Point::new(2, 0)));
        assert_eq!(entry.text(), "秘密");
    }
}
