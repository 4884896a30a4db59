//! Multi-line text editor
//!
//! Keys handled while focused: text input, Enter (newline), Backspace,
//! Delete / Ctrl-D, arrows, Home / Ctrl-A, End / Ctrl-E and Ctrl-K.

use crate::event::{Key, KeyEvent};
use crate::geometry::{Rect, Size};
use crate::layout::SizePolicy;
use crate::painter::Painter;
use crate::text::{str_width, RuneBuffer};
use crate::widget::{Widget, WidgetBase};

/// Editable multi-line text with optional word wrap
pub struct TextEdit {
    base: WidgetBase,
    text: RuneBuffer,
    /// First visible display line
    scroll: usize,
    on_text_changed: Option<Box<dyn FnMut(&str)>>,
}

impl Default for TextEdit {
    fn default() -> Self {
        Self::new()
    }
}

impl TextEdit {
    pub fn new() -> Self {
        Self {
            base: WidgetBase::with_policy(SizePolicy::Expanding, SizePolicy::Expanding),
            text: RuneBuffer::new(),
            scroll: 0,
            on_text_changed: None,
        }
    }

    pub fn text(&self) -> String {
        self.text.text()
    }

    /// Replace the text; the cursor moves to the end
    pub fn set_text(&mut self, text: &str) {
        self.text.set_text(text);
        self.follow_cursor();
    }

    /// Insert text at the cursor, e.g. from a paste
    pub fn insert_text(&mut self, text: &str) {
        self.text.insert_str(text);
        self.follow_cursor();
        self.changed();
    }

    pub fn set_word_wrap(&mut self, enabled: bool) {
        self.text.set_word_wrap(enabled);
        self.follow_cursor();
    }

    pub fn word_wrap(&self) -> bool {
        self.text.word_wrap()
    }

    /// Text buffer being edited
    pub fn buffer(&self) -> &RuneBuffer {
        &self.text
    }

    /// First visible display line
    pub fn scroll(&self) -> usize {
        self.scroll
    }

    /// Set the handler run after every edit
    pub fn on_text_changed(&mut self, handler: impl FnMut(&str) + 'static) {
        self.on_text_changed = Some(Box::new(handler));
    }

    pub fn set_size_policy(&mut self, horizontal: SizePolicy, vertical: SizePolicy) {
        self.base.policy = (horizontal, vertical);
    }

    /// Keep the cursor row inside the visible rows
    fn follow_cursor(&mut self) {
        let height = self.base.size.height as usize;
        let row = self.text.cursor_pos().y as usize;
        if row < self.scroll {
            self.scroll = row;
        } else if height > 0 && row >= self.scroll + height {
            self.scroll = row + 1 - height;
        }
    }

    fn changed(&mut self) {
        if let Some(handler) = self.on_text_changed.as_mut() {
            handler(&self.text.text());
        }
    }
}

impl Widget for TextEdit {
    fn draw(&self, painter: &mut Painter<'_>) {
        let size = self.base.size;
        let style = if self.base.focused {
            "textedit.focused"
        } else {
            "textedit"
        };
        let scroll = self.scroll as i32;

        painter.with_mask(Rect::sized(size.width, size.height), |p| {
            p.with_style(style, |p| {
                p.fill_rect(Rect::sized(size.width, size.height));
                for (row, line) in self.text.split_by_line().iter().enumerate() {
                    p.draw_text(0, row as i32 - scroll, line);
                }
            });
            if self.base.focused {
                // Trailing spaces may carry the cursor past the last column
                let pos = self.text.cursor_pos();
                let x = pos.x.min(size.width.saturating_sub(1) as i32);
                p.draw_cursor(x, pos.y - scroll);
            }
        });
    }

    fn size(&self) -> Size {
        self.base.size
    }

    fn resize(&mut self, size: Size) {
        self.base.size = size;
        self.text.set_max_width(size.width as usize);
        self.follow_cursor();
    }

    fn size_hint(&self) -> Size {
        let lines = self.text.split_by_line();
        let width = lines.iter().map(|l| str_width(l)).max().unwrap_or(0);
        // One extra column for the cursor after the last rune
        Size::new(width as u16 + 1, lines.len() as u16)
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
            self.text.insert_rune('\n');
        } else if event.key == Key::Backspace {
            self.text.backspace();
        } else if event.key == Key::Delete || event.is_ctrl('d') {
            self.text.delete();
        } else if event.is_ctrl('k') {
            self.text.kill();
        } else {
            edited = false;
            match event.key {
                Key::Left => self.text.move_backward(),
                Key::Right => self.text.move_forward(),
                Key::Up => self.text.move_up(),
                Key::Down => self.text.move_down(),
                Key::Home => self.text.move_to_line_start(),
                Key::End => self.text.move_to_line_end(),
                _ if event.is_ctrl('a') => self.text.move_to_line_start(),
                _ if event.is_ctrl('e') => self.text.move_to_line_end(),
                _ => return,
            }
        }

        self.follow_cursor();
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
