//! Key events delivered to widgets

pub use crossterm::event::KeyModifiers;
use crossterm::event::{KeyCode, KeyEventKind};

use crate::geometry::Point;

/// Enumerated key code
///
/// Printable input arrives as [`Key::Rune`] with the character in
/// [`KeyEvent::rune`]. Control chords keep the letter and set
/// [`KeyModifiers::CONTROL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Rune,
    Enter,
    Tab,
    BackTab,
    Backspace,
    Delete,
    Insert,
    Esc,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
    F(u8),
    Unknown,
}

/// A key press: key code, literal rune (if any) and modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub key: Key,
    pub rune: Option<char>,
    pub modifiers: KeyModifiers,
}

impl KeyEvent {
    /// A non-rune key without modifiers
    pub const fn new(key: Key) -> Self {
        Self {
            key,
            rune: None,
            modifiers: KeyModifiers::NONE,
        }
    }

    /// A printable character
    pub const fn rune(ch: char) -> Self {
        Self {
            key: Key::Rune,
            rune: Some(ch),
            modifiers: KeyModifiers::NONE,
        }
    }

    /// Control chord, e.g. `KeyEvent::ctrl('a')` for Ctrl-A
    pub const fn ctrl(ch: char) -> Self {
        Self {
            key: Key::Rune,
            rune: Some(ch),
            modifiers: KeyModifiers::CONTROL,
        }
    }

    /// Add modifiers
    pub fn with_modifiers(mut self, modifiers: KeyModifiers) -> Self {
        self.modifiers |= modifiers;
        self
    }

    /// The character to insert, if this is plain (or shifted) text input
    pub fn text(&self) -> Option<char> {
        match (self.key, self.rune) {
            (Key::Rune, Some(c))
                if !self.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Some(c)
            }
            _ => None,
        }
    }

    /// Check for a Ctrl chord on the given letter
    pub fn is_ctrl(&self, ch: char) -> bool {
        self.key == Key::Rune
            && self.modifiers.contains(KeyModifiers::CONTROL)
            && self.rune.map(|c| c.eq_ignore_ascii_case(&ch)) == Some(true)
    }

    /// Tab without Shift (forward focus)
    pub fn is_tab(&self) -> bool {
        self.key == Key::Tab && !self.modifiers.contains(KeyModifiers::SHIFT)
    }

    /// BackTab or Shift+Tab (backward focus)
    pub fn is_backtab(&self) -> bool {
        match self.key {
            Key::BackTab => true,
            Key::Tab => self.modifiers.contains(KeyModifiers::SHIFT),
            _ => false,
        }
    }

    /// Ctrl-C or Ctrl-Q
    pub fn is_quit(&self) -> bool {
        self.is_ctrl('c') || self.is_ctrl('q')
    }
}

impl From<Key> for KeyEvent {
    fn from(key: Key) -> Self {
        Self::new(key)
    }
}

impl From<char> for KeyEvent {
    fn from(ch: char) -> Self {
        Self::rune(ch)
    }
}

impl From<crossterm::event::KeyEvent> for KeyEvent {
    fn from(event: crossterm::event::KeyEvent) -> Self {
        let (key, rune) = match event.code {
            KeyCode::Char(c) => (Key::Rune, Some(c)),
            KeyCode::Enter => (Key::Enter, None),
            KeyCode::Tab => (Key::Tab, None),
            KeyCode::BackTab => (Key::BackTab, None),
            KeyCode::Backspace => (Key::Backspace, None),
            KeyCode::Delete => (Key::Delete, None),
            KeyCode::Insert => (Key::Insert, None),
            KeyCode::Esc => (Key::Esc, None),
            KeyCode::Left => (Key::Left, None),
            KeyCode::Right => (Key::Right, None),
            KeyCode::Up => (Key::Up, None),
            KeyCode::Down => (Key::Down, None),
            KeyCode::Home => (Key::Home, None),
            KeyCode::End => (Key::End, None),
            KeyCode::PageUp => (Key::PageUp, None),
            KeyCode::PageDown => (Key::PageDown, None),
            KeyCode::F(n) => (Key::F(n), None),
            _ => (Key::Unknown, None),
        };
        Self {
            key,
            rune,
            modifiers: event.modifiers,
        }
    }
}

/// Input event as seen by an application loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Key press
    Key(KeyEvent),
    /// Terminal resize
    Resize { width: u16, height: u16 },
    /// Bracketed paste
    Paste(String),
    /// Mouse activity, position only
    Mouse(Point),
    /// Anything else (focus changes, key releases)
    Other,
}

impl Event {
    /// Get the key event if this is a key press
    pub fn as_key(&self) -> Option<&KeyEvent> {
        match self {
            Event::Key(key) => Some(key),
            _ => None,
        }
    }
}

impl From<crossterm::event::Event> for Event {
    fn from(event: crossterm::event::Event) -> Self {
        use crossterm::event::Event as CEvent;
        match event {
            CEvent::Key(key) if key.kind != KeyEventKind::Release => Event::Key(key.into()),
            CEvent::Mouse(mouse) => Event::Mouse(Point::new(mouse.column as i32, mouse.row as i32)),
            CEvent::Resize(width, height) => Event::Resize { width, height },
            CEvent::Paste(s) => Event::Paste(s),
            _ => Event::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent as CKeyEvent;

    #[test]
    fn test_from_crossterm_char() {
        let ev: KeyEvent = CKeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE).into();
        assert_eq!(ev.key, Key::Rune);
        assert_eq!(ev.rune, Some('x'));
        assert_eq!(ev.text(), Some('x'));
    }

    #[test]
    fn test_ctrl_chord() {
        let ev: KeyEvent = CKeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL).into();
        assert!(ev.is_ctrl('a'));
        assert_eq!(ev.text(), None);
        assert!(!KeyEvent::rune('a').is_ctrl('a'));
        assert!(KeyEvent::ctrl('q').is_quit());
    }

    #[test]
    fn test_shifted_text() {
        let ev = KeyEvent::rune('A').with_modifiers(KeyModifiers::SHIFT);
        assert_eq!(ev.text(), Some('A'));
    }

    #[test]
    fn test_tab_and_backtab() {
        assert!(KeyEvent::new(Key::Tab).is_tab());
        assert!(!KeyEvent::new(Key::Tab).is_backtab());

        let shift_tab = KeyEvent::new(Key::Tab).with_modifiers(KeyModifiers::SHIFT);
        assert!(shift_tab.is_backtab());
        assert!(!shift_tab.is_tab());
        assert!(KeyEvent::new(Key::BackTab).is_backtab());
    }

    #[test]
    fn test_event_from_crossterm() {
        let ev: Event = crossterm::event::Event::Resize(80, 24).into();
        assert_eq!(ev, Event::Resize { width: 80, height: 24 });

        let key: Event = crossterm::event::Event::Key(CKeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)).into();
        assert_eq!(key.as_key().map(|k| k.key), Some(Key::Enter));
    }
}
