//! A single terminal cell with content and resolved style

use crate::style::{Color, Modifier, Style};

/// A single terminal cell: one rune plus its resolved colors and attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    /// The rune displayed in this cell
    pub symbol: char,
    /// Foreground color
    pub fg: Color,
    /// Background color
    pub bg: Color,
    /// Resolved attributes (bold, underline, reverse)
    pub modifier: Modifier,
}

impl Cell {
    /// Create a new empty cell (space character, default style)
    pub const fn empty() -> Self {
        Self::new(' ')
    }

    /// Create a cell holding a single rune with default colors
    pub const fn new(symbol: char) -> Self {
        Self {
            symbol,
            fg: Color::Reset,
            bg: Color::Reset,
            modifier: Modifier::NONE,
        }
    }

    /// Set foreground color
    pub fn fg(mut self, color: Color) -> Self {
        self.fg = color;
        self
    }

    /// Set background color
    pub fn bg(mut self, color: Color) -> Self {
        self.bg = color;
        self
    }

    /// Set modifier
    pub fn modifier(mut self, modifier: Modifier) -> Self {
        self.modifier = modifier;
        self
    }

    /// Resolve a style overlay onto this cell
    ///
    /// Inherited fields fall back to the terminal default.
    pub fn style(mut self, style: Style) -> Self {
        self.set_style(style);
        self
    }

    /// Resolve a style overlay in place
    pub fn set_style(&mut self, style: Style) {
        self.fg = style.resolved_fg();
        self.bg = style.resolved_bg();
        self.modifier = style.modifier();
    }

    /// Reset the cell to empty
    pub fn reset(&mut self) {
        *self = Self::empty();
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<char> for Cell {
    fn from(c: char) -> Self {
        Self::new(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_empty() {
        let cell = Cell::empty();
        assert_eq!(cell.symbol, ' ');
        assert_eq!(cell.fg, Color::Reset);
        assert_eq!(cell.bg, Color::Reset);
        assert!(cell.modifier.is_empty());
    }

    #[test]
    fn test_cell_builder() {
        let cell = Cell::new('A')
            .fg(Color::Red)
            .bg(Color::Blue)
            .modifier(Modifier::BOLD);

        assert_eq!(cell.symbol, 'A');
        assert_eq!(cell.fg, Color::Red);
        assert_eq!(cell.bg, Color::Blue);
        assert!(cell.modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_cell_reset() {
        let mut cell = Cell::new('X').fg(Color::Red);
        cell.reset();
        assert_eq!(cell, Cell::empty());
    }

    #[test]
    fn test_cell_style_resolves_inherit() {
        let style = Style::new().fg(Color::Green).bold();
        let cell = Cell::new('Y').bg(Color::Red).style(style);

        assert_eq!(cell.fg, Color::Green);
        assert_eq!(cell.bg, Color::Reset);
        assert!(cell.modifier.contains(Modifier::BOLD));
    }
}
