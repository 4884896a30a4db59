//! Terminal colors

use crossterm::style::Color as CrosstermColor;

/// Terminal color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Color {
    /// Reset to terminal default
    #[default]
    Reset,
    /// Black
    Black,
    /// Dark grey
    DarkGrey,
    /// Red
    Red,
    /// Dark red
    DarkRed,
    /// Green
    Green,
    /// Dark green
    DarkGreen,
    /// Yellow
    Yellow,
    /// Dark yellow
    DarkYellow,
    /// Blue
    Blue,
    /// Dark blue
    DarkBlue,
    /// Magenta
    Magenta,
    /// Dark magenta
    DarkMagenta,
    /// Cyan
    Cyan,
    /// Dark cyan
    DarkCyan,
    /// White
    White,
    /// Grey
    Grey,
    /// Light red
    LightRed,
    /// Light green
    LightGreen,
    /// Light yellow
    LightYellow,
    /// Light blue
    LightBlue,
    /// Light magenta
    LightMagenta,
    /// Light cyan
    LightCyan,
    /// RGB color
    Rgb(u8, u8, u8),
    /// ANSI 256-color palette index
    Indexed(u8),
}

impl Color {
    /// Create an RGB color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb(r, g, b)
    }

    /// Create an indexed color
    pub const fn indexed(index: u8) -> Self {
        Self::Indexed(index)
    }

    /// Parse a hex color string (e.g., "#ff0000" or "ff0000")
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Self::Rgb(r, g, b))
    }

    /// Parse a color name, hex string or ANSI palette index
    ///
    /// Names are case-insensitive and accept `_`, `-` or no separator
    /// (`dark_grey`, `dark-grey`, `darkgrey`).
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.starts_with('#') {
            return Self::from_hex(value);
        }
        if value.len() <= 3 {
            if let Ok(index) = value.parse::<u8>() {
                return Some(Self::Indexed(index));
            }
        }

        let name: String = value
            .chars()
            .filter(|c| *c != '_' && *c != '-' && *c != ' ')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        let color = match name.as_str() {
            "reset" | "default" => Self::Reset,
            "black" => Self::Black,
            "darkgrey" | "darkgray" => Self::DarkGrey,
            "red" => Self::Red,
            "darkred" => Self::DarkRed,
            "green" => Self::Green,
            "darkgreen" => Self::DarkGreen,
            "yellow" => Self::Yellow,
            "darkyellow" => Self::DarkYellow,
            "blue" => Self::Blue,
            "darkblue" => Self::DarkBlue,
            "magenta" => Self::Magenta,
            "darkmagenta" => Self::DarkMagenta,
            "cyan" => Self::Cyan,
            "darkcyan" => Self::DarkCyan,
            "white" => Self::White,
            "grey" | "gray" => Self::Grey,
            "lightred" => Self::LightRed,
            "lightgreen" => Self::LightGreen,
            "lightyellow" => Self::LightYellow,
            "lightblue" => Self::LightBlue,
            "lightmagenta" => Self::LightMagenta,
            "lightcyan" => Self::LightCyan,
            _ => return Self::from_hex(value),
        };
        Some(color)
    }
}

impl From<Color> for CrosstermColor {
    fn from(color: Color) -> Self {
        match color {
            Color::Reset => CrosstermColor::Reset,
            Color::Black => CrosstermColor::Black,
            Color::DarkGrey => CrosstermColor::DarkGrey,
            Color::Red => CrosstermColor::Red,
            Color::DarkRed => CrosstermColor::DarkRed,
            Color::Green => CrosstermColor::Green,
            Color::DarkGreen => CrosstermColor::DarkGreen,
            Color::Yellow => CrosstermColor::Yellow,
            Color::DarkYellow => CrosstermColor::DarkYellow,
            Color::Blue => CrosstermColor::Blue,
            Color::DarkBlue => CrosstermColor::DarkBlue,
            Color::Magenta => CrosstermColor::Magenta,
            Color::DarkMagenta => CrosstermColor::DarkMagenta,
            Color::Cyan => CrosstermColor::Cyan,
            Color::DarkCyan => CrosstermColor::DarkCyan,
            Color::White => CrosstermColor::White,
            Color::Grey => CrosstermColor::Grey,
            Color::LightRed => CrosstermColor::Red, // Crossterm doesn't have light variants
            Color::LightGreen => CrosstermColor::Green,
            Color::LightYellow => CrosstermColor::Yellow,
            Color::LightBlue => CrosstermColor::Blue,
            Color::LightMagenta => CrosstermColor::Magenta,
            Color::LightCyan => CrosstermColor::Cyan,
            Color::Rgb(r, g, b) => CrosstermColor::Rgb { r, g, b },
            Color::Indexed(i) => CrosstermColor::AnsiValue(i),
        }
    }
}
