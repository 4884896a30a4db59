//! Style overlays with inheritable fields

use super::{Color, Modifier};

/// Tri-state decoration flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Decoration {
    /// Take the value from the style underneath
    #[default]
    Inherit,
    /// Explicitly enabled
    On,
    /// Explicitly disabled
    Off,
}

impl Decoration {
    /// Whether this field was explicitly set
    pub const fn is_set(&self) -> bool {
        !matches!(self, Decoration::Inherit)
    }

    /// Resolve to a flag, treating inherit as off
    pub const fn is_on(&self) -> bool {
        matches!(self, Decoration::On)
    }

    /// `On` for true, `Off` for false
    pub const fn from_bool(on: bool) -> Self {
        if on {
            Decoration::On
        } else {
            Decoration::Off
        }
    }

    /// Take `over` if it was set, else keep `self`
    pub const fn merge(self, over: Decoration) -> Self {
        if over.is_set() {
            over
        } else {
            self
        }
    }
}

/// A style overlay: each field is either explicitly set or inherited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Style {
    /// Foreground color
    pub fg: Option<Color>,
    /// Background color
    pub bg: Option<Color>,
    /// Bold decoration
    pub bold: Decoration,
    /// Underline decoration
    pub underline: Decoration,
    /// Reverse-video decoration
    pub reverse: Decoration,
}

impl Style {
    /// Create a style where every field inherits
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            bold: Decoration::Inherit,
            underline: Decoration::Inherit,
            reverse: Decoration::Inherit,
        }
    }

    /// Set foreground color
    pub const fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    /// Set background color
    pub const fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    /// Turn bold on
    pub const fn bold(mut self) -> Self {
        self.bold = Decoration::On;
        self
    }

    /// Turn underline on
    pub const fn underlined(mut self) -> Self {
        self.underline = Decoration::On;
        self
    }

    /// Turn reverse video on
    pub const fn reversed(mut self) -> Self {
        self.reverse = Decoration::On;
        self
    }

    /// Explicitly set bold on or off
    pub const fn with_bold(mut self, on: bool) -> Self {
        self.bold = Decoration::from_bool(on);
        self
    }

    /// Explicitly set underline on or off
    pub const fn with_underline(mut self, on: bool) -> Self {
        self.underline = Decoration::from_bool(on);
        self
    }

    /// Explicitly set reverse video on or off
    pub const fn with_reverse(mut self, on: bool) -> Self {
        self.reverse = Decoration::from_bool(on);
        self
    }

    /// Check whether every field inherits
    pub fn is_inherit(&self) -> bool {
        *self == Self::new()
    }

    /// Lay `over` on top of this style
    ///
    /// A field takes the override's value when the override set it and keeps
    /// the current value otherwise.
    pub fn merge(self, over: Style) -> Self {
        Self {
            fg: over.fg.or(self.fg),
            bg: over.bg.or(self.bg),
            bold: self.bold.merge(over.bold),
            underline: self.underline.merge(over.underline),
            reverse: self.reverse.merge(over.reverse),
        }
    }

    /// Resolved foreground (inherit means terminal default)
    pub fn resolved_fg(&self) -> Color {
        self.fg.unwrap_or(Color::Reset)
    }

    /// Resolved background (inherit means terminal default)
    pub fn resolved_bg(&self) -> Color {
        self.bg.unwrap_or(Color::Reset)
    }

    /// Resolved attribute set
    pub fn modifier(&self) -> Modifier {
        let mut modifier = Modifier::empty();
        modifier.set(Modifier::BOLD, self.bold.is_on());
        modifier.set(Modifier::UNDERLINED, self.underline.is_on());
        modifier.set(Modifier::REVERSED, self.reverse.is_on());
        modifier
    }
}
