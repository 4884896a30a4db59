//! Resolved text attributes for a cell

use crossterm::style::Attribute;
use std::ops::{BitOr, BitOrAssign};

/// Attribute set carried by a painted cell
///
/// Unlike [`Style`](super::Style), a modifier has no "inherit" state: it is
/// what a cell ends up with once the style stack has been resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Modifier(u8);

impl Modifier {
    /// No modifiers
    pub const NONE: Self = Self(0);
    /// Bold text
    pub const BOLD: Self = Self(1 << 0);
    /// Underlined text
    pub const UNDERLINED: Self = Self(1 << 1);
    /// Reversed (swap fg/bg)
    pub const REVERSED: Self = Self(1 << 2);

    /// Create an empty modifier set
    pub const fn empty() -> Self {
        Self::NONE
    }

    /// Check if no modifiers are set
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Check if a modifier is set
    pub const fn contains(&self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Create union of modifiers
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Remove modifiers
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Set or clear a modifier
    pub fn set(&mut self, other: Self, on: bool) {
        if on {
            self.0 |= other.0;
        } else {
            self.0 &= !other.0;
        }
    }

    /// Get crossterm attributes for this modifier
    pub fn attributes(&self) -> Vec<Attribute> {
        let mut attrs = Vec::new();
        if self.contains(Self::BOLD) {
            attrs.push(Attribute::Bold);
        }
        if self.contains(Self::UNDERLINED) {
            attrs.push(Attribute::Underlined);
        }
        if self.contains(Self::REVERSED) {
            attrs.push(Attribute::Reverse);
        }
        attrs
    }
}

impl BitOr for Modifier {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl BitOrAssign for Modifier {
    fn bitor_assign(&mut self, rhs: Self) {
        self.set(rhs, true);
    }
}
