//! Styling system for terminal cells

mod color;
mod modifier;
mod style;

pub use color::Color;
pub use modifier::Modifier;
pub use style::{Decoration, Style};
