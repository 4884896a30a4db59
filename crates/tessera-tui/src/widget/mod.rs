//! Widget contract, focus handling and the built-in widgets

pub mod builtin;
mod focus;
mod traits;

pub use focus::{FocusChain, FocusController, SimpleFocusChain};
pub use traits::{shared, Widget, WidgetBase, WidgetHandle};
