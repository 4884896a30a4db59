//! Input events handed to widgets

mod input;

pub use input::{Event, Key, KeyEvent, KeyModifiers};
