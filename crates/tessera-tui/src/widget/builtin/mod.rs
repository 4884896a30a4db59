//! Built-in widgets

mod button;
mod entry;
mod grid;
mod label;
mod linear_box;
mod list;
mod padder;
mod progress;
mod scroll_area;
mod spacer;
mod stack;
mod status;
mod table;
mod text_edit;

pub use button::Button;
pub use entry::{EchoMode, Entry};
pub use grid::Grid;
pub use label::{Alignment, Label};
pub use linear_box::LinearBox;
pub use list::List;
pub use padder::Padder;
pub use progress::Progress;
pub use scroll_area::ScrollArea;
pub use spacer::Spacer;
pub use stack::Stack;
pub use status::StatusBar;
pub use table::Table;
pub use text_edit::TextEdit;
