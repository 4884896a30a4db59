//! Text measurement, wrapping and editing

mod rune_buffer;
mod width;
mod wrap;

pub use rune_buffer::RuneBuffer;
pub use width::{rune_width, str_width, truncate};
pub use wrap::wrap;
