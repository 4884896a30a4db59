//! Buffer system for terminal rendering

mod cell;
mod buffer;

pub use cell::Cell;
pub use buffer::Buffer;
