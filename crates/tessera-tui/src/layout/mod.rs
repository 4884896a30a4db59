//! Layout engine distributing space by size policy

mod direction;
mod distribute;
mod policy;

pub use direction::Direction;
pub use distribute::{distribute, distribute_stretched, LayoutItem};
pub use policy::SizePolicy;
