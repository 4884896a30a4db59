//! tessera-tui: a retained-mode terminal UI toolkit built on crossterm
//!
//! This crate provides:
//! - Geometry primitives (`Rect`, `Point`, `Size`)
//! - A size-policy layout engine shared by boxes and grids
//! - A `Painter` with offsets, clip masks and themed style overlays
//! - `RuneBuffer`, a width-aware text buffer with greedy word wrap
//! - The `Widget` contract, a Tab focus chain and the built-in widgets
//! - Surfaces: a crossterm `Terminal` with diff rendering and an in-memory
//!   `TestSurface` for snapshot tests
//!
//! Drawing is single-threaded and synchronous. A frame is produced by
//! [`Painter::repaint`], which sizes the root widget to the surface, lets it
//! draw and flushes the result.

pub mod buffer;
pub mod error;
pub mod event;
pub mod geometry;
pub mod layout;
pub mod painter;
pub mod style;
pub mod surface;
pub mod terminal;
pub mod text;
pub mod theme;
pub mod widget;

// Re-export commonly used types
pub use buffer::{Buffer, Cell};
pub use error::{Error, Result};
pub use event::{Event, Key, KeyEvent};
pub use geometry::{Point, Rect, Size};
pub use layout::{distribute, Direction, LayoutItem, SizePolicy};
pub use painter::{BorderType, Painter};
pub use style::{Color, Decoration, Modifier, Style};
pub use surface::{Surface, TestSurface};
pub use terminal::{RawModeGuard, Terminal};
pub use text::{str_width, wrap, RuneBuffer};
pub use theme::Theme;
pub use widget::{shared, FocusChain, FocusController, SimpleFocusChain, Widget, WidgetHandle};
