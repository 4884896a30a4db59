//! Core widget trait

use std::cell::RefCell;
use std::rc::Rc;

use crate::event::KeyEvent;
use crate::geometry::Size;
use crate::layout::SizePolicy;
use crate::painter::Painter;

/// Capability set every drawable node implements
///
/// A parent sizes its children with [`resize`](Widget::resize) during layout
/// and then calls [`draw`](Widget::draw) with the painter translated to the
/// child's origin and masked to its extent. After `resize(s)`, `size()` must
/// return exactly `s`.
pub trait Widget {
    /// Draw in local coordinates, `(0, 0)` being the widget's top-left cell
    fn draw(&self, painter: &mut Painter<'_>);

    /// Size assigned by the last `resize`
    fn size(&self) -> Size;

    /// Accept a size and lay out any children
    fn resize(&mut self, size: Size);

    /// Preferred size
    fn size_hint(&self) -> Size;

    /// Smallest size that renders without corruption
    fn min_size_hint(&self) -> Size {
        self.size_hint()
    }

    /// Growth behavior as `(horizontal, vertical)`
    fn size_policy(&self) -> (SizePolicy, SizePolicy) {
        (SizePolicy::Preferred, SizePolicy::Preferred)
    }

    /// Handle a key press; widgets act only while focused
    fn on_key_event(&mut self, _event: &KeyEvent) {}

    fn is_focused(&self) -> bool {
        false
    }

    fn set_focused(&mut self, _focused: bool) {}
}

/// Shared widget handle, usable both as a child and as a focus chain entry
pub type WidgetHandle = Rc<RefCell<dyn Widget>>;

/// Wrap a widget in a shared handle
pub fn shared<W: Widget>(widget: W) -> Rc<RefCell<W>> {
    Rc::new(RefCell::new(widget))
}

impl<W: Widget + ?Sized> Widget for Rc<RefCell<W>> {
    fn draw(&self, painter: &mut Painter<'_>) {
        self.borrow().draw(painter)
    }

    fn size(&self) -> Size {
        self.borrow().size()
    }

    fn resize(&mut self, size: Size) {
        self.borrow_mut().resize(size)
    }

    fn size_hint(&self) -> Size {
        self.borrow().size_hint()
    }

    fn min_size_hint(&self) -> Size {
        self.borrow().min_size_hint()
    }

    fn size_policy(&self) -> (SizePolicy, SizePolicy) {
        self.borrow().size_policy()
    }

    fn on_key_event(&mut self, event: &KeyEvent) {
        self.borrow_mut().on_key_event(event)
    }

    fn is_focused(&self) -> bool {
        self.borrow().is_focused()
    }

    fn set_focused(&mut self, focused: bool) {
        self.borrow_mut().set_focused(focused)
    }
}

impl<W: Widget + ?Sized> Widget for Box<W> {
    fn draw(&self, painter: &mut Painter<'_>) {
        (**self).draw(painter)
    }

    fn size(&self) -> Size {
        (**self).size()
    }

    fn resize(&mut self, size: Size) {
        (**self).resize(size)
    }

    fn size_hint(&self) -> Size {
        (**self).size_hint()
    }

    fn min_size_hint(&self) -> Size {
        (**self).min_size_hint()
    }

    fn size_policy(&self) -> (SizePolicy, SizePolicy) {
        (**self).size_policy()
    }

    fn on_key_event(&mut self, event: &KeyEvent) {
        (**self).on_key_event(event)
    }

    fn is_focused(&self) -> bool {
        (**self).is_focused()
    }

    fn set_focused(&mut self, focused: bool) {
        (**self).set_focused(focused)
    }
}

/// State shared by most widgets: assigned size, policy and focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WidgetBase {
    pub size: Size,
    pub policy: (SizePolicy, SizePolicy),
    pub focused: bool,
}

impl WidgetBase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Base with the given policy
    pub fn with_policy(horizontal: SizePolicy, vertical: SizePolicy) -> Self {
        Self {
            policy: (horizontal, vertical),
            ..Self::default()
        }
    }
}
