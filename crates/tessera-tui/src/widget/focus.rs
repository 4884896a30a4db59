//! Focus traversal for interactive widgets

use std::rc::Rc;

use tracing::debug;

use super::traits::WidgetHandle;
use crate::event::KeyEvent;

/// Ordered, cyclic tab order over widget handles
///
/// A chain only answers "what comes next"; the focused widget is tracked by
/// [`FocusController`].
pub trait FocusChain {
    /// Widget after `current`, wrapping around
    fn focus_next(&self, current: Option<&WidgetHandle>) -> Option<WidgetHandle>;

    /// Widget before `current`, wrapping around
    fn focus_prev(&self, current: Option<&WidgetHandle>) -> Option<WidgetHandle>;

    /// Widget to focus when nothing is
    fn focus_default(&self) -> Option<WidgetHandle>;
}

/// Focus chain in registration order
#[derive(Default)]
pub struct SimpleFocusChain {
    widgets: Vec<WidgetHandle>,
}

impl SimpleFocusChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the chain with `widgets`, in order
    pub fn set(&mut self, widgets: Vec<WidgetHandle>) {
        self.widgets = widgets;
    }

    /// Append a widget to the end of the chain
    pub fn push(&mut self, widget: WidgetHandle) {
        self.widgets.push(widget);
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    fn position(&self, current: Option<&WidgetHandle>) -> Option<usize> {
        let current = current?;
        self.widgets.iter().position(|w| Rc::ptr_eq(w, current))
    }
}

impl FocusChain for SimpleFocusChain {
    fn focus_next(&self, current: Option<&WidgetHandle>) -> Option<WidgetHandle> {
        match self.position(current) {
            Some(idx) => Some(self.widgets[(idx + 1) % self.widgets.len()].clone()),
            None => self.focus_default(),
        }
    }

    fn focus_prev(&self, current: Option<&WidgetHandle>) -> Option<WidgetHandle> {
        match self.position(current) {
            Some(idx) => {
                let prev = if idx == 0 { self.widgets.len() - 1 } else { idx - 1 };
                Some(self.widgets[prev].clone())
            }
            None => self.focus_default(),
        }
    }

    fn focus_default(&self) -> Option<WidgetHandle> {
        self.widgets.first().cloned()
    }
}

/// Holds the focused widget and moves focus on Tab / Shift+Tab
#[derive(Default)]
pub struct FocusController {
    focused: Option<WidgetHandle>,
    chain: Option<Box<dyn FocusChain>>,
}

impl FocusController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the chain used for Tab traversal
    pub fn set_chain(&mut self, chain: impl FocusChain + 'static) {
        self.chain = Some(Box::new(chain));
    }

    /// Remove the chain; Tab becomes a no-op
    pub fn clear_chain(&mut self) {
        self.chain = None;
    }

    /// Currently focused widget
    pub fn focused(&self) -> Option<&WidgetHandle> {
        self.focused.as_ref()
    }

    /// Focus `widget`, unfocusing the previous one
    pub fn set_focus(&mut self, widget: WidgetHandle) {
        if let Some(prev) = self.focused.take() {
            prev.borrow_mut().set_focused(false);
        }
        widget.borrow_mut().set_focused(true);
        self.focused = Some(widget);
    }

    /// Focus the chain's default widget, if any
    pub fn focus_default(&mut self) {
        if let Some(widget) = self.chain.as_ref().and_then(|c| c.focus_default()) {
            self.set_focus(widget);
        }
    }

    /// Move focus forward along the chain
    pub fn focus_next(&mut self) {
        let next = match &self.chain {
            Some(chain) => chain.focus_next(self.focused.as_ref()),
            None => return,
        };
        if let Some(next) = next {
            debug!("focus moved forward");
            self.set_focus(next);
        }
    }

    /// Move focus backward along the chain
    pub fn focus_prev(&mut self) {
        let prev = match &self.chain {
            Some(chain) => chain.focus_prev(self.focused.as_ref()),
            None => return,
        };
        if let Some(prev) = prev {
            debug!("focus moved backward");
            self.set_focus(prev);
        }
    }

    /// Handle focus keys; returns whether the event moved focus
    pub fn on_key_event(&mut self, event: &KeyEvent) -> bool {
        if event.is_backtab() {
            self.focus_prev();
            true
        } else if event.is_tab() {
            self.focus_next();
            true
        } else {
            false
        }
    }
}
