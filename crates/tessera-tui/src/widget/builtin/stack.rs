//! Overlapping children sharing one area

use tracing::warn;

use crate::event::KeyEvent;
use crate::geometry::{Rect, Size};
use crate::layout::SizePolicy;
use crate::painter::Painter;
use crate::widget::Widget;

/// Children drawn on top of each other, later ones on top
pub struct Stack {
    children: Vec<Box<dyn Widget>>,
    size: Size,
}

impl Default for Stack {
    fn default() -> Self {
        Self::new()
    }
}

impl Stack {
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            size: Size::zero(),
        }
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Add a child on top
    pub fn push(&mut self, child: impl Widget + 'static) {
        self.children.push(Box::new(child));
    }

    pub fn remove(&mut self, index: usize) -> Option<Box<dyn Widget>> {
        if index >= self.children.len() {
            warn!(index, len = self.children.len(), "stack remove out of range");
            return None;
        }
        Some(self.children.remove(index))
    }

    /// Move the child at `index` above all others
    pub fn raise_to_top(&mut self, index: usize) {
        if index >= self.children.len() {
            warn!(index, len = self.children.len(), "stack raise out of range");
            return;
        }
        let child = self.children.remove(index);
        self.children.push(child);
    }
}

impl Widget for Stack {
    fn draw(&self, painter: &mut Painter<'_>) {
        let area = Rect::sized(self.size.width, self.size.height);
        painter.with_mask(area, |p| {
            for child in &self.children {
                child.draw(p);
            }
        });
    }

    fn size(&self) -> Size {
        self.size
    }

    fn resize(&mut self, size: Size) {
        self.size = size;
        for child in &mut self.children {
            child.resize(size);
        }
    }

    fn size_hint(&self) -> Size {
        self.children
            .iter()
            .fold(Size::zero(), |acc, c| acc.max(c.size_hint()))
    }

    fn min_size_hint(&self) -> Size {
        self.children
            .iter()
            .fold(Size::zero(), |acc, c| acc.max(c.min_size_hint()))
    }

    fn size_policy(&self) -> (SizePolicy, SizePolicy) {
        self.children
            .last()
            .map_or((SizePolicy::Preferred, SizePolicy::Preferred), |c| c.size_policy())
    }

    fn on_key_event(&mut self, event: &KeyEvent) {
        for child in &mut self.children {
            child.on_key_event(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::TestSurface;
    use crate::theme::Theme;
    use crate::widget::builtin::Label;

    fn render(stack: &mut Stack) -> String {
        let mut surface = TestSurface::new(4, 1);
        let theme = Theme::new();
        Painter::new(&mut surface, &theme).repaint(stack).unwrap();
        surface.to_string()
    }

    #[test]
    fn test_later_children_on_top() {
        let mut stack = Stack::new();
        stack.push(Label::new("abcd"));
        stack.push(Label::new("xy"));
        assert_eq!(render(&mut stack), "xycd\n");
        assert_eq!(stack.size_hint(), Size::new(4, 1));
    }

    #[test]
    fn test_raise_to_top() {
        let mut stack = Stack::new();
        stack.push(Label::new("xy"));
        stack.push(Label::new("abcd"));
        assert_eq!(render(&mut stack), "abcd\n");

        stack.raise_to_top(0);
        stack.raise_to_top(8);
        assert_eq!(render(&mut stack), "xycd\n");
    }

    #[test]
    fn test_children_share_size() {
        let mut stack = Stack::new();
        stack.push(Label::new("a"));
        stack.push(Label::new("bb"));
        stack.resize(Size::new(6, 2));
        assert!(stack.remove(3).is_none());
        let removed = stack.remove(0).unwrap();
        assert_eq!(removed.size(), Size::new(6, 2));
        assert_eq!(stack.len(), 1);
    }
}
