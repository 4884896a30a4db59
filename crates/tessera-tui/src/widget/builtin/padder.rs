//! Padding around a single child

use crate::event::KeyEvent;
use crate::geometry::{Rect, Size};
use crate::layout::SizePolicy;
use crate::painter::Painter;
use crate::widget::Widget;

/// Wraps a child with empty columns left and right and rows above and below
pub struct Padder {
    child: Box<dyn Widget>,
    padding_x: u16,
    padding_y: u16,
    size: Size,
}

impl Padder {
    /// Pad `child` by `x` columns on each side and `y` rows top and bottom
    pub fn new(x: u16, y: u16, child: impl Widget + 'static) -> Self {
        Self {
            child: Box::new(child),
            padding_x: x,
            padding_y: y,
            size: Size::zero(),
        }
    }

    pub fn child(&self) -> &dyn Widget {
        self.child.as_ref()
    }

    fn overhead(&self) -> (u16, u16) {
        (self.padding_x.saturating_mul(2), self.padding_y.saturating_mul(2))
    }
}

impl Widget for Padder {
    fn draw(&self, painter: &mut Painter<'_>) {
        let child_size = self.child.size();
        painter.with_translation(self.padding_x as i32, self.padding_y as i32, |p| {
            p.with_mask(Rect::sized(child_size.width, child_size.height), |p| {
                self.child.draw(p)
            })
        });
    }

    fn size(&self) -> Size {
        self.size
    }

    fn resize(&mut self, size: Size) {
        self.size = size;
        let (dw, dh) = self.overhead();
        self.child.resize(size.shrink(dw, dh));
    }

    fn size_hint(&self) -> Size {
        let (dw, dh) = self.overhead();
        self.child.size_hint().grow(dw, dh)
    }

    fn min_size_hint(&self) -> Size {
        let (dw, dh) = self.overhead();
        self.child.min_size_hint().grow(dw, dh)
    }

    fn size_policy(&self) -> (SizePolicy, SizePolicy) {
        self.child.size_policy()
    }

    fn on_key_event(&mut self, event: &KeyEvent) {
        self.child.on_key_event(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::TestSurface;
    use crate::theme::Theme;
    use crate::widget::builtin::Label;

    #[test]
    fn test_padder() {
        let mut padder = Padder::new(2, 1, Label::new("hi"));
        assert_eq!(padder.size_hint(), Size::new(6, 3));

        let mut surface = TestSurface::new(6, 3);
        let theme = Theme::new();
        Painter::new(&mut surface, &theme).repaint(&mut padder).unwrap();
        assert_eq!(surface.to_string(), "      \n  hi  \n      \n");
        assert_eq!(padder.child().size(), Size::new(2, 1));
    }
}
