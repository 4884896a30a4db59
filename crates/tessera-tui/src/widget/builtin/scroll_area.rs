//! Scrollable viewport over a larger child

use crate::event::KeyEvent;
use crate::geometry::{Point, Rect, Size};
use crate::layout::SizePolicy;
use crate::painter::Painter;
use crate::widget::Widget;

/// Shows part of a child that may be larger than the viewport
///
/// The child is sized to its size hint, but never smaller than the viewport.
/// With autoscroll on, every resize scrolls to the bottom, which suits logs
/// and chat transcripts.
pub struct ScrollArea {
    child: Box<dyn Widget>,
    offset: Point,
    autoscroll: bool,
    size: Size,
}

impl ScrollArea {
    pub fn new(child: impl Widget + 'static) -> Self {
        Self {
            child: Box::new(child),
            offset: Point::origin(),
            autoscroll: false,
            size: Size::zero(),
        }
    }

    pub fn child(&self) -> &dyn Widget {
        self.child.as_ref()
    }

    pub fn child_mut(&mut self) -> &mut dyn Widget {
        self.child.as_mut()
    }

    /// Top-left corner of the visible part, in child coordinates
    pub fn offset(&self) -> Point {
        self.offset
    }

    pub fn set_autoscroll(&mut self, enabled: bool) {
        self.autoscroll = enabled;
        if enabled {
            self.scroll_to_bottom();
        }
    }

    pub fn autoscroll(&self) -> bool {
        self.autoscroll
    }

    fn max_offset(&self) -> Point {
        let child = self.child.size();
        Point::new(
            child.width.saturating_sub(self.size.width) as i32,
            child.height.saturating_sub(self.size.height) as i32,
        )
    }

    /// Scroll by a delta, staying within the child
    pub fn scroll(&mut self, dx: i32, dy: i32) {
        let max = self.max_offset();
        self.offset = Point::new(
            (self.offset.x + dx).clamp(0, max.x),
            (self.offset.y + dy).clamp(0, max.y),
        );
    }

    pub fn scroll_to_top(&mut self) {
        self.offset.y = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset.y = self.max_offset().y;
    }
}

impl Widget for ScrollArea {
    fn draw(&self, painter: &mut Painter<'_>) {
        painter.with_mask(Rect::sized(self.size.width, self.size.height), |p| {
            p.with_translation(-self.offset.x, -self.offset.y, |p| self.child.draw(p))
        });
    }

    fn size(&self) -> Size {
        self.size
    }

    fn resize(&mut self, size: Size) {
        self.size = size;
        let child_size = self.child.size_hint().max(size);
        self.child.resize(child_size);

        if self.autoscroll {
            self.scroll_to_bottom();
        } else {
            self.scroll(0, 0);
        }
    }

    fn size_hint(&self) -> Size {
        Size::zero()
    }

    fn size_policy(&self) -> (SizePolicy, SizePolicy) {
        (SizePolicy::Expanding, SizePolicy::Expanding)
    }

    fn on_key_event(&mut self, event: &KeyEvent) {
        self.child.on_key_event(event);
    }

    fn is_focused(&self) -> bool {
        self.child.is_focused()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::TestSurface;
    use crate::theme::Theme;
    use crate::widget::builtin::Label;

    fn render(area: &mut ScrollArea, width: u16, height: u16) -> String {
        let mut surface = TestSurface::new(width, height);
        let theme = Theme::new();
        Painter::new(&mut surface, &theme).repaint(area).unwrap();
        surface.to_string()
    }

    #[test]
    fn test_child_at_least_viewport() {
        let mut area = ScrollArea::new(Label::new("ab"));
        area.resize(Size::new(5, 3));
        assert_eq!(area.child().size(), Size::new(5, 3));
        area.scroll(2, 2);
        assert_eq!(area.offset(), Point::origin());
    }

    #[test]
    fn test_scroll_clamped_and_clipped() {
        let mut area = ScrollArea::new(Label::new("l0\nl1\nl2\nl3"));
        assert_eq!(render(&mut area, 2, 2), "l0\nl1\n");

        area.scroll(0, 1);
        assert_eq!(render(&mut area, 2, 2), "l1\nl2\n");

        area.scroll(0, 10);
        assert_eq!(area.offset(), Point::new(0, 2));
        area.scroll(0, -10);
        assert_eq!(area.offset(), Point::origin());
    }

    #[test]
    fn test_autoscroll_follows_bottom() {
        let mut area = ScrollArea::new(Label::new("l0\nl1\nl2"));
        area.set_autoscroll(true);
        assert_eq!(render(&mut area, 2, 1), "l2\n");

        area.scroll_to_top();
        assert_eq!(area.offset(), Point::origin());
        area.scroll_to_bottom();
        assert_eq!(area.offset(), Point::new(0, 2));
    }
}
