//! Empty widget that absorbs space

use crate::geometry::Size;
use crate::layout::SizePolicy;
use crate::painter::Painter;
use crate::widget::Widget;

/// Takes up leftover space and draws nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct Spacer {
    size: Size,
}

impl Spacer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Widget for Spacer {
    fn draw(&self, _painter: &mut Painter<'_>) {}

    fn size(&self) -> Size {
        self.size
    }

    fn resize(&mut self, size: Size) {
        self.size = size;
    }

    fn size_hint(&self) -> Size {
        Size::zero()
    }

    fn size_policy(&self) -> (SizePolicy, SizePolicy) {
        (SizePolicy::Expanding, SizePolicy::Expanding)
    }
}
