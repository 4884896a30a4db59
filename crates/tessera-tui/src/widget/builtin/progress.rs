//! Progress bar

use crate::geometry::Size;
use crate::layout::SizePolicy;
use crate::painter::Painter;
use crate::widget::{Widget, WidgetBase};

/// Horizontal bar drawn as `[====    ]`
#[derive(Debug, Clone, Default)]
pub struct Progress {
    base: WidgetBase,
    current: u32,
    max: u32,
}

impl Progress {
    /// Create a bar out of `max`
    pub fn new(max: u32) -> Self {
        Self {
            base: WidgetBase::with_policy(SizePolicy::Expanding, SizePolicy::Maximum),
            current: 0,
            max,
        }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    /// Set progress, clamped to `max`
    pub fn set_current(&mut self, current: u32) {
        self.current = current.min(self.max);
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn set_max(&mut self, max: u32) {
        self.max = max;
        self.current = self.current.min(max);
    }

    /// Filled cells out of `inner` available
    fn filled(&self, inner: u16) -> u16 {
        if self.max == 0 {
            return 0;
        }
        (inner as u64 * self.current as u64 / self.max as u64) as u16
    }
}

impl Widget for Progress {
    fn draw(&self, painter: &mut Painter<'_>) {
        let width = self.base.size.width;
        if width < 2 {
            return;
        }
        let inner = width - 2;
        let filled = self.filled(inner) as i32;

        painter.draw_rune(0, 0, '[');
        painter.with_style("progress.fill", |p| {
            for x in 0..filled {
                p.draw_rune(x + 1, 0, '=');
            }
        });
        painter.with_style("progress.empty", |p| {
            for x in filled..inner as i32 {
                p.draw_rune(x + 1, 0, ' ');
            }
        });
        painter.draw_rune(width as i32 - 1, 0, ']');
    }

    fn size(&self) -> Size {
        self.base.size
    }

    fn resize(&mut self, size: Size) {
        self.base.size = size;
    }

    fn size_hint(&self) -> Size {
        Size::new(10, 1)
    }

    fn min_size_hint(&self) -> Size {
        Size::new(2, 1)
    }

    fn size_policy(&self) -> (SizePolicy, SizePolicy) {
        self.base.policy
    }
}
