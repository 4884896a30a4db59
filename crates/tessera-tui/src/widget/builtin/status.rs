//! Status bar widget

use crate::geometry::{Rect, Size};
use crate::layout::SizePolicy;
use crate::painter::Painter;
use crate::text::{str_width, truncate};
use crate::widget::{Widget, WidgetBase};

/// One-row bar with a message on the left and permanent text on the right
#[derive(Debug, Clone, Default)]
pub struct StatusBar {
    base: WidgetBase,
    text: String,
    permanent: String,
}

impl StatusBar {
    /// Create a status bar showing `text`
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self {
            base: WidgetBase::with_policy(SizePolicy::Expanding, SizePolicy::Maximum),
            text: text.into(),
            permanent: String::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text<S: Into<String>>(&mut self, text: S) {
        self.text = text.into();
    }

    /// Set the right-aligned text
    pub fn set_permanent_text<S: Into<String>>(&mut self, text: S) {
        self.permanent = text.into();
    }
}

impl Widget for StatusBar {
    fn draw(&self, painter: &mut Painter<'_>) {
        let width = self.base.size.width;
        painter.with_style("statusbar", |p| {
            p.fill_rect(Rect::sized(width, 1));

            let right_width = str_width(&self.permanent);
            let right_x = width as usize - right_width.min(width as usize);
            // The message gives way to the permanent text, keeping one column between them
            let room = right_x.saturating_sub(if right_width > 0 { 1 } else { 0 });
            p.draw_text(0, 0, &truncate(&self.text, room));
            p.draw_text(right_x as i32, 0, &self.permanent);
        });
    }

    fn size(&self) -> Size {
        self.base.size
    }

    fn resize(&mut self, size: Size) {
        self.base.size = size;
    }

    fn size_hint(&self) -> Size {
        let gap = usize::from(!self.permanent.is_empty());
        Size::new((str_width(&self.text) + gap + str_width(&self.permanent)) as u16, 1)
    }

    fn min_size_hint(&self) -> Size {
        Size::new(str_width(&self.permanent) as u16, 1)
    }

    fn size_policy(&self) -> (SizePolicy, SizePolicy) {
        self.base.policy
    }
}
