//! Push button

use crate::event::{Key, KeyEvent};
use crate::geometry::{Rect, Size};
use crate::layout::SizePolicy;
use crate::painter::Painter;
use crate::text::str_width;
use crate::widget::{Widget, WidgetBase};

/// Focusable button that fires `on_activated` on Enter
#[derive(Default)]
pub struct Button {
    base: WidgetBase,
    text: String,
    on_activated: Option<Box<dyn FnMut()>>,
}

impl Button {
    /// Create a button
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text<S: Into<String>>(&mut self, text: S) {
        self.text = text.into();
    }

    /// Set the handler run when the focused button receives Enter
    pub fn on_activated(&mut self, handler: impl FnMut() + 'static) {
        self.on_activated = Some(Box::new(handler));
    }

    pub fn set_size_policy(&mut self, horizontal: SizePolicy, vertical: SizePolicy) {
        self.base.policy = (horizontal, vertical);
    }
}

impl Widget for Button {
    fn draw(&self, painter: &mut Painter<'_>) {
        let style = if self.base.focused {
            "button.focused"
        } else {
            "button"
        };
        let size = self.base.size;
        painter.with_style(style, |p| {
            p.fill_rect(Rect::sized(size.width, size.height));
            let x = (size.width as i32 - str_width(&self.text) as i32).max(0) / 2;
            let y = (size.height as i32 - 1).max(0) / 2;
            p.draw_text(x, y, &self.text);
        });
    }

    fn size(&self) -> Size {
        self.base.size
    }

    fn resize(&mut self, size: Size) {
        self.base.size = size;
    }

    fn size_hint(&self) -> Size {
        Size::new(str_width(&self.text) as u16 + 2, 1)
    }

    fn min_size_hint(&self) -> Size {
        Size::new(1, 1)
    }

    fn size_policy(&self) -> (SizePolicy, SizePolicy) {
        self.base.policy
    }

    fn on_key_event(&mut self, event: &KeyEvent) {
        if !self.base.focused || event.key != Key::Enter {
            return;
        }
        if let Some(handler) = self.on_activated.as_mut() {
            handler();
        }
    }

    fn is_focused(&self) -> bool {
        self.base.focused
    }

    fn set_focused(&mut self, focused: bool) {
        self.base.focused = focused;
    }
}
