//! Label widget for displaying text

use crate::geometry::Size;
use crate::layout::SizePolicy;
use crate::painter::Painter;
use crate::text::{str_width, wrap};
use crate::widget::{Widget, WidgetBase};

/// Horizontal text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    /// Column where a line of `line_width` starts inside `width`
    pub fn offset(&self, width: u16, line_width: usize) -> i32 {
        let slack = (width as i32 - line_width as i32).max(0);
        match self {
            Alignment::Left => 0,
            Alignment::Center => slack / 2,
            Alignment::Right => slack,
        }
    }
}

/// Static text, optionally word-wrapped at the current width
#[derive(Debug, Clone, Default)]
pub struct Label {
    base: WidgetBase,
    text: String,
    word_wrap: bool,
    alignment: Alignment,
    style_name: Option<String>,
}

impl Label {
    /// Create a label
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Enable word wrap
    pub fn wrapped(mut self) -> Self {
        self.word_wrap = true;
        self
    }

    /// Set the alignment
    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Draw with a theme style
    pub fn styled<S: Into<String>>(mut self, name: S) -> Self {
        self.style_name = Some(name.into());
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text<S: Into<String>>(&mut self, text: S) {
        self.text = text.into();
    }

    pub fn set_word_wrap(&mut self, enabled: bool) {
        self.word_wrap = enabled;
    }

    pub fn set_style_name(&mut self, name: Option<String>) {
        self.style_name = name;
    }

    pub fn set_size_policy(&mut self, horizontal: SizePolicy, vertical: SizePolicy) {
        self.base.policy = (horizontal, vertical);
    }

    fn lines(&self) -> Vec<String> {
        let width = if self.word_wrap {
            self.base.size.width as usize
        } else {
            0
        };
        wrap(&self.text, width)
    }

    fn draw_lines(&self, painter: &mut Painter<'_>) {
        let width = self.base.size.width;
        for (y, line) in self.lines().iter().enumerate() {
            let x = self.alignment.offset(width, str_width(line));
            painter.draw_text(x, y as i32, line);
        }
    }
}

impl Widget for Label {
    fn draw(&self, painter: &mut Painter<'_>) {
        match &self.style_name {
            Some(name) => painter.with_style(name, |p| self.draw_lines(p)),
            None => self.draw_lines(painter),
        }
    }

    fn size(&self) -> Size {
        self.base.size
    }

    fn resize(&mut self, size: Size) {
        self.base.size = size;
    }

    fn size_hint(&self) -> Size {
        let lines = self.lines();
        let width = lines.iter().map(|l| str_width(l)).max().unwrap_or(0);
        Size::new(width as u16, lines.len() as u16)
    }

    fn size_policy(&self) -> (SizePolicy, SizePolicy) {
        self.base.policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::TestSurface;
    use crate::theme::Theme;

    fn render(label: &mut Label, width: u16, height: u16) -> String {
        let mut surface = TestSurface::new(width, height);
        let theme = Theme::new();
        Painter::new(&mut surface, &theme).repaint(label).unwrap();
        surface.to_string()
    }

    #[test]
    fn test_label_size_hint() {
        assert_eq!(Label::new("test").size_hint(), Size::new(4, 1));
        assert_eq!(Label::new("ab\nlonger").size_hint(), Size::new(6, 2));
        assert_eq!(Label::new("").size_hint(), Size::new(0, 1));
    }

    #[test]
    fn test_label_wrap_uses_width() {
        let mut label = Label::new("hello world").wrapped();
        assert_eq!(label.size_hint(), Size::new(11, 1));
        label.resize(Size::new(6, 5));
        assert_eq!(label.size_hint(), Size::new(6, 2));
        assert_eq!(render(&mut label, 6, 2), "hello \nworld \n");
    }

    #[test]
    fn test_label_alignment() {
        let mut label = Label::new("ab").alignment(Alignment::Right);
        assert_eq!(render(&mut label, 5, 1), "   ab\n");
        let mut label = Label::new("ab").alignment(Alignment::Center);
        assert_eq!(render(&mut label, 6, 1), "  ab  \n");
    }

    #[test]
    fn test_label_clipped_to_surface() {
        let mut label = Label::new("abcdef");
        assert_eq!(render(&mut label, 3, 1), "abc\n");
    }
}
