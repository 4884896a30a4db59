//! Horizontal and vertical box containers

use tracing::warn;

use crate::event::KeyEvent;
use crate::geometry::{Rect, Size};
use crate::layout::{distribute, Direction, LayoutItem, SizePolicy};
use crate::painter::{BorderType, Painter};
use crate::widget::Widget;

/// Lays children out in a row or a column
///
/// Space along the box's direction is split with [`distribute`]; every child
/// gets the full cross extent. A border takes one cell on each edge and may
/// carry a title on its top edge.
pub struct LinearBox {
    direction: Direction,
    children: Vec<Box<dyn Widget>>,
    border: BorderType,
    title: Option<String>,
    policy: Option<(SizePolicy, SizePolicy)>,
    size: Size,
}

impl LinearBox {
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            children: Vec::new(),
            border: BorderType::None,
            title: None,
            policy: None,
            size: Size::zero(),
        }
    }

    /// Box laying children out left to right
    pub fn horizontal() -> Self {
        Self::new(Direction::Horizontal)
    }

    /// Box laying children out top to bottom
    pub fn vertical() -> Self {
        Self::new(Direction::Vertical)
    }

    /// Builder form of [`append`](Self::append)
    pub fn with(mut self, child: impl Widget + 'static) -> Self {
        self.append(child);
        self
    }

    /// Builder form of [`set_border`](Self::set_border)
    pub fn bordered(mut self) -> Self {
        self.set_border(true);
        self
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn child(&self, index: usize) -> Option<&dyn Widget> {
        self.children.get(index).map(|c| c.as_ref())
    }

    pub fn append(&mut self, child: impl Widget + 'static) {
        self.children.push(Box::new(child));
    }

    pub fn prepend(&mut self, child: impl Widget + 'static) {
        self.children.insert(0, Box::new(child));
    }

    /// Insert before `index`; an index past the end is ignored
    pub fn insert(&mut self, index: usize, child: impl Widget + 'static) {
        if index > self.children.len() {
            warn!(index, len = self.children.len(), "box insert out of range");
            return;
        }
        self.children.insert(index, Box::new(child));
    }

    /// Remove and return the child at `index`
    pub fn remove(&mut self, index: usize) -> Option<Box<dyn Widget>> {
        if index >= self.children.len() {
            warn!(index, len = self.children.len(), "box remove out of range");
            return None;
        }
        Some(self.children.remove(index))
    }

    /// Draw a single-line border
    pub fn set_border(&mut self, enabled: bool) {
        self.border = if enabled {
            BorderType::Single
        } else {
            BorderType::None
        };
    }

    pub fn set_border_type(&mut self, border: BorderType) {
        self.border = border;
    }

    /// Title drawn on the top border; needs a border to show
    pub fn set_title<S: Into<String>>(&mut self, title: Option<S>) {
        self.title = title.map(Into::into);
    }

    /// Override the policy derived from the children
    pub fn set_size_policy(&mut self, horizontal: SizePolicy, vertical: SizePolicy) {
        self.policy = Some((horizontal, vertical));
    }

    fn border_overhead(&self) -> u16 {
        if self.border.has_border() {
            2
        } else {
            0
        }
    }

    fn combine(&self, hint: impl Fn(&dyn Widget) -> Size) -> Size {
        let (along, across) = self.children.iter().fold((0u16, 0u16), |(along, across), c| {
            let h = hint(c.as_ref());
            (
                along.saturating_add(self.direction.main(h)),
                across.max(self.direction.cross(h)),
            )
        });
        let pad = self.border_overhead();
        self.direction.size(along, across).grow(pad, pad)
    }

    fn policy_along(&self, direction: Direction) -> SizePolicy {
        let expanding = self
            .children
            .iter()
            .any(|c| direction.pick(c.size_policy()) == SizePolicy::Expanding);
        if expanding {
            SizePolicy::Expanding
        } else {
            SizePolicy::Preferred
        }
    }

    fn is_any_child_focused(&self) -> bool {
        self.children.iter().any(|c| c.is_focused())
    }
}

impl Widget for LinearBox {
    fn draw(&self, painter: &mut Painter<'_>) {
        let size = self.size;
        let focused = self.is_any_child_focused();
        let (style, border_style) = if focused {
            ("box.focused", "box.focused.border")
        } else {
            ("box", "box.border")
        };

        painter.with_style(style, |p| {
            p.fill_rect(Rect::sized(size.width, size.height));

            let inset = if self.border.has_border() {
                p.with_style(border_style, |p| {
                    p.draw_rect(Rect::sized(size.width, size.height), self.border);
                    if let Some(title) = &self.title {
                        let room = size.width.saturating_sub(2);
                        p.with_mask(Rect::new(1, 0, room, 1), |p| p.draw_text(1, 0, title));
                    }
                });
                1
            } else {
                0
            };

            p.translate(inset, inset);
            let mut pos = 0i32;
            for child in &self.children {
                let child_size = child.size();
                let at = self.direction.offset(pos);
                p.translate(at.x, at.y);
                p.with_mask(Rect::sized(child_size.width, child_size.height), |p| {
                    child.draw(p)
                });
                p.restore();
                pos += self.direction.main(child_size) as i32;
            }
            p.restore();
        });
    }

    fn size(&self) -> Size {
        self.size
    }

    fn resize(&mut self, size: Size) {
        self.size = size;
        let pad = self.border_overhead();
        let inner = size.shrink(pad, pad);
        let direction = self.direction;

        let items: Vec<LayoutItem> = self
            .children
            .iter()
            .map(|c| {
                LayoutItem::new(
                    direction.main(c.min_size_hint()),
                    direction.main(c.size_hint()),
                    direction.pick(c.size_policy()),
                )
            })
            .collect();
        let extents = distribute(&items, direction.main(inner));

        for (child, extent) in self.children.iter_mut().zip(extents) {
            child.resize(direction.size(extent, direction.cross(inner)));
        }
    }

    fn size_hint(&self) -> Size {
        self.combine(|c| c.size_hint())
    }

    fn min_size_hint(&self) -> Size {
        self.combine(|c| c.min_size_hint())
    }

    fn size_policy(&self) -> (SizePolicy, SizePolicy) {
        self.policy.unwrap_or_else(|| {
            (
                self.policy_along(Direction::Horizontal),
                self.policy_along(Direction::Vertical),
            )
        })
    }

    fn on_key_event(&mut self, event: &KeyEvent) {
        for child in &mut self.children {
            child.on_key_event(event);
        }
    }

    fn is_focused(&self) -> bool {
        self.is_any_child_focused()
    }
}
