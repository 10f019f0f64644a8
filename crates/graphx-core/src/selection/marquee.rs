//! Rubber-band selection rectangle.

use crate::render::{ElementHandle, RenderSink, HIDDEN_CLASS};
use crate::style::format_number;
use kurbo::{Point, Rect};

/// Class marking the selection rectangle element.
pub const SELECTION_BOX_CLASS: &str = "selectionBox";

/// The transient box drawn while rubber-band selecting.
///
/// Its element is created once, appended to the root and hidden between
/// gestures. It never enters the registry.
#[derive(Debug, Clone)]
pub struct SelectionBox {
    element: ElementHandle,
    anchor: Option<Point>,
    current: Point,
}

impl SelectionBox {
    /// Create the hidden box element under the sink root.
    pub fn new(sink: &mut dyn RenderSink) -> Self {
        let element = sink.create_element("rect");
        sink.add_class(element, SELECTION_BOX_CLASS);
        sink.add_class(element, HIDDEN_CLASS);
        let root = sink.root();
        sink.append_child(root, element);
        Self {
            element,
            anchor: None,
            current: Point::ZERO,
        }
    }

    pub fn element(&self) -> ElementHandle {
        self.element
    }

    /// Whether a gesture is in progress.
    pub fn is_active(&self) -> bool {
        self.anchor.is_some()
    }

    /// Current box, normalized. `None` outside a gesture.
    pub fn rect(&self) -> Option<Rect> {
        self.anchor.map(|anchor| Rect::from_points(anchor, self.current))
    }

    /// Anchor the box at `point` and show it.
    pub fn start_draw(&mut self, point: Point, sink: &mut dyn RenderSink) {
        self.anchor = Some(point);
        self.current = point;
        sink.remove_class(self.element, HIDDEN_CLASS);
        self.render(sink);
    }

    /// Move the free corner.
    pub fn draw_to(&mut self, point: Point, sink: &mut dyn RenderSink) {
        if self.anchor.is_none() {
            return;
        }
        self.current = point;
        self.render(sink);
    }

    /// Hide the box and return the final rectangle.
    pub fn end_draw(&mut self, sink: &mut dyn RenderSink) -> Option<Rect> {
        let rect = self.rect();
        self.anchor = None;
        sink.add_class(self.element, HIDDEN_CLASS);
        rect
    }

    fn render(&self, sink: &mut dyn RenderSink) {
        let Some(rect) = self.rect() else {
            return;
        };
        sink.set_attribute(self.element, "x", &format_number(rect.x0));
        sink.set_attribute(self.element, "y", &format_number(rect.y0));
        sink.set_attribute(self.element, "width", &format_number(rect.width()));
        sink.set_attribute(self.element, "height", &format_number(rect.height()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::MemorySink;

    #[test]
    fn test_created_hidden_under_root() {
        let mut sink = MemorySink::new();
        let marquee = SelectionBox::new(&mut sink);
        let el = marquee.element();
        assert!(sink.has_class(el, SELECTION_BOX_CLASS));
        assert!(sink.has_class(el, HIDDEN_CLASS));
        assert_eq!(sink.element(el).and_then(|e| e.parent), Some(sink.root()));
        assert!(!marquee.is_active());
    }

    #[test]
    fn test_draw_normalizes() {
        let mut sink = MemorySink::new();
        let mut marquee = SelectionBox::new(&mut sink);
        marquee.start_draw(Point::new(100.0, 80.0), &mut sink);
        assert!(!sink.has_class(marquee.element(), HIDDEN_CLASS));

        marquee.draw_to(Point::new(20.0, 10.0), &mut sink);
        assert_eq!(sink.attribute(marquee.element(), "x"), Some("20"));
        assert_eq!(sink.attribute(marquee.element(), "y"), Some("10"));
        assert_eq!(sink.attribute(marquee.element(), "width"), Some("80"));
        assert_eq!(sink.attribute(marquee.element(), "height"), Some("70"));

        let rect = marquee.end_draw(&mut sink);
        assert_eq!(rect, Some(Rect::new(20.0, 10.0, 100.0, 80.0)));
        assert!(sink.has_class(marquee.element(), HIDDEN_CLASS));
        assert!(!marquee.is_active());
    }

    #[test]
    fn test_end_without_start() {
        let mut sink = MemorySink::new();
        let mut marquee = SelectionBox::new(&mut sink);
        marquee.draw_to(Point::new(5.0, 5.0), &mut sink);
        assert_eq!(marquee.end_draw(&mut sink), None);
    }
}
