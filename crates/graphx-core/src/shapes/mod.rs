//! Shape definitions for the canvas.
//!
//! Each kind keeps its own geometry struct implementing [`ShapeGeometry`];
//! [`Shape`] wraps one of them with the state every kind shares: identity,
//! the sink element, style, selection and the transient drag offset.

mod ellipse;
mod line;
mod polygon;
mod polyline;
mod rectangle;

pub use ellipse::Ellipse;
pub use line::Line;
pub use polygon::Polygon;
pub use polyline::Polyline;
pub use rectangle::Rectangle;

use crate::error::{CanvasError, CanvasResult};
use crate::render::{ElementHandle, RenderSink};
use crate::style::{self, format_number, ShapeStyle, StyleChange};
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for shapes.
pub type ShapeId = Uuid;

/// Attribute carrying the shape id on its element.
pub const ID_ATTRIBUTE: &str = "graphx-id";
/// Class marking a selected shape.
pub const SELECTED_CLASS: &str = "selectedObject";
/// Attribute holding the visual drag transform.
const DRAG_ATTRIBUTE: &str = "style";

/// Available shape kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    #[default]
    Line,
    Rectangle,
    Ellipse,
    Polyline,
    Polygon,
}

impl ShapeKind {
    /// All kinds, in toolbar order.
    pub const ALL: [ShapeKind; 5] = [
        ShapeKind::Line,
        ShapeKind::Rectangle,
        ShapeKind::Ellipse,
        ShapeKind::Polyline,
        ShapeKind::Polygon,
    ];

    /// Whether the outline encloses an area that can be filled.
    pub fn is_closed(self) -> bool {
        !matches!(self, ShapeKind::Line | ShapeKind::Polyline)
    }

    /// Whether the geometry is a vertex sequence drawn over several clicks.
    pub fn is_multi_point(self) -> bool {
        matches!(self, ShapeKind::Polyline | ShapeKind::Polygon)
    }

    /// SVG element name.
    pub fn element_name(self) -> &'static str {
        match self {
            ShapeKind::Line => "line",
            ShapeKind::Rectangle => "rect",
            ShapeKind::Ellipse => "ellipse",
            ShapeKind::Polyline => "polyline",
            ShapeKind::Polygon => "polygon",
        }
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Line => "line",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Ellipse => "ellipse",
            ShapeKind::Polyline => "polyline",
            ShapeKind::Polygon => "polygon",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Geometry operations every shape kind implements.
pub trait ShapeGeometry {
    /// The kind this geometry belongs to.
    fn kind(&self) -> ShapeKind;

    /// Bounding box of the committed geometry.
    fn bounds(&self) -> Rect;

    /// Check if a point hits this shape. `filled` shapes hit on their interior.
    fn hit_test(&self, point: Point, tolerance: f64, filled: bool) -> bool;

    /// Record the initial anchor point.
    fn start_draw(&mut self, point: Point);

    /// Extend the geometry to `point` (overwrite for spans, append for vertices).
    fn draw_to(&mut self, point: Point);

    /// Follow the pointer without committing a vertex.
    fn preview_to(&mut self, point: Point) {
        self.draw_to(point);
    }

    /// Drop any uncommitted preview state.
    fn finish_draw(&mut self) {}

    /// Shift every stored coordinate by `delta`.
    fn translate(&mut self, delta: Vec2);

    /// Positional attributes for the sink.
    fn attributes(&self) -> Vec<(&'static str, String)>;
}

/// Per-kind geometry payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Geometry {
    Line(Line),
    Rectangle(Rectangle),
    Ellipse(Ellipse),
    Polyline(Polyline),
    Polygon(Polygon),
}

impl Geometry {
    /// Empty geometry for a kind.
    pub fn new(kind: ShapeKind) -> Self {
        match kind {
            ShapeKind::Line => Geometry::Line(Line::default()),
            ShapeKind::Rectangle => Geometry::Rectangle(Rectangle::default()),
            ShapeKind::Ellipse => Geometry::Ellipse(Ellipse::default()),
            ShapeKind::Polyline => Geometry::Polyline(Polyline::default()),
            ShapeKind::Polygon => Geometry::Polygon(Polygon::default()),
        }
    }

    pub fn as_dyn(&self) -> &dyn ShapeGeometry {
        match self {
            Geometry::Line(g) => g,
            Geometry::Rectangle(g) => g,
            Geometry::Ellipse(g) => g,
            Geometry::Polyline(g) => g,
            Geometry::Polygon(g) => g,
        }
    }

    pub fn as_dyn_mut(&mut self) -> &mut dyn ShapeGeometry {
        match self {
            Geometry::Line(g) => g,
            Geometry::Rectangle(g) => g,
            Geometry::Ellipse(g) => g,
            Geometry::Polyline(g) => g,
            Geometry::Polygon(g) => g,
        }
    }

    /// Start/end corners for two-point kinds.
    pub fn span(&self) -> Option<(Point, Point)> {
        match self {
            Geometry::Line(g) => Some((g.start, g.end)),
            Geometry::Rectangle(g) => Some((g.start, g.end)),
            Geometry::Ellipse(g) => Some((g.start, g.end)),
            Geometry::Polyline(_) | Geometry::Polygon(_) => None,
        }
    }

    /// Committed vertices for multi-point kinds.
    pub fn points(&self) -> Option<&[Point]> {
        match self {
            Geometry::Polyline(g) => Some(&g.points),
            Geometry::Polygon(g) => Some(&g.points),
            _ => None,
        }
    }
}

/// Read-only projection of a shape's position and style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeProperties {
    pub id: ShapeId,
    pub kind: ShapeKind,
    pub position: Position,
    pub style: ShapeStyle,
}

/// Flattened geometry as reported by [`ShapeProperties`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Position {
    Span { start: [f64; 2], end: [f64; 2] },
    Points { points: Vec<f64> },
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct DragState {
    origin: Point,
    offset: Option<Vec2>,
}

/// A shape on (or being drawn onto) the canvas.
#[derive(Debug, Clone)]
pub struct Shape {
    id: ShapeId,
    element: ElementHandle,
    geometry: Geometry,
    style: ShapeStyle,
    selected: bool,
    drag: Option<DragState>,
}

impl Shape {
    /// Create a shape and its detached element. The caller appends it.
    pub fn new(kind: ShapeKind, style: ShapeStyle, sink: &mut dyn RenderSink) -> Self {
        let id = Uuid::new_v4();
        let element = sink.create_element(kind.element_name());
        sink.set_attribute(element, ID_ATTRIBUTE, &id.to_string());
        let shape = Self {
            id,
            element,
            geometry: Geometry::new(kind),
            style,
            selected: false,
            drag: None,
        };
        shape.apply_style(sink);
        shape
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn kind(&self) -> ShapeKind {
        self.geometry.as_dyn().kind()
    }

    /// The element this shape renders into.
    pub fn element(&self) -> ElementHandle {
        self.element
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn style(&self) -> &ShapeStyle {
        &self.style
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Current visual drag offset, if `drag_to` has been called.
    pub fn drag_offset(&self) -> Option<Vec2> {
        self.drag.and_then(|d| d.offset)
    }

    /// Whether the interior counts for hit-testing.
    pub fn is_filled(&self) -> bool {
        style::is_filled(self.kind(), &self.style)
    }

    /// Bounding box of the committed geometry.
    pub fn bounds(&self) -> Rect {
        self.geometry.as_dyn().bounds()
    }

    /// Bounding box as currently displayed, including any drag offset.
    pub fn rendered_bounds(&self) -> Rect {
        self.bounds() + self.drag_offset().unwrap_or(Vec2::ZERO)
    }

    /// Check if a point hits this shape's committed geometry.
    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        let reach = tolerance + self.style.stroke_width.unwrap_or(0.0) / 2.0;
        self.geometry.as_dyn().hit_test(point, reach, self.is_filled())
    }

    pub fn select(&mut self, sink: &mut dyn RenderSink) {
        self.selected = true;
        sink.add_class(self.element, SELECTED_CLASS);
    }

    pub fn deselect(&mut self, sink: &mut dyn RenderSink) {
        self.selected = false;
        sink.remove_class(self.element, SELECTED_CLASS);
    }

    /// Record the first anchor: start corner, or first vertex.
    pub fn start_draw(&mut self, point: Point, sink: &mut dyn RenderSink) {
        self.geometry.as_dyn_mut().start_draw(point);
        self.render(sink);
    }

    /// Overwrite the end corner, or append a vertex.
    pub fn draw_to(&mut self, point: Point, sink: &mut dyn RenderSink) {
        self.geometry.as_dyn_mut().draw_to(point);
        self.render(sink);
    }

    /// Follow the pointer: moves the end corner, or the uncommitted last vertex.
    pub fn preview_to(&mut self, point: Point, sink: &mut dyn RenderSink) {
        self.geometry.as_dyn_mut().preview_to(point);
        self.render(sink);
    }

    /// Drop preview state before the shape is committed.
    pub fn finish_draw(&mut self, sink: &mut dyn RenderSink) {
        self.geometry.as_dyn_mut().finish_draw();
        self.render(sink);
    }

    /// Append a vertex to a polyline or polygon.
    pub fn push_vertex(&mut self, point: Point, sink: &mut dyn RenderSink) -> CanvasResult<()> {
        if !self.kind().is_multi_point() {
            return Err(self.invalid("push_vertex"));
        }
        self.draw_to(point, sink);
        Ok(())
    }

    /// Replace both corners of a line, rectangle or ellipse.
    pub fn set_span(
        &mut self,
        start: Point,
        end: Point,
        sink: &mut dyn RenderSink,
    ) -> CanvasResult<()> {
        if self.kind().is_multi_point() {
            return Err(self.invalid("set_span"));
        }
        match &mut self.geometry {
            Geometry::Line(g) => *g = Line::new(start, end),
            Geometry::Rectangle(g) => *g = Rectangle::from_corners(start, end),
            Geometry::Ellipse(g) => *g = Ellipse::from_corners(start, end),
            Geometry::Polyline(_) | Geometry::Polygon(_) => {}
        }
        self.render(sink);
        Ok(())
    }

    /// Replace the vertices of a polyline or polygon.
    pub fn set_points(&mut self, points: Vec<Point>, sink: &mut dyn RenderSink) -> CanvasResult<()> {
        if !self.kind().is_multi_point() {
            return Err(self.invalid("set_points"));
        }
        match &mut self.geometry {
            Geometry::Polyline(g) => *g = Polyline::from_points(points),
            Geometry::Polygon(g) => *g = Polygon::from_points(points),
            _ => {}
        }
        self.render(sink);
        Ok(())
    }

    /// Capture the pointer position as the drag origin.
    pub fn start_drag(&mut self, point: Point) {
        self.drag = Some(DragState {
            origin: point,
            offset: None,
        });
    }

    /// Show the shape shifted by `point - origin` without touching its geometry.
    pub fn drag_to(&mut self, point: Point, sink: &mut dyn RenderSink) {
        let Some(drag) = &mut self.drag else {
            log::debug!("drag_to on shape {} without start_drag", self.id);
            return;
        };
        let offset = point - drag.origin;
        drag.offset = Some(offset);
        sink.set_attribute(
            self.element,
            DRAG_ATTRIBUTE,
            &format!(
                "transform: translate({}px, {}px)",
                format_number(offset.x),
                format_number(offset.y)
            ),
        );
    }

    /// Commit the last drag offset into the geometry and re-render.
    pub fn end_drag(&mut self, sink: &mut dyn RenderSink) {
        let Some(drag) = self.drag.take() else {
            return;
        };
        let delta = drag.offset.unwrap_or(Vec2::ZERO);
        self.geometry.as_dyn_mut().translate(delta);
        sink.remove_attribute(self.element, DRAG_ATTRIBUTE);
        self.render(sink);
    }

    /// Drop the drag without moving the geometry.
    pub fn cancel_drag(&mut self, sink: &mut dyn RenderSink) {
        if self.drag.take().is_some() {
            sink.remove_attribute(self.element, DRAG_ATTRIBUTE);
        }
    }

    /// Replace the style and push it to the sink.
    pub fn set_style(&mut self, style: ShapeStyle, sink: &mut dyn RenderSink) {
        self.style = style;
        self.apply_style(sink);
    }

    /// Apply one broadcast change and re-apply the style.
    pub fn update_style(&mut self, change: &StyleChange, sink: &mut dyn RenderSink) {
        self.style.apply_change(change);
        self.apply_style(sink);
    }

    /// Push every resolved style attribute to the sink.
    pub fn apply_style(&self, sink: &mut dyn RenderSink) {
        for (name, value) in style::resolve(self.kind(), &self.style) {
            sink.set_attribute(self.element, &name, &value);
        }
    }

    /// Re-derive every positional attribute from committed geometry.
    pub fn render(&self, sink: &mut dyn RenderSink) {
        for (name, value) in self.geometry.as_dyn().attributes() {
            sink.set_attribute(self.element, name, &value);
        }
    }

    /// Geometry and style projection for inspection.
    pub fn properties(&self) -> ShapeProperties {
        let position = match (self.geometry.span(), self.geometry.points()) {
            (Some((start, end)), _) => Position::Span {
                start: [start.x, start.y],
                end: [end.x, end.y],
            },
            (None, Some(points)) => Position::Points {
                points: flatten(points),
            },
            (None, None) => Position::Points { points: Vec::new() },
        };
        ShapeProperties {
            id: self.id,
            kind: self.kind(),
            position,
            style: self.style.clone(),
        }
    }

    /// Properties as pretty JSON, for debugging.
    pub fn properties_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.properties())
    }

    fn invalid(&self, operation: &'static str) -> CanvasError {
        CanvasError::InvalidGeometry {
            kind: self.kind(),
            operation,
        }
    }
}

/// Distance from a point to a line segment (a→b).
pub fn point_to_segment_dist(point: Point, a: Point, b: Point) -> f64 {
    let seg = b - a;
    let pv = point - a;
    let len_sq = seg.hypot2();
    if len_sq < f64::EPSILON {
        return pv.hypot();
    }
    let t = (pv.dot(seg) / len_sq).clamp(0.0, 1.0);
    let proj = a + seg * t;
    (point - proj).hypot()
}

/// Minimum distance from a point to a polyline (sequence of connected segments).
pub fn point_to_polyline_dist(point: Point, points: &[Point]) -> f64 {
    points
        .windows(2)
        .map(|w| point_to_segment_dist(point, w[0], w[1]))
        .fold(f64::INFINITY, f64::min)
}

/// Bounding box of a vertex list (zero rect when empty).
pub(crate) fn vertex_bounds(points: &[Point]) -> Rect {
    let Some((&first, rest)) = points.split_first() else {
        return Rect::ZERO;
    };
    rest.iter()
        .fold(Rect::from_points(first, first), |r, &p| r.union_pt(p))
}

/// SVG `points` value: `x1 y1 x2 y2 ...`, with an optional trailing live vertex.
pub(crate) fn points_attribute(points: &[Point], live_end: Option<Point>) -> String {
    points
        .iter()
        .chain(live_end.iter())
        .flat_map(|p| [format_number(p.x), format_number(p.y)])
        .collect::<Vec<_>>()
        .join(" ")
}

/// Flatten points into `[x1, y1, x2, y2, ...]`.
pub fn flatten(points: &[Point]) -> Vec<f64> {
    points.iter().flat_map(|p| [p.x, p.y]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{MemorySink, SinkCall};

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    fn style() -> ShapeStyle {
        ShapeStyle::new()
            .with_stroke("black")
            .with_fill("white")
            .with_stroke_width(2.0)
    }

    #[test]
    fn test_new_stamps_id_and_style() {
        let mut sink = MemorySink::new();
        let shape = Shape::new(ShapeKind::Rectangle, style(), &mut sink);
        let el = shape.element();
        assert_eq!(sink.element(el).unwrap().name, "rect");
        assert_eq!(sink.attribute(el, ID_ATTRIBUTE), Some(shape.id().to_string().as_str()));
        assert_eq!(sink.attribute(el, "fill"), Some("white"));
        assert_eq!(sink.attribute(el, "stroke-width"), Some("2"));
    }

    #[test]
    fn test_ids_are_unique() {
        let mut sink = MemorySink::new();
        let a = Shape::new(ShapeKind::Line, style(), &mut sink);
        let b = Shape::new(ShapeKind::Line, style(), &mut sink);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_select_toggles_flag_and_class() {
        let mut sink = MemorySink::new();
        let mut shape = Shape::new(ShapeKind::Ellipse, style(), &mut sink);
        shape.select(&mut sink);
        assert!(shape.is_selected());
        assert!(sink.has_class(shape.element(), SELECTED_CLASS));
        shape.deselect(&mut sink);
        assert!(!shape.is_selected());
        assert!(!sink.has_class(shape.element(), SELECTED_CLASS));
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut sink = MemorySink::new();
        let mut shape = Shape::new(ShapeKind::Polygon, style(), &mut sink);
        shape.start_draw(p(0.0, 0.0), &mut sink);
        shape.draw_to(p(50.0, 50.0), &mut sink);
        sink.take_calls();

        shape.render(&mut sink);
        let first = sink.take_calls();
        shape.render(&mut sink);
        let second = sink.take_calls();
        assert!(!first.is_empty());
        assert_eq!(first, second);
    }

    #[test]
    fn test_drag_commit() {
        let mut sink = MemorySink::new();
        let mut shape = Shape::new(ShapeKind::Rectangle, style(), &mut sink);
        shape.set_span(p(0.0, 0.0), p(100.0, 50.0), &mut sink).unwrap();

        shape.start_drag(p(5.0, 5.0));
        shape.drag_to(p(15.0, 15.0), &mut sink);
        assert_eq!(
            sink.attribute(shape.element(), "style"),
            Some("transform: translate(10px, 10px)")
        );
        // Stored geometry is untouched while dragging.
        assert_eq!(shape.geometry().span(), Some((p(0.0, 0.0), p(100.0, 50.0))));

        shape.end_drag(&mut sink);
        assert_eq!(shape.geometry().span(), Some((p(10.0, 10.0), p(110.0, 60.0))));
        assert_eq!(sink.attribute(shape.element(), "style"), None);
        assert_eq!(sink.attribute(shape.element(), "x"), Some("10"));
        assert!(!shape.is_dragging());
    }

    #[test]
    fn test_drag_uses_last_delta_only() {
        let mut sink = MemorySink::new();
        let mut shape = Shape::new(ShapeKind::Line, style(), &mut sink);
        shape.set_span(p(0.0, 0.0), p(10.0, 0.0), &mut sink).unwrap();

        shape.start_drag(p(0.0, 0.0));
        shape.drag_to(p(5.0, 5.0), &mut sink);
        shape.drag_to(p(7.0, 1.0), &mut sink);
        shape.drag_to(p(3.0, 2.0), &mut sink);
        shape.end_drag(&mut sink);
        assert_eq!(shape.geometry().span(), Some((p(3.0, 2.0), p(13.0, 2.0))));
    }

    #[test]
    fn test_end_drag_without_drag_to_is_zero_delta() {
        let mut sink = MemorySink::new();
        let mut shape = Shape::new(ShapeKind::Polyline, style(), &mut sink);
        shape.set_points(vec![p(1.0, 2.0), p(3.0, 4.0)], &mut sink).unwrap();

        shape.start_drag(p(100.0, 100.0));
        shape.end_drag(&mut sink);
        assert_eq!(shape.geometry().points(), Some(&[p(1.0, 2.0), p(3.0, 4.0)][..]));
        assert!(!shape.is_dragging());
    }

    #[test]
    fn test_end_drag_without_start_is_noop() {
        let mut sink = MemorySink::new();
        let mut shape = Shape::new(ShapeKind::Line, style(), &mut sink);
        sink.take_calls();
        shape.drag_to(p(10.0, 10.0), &mut sink);
        shape.end_drag(&mut sink);
        assert!(sink.calls().is_empty());
    }

    #[test]
    fn test_cancel_drag_keeps_geometry() {
        let mut sink = MemorySink::new();
        let mut shape = Shape::new(ShapeKind::Rectangle, style(), &mut sink);
        shape.set_span(p(0.0, 0.0), p(20.0, 20.0), &mut sink).unwrap();
        shape.start_drag(p(0.0, 0.0));
        shape.drag_to(p(10.0, 10.0), &mut sink);

        shape.cancel_drag(&mut sink);
        assert!(!shape.is_dragging());
        assert_eq!(shape.drag_offset(), None);
        assert_eq!(shape.rendered_bounds(), Rect::new(0.0, 0.0, 20.0, 20.0));
        assert_eq!(sink.attribute(shape.element(), "style"), None);
    }

    #[test]
    fn test_rendered_bounds_follow_drag() {
        let mut sink = MemorySink::new();
        let mut shape = Shape::new(ShapeKind::Ellipse, style(), &mut sink);
        shape.set_span(p(0.0, 0.0), p(10.0, 10.0), &mut sink).unwrap();
        shape.start_drag(p(0.0, 0.0));
        shape.drag_to(p(5.0, -5.0), &mut sink);
        assert_eq!(shape.bounds(), Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(shape.rendered_bounds(), Rect::new(5.0, -5.0, 15.0, 5.0));
    }

    #[test]
    fn test_geometry_kind_mismatch() {
        let mut sink = MemorySink::new();
        let mut line = Shape::new(ShapeKind::Line, style(), &mut sink);
        assert_eq!(
            line.push_vertex(p(1.0, 1.0), &mut sink),
            Err(CanvasError::InvalidGeometry {
                kind: ShapeKind::Line,
                operation: "push_vertex",
            })
        );
        assert!(line.set_points(vec![p(0.0, 0.0)], &mut sink).is_err());

        let mut polygon = Shape::new(ShapeKind::Polygon, style(), &mut sink);
        assert!(polygon.set_span(p(0.0, 0.0), p(1.0, 1.0), &mut sink).is_err());
        assert!(polygon.push_vertex(p(1.0, 1.0), &mut sink).is_ok());
    }

    #[test]
    fn test_set_style_kebab_cases_unknown_keys() {
        let mut sink = MemorySink::new();
        let mut shape = Shape::new(ShapeKind::Rectangle, ShapeStyle::new(), &mut sink);
        sink.take_calls();
        shape.set_style(style().with_extra("strokeOpacity", "0.5"), &mut sink);
        let calls = sink.take_calls();
        assert!(calls.contains(&SinkCall::SetAttribute {
            element: shape.element(),
            name: "stroke-opacity".to_string(),
            value: "0.5".to_string(),
        }));
    }

    #[test]
    fn test_update_style() {
        let mut sink = MemorySink::new();
        let mut shape = Shape::new(ShapeKind::Polyline, style(), &mut sink);
        assert_eq!(sink.attribute(shape.element(), "fill"), Some("none"));
        shape.update_style(&StyleChange::StrokeColor("red".to_string()), &mut sink);
        assert_eq!(shape.style().stroke.as_deref(), Some("red"));
        assert_eq!(sink.attribute(shape.element(), "stroke"), Some("red"));
    }

    #[test]
    fn test_properties() {
        let mut sink = MemorySink::new();
        let mut shape = Shape::new(ShapeKind::Polyline, style(), &mut sink);
        shape.set_points(vec![p(0.0, 0.0), p(50.0, 50.0)], &mut sink).unwrap();
        let props = shape.properties();
        assert_eq!(
            props.position,
            Position::Points {
                points: vec![0.0, 0.0, 50.0, 50.0]
            }
        );

        let json = serde_json::to_value(&props).unwrap();
        assert_eq!(json["kind"], "polyline");
        assert_eq!(json["position"]["points"][2], 50.0);
        assert!(shape.properties_json().is_ok());
    }

    #[test]
    fn test_hit_test_uses_fill() {
        let mut sink = MemorySink::new();
        let mut filled = Shape::new(ShapeKind::Rectangle, style(), &mut sink);
        filled.set_span(p(0.0, 0.0), p(100.0, 100.0), &mut sink).unwrap();
        assert!(filled.hit_test(p(50.0, 50.0), 0.0));

        let mut hollow = Shape::new(ShapeKind::Rectangle, style().with_fill("none"), &mut sink);
        hollow.set_span(p(0.0, 0.0), p(100.0, 100.0), &mut sink).unwrap();
        assert!(!hollow.hit_test(p(50.0, 50.0), 0.0));
        assert!(hollow.hit_test(p(0.5, 50.0), 0.0));
    }

    #[test]
    fn test_points_attribute() {
        assert_eq!(points_attribute(&[], None), "");
        assert_eq!(points_attribute(&[p(1.0, 2.0)], Some(p(3.0, 4.5))), "1 2 3 4.5");
    }
}
