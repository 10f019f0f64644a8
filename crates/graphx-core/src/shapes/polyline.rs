//! Polyline shape.

use super::{point_to_polyline_dist, points_attribute, vertex_bounds, ShapeGeometry, ShapeKind};
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// An open chain of vertices.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    /// Committed vertices in drawing order.
    pub points: Vec<Point>,
    /// Pointer-following end point shown while drawing, never committed.
    #[serde(skip)]
    pub live_end: Option<Point>,
}

impl Polyline {
    /// Create from existing points.
    pub fn from_points(points: Vec<Point>) -> Self {
        Self {
            points,
            live_end: None,
        }
    }
}

impl ShapeGeometry for Polyline {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Polyline
    }

    fn bounds(&self) -> Rect {
        vertex_bounds(&self.points)
    }

    fn hit_test(&self, point: Point, tolerance: f64, _filled: bool) -> bool {
        match self.points.as_slice() {
            [] => false,
            [only] => (point - *only).hypot() <= tolerance,
            points => point_to_polyline_dist(point, points) <= tolerance,
        }
    }

    fn start_draw(&mut self, point: Point) {
        self.points.push(point);
    }

    fn draw_to(&mut self, point: Point) {
        self.points.push(point);
        self.live_end = None;
    }

    fn preview_to(&mut self, point: Point) {
        self.live_end = Some(point);
    }

    fn finish_draw(&mut self) {
        self.live_end = None;
    }

    fn translate(&mut self, delta: Vec2) {
        for p in &mut self.points {
            *p += delta;
        }
        if let Some(end) = &mut self.live_end {
            *end += delta;
        }
    }

    fn attributes(&self) -> Vec<(&'static str, String)> {
        vec![("points", points_attribute(&self.points, self.live_end))]
    }
}
