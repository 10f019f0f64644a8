//! Polygon shape.

use super::{point_to_polyline_dist, points_attribute, vertex_bounds, ShapeGeometry, ShapeKind};
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// A closed ring of vertices. The closing edge is implicit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    /// Committed vertices in drawing order.
    pub points: Vec<Point>,
    /// Pointer-following vertex shown while drawing, never committed.
    #[serde(skip)]
    pub live_end: Option<Point>,
}

impl Polygon {
    /// Create from existing points.
    pub fn from_points(points: Vec<Point>) -> Self {
        Self {
            points,
            live_end: None,
        }
    }

    /// Even-odd containment test.
    pub fn contains(&self, point: Point) -> bool {
        let n = self.points.len();
        if n < 3 {
            return false;
        }
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let (a, b) = (self.points[i], self.points[j]);
            if (a.y > point.y) != (b.y > point.y)
                && point.x < (b.x - a.x) * (point.y - a.y) / (b.y - a.y) + a.x
            {
                inside = !inside;
            }
            j = i;
        }
        inside
    }

    fn ring(&self) -> Vec<Point> {
        let mut ring = self.points.clone();
        if let Some(&first) = self.points.first() {
            ring.push(first);
        }
        ring
    }
}

impl ShapeGeometry for Polygon {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Polygon
    }

    fn bounds(&self) -> Rect {
        vertex_bounds(&self.points)
    }

    fn hit_test(&self, point: Point, tolerance: f64, filled: bool) -> bool {
        if self.points.is_empty() {
            return false;
        }
        if filled && self.contains(point) {
            return true;
        }
        point_to_polyline_dist(point, &self.ring()) <= tolerance
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

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Polygon {
        Polygon::from_points(vec![
            Point::new(0.0, 0.0),
            Point::new(50.0, 50.0),
            Point::new(100.0, 0.0),
        ])
    }

    #[test]
    fn test_contains() {
        let tri = triangle();
        assert!(tri.contains(Point::new(50.0, 10.0)));
        assert!(!tri.contains(Point::new(50.0, 60.0)));
        assert!(!Polygon::from_points(vec![Point::ZERO, Point::new(1.0, 1.0)]).contains(Point::ZERO));
    }

    #[test]
    fn test_hit_test_closing_edge() {
        let tri = triangle();
        // On the implicit edge from (100,0) back to (0,0).
        assert!(tri.hit_test(Point::new(50.0, 1.0), 2.0, false));
        assert!(!tri.hit_test(Point::new(50.0, 20.0), 2.0, false));
        assert!(tri.hit_test(Point::new(50.0, 20.0), 2.0, true));
    }

    #[test]
    fn test_attributes() {
        assert_eq!(triangle().attributes(), vec![("points", "0 0 50 50 100 0".to_string())]);
    }
}
