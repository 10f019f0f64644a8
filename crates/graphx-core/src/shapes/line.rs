//! Line shape.

use super::{point_to_segment_dist, ShapeGeometry, ShapeKind};
use crate::style::format_number;
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// A straight segment between two points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
}

impl Line {
    /// Create a new line.
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }
}

impl Default for Line {
    fn default() -> Self {
        Self::new(Point::ZERO, Point::ZERO)
    }
}

impl ShapeGeometry for Line {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Line
    }

    fn bounds(&self) -> Rect {
        Rect::from_points(self.start, self.end)
    }

    fn hit_test(&self, point: Point, tolerance: f64, _filled: bool) -> bool {
        point_to_segment_dist(point, self.start, self.end) <= tolerance
    }

    fn start_draw(&mut self, point: Point) {
        self.start = point;
        self.end = point;
    }

    fn draw_to(&mut self, point: Point) {
        self.end = point;
    }

    fn translate(&mut self, delta: Vec2) {
        self.start += delta;
        self.end += delta;
    }

    fn attributes(&self) -> Vec<(&'static str, String)> {
        vec![
            ("x1", format_number(self.start.x)),
            ("y1", format_number(self.start.y)),
            ("x2", format_number(self.end.x)),
            ("y2", format_number(self.end.y)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_creation() {
        let line = Line::new(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        assert_eq!(line.bounds(), Rect::new(0.0, 0.0, 100.0, 0.0));
    }

    #[test]
    fn test_draw_to_overwrites_end() {
        let mut line = Line::default();
        line.start_draw(Point::new(10.0, 10.0));
        line.draw_to(Point::new(20.0, 20.0));
        line.draw_to(Point::new(30.0, 5.0));
        assert_eq!(line.start, Point::new(10.0, 10.0));
        assert_eq!(line.end, Point::new(30.0, 5.0));
    }

    #[test]
    fn test_hit_test_on_line() {
        let line = Line::new(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        assert!(line.hit_test(Point::new(50.0, 0.0), 1.0, false));
        assert!(line.hit_test(Point::new(50.0, 2.0), 5.0, false));
        assert!(!line.hit_test(Point::new(50.0, 20.0), 5.0, false));
        assert!(line.hit_test(Point::new(100.0, 0.0), 1.0, false));
    }

    #[test]
    fn test_bounds() {
        let line = Line::new(Point::new(50.0, 80.0), Point::new(10.0, 20.0));
        let bounds = line.bounds();
        assert!((bounds.x0 - 10.0).abs() < f64::EPSILON);
        assert!((bounds.y0 - 20.0).abs() < f64::EPSILON);
        assert!((bounds.x1 - 50.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 80.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_attributes() {
        let line = Line::new(Point::new(1.0, 2.0), Point::new(3.5, 4.0));
        assert_eq!(
            line.attributes(),
            vec![
                ("x1", "1".to_string()),
                ("y1", "2".to_string()),
                ("x2", "3.5".to_string()),
                ("y2", "4".to_string()),
            ]
        );
    }
}
