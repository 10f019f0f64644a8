//! Ellipse shape.

use super::{ShapeGeometry, ShapeKind};
use crate::style::format_number;
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// An ellipse inscribed in the box spanned by two corners.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ellipse {
    /// Corner where drawing started.
    pub start: Point,
    /// Opposite corner.
    pub end: Point,
}

impl Ellipse {
    /// Create an ellipse from its bounding corners.
    pub fn from_corners(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Center point.
    pub fn center(&self) -> Point {
        Rect::from_points(self.start, self.end).center()
    }

    /// Horizontal and vertical radii.
    pub fn radii(&self) -> Vec2 {
        let rect = Rect::from_points(self.start, self.end);
        Vec2::new(rect.width() / 2.0, rect.height() / 2.0)
    }
}

impl Default for Ellipse {
    fn default() -> Self {
        Self::from_corners(Point::ZERO, Point::ZERO)
    }
}

impl ShapeGeometry for Ellipse {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Ellipse
    }

    fn bounds(&self) -> Rect {
        Rect::from_points(self.start, self.end)
    }

    fn hit_test(&self, point: Point, tolerance: f64, filled: bool) -> bool {
        let center = self.center();
        let radii = self.radii();
        let dx_outer = (point.x - center.x) / (radii.x + tolerance);
        let dy_outer = (point.y - center.y) / (radii.y + tolerance);
        if dx_outer * dx_outer + dy_outer * dy_outer > 1.0 {
            return false;
        }
        if filled {
            return true;
        }
        // Outline only: reject if inside inner ellipse
        let inner_rx = (radii.x - tolerance).max(0.0);
        let inner_ry = (radii.y - tolerance).max(0.0);
        if inner_rx < f64::EPSILON || inner_ry < f64::EPSILON {
            return true;
        }
        let dx_inner = (point.x - center.x) / inner_rx;
        let dy_inner = (point.y - center.y) / inner_ry;
        dx_inner * dx_inner + dy_inner * dy_inner > 1.0
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
        let center = self.center();
        let radii = self.radii();
        vec![
            ("cx", format_number(center.x)),
            ("cy", format_number(center.y)),
            ("rx", format_number(radii.x)),
            ("ry", format_number(radii.y)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_and_radii() {
        let ellipse = Ellipse::from_corners(Point::new(200.0, 200.0), Point::new(300.0, 260.0));
        assert_eq!(ellipse.center(), Point::new(250.0, 230.0));
        assert!((ellipse.radii().x - 50.0).abs() < f64::EPSILON);
        assert!((ellipse.radii().y - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_hit_test_center() {
        let ellipse = Ellipse::from_corners(Point::new(20.0, 30.0), Point::new(80.0, 70.0));
        assert!(ellipse.hit_test(Point::new(50.0, 50.0), 0.0, true));
        assert!(!ellipse.hit_test(Point::new(50.0, 50.0), 1.0, false));
    }

    #[test]
    fn test_hit_test_edge() {
        let circle = Ellipse::from_corners(Point::new(-10.0, -10.0), Point::new(10.0, 10.0));
        assert!(circle.hit_test(Point::new(10.0, 0.0), 0.0, true));
        assert!(!circle.hit_test(Point::new(15.0, 0.0), 0.0, true));
        assert!(circle.hit_test(Point::new(10.0, 0.0), 1.0, false));
    }

    #[test]
    fn test_bounds() {
        let ellipse = Ellipse::from_corners(Point::new(80.0, 70.0), Point::new(20.0, 30.0));
        let bounds = ellipse.bounds();
        assert!((bounds.x0 - 20.0).abs() < f64::EPSILON);
        assert!((bounds.y0 - 30.0).abs() < f64::EPSILON);
        assert!((bounds.x1 - 80.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 70.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_attributes() {
        let ellipse = Ellipse::from_corners(Point::new(0.0, 0.0), Point::new(100.0, 50.0));
        assert_eq!(
            ellipse.attributes(),
            vec![
                ("cx", "50".to_string()),
                ("cy", "25".to_string()),
                ("rx", "50".to_string()),
                ("ry", "25".to_string()),
            ]
        );
    }
}
