//! Rectangle shape.

use super::{ShapeGeometry, ShapeKind};
use crate::style::format_number;
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle spanned by two opposite corners.
///
/// Corners are stored as drawn; `as_rect` normalizes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    /// Corner where drawing started.
    pub start: Point,
    /// Opposite corner.
    pub end: Point,
}

impl Rectangle {
    /// Create a rectangle from two corner points.
    pub fn from_corners(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Get the rectangle as a normalized kurbo Rect.
    pub fn as_rect(&self) -> Rect {
        Rect::from_points(self.start, self.end)
    }
}

impl Default for Rectangle {
    fn default() -> Self {
        Self::from_corners(Point::ZERO, Point::ZERO)
    }
}

impl ShapeGeometry for Rectangle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Rectangle
    }

    fn bounds(&self) -> Rect {
        self.as_rect()
    }

    fn hit_test(&self, point: Point, tolerance: f64, filled: bool) -> bool {
        let rect = self.as_rect();
        if filled {
            rect.inflate(tolerance, tolerance).contains(point)
        } else {
            // Outline only: hit on the border
            let outer = rect.inflate(tolerance, tolerance);
            let inner = rect.inflate(-tolerance, -tolerance);
            outer.contains(point) && !inner.contains(point)
        }
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
        let rect = self.as_rect();
        vec![
            ("x", format_number(rect.x0)),
            ("y", format_number(rect.y0)),
            ("width", format_number(rect.width())),
            ("height", format_number(rect.height())),
        ]
    }
}
