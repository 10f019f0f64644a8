//! Tool input state: the toolbar's current mode, shape kind and style.

use crate::shapes::ShapeKind;
use crate::style::{ShapeStyle, StyleChange};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Top-level interaction mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ToolMode {
    #[default]
    Select,
    Draw,
}

/// Change notifications emitted by the toolbar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ToolEvent {
    ToolChanged(ToolMode),
    ShapeChanged(ShapeKind),
    StrokeColor(String),
    FillColor(String),
    StrokeSize(f64),
    StrokeDashArray(String),
}

impl ToolEvent {
    /// The style change this event carries, if any.
    pub fn style_change(&self) -> Option<StyleChange> {
        match self {
            ToolEvent::StrokeColor(color) => Some(StyleChange::StrokeColor(color.clone())),
            ToolEvent::FillColor(color) => Some(StyleChange::FillColor(color.clone())),
            ToolEvent::StrokeSize(size) => Some(StyleChange::StrokeWidth(*size)),
            ToolEvent::StrokeDashArray(dash) => Some(StyleChange::StrokeDashArray(dash.clone())),
            ToolEvent::ToolChanged(_) | ToolEvent::ShapeChanged(_) => None,
        }
    }
}

/// Current toolbar state, read by the canvas controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolInput {
    /// Select or draw.
    pub current_tool: ToolMode,
    /// Kind created in draw mode.
    pub current_shape: ShapeKind,
    pub stroke_color: String,
    pub fill_color: String,
    pub stroke_size: f64,
    /// Dash pattern for new shapes, unset for solid strokes.
    pub stroke_dasharray: Option<String>,
    /// Last reported cursor position, canvas-local.
    #[serde(skip)]
    cursor: Point,
}

impl Default for ToolInput {
    fn default() -> Self {
        Self {
            current_tool: ToolMode::default(),
            current_shape: ShapeKind::default(),
            stroke_color: "black".to_string(),
            fill_color: "white".to_string(),
            stroke_size: 2.0,
            stroke_dasharray: None,
            cursor: Point::ZERO,
        }
    }
}

impl ToolInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a toolbar notification.
    pub fn apply(&mut self, event: &ToolEvent) {
        match event {
            ToolEvent::ToolChanged(mode) => self.current_tool = *mode,
            ToolEvent::ShapeChanged(kind) => self.current_shape = *kind,
            ToolEvent::StrokeColor(color) => self.stroke_color = color.clone(),
            ToolEvent::FillColor(color) => self.fill_color = color.clone(),
            ToolEvent::StrokeSize(size) => self.stroke_size = *size,
            ToolEvent::StrokeDashArray(dash) => self.stroke_dasharray = Some(dash.clone()),
        }
    }

    /// Style a freshly created shape of `kind` starts with.
    pub fn style_for(&self, kind: ShapeKind) -> ShapeStyle {
        let mut style = ShapeStyle::new()
            .with_stroke(self.stroke_color.as_str())
            .with_stroke_width(self.stroke_size);
        match kind {
            ShapeKind::Line => {}
            ShapeKind::Polyline => style = style.with_fill("none"),
            ShapeKind::Rectangle | ShapeKind::Ellipse | ShapeKind::Polygon => {
                style = style.with_fill(self.fill_color.as_str())
            }
        }
        if let Some(dash) = &self.stroke_dasharray {
            style = style.with_stroke_dasharray(dash.as_str());
        }
        style
    }

    pub fn cursor(&self) -> Point {
        self.cursor
    }

    /// Record the cursor position shown by the toolbar.
    pub fn update_cursor(&mut self, point: Point) {
        self.cursor = point;
    }
}
