//! Shape style records and their resolution into SVG attributes.

use crate::shapes::ShapeKind;
use serde::{Deserialize, Serialize};

/// Fill option for closed shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FillType {
    /// Paint the interior with the fill color.
    #[default]
    Solid,
    /// No fill.
    None,
}

/// Stroke option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StrokeType {
    /// Paint the outline with the stroke color.
    #[default]
    Solid,
    /// No stroke.
    None,
}

/// SVG `shape-rendering` hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ShapeRendering {
    #[default]
    Auto,
    OptimizeSpeed,
    CrispEdges,
    GeometricPrecision,
}

impl ShapeRendering {
    /// Attribute value.
    pub fn as_str(self) -> &'static str {
        match self {
            ShapeRendering::Auto => "auto",
            ShapeRendering::OptimizeSpeed => "optimizeSpeed",
            ShapeRendering::CrispEdges => "crispEdges",
            ShapeRendering::GeometricPrecision => "geometricPrecision",
        }
    }
}

/// SVG `stroke-linecap`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StrokeLinecap {
    #[default]
    Butt,
    Round,
    Square,
}

impl StrokeLinecap {
    /// Attribute value.
    pub fn as_str(self) -> &'static str {
        match self {
            StrokeLinecap::Butt => "butt",
            StrokeLinecap::Round => "round",
            StrokeLinecap::Square => "square",
        }
    }
}

/// A single style change broadcast by the tool input state.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleChange {
    StrokeWidth(f64),
    StrokeColor(String),
    FillColor(String),
    StrokeDashArray(String),
}

/// Style properties for shapes.
///
/// Unset fields produce no attribute. `extra` holds any other camelCase key,
/// emitted under its kebab-case attribute name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeStyle {
    /// Stroke color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
    /// Fill color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    /// Stroke width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
    /// Dash pattern, e.g. `"5 3"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_dasharray: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_type: Option<FillType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_type: Option<StrokeType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape_rendering: Option<ShapeRendering>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_linecap: Option<StrokeLinecap>,
    /// Other keys in insertion order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra: Vec<(String, String)>,
}

impl ShapeStyle {
    /// Create an empty style.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stroke(mut self, color: impl Into<String>) -> Self {
        self.stroke = Some(color.into());
        self
    }

    pub fn with_fill(mut self, color: impl Into<String>) -> Self {
        self.fill = Some(color.into());
        self
    }

    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = Some(width);
        self
    }

    pub fn with_stroke_dasharray(mut self, dash: impl Into<String>) -> Self {
        self.stroke_dasharray = Some(dash.into());
        self
    }

    pub fn with_fill_type(mut self, fill_type: FillType) -> Self {
        self.fill_type = Some(fill_type);
        self
    }

    pub fn with_stroke_type(mut self, stroke_type: StrokeType) -> Self {
        self.stroke_type = Some(stroke_type);
        self
    }

    pub fn with_shape_rendering(mut self, rendering: ShapeRendering) -> Self {
        self.shape_rendering = Some(rendering);
        self
    }

    pub fn with_stroke_linecap(mut self, linecap: StrokeLinecap) -> Self {
        self.stroke_linecap = Some(linecap);
        self
    }

    /// Set an arbitrary camelCase key, replacing any previous value.
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_extra(key, value);
        self
    }

    /// Set an arbitrary camelCase key in place.
    pub fn set_extra(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.extra.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.extra.push((key, value)),
        }
    }

    /// Apply a broadcast style change.
    pub fn apply_change(&mut self, change: &StyleChange) {
        match change {
            StyleChange::StrokeWidth(width) => self.stroke_width = Some(*width),
            StyleChange::StrokeColor(color) => self.stroke = Some(color.clone()),
            StyleChange::FillColor(color) => self.fill = Some(color.clone()),
            StyleChange::StrokeDashArray(dash) => self.stroke_dasharray = Some(dash.clone()),
        }
    }

    /// Resolve this style into attributes for the given shape kind.
    pub fn attributes(&self, kind: ShapeKind) -> Vec<(String, String)> {
        resolve(kind, self)
    }
}

/// Map a style onto the attribute set a shape of `kind` must carry.
///
/// Order is fixed (stroke, fill, stroke-width, stroke-dasharray,
/// shape-rendering, stroke-linecap, then extras) so repeated resolution issues
/// identical sink calls.
pub fn resolve(kind: ShapeKind, style: &ShapeStyle) -> Vec<(String, String)> {
    let mut attrs = Vec::new();

    let stroke = match style.stroke_type {
        Some(StrokeType::None) => Some("none".to_string()),
        _ => style.stroke.clone(),
    };
    if let Some(stroke) = stroke {
        attrs.push(("stroke".to_string(), stroke));
    }

    // Open shapes never fill.
    let fill = if !kind.is_closed() || style.fill_type == Some(FillType::None) {
        Some("none".to_string())
    } else {
        style.fill.clone()
    };
    if let Some(fill) = fill {
        attrs.push(("fill".to_string(), fill));
    }

    if let Some(width) = style.stroke_width {
        attrs.push(("stroke-width".to_string(), format_number(width)));
    }
    if let Some(dash) = &style.stroke_dasharray {
        attrs.push(("stroke-dasharray".to_string(), dash.clone()));
    }
    if let Some(rendering) = style.shape_rendering {
        attrs.push(("shape-rendering".to_string(), rendering.as_str().to_string()));
    }
    if let Some(linecap) = style.stroke_linecap {
        attrs.push(("stroke-linecap".to_string(), linecap.as_str().to_string()));
    }
    for (key, value) in &style.extra {
        attrs.push((kebab_case(key), value.clone()));
    }
    attrs
}

/// Whether a resolved style paints the interior of a shape.
pub fn is_filled(kind: ShapeKind, style: &ShapeStyle) -> bool {
    kind.is_closed()
        && style.fill_type != Some(FillType::None)
        && style.fill.as_deref().is_some_and(|fill| fill != "none")
}

/// Convert a camelCase key to its kebab-case attribute name.
pub fn kebab_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for (i, c) in key.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 {
                out.push('-');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Format a coordinate or length for an SVG attribute.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        // Avoid "-0".
        return "0".to_string();
    }
    format!("{}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attr<'a>(attrs: &'a [(String, String)], name: &str) -> Option<&'a str> {
        attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_kebab_case() {
        assert_eq!(kebab_case("strokeWidth"), "stroke-width");
        assert_eq!(kebab_case("strokeDasharray"), "stroke-dasharray");
        assert_eq!(kebab_case("opacity"), "opacity");
        assert_eq!(kebab_case("strokeMiterlimit"), "stroke-miterlimit");
        assert_eq!(kebab_case("Opacity"), "opacity");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(2.0), "2");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(-10.0), "-10");
    }

    #[test]
    fn test_resolve_closed_shape() {
        let style = ShapeStyle::new()
            .with_stroke("black")
            .with_fill("lightblue")
            .with_stroke_width(2.0);
        let attrs = resolve(ShapeKind::Rectangle, &style);
        assert_eq!(
            attrs,
            vec![
                ("stroke".to_string(), "black".to_string()),
                ("fill".to_string(), "lightblue".to_string()),
                ("stroke-width".to_string(), "2".to_string()),
            ]
        );
    }

    #[test]
    fn test_polyline_forces_fill_none() {
        let style = ShapeStyle::new().with_fill("red").with_fill_type(FillType::Solid);
        let attrs = resolve(ShapeKind::Polyline, &style);
        assert_eq!(attr(&attrs, "fill"), Some("none"));

        let polygon = resolve(ShapeKind::Polygon, &style);
        assert_eq!(attr(&polygon, "fill"), Some("red"));
    }

    #[test]
    fn test_fill_type_none() {
        let style = ShapeStyle::new().with_fill("red").with_fill_type(FillType::None);
        let attrs = resolve(ShapeKind::Ellipse, &style);
        assert_eq!(attr(&attrs, "fill"), Some("none"));
        assert!(!is_filled(ShapeKind::Ellipse, &style));
    }

    #[test]
    fn test_stroke_type_none() {
        let style = ShapeStyle::new().with_stroke("blue").with_stroke_type(StrokeType::None);
        let attrs = resolve(ShapeKind::Line, &style);
        assert_eq!(attr(&attrs, "stroke"), Some("none"));

        let solid = style.clone().with_stroke_type(StrokeType::Solid);
        assert_eq!(attr(&resolve(ShapeKind::Line, &solid), "stroke"), Some("blue"));
    }

    #[test]
    fn test_enumerated_options() {
        let style = ShapeStyle::new()
            .with_shape_rendering(ShapeRendering::CrispEdges)
            .with_stroke_linecap(StrokeLinecap::Round);
        let attrs = resolve(ShapeKind::Polyline, &style);
        assert_eq!(attr(&attrs, "shape-rendering"), Some("crispEdges"));
        assert_eq!(attr(&attrs, "stroke-linecap"), Some("round"));
    }

    #[test]
    fn test_unknown_keys_are_kebab_cased() {
        let style = ShapeStyle::new()
            .with_extra("strokeOpacity", "0.5")
            .with_extra("opacity", "0.8")
            .with_extra("strokeOpacity", "0.25");
        let attrs = resolve(ShapeKind::Rectangle, &style);
        assert_eq!(attr(&attrs, "stroke-opacity"), Some("0.25"));
        assert_eq!(attr(&attrs, "opacity"), Some("0.8"));
        assert_eq!(style.extra.len(), 2);
    }

    #[test]
    fn test_apply_change() {
        let mut style = ShapeStyle::new().with_stroke("black");
        style.apply_change(&StyleChange::StrokeColor("red".to_string()));
        style.apply_change(&StyleChange::StrokeWidth(4.0));
        style.apply_change(&StyleChange::FillColor("green".to_string()));
        style.apply_change(&StyleChange::StrokeDashArray("4 2".to_string()));
        assert_eq!(style.stroke.as_deref(), Some("red"));
        assert_eq!(style.stroke_width, Some(4.0));
        assert_eq!(style.fill.as_deref(), Some("green"));
        assert_eq!(style.stroke_dasharray.as_deref(), Some("4 2"));
    }

    #[test]
    fn test_is_filled() {
        let style = ShapeStyle::new().with_fill("white");
        assert!(is_filled(ShapeKind::Rectangle, &style));
        assert!(!is_filled(ShapeKind::Polyline, &style));
        assert!(!is_filled(ShapeKind::Rectangle, &ShapeStyle::new().with_fill("none")));
        assert!(!is_filled(ShapeKind::Rectangle, &ShapeStyle::new()));
    }

    #[test]
    fn test_serde_camel_case() {
        let style = ShapeStyle::new().with_stroke_width(3.0).with_fill_type(FillType::None);
        let json = serde_json::to_value(&style).unwrap();
        assert_eq!(json["strokeWidth"], 3.0);
        assert_eq!(json["fillType"], "None");
        assert!(json.get("stroke").is_none());
    }
}
