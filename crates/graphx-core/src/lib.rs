//! GraphX Core Library
//!
//! Platform-agnostic shape, selection and drag logic for the GraphX SVG canvas.
//! Everything that touches the drawing surface goes through [`RenderSink`].

pub mod canvas;
pub mod config;
pub mod error;
pub mod input;
pub mod registry;
pub mod render;
pub mod selection;
pub mod shapes;
pub mod style;
pub mod tools;

pub use canvas::{Canvas, CanvasLayout};
pub use config::CanvasConfig;
pub use error::{CanvasError, CanvasResult};
pub use input::{Modifiers, MouseButton, PointerEvent, PointerInput};
pub use registry::ObjectRegistry;
pub use render::{ElementHandle, MemorySink, RenderSink, SinkCall};
pub use selection::{DragSession, Gesture, SelectionBox, SelectionService};
pub use shapes::{Shape, ShapeId, ShapeKind, ShapeProperties};
pub use style::{FillType, ShapeRendering, ShapeStyle, StrokeLinecap, StrokeType, StyleChange};
pub use tools::{ToolEvent, ToolInput, ToolMode};
