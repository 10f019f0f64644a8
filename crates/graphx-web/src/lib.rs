//! Browser adapter for the GraphX canvas.
//!
//! Implements the core rendering sink on the DOM and exposes a small
//! wasm-bindgen surface the page's event listeners and toolbar call into.

#![cfg(target_arch = "wasm32")]

mod dom;
mod events;

pub use dom::DomSink;
pub use events::{canvas_layout, pointer_input, pointer_position};

use graphx_core::{Canvas, PointerEvent, ShapeKind, ToolEvent, ToolMode};
use wasm_bindgen::prelude::*;
use web_sys::{Element, MouseEvent};

/// Install the panic hook and the console logger.
pub fn init_logging() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        log::warn!("Logger already initialized: {}", e);
    }
}

/// A canvas bound to a container and its `<svg>` element.
#[wasm_bindgen]
pub struct WebCanvas {
    canvas: Canvas<DomSink>,
    container: Element,
    svg: Element,
}

#[wasm_bindgen]
impl WebCanvas {
    #[wasm_bindgen(constructor)]
    pub fn new(container: Element, svg: Element) -> Result<WebCanvas, JsValue> {
        init_logging();
        let sink = DomSink::new(svg.clone())
            .ok_or_else(|| JsValue::from_str("svg element is not attached to a document"))?;
        let mut canvas = Canvas::new(sink);
        canvas.resize(canvas_layout(&container, &svg));
        log::info!("GraphX canvas ready");
        Ok(Self {
            canvas,
            container,
            svg,
        })
    }

    pub fn mouse_down(&mut self, event: &MouseEvent) {
        // Secondary button commits; keep the context menu away.
        if event.button() == 2 {
            event.prevent_default();
        }
        self.canvas
            .handle_pointer_event(PointerEvent::Down(pointer_input(event)));
    }

    pub fn mouse_move(&mut self, event: &MouseEvent) {
        self.canvas.handle_pointer_event(PointerEvent::Move {
            position: pointer_position(event),
        });
    }

    pub fn mouse_up(&mut self, event: &MouseEvent) {
        self.canvas
            .handle_pointer_event(PointerEvent::Up(pointer_input(event)));
    }

    /// Re-read the layout after a window resize.
    pub fn resize(&mut self) {
        self.canvas
            .resize(canvas_layout(&self.container, &self.svg));
    }

    pub fn set_tool(&mut self, tool: &str) -> Result<(), JsValue> {
        let mode = match tool {
            "select" => ToolMode::Select,
            "draw" => ToolMode::Draw,
            other => return Err(JsValue::from_str(&format!("unknown tool: {}", other))),
        };
        self.canvas.handle_tool_event(&ToolEvent::ToolChanged(mode));
        Ok(())
    }

    pub fn set_shape(&mut self, shape: &str) -> Result<(), JsValue> {
        let kind = ShapeKind::ALL
            .into_iter()
            .find(|kind| kind.name() == shape)
            .ok_or_else(|| JsValue::from_str(&format!("unknown shape: {}", shape)))?;
        self.canvas.handle_tool_event(&ToolEvent::ShapeChanged(kind));
        Ok(())
    }

    pub fn set_stroke_color(&mut self, color: String) {
        self.canvas.handle_tool_event(&ToolEvent::StrokeColor(color));
    }

    pub fn set_fill_color(&mut self, color: String) {
        self.canvas.handle_tool_event(&ToolEvent::FillColor(color));
    }

    pub fn set_stroke_size(&mut self, size: f64) {
        self.canvas.handle_tool_event(&ToolEvent::StrokeSize(size));
    }

    pub fn set_stroke_dasharray(&mut self, dash: String) {
        self.canvas
            .handle_tool_event(&ToolEvent::StrokeDashArray(dash));
    }

    pub fn cursor_x(&self) -> f64 {
        self.canvas.tools().cursor().x
    }

    pub fn cursor_y(&self) -> f64 {
        self.canvas.tools().cursor().y
    }

    pub fn shape_count(&self) -> usize {
        self.canvas.registry().len()
    }
}
