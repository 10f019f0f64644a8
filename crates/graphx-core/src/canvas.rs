//! Canvas interaction controller.
//!
//! [`Canvas`] owns the registry, the selection, the tool input state and the
//! shape currently being drawn, and turns pointer events into operations on
//! them. Errors never escape a pointer handler: they are logged and the
//! gesture in flight is abandoned.

use crate::config::CanvasConfig;
use crate::error::CanvasResult;
use crate::input::{MouseButton, PointerEvent, PointerInput};
use crate::registry::ObjectRegistry;
use crate::render::{RenderSink, HIDDEN_CLASS};
use crate::selection::SelectionService;
use crate::shapes::{Shape, ShapeId, ShapeKind};
use crate::style::{format_number, ShapeStyle};
use crate::tools::{ToolEvent, ToolInput, ToolMode};
use kurbo::{Point, Size};

/// Where the canvas sits on the page and how large it is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasLayout {
    /// Page position of the canvas top-left corner.
    pub origin: Point,
    /// Visible size, used as the viewBox.
    pub size: Size,
}

impl CanvasLayout {
    pub fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }
}

/// The drawing surface and its interaction state machine.
#[derive(Debug)]
pub struct Canvas<S: RenderSink> {
    registry: ObjectRegistry,
    selection: SelectionService,
    tools: ToolInput,
    /// Shape being drawn, not yet in the registry.
    current: Option<Shape>,
    layout: CanvasLayout,
    config: CanvasConfig,
    sink: S,
}

impl<S: RenderSink> Canvas<S> {
    /// Create a canvas with default configuration.
    pub fn new(sink: S) -> Self {
        Self::with_config(sink, CanvasConfig::default())
    }

    /// Create a canvas drawing into `sink`.
    pub fn with_config(mut sink: S, config: CanvasConfig) -> Self {
        let selection = SelectionService::new(&mut sink);
        let layout = CanvasLayout::new(Point::ZERO, config.viewport);
        let mut canvas = Self {
            registry: ObjectRegistry::new(),
            selection,
            tools: ToolInput::new(),
            current: None,
            layout,
            config,
            sink,
        };
        canvas.apply_view_box();
        canvas
    }

    pub fn registry(&self) -> &ObjectRegistry {
        &self.registry
    }

    pub fn selection(&self) -> &SelectionService {
        &self.selection
    }

    pub fn tools(&self) -> &ToolInput {
        &self.tools
    }

    /// The shape being drawn, if any.
    pub fn current(&self) -> Option<&Shape> {
        self.current.as_ref()
    }

    pub fn layout(&self) -> CanvasLayout {
        self.layout
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Convert a page position to canvas-local coordinates.
    pub fn to_local(&self, position: Point) -> Point {
        position - self.layout.origin.to_vec2()
    }

    /// Apply a new layout after the container moved or resized.
    pub fn resize(&mut self, layout: CanvasLayout) {
        self.layout = layout;
        self.apply_view_box();
        log::debug!("Canvas resized to {:?} at {:?}", layout.size, layout.origin);
    }

    /// Apply a toolbar notification.
    ///
    /// Changing the tool or the shape kind abandons the shape being drawn,
    /// cancels any drag or rubber band and clears the selection; style changes
    /// also restyle the selection.
    pub fn handle_tool_event(&mut self, event: &ToolEvent) {
        self.tools.apply(event);
        if matches!(event, ToolEvent::ToolChanged(_) | ToolEvent::ShapeChanged(_)) {
            self.abort_current();
        }
        self.selection
            .handle_tool_event(event, &mut self.registry, &mut self.sink);
    }

    /// Create a detached shape using this canvas's sink.
    pub fn create_shape(&mut self, kind: ShapeKind, style: ShapeStyle) -> Shape {
        Shape::new(kind, style, &mut self.sink)
    }

    /// Add a finished shape (e.g. initial content supplied by the host).
    pub fn insert_shape(&mut self, shape: Shape) -> CanvasResult<ShapeId> {
        let element = shape.element();
        let id = self.registry.add(shape)?;
        let root = self.sink.root();
        self.sink.append_child(root, element);
        if let Some(shape) = self.registry.get(id) {
            shape.render(&mut self.sink);
        }
        Ok(id)
    }

    /// Remove a shape from the canvas and the selection, hiding its element.
    pub fn remove_shape(&mut self, id: ShapeId) -> CanvasResult<Shape> {
        let mut shape = self.registry.remove(id)?;
        self.selection.forget(id);
        if shape.is_selected() {
            shape.deselect(&mut self.sink);
        }
        self.sink.add_class(shape.element(), HIDDEN_CLASS);
        Ok(shape)
    }

    /// Dispatch a pointer event.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down(input) => self.pointer_down(input),
            PointerEvent::Up(input) => self.pointer_up(input),
            PointerEvent::Move { position } => self.pointer_move(position),
        }
    }

    /// Handle a button press.
    pub fn pointer_down(&mut self, input: PointerInput) {
        if input.button != MouseButton::Primary {
            return;
        }
        let point = self.to_local(input.position);
        let result = match self.tools.current_tool {
            ToolMode::Select => self.select_at(point, &input),
            ToolMode::Draw => {
                self.selection.deselect(&mut self.registry, &mut self.sink);
                self.draw_at(point)
            }
        };
        if let Err(e) = result {
            log::warn!("Pointer down aborted: {}", e);
            self.abort_gesture();
        }
    }

    /// Handle pointer motion.
    pub fn pointer_move(&mut self, position: Point) {
        let point = self.to_local(position);
        self.tools.update_cursor(point - self.config.cursor_inset);

        match self.tools.current_tool {
            ToolMode::Select => {
                if self.selection.can_drag() {
                    if let Err(e) =
                        self.selection
                            .drag_to(point, &mut self.registry, &mut self.sink)
                    {
                        log::warn!("Drag aborted: {}", e);
                        self.abort_gesture();
                    }
                } else if self.selection.is_selecting() {
                    self.selection.draw_selection_box_to(point, &mut self.sink);
                }
            }
            ToolMode::Draw => {
                if let Some(shape) = &mut self.current {
                    shape.preview_to(point, &mut self.sink);
                }
            }
        }
    }

    /// Handle a button release.
    pub fn pointer_up(&mut self, input: PointerInput) {
        let point = self.to_local(input.position);
        let result = match input.button {
            MouseButton::Secondary => self.commit_current().map(|_| ()),
            MouseButton::Primary => match self.tools.current_tool {
                ToolMode::Select => self.finish_select_gesture(),
                ToolMode::Draw => self.finish_span(point),
            },
            MouseButton::Auxiliary => Ok(()),
        };
        if let Err(e) = result {
            log::warn!("Pointer up aborted: {}", e);
            self.abort_gesture();
        }
    }

    /// Move the shape being drawn into the registry.
    ///
    /// Returns `None` when nothing was being drawn.
    pub fn commit_current(&mut self) -> CanvasResult<Option<ShapeId>> {
        let Some(mut shape) = self.current.take() else {
            return Ok(None);
        };
        shape.finish_draw(&mut self.sink);
        let element = shape.element();
        match self.registry.add(shape) {
            Ok(id) => {
                log::debug!("Committed shape {}", id);
                Ok(Some(id))
            }
            Err(e) => {
                self.sink.add_class(element, HIDDEN_CLASS);
                Err(e)
            }
        }
    }

    /// Drop the shape being drawn, hiding its element.
    pub fn abort_current(&mut self) {
        if let Some(shape) = self.current.take() {
            log::debug!("Discarding unfinished {} {}", shape.kind(), shape.id());
            self.sink.add_class(shape.element(), HIDDEN_CLASS);
        }
    }

    fn select_at(&mut self, point: Point, input: &PointerInput) -> CanvasResult<()> {
        match self.hit(point, input.target) {
            Some(id) => {
                if !input.modifiers.ctrl && !self.selection.is_selected(id) {
                    self.selection.deselect(&mut self.registry, &mut self.sink);
                }
                self.selection
                    .select(&[id], &mut self.registry, &mut self.sink)?;
                self.selection
                    .start_drag(point, &mut self.registry, &mut self.sink)
            }
            None => {
                self.selection.deselect(&mut self.registry, &mut self.sink);
                self.selection.start_selection_box(point, &mut self.sink)
            }
        }
    }

    fn draw_at(&mut self, point: Point) -> CanvasResult<()> {
        let kind = self.tools.current_shape;
        if let Some(shape) = &mut self.current {
            if kind.is_multi_point() && shape.kind() == kind {
                return shape.push_vertex(point, &mut self.sink);
            }
        }
        // A span shape whose release never arrived, or a leftover of another kind.
        self.abort_current();

        let mut shape = Shape::new(kind, self.tools.style_for(kind), &mut self.sink);
        let root = self.sink.root();
        self.sink.append_child(root, shape.element());
        shape.start_draw(point, &mut self.sink);
        log::debug!("Started {} {}", kind, shape.id());
        self.current = Some(shape);
        Ok(())
    }

    fn finish_span(&mut self, point: Point) -> CanvasResult<()> {
        let Some(shape) = self.current.as_mut().filter(|s| !s.kind().is_multi_point()) else {
            return Ok(());
        };
        shape.draw_to(point, &mut self.sink);
        self.commit_current().map(|_| ())
    }

    fn finish_select_gesture(&mut self) -> CanvasResult<()> {
        if self.selection.is_dragging() {
            self.selection.end_drag(&mut self.registry, &mut self.sink)?;
        }
        if self.selection.is_selecting() {
            self.selection
                .end_selection_box(&mut self.registry, &mut self.sink)?;
        }
        Ok(())
    }

    /// Shape under the pointer: the host's hint if it is registered,
    /// otherwise the topmost geometric hit.
    fn hit(&self, point: Point, target: Option<ShapeId>) -> Option<ShapeId> {
        target
            .filter(|&id| self.registry.contains(id))
            .or_else(|| self.registry.shape_at(point, self.config.hit_tolerance))
    }

    /// Leave every gesture in a consistent state after an error.
    fn abort_gesture(&mut self) {
        self.abort_current();
        if self.selection.is_dragging() {
            if let Err(e) = self.selection.end_drag(&mut self.registry, &mut self.sink) {
                log::warn!("Drag ended with missing shape: {}", e);
            }
        }
        if self.selection.is_selecting() {
            if let Err(e) = self
                .selection
                .end_selection_box(&mut self.registry, &mut self.sink)
            {
                log::warn!("Selection box ended with error: {}", e);
            }
        }
    }

    fn apply_view_box(&mut self) {
        let root = self.sink.root();
        let view_box = format!(
            "0 0 {} {}",
            format_number(self.layout.size.width),
            format_number(self.layout.size.height)
        );
        self.sink.set_attribute(root, "viewBox", &view_box);
    }
}

impl<S: RenderSink + Default> Default for Canvas<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}
