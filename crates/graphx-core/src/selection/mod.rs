//! Selection service: which shapes are selected, and the gestures acting on them.
//!
//! The selection holds ids only. Every shape access goes through the
//! [`ObjectRegistry`], so removing a shape from the registry is what ends its
//! life; a stale id left here is skipped (and reported) rather than kept alive.

mod marquee;

pub use marquee::{SelectionBox, SELECTION_BOX_CLASS};

use crate::error::{CanvasError, CanvasResult};
use crate::registry::ObjectRegistry;
use crate::render::RenderSink;
use crate::shapes::ShapeId;
use crate::style::StyleChange;
use crate::tools::ToolEvent;
use kurbo::{Point, Rect, Vec2};
use std::collections::HashSet;
use std::fmt;

/// Pointer gestures the selection service drives. At most one runs at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gesture {
    /// Moving the selected shapes.
    Drag,
    /// Rubber-band selecting.
    SelectionBox,
}

impl fmt::Display for Gesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gesture::Drag => f.write_str("drag"),
            Gesture::SelectionBox => f.write_str("selection box"),
        }
    }
}

/// State for an active multi-shape drag.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    /// Pointer position where the drag started.
    pub origin: Point,
    /// Last pointer position seen.
    pub current: Point,
    /// Shapes captured when the drag started.
    pub shapes: Vec<ShapeId>,
}

impl DragSession {
    /// Offset from the drag origin.
    pub fn delta(&self) -> Vec2 {
        self.current - self.origin
    }
}

/// Tracks the selected shapes and fans operations out to them.
#[derive(Debug, Clone)]
pub struct SelectionService {
    selected: Vec<ShapeId>,
    index: HashSet<ShapeId>,
    drag: Option<DragSession>,
    marquee: SelectionBox,
}

impl SelectionService {
    /// Create an empty selection. The rubber-band element is added to the sink root.
    pub fn new(sink: &mut dyn RenderSink) -> Self {
        Self {
            selected: Vec::new(),
            index: HashSet::new(),
            drag: None,
            marquee: SelectionBox::new(sink),
        }
    }

    /// Add shapes to the selection. Prior selection is kept.
    ///
    /// Fails without selecting anything if any id is not registered.
    pub fn select(
        &mut self,
        ids: &[ShapeId],
        registry: &mut ObjectRegistry,
        sink: &mut dyn RenderSink,
    ) -> CanvasResult<()> {
        if let Some(&missing) = ids.iter().find(|&&id| !registry.contains(id)) {
            return Err(CanvasError::NotFound(missing));
        }
        for &id in ids {
            if let Some(shape) = registry.get_mut(id) {
                shape.select(sink);
            }
            if self.index.insert(id) {
                self.selected.push(id);
            }
        }
        Ok(())
    }

    /// Deselect every selected shape and clear the selection.
    pub fn deselect(&mut self, registry: &mut ObjectRegistry, sink: &mut dyn RenderSink) {
        for id in self.selected.drain(..) {
            match registry.get_mut(id) {
                Some(shape) => shape.deselect(sink),
                None => log::warn!("Dropping stale selection entry {}", id),
            }
        }
        self.index.clear();
    }

    pub fn is_selected(&self, id: ShapeId) -> bool {
        self.index.contains(&id)
    }

    /// Selected ids in selection order.
    pub fn selected_ids(&self) -> &[ShapeId] {
        &self.selected
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Drop an id that is leaving the registry.
    pub fn forget(&mut self, id: ShapeId) {
        if self.index.remove(&id) {
            self.selected.retain(|&s| s != id);
        }
        if let Some(drag) = &mut self.drag {
            drag.shapes.retain(|&s| s != id);
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn is_selecting(&self) -> bool {
        self.marquee.is_active()
    }

    /// Whether pointer moves should currently move shapes.
    pub fn can_drag(&self) -> bool {
        self.is_dragging() && !self.is_empty()
    }

    /// The active drag, if any.
    pub fn drag_session(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    /// The rubber-band rectangle.
    pub fn selection_box(&self) -> &SelectionBox {
        &self.marquee
    }

    /// Start dragging every selected shape from `point`.
    ///
    /// A drag whose release never arrived is committed first.
    pub fn start_drag(
        &mut self,
        point: Point,
        registry: &mut ObjectRegistry,
        sink: &mut dyn RenderSink,
    ) -> CanvasResult<()> {
        if self.is_selecting() {
            return Err(CanvasError::GestureInProgress {
                active: Gesture::SelectionBox,
                requested: Gesture::Drag,
            });
        }
        if self.is_dragging() {
            log::debug!("Committing unreleased drag");
            self.end_drag(registry, sink)?;
        }
        self.ensure_registered(&self.selected, registry)?;
        for &id in &self.selected {
            if let Some(shape) = registry.get_mut(id) {
                shape.start_drag(point);
            }
        }
        log::debug!("Drag started with {} shape(s)", self.selected.len());
        self.drag = Some(DragSession {
            origin: point,
            current: point,
            shapes: self.selected.clone(),
        });
        Ok(())
    }

    /// Show every dragged shape offset to `point`. No-op outside a drag.
    pub fn drag_to(
        &mut self,
        point: Point,
        registry: &mut ObjectRegistry,
        sink: &mut dyn RenderSink,
    ) -> CanvasResult<()> {
        let Some(drag) = &mut self.drag else {
            return Ok(());
        };
        if let Some(&missing) = drag.shapes.iter().find(|&&id| !registry.contains(id)) {
            return Err(CanvasError::NotFound(missing));
        }
        drag.current = point;
        for &id in &drag.shapes {
            if let Some(shape) = registry.get_mut(id) {
                shape.drag_to(point, sink);
            }
        }
        Ok(())
    }

    /// Commit the drag on every shape still registered.
    ///
    /// Shapes that vanished mid-drag are reported after the others are committed.
    pub fn end_drag(
        &mut self,
        registry: &mut ObjectRegistry,
        sink: &mut dyn RenderSink,
    ) -> CanvasResult<()> {
        let Some(drag) = self.drag.take() else {
            return Ok(());
        };
        let mut missing = None;
        for id in drag.shapes {
            match registry.get_mut(id) {
                Some(shape) => shape.end_drag(sink),
                None => missing = missing.or(Some(id)),
            }
        }
        log::debug!("Drag ended at delta {:?}", drag.current - drag.origin);
        match missing {
            Some(id) => Err(CanvasError::NotFound(id)),
            None => Ok(()),
        }
    }

    /// Abandon any running gesture.
    ///
    /// Dragged shapes snap back to their committed geometry and the selection
    /// box is hidden without selecting anything.
    pub fn cancel_gestures(&mut self, registry: &mut ObjectRegistry, sink: &mut dyn RenderSink) {
        if let Some(drag) = self.drag.take() {
            for id in drag.shapes {
                if let Some(shape) = registry.get_mut(id) {
                    shape.cancel_drag(sink);
                }
            }
            log::debug!("Drag cancelled");
        }
        if self.marquee.end_draw(sink).is_some() {
            log::debug!("Selection box cancelled");
        }
    }

    /// Start a rubber-band gesture at `point`.
    pub fn start_selection_box(
        &mut self,
        point: Point,
        sink: &mut dyn RenderSink,
    ) -> CanvasResult<()> {
        if self.is_dragging() {
            return Err(CanvasError::GestureInProgress {
                active: Gesture::Drag,
                requested: Gesture::SelectionBox,
            });
        }
        self.marquee.start_draw(point, sink);
        Ok(())
    }

    pub fn draw_selection_box_to(&mut self, point: Point, sink: &mut dyn RenderSink) {
        self.marquee.draw_to(point, sink);
    }

    /// Finish the rubber band and select every shape it fully contains.
    ///
    /// Returns the newly selected ids in registry order.
    pub fn end_selection_box(
        &mut self,
        registry: &mut ObjectRegistry,
        sink: &mut dyn RenderSink,
    ) -> CanvasResult<Vec<ShapeId>> {
        let Some(rect) = self.marquee.end_draw(sink) else {
            return Ok(Vec::new());
        };
        let ids = Self::shapes_within(rect, registry);
        self.select(&ids, registry, sink)?;
        log::debug!("Selection box {:?} selected {} shape(s)", rect, ids.len());
        Ok(ids)
    }

    /// Shapes whose rendered bounds lie entirely inside `rect` (edges inclusive).
    pub fn shapes_within(rect: Rect, registry: &ObjectRegistry) -> Vec<ShapeId> {
        registry
            .iter()
            .filter(|shape| {
                let b = shape.rendered_bounds();
                b.x0 >= rect.x0 && b.y0 >= rect.y0 && b.x1 <= rect.x1 && b.y1 <= rect.y1
            })
            .map(|shape| shape.id())
            .collect()
    }

    /// Apply a style change to every selected shape.
    pub fn apply_style_change(
        &mut self,
        change: &StyleChange,
        registry: &mut ObjectRegistry,
        sink: &mut dyn RenderSink,
    ) {
        for &id in &self.selected {
            match registry.get_mut(id) {
                Some(shape) => shape.update_style(change, sink),
                None => log::warn!("Skipping style change for stale selection entry {}", id),
            }
        }
    }

    /// React to a tool input notification: mode changes cancel gestures and
    /// deselect, style changes fan out to the selection.
    pub fn handle_tool_event(
        &mut self,
        event: &ToolEvent,
        registry: &mut ObjectRegistry,
        sink: &mut dyn RenderSink,
    ) {
        match event {
            ToolEvent::ToolChanged(_) | ToolEvent::ShapeChanged(_) => {
                self.cancel_gestures(registry, sink);
                self.deselect(registry, sink);
            }
            _ => {
                if let Some(change) = event.style_change() {
                    self.apply_style_change(&change, registry, sink);
                }
            }
        }
    }

    fn ensure_registered(&self, ids: &[ShapeId], registry: &ObjectRegistry) -> CanvasResult<()> {
        match ids.iter().find(|&&id| !registry.contains(id)) {
            Some(&id) => Err(CanvasError::NotFound(id)),
            None => Ok(()),
        }
    }
}
