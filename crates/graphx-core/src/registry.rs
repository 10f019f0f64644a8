//! Object registry: the shapes that exist on the canvas.

use crate::error::{CanvasError, CanvasResult};
use crate::shapes::{Shape, ShapeId};
use kurbo::Point;
use std::collections::{HashMap, HashSet};

/// Owns every committed shape, keyed by id.
///
/// Insertion order is the default render/z-order. Ids of removed shapes are
/// retired and can never be added again.
#[derive(Debug, Clone, Default)]
pub struct ObjectRegistry {
    shapes: HashMap<ShapeId, Shape>,
    order: Vec<ShapeId>,
    retired: HashSet<ShapeId>,
}

impl ObjectRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a shape. Fails if its id is present or was used before.
    pub fn add(&mut self, shape: Shape) -> CanvasResult<ShapeId> {
        let id = shape.id();
        if self.shapes.contains_key(&id) || self.retired.contains(&id) {
            return Err(CanvasError::DuplicateId(id));
        }
        self.order.push(id);
        self.shapes.insert(id, shape);
        log::debug!("Registered shape {} ({} total)", id, self.shapes.len());
        Ok(id)
    }

    /// Get a shape by ID.
    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.get(&id)
    }

    /// Get a mutable reference to a shape by ID.
    pub fn get_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.get_mut(&id)
    }

    /// Remove a shape, retiring its id.
    pub fn remove(&mut self, id: ShapeId) -> CanvasResult<Shape> {
        let shape = self.shapes.remove(&id).ok_or(CanvasError::NotFound(id))?;
        self.order.retain(|&shape_id| shape_id != id);
        self.retired.insert(id);
        Ok(shape)
    }

    pub fn contains(&self, id: ShapeId) -> bool {
        self.shapes.contains_key(&id)
    }

    /// Get the number of shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Shapes in insertion order (back to front).
    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.order.iter().filter_map(|id| self.shapes.get(id))
    }

    /// Ids in insertion order.
    pub fn ids(&self) -> &[ShapeId] {
        &self.order
    }

    /// Visit every shape in insertion order.
    pub fn for_each(&self, mut f: impl FnMut(&Shape)) {
        for shape in self.iter() {
            f(shape);
        }
    }

    /// Topmost shape whose committed geometry is hit by `point`.
    pub fn shape_at(&self, point: Point, tolerance: f64) -> Option<ShapeId> {
        self.order
            .iter()
            .rev()
            .find(|id| {
                self.shapes
                    .get(id)
                    .is_some_and(|s| s.hit_test(point, tolerance))
            })
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::MemorySink;
    use crate::shapes::ShapeKind;
    use crate::style::ShapeStyle;

    fn rect(sink: &mut MemorySink, x0: f64, y0: f64, x1: f64, y1: f64) -> Shape {
        let mut shape = Shape::new(
            ShapeKind::Rectangle,
            ShapeStyle::new().with_fill("white"),
            sink,
        );
        shape
            .set_span(Point::new(x0, y0), Point::new(x1, y1), sink)
            .unwrap();
        shape
    }

    #[test]
    fn test_add_and_get() {
        let mut sink = MemorySink::new();
        let mut registry = ObjectRegistry::new();
        assert!(registry.is_empty());

        let id = registry.add(rect(&mut sink, 0.0, 0.0, 10.0, 10.0)).unwrap();
        assert_eq!(registry.len(), 1);
        assert!(registry.contains(id));
        assert_eq!(registry.get(id).map(|s| s.id()), Some(id));
    }

    #[test]
    fn test_get_missing_is_none() {
        let registry = ObjectRegistry::new();
        assert!(registry.get(uuid::Uuid::new_v4()).is_none());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut sink = MemorySink::new();
        let mut registry = ObjectRegistry::new();
        let shape = rect(&mut sink, 0.0, 0.0, 10.0, 10.0);
        let copy = shape.clone();

        let id = registry.add(shape).unwrap();
        assert_eq!(registry.add(copy), Err(CanvasError::DuplicateId(id)));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_removed_id_is_retired() {
        let mut sink = MemorySink::new();
        let mut registry = ObjectRegistry::new();
        let shape = rect(&mut sink, 0.0, 0.0, 10.0, 10.0);
        let id = registry.add(shape).unwrap();

        let removed = registry.remove(id).unwrap();
        assert!(registry.is_empty());
        assert_eq!(registry.add(removed), Err(CanvasError::DuplicateId(id)));
        assert!(registry.is_empty());
        assert_eq!(registry.remove(id).unwrap_err(), CanvasError::NotFound(id));
    }

    #[test]
    fn test_insertion_order() {
        let mut sink = MemorySink::new();
        let mut registry = ObjectRegistry::new();
        let a = registry.add(rect(&mut sink, 0.0, 0.0, 1.0, 1.0)).unwrap();
        let b = registry.add(rect(&mut sink, 0.0, 0.0, 2.0, 2.0)).unwrap();
        let c = registry.add(rect(&mut sink, 0.0, 0.0, 3.0, 3.0)).unwrap();
        registry.remove(b).unwrap();

        assert_eq!(registry.ids(), &[a, c]);
        let mut visited = Vec::new();
        registry.for_each(|s| visited.push(s.id()));
        assert_eq!(visited, vec![a, c]);
    }

    #[test]
    fn test_shape_at_prefers_topmost() {
        let mut sink = MemorySink::new();
        let mut registry = ObjectRegistry::new();
        let below = registry.add(rect(&mut sink, 0.0, 0.0, 100.0, 100.0)).unwrap();
        let above = registry.add(rect(&mut sink, 50.0, 50.0, 150.0, 150.0)).unwrap();

        assert_eq!(registry.shape_at(Point::new(75.0, 75.0), 0.0), Some(above));
        assert_eq!(registry.shape_at(Point::new(25.0, 25.0), 0.0), Some(below));
        assert_eq!(registry.shape_at(Point::new(300.0, 300.0), 0.0), None);
    }
}
