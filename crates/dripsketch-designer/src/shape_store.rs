//! Ordered storage for the shapes of one layout.
//!
//! Insertion order is draw/z-order: later shapes render on top. Layouts
//! hold tens of shapes at most, so id lookup is a linear scan.

use crate::shapes::LayoutShape;

/// The owning, ordered collection behind a canvas.
#[derive(Debug, Clone, Default)]
pub struct ShapeStore {
    shapes: Vec<LayoutShape>,
}

impl ShapeStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    /// Appends a shape on top of the draw order.
    pub fn push(&mut self, shape: LayoutShape) {
        self.shapes.push(shape);
    }

    /// Gets a shape by id.
    pub fn get(&self, id: &str) -> Option<&LayoutShape> {
        self.shapes.iter().find(|s| s.id == id)
    }

    /// Gets a mutable shape by id.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut LayoutShape> {
        self.shapes.iter_mut().find(|s| s.id == id)
    }

    /// Returns true when a shape with the id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Removes a shape by id, preserving the order of the rest.
    pub fn remove(&mut self, id: &str) -> Option<LayoutShape> {
        let pos = self.shapes.iter().position(|s| s.id == id)?;
        Some(self.shapes.remove(pos))
    }

    /// Iterates in draw order (bottom first).
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &LayoutShape> {
        self.shapes.iter()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    /// Replaces the whole list, e.g. when loading a persisted layout.
    pub fn replace_all(&mut self, shapes: Vec<LayoutShape>) {
        self.shapes = shapes;
    }

    /// The shape list in draw order.
    pub fn as_slice(&self) -> &[LayoutShape] {
        &self.shapes
    }
}
