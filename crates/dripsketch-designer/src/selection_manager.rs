use crate::shape_store::ShapeStore;
use crate::shapes::Point;

/// Manages shape selection state and selection operations.
///
/// `SelectionManager` is responsible for:
/// - Tracking the single currently selected shape
/// - Handling point-based selection (clicking on shapes)
/// - Clearing selection on empty-canvas clicks or deletion
///
/// # Selection Model
///
/// At most one shape is selected at a time. Selecting a new shape silently
/// deselects the previous one; there is no multi-select. Selection is kept
/// as an id and resolved against the store on demand, so a stale id (e.g.
/// after an external reload) simply resolves to nothing.
#[derive(Debug, Clone, Default)]
pub struct SelectionManager {
    /// The id of the selected shape, if any.
    selected_id: Option<String>,
}

impl SelectionManager {
    /// Creates a new `SelectionManager` with no selection.
    pub fn new() -> Self {
        Self { selected_id: None }
    }

    /// Returns the id of the selected shape.
    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    /// Sets the selected shape id, or `None` to clear.
    pub fn set_selected_id(&mut self, id: Option<String>) {
        self.selected_id = id;
    }

    /// Clears the selection.
    pub fn clear(&mut self) {
        self.selected_id = None;
    }

    /// Selects the topmost shape at the given point.
    ///
    /// Iterates in reverse draw order so the shape rendered on top wins.
    /// Clicking empty canvas clears the selection.
    ///
    /// # Returns
    ///
    /// The id of the newly selected shape, or `None` if the point hit
    /// nothing.
    pub fn select_at(
        &mut self,
        store: &ShapeStore,
        point: &Point,
        tolerance: f64,
    ) -> Option<String> {
        let hit = store
            .iter()
            .rev()
            .find(|s| s.contains_point(point, tolerance))
            .map(|s| s.id.clone());

        self.selected_id = hit.clone();
        hit
    }
}
