//! Canvas for one layout-being-edited session.
//!
//! The canvas is the sole owner and mutator of its shape list; every
//! operation is a total function. Mutations on ids that do not exist are
//! caller bugs, so they degrade to logged no-ops instead of surfacing
//! errors (the render pass and the external save path must never be
//! blanked by one bad call).

use dripsketch_core::constants;

use crate::selection_manager::SelectionManager;
use crate::shape_store::ShapeStore;
use crate::shapes::{LayoutShape, Point, Shape, ShapeKind};
use crate::viewport::Viewport;

/// Final geometry of a transform-handle drag, in the node coordinates the
/// host toolkit reports when the handles are released: the new position,
/// the accumulated scale factors and the rotation. The canvas bakes the
/// scale into width/height/radius immediately; it is never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeTransform {
    pub x: f64,
    pub y: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    pub rotation: f64,
}

impl ShapeTransform {
    /// A pure translation to (x, y).
    pub fn move_to(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            scale_x: 1.0,
            scale_y: 1.0,
            rotation: 0.0,
        }
    }
}

/// Canvas state managing the shapes and selection of one editing session.
#[derive(Debug, Clone, Default)]
pub struct Canvas {
    store: ShapeStore,
    selection: SelectionManager,
    viewport: Viewport,
}

impl Canvas {
    /// Creates a new empty canvas with the default viewport.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a canvas with specified viewport dimensions.
    pub fn with_size(width: f64, height: f64) -> Self {
        Self {
            store: ShapeStore::new(),
            selection: SelectionManager::new(),
            viewport: Viewport::new(width, height),
        }
    }

    /// Returns the number of shapes on the canvas.
    pub fn shape_count(&self) -> usize {
        self.store.len()
    }

    /// Gets a reference to a shape by id.
    pub fn get_shape(&self, id: &str) -> Option<&LayoutShape> {
        self.store.get(id)
    }

    /// Gets all shapes in draw order.
    pub fn shapes(&self) -> impl DoubleEndedIterator<Item = &LayoutShape> {
        self.store.iter()
    }

    /// Adds a shape of the given kind with default geometry and selects
    /// it (the toolbar "add" action). Pipe kinds are normally created via
    /// [`Canvas::begin_pipe`]; asked for one anyway, this still succeeds
    /// with the default zero-length pipe.
    pub fn add_shape(&mut self, kind: ShapeKind) -> String {
        if kind.is_pipe() {
            tracing::warn!("pipe kind {kind} added via toolbar; expected a draw gesture");
        }
        let shape = LayoutShape::create(kind);
        let id = shape.id.clone();
        self.store.push(shape);
        self.selection.set_selected_id(Some(id.clone()));
        id
    }

    /// Appends a zero-length pipe at (x, y) - the start of a draw gesture.
    pub fn begin_pipe(&mut self, kind: ShapeKind, x: f64, y: f64) -> String {
        let shape = LayoutShape::create_pipe_at(kind, x, y);
        let id = shape.id.clone();
        self.store.push(shape);
        self.selection.set_selected_id(Some(id.clone()));
        id
    }

    /// Replaces only the position fields of the shape with the matching
    /// id. Pipes carry no position fields; they move via
    /// [`Canvas::translate_shape`].
    pub fn update_position(&mut self, id: &str, x: f64, y: f64) {
        match self.store.get_mut(id).map(|s| &mut s.shape) {
            Some(Shape::Well(w)) => {
                w.x = x;
                w.y = y;
            }
            Some(Shape::Border(b)) => {
                b.x = x;
                b.y = y;
            }
            Some(Shape::ValveImage(i)) | Some(Shape::FilterImage(i))
            | Some(Shape::FlushImage(i)) => {
                i.x = x;
                i.y = y;
            }
            Some(_) => {
                tracing::debug!("update_position on pipe {id} ignored");
            }
            None => {
                tracing::warn!("update_position: no shape with id {id}");
            }
        }
    }

    /// Moves a shape by a drag delta. Works for every variant; pipes
    /// translate all their points.
    pub fn translate_shape(&mut self, id: &str, dx: f64, dy: f64) {
        match self.store.get_mut(id) {
            Some(s) => s.shape.translate(dx, dy),
            None => tracing::warn!("translate_shape: no shape with id {id}"),
        }
    }

    /// Replaces the end point of an in-progress pipe draw.
    pub fn update_pipe_end(&mut self, id: &str, x: f64, y: f64) {
        match self.store.get_mut(id).map(|s| &mut s.shape) {
            Some(Shape::MainPipe(p)) | Some(Shape::LateralPipe(p)) | Some(Shape::SubPipe(p)) => {
                p.set_end(x, y);
            }
            Some(_) => tracing::warn!("update_pipe_end on non-pipe shape {id}"),
            None => tracing::warn!("update_pipe_end: no shape with id {id}"),
        }
    }

    /// Bakes a finished transform-handle drag into the shape's geometry.
    ///
    /// Rect-like shapes take x, y, width, height and rotation with sizes
    /// floored at the minimum; wells take x, y, radius and rotation.
    /// Transform-by-scale is unsupported for pipes (handle semantics for a
    /// polyline are ambiguous) - only the positional delta is applied.
    pub fn update_transform(&mut self, id: &str, t: ShapeTransform) {
        let Some(layout_shape) = self.store.get_mut(id) else {
            tracing::warn!("update_transform: no shape with id {id}");
            return;
        };
        match &mut layout_shape.shape {
            Shape::Well(w) => {
                w.x = t.x;
                w.y = t.y;
                w.radius = (w.radius * t.scale_x.abs()).max(constants::MIN_SHAPE_SIZE);
                w.rotation = t.rotation;
            }
            Shape::Border(b) => {
                b.x = t.x;
                b.y = t.y;
                b.width = (b.width * t.scale_x.abs()).max(constants::MIN_SHAPE_SIZE);
                b.height = (b.height * t.scale_y.abs()).max(constants::MIN_SHAPE_SIZE);
                b.rotation = t.rotation;
            }
            Shape::ValveImage(i) | Shape::FilterImage(i) | Shape::FlushImage(i) => {
                i.x = t.x;
                i.y = t.y;
                i.width = (i.width * t.scale_x.abs()).max(constants::MIN_SHAPE_SIZE);
                i.height = (i.height * t.scale_y.abs()).max(constants::MIN_SHAPE_SIZE);
                i.rotation = t.rotation;
            }
            Shape::MainPipe(p) | Shape::LateralPipe(p) | Shape::SubPipe(p) => {
                let (min_x, min_y, _, _) = p.bounds();
                p.translate(t.x - min_x, t.y - min_y);
                tracing::debug!("update_transform on pipe {id}: translation applied, scale ignored");
            }
        }
    }

    /// Removes a shape by id. Clears the selection if it pointed at it.
    pub fn remove_shape(&mut self, id: &str) -> Option<LayoutShape> {
        let removed = self.store.remove(id);
        if removed.is_some() && self.selection.selected_id() == Some(id) {
            self.selection.clear();
        }
        removed
    }

    /// Removes the selected shape and clears the selection. No-op when
    /// nothing is selected.
    pub fn delete_selected(&mut self) {
        let Some(id) = self.selection.selected_id().map(String::from) else {
            return;
        };
        let _ = self.store.remove(&id);
        self.selection.clear();
    }

    /// Selects the topmost shape at the given world point, or clears the
    /// selection when the point hits nothing.
    pub fn select_at(&mut self, point: &Point) -> Option<String> {
        let tolerance = constants::HIT_TOLERANCE / self.viewport.zoom();
        self.selection.select_at(&self.store, point, tolerance)
    }

    /// Selects a shape by id (no-op when the id is unknown).
    pub fn select_shape(&mut self, id: &str) {
        if self.store.contains(id) {
            self.selection.set_selected_id(Some(id.to_string()));
        } else {
            tracing::warn!("select_shape: no shape with id {id}");
        }
    }

    /// Gets the selected shape id.
    pub fn selected_id(&self) -> Option<&str> {
        self.selection.selected_id()
    }

    /// Deselects any selected shape.
    pub fn deselect(&mut self) {
        self.selection.clear();
    }

    /// Returns the current shape list verbatim, order preserved, for the
    /// external caller to persist.
    pub fn export_layout(&self) -> Vec<LayoutShape> {
        self.store.as_slice().to_vec()
    }

    /// Replaces the canvas contents with a loaded shape list.
    pub fn load_layout(&mut self, shapes: Vec<LayoutShape>) {
        self.store.replace_all(shapes);
        self.selection.clear();
    }

    /// Clears all shapes and the selection.
    pub fn clear(&mut self) {
        self.store.clear();
        self.selection.clear();
    }

    /// Fits the viewport to the current shapes. Returns false on an empty
    /// canvas.
    pub fn fit_all_shapes(&mut self) -> bool {
        self.viewport.fit_to_shapes(self.store.as_slice())
    }

    /// Gets a reference to the viewport for coordinate transformations.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Gets a mutable reference to the viewport.
    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }
}
