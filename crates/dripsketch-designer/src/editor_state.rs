//! Editor state for UI integration.
//!
//! Wraps the canvas with the armed tool and the pointer-gesture state
//! machine. Everything runs synchronously inside discrete pointer/UI
//! event handlers on one thread; the editor is the only writer of its
//! shape list for the lifetime of a session.

use dripsketch_core::{Error, Result};

use crate::canvas::{Canvas, ShapeTransform};
use crate::shapes::{LayoutShape, Point, Shape, ShapeKind};
use crate::templates;

/// The armed tool. Only pipe kinds arm a drawing tool; every other shape
/// is placed directly by the toolbar add action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Select,
    Pipe(ShapeKind),
}

/// The active pointer gesture.
#[derive(Debug, Clone, PartialEq)]
pub enum Gesture {
    /// No gesture in progress.
    Idle,
    /// A pipe draw is in progress; the id names the in-progress shape.
    Drawing { id: String },
    /// A shape drag is in progress; `last` is the previous pointer
    /// position, used to compute live deltas.
    Dragging { id: String, last: (f64, f64) },
}

/// Editor session state: the canvas plus tool/gesture bookkeeping.
#[derive(Debug, Clone)]
pub struct EditorState {
    pub canvas: Canvas,
    tool: Tool,
    gesture: Gesture,
    pub layout_name: String,
    pub is_modified: bool,
}

impl EditorState {
    /// Creates a new editor session with an empty canvas.
    pub fn new() -> Self {
        Self {
            canvas: Canvas::new(),
            tool: Tool::Select,
            gesture: Gesture::Idle,
            layout_name: "Untitled".to_string(),
            is_modified: false,
        }
    }

    /// The currently armed tool.
    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// The gesture in progress, if any.
    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    /// Arms a pipe drawing tool. Non-pipe kinds do not arm anything.
    pub fn arm_pipe_tool(&mut self, kind: ShapeKind) {
        if !kind.is_pipe() {
            tracing::warn!("arm_pipe_tool called with non-pipe kind {kind}, ignoring");
            return;
        }
        self.tool = Tool::Pipe(kind);
    }

    /// Returns to the plain selection tool.
    pub fn disarm_tool(&mut self) {
        self.tool = Tool::Select;
    }

    /// Toolbar add: appends a shape with default geometry and selects it.
    /// Stays in the selection tool - only pipes go through a gesture.
    pub fn add_shape(&mut self, kind: ShapeKind) -> String {
        let id = self.canvas.add_shape(kind);
        self.is_modified = true;
        id
    }

    /// Pointer down on the canvas, in world coordinates.
    ///
    /// With a pipe tool armed this starts a draw: a new pipe with both
    /// endpoints at the pointer. Otherwise it hit-tests: a hit selects the
    /// shape and starts a drag, empty canvas clears the selection.
    pub fn pointer_down(&mut self, x: f64, y: f64) {
        match self.tool {
            Tool::Pipe(kind) => {
                let id = self.canvas.begin_pipe(kind, x, y);
                self.gesture = Gesture::Drawing { id };
            }
            Tool::Select => match self.canvas.select_at(&Point::new(x, y)) {
                Some(id) => {
                    self.gesture = Gesture::Dragging { id, last: (x, y) };
                }
                None => {
                    self.gesture = Gesture::Idle;
                }
            },
        }
    }

    /// Pointer move. Updates the in-progress draw or drag; a no-op when
    /// idle.
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        match &mut self.gesture {
            Gesture::Drawing { id } => {
                let id = id.clone();
                self.canvas.update_pipe_end(&id, x, y);
            }
            Gesture::Dragging { id, last } => {
                let (dx, dy) = (x - last.0, y - last.1);
                *last = (x, y);
                let id = id.clone();
                self.canvas.translate_shape(&id, dx, dy);
            }
            Gesture::Idle => {}
        }
    }

    /// Pointer up: finalizes the gesture.
    ///
    /// Ending a draw disarms the pipe tool. A pipe whose endpoints still
    /// coincide (a click without a drag) is discarded rather than kept as
    /// an invisible zero-length segment.
    pub fn pointer_up(&mut self) {
        match std::mem::replace(&mut self.gesture, Gesture::Idle) {
            Gesture::Drawing { id } => {
                self.tool = Tool::Select;
                let degenerate = matches!(
                    self.canvas.get_shape(&id).map(|s| &s.shape),
                    Some(Shape::MainPipe(p)) | Some(Shape::LateralPipe(p))
                        | Some(Shape::SubPipe(p)) if p.is_degenerate()
                );
                if degenerate {
                    let _ = self.canvas.remove_shape(&id);
                } else {
                    self.is_modified = true;
                }
            }
            Gesture::Dragging { .. } => {
                // Position was live-updated during the drag.
                self.is_modified = true;
            }
            Gesture::Idle => {}
        }
    }

    /// Bakes a finished transform-handle drag into the selected shape.
    pub fn apply_transform(&mut self, t: ShapeTransform) {
        let Some(id) = self.canvas.selected_id().map(String::from) else {
            return;
        };
        self.canvas.update_transform(&id, t);
        self.is_modified = true;
    }

    /// Deletes the selected shape. No-op without a selection.
    pub fn delete_selected(&mut self) {
        if self.canvas.selected_id().is_some() {
            self.canvas.delete_selected();
            self.is_modified = true;
        }
    }

    /// The shape list verbatim, for the external caller to persist.
    pub fn export_layout(&self) -> Vec<LayoutShape> {
        self.canvas.export_layout()
    }

    /// Replaces the session contents with a loaded shape list.
    pub fn load_layout(&mut self, shapes: Vec<LayoutShape>) {
        self.canvas.load_layout(shapes);
        self.gesture = Gesture::Idle;
        self.tool = Tool::Select;
        self.is_modified = false;
    }

    /// Starts the session from a standard layout template.
    pub fn load_standard_layout(&mut self, key: &str) -> Result<()> {
        let shapes = templates::instantiate(key).ok_or_else(|| Error::LayoutNotFound {
            key: key.to_string(),
        })?;
        self.load_layout(shapes);
        self.is_modified = true;
        Ok(())
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}
