//! # Dripsketch Designer
//!
//! The layout-designer core behind the dealer billing pages: a 2D
//! diagramming canvas for sketching farm drip-irrigation layouts.
//!
//! ## Core Components
//!
//! - **Shapes**: wells, farm borders, pipes (main/lateral/sub) and
//!   valve/filter/flush icons, kept as a tagged union with per-variant
//!   geometry
//! - **Canvas**: owns the shape list and selection for one editing session
//!   and exposes the mutation contracts (add, drag, transform, delete)
//! - **Editor state**: the pointer-gesture state machine (arm a pipe tool,
//!   draw, drag)
//! - **Viewport**: world/pixel transforms and the auto-fit used by the
//!   print preview
//! - **Renderer**: rasterizes a shape list into an image for preview
//! - **Templates**: the read-only catalog of standard starting layouts
//! - **Serialization**: the JSON record format the billing backend stores
//!   as an opaque blob
//!
//! ## Architecture
//!
//! ```text
//! EditorState (gestures, armed tool)
//!   └── Canvas (shape list + selection)
//!         ├── ShapeStore (ordered, insertion order = z-order)
//!         ├── SelectionManager (single selection)
//!         └── Viewport (zoom/pan, auto-fit)
//!
//! render_preview (auto-fit rasterization)
//! templates (standard layout catalog)
//! serialization (layout documents / shape lists as JSON)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use dripsketch_designer::{EditorState, ShapeKind};
//!
//! let mut editor = EditorState::new();
//! editor.add_shape(ShapeKind::Well);
//! editor.arm_pipe_tool(ShapeKind::MainPipe);
//! editor.pointer_down(10.0, 10.0);
//! editor.pointer_move(10.0, 200.0);
//! editor.pointer_up();
//! let shapes = editor.export_layout();
//! ```

pub mod canvas;
pub mod editor_state;
pub mod renderer;
pub mod selection_manager;
pub mod serialization;
pub mod shape_store;
pub mod shapes;
pub mod templates;
pub mod viewport;

pub use canvas::{Canvas, ShapeTransform};
pub use editor_state::{EditorState, Gesture, Tool};
pub use renderer::render_preview;
pub use selection_manager::SelectionManager;
pub use serialization::{
    shapes_from_json_lenient, shapes_to_json, LayoutDocument, LayoutMetadata,
};
pub use shape_store::ShapeStore;
pub use shapes::{Border, IconShape, LayoutShape, Pipe, Point, Shape, ShapeKind, Well};
pub use templates::{get_layout_by_key, instantiate, list_layout_keys, StandardLayout};
pub use viewport::Viewport;
