//! # Dripsketch
//!
//! Farm drip-irrigation layout designer for agricultural dealer billing
//! tools: sketch wells, pipes, valves, filters and flush points on a 2D
//! canvas, persist the shape list as a JSON blob, and render auto-fit
//! previews for printed quotations.
//!
//! ## Architecture
//!
//! Dripsketch is organized as a workspace:
//!
//! 1. **dripsketch-core** - shared constants and error types
//! 2. **dripsketch-designer** - shape model, canvas, editor gestures,
//!    viewport, preview renderer, standard layout templates,
//!    serialization
//! 3. **dripsketch** - this facade crate plus the preview utility binary

pub use dripsketch_core::{constants, Error, Result};

pub use dripsketch_designer::{
    get_layout_by_key, instantiate, list_layout_keys, render_preview, shapes_from_json_lenient,
    shapes_to_json, Border, Canvas, EditorState, Gesture, IconShape, LayoutDocument, LayoutShape,
    Pipe, Point, SelectionManager, Shape, ShapeKind, ShapeStore, ShapeTransform, StandardLayout,
    Tool, Viewport, Well,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with console output and `RUST_LOG`
/// environment variable support.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
