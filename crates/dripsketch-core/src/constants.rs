//! Design constants shared across the dripsketch crates.
//!
//! World units are abstract layout units (the billing pages treat them as
//! screen pixels at 1:1 zoom).

/// Preview viewport width used by the print/preview renderer.
pub const PREVIEW_WIDTH: f64 = 660.0;

/// Preview viewport height used by the print/preview renderer.
pub const PREVIEW_HEIGHT: f64 = 260.0;

/// Padding in world units added around the layout bounding box before the
/// auto-fit scale is computed. Applied before the division so a single
/// point-like shape still yields a positive box.
pub const FIT_PADDING: f64 = 20.0;

/// Floor for width/height/radius when a transform is baked into geometry.
/// Prevents degenerate, invisible shapes.
pub const MIN_SHAPE_SIZE: f64 = 5.0;

/// Hit-test tolerance in world units at 1:1 zoom.
pub const HIT_TOLERANCE: f64 = 3.0;

/// Default interactive canvas size.
pub const DEFAULT_CANVAS_WIDTH: f64 = 900.0;
pub const DEFAULT_CANVAS_HEIGHT: f64 = 420.0;

/// Zoom clamp range for the interactive viewport.
pub const MIN_ZOOM: f64 = 0.1;
pub const MAX_ZOOM: f64 = 50.0;

// Creation defaults. Any fixed, visible-on-canvas geometry satisfies the
// contract; these mirror the sizes the billing forms were drawn with.

/// Default well center and radius.
pub const DEFAULT_WELL_X: f64 = 80.0;
pub const DEFAULT_WELL_Y: f64 = 80.0;
pub const DEFAULT_WELL_RADIUS: f64 = 18.0;

/// Default farm border rectangle.
pub const DEFAULT_BORDER_X: f64 = 40.0;
pub const DEFAULT_BORDER_Y: f64 = 40.0;
pub const DEFAULT_BORDER_WIDTH: f64 = 320.0;
pub const DEFAULT_BORDER_HEIGHT: f64 = 200.0;

/// Default placement and size for valve/filter/flush icons.
pub const DEFAULT_ICON_X: f64 = 120.0;
pub const DEFAULT_ICON_Y: f64 = 100.0;
pub const DEFAULT_ICON_SIZE: f64 = 32.0;

/// Stroke defaults per pipe kind.
pub const MAIN_PIPE_STROKE: &str = "#1f6fd0";
pub const MAIN_PIPE_WIDTH: f64 = 6.0;
pub const LATERAL_PIPE_STROKE: &str = "#2e9e44";
pub const LATERAL_PIPE_WIDTH: f64 = 3.0;
pub const SUB_PIPE_STROKE: &str = "#5b5b5b";
pub const SUB_PIPE_WIDTH: f64 = 2.0;
/// Sub pipes (drip lines) render dashed by default.
pub const SUB_PIPE_DASH: [f64; 2] = [6.0, 4.0];
