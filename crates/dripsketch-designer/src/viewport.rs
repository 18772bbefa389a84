//! Viewport and coordinate transformation for canvas rendering.
//!
//! Handles conversion between pixel coordinates (screen space) and world
//! coordinates (layout space), plus the auto-fit used by the print
//! preview. Both spaces are y-down; world coordinates map 1:1 to pixels
//! at zoom 1 with zero offset.

use std::fmt;

use dripsketch_core::constants;

use crate::shapes::{layout_bounds, LayoutShape, Point};

/// Represents the viewport transformation state (zoom and offset).
#[derive(Debug, Clone)]
pub struct Viewport {
    zoom: f64,
    offset_x: f64,
    offset_y: f64,
    canvas_width: f64,
    canvas_height: f64,
}

impl Viewport {
    /// Creates a new viewport with initial dimensions at 1:1 zoom.
    pub fn new(canvas_width: f64, canvas_height: f64) -> Self {
        Self {
            zoom: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
            canvas_width,
            canvas_height,
        }
    }

    /// Gets the canvas width.
    pub fn canvas_width(&self) -> f64 {
        self.canvas_width
    }

    /// Gets the canvas height.
    pub fn canvas_height(&self) -> f64 {
        self.canvas_height
    }

    /// Sets the canvas dimensions (typically called when the host surface
    /// resizes).
    pub fn set_canvas_size(&mut self, width: f64, height: f64) {
        self.canvas_width = width;
        self.canvas_height = height;
    }

    /// Gets the current zoom level (1.0 = 100%).
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Sets the zoom level, constrained to the supported range.
    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom >= constants::MIN_ZOOM && zoom <= constants::MAX_ZOOM {
            self.zoom = zoom;
        }
    }

    /// Gets the offset (X coordinate).
    pub fn offset_x(&self) -> f64 {
        self.offset_x
    }

    /// Gets the offset (Y coordinate).
    pub fn offset_y(&self) -> f64 {
        self.offset_y
    }

    /// Sets the offset.
    pub fn set_offset(&mut self, x: f64, y: f64) {
        self.offset_x = x;
        self.offset_y = y;
    }

    /// Pans by a delta amount in pixels.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    /// Resets to 1:1 zoom at the origin.
    pub fn reset(&mut self) {
        self.zoom = 1.0;
        self.offset_x = 0.0;
        self.offset_y = 0.0;
    }

    /// Converts world coordinates to pixel coordinates.
    ///
    /// ```text
    /// pixel = world * zoom + offset
    /// ```
    pub fn world_to_pixel(&self, world_x: f64, world_y: f64) -> (f64, f64) {
        (
            world_x * self.zoom + self.offset_x,
            world_y * self.zoom + self.offset_y,
        )
    }

    /// Converts pixel coordinates to world coordinates.
    pub fn pixel_to_world(&self, pixel_x: f64, pixel_y: f64) -> Point {
        Point::new(
            (pixel_x - self.offset_x) / self.zoom,
            (pixel_y - self.offset_y) / self.zoom,
        )
    }

    /// Fits the given shapes into the viewport.
    ///
    /// The layout bounding box is padded on all sides (clamped so the
    /// padded origin never goes negative), then scaled by
    /// `min(view_w / box_w, view_h / box_h, 1.0)` - content is never
    /// upscaled past 1:1 - and centered.
    ///
    /// Returns `false` for an empty list, leaving the viewport untouched;
    /// the caller renders the empty-state placeholder instead.
    pub fn fit_to_shapes(&mut self, shapes: &[LayoutShape]) -> bool {
        let Some((min_x, min_y, max_x, max_y)) = layout_bounds(shapes) else {
            return false;
        };

        // Pad before computing the scale so a lone point-like shape still
        // produces a positive box.
        let min_x = (min_x - constants::FIT_PADDING).max(0.0);
        let min_y = (min_y - constants::FIT_PADDING).max(0.0);
        let max_x = max_x + constants::FIT_PADDING;
        let max_y = max_y + constants::FIT_PADDING;

        let box_w = max_x - min_x;
        let box_h = max_y - min_y;

        let scale = (self.canvas_width / box_w)
            .min(self.canvas_height / box_h)
            .min(1.0);

        self.zoom = scale;
        self.offset_x = -min_x * scale + (self.canvas_width - box_w * scale) / 2.0;
        self.offset_y = -min_y * scale + (self.canvas_height - box_h * scale) / 2.0;
        true
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Zoom: {:.2}x | Offset: ({:.1}, {:.1})",
            self.zoom, self.offset_x, self.offset_y
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(
            constants::DEFAULT_CANVAS_WIDTH,
            constants::DEFAULT_CANVAS_HEIGHT,
        )
    }
}
