//! Preview renderer for layout shapes.
//!
//! Rasterizes a shape list into an image buffer using tiny-skia, the way
//! the billing pages show a layout inside the printed quotation: auto-fit
//! to a fixed viewport, each shape drawn as its visual primitive. The
//! renderer never fails - an empty layout renders a dashed placeholder
//! frame, and a record that cannot be drawn is skipped.

use dripsketch_core::constants;
use image::{Rgb, RgbImage};
use tiny_skia::{
    Color, FillRule, Paint, PathBuilder, Pixmap, Stroke, StrokeDash, Transform,
};

use crate::shapes::{rotate_point, LayoutShape, Point, Shape, ShapeKind};
use crate::viewport::Viewport;

fn bg_color() -> Color {
    Color::from_rgba8(252, 252, 249, 255)
}
fn well_color() -> Color {
    Color::from_rgba8(21, 101, 192, 255)
}
fn border_color() -> Color {
    Color::from_rgba8(66, 66, 66, 255)
}
fn valve_color() -> Color {
    Color::from_rgba8(230, 81, 0, 255)
}
fn filter_color() -> Color {
    Color::from_rgba8(106, 27, 154, 255)
}
fn flush_color() -> Color {
    Color::from_rgba8(0, 121, 107, 255)
}
fn placeholder_color() -> Color {
    Color::from_rgba8(158, 158, 158, 255)
}

/// Parses a `#rrggbb` stroke color; anything else falls back to a neutral
/// gray so one bad color never hides a pipe.
fn parse_stroke_color(s: &str) -> Color {
    let hex = s.strip_prefix('#').unwrap_or(s);
    if hex.len() == 6 {
        if let (Ok(r), Ok(g), Ok(b)) = (
            u8::from_str_radix(&hex[0..2], 16),
            u8::from_str_radix(&hex[2..4], 16),
            u8::from_str_radix(&hex[4..6], 16),
        ) {
            return Color::from_rgba8(r, g, b, 255);
        }
    }
    tracing::warn!("unparseable stroke color {s:?}, using gray");
    Color::from_rgba8(120, 120, 120, 255)
}

fn solid_stroke(width: f32) -> Stroke {
    Stroke {
        width,
        ..Default::default()
    }
}

fn dashed_stroke(width: f32, dash: &[f64], zoom: f64) -> Stroke {
    let array: Vec<f32> = dash.iter().map(|d| (d * zoom).max(0.5) as f32).collect();
    Stroke {
        width,
        dash: StrokeDash::new(array, 0.0),
        ..Default::default()
    }
}

/// Builds a pixel-space path for a possibly rotated rectangle.
fn rect_path(
    viewport: &Viewport,
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    rotation: f64,
) -> Option<tiny_skia::Path> {
    let center = Point::new(x + w / 2.0, y + h / 2.0);
    let corners = [
        Point::new(x, y),
        Point::new(x + w, y),
        Point::new(x + w, y + h),
        Point::new(x, y + h),
    ];
    let mut pb = PathBuilder::new();
    for (i, c) in corners.into_iter().enumerate() {
        let rc = rotate_point(c, center, rotation);
        let (px, py) = viewport.world_to_pixel(rc.x, rc.y);
        if i == 0 {
            pb.move_to(px as f32, py as f32);
        } else {
            pb.line_to(px as f32, py as f32);
        }
    }
    pb.close();
    pb.finish()
}

fn pipe_path(viewport: &Viewport, points: &[f64]) -> Option<tiny_skia::Path> {
    let mut pb = PathBuilder::new();
    for (i, pair) in points.chunks_exact(2).enumerate() {
        let (px, py) = viewport.world_to_pixel(pair[0], pair[1]);
        if i == 0 {
            pb.move_to(px as f32, py as f32);
        } else {
            pb.line_to(px as f32, py as f32);
        }
    }
    pb.finish()
}

fn finite_bounds(shape: &LayoutShape) -> bool {
    let (x1, y1, x2, y2) = shape.bounds();
    x1.is_finite() && y1.is_finite() && x2.is_finite() && y2.is_finite()
}

/// Renders the dashed empty-state frame.
fn draw_placeholder(pixmap: &mut Pixmap, width: u32, height: u32) {
    let inset = 12.0f32;
    let mut pb = PathBuilder::new();
    pb.move_to(inset, inset);
    pb.line_to(width as f32 - inset, inset);
    pb.line_to(width as f32 - inset, height as f32 - inset);
    pb.line_to(inset, height as f32 - inset);
    pb.close();
    let Some(path) = pb.finish() else { return };

    let mut paint = Paint::default();
    paint.set_color(placeholder_color());
    paint.anti_alias = true;
    let stroke = Stroke {
        width: 1.5,
        dash: StrokeDash::new(vec![6.0, 4.0], 0.0),
        ..Default::default()
    };
    pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
}

/// Renders a shape list into an image buffer of the given size.
///
/// Auto-fits the content first: the padded bounding box is scaled by at
/// most 1:1 and centered. An empty list yields the placeholder frame.
pub fn render_preview(shapes: &[LayoutShape], width: u32, height: u32) -> RgbImage {
    let Some(mut pixmap) = Pixmap::new(width, height) else {
        return RgbImage::new(width, height);
    };
    pixmap.fill(bg_color());

    let mut viewport = Viewport::new(width as f64, height as f64);
    if !viewport.fit_to_shapes(shapes) {
        draw_placeholder(&mut pixmap, width, height);
        return to_rgb_image(&pixmap, width, height);
    }
    let zoom = viewport.zoom();

    for layout_shape in shapes {
        if !finite_bounds(layout_shape) {
            tracing::warn!(
                "skipping shape {} with non-finite geometry",
                layout_shape.id
            );
            continue;
        }

        let mut paint = Paint::default();
        paint.anti_alias = true;

        match &layout_shape.shape {
            Shape::Well(w) => {
                let (px, py) = viewport.world_to_pixel(w.x, w.y);
                let radius = (w.radius * zoom) as f32;
                if let Some(path) = PathBuilder::from_circle(px as f32, py as f32, radius) {
                    paint.set_color(well_color());
                    pixmap.stroke_path(
                        &path,
                        &paint,
                        &solid_stroke(2.0),
                        Transform::identity(),
                        None,
                    );
                }
            }
            Shape::Border(b) => {
                if let Some(path) =
                    rect_path(&viewport, b.x, b.y, b.width, b.height, b.rotation)
                {
                    paint.set_color(border_color());
                    pixmap.stroke_path(
                        &path,
                        &paint,
                        &dashed_stroke(1.5, &[8.0, 5.0], zoom),
                        Transform::identity(),
                        None,
                    );
                }
            }
            Shape::MainPipe(p) | Shape::LateralPipe(p) | Shape::SubPipe(p) => {
                if let Some(path) = pipe_path(&viewport, &p.points) {
                    paint.set_color(parse_stroke_color(&p.stroke));
                    let width_px = ((p.stroke_width * zoom) as f32).max(1.0);
                    let stroke = if p.dash.is_empty() {
                        solid_stroke(width_px)
                    } else {
                        dashed_stroke(width_px, &p.dash, zoom)
                    };
                    pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
                }
            }
            Shape::ValveImage(i) | Shape::FilterImage(i) | Shape::FlushImage(i) => {
                if let Some(path) =
                    rect_path(&viewport, i.x, i.y, i.width, i.height, i.rotation)
                {
                    let fill = match layout_shape.kind() {
                        ShapeKind::ValveImage => valve_color(),
                        ShapeKind::FilterImage => filter_color(),
                        _ => flush_color(),
                    };
                    paint.set_color(fill);
                    pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);

                    paint.set_color(border_color());
                    pixmap.stroke_path(
                        &path,
                        &paint,
                        &solid_stroke(1.0),
                        Transform::identity(),
                        None,
                    );
                }
            }
        }
    }

    to_rgb_image(&pixmap, width, height)
}

/// Renders at the fixed print-preview size.
pub fn render_standard_preview(shapes: &[LayoutShape]) -> RgbImage {
    render_preview(
        shapes,
        constants::PREVIEW_WIDTH as u32,
        constants::PREVIEW_HEIGHT as u32,
    )
}

// Convert Pixmap to RgbImage
fn to_rgb_image(pixmap: &Pixmap, width: u32, height: u32) -> RgbImage {
    let data = pixmap.data();
    RgbImage::from_fn(width, height, |x, y| {
        let idx = ((y * width + x) * 4) as usize;
        // Ignore alpha, everything is drawn opaque
        Rgb([data[idx], data[idx + 1], data[idx + 2]])
    })
}
