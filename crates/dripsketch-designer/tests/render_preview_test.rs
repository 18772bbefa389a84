//! Tests for the preview rasterizer.

use dripsketch_core::constants;
use dripsketch_designer::templates::get_layout_by_key;
use dripsketch_designer::{render_preview, LayoutShape, Shape, Well};

const WIDTH: u32 = constants::PREVIEW_WIDTH as u32;
const HEIGHT: u32 = constants::PREVIEW_HEIGHT as u32;

/// Counts pixels that differ from the most common (background) color.
fn non_background_pixels(image: &image::RgbImage) -> usize {
    let bg = *image.get_pixel(0, 0);
    image.pixels().filter(|p| **p != bg).count()
}

#[test]
fn test_render_standard_layout_draws_content() {
    let layout = get_layout_by_key("layout_1_vertical_left").unwrap();
    let image = render_preview(&layout.shapes, WIDTH, HEIGHT);
    assert_eq!(image.dimensions(), (WIDTH, HEIGHT));
    assert!(
        non_background_pixels(&image) > 500,
        "a ten-shape layout must leave visible strokes"
    );
}

#[test]
fn test_render_empty_layout_draws_placeholder() {
    let image = render_preview(&[], WIDTH, HEIGHT);
    assert_eq!(image.dimensions(), (WIDTH, HEIGHT));
    let drawn = non_background_pixels(&image);
    assert!(
        drawn > 50,
        "the empty state must render a dashed placeholder frame, drew {drawn} px"
    );
}

#[test]
fn test_render_skips_non_finite_geometry() {
    let shapes = vec![
        LayoutShape::new("bad", Shape::Well(Well::new(f64::NAN, 10.0, 5.0))),
        LayoutShape::new("good", Shape::Well(Well::new(100.0, 100.0, 20.0))),
    ];
    // Must not panic; the bad record is skipped.
    let image = render_preview(&shapes, WIDTH, HEIGHT);
    assert!(non_background_pixels(&image) > 0);
}

#[test]
fn test_render_preview_is_savable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preview.png");

    let layout = get_layout_by_key("layout_5_double_wing").unwrap();
    let image = render_preview(&layout.shapes, WIDTH, HEIGHT);
    image.save(&path).unwrap();

    let on_disk = image::open(&path).unwrap().to_rgb8();
    assert_eq!(on_disk.dimensions(), (WIDTH, HEIGHT));
}
