//! Tests for the auto-fit viewport math used by the print preview.

use dripsketch_core::constants;
use dripsketch_designer::{LayoutShape, Pipe, Shape, Viewport, Well};
use proptest::prelude::*;

fn fit(shapes: &[LayoutShape]) -> Viewport {
    let mut vp = Viewport::new(constants::PREVIEW_WIDTH, constants::PREVIEW_HEIGHT);
    assert!(vp.fit_to_shapes(shapes), "fit must succeed for non-empty input");
    vp
}

fn assert_shapes_fit(vp: &Viewport, shapes: &[LayoutShape]) {
    for s in shapes {
        let (x1, y1, x2, y2) = s.bounds();
        for (wx, wy) in [(x1, y1), (x2, y2)] {
            let (px, py) = vp.world_to_pixel(wx, wy);
            assert!(
                px >= -0.5 && px <= constants::PREVIEW_WIDTH + 0.5,
                "x {} out of viewport for shape {}",
                px,
                s.id
            );
            assert!(
                py >= -0.5 && py <= constants::PREVIEW_HEIGHT + 0.5,
                "y {} out of viewport for shape {}",
                py,
                s.id
            );
        }
    }
}

#[test]
fn test_fit_never_upscales() {
    // A tiny layout: the box (with padding) is far smaller than 660x260.
    let shapes = vec![LayoutShape::new(
        "w",
        Shape::Well(Well::new(50.0, 50.0, 10.0)),
    )];
    let vp = fit(&shapes);
    assert_eq!(vp.zoom(), 1.0, "small content must render 1:1, not zoomed in");
    assert_shapes_fit(&vp, &shapes);
}

#[test]
fn test_fit_scales_down_large_layouts() {
    let shapes = vec![LayoutShape::new(
        "p",
        Shape::MainPipe(Pipe::new(vec![0.0, 0.0, 4000.0, 1500.0], "#1f6fd0", 6.0)),
    )];
    let vp = fit(&shapes);
    assert!(vp.zoom() > 0.0 && vp.zoom() < 1.0, "zoom was {}", vp.zoom());
    assert_shapes_fit(&vp, &shapes);
}

#[test]
fn test_fit_single_point_like_shape() {
    // A lone well has a box that collapses to its radius; the fixed
    // padding keeps the box positive, so the fit must not divide by zero.
    let shapes = vec![LayoutShape::new(
        "w",
        Shape::Well(Well::new(300.0, 300.0, 0.0)),
    )];
    let vp = fit(&shapes);
    assert!(vp.zoom().is_finite());
    assert!(vp.zoom() > 0.0 && vp.zoom() <= 1.0);
    assert_shapes_fit(&vp, &shapes);
}

#[test]
fn test_fit_empty_returns_false() {
    let mut vp = Viewport::new(constants::PREVIEW_WIDTH, constants::PREVIEW_HEIGHT);
    assert!(!vp.fit_to_shapes(&[]));
    assert_eq!(vp.zoom(), 1.0, "a failed fit must leave the viewport alone");
}

#[test]
fn test_fit_centers_content() {
    let shapes = vec![LayoutShape::new(
        "w",
        Shape::Well(Well::new(100.0, 100.0, 20.0)),
    )];
    let vp = fit(&shapes);

    // The padded box center must land on the viewport center.
    let (cx, cy) = vp.world_to_pixel(100.0, 100.0);
    let box_min_x = 100.0 - 20.0 - constants::FIT_PADDING;
    let box_min_y = 100.0 - 20.0 - constants::FIT_PADDING;
    let box_max_x = 100.0 + 20.0 + constants::FIT_PADDING;
    let box_max_y = 100.0 + 20.0 + constants::FIT_PADDING;
    let (px1, py1) = vp.world_to_pixel(box_min_x, box_min_y);
    let (px2, py2) = vp.world_to_pixel(box_max_x, box_max_y);
    assert!(((px1 + px2) / 2.0 - constants::PREVIEW_WIDTH / 2.0).abs() < 1e-6);
    assert!(((py1 + py2) / 2.0 - constants::PREVIEW_HEIGHT / 2.0).abs() < 1e-6);
    // And the well center sits at the box center here, so it is centered too.
    assert!((cx - constants::PREVIEW_WIDTH / 2.0).abs() < 1e-6);
    assert!((cy - constants::PREVIEW_HEIGHT / 2.0).abs() < 1e-6);
}

fn arb_shape() -> impl Strategy<Value = LayoutShape> {
    prop_oneof![
        (100.0..1000.0f64, 100.0..1000.0f64, 0.5..60.0f64).prop_map(|(x, y, r)| {
            LayoutShape::new(LayoutShape::fresh_id(), Shape::Well(Well::new(x, y, r)))
        }),
        (
            0.0..1000.0f64,
            0.0..1000.0f64,
            0.0..1000.0f64,
            0.0..1000.0f64
        )
            .prop_map(|(x1, y1, x2, y2)| {
                LayoutShape::new(
                    LayoutShape::fresh_id(),
                    Shape::LateralPipe(Pipe::new(vec![x1, y1, x2, y2], "#2e9e44", 3.0)),
                )
            }),
    ]
}

proptest! {
    #[test]
    fn prop_fit_scale_in_unit_range_and_content_fits(
        shapes in prop::collection::vec(arb_shape(), 1..12)
    ) {
        let mut vp = Viewport::new(constants::PREVIEW_WIDTH, constants::PREVIEW_HEIGHT);
        prop_assert!(vp.fit_to_shapes(&shapes));
        prop_assert!(vp.zoom() > 0.0 && vp.zoom() <= 1.0, "zoom {}", vp.zoom());

        for s in &shapes {
            let (x1, y1, x2, y2) = s.bounds();
            for (wx, wy) in [(x1, y1), (x2, y2), (x1, y2), (x2, y1)] {
                let (px, py) = vp.world_to_pixel(wx, wy);
                prop_assert!(px >= -0.5 && px <= constants::PREVIEW_WIDTH + 0.5);
                prop_assert!(py >= -0.5 && py <= constants::PREVIEW_HEIGHT + 0.5);
            }
        }
    }
}
