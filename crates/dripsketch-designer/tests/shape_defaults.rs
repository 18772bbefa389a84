//! Tests for shape creation defaults and id allocation.

use std::collections::HashSet;

use dripsketch_core::constants;
use dripsketch_designer::{LayoutShape, Shape, ShapeKind};

#[test]
fn test_create_assigns_matching_kind() {
    for kind in ShapeKind::ALL {
        let shape = LayoutShape::create(kind);
        assert_eq!(shape.kind(), kind, "created shape has wrong kind");
        assert!(!shape.id.is_empty(), "created shape must have an id");
    }
}

#[test]
fn test_create_ids_are_unique() {
    let mut seen = HashSet::new();
    for _ in 0..100 {
        for kind in ShapeKind::ALL {
            let shape = LayoutShape::create(kind);
            assert!(seen.insert(shape.id.clone()), "duplicate id {}", shape.id);
        }
    }
}

#[test]
fn test_well_default_geometry() {
    let shape = LayoutShape::create(ShapeKind::Well);
    let Shape::Well(well) = &shape.shape else {
        panic!("expected a well");
    };
    assert_eq!(well.x, constants::DEFAULT_WELL_X);
    assert_eq!(well.y, constants::DEFAULT_WELL_Y);
    assert_eq!(well.radius, constants::DEFAULT_WELL_RADIUS);
    assert_eq!(well.rotation, 0.0);
}

#[test]
fn test_pipe_created_at_pointer_is_zero_length() {
    let shape = LayoutShape::create_pipe_at(ShapeKind::MainPipe, 42.0, 17.0);
    let Shape::MainPipe(pipe) = &shape.shape else {
        panic!("expected a main pipe");
    };
    assert_eq!(pipe.points, vec![42.0, 17.0, 42.0, 17.0]);
    assert!(pipe.is_degenerate());
    assert_eq!(pipe.stroke, constants::MAIN_PIPE_STROKE);
}

#[test]
fn test_sub_pipe_defaults_to_dashed() {
    let shape = LayoutShape::create_pipe_at(ShapeKind::SubPipe, 0.0, 0.0);
    let Shape::SubPipe(pipe) = &shape.shape else {
        panic!("expected a sub pipe");
    };
    assert_eq!(pipe.dash, constants::SUB_PIPE_DASH.to_vec());
}

#[test]
fn test_kind_wire_names_round_trip() {
    for kind in ShapeKind::ALL {
        assert_eq!(ShapeKind::parse(kind.as_str()), Some(kind));
    }
    assert_eq!(ShapeKind::parse("sprinkler"), None);
}
