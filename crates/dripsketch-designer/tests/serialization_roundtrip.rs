//! Tests for the layout wire format.

use dripsketch_designer::{
    shapes_from_json_lenient, shapes_to_json, EditorState, LayoutDocument, LayoutShape, Pipe,
    Shape, ShapeKind, Well,
};

#[test]
fn test_shape_records_use_wire_field_names() {
    let well = LayoutShape::new("w-1", Shape::Well(Well::new(80.0, 90.0, 18.0)));
    let value = serde_json::to_value(&well).unwrap();
    assert_eq!(value["id"], "w-1");
    assert_eq!(value["type"], "well");
    assert_eq!(value["x"], 80.0);
    assert_eq!(value["y"], 90.0);
    assert_eq!(value["radius"], 18.0);

    let pipe = LayoutShape::new(
        "p-1",
        Shape::MainPipe(Pipe::new(vec![10.0, 10.0, 10.0, 200.0], "#1f6fd0", 6.0)),
    );
    let value = serde_json::to_value(&pipe).unwrap();
    assert_eq!(value["type"], "main_pipe");
    assert_eq!(value["strokeWidth"], 6.0);
    assert_eq!(
        value["points"],
        serde_json::json!([10.0, 10.0, 10.0, 200.0])
    );
}

#[test]
fn test_export_after_load_round_trips() {
    let shapes = vec![
        LayoutShape::create(ShapeKind::Well),
        LayoutShape::create(ShapeKind::Border),
        LayoutShape::create_pipe_at(ShapeKind::SubPipe, 5.0, 5.0),
        LayoutShape::create(ShapeKind::FlushImage),
    ];

    let mut editor = EditorState::new();
    editor.load_layout(shapes.clone());
    assert_eq!(
        editor.export_layout(),
        shapes,
        "export with no intervening mutation must be deep-equal to the input"
    );
}

#[test]
fn test_json_round_trip_preserves_order_and_geometry() {
    let shapes = vec![
        LayoutShape::create(ShapeKind::Well),
        LayoutShape::create_pipe_at(ShapeKind::MainPipe, 1.0, 2.0),
        LayoutShape::create(ShapeKind::ValveImage),
    ];

    let json = shapes_to_json(&shapes).unwrap();
    let decoded = shapes_from_json_lenient(&json).unwrap();
    assert_eq!(decoded, shapes);
}

#[test]
fn test_lenient_decode_skips_unknown_type() {
    let json = r##"[
        {"id": "a", "type": "well", "x": 10, "y": 20, "radius": 5, "rotation": 0},
        {"id": "b", "type": "sprinkler", "x": 1, "y": 2},
        {"id": "c", "type": "main_pipe", "points": [0, 0, 10, 0],
         "stroke": "#1f6fd0", "strokeWidth": 6}
    ]"##;

    let shapes = shapes_from_json_lenient(json).unwrap();
    assert_eq!(shapes.len(), 2, "the unknown record must be skipped");
    assert_eq!(shapes[0].id, "a");
    assert_eq!(shapes[0].kind(), ShapeKind::Well);
    assert_eq!(shapes[1].id, "c");
    assert_eq!(shapes[1].kind(), ShapeKind::MainPipe);
}

#[test]
fn test_lenient_decode_skips_malformed_geometry() {
    let json = r#"[
        {"id": "a", "type": "well", "x": "not-a-number", "y": 2, "radius": 5},
        {"id": "b", "type": "border", "x": 0, "y": 0, "width": 100, "height": 50, "rotation": 0}
    ]"#;

    let shapes = shapes_from_json_lenient(json).unwrap();
    assert_eq!(shapes.len(), 1);
    assert_eq!(shapes[0].id, "b");
}

#[test]
fn test_lenient_decode_rejects_non_array() {
    assert!(shapes_from_json_lenient("{\"not\": \"an array\"}").is_err());
    assert!(shapes_from_json_lenient("garbage").is_err());
}

#[test]
fn test_document_round_trip() {
    let mut doc = LayoutDocument::with_shapes(
        "North field",
        vec![
            LayoutShape::create(ShapeKind::Well),
            LayoutShape::create(ShapeKind::Border),
        ],
    );
    doc.metadata.description = "Four-acre plot behind the canal".to_string();

    let json = doc.to_json_string().unwrap();
    let parsed = LayoutDocument::from_json_string(&json).unwrap();
    assert_eq!(parsed.metadata.name, "North field");
    assert_eq!(parsed.metadata.description, doc.metadata.description);
    assert_eq!(parsed.shapes, doc.shapes);
    assert_eq!(parsed.metadata.created, doc.metadata.created);
}

#[test]
fn test_dash_defaults_to_solid_when_absent() {
    let json = r##"[
        {"id": "p", "type": "lateral_pipe", "points": [0, 0, 50, 0],
         "stroke": "#2e9e44", "strokeWidth": 3}
    ]"##;
    let shapes = shapes_from_json_lenient(json).unwrap();
    match &shapes[0].shape {
        Shape::LateralPipe(p) => assert!(p.dash.is_empty()),
        other => panic!("expected a lateral pipe, got {:?}", other.kind()),
    }
}
