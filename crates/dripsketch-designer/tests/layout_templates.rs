//! Tests for the standard layout catalog.

use dripsketch_designer::templates::{
    get_layout_by_key, instantiate, list_layout_keys, standard_layouts,
};
use dripsketch_designer::{EditorState, Shape, ShapeKind};

#[test]
fn test_catalog_has_five_layouts() {
    let keys = list_layout_keys();
    assert_eq!(keys.len(), 5);
    assert_eq!(keys[0], "layout_1_vertical_left");
    for key in &keys {
        assert!(get_layout_by_key(key).is_some(), "missing layout for {key}");
    }
}

#[test]
fn test_layout_1_composition() {
    let layout = get_layout_by_key("layout_1_vertical_left").expect("layout_1 must exist");
    assert_eq!(layout.shapes.len(), 10);
    assert_eq!(layout.shapes[0].kind(), ShapeKind::Well);
    assert!(!layout.name.is_empty());
    assert!(!layout.description.is_empty());
}

#[test]
fn test_unknown_key_is_absent() {
    assert!(get_layout_by_key("layout_99_diagonal").is_none());
    assert!(instantiate("layout_99_diagonal").is_none());
}

#[test]
fn test_template_ids_unique_within_each_layout() {
    for layout in standard_layouts() {
        let mut seen = std::collections::HashSet::new();
        for s in &layout.shapes {
            assert!(
                seen.insert(s.id.clone()),
                "duplicate id {} in {}",
                s.id,
                layout.key
            );
        }
    }
}

#[test]
fn test_instantiate_is_a_deep_copy() {
    let mut editor = EditorState::new();
    editor
        .load_standard_layout("layout_1_vertical_left")
        .expect("template must load");
    assert_eq!(editor.canvas.shape_count(), 10);

    // Mutate every shape in the editor.
    let ids: Vec<String> = editor.export_layout().into_iter().map(|s| s.id).collect();
    for id in &ids {
        editor.canvas.translate_shape(id, 500.0, 500.0);
    }

    // The catalog must be untouched.
    let pristine = get_layout_by_key("layout_1_vertical_left").unwrap();
    match &pristine.shapes[0].shape {
        Shape::Well(w) => assert_eq!((w.x, w.y), (60.0, 50.0)),
        other => panic!("expected a well, got {:?}", other.kind()),
    }
}

#[test]
fn test_instantiate_reassigns_ids() {
    let a = instantiate("layout_2_vertical_right").unwrap();
    let b = instantiate("layout_2_vertical_right").unwrap();
    for (sa, sb) in a.iter().zip(&b) {
        assert_ne!(sa.id, sb.id, "two instantiations must not share ids");
        assert_eq!(sa.shape, sb.shape, "geometry must be identical");
    }
}

#[test]
fn test_load_standard_layout_unknown_key_errors() {
    let mut editor = EditorState::new();
    let err = editor.load_standard_layout("nope").unwrap_err();
    assert!(err.to_string().contains("nope"), "error was {err}");
    assert_eq!(editor.canvas.shape_count(), 0);
}
