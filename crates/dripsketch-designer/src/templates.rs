//! # Standard Layout Catalog
//!
//! The five canned drip-irrigation layouts the billing forms offer as
//! starting templates. The catalog is read-only, built-in data: selecting
//! a template copies its shapes into the live editor, so edits never
//! touch the template itself.
//!
//! We keep the data as Rust constructors (rather than shipping a JSON
//! asset) so the shapes go through the same types as everything else.

use dripsketch_core::constants;

use crate::shapes::{Border, IconShape, LayoutShape, Pipe, Shape, Well};

/// A named, described, read-only template layout.
#[derive(Debug, Clone, PartialEq)]
pub struct StandardLayout {
    /// Stable catalog key, e.g. `layout_1_vertical_left`.
    pub key: String,
    /// Human-readable name shown in the template picker.
    pub name: String,
    /// One-line description of the arrangement.
    pub description: String,
    /// The template shapes, in draw order.
    pub shapes: Vec<LayoutShape>,
}

fn well(id: &str, x: f64, y: f64) -> LayoutShape {
    LayoutShape::new(id, Shape::Well(Well::new(x, y, constants::DEFAULT_WELL_RADIUS)))
}

fn border(id: &str, x: f64, y: f64, w: f64, h: f64) -> LayoutShape {
    LayoutShape::new(id, Shape::Border(Border::new(x, y, w, h)))
}

fn valve(id: &str, x: f64, y: f64) -> LayoutShape {
    let s = constants::DEFAULT_ICON_SIZE;
    LayoutShape::new(id, Shape::ValveImage(IconShape::new(x, y, s, s)))
}

fn filter(id: &str, x: f64, y: f64) -> LayoutShape {
    let s = constants::DEFAULT_ICON_SIZE;
    LayoutShape::new(id, Shape::FilterImage(IconShape::new(x, y, s, s)))
}

fn flush(id: &str, x: f64, y: f64) -> LayoutShape {
    let s = constants::DEFAULT_ICON_SIZE;
    LayoutShape::new(id, Shape::FlushImage(IconShape::new(x, y, s, s)))
}

fn main_pipe(id: &str, points: Vec<f64>) -> LayoutShape {
    LayoutShape::new(
        id,
        Shape::MainPipe(Pipe::new(
            points,
            constants::MAIN_PIPE_STROKE,
            constants::MAIN_PIPE_WIDTH,
        )),
    )
}

fn lateral_pipe(id: &str, points: Vec<f64>) -> LayoutShape {
    LayoutShape::new(
        id,
        Shape::LateralPipe(Pipe::new(
            points,
            constants::LATERAL_PIPE_STROKE,
            constants::LATERAL_PIPE_WIDTH,
        )),
    )
}

fn sub_pipe(id: &str, points: Vec<f64>) -> LayoutShape {
    LayoutShape::new(
        id,
        Shape::SubPipe(
            Pipe::new(points, constants::SUB_PIPE_STROKE, constants::SUB_PIPE_WIDTH)
                .with_dash(constants::SUB_PIPE_DASH.to_vec()),
        ),
    )
}

/// Builds the full catalog, in picker order.
pub fn standard_layouts() -> Vec<StandardLayout> {
    let mut out = Vec::new();

    // Layout 1: well at the top-left corner, main line down the left
    // edge, laterals running right.
    {
        let shapes = vec![
            well("l1-well", 60.0, 50.0),
            border("l1-border", 30.0, 20.0, 360.0, 240.0),
            filter("l1-filter", 85.0, 34.0),
            valve("l1-valve", 44.0, 90.0),
            main_pipe("l1-main", vec![60.0, 70.0, 60.0, 250.0]),
            lateral_pipe("l1-lat-1", vec![60.0, 110.0, 380.0, 110.0]),
            lateral_pipe("l1-lat-2", vec![60.0, 150.0, 380.0, 150.0]),
            lateral_pipe("l1-lat-3", vec![60.0, 190.0, 380.0, 190.0]),
            lateral_pipe("l1-lat-4", vec![60.0, 230.0, 380.0, 230.0]),
            flush("l1-flush", 44.0, 244.0),
        ];
        out.push(StandardLayout {
            key: "layout_1_vertical_left".to_string(),
            name: "Vertical main, left".to_string(),
            description: "Well at the top-left corner, main line down the left edge, laterals running right".to_string(),
            shapes,
        });
    }

    // Layout 2: mirror of layout 1, fed from the right edge.
    {
        let shapes = vec![
            well("l2-well", 360.0, 50.0),
            border("l2-border", 30.0, 20.0, 360.0, 240.0),
            filter("l2-filter", 303.0, 34.0),
            valve("l2-valve", 344.0, 90.0),
            main_pipe("l2-main", vec![360.0, 70.0, 360.0, 250.0]),
            lateral_pipe("l2-lat-1", vec![40.0, 110.0, 360.0, 110.0]),
            lateral_pipe("l2-lat-2", vec![40.0, 150.0, 360.0, 150.0]),
            lateral_pipe("l2-lat-3", vec![40.0, 190.0, 360.0, 190.0]),
            lateral_pipe("l2-lat-4", vec![40.0, 230.0, 360.0, 230.0]),
            flush("l2-flush", 344.0, 244.0),
        ];
        out.push(StandardLayout {
            key: "layout_2_vertical_right".to_string(),
            name: "Vertical main, right".to_string(),
            description: "Well at the top-right corner, main line down the right edge, laterals running left".to_string(),
            shapes,
        });
    }

    // Layout 3: main line along the top edge, laterals dropping down.
    {
        let shapes = vec![
            well("l3-well", 60.0, 50.0),
            border("l3-border", 30.0, 20.0, 360.0, 240.0),
            filter("l3-filter", 90.0, 34.0),
            valve("l3-valve", 140.0, 34.0),
            main_pipe("l3-main", vec![60.0, 50.0, 390.0, 50.0]),
            lateral_pipe("l3-lat-1", vec![120.0, 50.0, 120.0, 250.0]),
            lateral_pipe("l3-lat-2", vec![200.0, 50.0, 200.0, 250.0]),
            lateral_pipe("l3-lat-3", vec![280.0, 50.0, 280.0, 250.0]),
            lateral_pipe("l3-lat-4", vec![360.0, 50.0, 360.0, 250.0]),
            flush("l3-flush", 374.0, 34.0),
        ];
        out.push(StandardLayout {
            key: "layout_3_horizontal_top".to_string(),
            name: "Horizontal main, top".to_string(),
            description: "Main line along the top edge with laterals dropping to the bottom border".to_string(),
            shapes,
        });
    }

    // Layout 4: main line along the bottom edge, laterals rising, with
    // dashed drip lines between them.
    {
        let shapes = vec![
            well("l4-well", 60.0, 230.0),
            border("l4-border", 30.0, 20.0, 360.0, 240.0),
            filter("l4-filter", 90.0, 244.0),
            valve("l4-valve", 140.0, 244.0),
            main_pipe("l4-main", vec![60.0, 230.0, 390.0, 230.0]),
            lateral_pipe("l4-lat-1", vec![120.0, 230.0, 120.0, 30.0]),
            lateral_pipe("l4-lat-2", vec![240.0, 230.0, 240.0, 30.0]),
            lateral_pipe("l4-lat-3", vec![360.0, 230.0, 360.0, 30.0]),
            sub_pipe("l4-drip-1", vec![120.0, 80.0, 240.0, 80.0]),
            sub_pipe("l4-drip-2", vec![240.0, 80.0, 360.0, 80.0]),
            sub_pipe("l4-drip-3", vec![120.0, 160.0, 240.0, 160.0]),
            sub_pipe("l4-drip-4", vec![240.0, 160.0, 360.0, 160.0]),
            flush("l4-flush", 374.0, 244.0),
        ];
        out.push(StandardLayout {
            key: "layout_4_horizontal_bottom".to_string(),
            name: "Horizontal main, bottom".to_string(),
            description: "Main line along the bottom edge, laterals rising, drip lines bridging the laterals".to_string(),
            shapes,
        });
    }

    // Layout 5: central main line feeding laterals on both wings.
    {
        let shapes = vec![
            well("l5-well", 210.0, 40.0),
            border("l5-border", 30.0, 20.0, 360.0, 240.0),
            filter("l5-filter", 236.0, 26.0),
            valve("l5-valve", 194.0, 80.0),
            main_pipe("l5-main", vec![210.0, 60.0, 210.0, 250.0]),
            lateral_pipe("l5-left-1", vec![210.0, 110.0, 40.0, 110.0]),
            lateral_pipe("l5-left-2", vec![210.0, 170.0, 40.0, 170.0]),
            lateral_pipe("l5-left-3", vec![210.0, 230.0, 40.0, 230.0]),
            lateral_pipe("l5-right-1", vec![210.0, 110.0, 380.0, 110.0]),
            lateral_pipe("l5-right-2", vec![210.0, 170.0, 380.0, 170.0]),
            lateral_pipe("l5-right-3", vec![210.0, 230.0, 380.0, 230.0]),
            flush("l5-flush", 194.0, 244.0),
        ];
        out.push(StandardLayout {
            key: "layout_5_double_wing".to_string(),
            name: "Double wing".to_string(),
            description: "Central main line feeding laterals on both wings".to_string(),
            shapes,
        });
    }

    out
}

/// All catalog keys, in picker order.
pub fn list_layout_keys() -> Vec<String> {
    standard_layouts().into_iter().map(|l| l.key).collect()
}

/// Looks up a template by key.
pub fn get_layout_by_key(key: &str) -> Option<StandardLayout> {
    standard_layouts().into_iter().find(|l| l.key == key)
}

/// Deep-copies a template's shapes for editing, re-identified so two
/// instantiations in one session never collide.
pub fn instantiate(key: &str) -> Option<Vec<LayoutShape>> {
    let layout = get_layout_by_key(key)?;
    Some(
        layout
            .shapes
            .into_iter()
            .map(|mut s| {
                s.id = LayoutShape::fresh_id();
                s
            })
            .collect(),
    )
}
