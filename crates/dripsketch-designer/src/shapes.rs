//! Geometric shapes for the farm layout designer.

use dripsketch_core::constants;
use dripsketch_core::Error;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a 2D point with X and Y coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point with the given X and Y coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Calculates the distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

pub fn rotate_point(p: Point, center: Point, angle_deg: f64) -> Point {
    if angle_deg.abs() < 1e-6 {
        return p;
    }
    let angle_rad = angle_deg.to_radians();
    let cos_a = angle_rad.cos();
    let sin_a = angle_rad.sin();
    let dx = p.x - center.x;
    let dy = p.y - center.y;
    Point {
        x: center.x + dx * cos_a - dy * sin_a,
        y: center.y + dx * sin_a + dy * cos_a,
    }
}

/// Distance from a point to the segment (ax,ay)-(bx,by).
fn segment_distance(p: &Point, ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    let dx = bx - ax;
    let dy = by - ay;
    let len_sq = dx * dx + dy * dy;
    if len_sq < 1e-12 {
        return p.distance_to(&Point::new(ax, ay));
    }
    let t = (((p.x - ax) * dx + (p.y - ay) * dy) / len_sq).clamp(0.0, 1.0);
    p.distance_to(&Point::new(ax + t * dx, ay + t * dy))
}

/// The fixed vocabulary of layout elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Well,
    Border,
    MainPipe,
    LateralPipe,
    SubPipe,
    ValveImage,
    FilterImage,
    FlushImage,
}

impl ShapeKind {
    /// Every kind, in toolbar order.
    pub const ALL: [ShapeKind; 8] = [
        ShapeKind::Well,
        ShapeKind::Border,
        ShapeKind::MainPipe,
        ShapeKind::LateralPipe,
        ShapeKind::SubPipe,
        ShapeKind::ValveImage,
        ShapeKind::FilterImage,
        ShapeKind::FlushImage,
    ];

    /// The wire name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Well => "well",
            ShapeKind::Border => "border",
            ShapeKind::MainPipe => "main_pipe",
            ShapeKind::LateralPipe => "lateral_pipe",
            ShapeKind::SubPipe => "sub_pipe",
            ShapeKind::ValveImage => "valve_image",
            ShapeKind::FilterImage => "filter_image",
            ShapeKind::FlushImage => "flush_image",
        }
    }

    /// Parse from the wire name.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "well" => Some(ShapeKind::Well),
            "border" => Some(ShapeKind::Border),
            "main_pipe" => Some(ShapeKind::MainPipe),
            "lateral_pipe" => Some(ShapeKind::LateralPipe),
            "sub_pipe" => Some(ShapeKind::SubPipe),
            "valve_image" => Some(ShapeKind::ValveImage),
            "filter_image" => Some(ShapeKind::FilterImage),
            "flush_image" => Some(ShapeKind::FlushImage),
            _ => None,
        }
    }

    /// Line-like kinds are drawn with the freehand gesture, never placed
    /// by the toolbar add action.
    pub fn is_pipe(&self) -> bool {
        matches!(
            self,
            ShapeKind::MainPipe | ShapeKind::LateralPipe | ShapeKind::SubPipe
        )
    }
}

impl std::str::FromStr for ShapeKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShapeKind::parse(s).ok_or_else(|| Error::UnknownShapeKind {
            found: s.to_string(),
        })
    }
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A well, drawn as a circle around its center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Well {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    #[serde(default)]
    pub rotation: f64,
}

impl Well {
    pub fn new(x: f64, y: f64, radius: f64) -> Self {
        Self {
            x,
            y,
            radius,
            rotation: 0.0,
        }
    }

    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        (
            self.x - self.radius,
            self.y - self.radius,
            self.x + self.radius,
            self.y + self.radius,
        )
    }

    pub fn contains_point(&self, point: &Point, tolerance: f64) -> bool {
        Point::new(self.x, self.y).distance_to(point) <= self.radius + tolerance
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }
}

/// The farm boundary rectangle, defined by its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Border {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub rotation: f64,
}

impl Border {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            rotation: 0.0,
        }
    }

    pub fn corners(&self) -> [Point; 4] {
        let center = Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0);
        let corners = [
            Point::new(self.x, self.y),
            Point::new(self.x + self.width, self.y),
            Point::new(self.x + self.width, self.y + self.height),
            Point::new(self.x, self.y + self.height),
        ];
        if self.rotation.abs() < 1e-6 {
            return corners;
        }
        [
            rotate_point(corners[0], center, self.rotation),
            rotate_point(corners[1], center, self.rotation),
            rotate_point(corners[2], center, self.rotation),
            rotate_point(corners[3], center, self.rotation),
        ]
    }

    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        if self.rotation.abs() < 1e-6 {
            return (self.x, self.y, self.x + self.width, self.y + self.height);
        }
        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        for c in self.corners() {
            min_x = min_x.min(c.x);
            min_y = min_y.min(c.y);
            max_x = max_x.max(c.x);
            max_y = max_y.max(c.y);
        }
        (min_x, min_y, max_x, max_y)
    }

    pub fn contains_point(&self, point: &Point, tolerance: f64) -> bool {
        let center = Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0);
        let p = rotate_point(*point, center, -self.rotation);
        p.x >= self.x - tolerance
            && p.x <= self.x + self.width + tolerance
            && p.y >= self.y - tolerance
            && p.y <= self.y + self.height + tolerance
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }
}

/// A bitmap icon placement (valve, filter or flush point), defined by its
/// top-left corner and size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IconShape {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub rotation: f64,
}

impl IconShape {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            rotation: 0.0,
        }
    }

    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        // Same footprint math as the border rectangle.
        Border {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
            rotation: self.rotation,
        }
        .bounds()
    }

    pub fn contains_point(&self, point: &Point, tolerance: f64) -> bool {
        Border {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
            rotation: self.rotation,
        }
        .contains_point(point, tolerance)
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }
}

/// A pipe polyline: flat alternating x,y pairs, at least two pairs.
/// A zero-length segment (start equals end) is valid while a draw gesture
/// is in progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pipe {
    pub points: Vec<f64>,
    pub stroke: String,
    #[serde(rename = "strokeWidth")]
    pub stroke_width: f64,
    #[serde(default)]
    pub dash: Vec<f64>,
}

impl Pipe {
    pub fn new(points: Vec<f64>, stroke: impl Into<String>, stroke_width: f64) -> Self {
        debug_assert!(points.len() >= 4 && points.len() % 2 == 0);
        Self {
            points,
            stroke: stroke.into(),
            stroke_width,
            dash: Vec::new(),
        }
    }

    pub fn with_dash(mut self, dash: Vec<f64>) -> Self {
        self.dash = dash;
        self
    }

    /// Both endpoints of a two-point pipe in order.
    pub fn point_pairs(&self) -> impl Iterator<Item = Point> + '_ {
        self.points.chunks_exact(2).map(|c| Point::new(c[0], c[1]))
    }

    /// True when every segment has zero length (a click without a drag).
    pub fn is_degenerate(&self) -> bool {
        let first = match self.point_pairs().next() {
            Some(p) => p,
            None => return true,
        };
        self.point_pairs().all(|p| p.distance_to(&first) < 1e-6)
    }

    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        for p in self.point_pairs() {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        if min_x.is_infinite() {
            return (0.0, 0.0, 0.0, 0.0);
        }
        (min_x, min_y, max_x, max_y)
    }

    pub fn contains_point(&self, point: &Point, tolerance: f64) -> bool {
        let reach = tolerance + self.stroke_width / 2.0;
        let pairs: Vec<Point> = self.point_pairs().collect();
        pairs
            .windows(2)
            .any(|w| segment_distance(point, w[0].x, w[0].y, w[1].x, w[1].y) <= reach)
            || (pairs.len() == 1 && point.distance_to(&pairs[0]) <= reach)
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        for pair in self.points.chunks_exact_mut(2) {
            pair[0] += dx;
            pair[1] += dy;
        }
    }

    /// Replaces the end point of an in-progress two-point pipe. The start
    /// point stays fixed for the whole gesture.
    pub fn set_end(&mut self, x: f64, y: f64) {
        let n = self.points.len();
        if n >= 4 {
            self.points[n - 2] = x;
            self.points[n - 1] = y;
        }
    }
}

/// Enum wrapper for all layout shapes, tagged for the wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Shape {
    Well(Well),
    Border(Border),
    MainPipe(Pipe),
    LateralPipe(Pipe),
    SubPipe(Pipe),
    ValveImage(IconShape),
    FilterImage(IconShape),
    FlushImage(IconShape),
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Well(_) => ShapeKind::Well,
            Shape::Border(_) => ShapeKind::Border,
            Shape::MainPipe(_) => ShapeKind::MainPipe,
            Shape::LateralPipe(_) => ShapeKind::LateralPipe,
            Shape::SubPipe(_) => ShapeKind::SubPipe,
            Shape::ValveImage(_) => ShapeKind::ValveImage,
            Shape::FilterImage(_) => ShapeKind::FilterImage,
            Shape::FlushImage(_) => ShapeKind::FlushImage,
        }
    }

    pub fn is_pipe(&self) -> bool {
        self.kind().is_pipe()
    }

    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        match self {
            Shape::Well(s) => s.bounds(),
            Shape::Border(s) => s.bounds(),
            Shape::MainPipe(s) | Shape::LateralPipe(s) | Shape::SubPipe(s) => s.bounds(),
            Shape::ValveImage(s) | Shape::FilterImage(s) | Shape::FlushImage(s) => s.bounds(),
        }
    }

    pub fn contains_point(&self, point: &Point, tolerance: f64) -> bool {
        match self {
            Shape::Well(s) => s.contains_point(point, tolerance),
            Shape::Border(s) => s.contains_point(point, tolerance),
            Shape::MainPipe(s) | Shape::LateralPipe(s) | Shape::SubPipe(s) => {
                s.contains_point(point, tolerance)
            }
            Shape::ValveImage(s) | Shape::FilterImage(s) | Shape::FlushImage(s) => {
                s.contains_point(point, tolerance)
            }
        }
    }

    pub fn rotation(&self) -> f64 {
        match self {
            Shape::Well(s) => s.rotation,
            Shape::Border(s) => s.rotation,
            Shape::ValveImage(s) | Shape::FilterImage(s) | Shape::FlushImage(s) => s.rotation,
            Shape::MainPipe(_) | Shape::LateralPipe(_) | Shape::SubPipe(_) => 0.0,
        }
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        match self {
            Shape::Well(s) => s.translate(dx, dy),
            Shape::Border(s) => s.translate(dx, dy),
            Shape::MainPipe(s) | Shape::LateralPipe(s) | Shape::SubPipe(s) => s.translate(dx, dy),
            Shape::ValveImage(s) | Shape::FilterImage(s) | Shape::FlushImage(s) => {
                s.translate(dx, dy)
            }
        }
    }
}

/// A placed layout element: a stable opaque id plus its geometry.
/// Serializes to the flat record the billing backend stores verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutShape {
    pub id: String,
    #[serde(flatten)]
    pub shape: Shape,
}

impl LayoutShape {
    /// Allocates a fresh id for a shape.
    pub fn fresh_id() -> String {
        Uuid::new_v4().to_string()
    }

    pub fn new(id: impl Into<String>, shape: Shape) -> Self {
        Self {
            id: id.into(),
            shape,
        }
    }

    /// Creates a shape of the given kind with its default geometry and a
    /// fresh unique id. Always succeeds. Pipe kinds come out as a
    /// zero-length segment at the origin; the draw gesture positions them.
    pub fn create(kind: ShapeKind) -> Self {
        match kind {
            ShapeKind::Well => Self::new(
                Self::fresh_id(),
                Shape::Well(Well::new(
                    constants::DEFAULT_WELL_X,
                    constants::DEFAULT_WELL_Y,
                    constants::DEFAULT_WELL_RADIUS,
                )),
            ),
            ShapeKind::Border => Self::new(
                Self::fresh_id(),
                Shape::Border(Border::new(
                    constants::DEFAULT_BORDER_X,
                    constants::DEFAULT_BORDER_Y,
                    constants::DEFAULT_BORDER_WIDTH,
                    constants::DEFAULT_BORDER_HEIGHT,
                )),
            ),
            ShapeKind::ValveImage | ShapeKind::FilterImage | ShapeKind::FlushImage => {
                let icon = IconShape::new(
                    constants::DEFAULT_ICON_X,
                    constants::DEFAULT_ICON_Y,
                    constants::DEFAULT_ICON_SIZE,
                    constants::DEFAULT_ICON_SIZE,
                );
                let shape = match kind {
                    ShapeKind::ValveImage => Shape::ValveImage(icon),
                    ShapeKind::FilterImage => Shape::FilterImage(icon),
                    _ => Shape::FlushImage(icon),
                };
                Self::new(Self::fresh_id(), shape)
            }
            ShapeKind::MainPipe | ShapeKind::LateralPipe | ShapeKind::SubPipe => {
                Self::create_pipe_at(kind, 0.0, 0.0)
            }
        }
    }

    /// Creates a pipe of the given kind with both endpoints at (x, y),
    /// the state a draw gesture starts from.
    pub fn create_pipe_at(kind: ShapeKind, x: f64, y: f64) -> Self {
        let points = vec![x, y, x, y];
        let shape = match kind {
            ShapeKind::MainPipe => Shape::MainPipe(Pipe::new(
                points,
                constants::MAIN_PIPE_STROKE,
                constants::MAIN_PIPE_WIDTH,
            )),
            ShapeKind::LateralPipe => Shape::LateralPipe(Pipe::new(
                points,
                constants::LATERAL_PIPE_STROKE,
                constants::LATERAL_PIPE_WIDTH,
            )),
            ShapeKind::SubPipe => Shape::SubPipe(
                Pipe::new(points, constants::SUB_PIPE_STROKE, constants::SUB_PIPE_WIDTH)
                    .with_dash(constants::SUB_PIPE_DASH.to_vec()),
            ),
            other => {
                // Not a pipe kind; fall back to the toolbar defaults.
                tracing::warn!("create_pipe_at called with non-pipe kind {other}");
                return Self::create(other);
            }
        };
        Self::new(Self::fresh_id(), shape)
    }

    pub fn kind(&self) -> ShapeKind {
        self.shape.kind()
    }

    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        self.shape.bounds()
    }

    pub fn contains_point(&self, point: &Point, tolerance: f64) -> bool {
        self.shape.contains_point(point, tolerance)
    }
}

/// Bounding box of a whole shape list. `None` for an empty list.
pub fn layout_bounds(shapes: &[LayoutShape]) -> Option<(f64, f64, f64, f64)> {
    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for s in shapes {
        let (x1, y1, x2, y2) = s.bounds();
        min_x = min_x.min(x1);
        min_y = min_y.min(y1);
        max_x = max_x.max(x2);
        max_y = max_y.max(y2);
    }
    if min_x.is_infinite() {
        None
    } else {
        Some((min_x, min_y, max_x, max_y))
    }
}
