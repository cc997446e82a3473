use crate::math_utils::point_on_arc;
use euclid::default::{Box2D, Point2D, Vector2D};
use std::fmt::Write;

/// A single path command. Coordinates are in the shape's local space
/// (origin at the top-left corner, y pointing down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point2D<f32>),
    LineTo(Point2D<f32>),
    CubicTo {
        ctrl1: Point2D<f32>,
        ctrl2: Point2D<f32>,
        to: Point2D<f32>,
    },
    /// Elliptical arc inscribed in `bounds`, angles in degrees, clockwise from +x
    ArcTo {
        bounds: Box2D<f32>,
        start_angle: f32,
        sweep_angle: f32,
    },
    Close,
}

impl PathCommand {
    /// Point the pen ends up at after this command, if it moves the pen
    pub fn end_point(&self) -> Option<Point2D<f32>> {
        match *self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(p),
            PathCommand::CubicTo { to, .. } => Some(to),
            PathCommand::ArcTo { bounds, start_angle, sweep_angle } => {
                Some(point_on_arc(bounds, start_angle + sweep_angle))
            }
            PathCommand::Close => None,
        }
    }

    /// True for commands that draw an edge (everything but move and close)
    pub fn is_segment(&self) -> bool {
        !matches!(self, PathCommand::MoveTo(_) | PathCommand::Close)
    }

    pub fn is_curve(&self) -> bool {
        matches!(self, PathCommand::CubicTo { .. } | PathCommand::ArcTo { .. })
    }

    fn translated(self, by: Vector2D<f32>) -> Self {
        match self {
            PathCommand::MoveTo(p) => PathCommand::MoveTo(p + by),
            PathCommand::LineTo(p) => PathCommand::LineTo(p + by),
            PathCommand::CubicTo { ctrl1, ctrl2, to } => PathCommand::CubicTo {
                ctrl1: ctrl1 + by,
                ctrl2: ctrl2 + by,
                to: to + by,
            },
            PathCommand::ArcTo { bounds, start_angle, sweep_angle } => PathCommand::ArcTo {
                bounds: bounds.translate(by),
                start_angle,
                sweep_angle,
            },
            PathCommand::Close => PathCommand::Close,
        }
    }
}

/// One closed outline, owned by whoever asked for it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Contour {
    commands: Vec<PathCommand>,
}

impl Contour {
    pub fn with_capacity(capacity: usize) -> Self {
        Self { commands: Vec::with_capacity(capacity) }
    }

    pub fn move_to(&mut self, x: f32, y: f32) {
        self.commands.push(PathCommand::MoveTo(Point2D::new(x, y)));
    }

    pub fn line_to(&mut self, x: f32, y: f32) {
        self.commands.push(PathCommand::LineTo(Point2D::new(x, y)));
    }

    pub fn cubic_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x3: f32, y3: f32) {
        self.commands.push(PathCommand::CubicTo {
            ctrl1: Point2D::new(x1, y1),
            ctrl2: Point2D::new(x2, y2),
            to: Point2D::new(x3, y3),
        });
    }

    pub fn arc_to(&mut self, bounds: Box2D<f32>, start_angle: f32, sweep_angle: f32) {
        self.commands.push(PathCommand::ArcTo { bounds, start_angle, sweep_angle });
    }

    pub fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Number of drawn edges (lines, cubics and arcs)
    pub fn segment_count(&self) -> usize {
        self.commands.iter().filter(|c| c.is_segment()).count()
    }

    pub fn has_curves(&self) -> bool {
        self.commands.iter().any(PathCommand::is_curve)
    }

    /// A contour is closed when it has exactly one move, ends with a close,
    /// and its last drawn point lands back on the starting point.
    pub fn is_closed(&self) -> bool {
        let moves = self
            .commands
            .iter()
            .filter(|c| matches!(c, PathCommand::MoveTo(_)))
            .count();
        let start = match self.commands.first() {
            Some(PathCommand::MoveTo(p)) => *p,
            _ => return false,
        };
        let last = self
            .commands
            .iter()
            .rev()
            .find_map(PathCommand::end_point)
            .unwrap_or(start);

        moves == 1
            && matches!(self.commands.last(), Some(PathCommand::Close))
            && (last - start).length() < 1e-3
    }

    /// Bounding box of all on-curve and control points
    pub fn bounds(&self) -> Option<Box2D<f32>> {
        let points = self.commands.iter().flat_map(|c| match *c {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => vec![p],
            PathCommand::CubicTo { ctrl1, ctrl2, to } => vec![ctrl1, ctrl2, to],
            PathCommand::ArcTo { bounds, start_angle, sweep_angle } => vec![
                point_on_arc(bounds, start_angle),
                point_on_arc(bounds, start_angle + sweep_angle),
            ],
            PathCommand::Close => vec![],
        });
        let points: Vec<Point2D<f32>> = points.collect();
        if points.is_empty() {
            return None;
        }
        Some(Box2D::from_points(points))
    }

    /// Copy of this contour shifted by `(dx, dy)`
    pub fn translated(&self, dx: f32, dy: f32) -> Self {
        let by = Vector2D::new(dx, dy);
        Self {
            commands: self.commands.iter().map(|c| c.translated(by)).collect(),
        }
    }

    /// SVG path data (`d` attribute) for this contour
    pub fn to_svg_path_data(&self) -> String {
        let mut d = String::new();
        for command in &self.commands {
            if !d.is_empty() {
                d.push(' ');
            }
            // Writing into a String cannot fail
            let _ = match *command {
                PathCommand::MoveTo(p) => write!(d, "M {} {}", p.x, p.y),
                PathCommand::LineTo(p) => write!(d, "L {} {}", p.x, p.y),
                PathCommand::CubicTo { ctrl1, ctrl2, to } => write!(
                    d,
                    "C {} {}, {} {}, {} {}",
                    ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y
                ),
                PathCommand::ArcTo { bounds, start_angle, sweep_angle } => {
                    let end = point_on_arc(bounds, start_angle + sweep_angle);
                    let large_arc = u8::from(sweep_angle.abs() > 180.0);
                    let sweep = u8::from(sweep_angle > 0.0);
                    write!(
                        d,
                        "A {} {} 0 {} {} {} {}",
                        bounds.width() / 2.0,
                        bounds.height() / 2.0,
                        large_arc,
                        sweep,
                        end.x,
                        end.y
                    )
                }
                PathCommand::Close => write!(d, "Z"),
            };
        }
        d
    }
}
