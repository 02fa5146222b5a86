//! Path building utilities.
//!
//! The [`Builder`] assembles absolute positions into subpaths, enforcing the
//! subpath lifecycle rules (empty open subpaths are dropped, an explicit
//! close retains a point subpath, closing rewinds to the subpath start). It
//! also owns the degenerate-arc policy: an arc whose endpoints coincide
//! contributes nothing and an arc with a zero radius degrades to a line.
//!
//! [`Path::from_commands`] folds a parsed command sequence into a path
//! through the builder, resolving the smooth-curve shorthands. The reflected
//! control point of `S`/`T` only applies when the previous command was a
//! curve of the same family; any other command resets the continuity state.

use crate::commands::{ArcCommand, PathCommand};
use crate::geom::{Arc, ArcFlags, CubicBezierSegment, LineSegment, QuadraticBezierSegment, SvgArc};
use crate::math::{point, vector, Angle, Point, Vector};
use crate::path::{Path, Segment, Subpath};

/// Builds a path from absolute positions.
#[derive(Clone, Debug, Default)]
pub struct Builder {
    subpaths: Vec<Subpath>,
    segments: Vec<Segment>,
    first_position: Point,
    current_position: Point,
    in_subpath: bool,
}

impl Builder {
    pub fn new() -> Builder {
        Builder {
            subpaths: Vec::new(),
            segments: Vec::new(),
            first_position: point(0.0, 0.0),
            current_position: point(0.0, 0.0),
            in_subpath: false,
        }
    }

    /// The position drawing currently continues from.
    #[inline]
    pub fn current_position(&self) -> Point {
        self.current_position
    }

    /// Starts a new subpath at the given position, finishing the previous
    /// one (as open) if any.
    pub fn begin(&mut self, at: Point) {
        self.end(false);
        self.first_position = at;
        self.current_position = at;
        self.in_subpath = true;
    }

    /// Finishes the current subpath.
    ///
    /// An open subpath without segments is discarded; a closed one is kept
    /// even when empty, degenerating to a single point. Closing rewinds the
    /// current position to the subpath start.
    pub fn end(&mut self, close: bool) {
        let segments = std::mem::take(&mut self.segments);
        if self.in_subpath && (close || !segments.is_empty()) {
            self.subpaths.push(Subpath {
                start: self.first_position,
                segments,
                closed: close,
            });
        }
        self.in_subpath = false;
        if close {
            self.current_position = self.first_position;
        }
    }

    /// Closes the current subpath.
    pub fn close(&mut self) {
        self.end(true);
    }

    pub fn line_to(&mut self, to: Point) {
        self.ensure_subpath();
        self.segments.push(Segment::Line(LineSegment {
            from: self.current_position,
            to,
        }));
        self.current_position = to;
    }

    pub fn quadratic_bezier_to(&mut self, ctrl: Point, to: Point) {
        self.ensure_subpath();
        self.segments.push(Segment::Quadratic(QuadraticBezierSegment {
            from: self.current_position,
            ctrl,
            to,
        }));
        self.current_position = to;
    }

    pub fn cubic_bezier_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point) {
        self.ensure_subpath();
        self.segments.push(Segment::Cubic(CubicBezierSegment {
            from: self.current_position,
            ctrl1,
            ctrl2,
            to,
        }));
        self.current_position = to;
    }

    /// Adds an elliptic arc in the endpoint parameterization, converting it
    /// to the center parameterization.
    ///
    /// Negative radii are taken as their absolute values. If the endpoints
    /// coincide the arc contributes nothing; if either radius is zero the
    /// arc degrades to a straight line.
    pub fn arc_to(&mut self, radii: Vector, x_rotation: Angle, flags: ArcFlags, to: Point) {
        self.ensure_subpath();
        let from = self.current_position;
        if from == to {
            return;
        }

        let arc = SvgArc {
            from,
            to,
            radii: vector(radii.x.abs(), radii.y.abs()),
            x_rotation,
            flags,
        };

        if arc.is_straight_line() {
            self.line_to(to);
            return;
        }

        self.segments.push(Segment::Arc(Arc::from_svg_arc(&arc)));
        self.current_position = to;
    }

    /// Builds a path object, ending the current subpath if any.
    pub fn build(mut self) -> Path {
        self.end(false);
        Path {
            subpaths: self.subpaths,
        }
    }

    // Drawing commands before any move-to operate from the current position
    // (the origin at the start of a path).
    fn ensure_subpath(&mut self) {
        if !self.in_subpath {
            self.begin(self.current_position);
        }
    }
}

impl Path {
    /// Folds an absolute command sequence into subpath geometry.
    ///
    /// This is where the smooth-curve shorthands are resolved: the first
    /// control point of an `S` command is the previous cubic's second
    /// control point mirrored across the current position, provided the
    /// previous command was a cubic; otherwise it collapses onto the current
    /// position. The same applies to `T` with respect to quadratics. Any
    /// non-curve command clears the continuity state.
    pub fn from_commands(commands: &[PathCommand]) -> Path {
        let mut builder = Builder::new();
        let mut prev_cubic_ctrl: Option<Point> = None;
        let mut prev_quadratic_ctrl: Option<Point> = None;

        for command in commands {
            let mut next_cubic_ctrl = None;
            let mut next_quadratic_ctrl = None;
            match *command {
                PathCommand::MoveTo(to) => {
                    builder.begin(to);
                }
                PathCommand::LineTo(to) => {
                    builder.line_to(to);
                }
                PathCommand::HorizontalLineTo(x) => {
                    let to = point(x, builder.current_position().y);
                    builder.line_to(to);
                }
                PathCommand::VerticalLineTo(y) => {
                    let to = point(builder.current_position().x, y);
                    builder.line_to(to);
                }
                PathCommand::CubicTo { ctrl1, ctrl2, to } => {
                    builder.cubic_bezier_to(ctrl1, ctrl2, to);
                    next_cubic_ctrl = Some(ctrl2);
                }
                PathCommand::SmoothCubicTo { ctrl2, to } => {
                    let ctrl1 = reflect(builder.current_position(), prev_cubic_ctrl);
                    builder.cubic_bezier_to(ctrl1, ctrl2, to);
                    next_cubic_ctrl = Some(ctrl2);
                }
                PathCommand::QuadraticTo { ctrl, to } => {
                    builder.quadratic_bezier_to(ctrl, to);
                    next_quadratic_ctrl = Some(ctrl);
                }
                PathCommand::SmoothQuadraticTo { to } => {
                    let ctrl = reflect(builder.current_position(), prev_quadratic_ctrl);
                    builder.quadratic_bezier_to(ctrl, to);
                    next_quadratic_ctrl = Some(ctrl);
                }
                PathCommand::ArcTo(ArcCommand {
                    radii,
                    x_rotation,
                    flags,
                    to,
                }) => {
                    builder.arc_to(radii, x_rotation, flags, to);
                }
                PathCommand::Close => {
                    builder.close();
                }
            }
            prev_cubic_ctrl = next_cubic_ctrl;
            prev_quadratic_ctrl = next_quadratic_ctrl;
        }

        builder.build()
    }
}

fn reflect(position: Point, prev_ctrl: Option<Point>) -> Point {
    match prev_ctrl {
        Some(ctrl) => position + (position - ctrl),
        None => position,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vector;

    fn arc_command(radii: (f64, f64), to: Point) -> PathCommand {
        PathCommand::ArcTo(ArcCommand {
            radii: vector(radii.0, radii.1),
            x_rotation: Angle::degrees(0.0),
            flags: ArcFlags::default(),
            to,
        })
    }

    #[test]
    fn empty_open_subpath_is_dropped() {
        let path = Path::from_commands(&[
            PathCommand::MoveTo(point(1.0, 1.0)),
            PathCommand::MoveTo(point(2.0, 2.0)),
            PathCommand::LineTo(point(3.0, 3.0)),
        ]);

        assert_eq!(path.subpaths.len(), 1);
        assert_eq!(path.subpaths[0].start, point(2.0, 2.0));
    }

    #[test]
    fn explicitly_closed_point_subpath_is_kept() {
        let path = Path::from_commands(&[
            PathCommand::MoveTo(point(1.0, 1.0)),
            PathCommand::Close,
        ]);

        assert_eq!(path.subpaths.len(), 1);
        assert_eq!(path.subpaths[0].start, point(1.0, 1.0));
        assert!(path.subpaths[0].closed);
        assert!(path.subpaths[0].segments.is_empty());
    }

    #[test]
    fn drawing_continues_from_subpath_start_after_close() {
        let path = Path::from_commands(&[
            PathCommand::MoveTo(point(1.0, 1.0)),
            PathCommand::LineTo(point(2.0, 2.0)),
            PathCommand::Close,
            PathCommand::LineTo(point(3.0, 3.0)),
        ]);

        assert_eq!(path.subpaths.len(), 2);
        assert_eq!(path.subpaths[1].start, point(1.0, 1.0));
        assert_eq!(
            path.subpaths[1].segments[0],
            Segment::Line(LineSegment {
                from: point(1.0, 1.0),
                to: point(3.0, 3.0),
            })
        );
    }

    #[test]
    fn horizontal_and_vertical_lines() {
        let path = Path::from_commands(&[
            PathCommand::MoveTo(point(1.0, 2.0)),
            PathCommand::HorizontalLineTo(5.0),
            PathCommand::VerticalLineTo(7.0),
        ]);

        let segments = &path.subpaths[0].segments;
        assert_eq!(
            segments[0],
            Segment::Line(LineSegment {
                from: point(1.0, 2.0),
                to: point(5.0, 2.0),
            })
        );
        assert_eq!(
            segments[1],
            Segment::Line(LineSegment {
                from: point(5.0, 2.0),
                to: point(5.0, 7.0),
            })
        );
    }

    #[test]
    fn smooth_cubic_reflects_previous_control_point() {
        let path = Path::from_commands(&[
            PathCommand::MoveTo(point(0.0, 0.0)),
            PathCommand::CubicTo {
                ctrl1: point(10.0, 0.0),
                ctrl2: point(20.0, 10.0),
                to: point(20.0, 20.0),
            },
            PathCommand::SmoothCubicTo {
                ctrl2: point(40.0, 40.0),
                to: point(40.0, 20.0),
            },
        ]);

        match path.subpaths[0].segments[1] {
            Segment::Cubic(curve) => {
                // (20, 10) mirrored across (20, 20).
                assert_eq!(curve.ctrl1, point(20.0, 30.0));
                assert_eq!(curve.ctrl2, point(40.0, 40.0));
                assert_eq!(curve.to, point(40.0, 20.0));
            }
            ref other => panic!("expected a cubic, got {:?}", other),
        }
    }

    #[test]
    fn smooth_cubic_without_cubic_predecessor() {
        // No predecessor at all.
        let path = Path::from_commands(&[
            PathCommand::MoveTo(point(5.0, 5.0)),
            PathCommand::SmoothCubicTo {
                ctrl2: point(10.0, 10.0),
                to: point(20.0, 5.0),
            },
        ]);
        match path.subpaths[0].segments[0] {
            Segment::Cubic(curve) => assert_eq!(curve.ctrl1, point(5.0, 5.0)),
            ref other => panic!("expected a cubic, got {:?}", other),
        }

        // A quadratic predecessor does not feed cubic continuity.
        let path = Path::from_commands(&[
            PathCommand::MoveTo(point(0.0, 0.0)),
            PathCommand::QuadraticTo {
                ctrl: point(5.0, 5.0),
                to: point(10.0, 0.0),
            },
            PathCommand::SmoothCubicTo {
                ctrl2: point(20.0, 5.0),
                to: point(20.0, 0.0),
            },
        ]);
        match path.subpaths[0].segments[1] {
            Segment::Cubic(curve) => assert_eq!(curve.ctrl1, point(10.0, 0.0)),
            ref other => panic!("expected a cubic, got {:?}", other),
        }
    }

    #[test]
    fn smooth_quadratic_chain() {
        let path = Path::from_commands(&[
            PathCommand::MoveTo(point(0.0, 0.0)),
            PathCommand::QuadraticTo {
                ctrl: point(5.0, 5.0),
                to: point(10.0, 0.0),
            },
            PathCommand::SmoothQuadraticTo { to: point(20.0, 0.0) },
            PathCommand::SmoothQuadraticTo { to: point(30.0, 0.0) },
        ]);

        let segments = &path.subpaths[0].segments;
        match (&segments[1], &segments[2]) {
            (Segment::Quadratic(first), Segment::Quadratic(second)) => {
                assert_eq!(first.ctrl, point(15.0, -5.0));
                assert_eq!(second.ctrl, point(25.0, 5.0));
            }
            other => panic!("expected quadratics, got {:?}", other),
        }
    }

    #[test]
    fn continuity_cleared_by_non_curve_commands() {
        let path = Path::from_commands(&[
            PathCommand::MoveTo(point(0.0, 0.0)),
            PathCommand::CubicTo {
                ctrl1: point(0.0, 10.0),
                ctrl2: point(10.0, 10.0),
                to: point(10.0, 0.0),
            },
            PathCommand::LineTo(point(20.0, 0.0)),
            PathCommand::SmoothCubicTo {
                ctrl2: point(30.0, 10.0),
                to: point(30.0, 0.0),
            },
        ]);

        match path.subpaths[0].segments[2] {
            Segment::Cubic(curve) => assert_eq!(curve.ctrl1, point(20.0, 0.0)),
            ref other => panic!("expected a cubic, got {:?}", other),
        }
    }

    #[test]
    fn degenerate_arcs() {
        // Coincident endpoints: no segment at all.
        let path = Path::from_commands(&[
            PathCommand::MoveTo(point(1.0, 1.0)),
            arc_command((5.0, 5.0), point(1.0, 1.0)),
        ]);
        assert!(path.subpaths.is_empty());

        // Zero radius: a straight line.
        let path = Path::from_commands(&[
            PathCommand::MoveTo(point(0.0, 0.0)),
            arc_command((0.0, 5.0), point(10.0, 0.0)),
        ]);
        assert_eq!(
            path.subpaths[0].segments[0],
            Segment::Line(LineSegment {
                from: point(0.0, 0.0),
                to: point(10.0, 0.0),
            })
        );
    }

    #[test]
    fn negative_radii_are_absolute() {
        let path = Path::from_commands(&[
            PathCommand::MoveTo(point(0.0, 0.0)),
            arc_command((-5.0, -5.0), point(10.0, 0.0)),
        ]);
        match path.subpaths[0].segments[0] {
            Segment::Arc(arc) => {
                assert!(arc.radii.x > 0.0);
                assert!(arc.radii.y > 0.0);
            }
            ref other => panic!("expected an arc, got {:?}", other),
        }
    }
}
