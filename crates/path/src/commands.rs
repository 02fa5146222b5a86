//! Path commands with all coordinates resolved to absolute values.
//!
//! A command sequence is the transient output of the path data parser: the
//! command letters and the relative/absolute distinction are gone, but the
//! smooth-curve shorthands and the endpoint parameterization of arcs are
//! still present as written. [`crate::Path::from_commands`] folds the
//! sequence into retained geometry and is where the shorthands get resolved.

use crate::geom::ArcFlags;
use crate::math::{Angle, Point, Vector};

/// A single, absolute path command.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PathCommand {
    /// Start a new subpath at this position (`M`).
    MoveTo(Point),
    /// Straight line to this position (`L`).
    LineTo(Point),
    /// Straight horizontal line to this x coordinate (`H`).
    HorizontalLineTo(f64),
    /// Straight vertical line to this y coordinate (`V`).
    VerticalLineTo(f64),
    /// Cubic bézier curve (`C`).
    CubicTo {
        ctrl1: Point,
        ctrl2: Point,
        to: Point,
    },
    /// Cubic bézier curve with the first control point reflected from the
    /// previous curve (`S`).
    SmoothCubicTo { ctrl2: Point, to: Point },
    /// Quadratic bézier curve (`Q`).
    QuadraticTo { ctrl: Point, to: Point },
    /// Quadratic bézier curve with the control point reflected from the
    /// previous curve (`T`).
    SmoothQuadraticTo { to: Point },
    /// Elliptic arc (`A`).
    ArcTo(ArcCommand),
    /// Close the current subpath (`Z`).
    Close,
}

/// The parameters of an elliptic arc command, as written in path data.
///
/// Radii are kept as written (possibly negative, possibly too small for the
/// chord); the geometry builder applies the sign and radius corrections when
/// converting to the center parameterization.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ArcCommand {
    pub radii: Vector,
    /// Rotation of the ellipse's x-axis.
    pub x_rotation: Angle,
    pub flags: ArcFlags,
    /// The endpoint of the arc.
    pub to: Point,
}
