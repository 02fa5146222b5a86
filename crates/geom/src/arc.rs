//! Elliptic arc related maths and tools.

use arrayvec::ArrayVec;

use crate::cubic_bezier::CubicBezierSegment;
use crate::scalar::{cast, Float, FloatConst, Scalar};
use crate::{point, vector, Angle, Point, Rotation, Vector};

/// An elliptic arc curve segment using the SVG endpoint parameterization.
///
/// This is the form of the `A` path data command: the arc is described by its
/// two endpoints, the ellipse radii, the rotation of the ellipse's x-axis and
/// two flags selecting one of the four candidate arcs.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct SvgArc<S> {
    pub from: Point<S>,
    pub to: Point<S>,
    pub radii: Vector<S>,
    pub x_rotation: Angle<S>,
    pub flags: ArcFlags,
}

/// An elliptic arc curve segment using the center parameterization.
///
/// The arc spans the angles `start_angle` to `start_angle + sweep_angle` on
/// the ellipse defined by `center`, `radii` and `x_rotation`. Angles are
/// expressed in the ellipse's own frame before the x-axis rotation is applied.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Arc<S> {
    pub center: Point<S>,
    pub radii: Vector<S>,
    pub start_angle: Angle<S>,
    pub sweep_angle: Angle<S>,
    pub x_rotation: Angle<S>,
}

/// Flag parameters for arcs as described by the SVG specification.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct ArcFlags {
    /// Of the two candidate arc sweeps, choose the one spanning more than
    /// half of the ellipse.
    pub large_arc: bool,
    /// Sweep in the direction of increasing angles.
    pub sweep: bool,
}

impl<S: Scalar> Arc<S> {
    /// Create simple circle.
    pub fn circle(center: Point<S>, radius: S) -> Self {
        Arc {
            center,
            radii: vector(radius, radius),
            start_angle: Angle::radians(S::ZERO),
            sweep_angle: Angle::radians(S::TWO * S::PI()),
            x_rotation: Angle::radians(S::ZERO),
        }
    }

    /// Convert from the SVG endpoint parameterization.
    ///
    /// Implements the endpoint-to-center conversion of the SVG specification
    /// (section B.2.4), including the mandatory scaling up of radii that are
    /// too small for the chord. Negative radii are taken as their absolute
    /// values. The caller is expected to have filtered out the degenerate
    /// cases first (`arc.is_straight_line()` returns true for them).
    pub fn from_svg_arc(arc: &SvgArc<S>) -> Arc<S> {
        debug_assert!(!arc.from.x.is_nan());
        debug_assert!(!arc.from.y.is_nan());
        debug_assert!(!arc.to.x.is_nan());
        debug_assert!(!arc.to.y.is_nan());
        debug_assert!(!arc.radii.x.is_nan());
        debug_assert!(!arc.radii.y.is_nan());
        debug_assert!(!arc.x_rotation.get().is_nan());
        debug_assert!(!arc.is_straight_line());

        let mut rx = arc.radii.x.abs();
        let mut ry = arc.radii.y.abs();

        let phi = arc.x_rotation.get() % (S::TWO * S::PI());
        let (sin_phi, cos_phi) = Float::sin_cos(phi);

        let hd_x = (arc.from.x - arc.to.x) / S::TWO;
        let hd_y = (arc.from.y - arc.to.y) / S::TWO;
        let mid_x = (arc.from.x + arc.to.x) / S::TWO;
        let mid_y = (arc.from.y + arc.to.y) / S::TWO;

        // Half of the chord, rotated into the ellipse's local frame (F.6.5.1).
        let x1 = cos_phi * hd_x + sin_phi * hd_y;
        let y1 = -sin_phi * hd_x + cos_phi * hd_y;

        // Scale the radii up if the chord does not fit (F.6.6).
        let lambda = (x1 * x1) / (rx * rx) + (y1 * y1) / (ry * ry);
        if lambda > S::ONE {
            let scale = lambda.sqrt();
            rx *= scale;
            ry *= scale;
        }

        // Local center offset (F.6.5.2). The radicand can dip below zero by a
        // rounding error when lambda is close to 1, clamp it rather than
        // letting the square root produce a NaN.
        let rxry = rx * rx * ry * ry;
        let rxy1 = rx * rx * y1 * y1;
        let ryx1 = ry * ry * x1 * x1;
        let radicand = ((rxry - rxy1 - ryx1) / (rxy1 + ryx1)).max(S::ZERO);

        let sign = if arc.flags.large_arc == arc.flags.sweep {
            -S::ONE
        } else {
            S::ONE
        };
        let coe = sign * radicand.sqrt();

        let cx = coe * rx * y1 / ry;
        let cy = -coe * ry * x1 / rx;

        // Back to the user frame (F.6.5.3).
        let center = point(
            cos_phi * cx - sin_phi * cy + mid_x,
            sin_phi * cx + cos_phi * cy + mid_y,
        );

        // Start and end angles (F.6.5.5, F.6.5.6).
        let start_angle = Float::atan2((y1 - cy) / ry, (x1 - cx) / rx);
        let end_angle = Float::atan2((-y1 - cy) / ry, (-x1 - cx) / rx);

        let mut sweep_angle = end_angle - start_angle;
        if !arc.flags.sweep && sweep_angle > S::ZERO {
            sweep_angle -= S::TWO * S::PI();
        }
        if arc.flags.sweep && sweep_angle < S::ZERO {
            sweep_angle += S::TWO * S::PI();
        }

        Arc {
            center,
            radii: vector(rx, ry),
            start_angle: Angle::radians(start_angle),
            sweep_angle: Angle::radians(sweep_angle),
            x_rotation: Angle::radians(phi),
        }
    }

    /// Convert to the SVG endpoint parameterization.
    pub fn to_svg_arc(&self) -> SvgArc<S> {
        let from = self.sample(S::ZERO);
        let to = self.sample(S::ONE);
        let flags = ArcFlags {
            large_arc: self.sweep_angle.get().abs() > S::PI(),
            sweep: self.sweep_angle.get() > S::ZERO,
        };

        SvgArc {
            from,
            to,
            radii: self.radii,
            x_rotation: self.x_rotation,
            flags,
        }
    }

    /// Sample the curve at t (expecting t between 0 and 1).
    #[inline]
    pub fn sample(&self, t: S) -> Point<S> {
        let angle = self.get_angle(t).get();
        let (sin, cos) = Float::sin_cos(angle);
        self.transform_local(cos, sin)
    }

    /// Sample the curve's angle at t (expecting t between 0 and 1).
    #[inline]
    pub fn get_angle(&self, t: S) -> Angle<S> {
        self.start_angle + Angle::radians(self.sweep_angle.get() * t)
    }

    #[inline]
    pub fn end_angle(&self) -> Angle<S> {
        self.start_angle + self.sweep_angle
    }

    #[inline]
    pub fn from(&self) -> Point<S> {
        self.sample(S::ZERO)
    }

    #[inline]
    pub fn to(&self) -> Point<S> {
        self.sample(S::ONE)
    }

    /// Approximate the arc with a sequence of cubic bézier curves.
    ///
    /// The sweep is divided into sub-arcs of at most a quarter turn, which
    /// bounds the approximation error of the standard `4/3 · tan(δ/4)`
    /// tangent-length construction to well below a thousandth of the radius.
    /// Consecutive curves share their endpoints. A zero sweep produces
    /// nothing.
    pub fn for_each_cubic_bezier<F>(&self, cb: &mut F)
    where
        F: FnMut(&CubicBezierSegment<S>),
    {
        arc_to_cubic_beziers(self, cb);
    }

    /// Returns the flattened representation of the arc as a short list of
    /// cubic bézier curves.
    ///
    /// A sweep normalized to at most 2π never needs more than four curves
    /// with the quarter-turn cap.
    pub fn to_cubic_beziers(&self) -> ArrayVec<CubicBezierSegment<S>, 4> {
        let mut curves = ArrayVec::new();
        self.for_each_cubic_bezier(&mut |curve| curves.push(*curve));
        curves
    }

    // Map a point on the unit circle onto the positioned, rotated ellipse.
    #[inline]
    fn transform_local(&self, x: S, y: S) -> Point<S> {
        self.center
            + Rotation::new(self.x_rotation)
                .transform_vector(vector(self.radii.x * x, self.radii.y * y))
    }
}

impl<S: Scalar> SvgArc<S> {
    /// Converts to an arc in the center parameterization.
    #[inline]
    pub fn to_arc(&self) -> Arc<S> {
        Arc::from_svg_arc(self)
    }

    /// Per SVG spec, an arc with a zero radius or with coincident endpoints
    /// does not describe an ellipse: the former degrades to a straight line
    /// and the latter contributes nothing.
    pub fn is_straight_line(&self) -> bool {
        self.radii.x.abs() <= S::EPSILON
            || self.radii.y.abs() <= S::EPSILON
            || self.from == self.to
    }
}

fn arc_to_cubic_beziers<S: Scalar, F>(arc: &Arc<S>, cb: &mut F)
where
    F: FnMut(&CubicBezierSegment<S>),
{
    let sweep = arc.sweep_angle.get();
    if sweep == S::ZERO {
        return;
    }

    let sweep_abs = sweep.abs().min(S::TWO * S::PI());
    let n_steps = (sweep_abs / S::FRAC_PI_2()).ceil();
    let step = sweep_abs / n_steps * sweep.signum();

    // Tangent length making the cubic pass through the sub-arc's far point.
    let k = S::FOUR / S::THREE * Float::tan(step / S::FOUR);

    for i in 0..cast::<S, i32>(n_steps).unwrap_or(0) {
        let a1 = arc.start_angle.get() + step * cast(i).unwrap();
        let a2 = a1 + step;
        let (sin1, cos1) = Float::sin_cos(a1);
        let (sin2, cos2) = Float::sin_cos(a2);

        cb(&CubicBezierSegment {
            from: arc.transform_local(cos1, sin1),
            ctrl1: arc.transform_local(cos1 - k * sin1, sin1 + k * cos1),
            ctrl2: arc.transform_local(cos2 + k * sin2, sin2 - k * cos2),
            to: arc.transform_local(cos2, sin2),
        });
    }
}
