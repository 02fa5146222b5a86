use crate::scalar::Scalar;
use crate::{Point, Vector};

/// A linear segment.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct LineSegment<S> {
    pub from: Point<S>,
    pub to: Point<S>,
}

impl<S: Scalar> LineSegment<S> {
    /// Sample the segment at t (expecting t between 0 and 1).
    #[inline]
    pub fn sample(&self, t: S) -> Point<S> {
        self.from.lerp(self.to, t)
    }

    #[inline]
    pub fn to_vector(&self) -> Vector<S> {
        self.to - self.from
    }

    #[inline]
    pub fn length(&self) -> S {
        self.to_vector().length()
    }

    /// Swap the direction of the segment.
    #[inline]
    pub fn flip(&self) -> Self {
        LineSegment {
            from: self.to,
            to: self.from,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point;

    #[test]
    fn basic() {
        let segment = LineSegment {
            from: point(1.0, 1.0),
            to: point(3.0, 5.0),
        };

        assert_eq!(segment.sample(0.0), segment.from);
        assert_eq!(segment.sample(1.0), segment.to);
        assert_eq!(segment.sample(0.5), point(2.0, 3.0));
        assert_eq!(segment.to_vector(), crate::vector(2.0, 4.0));
        assert_eq!(segment.flip().to_vector(), crate::vector(-2.0, -4.0));
    }
}
