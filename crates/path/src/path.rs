//! The retained path data structure: typed segments grouped into subpaths.

use crate::builder::Builder;
use crate::geom::{Arc, CubicBezierSegment, LineSegment, QuadraticBezierSegment};
use crate::math::Point;

/// A typed path segment.
///
/// Arcs are stored in the center parameterization, which is the form
/// geometric operations need; the SVG endpoint parameterization only exists
/// in path data text and in the transient command sequence.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum Segment {
    Line(LineSegment<f64>),
    Quadratic(QuadraticBezierSegment<f64>),
    Cubic(CubicBezierSegment<f64>),
    Arc(Arc<f64>),
}

impl Segment {
    /// The segment's start position.
    pub fn from(&self) -> Point {
        match self {
            Segment::Line(segment) => segment.from,
            Segment::Quadratic(segment) => segment.from,
            Segment::Cubic(segment) => segment.from,
            Segment::Arc(arc) => arc.from(),
        }
    }

    /// The segment's end position.
    pub fn to(&self) -> Point {
        match self {
            Segment::Line(segment) => segment.to,
            Segment::Quadratic(segment) => segment.to,
            Segment::Cubic(segment) => segment.to,
            Segment::Arc(arc) => arc.to(),
        }
    }
}

/// A contiguous run of segments sharing a single start position.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Subpath {
    pub start: Point,
    pub segments: Vec<Segment>,
    pub closed: bool,
}

impl Subpath {
    /// The position drawing ends at, before any closing line.
    pub fn last_position(&self) -> Point {
        self.segments.last().map(|s| s.to()).unwrap_or(self.start)
    }

    /// The line sealing a closed subpath, if sealing it requires one.
    ///
    /// Closed subpaths do not store their closing edge; it is implied by the
    /// `closed` flag, matching the way a `Z` command behaves in path data.
    pub fn closing_line(&self) -> Option<LineSegment<f64>> {
        if !self.closed {
            return None;
        }
        let last = self.last_position();
        if last == self.start {
            return None;
        }

        Some(LineSegment {
            from: last,
            to: self.start,
        })
    }
}

/// A path: an ordered sequence of subpaths.
///
/// The value is rebuilt wholesale by each parse or edit, never mutated in
/// place, so it can be shared or copied freely.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Path {
    pub subpaths: Vec<Subpath>,
}

impl Path {
    /// Creates an empty path.
    pub fn new() -> Path {
        Path {
            subpaths: Vec::new(),
        }
    }

    /// Creates a builder object to build a path.
    pub fn builder() -> Builder {
        Builder::new()
    }

    pub fn is_empty(&self) -> bool {
        self.subpaths.is_empty()
    }

    /// Iterates over the segments of all subpaths in order.
    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.subpaths.iter().flat_map(|sp| sp.segments.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::point;

    #[test]
    fn closing_line() {
        let mut builder = Path::builder();
        builder.begin(point(0.0, 0.0));
        builder.line_to(point(10.0, 0.0));
        builder.line_to(point(10.0, 10.0));
        builder.close();
        let path = builder.build();

        let subpath = &path.subpaths[0];
        assert_eq!(
            subpath.closing_line(),
            Some(LineSegment {
                from: point(10.0, 10.0),
                to: point(0.0, 0.0),
            })
        );

        // A subpath that ends where it started has nothing to seal.
        let mut builder = Path::builder();
        builder.begin(point(0.0, 0.0));
        builder.line_to(point(10.0, 0.0));
        builder.line_to(point(0.0, 0.0));
        builder.close();
        let path = builder.build();
        assert_eq!(path.subpaths[0].closing_line(), None);

        // Open subpaths are never sealed.
        let mut builder = Path::builder();
        builder.begin(point(0.0, 0.0));
        builder.line_to(point(10.0, 0.0));
        let path = builder.build();
        assert_eq!(path.subpaths[0].closing_line(), None);
    }

    #[test]
    fn segment_endpoints() {
        let segment = Segment::Line(LineSegment {
            from: point(1.0, 2.0),
            to: point(3.0, 4.0),
        });
        assert_eq!(segment.from(), point(1.0, 2.0));
        assert_eq!(segment.to(), point(3.0, 4.0));
    }
}
