#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]

//! Data structures to store paths parsed from SVG path data.
//!
//! This crate is reexported in [inkpath](https://docs.rs/inkpath/).
//!
//! A [`Path`] is an ordered sequence of [`Subpath`]s, each of which is a
//! contiguous, possibly closed run of typed [`Segment`]s (lines, quadratic
//! and cubic béziers, elliptic arcs). Paths are built either through the
//! [`Builder`] or by folding a sequence of absolute [`PathCommand`]s, which
//! is what the `inkpath_svg` parser produces. A path value is immutable once
//! built; edits produce a fresh value.
//!
//! # Examples
//!
//! ```
//! use inkpath_path::Path;
//! use inkpath_path::math::point;
//!
//! let mut builder = Path::builder();
//! builder.begin(point(0.0, 0.0));
//! builder.line_to(point(10.0, 0.0));
//! builder.line_to(point(10.0, 10.0));
//! builder.close();
//!
//! let path = builder.build();
//! assert_eq!(path.subpaths.len(), 1);
//! assert!(path.subpaths[0].closed);
//! ```

pub use inkpath_geom as geom;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub mod builder;
pub mod commands;
pub mod path;

#[doc(inline)]
pub use crate::builder::Builder;
#[doc(inline)]
pub use crate::commands::{ArcCommand, PathCommand};
pub use crate::geom::ArcFlags;
#[doc(inline)]
pub use crate::path::{Path, Segment, Subpath};

pub mod math {
    //! f64 versions of the inkpath_geom types used everywhere.

    use crate::geom::euclid;

    /// Alias for `euclid::default::Point2D<f64>`.
    pub type Point = euclid::default::Point2D<f64>;

    /// Alias for `euclid::default::Vector2D<f64>`.
    pub type Vector = euclid::default::Vector2D<f64>;

    /// An angle in radians (f64).
    pub type Angle = euclid::Angle<f64>;

    /// Shorthand for `Point::new(x, y)`.
    #[inline]
    pub fn point(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    /// Shorthand for `Vector::new(x, y)`.
    #[inline]
    pub fn vector(x: f64, y: f64) -> Vector {
        Vector::new(x, y)
    }
}
