#![deny(bare_trait_objects)]

//! SVG path data tools in Rust.
//!
//! # Crates
//!
//! This meta-crate (`inkpath`) reexports the following sub-crates for convenience:
//!
//! * **inkpath_geom** - Line segments, bézier curves and elliptic arcs, including
//!   the conversion between the endpoint and center arc parameterizations.
//! * **inkpath_path** - The typed path data structure (segments, subpaths) and
//!   the builder that assembles parsed commands into geometry.
//! * **inkpath_svg** - Parsing of SVG path data strings (the `d` attribute
//!   syntax) and serialization back to canonical path data.
//!
//! Each `inkpath_<name>` crate is reexported as a `<name>` module. For example
//! `inkpath_svg::parse_path` is also available as `inkpath::svg::parse_path`.
//!
//! # Feature flags
//!
//! Serialization of the geometry types using serde can be enabled with the
//! `serialization` feature flag (disabled by default). This covers the path
//! data structure, not the textual path data syntax which is always available
//! through `inkpath_svg`.
//!
//! # Example
//!
//! ```
//! use inkpath::svg::{parse_path, serialize_path};
//!
//! let path = parse_path("M 0 0 L 10 0 L 10 10 Z");
//! assert_eq!(path.subpaths.len(), 1);
//! assert_eq!(serialize_path(&path), "M 0 0 L 10 0 L 10 10 Z");
//! ```

pub use inkpath_geom as geom;
pub use inkpath_path as path;
pub use inkpath_svg as svg;

pub use crate::path::math;
pub use crate::path::{Path, Segment, Subpath};
