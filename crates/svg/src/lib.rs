#![deny(bare_trait_objects)]

//! SVG path data parsing and serialization.
//!
//! This crate is reexported in [inkpath](https://docs.rs/inkpath/).
//!
//! The parser turns the path data micro-syntax (the `d` attribute of SVG
//! `<path>` elements) into [`Path`] geometry or into a flat sequence of
//! absolute [`PathCommand`]s. Parsing is lenient by default: when the input
//! stops conforming to the grammar, everything parsed up to that point is
//! returned and the rest is ignored. The `try_` variants report the error
//! and where it happened instead.
//!
//! The serializer writes paths back out using absolute commands only.
//!
//! # Examples
//!
//! ```
//! use inkpath_svg::{parse_path, serialize_path};
//!
//! let path = parse_path("M 0 0 L 10 0 l 0 10 z");
//! assert_eq!(serialize_path(&path), "M 0 0 L 10 0 L 10 10 Z");
//! ```
//!
//! [`Path`]: inkpath_path::Path
//! [`PathCommand`]: inkpath_path::PathCommand

pub use inkpath_path as path;

mod parser;
mod scanner;
mod serializer;

pub use crate::parser::{
    parse_path, parse_path_commands, try_parse_path, try_parse_path_commands, ParseError,
};
pub use crate::serializer::{
    serialize_path, serialize_path_with, SerializeOptions, MAX_FRACTION_DIGITS,
};
