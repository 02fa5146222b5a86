//! Serializes paths back into path data text.
//!
//! Output is canonical: absolute commands only, and only `M`, `L`, `Q`, `C`,
//! `A` and `Z` (shorthands are expanded at parse time and stay expanded).
//! Tokens are separated by single spaces.

use crate::path::geom::{Arc, CubicBezierSegment};
use crate::path::{Path, Segment, Subpath};

/// Fraction digits numbers are rounded to when serializing.
pub const MAX_FRACTION_DIGITS: usize = 6;

/// Options controlling path data output.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SerializeOptions {
    /// Replace arcs with cubic bézier approximations instead of emitting
    /// `A` commands.
    pub flatten_arcs: bool,
}

/// Serializes a path with the default options.
pub fn serialize_path(path: &Path) -> String {
    serialize_path_with(path, &SerializeOptions::default())
}

pub fn serialize_path_with(path: &Path, options: &SerializeOptions) -> String {
    let mut output = String::new();
    for subpath in &path.subpaths {
        write_subpath(&mut output, subpath, options);
    }

    output
}

fn write_subpath(output: &mut String, subpath: &Subpath, options: &SerializeOptions) {
    write_command(output, 'M', &[subpath.start.x, subpath.start.y]);
    for segment in &subpath.segments {
        match segment {
            Segment::Line(line) => {
                write_command(output, 'L', &[line.to.x, line.to.y]);
            }
            Segment::Quadratic(curve) => {
                write_command(
                    output,
                    'Q',
                    &[curve.ctrl.x, curve.ctrl.y, curve.to.x, curve.to.y],
                );
            }
            Segment::Cubic(curve) => {
                write_cubic(output, curve);
            }
            Segment::Arc(arc) => {
                if options.flatten_arcs {
                    write_flattened_arc(output, arc);
                } else {
                    write_arc(output, arc);
                }
            }
        }
    }
    if subpath.closed {
        write_command(output, 'Z', &[]);
    }
}

fn write_cubic(output: &mut String, curve: &CubicBezierSegment<f64>) {
    write_command(
        output,
        'C',
        &[
            curve.ctrl1.x,
            curve.ctrl1.y,
            curve.ctrl2.x,
            curve.ctrl2.y,
            curve.to.x,
            curve.to.y,
        ],
    );
}

fn write_arc(output: &mut String, arc: &Arc<f64>) {
    let svg_arc = arc.to_svg_arc();
    write_command(
        output,
        'A',
        &[
            svg_arc.radii.x,
            svg_arc.radii.y,
            svg_arc.x_rotation.to_degrees(),
            if svg_arc.flags.large_arc { 1.0 } else { 0.0 },
            if svg_arc.flags.sweep { 1.0 } else { 0.0 },
            svg_arc.to.x,
            svg_arc.to.y,
        ],
    );
}

fn write_flattened_arc(output: &mut String, arc: &Arc<f64>) {
    for curve in arc.to_cubic_beziers() {
        write_cubic(output, &curve);
    }
}

fn write_command(output: &mut String, letter: char, parameters: &[f64]) {
    if !output.is_empty() {
        output.push(' ');
    }
    output.push(letter);
    for parameter in parameters {
        output.push(' ');
        write_number(output, *parameter);
    }
}

/// Writes a number rounded to [`MAX_FRACTION_DIGITS`], with trailing zeros
/// (and a bare trailing dot) removed. Never uses scientific notation, and
/// negative zero collapses to `0`.
fn write_number(output: &mut String, value: f64) {
    let mut text = format!("{:.*}", MAX_FRACTION_DIGITS, value);
    if text.contains('.') {
        while text.ends_with('0') {
            text.pop();
        }
        if text.ends_with('.') {
            text.pop();
        }
    }
    if text == "-0" {
        text.clear();
        text.push('0');
    }
    output.push_str(&text);
}
