//! Parser for the SVG path data micro-syntax.

use crate::path::math::{point, vector, Angle, Point};
use crate::path::{ArcCommand, ArcFlags, Path, PathCommand};
use crate::scanner::Scanner;

use thiserror::Error;

/// Path data parsing error, with the byte offset at which parsing stopped.
#[derive(Copy, Clone, Debug, PartialEq, Error)]
pub enum ParseError {
    #[error("Invalid command {command:?} at offset {position}")]
    Command { command: char, position: usize },
    #[error("Expected a number at offset {position}")]
    Number { position: usize },
    #[error("Expected an arc flag (0 or 1) at offset {position}")]
    Flag { position: usize },
    #[error("Unexpected input at offset {position}")]
    UnexpectedInput { position: usize },
}

/// Parses path data into geometry, ignoring whatever trails the first error.
pub fn parse_path(input: &str) -> Path {
    Path::from_commands(&parse_path_commands(input))
}

/// Parses path data into geometry, reporting errors.
pub fn try_parse_path(input: &str) -> Result<Path, ParseError> {
    Ok(Path::from_commands(&try_parse_path_commands(input)?))
}

/// Parses path data into a command sequence, ignoring whatever trails the
/// first error.
pub fn parse_path_commands(input: &str) -> Vec<PathCommand> {
    let mut commands = Vec::new();
    let _ = PathParser::new(input).parse(&mut commands);

    commands
}

/// Parses path data into a command sequence, reporting errors.
pub fn try_parse_path_commands(input: &str) -> Result<Vec<PathCommand>, ParseError> {
    let mut commands = Vec::new();
    PathParser::new(input).parse(&mut commands)?;

    Ok(commands)
}

/// The recursive-descent state: a scanner plus the two positions relative
/// coordinates and `Z` resolve against.
struct PathParser<'l> {
    scanner: Scanner<'l>,
    current_position: Point,
    first_position: Point,
}

impl<'l> PathParser<'l> {
    fn new(input: &'l str) -> PathParser<'l> {
        PathParser {
            scanner: Scanner::new(input),
            current_position: point(0.0, 0.0),
            first_position: point(0.0, 0.0),
        }
    }

    fn parse(&mut self, commands: &mut Vec<PathCommand>) -> Result<(), ParseError> {
        loop {
            self.scanner.skip_separators();
            let position = self.scanner.position();
            let byte = match self.scanner.peek() {
                Some(byte) => byte,
                None => return Ok(()),
            };

            if !byte.is_ascii_alphabetic() {
                return Err(ParseError::UnexpectedInput { position });
            }
            self.scanner.advance();

            let relative = byte.is_ascii_lowercase();
            match byte.to_ascii_uppercase() {
                b'M' => self.parse_move_to(relative, commands)?,
                b'L' => self.parse_line_to(relative, commands)?,
                b'H' => self.parse_horizontal_line_to(relative, commands)?,
                b'V' => self.parse_vertical_line_to(relative, commands)?,
                b'C' => self.parse_cubic_to(relative, commands)?,
                b'S' => self.parse_smooth_cubic_to(relative, commands)?,
                b'Q' => self.parse_quadratic_to(relative, commands)?,
                b'T' => self.parse_smooth_quadratic_to(relative, commands)?,
                b'A' => self.parse_arc_to(relative, commands)?,
                b'Z' => {
                    commands.push(PathCommand::Close);
                    self.current_position = self.first_position;
                }
                _ => {
                    return Err(ParseError::Command {
                        command: byte as char,
                        position,
                    })
                }
            }
        }
    }

    // Each command is followed by one or more parameter groups; the
    // repetition ends when the next token cannot start a number. A group
    // that starts but does not complete is an error.

    fn parse_move_to(
        &mut self,
        relative: bool,
        commands: &mut Vec<PathCommand>,
    ) -> Result<(), ParseError> {
        let to = self.point(relative)?;
        self.current_position = to;
        self.first_position = to;
        commands.push(PathCommand::MoveTo(to));

        // Extra coordinate pairs are implicit line-to commands.
        while self.at_number() {
            let to = self.point(relative)?;
            self.current_position = to;
            commands.push(PathCommand::LineTo(to));
        }

        Ok(())
    }

    fn parse_line_to(
        &mut self,
        relative: bool,
        commands: &mut Vec<PathCommand>,
    ) -> Result<(), ParseError> {
        loop {
            let to = self.point(relative)?;
            self.current_position = to;
            commands.push(PathCommand::LineTo(to));
            if !self.at_number() {
                return Ok(());
            }
        }
    }

    fn parse_horizontal_line_to(
        &mut self,
        relative: bool,
        commands: &mut Vec<PathCommand>,
    ) -> Result<(), ParseError> {
        loop {
            let mut x = self.number()?;
            if relative {
                x += self.current_position.x;
            }
            self.current_position.x = x;
            commands.push(PathCommand::HorizontalLineTo(x));
            if !self.at_number() {
                return Ok(());
            }
        }
    }

    fn parse_vertical_line_to(
        &mut self,
        relative: bool,
        commands: &mut Vec<PathCommand>,
    ) -> Result<(), ParseError> {
        loop {
            let mut y = self.number()?;
            if relative {
                y += self.current_position.y;
            }
            self.current_position.y = y;
            commands.push(PathCommand::VerticalLineTo(y));
            if !self.at_number() {
                return Ok(());
            }
        }
    }

    fn parse_cubic_to(
        &mut self,
        relative: bool,
        commands: &mut Vec<PathCommand>,
    ) -> Result<(), ParseError> {
        loop {
            let ctrl1 = self.point(relative)?;
            let ctrl2 = self.point(relative)?;
            let to = self.point(relative)?;
            self.current_position = to;
            commands.push(PathCommand::CubicTo { ctrl1, ctrl2, to });
            if !self.at_number() {
                return Ok(());
            }
        }
    }

    fn parse_smooth_cubic_to(
        &mut self,
        relative: bool,
        commands: &mut Vec<PathCommand>,
    ) -> Result<(), ParseError> {
        loop {
            let ctrl2 = self.point(relative)?;
            let to = self.point(relative)?;
            self.current_position = to;
            commands.push(PathCommand::SmoothCubicTo { ctrl2, to });
            if !self.at_number() {
                return Ok(());
            }
        }
    }

    fn parse_quadratic_to(
        &mut self,
        relative: bool,
        commands: &mut Vec<PathCommand>,
    ) -> Result<(), ParseError> {
        loop {
            let ctrl = self.point(relative)?;
            let to = self.point(relative)?;
            self.current_position = to;
            commands.push(PathCommand::QuadraticTo { ctrl, to });
            if !self.at_number() {
                return Ok(());
            }
        }
    }

    fn parse_smooth_quadratic_to(
        &mut self,
        relative: bool,
        commands: &mut Vec<PathCommand>,
    ) -> Result<(), ParseError> {
        loop {
            let to = self.point(relative)?;
            self.current_position = to;
            commands.push(PathCommand::SmoothQuadraticTo { to });
            if !self.at_number() {
                return Ok(());
            }
        }
    }

    fn parse_arc_to(
        &mut self,
        relative: bool,
        commands: &mut Vec<PathCommand>,
    ) -> Result<(), ParseError> {
        loop {
            // Radii are lengths, never relative.
            let rx = self.number()?;
            let ry = self.number()?;
            let x_rotation = Angle::degrees(self.number()?);
            let large_arc = self.flag()?;
            let sweep = self.flag()?;
            let to = self.point(relative)?;
            self.current_position = to;
            commands.push(PathCommand::ArcTo(ArcCommand {
                radii: vector(rx, ry),
                x_rotation,
                flags: ArcFlags { large_arc, sweep },
                to,
            }));
            if !self.at_number() {
                return Ok(());
            }
        }
    }

    fn number(&mut self) -> Result<f64, ParseError> {
        self.scanner.skip_separators();
        let position = self.scanner.position();
        self.scanner
            .next_number()
            .ok_or(ParseError::Number { position })
    }

    fn flag(&mut self) -> Result<bool, ParseError> {
        self.scanner.skip_separators();
        let position = self.scanner.position();
        self.scanner
            .next_flag()
            .ok_or(ParseError::Flag { position })
    }

    fn point(&mut self, relative: bool) -> Result<Point, ParseError> {
        let x = self.number()?;
        let y = self.number()?;
        if relative {
            Ok(self.current_position + vector(x, y))
        } else {
            Ok(point(x, y))
        }
    }

    /// Whether the next token can start a number, after separators.
    fn at_number(&mut self) -> bool {
        self.scanner.skip_separators();
        matches!(
            self.scanner.peek(),
            Some(b'0'..=b'9') | Some(b'+') | Some(b'-') | Some(b'.')
        )
    }
}
