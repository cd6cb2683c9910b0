// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2025 William Bro-Jørgensen
// Copyright (c) 2020 Guillaume Fraux and contributors
//
// See LICENSE at the project root for full text.

use crate::error::TrajError;
use crate::format::FileFormat;
use crate::frame::Frame;
use log::{debug, warn};
use std::fmt;
use std::io::{BufRead, Write};
use std::ops::ControlFlow;

/// Plain XYZ: `natoms`, a comment line, then `natoms` lines of
/// `label x y z`, repeated for every frame.
pub struct XYZFormat;

impl XYZFormat {
    /// Parses a sequence of lines into frames.
    ///
    /// The atom count is read once, from the first line, and fixes the block
    /// size (`natoms + 2` lines) for the whole input. The count lines of later
    /// blocks are skipped without being checked, so files whose frames have
    /// different atom counts are split at the wrong places.
    ///
    /// Parsing stops at the first blank line. Whatever follows it is ignored,
    /// and a frame cut short by it is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`TrajError::InvalidHeader`] if there are no lines or the first
    /// one is not an atom count, and [`TrajError::MalformedRecord`] for an
    /// atom line that is not `label x y z`.
    pub fn parse_lines<I, S>(&self, lines: I) -> Result<Vec<Frame>, TrajError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parser = BlockParser::default();
        for line in lines {
            if parser.feed(line.as_ref())?.is_break() {
                break;
            }
        }
        parser.finish()
    }
}

/// Line-by-line state machine shared by [`XYZFormat::parse_lines`] and
/// [`FileFormat::read_all`].
#[derive(Default)]
struct BlockParser {
    natoms: Option<usize>,
    /// 0-based index of the next line
    position: usize,
    current: Option<Frame>,
    frames: Vec<Frame>,
}

impl BlockParser {
    fn feed(&mut self, line: &str) -> Result<ControlFlow<()>, TrajError> {
        let index = self.position;
        self.position += 1;

        let line = line.trim();
        if line.is_empty() {
            debug!("stopping at blank line {}", index + 1);
            return Ok(ControlFlow::Break(()));
        }

        let natoms = match self.natoms {
            Some(natoms) => natoms,
            None => {
                let natoms = line
                    .parse::<usize>()
                    .ok()
                    .filter(|n| n.checked_add(2).is_some())
                    .ok_or(TrajError::InvalidHeader { line: index + 1 })?;
                debug!("reading frames of {natoms} atoms");
                self.natoms = Some(natoms);
                natoms
            }
        };

        let offset = index % (natoms + 2);
        match offset {
            0 => {}
            // `natoms` comes straight from the file, cap the reservation
            1 => self.current = Some(Frame::with_capacity(line, natoms.min(4096))),
            _ => {
                let (label, position) = parse_atom(line, index + 1)?;
                if let Some(frame) = self.current.as_mut() {
                    frame.add_atom(label, position);
                }
            }
        }

        if offset == natoms + 1 {
            if let Some(frame) = self.current.take() {
                self.frames.push(frame);
            }
        }
        Ok(ControlFlow::Continue(()))
    }

    fn finish(self) -> Result<Vec<Frame>, TrajError> {
        if self.position == 0 {
            return Err(TrajError::InvalidHeader { line: 1 });
        }
        if let Some(frame) = self.current {
            warn!(
                "dropping incomplete frame {} ({} of {} atoms read)",
                self.frames.len(),
                frame.size(),
                self.natoms.unwrap_or_default()
            );
        }
        Ok(self.frames)
    }
}

fn parse_atom(line: &str, lineno: usize) -> Result<(&str, [f64; 3]), TrajError> {
    let mut tokens = line.split_whitespace();
    let label = tokens
        .next()
        .ok_or_else(|| TrajError::malformed(lineno, "missing atom label"))?;

    let mut position = [0.0; 3];
    for (axis, value) in ["x", "y", "z"].into_iter().zip(position.iter_mut()) {
        let token = tokens
            .next()
            .ok_or_else(|| TrajError::malformed(lineno, format!("missing {axis} coordinate")))?;
        *value = token.parse().map_err(|e| {
            TrajError::malformed(
                lineno,
                format!("failed to parse {axis} coordinate '{token}': {e}"),
            )
        })?;
    }
    // trailing columns (velocities, charges, ...) are not read
    Ok((label, position))
}

/// Fixed-point coordinate, 12 decimals right-aligned in 18 columns.
struct Coordinate(f64);

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_nan() {
            write!(f, "{:>18}", "nan")
        } else {
            write!(f, "{:>18.12}", self.0)
        }
    }
}

impl FileFormat for XYZFormat {
    fn read_all<R: BufRead>(&self, reader: R) -> Result<Vec<Frame>, TrajError> {
        let mut parser = BlockParser::default();
        for line in reader.lines() {
            if parser.feed(&line?)?.is_break() {
                break;
            }
        }
        parser.finish()
    }

    fn write_next<W: Write>(&self, writer: &mut W, frame: &Frame) -> Result<(), TrajError> {
        writeln!(writer, "{}", frame.size())?;
        writeln!(writer, "{}", frame.comment)?;
        for (label, &[x, y, z]) in frame.atoms() {
            writeln!(
                writer,
                "{label:>3} {} {} {}",
                Coordinate(x),
                Coordinate(y),
                Coordinate(z)
            )?;
        }
        Ok(())
    }
}
