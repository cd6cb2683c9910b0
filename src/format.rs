// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2025 William Bro-Jørgensen
// Copyright (c) 2020 Guillaume Fraux and contributors
//
// See LICENSE at the project root for full text.

use crate::error::TrajError;
use crate::frame::Frame;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, Write};
use std::path::Path;

/// How an output file is opened before frames are written to it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// Create the file, truncating any previous content.
    #[default]
    Overwrite,
    /// Create the file if needed and add frames after the existing content.
    Append,
}

impl WriteMode {
    /// Opens `path` according to this mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or opened for writing.
    pub fn open(self, path: &Path) -> Result<File, TrajError> {
        let mut options = OpenOptions::new();
        match self {
            WriteMode::Overwrite => options.write(true).create(true).truncate(true),
            WriteMode::Append => options.append(true).create(true),
        };
        Ok(options.open(path)?)
    }
}

/// Common interface for reading and writing trajectory file formats.
pub trait FileFormat {
    /// Reads every [`Frame`] available in `reader`.
    ///
    /// # Errors
    ///
    /// Returns an error if an I/O or parsing error occurs.
    fn read_all<R: BufRead>(&self, reader: R) -> Result<Vec<Frame>, TrajError>;

    /// Writes the next [`Frame`] to `writer`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_next<W: Write>(&self, writer: &mut W, frame: &Frame) -> Result<(), TrajError>;
}
