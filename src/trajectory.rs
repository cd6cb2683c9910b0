use crate::error::TrajError;
use crate::format::{FileFormat, WriteMode};
use crate::formats::xyz::XYZFormat;
use crate::frame::Frame;
use log::info;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::ops::Index;
use std::path::Path;

/// An ordered sequence of frames, fully loaded in memory.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Trajectory {
    pub frames: Vec<Frame>,
}

impl Trajectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_frames(frames: Vec<Frame>) -> Self {
        Trajectory { frames }
    }

    /// Reads every frame of the XYZ file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or read, or if its
    /// content is not valid XYZ.
    pub fn open(path: &Path) -> Result<Self, TrajError> {
        let file = File::open(path)?;
        let trajectory = Self::read_from(BufReader::new(file))?;
        info!("read {} frames from {:?}", trajectory.len(), path);
        Ok(trajectory)
    }

    /// Reads every frame from an XYZ source.
    ///
    /// # Errors
    ///
    /// Returns an error on I/O failure or invalid XYZ content.
    pub fn read_from<R: BufRead>(reader: R) -> Result<Self, TrajError> {
        XYZFormat.read_all(reader).map(Trajectory::from_frames)
    }

    /// Writes all frames to the file at `path` in XYZ format.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or written.
    pub fn write(&self, path: &Path, mode: WriteMode) -> Result<(), TrajError> {
        let mut writer = BufWriter::new(mode.open(path)?);
        self.write_to(&mut writer)?;
        writer.flush()?;
        info!("wrote {} frames to {:?} ({:?})", self.len(), path, mode);
        Ok(())
    }

    /// Writes all frames to `writer` in XYZ format.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<(), TrajError> {
        for frame in &self.frames {
            XYZFormat.write_next(writer, frame)?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Frame> {
        self.frames.iter()
    }

    pub fn first(&self) -> Option<&Frame> {
        self.frames.first()
    }

    pub fn last(&self) -> Option<&Frame> {
        self.frames.last()
    }
}

impl Index<usize> for Trajectory {
    type Output = Frame;

    fn index(&self, index: usize) -> &Self::Output {
        &self.frames[index]
    }
}

impl IntoIterator for Trajectory {
    type Item = Frame;
    type IntoIter = std::vec::IntoIter<Frame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.into_iter()
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a Frame;
    type IntoIter = std::slice::Iter<'a, Frame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}

impl FromIterator<Frame> for Trajectory {
    fn from_iter<T: IntoIterator<Item = Frame>>(iter: T) -> Self {
        Trajectory {
            frames: iter.into_iter().collect(),
        }
    }
}

impl Extend<Frame> for Trajectory {
    fn extend<T: IntoIterator<Item = Frame>>(&mut self, iter: T) {
        self.frames.extend(iter)
    }
}
