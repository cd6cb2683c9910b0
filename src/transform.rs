// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2025 William Bro-Jørgensen
// Copyright (c) 2020 Guillaume Fraux and contributors
//
// See LICENSE at the project root for full text.

//! Whole-trajectory operations: reversing, joining and thinning.

use crate::error::TrajError;
use crate::trajectory::Trajectory;
use log::debug;
use std::path::{Path, PathBuf};

/// Returns the frames of `trajectory` in reverse order.
pub fn reverse(trajectory: Trajectory) -> Trajectory {
    let mut frames = trajectory.frames;
    frames.reverse();
    Trajectory::from_frames(frames)
}

/// Joins two trajectories, writing `second_original` first.
///
/// This matches the convention of joining a forward run with a backward run
/// that was already reversed: the result is `second_original` followed by
/// `first_original`. Frames are not checked against each other, so the
/// result may mix atom counts.
pub fn concatenate(first_original: Trajectory, second_original: Trajectory) -> Trajectory {
    let mut frames = second_original.frames;
    frames.extend(first_original.frames);
    Trajectory::from_frames(frames)
}

/// How [`decimate`] picks frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecimateOptions {
    /// Keep every `stride`-th frame, starting with the first one.
    pub stride: usize,
    /// Target number of frames. Takes precedence over `stride` when set.
    pub length: Option<usize>,
    /// Append the last input frame when the selection does not end on it.
    pub keep_last: bool,
}

impl Default for DecimateOptions {
    fn default() -> Self {
        DecimateOptions {
            stride: 1,
            length: None,
            keep_last: true,
        }
    }
}

impl DecimateOptions {
    pub fn with_stride(stride: usize) -> Self {
        DecimateOptions {
            stride,
            ..Self::default()
        }
    }

    pub fn with_length(length: usize) -> Self {
        DecimateOptions {
            length: Some(length),
            ..Self::default()
        }
    }

    /// Stride actually used for a trajectory of `total` frames:
    /// `total / length` when a length is set, `stride` otherwise.
    pub fn effective_stride(&self, total: usize) -> usize {
        match self.length {
            // a zero length yields a zero stride, rejected by `decimate`
            Some(0) => 0,
            Some(length) => total / length,
            None => self.stride,
        }
    }
}

/// Keeps frames `0, s, 2s, ...` where `s` is the effective stride.
///
/// With `keep_last`, the true last frame is appended unless the last selected
/// frame is already equal to it. Only that one frame is compared, by value.
///
/// # Errors
///
/// Returns [`TrajError::EmptyTrajectory`] for a trajectory without frames and
/// [`TrajError::InvalidStride`] when the effective stride is zero, which
/// includes a target length larger than the number of frames.
pub fn decimate(
    trajectory: &Trajectory,
    options: &DecimateOptions,
) -> Result<Trajectory, TrajError> {
    let total = trajectory.len();
    let Some(last) = trajectory.last() else {
        return Err(TrajError::EmptyTrajectory);
    };

    let stride = options.effective_stride(total);
    if stride == 0 {
        return Err(TrajError::InvalidStride {
            total,
            stride,
            length: options.length,
        });
    }

    let mut thinned: Trajectory = trajectory.iter().step_by(stride).cloned().collect();
    if options.keep_last && thinned.last() != Some(last) {
        thinned.frames.push(last.clone());
    }

    debug!("kept {} of {} frames with stride {stride}", thinned.len(), total);
    Ok(thinned)
}

/// Default name for a thinned copy of `input`: `<stem>_per<stride>.xyz`
/// with the stride zero-padded to three digits, next to the input file.
pub fn thinned_file_name(input: &Path, stride: usize) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    input.with_file_name(format!("{stem}_per{stride:03}.xyz"))
}
