// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2025 William Bro-Jørgensen
// Copyright (c) 2020 Guillaume Fraux and contributors
//
// See LICENSE at the project root for full text.

use std::ops::Index;

/// A single snapshot of a system: one comment line plus a label and a
/// position for every atom.
///
/// Two frames are equal when their comments, labels and positions are all
/// exactly equal. No floating-point tolerance is applied.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Frame {
    /// Free-text second line of the frame block. Never interpreted.
    pub comment: String,
    labels: Vec<String>,
    positions: Vec<[f64; 3]>,
}

impl Frame {
    pub fn new(comment: impl Into<String>) -> Self {
        Frame {
            comment: comment.into(),
            labels: Vec::new(),
            positions: Vec::new(),
        }
    }

    pub fn with_capacity(comment: impl Into<String>, natoms: usize) -> Self {
        Frame {
            comment: comment.into(),
            labels: Vec::with_capacity(natoms),
            positions: Vec::with_capacity(natoms),
        }
    }

    /// Number of atoms in this frame
    pub fn size(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn positions(&self) -> &[[f64; 3]] {
        &self.positions
    }

    /// Iterate over `(label, position)` pairs in file order.
    pub fn atoms(&self) -> impl Iterator<Item = (&str, &[f64; 3])> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.positions.iter())
    }

    pub fn add_atom(&mut self, label: impl Into<String>, position: [f64; 3]) {
        self.labels.push(label.into());
        self.positions.push(position);
    }
}

impl Index<usize> for Frame {
    type Output = [f64; 3];

    fn index(&self, index: usize) -> &Self::Output {
        &self.positions[index]
    }
}
