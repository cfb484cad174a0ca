//! Flat feature vectors handed to move-scoring models.

use crate::{
    cube::{CubeState, Stickers},
    faces::{Color, Face},
};

/// Length of every encoding: face × color × row × column.
pub const FEATURE_LEN: usize = 6 * Color::COUNT * 3 * 3;

/// How a cube is flattened into [`FEATURE_LEN`] floats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    /// A one-hot tensor of shape `(face, color, row, column)`: exactly one of
    /// the six color slots is set at each of the 54 positions.
    #[default]
    OneHot,
    /// The encoding older models were trained on. It sets
    /// `(face, color, row, row)` instead of `(face, color, row, column)`, so
    /// every sticker lands on the diagonal of its face/color grid and the
    /// column is lost. Only use it to drive a model trained on this input
    /// distribution.
    LegacyDiagonal,
}

impl Encoding {
    #[must_use]
    pub fn encode(self, stickers: &Stickers) -> Vec<f32> {
        let mut features = vec![0.0; FEATURE_LEN];
        for (face, row, col, color) in stickers.iter() {
            let col = match self {
                Encoding::OneHot => col,
                Encoding::LegacyDiagonal => row,
            };
            features[feature_index(face, color, row, col)] = 1.0;
        }
        features
    }
}

fn feature_index(face: Face, color: Color, row: usize, col: usize) -> usize {
    ((face as usize * Color::COUNT + usize::from(color.id())) * 3 + row) * 3 + col
}

impl CubeState {
    #[must_use]
    pub fn features(&self, encoding: Encoding) -> Vec<f32> {
        encoding.encode(self.stickers())
    }
}
