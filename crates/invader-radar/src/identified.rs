//! The record a radar produces for every accepted window.

use std::fmt;

use invader_radar_core::{render_bit_matrix, BitMatrix, FrameCoords};

use crate::invader::Invader;

/// One confirmed sighting: where a window scored at or above the
/// similarity threshold, what it contained, and how well it matched.
///
/// Records are produced only by a radar and never mutated afterwards; the
/// frame is an independent copy of the map bits so the record stays valid
/// however the caller stores it.
#[derive(Clone, Debug, PartialEq)]
pub struct IdentifiedInvader<'a> {
    invader: &'a Invader,
    frame: BitMatrix,
    similarity: f64,
    coords: FrameCoords,
}

impl<'a> IdentifiedInvader<'a> {
    pub(crate) fn new(
        invader: &'a Invader,
        frame: BitMatrix,
        similarity: f64,
        coords: FrameCoords,
    ) -> Self {
        Self {
            invader,
            frame,
            similarity,
            coords,
        }
    }

    /// The target this sighting was matched against.
    #[inline]
    pub fn invader(&self) -> &'a Invader {
        self.invader
    }

    /// The map bits inside the matched window.
    #[inline]
    pub fn frame(&self) -> &BitMatrix {
        &self.frame
    }

    /// Similarity ratio in `[0, 1]`.
    #[inline]
    pub fn similarity(&self) -> f64 {
        self.similarity
    }

    /// Window coordinates on the map.
    #[inline]
    pub fn coords(&self) -> FrameCoords {
        self.coords
    }

    /// Human-readable report block with the matched frame as ASCII art.
    pub fn pretty(&self) -> String {
        format!(
            "Similarity ratio: {}\nCoords on map: {}\nVisual representation:\n{}",
            self.similarity,
            self.coords,
            render_bit_matrix(&self.frame)
        )
    }
}

impl fmt::Display for IdentifiedInvader<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invader at {} (similarity {:.3})",
            self.coords, self.similarity
        )
    }
}
