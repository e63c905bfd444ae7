//! The scanned map and its edge semantics.

use invader_radar_core::{parse_bit_matrix, AsciiError, BitMatrix, FrameCoords};
use serde::{Deserialize, Serialize};

/// Edge semantics of a map.
///
/// A closed two-variant set: planar maps end at their edges, toroidal maps
/// glue the right edge to the left and the bottom to the top so windows may
/// wrap across either or both.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Topology {
    #[default]
    Planar,
    Toroidal,
}

/// Errors raised while constructing a [`Map`].
#[derive(thiserror::Error, Debug)]
pub enum MapError {
    #[error("map must have at least one row and one column")]
    Empty,
    #[error(transparent)]
    Ascii(#[from] AsciiError),
}

/// A binary map with a fixed topology.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Map {
    grid: BitMatrix,
    topology: Topology,
}

impl Map {
    /// A map with hard edges.
    pub fn planar(grid: BitMatrix) -> Result<Self, MapError> {
        Self::new(grid, Topology::Planar)
    }

    /// A map whose opposite edges are glued together.
    pub fn toroidal(grid: BitMatrix) -> Result<Self, MapError> {
        Self::new(grid, Topology::Toroidal)
    }

    pub fn new(grid: BitMatrix, topology: Topology) -> Result<Self, MapError> {
        if grid.is_empty() {
            return Err(MapError::Empty);
        }
        Ok(Self { grid, topology })
    }

    /// Parse a map from its ASCII rendering.
    ///
    /// Framing spaces, `~`, and blank lines around the grid are trimmed
    /// before parsing.
    pub fn from_ascii(ascii: &str, topology: Topology) -> Result<Self, MapError> {
        let trimmed = ascii.trim_matches(|ch: char| ch == '~' || ch.is_whitespace());
        Self::new(parse_bit_matrix(trimmed)?, topology)
    }

    #[inline]
    pub fn grid(&self) -> &BitMatrix {
        &self.grid
    }

    #[inline]
    pub fn topology(&self) -> Topology {
        self.topology
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Extract the window at `coords` as an owned matrix.
    ///
    /// On a planar map the coordinates must be ordered and in range. On a
    /// toroidal map `x_right < x_left` wraps the columns past the right
    /// edge and `y_bottom < y_top` wraps the rows past the bottom edge;
    /// the two compose for diagonally wrapping windows.
    pub fn frame_at(&self, coords: FrameCoords) -> BitMatrix {
        debug_assert!(coords.x_left < self.width() && coords.x_right < self.width());
        debug_assert!(coords.y_top < self.height() && coords.y_bottom < self.height());
        debug_assert!(
            self.topology == Topology::Toroidal
                || (coords.x_left <= coords.x_right && coords.y_top <= coords.y_bottom)
        );

        let width = coords.span_width(self.width());
        let height = coords.span_height(self.height());

        let mut cells = Vec::with_capacity(width * height);
        for dy in 0..height {
            let y = (coords.y_top + dy) % self.height();
            cells.extend(
                self.grid
                    .wrapped_row_span(y, coords.x_left, coords.x_right),
            );
        }

        BitMatrix::from_flat(width, height, cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLUS: &str = "--o--\n-o-o-\n--o--";

    fn frame_rows(map: &Map, coords: FrameCoords) -> Vec<Vec<u8>> {
        map.frame_at(coords).rows().map(|row| row.to_vec()).collect()
    }

    #[test]
    fn rejects_empty_grids() {
        assert!(matches!(Map::planar(BitMatrix::empty()), Err(MapError::Empty)));
        assert!(matches!(
            Map::from_ascii("~~~~~~", Topology::Planar),
            Err(MapError::Empty)
        ));
    }

    #[test]
    fn planar_extraction() {
        let map = Map::from_ascii(PLUS, Topology::Planar).expect("valid map");
        assert_eq!(
            frame_rows(&map, FrameCoords::new(1, 1, 3, 2)),
            vec![vec![1, 0, 1], vec![0, 1, 0]]
        );
    }

    #[test]
    fn toroidal_extraction_wraps_both_axes() {
        let map = Map::from_ascii(PLUS, Topology::Toroidal).expect("valid map");

        // No wrap behaves exactly like the planar map.
        assert_eq!(
            frame_rows(&map, FrameCoords::new(1, 1, 3, 2)),
            vec![vec![1, 0, 1], vec![0, 1, 0]]
        );
        // Horizontal wrap: columns 4, 0, 1.
        assert_eq!(
            frame_rows(&map, FrameCoords::new(4, 1, 1, 2)),
            vec![vec![0, 0, 1], vec![0, 0, 0]]
        );
        // Vertical wrap: rows 2, 0.
        assert_eq!(
            frame_rows(&map, FrameCoords::new(1, 2, 3, 0)),
            vec![vec![0, 1, 0], vec![0, 1, 0]]
        );
        // Both: rows 2, 0, 1 by columns 4, 0, 1.
        assert_eq!(
            frame_rows(&map, FrameCoords::new(4, 2, 1, 1)),
            vec![vec![0, 0, 0], vec![0, 0, 0], vec![0, 0, 1]]
        );
    }

    #[test]
    fn toroidal_full_axis_window() {
        let map = Map::from_ascii(PLUS, Topology::Toroidal).expect("valid map");
        // x_right == x_left - 1 spans every column exactly once.
        let frame = map.frame_at(FrameCoords::new(2, 0, 1, 1));
        assert_eq!(frame.width(), 5);
        assert_eq!(frame.height(), 2);
        assert_eq!(frame.row(0), &[1, 0, 0, 0, 0]);
        assert_eq!(frame.row(1), &[0, 1, 0, 0, 1]);
    }
}
