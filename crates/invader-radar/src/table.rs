//! Summed-area table over a map's signal bits.

use invader_radar_core::{BitMatrix, FrameCoords};

/// Prefix-sum grid answering "how many 1-bits in this rectangle?" in O(1).
///
/// Cell `(x, y)` holds the number of 1-bits in the rectangle spanning
/// `(0, 0)..=(x, y)`. Built once per map in a single O(W·H) pass and
/// immutable afterwards. `u32` cells cover any map up to 2^32 − 1 signal
/// bits, far beyond realistic sizes.
#[derive(Clone, Debug)]
pub struct SummedAreaTable {
    width: usize,
    height: usize,
    cells: Vec<u32>,
}

impl SummedAreaTable {
    /// Build the table for `grid`.
    ///
    /// Each row is folded with a running in-row prefix and the cell right
    /// above: `T[y][x] = T[y-1][x] + Σ_{j<=x} grid[y][j]`.
    pub fn new(grid: &BitMatrix) -> Self {
        let width = grid.width();
        let height = grid.height();
        let mut cells = vec![0u32; width * height];

        for (y, row) in grid.rows().enumerate() {
            let mut row_prefix = 0u32;
            for (x, &bit) in row.iter().enumerate() {
                row_prefix += u32::from(bit);
                let above = if y > 0 { cells[(y - 1) * width + x] } else { 0 };
                cells[y * width + x] = above + row_prefix;
            }
        }

        Self {
            width,
            height,
            cells,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn at(&self, x: usize, y: usize) -> u32 {
        self.cells[y * self.width + x]
    }

    /// Number of 1-bits inside the non-wrapping rectangle `coords`.
    ///
    /// Inclusion–exclusion over the four top-left-anchored quadrants; the
    /// rectangle must be ordered and fully inside the map. Wrapping
    /// rectangles are the toroidal radar's concern, which decomposes them
    /// into non-wrapping pieces before querying.
    pub fn sum(&self, coords: FrameCoords) -> u32 {
        let FrameCoords {
            x_left,
            y_top,
            x_right,
            y_bottom,
        } = coords;
        debug_assert!(x_left <= x_right && x_right < self.width);
        debug_assert!(y_top <= y_bottom && y_bottom < self.height);

        let mut total = self.at(x_right, y_bottom);
        if x_left > 0 {
            total -= self.at(x_left - 1, y_bottom);
        }
        if y_top > 0 {
            total -= self.at(x_right, y_top - 1);
        }
        if x_left > 0 && y_top > 0 {
            total += self.at(x_left - 1, y_top - 1);
        }
        total
    }
}
