//! Sliding-window search over a map.

use log::debug;

use invader_radar_core::FrameCoords;

use crate::identified::IdentifiedInvader;
use crate::invader::FrameMatchError;
use crate::map::{Map, Topology};
use crate::scanner::Scanner;
use crate::table::SummedAreaTable;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Errors raised while constructing a [`Radar`].
#[derive(thiserror::Error, Debug)]
pub enum RadarError {
    #[error(
        "invader ({invader_width}x{invader_height}) does not fit map ({map_width}x{map_height})"
    )]
    MapTooSmall {
        invader_width: usize,
        invader_height: usize,
        map_width: usize,
        map_height: usize,
    },
}

/// Row-major enumeration of every admissible window position.
///
/// On a planar map the cursor yields only windows that fit entirely inside
/// the edges, `(W−w+1)·(H−h+1)` in total. On a toroidal map every cell is
/// a valid top-left corner, so exactly `W·H` windows come out and the
/// bottom-right corner wraps modulo the map extent.
#[derive(Clone, Debug)]
pub struct WindowCursor {
    topology: Topology,
    map_width: usize,
    map_height: usize,
    frame_width: usize,
    frame_height: usize,
    x: usize,
    y: usize,
    done: bool,
}

impl WindowCursor {
    /// Cursor over `map_width × map_height` for windows of
    /// `frame_width × frame_height`. The frame must fit inside the map on
    /// both axes (the radar constructor enforces this for callers).
    pub fn new(
        topology: Topology,
        map_width: usize,
        map_height: usize,
        frame_width: usize,
        frame_height: usize,
    ) -> Self {
        debug_assert!(frame_width >= 1 && frame_width <= map_width);
        debug_assert!(frame_height >= 1 && frame_height <= map_height);
        Self {
            topology,
            map_width,
            map_height,
            frame_width,
            frame_height,
            x: 0,
            y: 0,
            done: false,
        }
    }
}

impl Iterator for WindowCursor {
    type Item = FrameCoords;

    fn next(&mut self) -> Option<FrameCoords> {
        if self.done {
            return None;
        }

        loop {
            let (x, y) = (self.x, self.y);
            let x_admissible = match self.topology {
                Topology::Planar => x + self.frame_width - 1 < self.map_width,
                Topology::Toroidal => x < self.map_width,
            };
            if !x_admissible {
                self.x = 0;
                self.y += 1;
                continue;
            }

            let y_admissible = match self.topology {
                Topology::Planar => y + self.frame_height - 1 < self.map_height,
                Topology::Toroidal => y < self.map_height,
            };
            if !y_admissible {
                self.done = true;
                return None;
            }

            self.x += 1;
            let x_right = (x + self.frame_width - 1) % self.map_width;
            let y_bottom = (y + self.frame_height - 1) % self.map_height;
            return Some(FrameCoords::new(x, y, x_right, y_bottom));
        }
    }
}

/// Searches a map for windows resembling the scanner's invader.
///
/// The radar owns the summed-area table (built once at construction), the
/// window cursor, and the accumulated hit list. The scan pipeline per
/// window: O(1) signal count, cheap pre-filter, and only then the full
/// per-pixel comparison.
#[derive(Clone, Debug)]
pub struct Radar<'a> {
    map: &'a Map,
    scanner: Scanner<'a>,
    table: SummedAreaTable,
    cursor: WindowCursor,
    hits: Vec<IdentifiedInvader<'a>>,
}

impl<'a> Radar<'a> {
    /// Bind a scanner to a map.
    ///
    /// Fails when the invader is wider or taller than the map; that holds
    /// for the toroidal topology too, where a window larger than the map
    /// would cover some cells twice.
    pub fn new(map: &'a Map, scanner: Scanner<'a>) -> Result<Self, RadarError> {
        let (frame_width, frame_height) = scanner.required_frame_size();
        if frame_width > map.width() || frame_height > map.height() {
            return Err(RadarError::MapTooSmall {
                invader_width: frame_width,
                invader_height: frame_height,
                map_width: map.width(),
                map_height: map.height(),
            });
        }

        let table = SummedAreaTable::new(map.grid());
        let cursor = WindowCursor::new(
            map.topology(),
            map.width(),
            map.height(),
            frame_width,
            frame_height,
        );

        Ok(Self {
            map,
            scanner,
            table,
            cursor,
            hits: Vec::new(),
        })
    }

    #[inline]
    pub fn map(&self) -> &'a Map {
        self.map
    }

    #[inline]
    pub fn scanner(&self) -> &Scanner<'a> {
        &self.scanner
    }

    /// Number of 1-bits inside the window at `coords`.
    ///
    /// A non-wrapping window is one table query. A wrapping window is
    /// decomposed into up to four non-wrapping rectangles and their counts
    /// summed: the anchor piece at the window's top-left clipped to the
    /// map's far edges (D), the strip wrapped past the right edge (C), the
    /// strip wrapped past the bottom edge (B), and the corner wrapped past
    /// both (A).
    ///
    /// ```text
    ///  A    B
    /// 0 1|1|1
    /// ---+ +-
    /// 1 0 1 0
    /// ---+ +-
    /// 1 0|0|1
    ///  C    D
    /// ```
    fn count_signal(&self, coords: FrameCoords) -> u32 {
        if !coords.wraps_x() && !coords.wraps_y() {
            return self.table.sum(coords);
        }

        let far_right = self.map.width() - 1;
        let far_bottom = self.map.height() - 1;
        let mut total = 0;

        if coords.wraps_y() {
            // Strip wrapped to the top edge; spans the same columns as the
            // anchor piece, all of them when x wraps too.
            let strip_right = if coords.wraps_x() { far_right } else { coords.x_right };
            total += self
                .table
                .sum(FrameCoords::new(coords.x_left, 0, strip_right, coords.y_bottom));
        }

        if coords.wraps_x() {
            // Strip wrapped to the left edge.
            let strip_bottom = if coords.wraps_y() { far_bottom } else { coords.y_bottom };
            total += self
                .table
                .sum(FrameCoords::new(0, coords.y_top, coords.x_right, strip_bottom));
        }

        if coords.wraps_x() && coords.wraps_y() {
            // Corner wrapped diagonally back to the origin.
            total += self
                .table
                .sum(FrameCoords::new(0, 0, coords.x_right, coords.y_bottom));
        }

        let anchor_right = if coords.wraps_x() { far_right } else { coords.x_right };
        let anchor_bottom = if coords.wraps_y() { far_bottom } else { coords.y_bottom };
        total
            + self.table.sum(FrameCoords::new(
                coords.x_left,
                coords.y_top,
                anchor_right,
                anchor_bottom,
            ))
    }

    /// Run the full sweep, accumulating a record for every window whose
    /// similarity reaches the scanner's threshold (boundary values count).
    ///
    /// The radar only hands the scanner frames of the invader's exact
    /// size, so the size-mismatch error is unreachable here; it is still
    /// propagated rather than swallowed.
    #[cfg_attr(
        feature = "tracing",
        instrument(
            level = "info",
            skip(self),
            fields(
                width = self.map.width(),
                height = self.map.height(),
                topology = ?self.map.topology()
            )
        )
    )]
    pub fn scan(&mut self) -> Result<(), FrameMatchError> {
        while let Some(coords) = self.cursor.next() {
            let signal_bits = self.count_signal(coords);
            if !self.scanner.is_worth_processing(signal_bits) {
                continue;
            }

            let frame = self.map.frame_at(coords);
            let similarity = self.scanner.process_frame(&frame)?;
            if similarity >= self.scanner.similarity_threshold() {
                debug!("invader at {coords} with similarity {similarity:.3}");
                self.hits.push(IdentifiedInvader::new(
                    self.scanner.invader(),
                    frame,
                    similarity,
                    coords,
                ));
            }
        }
        Ok(())
    }

    /// Hits accumulated so far, in discovery order.
    #[inline]
    pub fn identified_invaders(&self) -> &[IdentifiedInvader<'a>] {
        &self.hits
    }

    /// Consume the radar, keeping only its hits.
    pub fn into_identified_invaders(self) -> Vec<IdentifiedInvader<'a>> {
        self.hits
    }
}
