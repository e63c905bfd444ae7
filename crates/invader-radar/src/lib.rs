//! Sliding-window detection of known bit patterns in noisy 2D maps.
//!
//! A [`Radar`] slides a window of the target [`Invader`]'s exact size over
//! every admissible position of a [`Map`] — planar or toroidal — and
//! records an [`IdentifiedInvader`] for every window whose bit-wise
//! similarity reaches the [`Scanner`]'s threshold. A [`SummedAreaTable`]
//! built once per map lets the radar reject hopeless windows from their
//! raw signal count in O(1) before paying for the per-pixel comparison;
//! on toroidal maps wrapping windows are decomposed into non-wrapping
//! pieces so the same table serves across the seams.
//!
//! ```
//! use invader_radar::{scan_ascii, ScannerParams, Topology};
//!
//! let report = scan_ascii(
//!     "oo-\no--\noo-\n---",
//!     "oo\no-\noo",
//!     Topology::Planar,
//!     ScannerParams::default(),
//! )?;
//! assert_eq!(report.hits.len(), 1);
//! # Ok::<(), invader_radar::ScanError>(())
//! ```

mod identified;
mod invader;
mod map;
mod radar;
mod report;
mod scanner;
mod table;

pub use identified::IdentifiedInvader;
pub use invader::{FrameMatchError, Invader, InvaderError};
pub use map::{Map, MapError, Topology};
pub use radar::{Radar, RadarError, WindowCursor};
pub use report::{scan_ascii, HitRecord, ReportIoError, ScanError, ScanReport};
pub use scanner::{Scanner, ScannerParams};
pub use table::SummedAreaTable;

pub use invader_radar_core as core;
pub use invader_radar_core::{BitMatrix, FrameCoords};
