//! Threshold logic binding an invader to a scan.

use serde::{Deserialize, Serialize};

use crate::invader::{FrameMatchError, Invader};
use invader_radar_core::BitMatrix;

/// Threshold overrides for a [`Scanner`].
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ScannerParams {
    /// Minimum fraction of the invader's total bits that must be present
    /// in a window as signal before the full comparison runs.
    ///
    /// `None` derives the threshold from the target: the invader's signal
    /// ratio minus a 0.2 slack, floored at 0.1.
    pub signal_threshold: Option<f64>,
    /// Minimum similarity ratio for a window to be reported as a hit.
    pub similarity_threshold: f64,
}

impl Default for ScannerParams {
    fn default() -> Self {
        Self {
            signal_threshold: None,
            similarity_threshold: 0.7,
        }
    }
}

/// Decides which windows deserve the per-pixel comparison and runs it.
///
/// The scanner holds the target invader and two thresholds. The signal
/// threshold powers the cheap pre-filter: a window with far fewer 1-bits
/// than the invader cannot reach the similarity threshold, so the full
/// comparison is skipped for it.
#[derive(Clone, Debug)]
pub struct Scanner<'a> {
    invader: &'a Invader,
    signal_threshold: f64,
    similarity_threshold: f64,
}

impl<'a> Scanner<'a> {
    /// Bind `invader` with explicit parameters.
    ///
    /// Both thresholds are clamped into `[0, 1]`.
    pub fn new(invader: &'a Invader, params: ScannerParams) -> Self {
        let signal_threshold = params
            .signal_threshold
            .unwrap_or_else(|| (invader.signal_ratio() - 0.2).max(0.1))
            .clamp(0.0, 1.0);
        let similarity_threshold = params.similarity_threshold.clamp(0.0, 1.0);
        Self {
            invader,
            signal_threshold,
            similarity_threshold,
        }
    }

    /// Bind `invader` with the default thresholds.
    pub fn with_defaults(invader: &'a Invader) -> Self {
        Self::new(invader, ScannerParams::default())
    }

    #[inline]
    pub fn invader(&self) -> &'a Invader {
        self.invader
    }

    #[inline]
    pub fn signal_threshold(&self) -> f64 {
        self.signal_threshold
    }

    #[inline]
    pub fn similarity_threshold(&self) -> f64 {
        self.similarity_threshold
    }

    /// Width and height every frame handed to this scanner must have.
    #[inline]
    pub fn required_frame_size(&self) -> (usize, usize) {
        (self.invader.width(), self.invader.height())
    }

    /// Cheap pre-filter: does a window with `signal_bits` 1-bits deserve
    /// the full comparison? Monotonic in `signal_bits`.
    pub fn is_worth_processing(&self, signal_bits: u32) -> bool {
        let window_ratio = f64::from(signal_bits) / self.invader.total_bits() as f64;
        window_ratio >= self.signal_threshold
    }

    /// Full comparison of `frame` against the target pattern.
    pub fn process_frame(&self, frame: &BitMatrix) -> Result<f64, FrameMatchError> {
        self.invader.match_against_frame(frame)
    }
}
