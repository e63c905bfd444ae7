//! The target pattern and its similarity scoring.

use invader_radar_core::{parse_bit_matrix, render_bit_matrix, AsciiError, BitMatrix};

/// Errors raised while constructing an [`Invader`].
#[derive(thiserror::Error, Debug)]
pub enum InvaderError {
    #[error("invader pattern must not be empty")]
    Empty,
    #[error("invader pattern has no signal bits")]
    NoSignal,
    #[error(transparent)]
    Ascii(#[from] AsciiError),
}

/// Errors raised when matching a frame against an invader.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum FrameMatchError {
    #[error("frame has no rows")]
    EmptyFrame,
    #[error("frame is {got_width}x{got_height}, pattern is {want_width}x{want_height}")]
    SizeMismatch {
        got_width: usize,
        got_height: usize,
        want_width: usize,
        want_height: usize,
    },
}

/// A known invader shape.
///
/// The pattern is a validated bit matrix with at least one signal (1) bit.
/// The signal count is precomputed at construction since every scan
/// consults it for the pre-filter threshold.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invader {
    pattern: BitMatrix,
    signal_bits: usize,
}

impl Invader {
    /// Validate and take ownership of a pattern.
    pub fn new(pattern: BitMatrix) -> Result<Self, InvaderError> {
        if pattern.is_empty() {
            return Err(InvaderError::Empty);
        }
        let signal_bits = pattern.count_ones();
        if signal_bits == 0 {
            return Err(InvaderError::NoSignal);
        }
        Ok(Self {
            pattern,
            signal_bits,
        })
    }

    /// Parse an invader from its ASCII rendering.
    ///
    /// Framing `~`, whitespace, and blank lines around the shape are
    /// trimmed before parsing.
    pub fn from_ascii(ascii: &str) -> Result<Self, InvaderError> {
        let trimmed = ascii.trim_matches(|ch: char| ch == '~' || ch.is_whitespace());
        Self::new(parse_bit_matrix(trimmed)?)
    }

    #[inline]
    pub fn pattern(&self) -> &BitMatrix {
        &self.pattern
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.pattern.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.pattern.height()
    }

    /// Number of 1-bits in the pattern.
    #[inline]
    pub fn signal_bits(&self) -> usize {
        self.signal_bits
    }

    /// Total number of cells in the pattern.
    #[inline]
    pub fn total_bits(&self) -> usize {
        self.pattern.width() * self.pattern.height()
    }

    /// Fraction of pattern cells that are signal bits.
    #[inline]
    pub fn signal_ratio(&self) -> f64 {
        self.signal_bits as f64 / self.total_bits() as f64
    }

    /// Score a frame of the pattern's exact dimensions against the pattern.
    ///
    /// The result is the fraction of positions at which frame and pattern
    /// agree; 0↔0 agreements count just like 1↔1, so a blank frame against
    /// a mostly-blank pattern still scores high. Always in `[0, 1]`.
    pub fn match_against_frame(&self, frame: &BitMatrix) -> Result<f64, FrameMatchError> {
        if frame.height() == 0 {
            return Err(FrameMatchError::EmptyFrame);
        }
        if frame.width() != self.pattern.width() || frame.height() != self.pattern.height() {
            return Err(FrameMatchError::SizeMismatch {
                got_width: frame.width(),
                got_height: frame.height(),
                want_width: self.pattern.width(),
                want_height: self.pattern.height(),
            });
        }

        let matched = frame
            .data()
            .iter()
            .zip(self.pattern.data())
            .filter(|(a, b)| a == b)
            .count();

        Ok(matched as f64 / self.total_bits() as f64)
    }

    /// The pattern rendered back to ASCII art.
    pub fn to_ascii(&self) -> String {
        render_bit_matrix(&self.pattern)
    }
}
