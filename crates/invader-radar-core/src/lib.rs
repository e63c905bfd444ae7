//! Core types and utilities for invader detection.
//!
//! This crate is intentionally small and purely grid-oriented. It does *not*
//! know about invaders, maps, or radars; it only provides the bit-matrix
//! storage, window coordinates, and the ASCII exchange format they share.

mod ascii;
mod coords;
mod logger;
mod matrix;

pub use ascii::{parse_bit_matrix, render_bit_matrix, AsciiError};
pub use coords::FrameCoords;
pub use logger::{init_from_env, init_with_level};
#[cfg(feature = "tracing")]
pub use logger::init_tracing;
pub use matrix::{BitMatrix, MatrixError};
