//! ASCII exchange format for bit matrices.
//!
//! One row per line, `-` for 0 and `o` for 1:
//!
//! ```text
//! --o--      00100
//! -ooo-  ->  01110
//! --o--      00100
//! ```

use crate::matrix::{BitMatrix, MatrixError};

/// Errors raised while parsing the ASCII form.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum AsciiError {
    #[error("found {0:?} character, only `o` and `-` are allowed")]
    InvalidCharacter(char),
    #[error(transparent)]
    Shape(#[from] MatrixError),
}

/// Parse an ASCII rendering into a [`BitMatrix`].
///
/// Empty input yields the empty matrix rather than an error; whether an
/// empty grid is acceptable is the consuming constructor's decision.
/// Callers are expected to have trimmed framing characters (whitespace,
/// `~`) beforehand.
pub fn parse_bit_matrix(ascii: &str) -> Result<BitMatrix, AsciiError> {
    if ascii.is_empty() {
        return Ok(BitMatrix::empty());
    }

    let mut rows = Vec::new();
    for line in ascii.split('\n') {
        let mut row = Vec::with_capacity(line.len());
        for ch in line.chars() {
            match ch {
                '-' => row.push(0),
                'o' => row.push(1),
                other => return Err(AsciiError::InvalidCharacter(other)),
            }
        }
        rows.push(row);
    }

    Ok(BitMatrix::from_rows(&rows)?)
}

/// Render a [`BitMatrix`] back to its ASCII form, one line per row, each
/// terminated by a newline.
pub fn render_bit_matrix(matrix: &BitMatrix) -> String {
    let mut out = String::with_capacity((matrix.width() + 1) * matrix.height());
    for row in matrix.rows() {
        for &bit in row {
            out.push(if bit == 1 { 'o' } else { '-' });
        }
        out.push('\n');
    }
    out
}
