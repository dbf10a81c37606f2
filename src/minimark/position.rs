//! Row/column positions for diagnostics
//!
//! Elements carry byte ranges, not positions; positions are only computed
//! when a scan fails and an error needs a human-readable location.

use serde::Serialize;
use std::fmt;

/// A 1-based row/column position in the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub row: u32,
    pub col: u32,
}

impl Position {
    /// Compute the position of a byte offset in the source.
    ///
    /// Offsets past the end of the source resolve to the position just after
    /// the last character, so end-of-input errors report a real location.
    pub fn at(source: &str, offset: usize) -> Position {
        let offset = offset.min(source.len());
        let mut row = 1;
        let mut col = 1;
        for byte in &source.as_bytes()[..offset] {
            if *byte == b'\n' {
                row += 1;
                col = 1;
            } else {
                col += 1;
            }
        }
        Position { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.row, self.col)
    }
}
