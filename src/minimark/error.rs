//! Errors that can occur during lexing and metadata extraction
//!
//! Every variant is a parse failure in the input document, not an internal
//! fault. Any error aborts the whole scan; there are no partial results.

use crate::minimark::position::Position;
use std::fmt;

/// Errors produced by the lexer and the metadata extractor
///
/// `Unterminated*` variants carry the position of the opening delimiter;
/// the metadata variants carry the position of the offending character or
/// key inside the `{...}` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// A `{` metadata block was opened but end of input came before `}`
    UnterminatedHeader(Position),
    /// A `*` bold span was opened but never closed
    UnterminatedBold(Position),
    /// A `_` italic span was opened but never closed
    UnterminatedItalic(Position),
    /// A `` ` `` or ```` ``` ```` code span was opened but never closed
    UnterminatedCode(Position),
    /// A `$` math span was opened but never closed
    UnterminatedMath(Position),
    /// The metadata block's inner `"key": "value"` grammar is violated
    MalformedHeader(Position),
    /// A metadata key is not one of the recognized keys
    UnknownMetadataKey { key: String, position: Position },
}

impl LexError {
    /// The position of the failure point
    pub fn position(&self) -> Position {
        match self {
            LexError::UnterminatedHeader(p)
            | LexError::UnterminatedBold(p)
            | LexError::UnterminatedItalic(p)
            | LexError::UnterminatedCode(p)
            | LexError::UnterminatedMath(p)
            | LexError::MalformedHeader(p) => *p,
            LexError::UnknownMetadataKey { position, .. } => *position,
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::UnterminatedHeader(p) => {
                write!(f, "metadata header opened at {} is never terminated", p)
            }
            LexError::UnterminatedBold(p) => {
                write!(f, "bold span opened at {} is never terminated", p)
            }
            LexError::UnterminatedItalic(p) => {
                write!(f, "italic span opened at {} is never terminated", p)
            }
            LexError::UnterminatedCode(p) => {
                write!(f, "code span opened at {} is never terminated", p)
            }
            LexError::UnterminatedMath(p) => {
                write!(f, "math span opened at {} is never terminated", p)
            }
            LexError::MalformedHeader(p) => {
                write!(f, "malformed metadata header at {}", p)
            }
            LexError::UnknownMetadataKey { key, position } => {
                write!(f, "unknown metadata key {:?} at {}", key, position)
            }
        }
    }
}

impl std::error::Error for LexError {}

impl From<LexError> for String {
    fn from(err: LexError) -> Self {
        err.to_string()
    }
}
