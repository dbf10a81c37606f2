//! Lexer
//!
//! This module orchestrates the tokenization pipeline for the minimark
//! format. First the source is split into delimiter and text tokens by a
//! vanilla logos lexer, then a single forward pass over the token stream
//! assembles the tokens into typed elements.
//!
//! The split mirrors the two kinds of work involved: character recognition
//! is entirely table-driven and lives in the logos token definitions, while
//! the stateful rules (the pending plain-text span, start-of-line handling,
//! delimiter pairing, the setext reclassification) live in the assembly
//! pass, where they operate on whole tokens instead of characters.
//!
//! Token spans carry the byte range of their source text, and element spans
//! are computed purely from token spans, so the element sequence read in
//! order reconstructs the document modulo the stripped delimiters.

pub mod base_tokenization;
pub mod element_assembly;

pub use base_tokenization::tokenize;
pub use element_assembly::assemble;

use crate::minimark::element::Element;
use crate::minimark::error::LexError;

/// Lex a source string into an ordered sequence of elements.
///
/// Returns either the complete element sequence or the first error hit; no
/// partial sequence is ever produced.
pub fn scan(source: &str) -> Result<Vec<Element>, LexError> {
    let tokens = tokenize(source);
    assemble(source, &tokens)
}
