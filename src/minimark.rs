//! The minimark lexer
//!
//! Lexing is a two-stage pipeline:
//!
//! 1. Base tokenization using a vanilla logos lexer. The source is split into
//!    delimiter and text tokens, each carrying its byte range. See
//!    [base_tokenization](lexing::base_tokenization).
//! 2. Element assembly. A single forward pass over the token stream pairs
//!    delimiters, tracks start-of-line state, and emits typed spans
//!    ("elements") into an ordered sequence. See
//!    [element_assembly](lexing::element_assembly).
//!
//! After lexing, the optional leading `{...}` metadata block is parsed into a
//! [DocumentMetadata](metadata::DocumentMetadata) record. The
//! [document](document) module ties the stages together.
//!
//! Elements reference the source by byte range rather than borrowing from it,
//! so the parse result is free-standing and the caller keeps ownership of the
//! source string.

pub mod document;
pub mod element;
pub mod error;
pub mod lexing;
pub mod metadata;
pub mod position;
pub mod testing;
pub mod token;

pub use document::{parse_document, Document};
pub use element::{Element, ElementKind};
pub use error::LexError;
pub use lexing::scan;
pub use metadata::{extract_metadata, DocumentMetadata};
pub use position::Position;
pub use token::Token;
