//! # minimark
//!
//! A lexer for the minimark format.
//!
//! minimark is a lightweight markup language: an optional leading `{...}`
//! metadata block, `#` and `===`-underlined headings, `*bold*`, `_italic_`,
//! inline and fenced code, `$math$` spans, and whitespace-nested list items.
//!
//! The crate turns a source string into an ordered sequence of typed spans
//! ([elements](minimark::element)) plus an optional
//! [document metadata record](minimark::metadata). See
//! [`parse_document`](minimark::document::parse_document) for the main entry
//! point, or [`scan`](minimark::lexing::scan) for the element sequence alone.

pub mod minimark;
