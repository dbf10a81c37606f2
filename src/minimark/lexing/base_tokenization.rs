//! Base tokenization for the minimark format
//!
//! The actual character recognition is handled entirely by logos; this
//! module only collects the tokens together with their source spans.

use crate::minimark::token::Token;
use logos::Logos;
use std::ops::Range;

/// Tokenize a string, collecting tokens with their byte spans.
///
/// The token set covers every possible byte, so the spans tile the whole
/// source with no gaps.
pub fn tokenize(source: &str) -> Vec<(Token, Range<usize>)> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push((token, lexer.span())),
            // The Text pattern accepts every character the other patterns
            // reject, so logos has no input it can fail on. Dropping a span
            // here would break the tiling invariant the assembly pass
            // depends on, so an unmatched byte must be loud.
            Err(()) => unreachable!("unmatched input at {:?}", lexer.span()),
        }
    }

    tokens
}
