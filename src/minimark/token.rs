//! Token definitions for the minimark format
//!
//! This module defines all the tokens that can be produced by the base
//! tokenizer. The tokens are defined using the logos derive macro; runs of
//! `#`, `=` and whitespace are matched as single tokens so the assembly
//! stage can read their length off the span instead of counting characters.

use logos::Logos;

/// All possible tokens in the minimark format
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    // Metadata block delimiters
    #[token("{")]
    OpenBrace,
    #[token("}")]
    CloseBrace,

    // Inline span delimiters
    #[token("*")]
    Star,
    #[token("_")]
    Underscore,
    #[token("`")]
    Backtick,
    #[token("$")]
    Dollar,

    // Heading markers (runs, so the span length is the marker count)
    #[regex(r"#+")]
    Hashes,
    #[regex(r"=+")]
    Equals,

    // Line breaks
    #[token("\n")]
    Newline,

    // Whitespace (excluding newlines)
    #[regex(r"[ \t]+")]
    Whitespace,

    // Text content (catch-all for non-special characters)
    #[regex(r"[^{}*_`$#=\n\t ]+")]
    Text,
}

impl Token {
    /// Check if this token is whitespace (including newlines)
    pub fn is_whitespace(&self) -> bool {
        matches!(self, Token::Whitespace | Token::Newline)
    }

    /// Check if this token can open or close an inline span
    pub fn is_inline_delimiter(&self) -> bool {
        matches!(
            self,
            Token::Star | Token::Underscore | Token::Backtick | Token::Dollar
        )
    }

    /// Check if this token is text content
    pub fn is_text(&self) -> bool {
        matches!(self, Token::Text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::minimark::lexing::base_tokenization::tokenize;

    fn kinds(source: &str) -> Vec<Token> {
        tokenize(source).into_iter().map(|(t, _)| t).collect()
    }

    #[test]
    fn test_inline_delimiters() {
        assert_eq!(
            kinds("*_`$"),
            vec![
                Token::Star,
                Token::Underscore,
                Token::Backtick,
                Token::Dollar
            ]
        );
    }

    #[test]
    fn test_hash_runs_are_single_tokens() {
        let tokens = tokenize("### Title");
        assert_eq!(tokens[0].0, Token::Hashes);
        assert_eq!(tokens[0].1, 0..3);
    }

    #[test]
    fn test_equals_runs_are_single_tokens() {
        let tokens = tokenize("====");
        assert_eq!(tokens, vec![(Token::Equals, 0..4)]);
    }

    #[test]
    fn test_triple_backtick_is_three_tokens() {
        assert_eq!(
            kinds("```"),
            vec![Token::Backtick, Token::Backtick, Token::Backtick]
        );
    }

    #[test]
    fn test_whitespace_run_length() {
        let tokens = tokenize("  \thello");
        assert_eq!(tokens[0], (Token::Whitespace, 0..3));
        assert_eq!(tokens[1].0, Token::Text);
    }

    #[test]
    fn test_text_and_newlines() {
        assert_eq!(
            kinds("hello world\nbye"),
            vec![
                Token::Text,
                Token::Whitespace,
                Token::Text,
                Token::Newline,
                Token::Text
            ]
        );
    }

    #[test]
    fn test_braces() {
        assert_eq!(
            kinds("{a}"),
            vec![Token::OpenBrace, Token::Text, Token::CloseBrace]
        );
    }

    #[test]
    fn test_every_byte_is_covered() {
        // The token set must partition arbitrary input; no byte may be dropped.
        let source = "a{b}*c_d`e$f#g=h \t\ni";
        let tokens = tokenize(source);
        let mut end = 0;
        for (_, span) in tokens {
            assert_eq!(span.start, end);
            end = span.end;
        }
        assert_eq!(end, source.len());
    }
}
