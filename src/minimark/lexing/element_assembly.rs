//! Element assembly
//!
//! A single forward pass over the base token stream that produces the
//! ordered element sequence. This is where all the stateful lexing rules
//! live:
//!
//! - Exactly one pending plain-text span is maintained at all times.
//!   Tokens no rule claims extend it; every delimiter rule first flushes it
//!   as a `None` element, then handles the delimiter.
//! - Start-of-line is true at offset zero and after every consumed newline.
//!   `*` list markers, `#` headings and `===` underlines only fire there;
//!   the same characters mid-line fall through to the inline rules or to
//!   plain text.
//! - Leading whitespace on a line is remembered for list-nesting tiers and
//!   folded back into the pending text when no marker follows it, so a
//!   document with no markup stays one contiguous span.
//! - The `===` underline rule is the one rule that reaches backward: it
//!   carves the last line out of the pending block and reclassifies it as
//!   a level-1 heading.
//!
//! The pass never backtracks past the pending span and consumes each token
//! exactly once, so assembly is O(n) in the input length.

use crate::minimark::element::{Element, ElementKind};
use crate::minimark::error::LexError;
use crate::minimark::position::Position;
use crate::minimark::token::Token;
use std::ops::Range;

/// Assemble a token stream into the ordered element sequence.
///
/// `tokens` must be the output of [tokenize](super::tokenize) for `source`.
/// Returns either the complete sequence or the first error hit.
pub fn assemble(
    source: &str,
    tokens: &[(Token, Range<usize>)],
) -> Result<Vec<Element>, LexError> {
    Assembler::new(source, tokens).run()
}

struct Assembler<'a> {
    source: &'a str,
    tokens: &'a [(Token, Range<usize>)],
    index: usize,
    elements: Vec<Element>,
    /// Byte range of the pending plain-text element, if any
    pending: Option<Range<usize>>,
    at_line_start: bool,
}

impl<'a> Assembler<'a> {
    fn new(source: &'a str, tokens: &'a [(Token, Range<usize>)]) -> Assembler<'a> {
        Assembler {
            source,
            tokens,
            index: 0,
            elements: Vec::new(),
            pending: None,
            at_line_start: true,
        }
    }

    fn run(mut self) -> Result<Vec<Element>, LexError> {
        while self.index < self.tokens.len() {
            self.step()?;
        }
        self.flush_pending();
        Ok(self.elements)
    }

    /// Handle the token at the cursor and everything it consumes.
    fn step(&mut self) -> Result<(), LexError> {
        let (token, span) = self.current();
        match token {
            // The metadata block is only recognized as the very first
            // character of the document; a `{` anywhere else is prose.
            Token::OpenBrace if span.start == 0 => self.metadata_header(span),
            Token::Star if self.at_line_start => {
                self.list_item(span, 0);
                Ok(())
            }
            Token::Hashes if self.at_line_start => {
                self.heading(span);
                Ok(())
            }
            Token::Equals if self.at_line_start && self.rest_of_line_is_bare() => {
                self.setext_heading(span);
                Ok(())
            }
            Token::Whitespace if self.at_line_start => {
                self.line_start_whitespace(span);
                Ok(())
            }
            Token::Star => self.inline_span(
                ElementKind::Bold,
                span,
                Token::Star,
                LexError::UnterminatedBold,
            ),
            Token::Underscore => self.inline_span(
                ElementKind::Italic,
                span,
                Token::Underscore,
                LexError::UnterminatedItalic,
            ),
            Token::Dollar => self.inline_span(
                ElementKind::Math,
                span,
                Token::Dollar,
                LexError::UnterminatedMath,
            ),
            Token::Backtick if self.fence_at(self.index) => self.fenced_code(span),
            Token::Backtick => self.inline_span(
                ElementKind::InlineCode,
                span,
                Token::Backtick,
                LexError::UnterminatedCode,
            ),
            Token::Newline => {
                self.extend_pending(span);
                self.advance();
                self.at_line_start = true;
                Ok(())
            }
            // Everything else, including mid-line `#`/`=` runs and stray
            // braces, is plain text.
            _ => {
                self.extend_pending(span);
                self.advance();
                self.at_line_start = false;
                Ok(())
            }
        }
    }

    /// Leading whitespace on a line: marker prefix or plain text,
    /// depending on what follows it.
    fn line_start_whitespace(&mut self, span: Range<usize>) {
        match self.kind_at(self.index + 1) {
            Some(Token::Star) => {
                let width = span.len();
                self.advance();
                let (_, star) = self.current();
                self.list_item(star, width);
            }
            Some(Token::Hashes) => {
                self.advance();
                let (_, hashes) = self.current();
                self.heading(hashes);
            }
            _ => {
                self.extend_pending(span);
                self.advance();
                self.at_line_start = false;
            }
        }
    }

    /// `{...}` block at offset zero. The element span includes both braces.
    fn metadata_header(&mut self, open: Range<usize>) -> Result<(), LexError> {
        self.flush_pending();
        self.advance();
        loop {
            match self.kind_at(self.index) {
                None => {
                    return Err(LexError::UnterminatedHeader(self.position(open.start)));
                }
                Some(Token::CloseBrace) => {
                    let (_, close) = self.current();
                    self.advance();
                    self.elements
                        .push(Element::new(ElementKind::MetadataHeader, 0..close.end));
                    self.at_line_start = false;
                    return Ok(());
                }
                Some(_) => self.advance(),
            }
        }
    }

    /// Start-of-line `*`: a zero-length list marker positioned after the
    /// `*`. `width` is the leading whitespace count on the line; following
    /// whitespace is skipped and belongs to no span.
    fn list_item(&mut self, star: Range<usize>, width: usize) {
        self.flush_pending();
        self.advance();
        while matches!(self.kind_at(self.index), Some(Token::Whitespace)) {
            self.advance();
        }
        self.elements.push(Element::new(
            ElementKind::list_item(width),
            star.end..star.end,
        ));
        self.at_line_start = false;
    }

    /// Start-of-line `#` run: the span covers the rest of the line after
    /// the markers and their trailing whitespace, up to and including the
    /// terminating newline.
    fn heading(&mut self, hashes: Range<usize>) {
        self.flush_pending();
        let kind = ElementKind::heading(hashes.len());
        self.advance();
        while matches!(self.kind_at(self.index), Some(Token::Whitespace)) {
            self.advance();
        }
        let content_start = match self.tokens.get(self.index) {
            Some((_, span)) => span.start,
            None => self.source.len(),
        };
        let mut end = content_start;
        loop {
            match self.tokens.get(self.index) {
                None => break,
                Some((Token::Newline, span)) => {
                    end = span.end;
                    self.advance();
                    self.at_line_start = true;
                    break;
                }
                Some((_, span)) => {
                    end = span.end;
                    self.advance();
                }
            }
        }
        self.elements.push(Element::new(kind, content_start..end));
    }

    /// A line consisting solely of `=` characters: reclassify the last
    /// line of the pending block as a level-1 heading. When the pending
    /// block holds no newline, the whole block becomes the heading.
    fn setext_heading(&mut self, equals: Range<usize>) {
        self.advance();
        if matches!(self.kind_at(self.index), Some(Token::Newline)) {
            self.advance();
        }
        self.at_line_start = true;

        let pending = match self.pending.take() {
            Some(span) => span,
            // Underline with nothing above it: an empty heading.
            None => {
                self.elements.push(Element::new(
                    ElementKind::Heading(1),
                    equals.start..equals.start,
                ));
                return;
            }
        };

        // Drop the newline that separated the title line from the `=` run.
        let mut block = pending.clone();
        if block.end > block.start && self.source.as_bytes()[block.end - 1] == b'\n' {
            block.end -= 1;
        }
        let title_start = match self.source[block.clone()].rfind('\n') {
            Some(i) => block.start + i + 1,
            None => block.start,
        };
        if title_start > pending.start {
            self.elements
                .push(Element::new(ElementKind::None, pending.start..title_start));
        }
        self.elements
            .push(Element::new(ElementKind::Heading(1), title_start..block.end));
    }

    /// Paired inline delimiters: bold, italic, inline code, math. The span
    /// covers the content between the delimiters, which may cross lines.
    fn inline_span(
        &mut self,
        kind: ElementKind,
        open: Range<usize>,
        closer: Token,
        unterminated: fn(Position) -> LexError,
    ) -> Result<(), LexError> {
        self.flush_pending();
        self.advance();
        loop {
            match self.tokens.get(self.index) {
                None => return Err(unterminated(self.position(open.start))),
                Some((token, span)) if *token == closer => {
                    self.elements
                        .push(Element::new(kind, open.end..span.start));
                    self.advance();
                    self.at_line_start = false;
                    return Ok(());
                }
                Some(_) => self.advance(),
            }
        }
    }

    /// ```` ``` ```` fence: scan to the next run of three backticks.
    fn fenced_code(&mut self, open: Range<usize>) -> Result<(), LexError> {
        self.flush_pending();
        self.advance();
        self.advance();
        self.advance();
        let content_start = match self.tokens.get(self.index) {
            Some((_, span)) => span.start,
            None => self.source.len(),
        };
        while self.index < self.tokens.len() {
            if self.fence_at(self.index) {
                let content_end = self.tokens[self.index].1.start;
                self.index += 3;
                self.elements
                    .push(Element::new(ElementKind::FencedCode, content_start..content_end));
                self.at_line_start = false;
                return Ok(());
            }
            self.advance();
        }
        Err(LexError::UnterminatedCode(self.position(open.start)))
    }

    /// Check for three consecutive backticks starting at token `i`.
    fn fence_at(&self, i: usize) -> bool {
        self.kind_at(i) == Some(Token::Backtick)
            && self.kind_at(i + 1) == Some(Token::Backtick)
            && self.kind_at(i + 2) == Some(Token::Backtick)
    }

    /// The rest of the current line holds nothing after the token at the
    /// cursor (used for the `===` underline rule).
    fn rest_of_line_is_bare(&self) -> bool {
        matches!(self.kind_at(self.index + 1), None | Some(Token::Newline))
    }

    fn current(&self) -> (Token, Range<usize>) {
        let (token, span) = &self.tokens[self.index];
        (*token, span.clone())
    }

    fn kind_at(&self, i: usize) -> Option<Token> {
        self.tokens.get(i).map(|(token, _)| *token)
    }

    fn advance(&mut self) {
        self.index += 1;
    }

    /// Grow the pending plain-text span by one token. Token spans tile the
    /// source, so the pending span stays contiguous.
    fn extend_pending(&mut self, span: Range<usize>) {
        match &mut self.pending {
            Some(pending) => pending.end = span.end,
            None => self.pending = Some(span),
        }
    }

    /// Emit the pending plain-text span as a `None` element, if non-empty.
    fn flush_pending(&mut self) {
        if let Some(span) = self.pending.take() {
            if !span.is_empty() {
                self.elements.push(Element::new(ElementKind::None, span));
            }
        }
    }

    fn position(&self, offset: usize) -> Position {
        Position::at(self.source, offset)
    }
}
