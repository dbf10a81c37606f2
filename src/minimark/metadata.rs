//! Document metadata extraction
//!
//! The optional leading `{...}` block carries document-level attributes as
//! a comma-separated list of `"key": "value"` pairs, whitespace-insensitive
//! around `:` and `,`. Three keys are recognized: `author`, `date` and
//! `matriculation_number`. Key matching is exact; anything else is rejected
//! with [UnknownMetadataKey](LexError::UnknownMetadataKey) rather than
//! silently dropped, so a misspelled key surfaces instead of masking a
//! malformed document.
//!
//! The extractor runs once, after lexing, and only when element #0 of the
//! sequence is a [MetadataHeader](ElementKind::MetadataHeader).

use crate::minimark::element::{Element, ElementKind};
use crate::minimark::error::LexError;
use crate::minimark::position::Position;
use serde::Serialize;

/// Document-level attributes from the leading `{...}` block
///
/// Fields stay `None` when their key never appears; no defaults are
/// synthesized for missing keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DocumentMetadata {
    pub author: Option<String>,
    pub date: Option<String>,
    pub matriculation_number: Option<String>,
}

/// Parse the metadata block covered by `header` into a metadata record.
///
/// `header` must be a `MetadataHeader` element produced by scanning
/// `source`, so its span includes both braces.
pub fn extract_metadata(source: &str, header: &Element) -> Result<DocumentMetadata, LexError> {
    debug_assert_eq!(header.kind, ElementKind::MetadataHeader);
    // Strip the outer braces; both are single bytes.
    let inner = header.span.start + 1..header.span.end - 1;
    HeaderParser {
        source,
        offset: inner.start,
        end: inner.end,
    }
    .parse()
}

/// Cursor over the inner text of the metadata block.
///
/// Offsets are absolute into the whole source so error positions come out
/// right. The grammar characters are all ASCII, so scanning is byte-wise;
/// values are sliced between quote offsets and may hold any UTF-8.
struct HeaderParser<'src> {
    source: &'src str,
    offset: usize,
    end: usize,
}

impl<'src> HeaderParser<'src> {
    fn parse(mut self) -> Result<DocumentMetadata, LexError> {
        let mut metadata = DocumentMetadata::default();
        self.skip_whitespace();
        if self.at_end() {
            // `{}` is a valid, empty record.
            return Ok(metadata);
        }
        loop {
            let key_start = self.offset;
            let key = self.quoted_string()?;
            self.skip_whitespace();
            self.expect(b':')?;
            self.skip_whitespace();
            let value = self.quoted_string()?;

            let slot = match key {
                "author" => &mut metadata.author,
                "date" => &mut metadata.date,
                "matriculation_number" => &mut metadata.matriculation_number,
                _ => {
                    return Err(LexError::UnknownMetadataKey {
                        key: key.to_string(),
                        position: Position::at(self.source, key_start),
                    });
                }
            };
            *slot = Some(value.to_string());

            self.skip_whitespace();
            if self.at_end() {
                return Ok(metadata);
            }
            self.expect(b',')?;
            self.skip_whitespace();
        }
    }

    /// A double-quoted string; returns the slice between the quotes.
    /// The grammar has no escape sequences.
    fn quoted_string(&mut self) -> Result<&'src str, LexError> {
        self.expect(b'"')?;
        let content_start = self.offset;
        while !self.at_end() {
            if self.source.as_bytes()[self.offset] == b'"' {
                let content = &self.source[content_start..self.offset];
                self.offset += 1;
                return Ok(content);
            }
            self.offset += 1;
        }
        Err(self.malformed())
    }

    fn expect(&mut self, byte: u8) -> Result<(), LexError> {
        if !self.at_end() && self.source.as_bytes()[self.offset] == byte {
            self.offset += 1;
            Ok(())
        } else {
            Err(self.malformed())
        }
    }

    fn skip_whitespace(&mut self) {
        while !self.at_end() {
            match self.source.as_bytes()[self.offset] {
                b' ' | b'\t' | b'\n' | b'\r' => self.offset += 1,
                _ => break,
            }
        }
    }

    fn at_end(&self) -> bool {
        self.offset >= self.end
    }

    fn malformed(&self) -> LexError {
        LexError::MalformedHeader(Position::at(self.source, self.offset))
    }
}
