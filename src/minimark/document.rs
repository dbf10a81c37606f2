//! Parsed documents
//!
//! Ties the lexing pipeline and the metadata extractor together: scan the
//! source into elements, then extract the metadata record when element #0
//! is the leading `{...}` block.

use crate::minimark::element::{Element, ElementKind};
use crate::minimark::error::LexError;
use crate::minimark::lexing::scan;
use crate::minimark::metadata::{extract_metadata, DocumentMetadata};
use serde::Serialize;

/// The result of parsing a minimark document
///
/// Owns the element sequence and the optional metadata record; immutable
/// once returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub elements: Vec<Element>,
    pub metadata: Option<DocumentMetadata>,
}

/// Parse a source string into a [Document].
///
/// Returns the first error hit in either stage; there is no partial result.
pub fn parse_document(source: &str) -> Result<Document, LexError> {
    let elements = scan(source)?;
    let metadata = match elements.first() {
        Some(first) if first.kind == ElementKind::MetadataHeader => {
            Some(extract_metadata(source, first)?)
        }
        _ => None,
    };
    Ok(Document { elements, metadata })
}
