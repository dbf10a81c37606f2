//! Elements: typed spans of the source document
//!
//! An element pairs a kind with a byte range into the source. Spans cover
//! the token's content with its delimiters stripped; the two exceptions are
//! [MetadataHeader](ElementKind::MetadataHeader), whose span includes the
//! braces, and `#`-style headings, whose span runs to and including the
//! terminating newline.

use serde::Serialize;
use std::ops::Range;

/// The kind of a lexed element
///
/// `Underline`, `UnorderedListItem` and `Link` are reserved: they are part
/// of the element model but no surface syntax produces them yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ElementKind {
    /// Plain prose with no markup
    None,
    /// The leading `{...}` metadata block, braces included
    MetadataHeader,
    /// `*bold*` span
    Bold,
    /// Reserved, never produced
    Underline,
    /// `_italic_` span
    Italic,
    /// Start-of-line `*` marker; level 1..=4 from leading whitespace
    ListItem(u8),
    /// Reserved, never produced
    UnorderedListItem(u8),
    /// `#`-run or `===`-underlined heading; level 1..=6
    Heading(u8),
    /// Reserved, never produced
    Link,
    /// `` `code` `` span
    InlineCode,
    /// ```` ```code``` ```` block
    FencedCode,
    /// `$math$` span
    Math,
}

impl ElementKind {
    /// Heading kind for a `#`-marker run. Runs longer than six clamp to
    /// level 6 rather than overflowing the level.
    pub fn heading(marker_count: usize) -> ElementKind {
        ElementKind::Heading(marker_count.clamp(1, 6) as u8)
    }

    /// List item kind for a start-of-line `*` preceded by `whitespace_width`
    /// whitespace characters. Four tiers: widths 0, 1, 2 and 3-or-more map
    /// to levels 1 through 4.
    pub fn list_item(whitespace_width: usize) -> ElementKind {
        ElementKind::ListItem(whitespace_width.min(3) as u8 + 1)
    }
}

/// A typed span of the source document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    pub kind: ElementKind,
    pub span: Range<usize>,
}

impl Element {
    pub fn new(kind: ElementKind, span: Range<usize>) -> Element {
        Element { kind, span }
    }

    /// The slice of the source this element covers
    pub fn text<'src>(&self, source: &'src str) -> &'src str {
        &source[self.span.clone()]
    }

    /// Check if this element covers no text (list markers always do)
    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }
}
