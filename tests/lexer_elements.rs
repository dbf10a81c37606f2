//! Element-level tests for the minimark lexer
//!
//! These tests verify that each markup construct produces the expected
//! element kind and span, and that whole documents lex into the expected
//! ordered sequence.

use minimark::minimark::element::ElementKind;
use minimark::minimark::lexing::scan;
use minimark::minimark::testing::factories::mk_elements;
use rstest::rstest;

// ===== Inline spans =====

#[rstest]
#[case::bold("say *hi* now", ElementKind::Bold)]
#[case::italic("say _hi_ now", ElementKind::Italic)]
#[case::inline_code("say `hi` now", ElementKind::InlineCode)]
#[case::math("say $hi$ now", ElementKind::Math)]
fn test_minimal_inline_spans(#[case] source: &str, #[case] kind: ElementKind) {
    let elements = scan(source).unwrap();
    assert_eq!(
        elements,
        mk_elements(&[
            (ElementKind::None, 0, 4),
            (kind, 5, 7),
            (ElementKind::None, 8, 12),
        ])
    );
    assert_eq!(elements[1].text(source), "hi");
}

#[test]
fn test_italic_at_start_of_line() {
    // Unlike `*`, the `_` delimiter has no start-of-line meaning.
    let source = "_hi_";
    let elements = scan(source).unwrap();
    assert_eq!(elements, mk_elements(&[(ElementKind::Italic, 1, 3)]));
}

#[test]
fn test_fenced_code_minimal() {
    let source = "```hi```";
    let elements = scan(source).unwrap();
    assert_eq!(elements, mk_elements(&[(ElementKind::FencedCode, 3, 5)]));
    assert_eq!(elements[0].text(source), "hi");
}

#[test]
fn test_fenced_code_multiline() {
    let source = "```\ncode here\n```\n";
    let elements = scan(source).unwrap();
    assert_eq!(
        elements,
        mk_elements(&[
            (ElementKind::FencedCode, 3, 14),
            (ElementKind::None, 17, 18),
        ])
    );
    assert_eq!(elements[0].text(source), "\ncode here\n");
}

#[test]
fn test_fenced_code_keeps_inner_backticks() {
    let source = "a ```x`y``` b";
    let elements = scan(source).unwrap();
    assert_eq!(
        elements,
        mk_elements(&[
            (ElementKind::None, 0, 2),
            (ElementKind::FencedCode, 5, 8),
            (ElementKind::None, 11, 13),
        ])
    );
    assert_eq!(elements[1].text(source), "x`y");
}

#[test]
fn test_two_backticks_are_empty_inline_code() {
    let source = "a `` b";
    let elements = scan(source).unwrap();
    assert_eq!(elements[1].kind, ElementKind::InlineCode);
    assert!(elements[1].is_empty());
}

// ===== Headings =====

#[rstest]
#[case(1, 1)]
#[case(2, 2)]
#[case(3, 3)]
#[case(4, 4)]
#[case(5, 5)]
#[case(6, 6)]
#[case(7, 6)]
#[case(12, 6)]
fn test_hash_heading_levels(#[case] hashes: usize, #[case] level: u8) {
    let source = format!("{} T\n", "#".repeat(hashes));
    let elements = scan(&source).unwrap();
    assert_eq!(
        elements,
        mk_elements(&[(ElementKind::Heading(level), hashes + 1, hashes + 3)])
    );
    assert_eq!(elements[0].text(&source), "T\n");
}

#[test]
fn test_heading_span_includes_terminating_newline() {
    let source = "# Title\nbody";
    let elements = scan(source).unwrap();
    assert_eq!(
        elements,
        mk_elements(&[
            (ElementKind::Heading(1), 2, 8),
            (ElementKind::None, 8, 12),
        ])
    );
    assert_eq!(elements[0].text(source), "Title\n");
}

#[test]
fn test_heading_at_end_of_input() {
    let source = "# T";
    let elements = scan(source).unwrap();
    assert_eq!(elements, mk_elements(&[(ElementKind::Heading(1), 2, 3)]));
}

#[test]
fn test_heading_after_leading_whitespace() {
    let source = "  # T\n";
    let elements = scan(source).unwrap();
    assert_eq!(elements, mk_elements(&[(ElementKind::Heading(1), 4, 6)]));
}

#[test]
fn test_heading_swallows_inline_delimiters() {
    // Everything to the end of the line is heading content.
    let source = "# has *stars* inside\n";
    let elements = scan(source).unwrap();
    assert_eq!(elements.len(), 1);
    assert_eq!(elements[0].text(source), "has *stars* inside\n");
}

// ===== Setext headings =====

#[test]
fn test_setext_heading_is_a_single_element() {
    let source = "Title\n===\n";
    let elements = scan(source).unwrap();
    assert_eq!(elements, mk_elements(&[(ElementKind::Heading(1), 0, 5)]));
    assert_eq!(elements[0].text(source), "Title");
}

#[test]
fn test_setext_heading_after_paragraph() {
    let source = "Para\nTitle\n===\n";
    let elements = scan(source).unwrap();
    assert_eq!(
        elements,
        mk_elements(&[
            (ElementKind::None, 0, 5),
            (ElementKind::Heading(1), 5, 10),
        ])
    );
    assert_eq!(elements[1].text(source), "Title");
}

#[test]
fn test_setext_underline_length_is_free() {
    let source = "A\n=\n";
    let elements = scan(source).unwrap();
    assert_eq!(elements, mk_elements(&[(ElementKind::Heading(1), 0, 1)]));
}

#[test]
fn test_setext_without_title_is_an_empty_heading() {
    let source = "===\n";
    let elements = scan(source).unwrap();
    assert_eq!(elements, mk_elements(&[(ElementKind::Heading(1), 0, 0)]));
}

#[test]
fn test_equals_with_trailing_content_is_prose() {
    let source = "=== x\n";
    let elements = scan(source).unwrap();
    assert_eq!(elements, mk_elements(&[(ElementKind::None, 0, 6)]));
}

#[test]
fn test_mid_line_equals_is_prose() {
    let source = "a = b\n";
    let elements = scan(source).unwrap();
    assert_eq!(elements, mk_elements(&[(ElementKind::None, 0, 6)]));
}

// ===== List items =====

#[rstest]
#[case(0, 1)]
#[case(1, 2)]
#[case(2, 3)]
#[case(3, 4)]
#[case(5, 4)]
fn test_list_nesting_tiers(#[case] width: usize, #[case] level: u8) {
    let source = format!("{}* x", " ".repeat(width));
    let elements = scan(&source).unwrap();
    assert_eq!(
        elements,
        mk_elements(&[
            (ElementKind::ListItem(level), width + 1, width + 1),
            (ElementKind::None, width + 2, width + 3),
        ])
    );
}

#[test]
fn test_list_markers_are_zero_length() {
    let source = "* one\n* two\n";
    let elements = scan(source).unwrap();
    assert_eq!(
        elements,
        mk_elements(&[
            (ElementKind::ListItem(1), 1, 1),
            (ElementKind::None, 2, 6),
            (ElementKind::ListItem(1), 7, 7),
            (ElementKind::None, 8, 12),
        ])
    );
}

#[test]
fn test_tab_indented_list_item() {
    let source = "\t* x";
    let elements = scan(source).unwrap();
    assert_eq!(elements[0].kind, ElementKind::ListItem(2));
}

// ===== Metadata header =====

#[test]
fn test_metadata_header_span_includes_braces() {
    let source = "{\"author\": \"Jane\"}\nrest";
    let elements = scan(source).unwrap();
    assert_eq!(
        elements,
        mk_elements(&[
            (ElementKind::MetadataHeader, 0, 18),
            (ElementKind::None, 18, 23),
        ])
    );
    assert_eq!(elements[0].text(source), "{\"author\": \"Jane\"}");
}

#[test]
fn test_metadata_header_may_span_lines() {
    let source = "{\"author\":\n\"Jane\"}";
    let elements = scan(source).unwrap();
    assert_eq!(elements[0].kind, ElementKind::MetadataHeader);
    assert_eq!(elements[0].span, 0..source.len());
}

// ===== Whole documents =====

#[test]
fn test_document_element_order() {
    let source = "{\"date\": \"x\"}\n# H\nbody *b*\n";
    let elements = scan(source).unwrap();
    assert_eq!(
        elements,
        mk_elements(&[
            (ElementKind::MetadataHeader, 0, 13),
            (ElementKind::None, 13, 14),
            (ElementKind::Heading(1), 16, 18),
            (ElementKind::None, 18, 23),
            (ElementKind::Bold, 24, 25),
            (ElementKind::None, 26, 27),
        ])
    );
    // The prose before the bold delimiter is flushed as its own element.
    assert_eq!(elements[3].text(source), "body ");
}

#[test]
fn test_empty_input() {
    assert_eq!(scan(""), Ok(vec![]));
}

#[test]
fn test_plain_document_is_one_span() {
    let source = "no markup here.\njust prose,\n\nwith a blank line.\n";
    let elements = scan(source).unwrap();
    assert_eq!(elements, mk_elements(&[(ElementKind::None, 0, source.len())]));
}
