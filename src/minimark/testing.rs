//! Testing utilities
//!
//! Factories for building expected element sequences in tests without
//! spelling out every `Element` literal.

pub mod factories {
    use crate::minimark::element::{Element, ElementKind};

    /// Build an element from a kind and span endpoints
    pub fn elem(kind: ElementKind, start: usize, end: usize) -> Element {
        Element::new(kind, start..end)
    }

    /// Build an expected element sequence from (kind, start, end) triples
    pub fn mk_elements(specs: &[(ElementKind, usize, usize)]) -> Vec<Element> {
        specs
            .iter()
            .map(|(kind, start, end)| elem(*kind, *start, *end))
            .collect()
    }
}
