// src/extractors/section.rs

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

use super::stripped_text;

// --- CSS Selectors (Lazy Static) ---
// Disclosure pages have no formal section construct; h1-h3 plus bold runs
// are the heading-like tags that mark section titles in practice.
static HEADING_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("h1, h2, h3, b, strong").expect("Failed to compile HEADING_SELECTOR")
});

/// Tags eligible to serve as a section body when found after a heading.
const BODY_TAGS: &[&str] = &["div", "p"];

// --- Data Structures ---
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String, // stripped text of the heading-like node
    pub body: String,  // stripped text of its body node, or empty
}

/// Every (title, body) pair of a document, in document order.
///
/// Titles are not unique in real filings. The sequence keeps every
/// occurrence; `get` and `to_map` apply overwrite semantics, so for a
/// repeated title the body of the last occurrence wins.
#[derive(Debug, Clone, Default)]
pub struct Sections {
    sections: Vec<Section>,
}

impl Sections {
    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Body for a title. Last occurrence wins when the title repeats.
    pub fn get(&self, title: &str) -> Option<&str> {
        self.sections
            .iter()
            .rev()
            .find(|section| section.title == title)
            .map(|section| section.body.as_str())
    }

    /// Distinct titles in first-encountered order.
    pub fn titles(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.sections
            .iter()
            .map(|section| section.title.as_str())
            .filter(|title| seen.insert(*title))
            .collect()
    }

    /// Plain lookup map. Colliding titles keep the last body.
    pub fn to_map(&self) -> HashMap<String, String> {
        self.sections
            .iter()
            .map(|section| (section.title.clone(), section.body.clone()))
            .collect()
    }
}

// --- Body lookup strategy ---

/// Strategy for locating the body node belonging to a heading node.
///
/// Body lookup is a layout heuristic over uncontrolled markup; keeping it
/// behind a trait lets an alternative heuristic replace the default without
/// touching the extraction loop.
pub trait BodyLocator {
    fn locate<'a>(&self, heading: ElementRef<'a>) -> Option<ElementRef<'a>>;
}

/// Default heuristic: the nearest following sibling whose tag is `div` or
/// `p`. Siblings only; descendants and ancestors never qualify.
pub struct NextSiblingBody;

impl BodyLocator for NextSiblingBody {
    fn locate<'a>(&self, heading: ElementRef<'a>) -> Option<ElementRef<'a>> {
        heading
            .next_siblings()
            .filter_map(ElementRef::wrap)
            .find(|element| BODY_TAGS.contains(&element.value().name()))
    }
}

// --- Main Extractor Structure ---
pub struct SectionExtractor<L = NextSiblingBody> {
    body_locator: L,
}

impl SectionExtractor {
    pub fn new() -> Self {
        Self {
            body_locator: NextSiblingBody,
        }
    }
}

impl<L: BodyLocator> SectionExtractor<L> {
    pub fn with_locator(body_locator: L) -> Self {
        Self { body_locator }
    }

    /// Walks every heading-like node in document order and pairs it with the
    /// body node its locator finds. A heading with no body node yields an
    /// empty body string; a document with no heading-like nodes yields an
    /// empty result. Never fails.
    pub fn extract(&self, document: &Html) -> Sections {
        let mut sections = Vec::new();
        for heading in document.select(&HEADING_SELECTOR) {
            let title = stripped_text(heading);
            let body = self
                .body_locator
                .locate(heading)
                .map(stripped_text)
                .unwrap_or_default();
            tracing::trace!("Section candidate '{}' ({} body bytes)", title, body.len());
            sections.push(Section { title, body });
        }
        tracing::debug!("Extracted {} section candidates", sections.len());
        Sections { sections }
    }
}
