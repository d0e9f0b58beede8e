// src/extractors/mod.rs
pub mod section;
pub mod table;

// Re-export key extraction types for convenience
#[allow(unused_imports)]
pub use section::{BodyLocator, NextSiblingBody, Section, SectionExtractor, Sections};
#[allow(unused_imports)]
pub use table::{AnyTable, HeaderedTable, RowShape, Table, TableExtractor, TablePolicy};

use scraper::ElementRef;

/// Visible text of an element: each text fragment trimmed, non-empty
/// fragments concatenated. Markup inside the element contributes its text
/// without separators.
pub(crate) fn stripped_text(element: ElementRef) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .collect()
}
