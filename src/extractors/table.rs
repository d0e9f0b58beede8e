// src/extractors/table.rs

use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use super::stripped_text;

// --- CSS Selectors (Lazy Static) ---
static TABLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("table").expect("Failed to compile TABLE_SELECTOR"));

static ROW_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("tr").expect("Failed to compile ROW_SELECTOR"));

static CELL_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("td, th").expect("Failed to compile CELL_SELECTOR"));

static HEADER_CELL_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("th").expect("Failed to compile HEADER_CELL_SELECTOR"));

// --- Data Structures ---

/// A table extracted as raw cell text, rows in document order.
///
/// Rows may have differing lengths; no padding is applied. A retained table
/// always has at least one row and every row a non-empty cell list. Cell
/// contents are passed through as-is; normalizing them is left to callers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Structural facts about one `tr` row, computed over the raw markup before
/// any cell filtering, for retention policies to inspect.
#[derive(Debug, Clone, Copy)]
pub struct RowShape {
    pub cells: usize,
    pub header_cells: usize,
}

// --- Retention policies ---

/// Predicate deciding whether a table node is worth extracting at all, given
/// the shape of its raw rows. Row-level filtering (dropping rows with no
/// cells) applies regardless of policy, so any policy's output is a subset
/// of what [`AnyTable`] retains.
pub trait TablePolicy {
    fn retain(&self, rows: &[RowShape]) -> bool;
}

/// Keeps every table; only the non-empty-row rule filters the output.
pub struct AnyTable;

impl TablePolicy for AnyTable {
    fn retain(&self, _rows: &[RowShape]) -> bool {
        true
    }
}

/// Keeps tables that look like data grids with column labels: at least two
/// rows, with a `th` cell somewhere in the first two. Trades recall for
/// precision.
pub struct HeaderedTable;

impl TablePolicy for HeaderedTable {
    fn retain(&self, rows: &[RowShape]) -> bool {
        rows.len() >= 2 && rows.iter().take(2).any(|row| row.header_cells > 0)
    }
}

// --- Main Extractor Structure ---
pub struct TableExtractor;

impl TableExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extracts every table the policy retains, in document order.
    ///
    /// For each retained `table` node, every `tr` descendant contributes a
    /// row of stripped `td`/`th` cell text; rows whose cell list is empty
    /// are skipped, and a table with zero rows left is dropped entirely;
    /// "no valid table" is an expected outcome, not an error.
    pub fn extract_with(&self, document: &Html, policy: &dyn TablePolicy) -> Vec<Table> {
        let mut tables = Vec::new();
        for table_element in document.select(&TABLE_SELECTOR) {
            let shapes: Vec<RowShape> = table_element
                .select(&ROW_SELECTOR)
                .map(|row| RowShape {
                    cells: row.select(&CELL_SELECTOR).count(),
                    header_cells: row.select(&HEADER_CELL_SELECTOR).count(),
                })
                .collect();

            if !policy.retain(&shapes) {
                tracing::trace!("Policy rejected table with {} rows", shapes.len());
                continue;
            }

            let rows: Vec<Vec<String>> = table_element
                .select(&ROW_SELECTOR)
                .map(|row| {
                    row.select(&CELL_SELECTOR)
                        .map(stripped_text)
                        .collect::<Vec<String>>()
                })
                .filter(|cells| !cells.is_empty())
                .collect();

            if !rows.is_empty() {
                tables.push(Table { rows });
            }
        }
        tracing::debug!("Extracted {} tables", tables.len());
        tables
    }

    /// Every non-empty table in document order.
    pub fn extract(&self, document: &Html) -> Vec<Table> {
        self.extract_with(document, &AnyTable)
    }

    /// Tables with a header-like row among their first two rows. Always a
    /// subset of what [`extract`](Self::extract) returns for the same
    /// document.
    pub fn extract_data_tables(&self, document: &Html) -> Vec<Table> {
        self.extract_with(document, &HeaderedTable)
    }
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    fn doc(html: &str) -> Html {
        Html::parse_document(html)
    }

    #[test]
    fn rows_without_cells_are_skipped() {
        let document = doc(
            "<table><tr><td>자산</td><td>100</td></tr><tr></tr><tr><td>부채</td></tr></table>",
        );
        let tables = TableExtractor::new().extract(&document);
        assert_eq!(tables.len(), 1);
        assert_eq!(
            tables[0].rows(),
            [vec!["자산".to_string(), "100".to_string()], vec!["부채".to_string()]]
        );
    }

    #[test]
    fn tables_with_no_retained_rows_are_dropped() {
        let document = doc("<body><table></table><table><tr></tr></table></body>");
        let tables = TableExtractor::new().extract(&document);
        assert!(tables.is_empty());
    }

    #[test]
    fn irregular_row_lengths_are_preserved() {
        let document = doc(
            "<table><tr><th>과목</th><th>당기</th><th>전기</th></tr><tr><td>합계</td></tr></table>",
        );
        let tables = TableExtractor::new().extract(&document);
        assert_eq!(tables[0].rows()[0].len(), 3);
        assert_eq!(tables[0].rows()[1].len(), 1);
    }

    #[test]
    fn header_cells_are_collected_like_data_cells() {
        let document = doc("<table><tr><th>과목</th><td>금액</td></tr><tr><td>a</td></tr></table>");
        let tables = TableExtractor::new().extract(&document);
        assert_eq!(tables[0].rows()[0], ["과목", "금액"]);
    }

    #[test]
    fn strict_policy_requires_two_rows_and_an_early_header() {
        let html = r#"<body>
            <table id="headered">
                <tr><th>과목</th><th>금액</th></tr>
                <tr><td>자산</td><td>100</td></tr>
            </table>
            <table id="no-header">
                <tr><td>a</td></tr>
                <tr><td>b</td></tr>
                <tr><td>c</td></tr>
            </table>
            <table id="single-row">
                <tr><th>과목</th></tr>
            </table>
            <table id="late-header">
                <tr><td>a</td></tr>
                <tr><td>b</td></tr>
                <tr><th>늦은 헤더</th></tr>
            </table>
        </body>"#;
        let document = doc(html);
        let extractor = TableExtractor::new();

        let strict = extractor.extract_data_tables(&document);
        assert_eq!(strict.len(), 1);
        assert_eq!(strict[0].rows()[0], ["과목", "금액"]);

        let primary = extractor.extract(&document);
        assert_eq!(primary.len(), 4);
    }

    #[test]
    fn header_in_second_row_satisfies_strict_policy() {
        let document = doc(
            "<table><tr><td>표제</td></tr><tr><th>과목</th><th>금액</th></tr><tr><td>x</td><td>1</td></tr></table>",
        );
        let strict = TableExtractor::new().extract_data_tables(&document);
        assert_eq!(strict.len(), 1);
    }

    #[test]
    fn strict_results_are_a_subset_of_primary_results() {
        let html = r#"<body>
            <table><tr><th>h</th></tr><tr><td>1</td></tr></table>
            <table><tr><td>plain</td></tr></table>
            <table><tr><th>only one row</th></tr></table>
        </body>"#;
        let document = doc(html);
        let extractor = TableExtractor::new();

        let primary = extractor.extract(&document);
        let strict = extractor.extract_data_tables(&document);
        assert!(strict.len() <= primary.len());
        for table in &strict {
            assert!(primary.contains(table));
        }
    }

    // Keeps tables whose first row spans at least two columns.
    struct WideTable;

    impl TablePolicy for WideTable {
        fn retain(&self, rows: &[RowShape]) -> bool {
            rows.first().map_or(false, |row| row.cells >= 2)
        }
    }

    #[test]
    fn retention_policy_is_pluggable() {
        let document = doc(
            "<body><table><tr><td>a</td><td>b</td></tr></table><table><tr><td>only</td></tr></table></body>",
        );
        let tables = TableExtractor::new().extract_with(&document, &WideTable);
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].rows()[0], ["a", "b"]);
    }

    #[test]
    fn every_retained_row_has_a_non_empty_cell_list() {
        let html = "<table><tr><td>a</td></tr><tr></tr><tr><td></td></tr></table>";
        let tables = TableExtractor::new().extract(&doc(html));
        for table in &tables {
            assert!(!table.is_empty());
            for row in table.rows() {
                assert!(!row.is_empty());
            }
        }
        // An empty <td> still counts as a cell; only cell-less rows drop.
        assert_eq!(tables[0].len(), 2);
    }
}
