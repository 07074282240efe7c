//! Results table parsing
//!
//! Walks every table row in document order, tracking which section the row
//! sits in. Section header rows ("Gr 4", "Gr 7 avg", "Gender gap") only move
//! the section; recognized metric rows emit one field per year.

mod tests;
mod utils;

pub mod types;

pub use types::*;
use utils::*;

use crate::selectors::TABLE_ROW_SELECTOR;
use crate::tools::types::Record;
use scraper::Html;

/// Parse the results table view of a school page.
pub fn parse_performance(html: &str) -> Record {
    let doc = Html::parse_document(html);
    parse_document(&doc)
}

/// Parse an already-parsed document.
pub fn parse_document(doc: &Html) -> Record {
    fold_rows(doc.select(&TABLE_ROW_SELECTOR).map(|row| row_from_element(&row)))
}

/// Fold rows into a record, starting in the grade 4 section.
pub fn fold_rows<I>(rows: I) -> Record
where
    I: IntoIterator<Item = TableRow>,
{
    let (_, data) = rows.into_iter().fold(
        (Section::default(), Record::new()),
        |(section, mut data), row| match classify_row(&row) {
            RowKind::Header(next) => (next, data),
            RowKind::Metric(metric) => {
                emit_metric(&mut data, section, metric, &row.cells);
                (section, data)
            }
            RowKind::Skip => (section, data),
        },
    );
    data
}

/// Classify a single row without touching any state.
pub fn classify(row: &TableRow) -> RowKind {
    classify_row(row)
}
