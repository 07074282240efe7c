use super::types::*;
use crate::tools::clean::{clean_cell_value, clean_metric_name, text_of};
use crate::tools::types::Record;
use scraper::ElementRef;

use crate::selectors::CELL_SELECTOR;

pub(super) fn row_from_element(row: &ElementRef<'_>) -> TableRow {
    let text = row.text().collect::<String>();
    let cells = row.select(&CELL_SELECTOR).map(|td| text_of(&td)).collect();
    TableRow::new(&text, cells)
}

/// Section header rows switch context and carry no data.
pub(super) fn section_header(text: &str) -> Option<Section> {
    if text.contains("gr 4") || text.contains("grade 4") {
        Some(Section::Gr4)
    } else if text.contains("gr 7 avg") || text.contains("grade 7 avg") {
        Some(Section::Gr7)
    } else if text.contains("gender gap") {
        Some(Section::Gr7GenderGap)
    } else {
        None
    }
}

pub(super) fn classify_row(row: &TableRow) -> RowKind {
    if let Some(section) = section_header(&row.text) {
        return RowKind::Header(section);
    }
    let Some(first) = row.cells.first().filter(|c| !c.is_empty()) else {
        return RowKind::Skip;
    };
    match Metric::from_label(&clean_metric_name(first)) {
        Some(metric) => RowKind::Metric(metric),
        None => RowKind::Skip,
    }
}

/// Write one field per year for `metric`; blank or absent cells become `n/a`.
pub(super) fn emit_metric(data: &mut Record, section: Section, metric: Metric, cells: &[String]) {
    for (index, year) in YEARS.iter().enumerate() {
        let raw = cells
            .get(index + 1)
            .map(|c| c.trim())
            .filter(|c| !c.is_empty())
            .unwrap_or(MISSING_VALUE);
        data.set(metric.key(section, year), clean_cell_value(raw));
    }
}
