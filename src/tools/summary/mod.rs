mod utils;

use utils::*;

use crate::selectors::{HEADING_SELECTOR, LABEL_SELECTOR, RANK_SELECTOR};
use crate::tools::clean::{label_key, text_of};
use crate::tools::types::Record;
use scraper::Html;

/// Extract the summary fields of a school page.
///
/// Reads the page title (`name`), every label/value pair, the rating
/// (`score`) and the rank (`rank`). Later labels overwrite earlier ones
/// when they normalize to the same key.
///
/// # Examples
/// ```
/// use schoolstats::tools::summary::extract_summary;
///
/// let html = r#"<h1> Maple Elementary </h1>
///     <div><span class="label">School type help</span><span>Public</span></div>"#;
/// let data = extract_summary(html);
/// assert_eq!(data.get("name"), Some("Maple Elementary"));
/// assert_eq!(data.get("School_type"), Some("Public"));
/// ```
pub fn extract_summary(html: &str) -> Record {
    let doc = Html::parse_document(html);
    extract_document(&doc)
}

/// Extract summary fields from an already-parsed document.
pub fn extract_document(doc: &Html) -> Record {
    let mut data = Record::new();

    if let Some(heading) = doc.select(&HEADING_SELECTOR).next() {
        data.set("name", text_of(&heading));
    }

    for label in doc.select(&LABEL_SELECTOR) {
        let Some(key) = label_key(&label.text().collect::<String>()) else {
            continue;
        };
        let value = next_element(&label).map(|el| text_of(&el)).unwrap_or_default();
        if value.is_empty() {
            continue;
        }
        data.set(key, value);
    }

    if let Some(score) = score_element(doc) {
        data.set("score", text_of(&score));
    }

    if let Some(rank) = doc.select(&RANK_SELECTOR).next() {
        data.set("rank", text_of(&rank).replacen("help", "", 1));
    }

    data
}
