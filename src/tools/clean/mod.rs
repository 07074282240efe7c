mod tests;
mod utils;

use utils::*;

use scraper::ElementRef;

/// Full text of an element, trimmed.
pub fn text_of(el: &ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Clean a summary label: drop a trailing "help" marker, then trim.
///
/// Only a marker at the very end of the text is removed.
///
/// # Examples
/// ```
/// use schoolstats::tools::clean::clean_label;
///
/// assert_eq!(clean_label("School type help"), "School type");
/// assert_eq!(clean_label("  Enrolment  "), "Enrolment");
/// ```
pub fn clean_label(text: &str) -> String {
    LABEL_HELP_REGEX.replace(text, "").trim().to_string()
}

/// Clean a metric name from the first cell of a results row.
///
/// # Examples
/// ```
/// use schoolstats::tools::clean::clean_metric_name;
///
/// assert_eq!(clean_metric_name("Reading help "), "Reading");
/// assert_eq!(clean_metric_name("Numeracy"), "Numeracy");
/// ```
pub fn clean_metric_name(text: &str) -> String {
    METRIC_HELP_REGEX.replace(text, "").into_owned()
}

/// Remove the first "help" marker (with its surrounding whitespace) from a cell value.
pub fn clean_cell_value(text: &str) -> String {
    CELL_HELP_REGEX.replace(text, "").into_owned()
}

/// Turn label text into a field key.
///
/// `%` becomes `Percent`, whitespace runs become `_`, and anything outside
/// `[A-Za-z0-9_]` is dropped.
///
/// # Examples
/// ```
/// use schoolstats::tools::clean::normalize_key;
///
/// assert_eq!(normalize_key("Pass %  Rate"), "Pass_Percent_Rate");
/// assert_eq!(normalize_key("ESL (%)"), "ESL_Percent");
/// ```
pub fn normalize_key(label: &str) -> String {
    let key = label.replace('%', "Percent");
    let key = WHITESPACE_REGEX.replace_all(&key, "_");
    NON_KEY_REGEX.replace_all(&key, "").into_owned()
}

/// Field key for a summary label as it appears on the page.
///
/// Returns `None` when nothing is left after cleaning.
pub fn label_key(raw: &str) -> Option<String> {
    let label = clean_label(raw);
    if label.is_empty() {
        None
    } else {
        Some(normalize_key(&label))
    }
}

/// Base key of a results metric: lowercased, `%`/parentheses dropped,
/// whitespace runs replaced with `_`.
///
/// # Examples
/// ```
/// use schoolstats::tools::clean::metric_base_key;
///
/// assert_eq!(metric_base_key("Overall rating out of 10"), "overall_rating_out_of_10");
/// assert_eq!(metric_base_key("Below expectations (%)"), "below_expectations_");
/// ```
pub fn metric_base_key(name: &str) -> String {
    let lowered = name.to_lowercase();
    let stripped = METRIC_PUNCT_REGEX.replace_all(&lowered, "");
    WHITESPACE_REGEX.replace_all(&stripped, "_").into_owned()
}
