/// Private regexes for text cleaning
use once_cell::sync::Lazy;
use regex::Regex;

/// Trailing marker on summary labels; `$` is end of text.
pub(super) static LABEL_HELP_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*help$").expect("valid regex"));

/// Trailing marker on metric names, trailing whitespace included.
pub(super) static METRIC_HELP_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*help\s*$").expect("valid regex"));

/// Marker anywhere in a cell value.
pub(super) static CELL_HELP_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*help\s*").expect("valid regex"));

pub(super) static WHITESPACE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

pub(super) static NON_KEY_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z0-9_]").expect("valid regex"));

pub(super) static METRIC_PUNCT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[()%]").expect("valid regex"));
