//! Shared Selectors

use once_cell::sync::Lazy;
use scraper::Selector;

/// Selector for the page title heading.
pub static HEADING_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("h1").expect("valid heading selector"));

/// Selector for summary labels (plain and flex variants).
pub static LABEL_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".label, .flex.label").expect("valid label selector"));

/// Selector for the rating badge.
pub static RATING_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".rating").expect("valid rating selector"));

/// Fallback for the rating: any element with "score" in its class.
pub static SCORE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"[class*="score"]"#).expect("valid score selector"));

/// Selector for the rank badge.
pub static RANK_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".rank").expect("valid rank selector"));

/// Selector for every row of every table.
pub static TABLE_ROW_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("table tr").expect("valid table row selector"));

/// Selector for data cells within a row.
pub static CELL_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("td").expect("valid cell selector"));

/// CSS selector for the view-switch controls, handed to the renderer.
pub const BUTTON_SELECTOR: &str = "button";
