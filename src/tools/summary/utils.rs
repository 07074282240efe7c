use crate::selectors::{RATING_SELECTOR, SCORE_SELECTOR};
use scraper::{ElementRef, Html};

/// Next sibling that is an element, skipping text and comments.
pub(super) fn next_element<'a>(el: &ElementRef<'a>) -> Option<ElementRef<'a>> {
    el.next_siblings().find_map(ElementRef::wrap)
}

/// `.rating`, falling back to anything with "score" in its class.
pub(super) fn score_element(doc: &Html) -> Option<ElementRef<'_>> {
    doc.select(&RATING_SELECTOR)
        .next()
        .or_else(|| doc.select(&SCORE_SELECTOR).next())
}
