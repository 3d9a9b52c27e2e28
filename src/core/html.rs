// src/core/html.rs
// Thin query layer over `scraper`. Everything the specs need from a DOM goes through here:
// descendant selection, visible text, attributes, marker presence, and row cells.

use scraper::{ElementRef, Selector};

use super::sanitize::normalize_ws;

/// Compile a selector literal. Only for the constant selectors in `config::consts`.
pub fn sel(css: &'static str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("bad selector literal {css:?}: {e}"))
}

pub fn select_all<'a>(el: ElementRef<'a>, selector: &Selector) -> Vec<ElementRef<'a>> {
    el.select(selector).collect()
}

pub fn select_first<'a>(el: ElementRef<'a>, selector: &Selector) -> Option<ElementRef<'a>> {
    el.select(selector).next()
}

/// Visible text, whitespace collapsed and trimmed.
pub fn text_of(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}

pub fn attr<'a>(el: ElementRef<'a>, name: &str) -> Option<&'a str> {
    el.value().attr(name)
}

/// Does `el` contain at least one descendant matching `marker`?
pub fn has_marker(el: ElementRef<'_>, marker: &Selector) -> bool {
    el.select(marker).next().is_some()
}

/// Direct `<td>` children of a row, in document order.
pub fn cells<'a>(row: ElementRef<'a>) -> Vec<ElementRef<'a>> {
    row.children()
        .filter_map(ElementRef::wrap)
        .filter(|e| e.value().name().eq_ignore_ascii_case("td"))
        .collect()
}
