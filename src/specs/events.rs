// src/specs/events.rs
//! Scraping *spec* for the completed-events listing (`/statistics/events/completed`).
//!
//! Purpose:
//! - Walk `tr.b-statistics__table-row` rows and sort them into header, empty and data rows.
//! - For data rows, read the event date (`span.b-statistics__date`, e.g. "June 7, 2025")
//!   and the event anchor (`a[href*="/event-details/"]`: name + detail-page link).
//!
//! Non-Responsibilities:
//! - **No fetching.** The detail page behind a row is the pipeline's business.
//! - **No sorting.** Rows come back in page order.

use std::sync::LazyLock;

use chrono::NaiveDate;
use scraper::{ElementRef, Html, Selector};

use crate::config::consts::*;
use crate::core::html::{attr, cells, has_marker, sel, select_first, text_of};
use crate::error::{Result, ScrapeError};

struct Selectors {
    row: Selector,
    header_cell: Selector,
    date: Selector,
    link: Selector,
}

static SEL: LazyLock<Selectors> = LazyLock::new(|| Selectors {
    row: sel(SEL_EVENT_ROW),
    header_cell: sel(SEL_HEADER_CELL),
    date: sel(SEL_EVENT_DATE),
    link: sel(SEL_EVENT_LINK),
});

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RowKind {
    Header,
    Empty,
    Data(ListingRow),
}

/// A data row of the listing, detached from the DOM.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingRow {
    pub date: NaiveDate,
    /// Absent when the row has no event-detail anchor.
    pub link: Option<EventLink>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventLink {
    pub name: String,
    pub href: String,
}

/// Classify one listing row. A data row whose date won't parse is an error for that row only.
pub fn classify(row: ElementRef<'_>) -> Result<RowKind> {
    if has_marker(row, &SEL.header_cell) {
        return Ok(RowKind::Header);
    }
    if cells(row).into_iter().all(|td| text_of(td).is_empty()) {
        return Ok(RowKind::Empty);
    }

    let date_text = select_first(row, &SEL.date).map(text_of).unwrap_or_default();
    let date = parse_event_date(&date_text)?;
    Ok(RowKind::Data(ListingRow { date, link: event_link(row) }))
}

/// Classify every listing row, in page order.
pub fn listing_rows(doc: &Html) -> Vec<Result<RowKind>> {
    doc.select(&SEL.row).map(classify).collect()
}

/// Inclusive on both ends.
pub fn in_range(date: NaiveDate, start: NaiveDate, end: NaiveDate) -> bool {
    start <= date && date <= end
}

/// "June 7, 2025". Full English month names only; "Jun 7, 2025" is rejected.
pub fn parse_event_date(text: &str) -> Result<NaiveDate> {
    let t = text.trim();
    let date = NaiveDate::parse_from_str(t, EVENT_DATE_FORMAT)
        .map_err(|_| ScrapeError::DateParse { text: s!(t) })?;
    // `%B` also accepts abbreviations when parsing
    let month = t.split_whitespace().next().unwrap_or_default();
    if !month.eq_ignore_ascii_case(&date.format("%B").to_string()) {
        return Err(ScrapeError::DateParse { text: s!(t) });
    }
    Ok(date)
}

fn event_link(row: ElementRef<'_>) -> Option<EventLink> {
    let a = select_first(row, &SEL.link)?;
    let href = attr(a, "href")?.trim();
    Some(EventLink { name: text_of(a), href: s!(href) })
}
