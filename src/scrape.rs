// src/scrape.rs
//! Extraction pipeline: listing page → filtered rows → detail pages → `Event`s.
//!
//! Two drivers share one per-row routine (`Scraper::scrape_row`):
//! - eager: [`Scraper::events_from_listing`] / [`Scraper::scrape_events`] collect everything;
//! - lazy: [`EventStream`] produces one event per `next()`, fetching nothing ahead of demand.
//!
//! In both, a failing row (bad date, missing link, transport error, undecodable
//! fight) is logged and skipped; the run goes on. Output keeps listing order.

use std::iter::FusedIterator;
use std::thread;
use std::vec;

use scraper::Html;

use crate::config::ScrapeOptions;
use crate::config::consts::EVENTS_URL;
use crate::core::net::{Fetch, HttpFetcher};
use crate::data::Event;
use crate::error::{Result, ScrapeError};
use crate::progress::Progress;
use crate::specs::events::{self, ListingRow, RowKind};
use crate::specs::fight_details;

/// A listing row that survived classification and the date filter,
/// or failed classification and will be reported when reached.
type Pending = (usize, Result<ListingRow>);

pub struct Scraper<F: Fetch> {
    fetcher: F,
    options: ScrapeOptions,
    listing_url: String,
}

impl Scraper<HttpFetcher> {
    /// Scraper against the live site.
    pub fn new(options: ScrapeOptions) -> Result<Self> {
        Ok(Self::with_fetcher(HttpFetcher::new()?, options))
    }
}

impl<F: Fetch> Scraper<F> {
    pub fn with_fetcher(fetcher: F, options: ScrapeOptions) -> Self {
        Self { fetcher, options, listing_url: s!(EVENTS_URL) }
    }

    pub fn with_listing_url(mut self, url: impl Into<String>) -> Self {
        self.listing_url = url.into();
        self
    }

    pub fn options(&self) -> &ScrapeOptions {
        &self.options
    }

    /// Fetch the listing and scrape every matching event before returning.
    /// Only a failure to fetch the listing itself is returned as an error.
    pub fn scrape_events(&self, progress: Option<&mut dyn Progress>) -> Result<Vec<Event>> {
        let listing = self.fetch_listing()?;
        Ok(self.events_from_listing(&listing, progress))
    }

    /// Fetch the listing and return a lazy, single-pass stream of events.
    pub fn stream_events(&self) -> Result<EventStream<'_, F>> {
        let listing = self.fetch_listing()?;
        Ok(self.stream_from_listing(&listing))
    }

    /// Eager driver over an already-fetched listing document.
    pub fn events_from_listing(
        &self,
        listing: &Html,
        mut progress: Option<&mut dyn Progress>,
    ) -> Vec<Event> {
        let pending = self.pending(listing);
        if let Some(p) = progress.as_deref_mut() {
            p.begin(pending.len());
        }

        let mut out = Vec::with_capacity(pending.len());
        for (index, row) in pending {
            match self.scrape_row(index, row) {
                Ok(event) => {
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_done(index, &event.name);
                    }
                    out.push(event);
                }
                Err(e) => {
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_failed(index, &e.to_string());
                    }
                }
            }
        }

        if let Some(p) = progress.as_deref_mut() {
            p.finish();
        }
        logf!("Scraped {} events", out.len());
        out
    }

    /// Lazy driver over an already-fetched listing document.
    ///
    /// Rows are classified up front (no I/O); detail pages are fetched only as
    /// the stream is advanced.
    pub fn stream_from_listing(&self, listing: &Html) -> EventStream<'_, F> {
        EventStream { scraper: self, rows: self.pending(listing).into_iter() }
    }

    fn fetch_listing(&self) -> Result<Html> {
        let body = self.fetcher.fetch(&self.listing_url)?;
        Ok(Html::parse_document(&body))
    }

    fn pending(&self, listing: &Html) -> Vec<Pending> {
        let opts = &self.options;
        if opts.is_inverted() {
            logw!("Date window {} .. {} is empty; nothing will match", opts.start_date, opts.end_date);
        }

        events::listing_rows(listing)
            .into_iter()
            .enumerate()
            .filter_map(|(index, kind)| match kind {
                Ok(RowKind::Header) | Ok(RowKind::Empty) => None,
                Ok(RowKind::Data(row)) if !opts.contains(row.date) => {
                    logd!("Listing row {index}: {} outside date window", row.date);
                    None
                }
                Ok(RowKind::Data(row)) => Some((index, Ok(row))),
                Err(e) => Some((index, Err(e))),
            })
            .collect()
    }

    /// Per-row routine shared by both drivers. Logs the failure before handing it back.
    fn scrape_row(&self, index: usize, row: Result<ListingRow>) -> Result<Event> {
        let label = match &row {
            Ok(ListingRow { link: Some(link), .. }) => format!("{:?}", link.name),
            _ => s!("-"),
        };
        let res = row.and_then(|row| self.scrape_event(index, row));
        if let Err(e) = &res {
            loge!("Listing row {index} {label}: skipped: {e}");
        }
        res
    }

    fn scrape_event(&self, index: usize, row: ListingRow) -> Result<Event> {
        let link = row
            .link
            .ok_or_else(|| ScrapeError::row(index, "no event-detail link"))?;
        if link.name.is_empty() {
            return Err(ScrapeError::row(index, format!("event link {} has no name", link.href)));
        }

        if !self.options.request_delay.is_zero() {
            logd!("Pausing {:?} before {}", self.options.request_delay, link.href);
            thread::sleep(self.options.request_delay);
        }

        let body = self.fetcher.fetch(&link.href)?;
        let fights = fight_details::parse_event_fights(&Html::parse_document(&body))?;

        logf!("{} ({}): {} fights", link.name, row.date, fights.len());
        Ok(Event { name: link.name, date: row.date, fights })
    }
}

/// Lazy, forward-only sequence of events. Dropping it early stops all further fetches.
pub struct EventStream<'s, F: Fetch> {
    scraper: &'s Scraper<F>,
    rows: vec::IntoIter<Pending>,
}

impl<F: Fetch> EventStream<'_, F> {
    /// Listing rows not yet processed (successful or not).
    pub fn remaining(&self) -> usize {
        self.rows.len()
    }
}

impl<F: Fetch> Iterator for EventStream<'_, F> {
    type Item = Event;

    fn next(&mut self) -> Option<Event> {
        for (index, row) in self.rows.by_ref() {
            if let Ok(event) = self.scraper.scrape_row(index, row) {
                return Some(event);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.rows.len()))
    }
}

impl<F: Fetch> FusedIterator for EventStream<'_, F> {}
