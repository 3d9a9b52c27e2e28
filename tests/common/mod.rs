// tests/common/mod.rs
//
// In-memory site for pipeline tests: URL → canned HTML, every request recorded.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Duration;

use scraper::Html;
use ufc_scrape::{Fetch, Result, ScrapeError, ScrapeOptions, Scraper};

pub const LISTING_URL: &str = "http://www.ufcstats.com/statistics/events/completed?page=all";
pub const LISTING: &str = include_str!("../fixtures/listing.html");

pub fn detail_url(id: &str) -> String {
    format!("http://www.ufcstats.com/event-details/{id}")
}

#[derive(Default)]
pub struct FakeSite {
    pages: HashMap<String, String>,
    pub requests: RefCell<Vec<String>>,
}

impl FakeSite {
    /// The fixture site: listing + four detail pages. `ffff6666` is deliberately not served.
    pub fn fixtures() -> Self {
        let mut site = Self::default();
        site.serve(LISTING_URL, LISTING);
        site.serve(&detail_url("aaaa1111"), include_str!("../fixtures/event_alpha.html"));
        site.serve(&detail_url("bbbb2222"), include_str!("../fixtures/event_beta.html"));
        site.serve(&detail_url("cccc3333"), include_str!("../fixtures/event_gamma.html"));
        site.serve(&detail_url("dddd4444"), include_str!("../fixtures/event_delta.html"));
        site
    }

    pub fn serve(&mut self, url: &str, body: &str) {
        self.pages.insert(url.to_string(), body.to_string());
    }

    pub fn requested(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl Fetch for FakeSite {
    fn fetch(&self, url: &str) -> Result<String> {
        self.requests.borrow_mut().push(url.to_string());
        self.pages.get(url).cloned().ok_or_else(|| ScrapeError::Transport {
            url: url.to_string(),
            reason: "HTTP 404 Not Found".to_string(),
        })
    }
}

pub fn no_delay() -> ScrapeOptions {
    ScrapeOptions::default().with_request_delay(Duration::ZERO)
}

pub fn scraper(site: &FakeSite, opts: ScrapeOptions) -> Scraper<&FakeSite> {
    Scraper::with_fetcher(site, opts)
}

pub fn listing() -> Html {
    Html::parse_document(LISTING)
}
