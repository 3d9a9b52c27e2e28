// src/config/options.rs
use std::time::Duration;

use chrono::NaiveDate;

use super::consts::REQUEST_DELAY_MS;

/// Runtime knobs for one scrape.
///
/// Both dates are inclusive. Unset bounds default to the widest representable
/// range, so a default-constructed value accepts every event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Slept before every event-detail fetch, unconditionally.
    pub request_delay: Duration,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            start_date: NaiveDate::MIN,
            end_date: NaiveDate::MAX,
            request_delay: Duration::from_millis(REQUEST_DELAY_MS),
        }
    }
}

impl ScrapeOptions {
    pub fn with_start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = date;
        self
    }

    pub fn with_end_date(mut self, date: NaiveDate) -> Self {
        self.end_date = date;
        self
    }

    pub fn with_request_delay(mut self, delay: Duration) -> Self {
        self.request_delay = delay;
        self
    }

    /// Single-day window.
    pub fn on(self, date: NaiveDate) -> Self {
        self.with_start_date(date).with_end_date(date)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        crate::specs::events::in_range(date, self.start_date, self.end_date)
    }

    pub fn is_inverted(&self) -> bool {
        self.start_date > self.end_date
    }
}
