// src/lib.rs
//! Scraper for ufcstats.com: completed events, each with its fights and per-fighter stats.
//!
//! ```no_run
//! use ufc_scrape::{ScrapeOptions, Scraper};
//!
//! let opts = ScrapeOptions::default()
//!     .with_start_date(chrono::NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
//! let scraper = Scraper::new(opts)?;
//! for event in scraper.stream_events()?.take(3) {
//!     println!("{} {}: {} fights", event.date, event.name, event.fights.len());
//! }
//! # Ok::<(), ufc_scrape::ScrapeError>(())
//! ```

#[macro_use]
mod macros;
#[macro_use]
pub mod logger;

pub mod config;
pub mod core;
pub mod data;
pub mod error;
pub mod progress;
pub mod scrape;
pub mod specs;

#[cfg(feature = "cli")]
pub mod cli;

pub use crate::config::ScrapeOptions;
pub use crate::core::net::{Fetch, HttpFetcher};
pub use crate::data::{Event, FightResult, FighterStats, Method, Round, WeightClass};
pub use crate::error::{Result, ScrapeError};
pub use crate::scrape::{EventStream, Scraper};
