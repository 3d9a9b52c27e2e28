// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page-specific readers for ufcstats.com. Each spec knows *where the ground truth
//! lives in one page's HTML* and turns it into typed records.
//!
//! ## What lives here
//! - **Pure HTML parsing** of already-fetched documents (`scraper::Html`).
//! - **Selector choice** (all selectors are constants in `config::consts`).
//! - **Strict decoding**: closed vocabularies, a header-driven column layout, and
//!   explicit errors for anything the page doesn't say plainly.
//!
//! ## What does **not** live here
//! - **Fetching, pacing, per-event error isolation** – `scrape` drives the specs and
//!   decides what a failure costs.
//! - **Output formatting** – records are `serde::Serialize`; the CLI prints them.
//!
//! ## Typical call chain
//! ```text
//! scrape::Scraper → events::listing_rows(listing)      (one per page row)
//!                 → fetch detail page
//!                 → fight_details::parse_event_fights  (ColumnLayout once, decode per row)
//! ```
//!
//! ## Testing notes
//! - Specs are tested offline against synthetic markup that mirrors the live pages.
pub mod columns;
pub mod events;
pub mod fight_details;
