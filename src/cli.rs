// src/cli.rs
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use chrono::NaiveDate;
use clap::Parser;
use color_eyre::eyre::{Result, WrapErr, bail};
use log::LevelFilter;

use crate::config::ScrapeOptions;
use crate::config::consts::REQUEST_DELAY_MS;
use crate::logger::{self, DEFAULT_LOG_FILE, Sink};
use crate::progress::Progress;
use crate::scrape::Scraper;

/// Scrape completed UFC events from ufcstats.com and print them as JSON.
#[derive(Parser, Debug)]
#[command(name = "ufc_scrape", version)]
pub struct Args {
    /// First event date to include (YYYY-MM-DD, inclusive)
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// Last event date to include (YYYY-MM-DD, inclusive)
    #[arg(long)]
    pub to: Option<NaiveDate>,

    /// Pause before each event-detail request, in milliseconds
    #[arg(long, default_value_t = REQUEST_DELAY_MS)]
    pub delay_ms: u64,

    /// Print each event as soon as it is scraped (one JSON object per line)
    #[arg(long)]
    pub stream: bool,

    /// Stop after this many events (stream mode only fetches what it prints)
    #[arg(long)]
    pub limit: Option<usize>,

    /// Write the log to a file instead of stderr (default path if no value given)
    #[arg(long, num_args = 0..=1, default_missing_value = DEFAULT_LOG_FILE)]
    pub log_file: Option<PathBuf>,

    /// More logging (-v debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn options(&self) -> Result<ScrapeOptions> {
        let mut opts = ScrapeOptions::default().with_request_delay(Duration::from_millis(self.delay_ms));
        if let Some(d) = self.from {
            opts = opts.with_start_date(d);
        }
        if let Some(d) = self.to {
            opts = opts.with_end_date(d);
        }
        if opts.is_inverted() {
            bail!("--from {} is after --to {}", opts.start_date, opts.end_date);
        }
        Ok(opts)
    }
}

pub fn run() -> Result<()> {
    run_with(Args::parse())
}

pub fn run_with(args: Args) -> Result<()> {
    let level = if args.verbose > 0 { LevelFilter::Debug } else { LevelFilter::Info };
    let sink = args.log_file.clone().map_or(Sink::Stderr, Sink::File);
    logger::init(sink, level).wrap_err("could not open log file")?;

    let scraper = Scraper::new(args.options()?)?;
    let limit = args.limit.unwrap_or(usize::MAX);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.stream {
        for event in scraper.stream_events()?.take(limit) {
            serde_json::to_writer(&mut out, &event)?;
            writeln!(out)?;
            out.flush()?;
        }
    } else {
        let mut progress = StderrProgress::default();
        let mut events = scraper.scrape_events(Some(&mut progress))?;
        events.truncate(limit);
        serde_json::to_writer_pretty(&mut out, &events)?;
        writeln!(out)?;
    }
    Ok(())
}

/// Progress lines on stderr, e.g. `[3/12] UFC 300: Pereira vs. Hill`.
#[derive(Default)]
struct StderrProgress {
    total: usize,
    seen: usize,
    failed: usize,
}

impl Progress for StderrProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        eprintln!("{total} events to scrape");
    }

    fn item_done(&mut self, _index: usize, name: &str) {
        self.seen += 1;
        eprintln!("[{}/{}] {name}", self.seen, self.total);
    }

    fn item_failed(&mut self, index: usize, reason: &str) {
        self.seen += 1;
        self.failed += 1;
        eprintln!("[{}/{}] listing row {index} skipped: {reason}", self.seen, self.total);
    }

    fn finish(&mut self) {
        eprintln!("done: {} scraped, {} skipped", self.seen - self.failed, self.failed);
    }
}
