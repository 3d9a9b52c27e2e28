// tests/pipeline.rs
//
// End-to-end runs of both drivers against the fixture site (no network).
//
// Fixture listing, in page order:
//   header, empty,
//   Alpha   2025-06-14  ok, 2 fights (Jones/Gane + a title fight)
//   Beta    2025-06-07  ok, 1 fight with a blank time
//   Gamma   2025-05-31  second fight's time is "abc"
//   Delta   2025-05-10  header lacks "Round"
//   Epsilon "Mai 3, 2025" (unparsable date)
//   Zeta    2025-04-26  detail page not served
mod common;

use std::time::{Duration, Instant};

use chrono::NaiveDate;
use common::*;
use ufc_scrape::progress::Progress;
use ufc_scrape::{Event, Method, Round, ScrapeError, ScrapeOptions, WeightClass};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn window(start: NaiveDate, end: NaiveDate) -> ScrapeOptions {
    no_delay().with_start_date(start).with_end_date(end)
}

fn names(events: &[Event]) -> Vec<&str> {
    events.iter().map(|e| e.name.as_str()).collect()
}

#[derive(Default)]
struct Recorder {
    total: usize,
    done: Vec<String>,
    failed: Vec<usize>,
    finished: bool,
}

impl Progress for Recorder {
    fn begin(&mut self, total: usize) { self.total = total; }
    fn item_done(&mut self, _index: usize, name: &str) { self.done.push(name.to_string()); }
    fn item_failed(&mut self, index: usize, _reason: &str) { self.failed.push(index); }
    fn finish(&mut self) { self.finished = true; }
}

#[test]
fn eager_keeps_good_events_and_skips_bad_rows() {
    let site = FakeSite::fixtures();
    let events = scraper(&site, no_delay()).events_from_listing(&listing(), None);

    assert_eq!(names(&events), ["UFC Fight Night: Alpha vs. Omega", "UFC 316: Beta vs. Gamma"]);
    assert_eq!(events[0].date, ymd(2025, 6, 14));
    assert_eq!(events[0].fights.len(), 2);

    // Epsilon never reaches the network: its date fails first.
    assert_eq!(
        site.requested(),
        ["aaaa1111", "bbbb2222", "cccc3333", "dddd4444", "ffff6666"].map(detail_url)
    );
}

#[test]
fn scenario_a_grouped_cells_decode_per_fighter() {
    let site = FakeSite::fixtures();
    let events = scraper(&site, no_delay()).events_from_listing(&listing(), None);
    let fight = &events[0].fights[0];

    assert_eq!(fight.participants.len(), 2);
    let jones = &fight.participants[0];
    let gane = &fight.participants[1];
    assert_eq!(jones.name, "Jon Jones");
    assert!(jones.is_winner);
    assert_eq!(jones.knockdowns, Some(1));
    assert_eq!(jones.significant_strikes, Some(45));
    assert_eq!(jones.takedowns, Some(2));
    assert_eq!(gane.name, "Ciryl Gane");
    assert!(!gane.is_winner);
    assert_eq!(gane.significant_strikes, Some(30));
    assert_eq!(gane.takedowns, None);
    assert_eq!(gane.submission_attempts, Some(0));

    assert_eq!(fight.weight_class, WeightClass::Heavyweight);
    assert_eq!(fight.method, Method::KoTko);
    assert_eq!(fight.round, Round::Three);
    assert_eq!(fight.final_round_end_time, Duration::from_secs(2 * 60 + 34));
    assert!(!fight.is_title_fight);

    let title = &events[0].fights[1];
    assert!(title.is_title_fight);
    assert_eq!(title.weight_class, WeightClass::WomensStrawweight);
    assert_eq!(title.method, Method::UnanimousDecision);
    assert_eq!(title.winner().map(|w| w.name.as_str()), Some("Zhang Weili"));
}

#[test]
fn scenario_b_blank_time_is_zero() {
    let site = FakeSite::fixtures();
    let events = scraper(&site, no_delay()).events_from_listing(&listing(), None);
    let fight = &events[1].fights[0];
    assert_eq!(fight.final_round_end_time, Duration::ZERO);
    assert_eq!(fight.method, Method::Submission);
    assert!(fight.is_title_fight);
}

#[test]
fn scenario_c_malformed_time_skips_event_and_run_continues() {
    let site = FakeSite::fixtures();
    let opts = window(ymd(2025, 5, 1), ymd(2025, 6, 30));
    let mut rec = Recorder::default();
    let events = scraper(&site, opts).events_from_listing(&listing(), Some(&mut rec));

    // Gamma (row 4) fails on "abc"; rows after it are still attempted.
    assert!(!names(&events).contains(&"UFC Fight Night: Gamma vs. Delta"));
    assert_eq!(rec.total, 5);
    assert_eq!(rec.done, ["UFC Fight Night: Alpha vs. Omega", "UFC 316: Beta vs. Gamma"]);
    assert_eq!(rec.failed, [4, 5, 6]);
    assert!(rec.finished);
    assert!(site.requested().contains(&detail_url("dddd4444")));
}

#[test]
fn scenario_d_single_day_window_is_inclusive() {
    let site = FakeSite::fixtures();
    let events = scraper(&site, no_delay().on(ymd(2025, 6, 7))).events_from_listing(&listing(), None);
    assert_eq!(names(&events), ["UFC 316: Beta vs. Gamma"]);

    let site = FakeSite::fixtures();
    let events = scraper(&site, no_delay().on(ymd(2025, 6, 8))).events_from_listing(&listing(), None);
    assert!(events.is_empty());
    // Only the unparsable-date row survives filtering, and it never fetches.
    assert!(site.requested().is_empty());
}

#[test]
fn window_bounds_are_both_inclusive() {
    let site = FakeSite::fixtures();
    let opts = window(ymd(2025, 6, 7), ymd(2025, 6, 14));
    let events = scraper(&site, opts).events_from_listing(&listing(), None);
    assert_eq!(names(&events), ["UFC Fight Night: Alpha vs. Omega", "UFC 316: Beta vs. Gamma"]);

    let site = FakeSite::fixtures();
    let opts = window(ymd(2025, 6, 8), ymd(2025, 6, 13));
    assert!(scraper(&site, opts).events_from_listing(&listing(), None).is_empty());
}

#[test]
fn lazy_matches_eager() {
    let site = FakeSite::fixtures();
    let s = scraper(&site, no_delay());
    let eager = s.events_from_listing(&listing(), None);
    let lazy: Vec<Event> = s.stream_from_listing(&listing()).collect();
    assert_eq!(eager, lazy);
}

#[test]
fn lazy_fetches_only_on_demand() {
    let site = FakeSite::fixtures();
    let s = scraper(&site, no_delay());
    let mut stream = s.stream_from_listing(&listing());
    assert!(site.requested().is_empty());

    let first = stream.next().unwrap();
    assert_eq!(first.name, "UFC Fight Night: Alpha vs. Omega");
    assert_eq!(site.requested(), [detail_url("aaaa1111")]);
    assert_eq!(stream.remaining(), 5);

    drop(stream);
    assert_eq!(site.requested().len(), 1);
}

#[test]
fn lazy_stream_ends_and_stays_ended() {
    let site = FakeSite::fixtures();
    let s = scraper(&site, no_delay());
    let mut stream = s.stream_from_listing(&listing());
    assert_eq!(stream.by_ref().count(), 2);
    assert!(stream.next().is_none());
    assert_eq!(stream.remaining(), 0);
}

#[test]
fn delay_precedes_every_detail_fetch() {
    let site = FakeSite::fixtures();
    let delay = Duration::from_millis(40);
    let opts = window(ymd(2025, 6, 7), ymd(2025, 6, 14)).with_request_delay(delay);

    let t = Instant::now();
    let events = scraper(&site, opts).events_from_listing(&listing(), None);
    assert_eq!(events.len(), 2);
    assert!(t.elapsed() >= delay * 2, "elapsed {:?}", t.elapsed());
}

#[test]
fn scrape_events_fetches_listing_first() {
    let site = FakeSite::fixtures();
    let events = scraper(&site, no_delay().on(ymd(2025, 6, 14))).scrape_events(None).unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(site.requested(), [LISTING_URL.to_string(), detail_url("aaaa1111")]);
}

#[test]
fn listing_transport_failure_is_returned() {
    let site = FakeSite::default();
    let err = scraper(&site, no_delay()).stream_events().err().unwrap();
    assert!(matches!(err, ScrapeError::Transport { ref url, .. } if url == LISTING_URL));
}

#[test]
fn custom_listing_url() {
    let mut site = FakeSite::default();
    site.serve("http://mirror.local/events", LISTING);
    let s = scraper(&site, no_delay().on(ymd(2025, 4, 26))).with_listing_url("http://mirror.local/events");
    // Zeta's detail page isn't served: transport failure, skipped.
    assert!(s.scrape_events(None).unwrap().is_empty());
    assert_eq!(site.requested()[0], "http://mirror.local/events");
}

fn skips_site() -> FakeSite {
    let mut site = FakeSite::default();
    site.serve(LISTING_URL, include_str!("fixtures/listing_skips.html"));
    site.serve(&detail_url("tttt7777"), include_str!("fixtures/event_theta.html"));
    site.serve(&detail_url("bbbb2222"), include_str!("fixtures/event_beta.html"));
    site
}

#[test]
fn unknown_method_and_missing_anchor_are_skipped() {
    // Theta's only fight has method "Decision - Technical"; Kappa's row has no anchor.
    let site = skips_site();
    let mut rec = Recorder::default();
    let events = scraper(&site, no_delay()).scrape_events(Some(&mut rec)).unwrap();

    assert_eq!(names(&events), ["UFC 316: Beta vs. Gamma"]);
    assert_eq!(rec.total, 3);
    assert_eq!(rec.failed, [1, 2]);
    assert_eq!(rec.done, ["UFC 316: Beta vs. Gamma"]);
    // No request for the anchorless row.
    assert_eq!(
        site.requested(),
        [LISTING_URL.to_string(), detail_url("tttt7777"), detail_url("bbbb2222")]
    );
}

#[test]
fn lazy_skips_the_same_rows() {
    let site = skips_site();
    let s = scraper(&site, no_delay());
    let events: Vec<Event> = s.stream_events().unwrap().collect();
    assert_eq!(names(&events), ["UFC 316: Beta vs. Gamma"]);
    assert_eq!(events[0].fights[0].method, Method::Submission);
}
