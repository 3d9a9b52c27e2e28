// src/config/consts.rs

// Net config
pub const EVENTS_URL: &str = "http://www.ufcstats.com/statistics/events/completed?page=all";
pub const USER_AGENT: &str = "ufc_scrape/0.3";
pub const HTTP_TIMEOUT_SECS: u64 = 15;

// Pause before every event-detail fetch; the site answers 429 when hit faster
pub const REQUEST_DELAY_MS: u64 = 2_000;

// Listing page (completed events)
pub const SEL_EVENT_ROW: &str = "tr.b-statistics__table-row";
pub const SEL_HEADER_CELL: &str = "th";
pub const SEL_EVENT_DATE: &str = "span.b-statistics__date";
pub const SEL_EVENT_LINK: &str = r#"a[href*="/event-details/"]"#;
pub const EVENT_DATE_FORMAT: &str = "%B %d, %Y";

// Event detail page (fight results)
pub const SEL_RESULTS_TABLE: &str = "table.b-fight-details__table";
pub const SEL_RESULTS_HEADER: &str = "thead tr th";
pub const SEL_RESULTS_ROW: &str = "tbody.b-fight-details__table-body tr";
pub const SEL_GROUPED_TEXT: &str = "p.b-fight-details__table-text";
pub const SEL_FIGHTER_LINK: &str = "a.b-link_style_black";
pub const SEL_WIN_MARKER: &str = "a.b-flag_style_green";
pub const SEL_BELT_MARKER: &str = r#"img[src*="belt.png"]"#;
