// src/core/sanitize.rs
use std::time::Duration;

use crate::error::{Result, ScrapeError};

/// Collapse runs of whitespace into a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Base-10 count, surrounding whitespace ignored. Anything else (`--`, `3,001`, `-1`) is `None`.
pub fn parse_count(s: &str) -> Option<u32> {
    s.trim().parse().ok()
}

/// `m:ss` → elapsed time. Blank text is zero; anything else malformed is an error.
pub fn parse_round_time(s: &str) -> Result<Duration> {
    let t = s.trim();
    if t.is_empty() {
        return Ok(Duration::ZERO);
    }
    let malformed = || ScrapeError::MalformedTime { text: s!(t) };

    let mut parts = t.split(':');
    let (Some(m), Some(sec), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(malformed());
    };
    let m: u64 = m.trim().parse().map_err(|_| malformed())?;
    let sec: u64 = sec.trim().parse().map_err(|_| malformed())?;
    let secs = m.checked_mul(60).and_then(|x| x.checked_add(sec)).ok_or_else(malformed)?;
    Ok(Duration::from_secs(secs))
}
