// src/core/net.rs
// Page fetching. The pipeline only sees the `Fetch` trait; `HttpFetcher` is the real thing.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::consts::{HTTP_TIMEOUT_SECS, USER_AGENT};
use crate::error::{Result, ScrapeError};

/// Fetch a page and return its HTML body.
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<String>;
}

impl<F: Fetch + ?Sized> Fetch for &F {
    fn fetch(&self, url: &str) -> Result<String> {
        (**self).fetch(url)
    }
}

/// Blocking HTTP GET. One request at a time; no retries.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()
            .map_err(|e| transport("<client>", e))?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        logd!("GET {url}");
        let resp = self.client.get(url).send().map_err(|e| transport(url, e))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ScrapeError::Transport { url: s!(url), reason: format!("HTTP {status}") });
        }
        let body = resp.text().map_err(|e| transport(url, e))?;
        logd!("GET {url}: {} bytes", body.len());
        Ok(body)
    }
}

fn transport(url: &str, e: reqwest::Error) -> ScrapeError {
    ScrapeError::Transport { url: s!(url), reason: e.to_string() }
}
