// src/progress.rs
/// Lightweight progress reporting for a scrape run.
/// Frontends (the CLI, embedding apps) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of listing rows that passed the date filter.
    fn begin(&mut self, _total: usize) {}

    /// An event was scraped with all of its fights.
    fn item_done(&mut self, _index: usize, _name: &str) {}

    /// An event (or its listing row) was skipped because of an error.
    fn item_failed(&mut self, _index: usize, _reason: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

