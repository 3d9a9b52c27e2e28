// src/error.rs
use thiserror::Error;

use crate::data::vocab::Domain;
use crate::specs::columns::Column;

pub type Result<T> = std::result::Result<T, ScrapeError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScrapeError {
    /// The results table header lacks one or more required columns.
    #[error("missing required columns: {}", join_columns(.missing))]
    MissingColumns { missing: Vec<Column> },

    #[error("unknown {domain} {text:?}")]
    UnknownVocabulary { domain: Domain, text: String },

    #[error("malformed final-round time {text:?} (expected minutes:seconds)")]
    MalformedTime { text: String },

    #[error("row {row}: {reason}")]
    RowDecode { row: usize, reason: String },

    #[error("unparsable event date {text:?}")]
    DateParse { text: String },

    #[error("fetching {url} failed: {reason}")]
    Transport { url: String, reason: String },
}

impl ScrapeError {
    /// Scope an error to a table row. Field-level errors become `RowDecode`.
    pub fn at_row(self, row: usize) -> Self {
        match self {
            ScrapeError::RowDecode { reason, .. } => ScrapeError::RowDecode { row, reason },
            other => ScrapeError::RowDecode { row, reason: other.to_string() },
        }
    }

    pub fn row(row: usize, reason: impl Into<String>) -> Self {
        ScrapeError::RowDecode { row, reason: reason.into() }
    }

    /// Structural problem inside a row whose index the caller fills in via `at_row`.
    pub(crate) fn in_row(reason: impl Into<String>) -> Self {
        Self::row(0, reason)
    }
}

fn join_columns(cols: &[Column]) -> String {
    cols.iter().map(|c| c.label()).collect::<Vec<_>>().join(", ")
}
