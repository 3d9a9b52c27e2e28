// src/specs/columns.rs
//! Column layout of a fight-results table.
//!
//! The site doesn't promise a stable column order, so positions are resolved from
//! each page's own header row and threaded through row decoding. A layout belongs
//! to the page it was built from and is never reused for another page.

use std::fmt;

use crate::error::{Result, ScrapeError};

/// Logical columns the row decoder reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Column {
    WinLoss,
    Fighter,
    Kd,
    Str,
    Td,
    Sub,
    WeightClass,
    Method,
    Round,
    Time,
}

impl Column {
    pub const ALL: [Column; 10] = [
        Column::WinLoss,
        Column::Fighter,
        Column::Kd,
        Column::Str,
        Column::Td,
        Column::Sub,
        Column::WeightClass,
        Column::Method,
        Column::Round,
        Column::Time,
    ];

    /// Header text as printed on the site.
    pub fn label(self) -> &'static str {
        match self {
            Column::WinLoss => "W/L",
            Column::Fighter => "Fighter",
            Column::Kd => "Kd",
            Column::Str => "Str",
            Column::Td => "Td",
            Column::Sub => "Sub",
            Column::WeightClass => "Weight class",
            Column::Method => "Method",
            Column::Round => "Round",
            Column::Time => "Time",
        }
    }

    fn slot(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnLayout {
    positions: [usize; 10],
}

impl ColumnLayout {
    /// Resolve positions from header labels (trimmed, exact match).
    ///
    /// Unknown labels are ignored. If a label repeats, its first occurrence wins.
    /// Fails listing every required column that never appears.
    pub fn build<S: AsRef<str>>(headers: &[S]) -> Result<Self> {
        let mut found: [Option<usize>; 10] = [None; 10];
        for (i, h) in headers.iter().enumerate() {
            let h = h.as_ref().trim();
            if let Some(col) = Column::ALL.iter().find(|c| c.label() == h) {
                found[col.slot()].get_or_insert(i);
            }
        }

        let missing: Vec<Column> = Column::ALL
            .iter()
            .copied()
            .filter(|c| found[c.slot()].is_none())
            .collect();
        if !missing.is_empty() {
            return Err(ScrapeError::MissingColumns { missing });
        }

        let mut positions = [0usize; 10];
        for col in Column::ALL {
            positions[col.slot()] = found[col.slot()].unwrap_or_default();
        }
        Ok(Self { positions })
    }

    /// Zero-based cell position of `col` within a row.
    pub fn position(&self, col: Column) -> usize {
        self.positions[col.slot()]
    }
}
