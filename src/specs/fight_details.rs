// src/specs/fight_details.rs
//! Scraping *spec* for an event-detail page (`/event-details/<id>`).
//!
//! The page has one results table. Its header row names the columns; each body row
//! is one fight. The per-fighter cells (`Fighter`, `W/L`, `Kd`, `Str`, `Td`, `Sub`)
//! are *grouped*: one `<p class="b-fight-details__table-text">` per fighter, in the
//! same order in every cell. Decoding walks those groups in lockstep by index.
//!
//! ```text
//! <td><p><a class="b-flag_style_green">win</a></p></td>     W/L    (marker on winner only)
//! <td><p><a class="b-link_style_black">Jon Jones</a></p>
//!     <p><a class="b-link_style_black">Ciryl Gane</a></p></td>   Fighter
//! <td><p>1</p><p>0</p></td>                                  Kd
//! ...
//! <td><p>Heavyweight <img src=".../belt.png"></p></td>      Weight class
//! ```

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::config::consts::*;
use crate::core::html::{cells, has_marker, sel, select_all, select_first, text_of};
use crate::core::sanitize::{parse_count, parse_round_time};
use crate::data::{FightResult, FighterStats, Method, Round, Vocabulary, WeightClass};
use crate::error::{Result, ScrapeError};
use crate::specs::columns::{Column, ColumnLayout};

struct Selectors {
    table: Selector,
    header: Selector,
    row: Selector,
    grouped: Selector,
    fighter_link: Selector,
    win: Selector,
    belt: Selector,
}

static SEL: LazyLock<Selectors> = LazyLock::new(|| Selectors {
    table: sel(SEL_RESULTS_TABLE),
    header: sel(SEL_RESULTS_HEADER),
    row: sel(SEL_RESULTS_ROW),
    grouped: sel(SEL_GROUPED_TEXT),
    fighter_link: sel(SEL_FIGHTER_LINK),
    win: sel(SEL_WIN_MARKER),
    belt: sel(SEL_BELT_MARKER),
});

/// Decode every fight on an event-detail page.
///
/// No results table means no fights. A header missing required columns fails the
/// page; any row failing to decode fails the page too, since an event is only
/// emitted with its complete fight list.
pub fn parse_event_fights(doc: &Html) -> Result<Vec<FightResult>> {
    let Some(table) = doc.select(&SEL.table).next() else {
        logd!("Fight details: no results table on page");
        return Ok(Vec::new());
    };

    let headers: Vec<String> = select_all(table, &SEL.header).into_iter().map(text_of).collect();
    let layout = ColumnLayout::build(&headers)?;

    table
        .select(&SEL.row)
        .enumerate()
        .map(|(i, row)| decode(row, &layout).map_err(|e| e.at_row(i)))
        .collect()
}

/// Decode one results row into a fight. Pure: same row + layout, same result.
pub fn decode(row: ElementRef<'_>, layout: &ColumnLayout) -> Result<FightResult> {
    let tds = cells(row);
    let cell = |col: Column| {
        let pos = layout.position(col);
        tds.get(pos).copied().ok_or_else(|| {
            ScrapeError::in_row(format!("no {col} cell at position {pos} ({} cells in row)", tds.len()))
        })
    };

    let fighters = select_all(cell(Column::Fighter)?, &SEL.grouped);
    let outcomes = select_all(cell(Column::WinLoss)?, &SEL.grouped);

    let kd = grouped_counts(cell(Column::Kd)?);
    let strikes = grouped_counts(cell(Column::Str)?);
    let tds_landed = grouped_counts(cell(Column::Td)?);
    let subs = grouped_counts(cell(Column::Sub)?);

    let mut participants = Vec::with_capacity(fighters.len());
    for (i, fighter) in fighters.into_iter().enumerate() {
        let Some(name) = select_first(fighter, &SEL.fighter_link).map(text_of) else {
            continue;
        };
        if name.is_empty() {
            continue;
        }
        let is_winner = outcomes.get(i).is_some_and(|p| has_marker(*p, &SEL.win));

        participants.push(FighterStats {
            knockdowns: stat(&kd, i, Column::Kd)?,
            significant_strikes: stat(&strikes, i, Column::Str)?,
            takedowns: stat(&tds_landed, i, Column::Td)?,
            submission_attempts: stat(&subs, i, Column::Sub)?,
            name,
            is_winner,
        });
    }

    let wc_cell = cell(Column::WeightClass)?;
    let weight_class = WeightClass::resolve(&first_group_text(wc_cell))?;
    let method = Method::resolve(&first_group_text(cell(Column::Method)?))?;
    let round = Round::resolve(&first_group_text(cell(Column::Round)?))?;
    let final_round_end_time = parse_round_time(&first_group_text(cell(Column::Time)?))?;
    let is_title_fight = has_marker(wc_cell, &SEL.belt);

    Ok(FightResult {
        participants,
        weight_class,
        method,
        round,
        final_round_end_time,
        is_title_fight,
    })
}

/// One entry per grouped sub-element; non-numeric text degrades to `None`.
fn grouped_counts(td: ElementRef<'_>) -> Vec<Option<u32>> {
    td.select(&SEL.grouped).map(|p| parse_count(&text_of(p))).collect()
}

fn stat(values: &[Option<u32>], i: usize, col: Column) -> Result<Option<u32>> {
    values.get(i).copied().ok_or_else(|| {
        ScrapeError::in_row(format!("{col} has {} values, no entry for fighter #{}", values.len(), i + 1))
    })
}

/// Text of the cell's first grouped sub-element, or empty when there is none.
fn first_group_text(td: ElementRef<'_>) -> String {
    select_first(td, &SEL.grouped).map(text_of).unwrap_or_default()
}
