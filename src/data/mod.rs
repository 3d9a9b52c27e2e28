// src/data/mod.rs
//
// Records produced by the scraper. Built once, never mutated afterwards.

pub mod vocab;

use std::time::Duration;

use chrono::NaiveDate;
use serde::{Serialize, Serializer};

pub use vocab::{Domain, Method, Round, Vocabulary, WeightClass};

/// One event from the listing page with all of its decoded fights.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub name: String,
    pub date: NaiveDate,
    pub fights: Vec<FightResult>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FightResult {
    /// Document order. Usually two, but not guaranteed.
    pub participants: Vec<FighterStats>,
    pub weight_class: WeightClass,
    pub method: Method,
    pub round: Round,
    /// Time elapsed in the final round; zero when the site leaves it blank.
    #[serde(serialize_with = "as_seconds")]
    pub final_round_end_time: Duration,
    pub is_title_fight: bool,
}

/// Per-fighter line of a fight. A stat is `None` when its cell wasn't a number.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FighterStats {
    pub name: String,
    pub knockdowns: Option<u32>,
    pub significant_strikes: Option<u32>,
    pub takedowns: Option<u32>,
    pub submission_attempts: Option<u32>,
    pub is_winner: bool,
}

impl FightResult {
    pub fn winner(&self) -> Option<&FighterStats> {
        self.participants.iter().find(|p| p.is_winner)
    }
}

fn as_seconds<S: Serializer>(d: &Duration, ser: S) -> Result<S::Ok, S::Error> {
    ser.serialize_u64(d.as_secs())
}
