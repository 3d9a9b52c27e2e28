// src/data/vocab.rs
//! Closed vocabularies for the free-text cells of the results table.
//!
//! Every enum has an explicit label table; text resolves to a member only on an
//! exact, case-insensitive match of the trimmed input. Anything else is an
//! `UnknownVocabulary` error, so a new category on the site (a new weight class,
//! a new method code) stops the affected row instead of being mis-tagged.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::{Result, ScrapeError};

/// Which vocabulary a lookup was made against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Domain {
    WeightClass,
    Method,
    Round,
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Domain::WeightClass => "weight class",
            Domain::Method => "method",
            Domain::Round => "round",
        })
    }
}

pub trait Vocabulary: Sized + Copy + 'static {
    const DOMAIN: Domain;
    const ALL: &'static [Self];

    fn label(self) -> &'static str;

    fn resolve(text: &str) -> Result<Self> {
        let t = text.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.label().eq_ignore_ascii_case(t))
            .ok_or_else(|| ScrapeError::UnknownVocabulary { domain: Self::DOMAIN, text: s!(t) })
    }
}

/// `resolve::<Method>("ko/tko")`
pub fn resolve<V: Vocabulary>(text: &str) -> Result<V> {
    V::resolve(text)
}

macro_rules! vocabulary {
    ($name:ident, $domain:expr, { $($variant:ident => $label:literal),+ $(,)? }) => {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl Vocabulary for $name {
            const DOMAIN: Domain = $domain;
            const ALL: &'static [Self] = &[$($name::$variant),+];

            fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, ser: S) -> std::result::Result<S::Ok, S::Error> {
                ser.serialize_str(self.label())
            }
        }

        impl std::str::FromStr for $name {
            type Err = ScrapeError;
            fn from_str(s: &str) -> Result<Self> {
                <Self as Vocabulary>::resolve(s)
            }
        }
    };
}

vocabulary!(WeightClass, Domain::WeightClass, {
    CatchWeight => "Catch Weight",
    LightHeavyweight => "Light Heavyweight",
    WomensBantamweight => "Women's Bantamweight",
    Flyweight => "Flyweight",
    WomensStrawweight => "Women's Strawweight",
    SuperHeavyweight => "Super Heavyweight",
    WomensFlyweight => "Women's Flyweight",
    WomensFeatherweight => "Women's Featherweight",
    Heavyweight => "Heavyweight",
    Lightweight => "Lightweight",
    Featherweight => "Featherweight",
    Welterweight => "Welterweight",
    Middleweight => "Middleweight",
    Bantamweight => "Bantamweight",
    OpenWeight => "Open Weight",
});

vocabulary!(Method, Domain::Method, {
    Other => "Other",
    KoTko => "KO/TKO",
    SplitDecision => "S-DEC",
    Overturned => "Overturned",
    Disqualification => "DQ",
    Submission => "SUB",
    UnanimousDecision => "U-DEC",
    MajorityDecision => "M-DEC",
    NoContest => "CNC",
});

vocabulary!(Round, Domain::Round, {
    One => "1",
    Two => "2",
    Three => "3",
    Four => "4",
    Five => "5",
});

impl Round {
    pub fn number(self) -> u8 {
        match self {
            Round::One => 1,
            Round::Two => 2,
            Round::Three => 3,
            Round::Four => 4,
            Round::Five => 5,
        }
    }
}
