//! Tab notation
//!
//! `4` is 4 blow, `-4` is 4 draw. Bends add one apostrophe per semitone
//! (`-3''` is 3 draw bent a whole step). Overblows and overdraws carry a
//! single mark whatever their interval: `'` or `°` depending on the chosen
//! [`OverbendNotation`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::candidate::TabCandidate;
use crate::error::TabsError;

const BEND_MARK: char = '\'';
const DEGREE_MARK: char = '°';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverbendNotation {
    #[default]
    Apostrophe,
    Degree,
}

impl OverbendNotation {
    pub fn as_str(&self) -> &'static str {
        match self {
            OverbendNotation::Apostrophe => "apostrophe",
            OverbendNotation::Degree => "degree",
        }
    }

    fn mark(&self) -> char {
        match self {
            OverbendNotation::Apostrophe => BEND_MARK,
            OverbendNotation::Degree => DEGREE_MARK,
        }
    }
}

impl fmt::Display for OverbendNotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OverbendNotation {
    type Err = TabsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "apostrophe" => Ok(OverbendNotation::Apostrophe),
            "degree" => Ok(OverbendNotation::Degree),
            _ => Err(TabsError::UnknownNotation(s.to_string())),
        }
    }
}

/// Render one candidate as a tab token string
pub fn format_tab(candidate: &TabCandidate, notation: OverbendNotation) -> String {
    let technique = candidate.technique;
    let mut tab = String::new();
    if technique.is_draw_side() {
        tab.push('-');
    }
    tab.push_str(&candidate.hole.to_string());

    if technique.is_overbend() {
        tab.push(notation.mark());
    } else if technique.is_bend() {
        let depth = candidate.bend_semitones.unwrap_or(1) as usize;
        tab.extend(std::iter::repeat(BEND_MARK).take(depth));
    }

    tab
}
