//! Per-hole candidate enumeration
//!
//! A candidate is one way of sounding a target pitch on one hole. The
//! enumeration order within a hole is fixed: blow bends, blow, draw bends,
//! draw, overblow, overdraw. Whether a bend or overbend is offered at all is
//! answered by the eligibility predicates below, keyed only by hole data.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::models::note::normalize_pc;
use crate::models::richter::{HoleMapping, ReedPitch, HOLE_COUNT};

/// Holes whose overbends are not offered, whatever the table says
pub const EXCLUDED_OVERBEND_HOLES: [u8; 3] = [2, 3, 8];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Technique {
    Blow,
    Draw,
    BlowBend,
    DrawBend,
    Overblow,
    Overdraw,
}

impl Technique {
    /// Preference when several holes sound the same pitch (lower wins)
    pub fn rank(&self) -> u8 {
        match self {
            Technique::Draw => 0,
            Technique::Blow => 1,
            Technique::DrawBend => 2,
            Technique::BlowBend => 3,
            Technique::Overdraw => 4,
            Technique::Overblow => 5,
        }
    }

    /// Inhaled techniques are written with a leading '-'
    pub fn is_draw_side(&self) -> bool {
        matches!(self, Technique::Draw | Technique::DrawBend | Technique::Overdraw)
    }

    pub fn is_bend(&self) -> bool {
        matches!(self, Technique::BlowBend | Technique::DrawBend)
    }

    pub fn is_overbend(&self) -> bool {
        matches!(self, Technique::Overblow | Technique::Overdraw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabCandidate {
    pub hole: u8,
    pub technique: Technique,
    pub pc: u8,
    pub midi: i64,
    /// Semitones below the unbent reed, bends only
    pub bend_semitones: Option<u8>,
}

pub fn overblow_eligible(hole: u8) -> bool {
    (1..=6).contains(&hole) && !EXCLUDED_OVERBEND_HOLES.contains(&hole)
}

pub fn overdraw_eligible(hole: u8) -> bool {
    (7..=HOLE_COUNT).contains(&hole) && !EXCLUDED_OVERBEND_HOLES.contains(&hole)
}

/// A bend that lands exactly on the hole's plain blow or draw note is the
/// same sound as that plain note and is not offered.
pub fn bend_shadowed(hole: &HoleMapping, bent: ReedPitch) -> bool {
    bent.midi == hole.blow.midi || bent.midi == hole.draw.midi
}

fn plain(hole: &HoleMapping, technique: Technique, pitch: ReedPitch) -> TabCandidate {
    TabCandidate {
        hole: hole.hole,
        technique,
        pc: pitch.pc,
        midi: pitch.midi,
        bend_semitones: None,
    }
}

fn bends<'a>(
    hole: &'a HoleMapping,
    technique: Technique,
    reed: ReedPitch,
    bent: &'a [ReedPitch],
    targets: &'a BTreeSet<u8>,
) -> impl Iterator<Item = TabCandidate> + 'a {
    bent.iter()
        .filter(move |pitch| targets.contains(&pitch.pc) && !bend_shadowed(hole, **pitch))
        .map(move |pitch| TabCandidate {
            hole: hole.hole,
            technique,
            pc: pitch.pc,
            midi: pitch.midi,
            bend_semitones: Some(normalize_pc(reed.pc as i32 - pitch.pc as i32)),
        })
}

/// Every way `hole` can sound a pitch class in `targets`, in precedence order
pub fn enumerate_candidates(hole: &HoleMapping, targets: &BTreeSet<u8>) -> Vec<TabCandidate> {
    let mut candidates: Vec<TabCandidate> = Vec::new();

    candidates.extend(bends(hole, Technique::BlowBend, hole.blow, &hole.blow_bends, targets));
    if targets.contains(&hole.blow.pc) {
        candidates.push(plain(hole, Technique::Blow, hole.blow));
    }

    candidates.extend(bends(hole, Technique::DrawBend, hole.draw, &hole.draw_bends, targets));
    if targets.contains(&hole.draw.pc) {
        candidates.push(plain(hole, Technique::Draw, hole.draw));
    }

    if let Some(overblow) = hole.overblow {
        if targets.contains(&overblow.pc) && overblow_eligible(hole.hole) {
            candidates.push(plain(hole, Technique::Overblow, overblow));
        }
    }

    if let Some(overdraw) = hole.overdraw {
        if targets.contains(&overdraw.pc) && overdraw_eligible(hole.hole) {
            candidates.push(plain(hole, Technique::Overdraw, overdraw));
        }
    }

    candidates
}
