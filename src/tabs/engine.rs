//! Tab generation
//!
//! Turns a set of target pitch classes into ordered tab groups for a
//! harmonica in a given key:
//!
//! 1. transpose the C layout to the harmonica's key
//! 2. enumerate every hole's candidates that hit a target pitch class
//! 3. render each candidate and mark the ones on the root
//! 4. group by MIDI pitch, so different holes sounding the same note become
//!    alternatives of one group
//! 5. rank alternatives (technique, then hole, then text) and order groups
//!    from low to high

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use super::candidate::{enumerate_candidates, Technique};
use super::notation::{format_tab, OverbendNotation};
use crate::models::note::normalize_pc;
use crate::models::richter::RICHTER_C_LAYOUT;
use crate::models::scale::ScaleSelection;
use crate::transposition::transpose_layout;

/// One rendered fingering
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabToken {
    pub tab: String,
    pub pc: u8,
    pub midi: i64,
    pub is_root: bool,
    pub hole: u8,
    pub technique: Technique,
}

/// All fingerings of one sounding pitch; `options[0]` is the default
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabGroup {
    pub pc: u8,
    pub midi: i64,
    pub is_root: bool,
    pub options: Vec<TabToken>,
}

impl TabGroup {
    pub fn default_option(&self) -> Option<&TabToken> {
        self.options.first()
    }

    pub fn has_alternatives(&self) -> bool {
        self.options.len() > 1
    }
}

/// Tabs for every note of a scale. An unknown scale id gives no groups.
pub fn build_tabs_for_scale(
    selection: &ScaleSelection,
    harmonica_pc: i32,
    notation: OverbendNotation,
) -> Vec<TabGroup> {
    let scale_pcs = selection.pitch_classes();
    if scale_pcs.is_empty() {
        log::debug!("No scale definition for '{}', returning no tabs", selection.scale_id);
        return Vec::new();
    }
    build_tabs_for_pc_set(&scale_pcs, selection.root_pc, harmonica_pc, notation)
}

/// Tabs for an arbitrary pitch-class set (chords, arpeggios)
pub fn build_tabs_for_pc_set(
    pcs: &BTreeSet<u8>,
    root_pc: i32,
    harmonica_pc: i32,
    notation: OverbendNotation,
) -> Vec<TabGroup> {
    let root = normalize_pc(root_pc);
    let layout = transpose_layout(&RICHTER_C_LAYOUT, harmonica_pc);

    let mut grouped: BTreeMap<i64, Vec<TabToken>> = BTreeMap::new();
    for hole in &layout {
        for candidate in enumerate_candidates(hole, pcs) {
            let token = TabToken {
                tab: format_tab(&candidate, notation),
                pc: candidate.pc,
                midi: candidate.midi,
                is_root: candidate.pc == root,
                hole: candidate.hole,
                technique: candidate.technique,
            };
            grouped.entry(token.midi).or_insert_with(Vec::new).push(token);
        }
    }

    let groups: Vec<TabGroup> = grouped
        .into_iter()
        .map(|(midi, mut options)| {
            options.sort_by(|a, b| {
                a.technique
                    .rank()
                    .cmp(&b.technique.rank())
                    .then(a.hole.cmp(&b.hole))
                    .then_with(|| a.tab.cmp(&b.tab))
            });
            let pc = options.first().map(|token| token.pc).unwrap_or(root);
            TabGroup {
                pc,
                midi,
                is_root: pc == root,
                options,
            }
        })
        .collect();

    log::trace!(
        "Built {} tab groups for {} pitch classes on harmonica pc {}",
        groups.len(),
        pcs.len(),
        harmonica_pc
    );

    groups
}

/// Default fingering of each group, space separated
pub fn format_tab_line(groups: &[TabGroup]) -> String {
    groups
        .iter()
        .filter_map(|group| group.default_option())
        .map(|token| token.tab.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
