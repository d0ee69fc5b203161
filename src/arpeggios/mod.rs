//! Diatonic chord (arpeggio) derivation
//!
//! Chords are built by stacking every other scale degree on each degree of
//! the scale. Stacking wraps around the scale, so on scales shorter than
//! seven notes the upper members may land on unexpected degrees; the
//! resulting chords are reported as they are, classified as "other" when
//! they match no standard quality.
//!
//! The three blues dominants (I7, IV7, V7) do not depend on the scale at
//! all and may contain notes outside it.
//!
//! Nothing here knows about the harmonica. Callers tab a chord by passing
//! its `pcs` to [`build_tabs_for_pc_set`](crate::tabs::build_tabs_for_pc_set).

pub mod quality;

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::TabsError;
use crate::models::note::normalize_pc;
use crate::models::scale::find_scale;
use quality::{roman_numeral, SeventhQuality, TriadQuality};

const SEVENTH_MIN_DEGREES: usize = 7;
const DOMINANT_SEVENTH: [u8; 4] = [0, 4, 7, 10];
const BLUES_ROOTS: [(&str, i32); 3] = [("I7", 0), ("IV7", 5), ("V7", 7)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArpeggioKind {
    Triads,
    Sevenths,
    Blues,
}

impl ArpeggioKind {
    /// Section order, whatever order the kinds were requested in
    pub const ALL: [ArpeggioKind; 3] = [ArpeggioKind::Triads, ArpeggioKind::Sevenths, ArpeggioKind::Blues];

    pub fn as_str(&self) -> &'static str {
        match self {
            ArpeggioKind::Triads => "triads",
            ArpeggioKind::Sevenths => "sevenths",
            ArpeggioKind::Blues => "blues",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ArpeggioKind::Triads => "Triads",
            ArpeggioKind::Sevenths => "7th Chords",
            ArpeggioKind::Blues => "Common Blues Chords",
        }
    }
}

impl fmt::Display for ArpeggioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ArpeggioKind {
    type Err = TabsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "triads" => Ok(ArpeggioKind::Triads),
            "sevenths" => Ok(ArpeggioKind::Sevenths),
            "blues" => Ok(ArpeggioKind::Blues),
            _ => Err(TabsError::UnknownArpeggioKind(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArpeggioSpec {
    pub id: String,
    pub label: String,
    pub root_pc: u8,
    /// Members for membership tests
    pub pcs: BTreeSet<u8>,
    /// Members in stacking order, root first
    pub ordered_pcs: Vec<u8>,
    pub kind: ArpeggioKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArpeggioSection {
    pub id: ArpeggioKind,
    pub title: String,
    /// Shown above the items
    pub note: Option<String>,
    /// Shown instead of the items when there are none
    pub empty_note: Option<String>,
    pub items: Vec<ArpeggioSpec>,
}

impl ArpeggioSpec {
    fn new(id: String, label: String, ordered_pcs: Vec<u8>, kind: ArpeggioKind) -> Self {
        let root_pc = ordered_pcs.first().copied().unwrap_or_default();
        Self {
            id,
            label,
            root_pc,
            pcs: ordered_pcs.iter().copied().collect(),
            ordered_pcs,
            kind,
        }
    }

    /// Distances of each member above the chord root
    pub fn relative_intervals(&self) -> Vec<u8> {
        self.ordered_pcs
            .iter()
            .map(|&pc| normalize_pc(pc as i32 - self.root_pc as i32))
            .collect()
    }
}

/// Pitch classes of the chord on `degree`, taking `width` notes a third apart
fn stack_thirds(root_pc: i32, intervals: &[u8], degree: usize, width: usize) -> Vec<u8> {
    let root = normalize_pc(root_pc) as i32;
    let count = intervals.len();
    (0..width)
        .map(|step| intervals[(degree + 2 * step) % count])
        .map(|interval| normalize_pc(root + interval as i32))
        .collect()
}

fn build_diatonic_triads(root_pc: i32, intervals: &[u8]) -> Vec<ArpeggioSpec> {
    (0..intervals.len())
        .map(|degree| {
            let ordered_pcs = stack_thirds(root_pc, intervals, degree, 3);
            let spec = ArpeggioSpec::new(
                format!("triad:{}", degree),
                String::new(),
                ordered_pcs,
                ArpeggioKind::Triads,
            );
            let relative = spec.relative_intervals();
            let quality = TriadQuality::classify(relative[1], relative[2]);
            ArpeggioSpec {
                label: format!("{} {}", roman_numeral(degree + 1), quality.as_str()),
                ..spec
            }
        })
        .collect()
}

fn build_diatonic_sevenths(root_pc: i32, intervals: &[u8]) -> Vec<ArpeggioSpec> {
    if intervals.len() < SEVENTH_MIN_DEGREES {
        return Vec::new();
    }
    (0..intervals.len())
        .map(|degree| {
            let ordered_pcs = stack_thirds(root_pc, intervals, degree, 4);
            let spec = ArpeggioSpec::new(
                format!("seventh:{}", degree),
                String::new(),
                ordered_pcs,
                ArpeggioKind::Sevenths,
            );
            let relative = spec.relative_intervals();
            let quality = SeventhQuality::classify(relative[1], relative[2], relative[3]);
            ArpeggioSpec {
                label: format!("{} {}", roman_numeral(degree + 1), quality.as_str()),
                ..spec
            }
        })
        .collect()
}

fn build_common_blues_chords(root_pc: i32) -> Vec<ArpeggioSpec> {
    let root = normalize_pc(root_pc) as i32;
    BLUES_ROOTS
        .iter()
        .map(|&(label, offset)| {
            let chord_root = root + offset;
            let ordered_pcs = DOMINANT_SEVENTH
                .iter()
                .map(|&interval| normalize_pc(chord_root + interval as i32))
                .collect();
            ArpeggioSpec::new(
                format!("blues:{}", label),
                label.to_string(),
                ordered_pcs,
                ArpeggioKind::Blues,
            )
        })
        .collect()
}

/// One section per requested kind, always in triads/sevenths/blues order.
/// An unknown scale id yields no sections.
pub fn build_arpeggio_sections(
    root_pc: i32,
    scale_id: &str,
    requested: &[ArpeggioKind],
) -> Vec<ArpeggioSection> {
    let Some(scale) = find_scale(scale_id) else {
        log::debug!("No scale definition for '{}', returning no arpeggios", scale_id);
        return Vec::new();
    };

    ArpeggioKind::ALL
        .iter()
        .filter(|kind| requested.contains(*kind))
        .map(|&kind| match kind {
            ArpeggioKind::Triads => ArpeggioSection {
                id: kind,
                title: kind.title().to_string(),
                note: None,
                empty_note: None,
                items: build_diatonic_triads(root_pc, scale.intervals),
            },
            ArpeggioKind::Sevenths => {
                let empty_note = if scale.degree_count() < SEVENTH_MIN_DEGREES {
                    "Needs a 7-note scale."
                } else {
                    "None"
                };
                ArpeggioSection {
                    id: kind,
                    title: kind.title().to_string(),
                    note: None,
                    empty_note: Some(empty_note.to_string()),
                    items: build_diatonic_sevenths(root_pc, scale.intervals),
                }
            }
            ArpeggioKind::Blues => ArpeggioSection {
                id: kind,
                title: kind.title().to_string(),
                note: Some("May include notes outside the selected scale.".to_string()),
                empty_note: None,
                items: build_common_blues_chords(root_pc),
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(section: &ArpeggioSection) -> Vec<&str> {
        section.items.iter().map(|item| item.label.as_str()).collect()
    }

    #[test]
    fn test_major_triads() {
        let sections = build_arpeggio_sections(0, "major", &[ArpeggioKind::Triads]);
        assert_eq!(sections.len(), 1);
        assert_eq!(
            labels(&sections[0]),
            vec!["I maj", "II min", "III min", "IV maj", "V maj", "VI min", "VII dim"]
        );
        let five = &sections[0].items[4];
        assert_eq!(five.id, "triad:4");
        assert_eq!(five.root_pc, 7);
        assert_eq!(five.ordered_pcs, vec![7, 11, 2]);
        assert_eq!(five.pcs, BTreeSet::from([2, 7, 11]));
    }

    #[test]
    fn test_harmonic_minor_has_augmented_third() {
        let sections = build_arpeggio_sections(9, "harmonic_minor", &[ArpeggioKind::Triads]);
        assert_eq!(sections[0].items[2].label, "III aug");
        // A harmonic minor V is E major
        assert_eq!(sections[0].items[4].ordered_pcs, vec![4, 8, 11]);
        assert_eq!(sections[0].items[4].label, "V maj");
    }

    #[test]
    fn test_major_sevenths() {
        let sections = build_arpeggio_sections(0, "major", &[ArpeggioKind::Sevenths]);
        assert_eq!(
            labels(&sections[0]),
            vec!["I maj7", "II min7", "III min7", "IV maj7", "V 7", "VI min7", "VII m7b5"]
        );
        assert_eq!(sections[0].items[4].ordered_pcs, vec![7, 11, 2, 5]);
        assert_eq!(sections[0].empty_note.as_deref(), Some("None"));
    }

    #[test]
    fn test_harmonic_minor_diminished_seventh() {
        let sections = build_arpeggio_sections(0, "harmonic_minor", &[ArpeggioKind::Sevenths]);
        assert_eq!(sections[0].items[6].label, "VII dim7");
    }

    #[test]
    fn test_sevenths_need_seven_degrees() {
        let sections = build_arpeggio_sections(0, "blues_minor", &[ArpeggioKind::Sevenths]);
        assert_eq!(sections.len(), 1);
        assert!(sections[0].items.is_empty());
        assert_eq!(sections[0].empty_note.as_deref(), Some("Needs a 7-note scale."));
    }

    #[test]
    fn test_short_scale_triads_wrap() {
        // blues minor on C: C Eb F Gb G Bb; degree 5 stacks Bb, Eb, Gb
        let sections = build_arpeggio_sections(0, "blues_minor", &[ArpeggioKind::Triads]);
        let items = &sections[0].items;
        assert_eq!(items.len(), 6);
        assert_eq!(items[0].ordered_pcs, vec![0, 5, 7]);
        assert_eq!(items[0].label, "I other");
        assert_eq!(items[5].ordered_pcs, vec![10, 3, 6]);
        assert_eq!(items[5].label, "VI other");
    }

    #[test]
    fn test_blues_chords_ignore_scale() {
        for scale_id in ["major", "blues_minor", "dorian"] {
            let sections = build_arpeggio_sections(0, scale_id, &[ArpeggioKind::Blues]);
            let items = &sections[0].items;
            assert_eq!(items.len(), 3);
            let roots: Vec<u8> = items.iter().map(|item| item.root_pc).collect();
            assert_eq!(roots, vec![0, 5, 7]);
            assert_eq!(labels(&sections[0]), vec!["I7", "IV7", "V7"]);
            assert_eq!(items[1].ordered_pcs, vec![5, 9, 0, 3]);
            assert!(sections[0].note.is_some());
        }
    }

    #[test]
    fn test_section_order_is_fixed() {
        let sections = build_arpeggio_sections(
            2,
            "dorian",
            &[ArpeggioKind::Blues, ArpeggioKind::Triads, ArpeggioKind::Blues],
        );
        let ids: Vec<ArpeggioKind> = sections.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![ArpeggioKind::Triads, ArpeggioKind::Blues]);
    }

    #[test]
    fn test_any_root_reduces_to_its_pitch_class() {
        assert_eq!(
            build_arpeggio_sections(i32::MAX, "major", &ArpeggioKind::ALL),
            build_arpeggio_sections(7, "major", &ArpeggioKind::ALL)
        );
        assert_eq!(
            build_arpeggio_sections(i32::MIN, "blues_minor", &ArpeggioKind::ALL),
            build_arpeggio_sections(4, "blues_minor", &ArpeggioKind::ALL)
        );
    }

    #[test]
    fn test_unknown_scale_and_empty_request() {
        assert!(build_arpeggio_sections(0, "nope", &ArpeggioKind::ALL).is_empty());
        assert!(build_arpeggio_sections(0, "major", &[]).is_empty());
    }

    #[test]
    fn test_parse_kind() {
        assert_eq!("sevenths".parse::<ArpeggioKind>(), Ok(ArpeggioKind::Sevenths));
        assert!("ninths".parse::<ArpeggioKind>().is_err());
        let json = serde_json::to_string(&ArpeggioKind::Blues).unwrap();
        assert_eq!(json, "\"blues\"");
    }
}
