//! Scale catalog
//!
//! Scales are ascending semitone offsets from a root. The catalog is a
//! static table; lookups are linear and an unknown id simply finds nothing.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::note::{normalize_pc, pc_to_note, NoteName};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScaleDefinition {
    pub id: &'static str,
    pub name: &'static str,
    /// Starts at 0, strictly ascending
    pub intervals: &'static [u8],
}

/// Root + scale id chosen by the player, independent of harmonica key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleSelection {
    pub root_pc: i32,
    pub scale_id: String,
}

pub const SCALE_DEFINITIONS: &[ScaleDefinition] = &[
    ScaleDefinition { id: "major", name: "Major", intervals: &[0, 2, 4, 5, 7, 9, 11] },
    ScaleDefinition { id: "natural_minor", name: "Natural Minor", intervals: &[0, 2, 3, 5, 7, 8, 10] },
    ScaleDefinition { id: "harmonic_minor", name: "Harmonic Minor", intervals: &[0, 2, 3, 5, 7, 8, 11] },
    ScaleDefinition { id: "dorian", name: "Dorian", intervals: &[0, 2, 3, 5, 7, 9, 10] },
    ScaleDefinition { id: "mixolydian", name: "Mixolydian", intervals: &[0, 2, 4, 5, 7, 9, 10] },
    ScaleDefinition { id: "blues_minor", name: "Blues Minor", intervals: &[0, 3, 5, 6, 7, 10] },
];

pub fn find_scale(scale_id: &str) -> Option<&'static ScaleDefinition> {
    SCALE_DEFINITIONS.iter().find(|scale| scale.id == scale_id)
}

impl ScaleDefinition {
    /// Pitch classes of this scale built on `root_pc`
    pub fn pitch_classes(&self, root_pc: i32) -> BTreeSet<u8> {
        let root = normalize_pc(root_pc) as i32;
        self.intervals
            .iter()
            .map(|&interval| normalize_pc(root + interval as i32))
            .collect()
    }

    pub fn degree_count(&self) -> usize {
        self.intervals.len()
    }
}

impl ScaleSelection {
    pub fn new(root_pc: i32, scale_id: impl Into<String>) -> Self {
        Self {
            root_pc,
            scale_id: scale_id.into(),
        }
    }

    /// Target pitch classes; empty for an unknown scale id
    pub fn pitch_classes(&self) -> BTreeSet<u8> {
        find_scale(&self.scale_id)
            .map(|scale| scale.pitch_classes(self.root_pc))
            .unwrap_or_default()
    }
}

/// Heading shown above a scale's tabs, e.g. "Bb Mixolydian"
pub fn format_scale_label(root_pc: i32, scale_id: &str, prefer_flats: bool) -> String {
    let root_name = pc_to_note(root_pc, prefer_flats);
    let scale_name = find_scale(scale_id).map(|scale| scale.name).unwrap_or("Scale");
    format!("{} {}", root_name, scale_name)
}

/// Twelve root choices in chromatic order from C
pub fn scale_root_options(prefer_flats: bool) -> Vec<NoteName> {
    (0..12).map(|pc| pc_to_note(pc, prefer_flats)).collect()
}
