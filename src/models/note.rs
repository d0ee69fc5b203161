/// Note names and pitch-class arithmetic
///
/// A pitch class is an octave-independent note identity in 0..=11 with C = 0.
/// Note names are display labels: the 12 sharp spellings and the 5 flat
/// spellings map many-to-one onto pitch classes (C# and Db are both 1).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TabsError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoteName {
    C,
    #[serde(rename = "C#")]
    Cs,
    Db,
    D,
    #[serde(rename = "D#")]
    Ds,
    Eb,
    E,
    F,
    #[serde(rename = "F#")]
    Fs,
    Gb,
    G,
    #[serde(rename = "G#")]
    Gs,
    Ab,
    A,
    #[serde(rename = "A#")]
    As,
    Bb,
    B,
}

/// Sharp spellings indexed by pitch class
pub const SHARP_NOTES: [NoteName; 12] = [
    NoteName::C, NoteName::Cs, NoteName::D, NoteName::Ds, NoteName::E, NoteName::F,
    NoteName::Fs, NoteName::G, NoteName::Gs, NoteName::A, NoteName::As, NoteName::B,
];

/// Flat spellings indexed by pitch class
pub const FLAT_NOTES: [NoteName; 12] = [
    NoteName::C, NoteName::Db, NoteName::D, NoteName::Eb, NoteName::E, NoteName::F,
    NoteName::Gb, NoteName::G, NoteName::Ab, NoteName::A, NoteName::Bb, NoteName::B,
];

impl NoteName {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoteName::C => "C",
            NoteName::Cs => "C#",
            NoteName::Db => "Db",
            NoteName::D => "D",
            NoteName::Ds => "D#",
            NoteName::Eb => "Eb",
            NoteName::E => "E",
            NoteName::F => "F",
            NoteName::Fs => "F#",
            NoteName::Gb => "Gb",
            NoteName::G => "G",
            NoteName::Gs => "G#",
            NoteName::Ab => "Ab",
            NoteName::A => "A",
            NoteName::As => "A#",
            NoteName::Bb => "Bb",
            NoteName::B => "B",
        }
    }

    /// Pitch class (0-11) this spelling sounds
    pub fn pitch_class(&self) -> u8 {
        match self {
            NoteName::C => 0,
            NoteName::Cs | NoteName::Db => 1,
            NoteName::D => 2,
            NoteName::Ds | NoteName::Eb => 3,
            NoteName::E => 4,
            NoteName::F => 5,
            NoteName::Fs | NoteName::Gb => 6,
            NoteName::G => 7,
            NoteName::Gs | NoteName::Ab => 8,
            NoteName::A => 9,
            NoteName::As | NoteName::Bb => 10,
            NoteName::B => 11,
        }
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NoteName {
    type Err = TabsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Case-insensitive parsing
        match s.trim().to_uppercase().as_str() {
            "C" => Ok(NoteName::C),
            "C#" | "C♯" => Ok(NoteName::Cs),
            "DB" | "D♭" => Ok(NoteName::Db),
            "D" => Ok(NoteName::D),
            "D#" | "D♯" => Ok(NoteName::Ds),
            "EB" | "E♭" => Ok(NoteName::Eb),
            "E" => Ok(NoteName::E),
            "F" => Ok(NoteName::F),
            "F#" | "F♯" => Ok(NoteName::Fs),
            "GB" | "G♭" => Ok(NoteName::Gb),
            "G" => Ok(NoteName::G),
            "G#" | "G♯" => Ok(NoteName::Gs),
            "AB" | "A♭" => Ok(NoteName::Ab),
            "A" => Ok(NoteName::A),
            "A#" | "A♯" => Ok(NoteName::As),
            "BB" | "B♭" => Ok(NoteName::Bb),
            "B" => Ok(NoteName::B),
            _ => Err(TabsError::UnknownNote(s.to_string())),
        }
    }
}

/// Fold any integer onto 0..=11 (true modulo, negatives included)
pub fn normalize_pc(n: i32) -> u8 {
    n.rem_euclid(12) as u8
}

pub fn note_to_pc(note: NoteName) -> u8 {
    note.pitch_class()
}

/// Spell a pitch class, choosing flats or sharps for the five black keys
pub fn pc_to_note(pc: i32, prefer_flats: bool) -> NoteName {
    let index = normalize_pc(pc) as usize;
    if prefer_flats {
        FLAT_NOTES[index]
    } else {
        SHARP_NOTES[index]
    }
}
