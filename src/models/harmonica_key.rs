/// Harmonica keys offered to players, in the order they are usually sold
/// (circle of fifths through the sharp keys, then the flat keys).

use serde::Serialize;

use super::note::NoteName;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HarmonicaKey {
    pub label: NoteName,
    pub pc: u8,
    pub prefer_flats: bool,
}

const KEY_ORDER: [NoteName; 14] = [
    NoteName::C,
    NoteName::G,
    NoteName::D,
    NoteName::A,
    NoteName::E,
    NoteName::B,
    NoteName::Fs,
    NoteName::Cs,
    NoteName::F,
    NoteName::Bb,
    NoteName::Eb,
    NoteName::Ab,
    NoteName::Db,
    NoteName::Gb,
];

fn prefers_flats(label: NoteName) -> bool {
    matches!(
        label,
        NoteName::F | NoteName::Bb | NoteName::Eb | NoteName::Ab | NoteName::Db | NoteName::Gb
    )
}

impl HarmonicaKey {
    pub fn new(label: NoteName) -> Self {
        Self {
            label,
            pc: label.pitch_class(),
            prefer_flats: prefers_flats(label),
        }
    }
}

pub fn harmonica_keys() -> Vec<HarmonicaKey> {
    KEY_ORDER.iter().map(|&label| HarmonicaKey::new(label)).collect()
}

pub fn find_harmonica_key(label: NoteName) -> Option<HarmonicaKey> {
    KEY_ORDER
        .iter()
        .find(|&&key| key == label)
        .map(|&key| HarmonicaKey::new(key))
}
