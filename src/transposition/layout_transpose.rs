/// Transposition of a whole harmonica layout
///
/// Moving from the C harmonica to any other key shifts every reed by the
/// same number of semitones. Pitch classes wrap around 0..=11, MIDI
/// numbers do not, so the octave register survives. Any `i32` offset is
/// accepted; MIDI numbers are `i64` so the shift never overflows.

use crate::models::note::normalize_pc;
use crate::models::richter::{HoleMapping, ReedPitch};

fn shift(pitch: ReedPitch, semitones: i32) -> ReedPitch {
    ReedPitch {
        pc: normalize_pc(pitch.pc as i32 + normalize_pc(semitones) as i32),
        midi: pitch.midi + i64::from(semitones),
    }
}

fn shift_all(pitches: &[ReedPitch], semitones: i32) -> Vec<ReedPitch> {
    pitches.iter().map(|&pitch| shift(pitch, semitones)).collect()
}

/// Return a copy of `layout` with every pitch moved by `semitones`
pub fn transpose_layout(layout: &[HoleMapping], semitones: i32) -> Vec<HoleMapping> {
    layout
        .iter()
        .map(|hole| HoleMapping {
            hole: hole.hole,
            blow: shift(hole.blow, semitones),
            draw: shift(hole.draw, semitones),
            blow_bends: shift_all(&hole.blow_bends, semitones),
            draw_bends: shift_all(&hole.draw_bends, semitones),
            overblow: hole.overblow.map(|pitch| shift(pitch, semitones)),
            overdraw: hole.overdraw.map(|pitch| shift(pitch, semitones)),
        })
        .collect()
}
