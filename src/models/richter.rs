//! Richter-tuned 10-hole diatonic harmonica layout
//!
//! `RICHTER_C_LAYOUT` is the canonical table for a harmonica in C. Every
//! other key is derived from it with
//! [`transpose_layout`](crate::transposition::transpose_layout).
//!
//! Each playable pitch is stored twice: as a pitch class (for scale
//! membership) and as a MIDI note number (to keep octave register).
//! Holes 1-6 list an overblow and holes 7-10 list an overdraw; whether a
//! hole's overbend is actually offered is decided by the tab engine.

use lazy_static::lazy_static;
use serde::Serialize;

/// Number of holes on a standard diatonic harmonica
pub const HOLE_COUNT: u8 = 10;

/// One sounding pitch: pitch class plus absolute (MIDI) pitch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ReedPitch {
    pub pc: u8,
    pub midi: i64,
}

impl ReedPitch {
    pub const fn new(pc: u8, midi: i64) -> Self {
        Self { pc, midi }
    }
}

/// Everything one hole can sound
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HoleMapping {
    pub hole: u8,
    pub blow: ReedPitch,
    pub draw: ReedPitch,
    /// Shallowest bend first
    pub blow_bends: Vec<ReedPitch>,
    /// Shallowest bend first
    pub draw_bends: Vec<ReedPitch>,
    pub overblow: Option<ReedPitch>,
    pub overdraw: Option<ReedPitch>,
}

const fn p(pc: u8, midi: i64) -> ReedPitch {
    ReedPitch::new(pc, midi)
}

lazy_static! {
    /// Standard Richter layout for a C harmonica (hole 1 blow = middle C)
    pub static ref RICHTER_C_LAYOUT: Vec<HoleMapping> = vec![
        HoleMapping {
            hole: 1,
            blow: p(0, 60),
            draw: p(2, 62),
            blow_bends: vec![],
            draw_bends: vec![p(1, 61)],
            overblow: Some(p(3, 63)),
            overdraw: None,
        },
        HoleMapping {
            hole: 2,
            blow: p(4, 64),
            draw: p(7, 67),
            blow_bends: vec![],
            draw_bends: vec![p(6, 66), p(5, 65)],
            overblow: Some(p(8, 68)),
            overdraw: None,
        },
        HoleMapping {
            hole: 3,
            blow: p(7, 67),
            draw: p(11, 71),
            blow_bends: vec![],
            draw_bends: vec![p(10, 70), p(9, 69), p(8, 68)],
            overblow: Some(p(0, 72)),
            overdraw: None,
        },
        HoleMapping {
            hole: 4,
            blow: p(0, 72),
            draw: p(2, 74),
            blow_bends: vec![],
            draw_bends: vec![p(1, 73)],
            overblow: Some(p(3, 75)),
            overdraw: None,
        },
        HoleMapping {
            hole: 5,
            blow: p(4, 76),
            draw: p(5, 77),
            blow_bends: vec![],
            draw_bends: vec![p(4, 76)],
            overblow: Some(p(6, 78)),
            overdraw: None,
        },
        HoleMapping {
            hole: 6,
            blow: p(7, 79),
            draw: p(9, 81),
            blow_bends: vec![],
            draw_bends: vec![p(8, 80)],
            overblow: Some(p(10, 82)),
            overdraw: None,
        },
        HoleMapping {
            hole: 7,
            blow: p(0, 84),
            draw: p(11, 83),
            blow_bends: vec![p(11, 83)],
            draw_bends: vec![],
            overblow: None,
            overdraw: Some(p(1, 85)),
        },
        HoleMapping {
            hole: 8,
            blow: p(4, 88),
            draw: p(2, 86),
            blow_bends: vec![p(3, 87), p(2, 86)],
            draw_bends: vec![],
            overblow: None,
            overdraw: Some(p(5, 89)),
        },
        HoleMapping {
            hole: 9,
            blow: p(7, 91),
            draw: p(5, 89),
            blow_bends: vec![p(6, 90), p(5, 89)],
            draw_bends: vec![],
            overblow: None,
            overdraw: Some(p(8, 92)),
        },
        HoleMapping {
            hole: 10,
            blow: p(0, 96),
            draw: p(9, 93),
            blow_bends: vec![p(11, 95), p(10, 94), p(9, 93)],
            draw_bends: vec![],
            overblow: None,
            overdraw: Some(p(1, 97)),
        },
    ];
}
