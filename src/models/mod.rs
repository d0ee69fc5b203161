//! Models module for harmonica tablature
//!
//! Pitch-class arithmetic, the Richter hole layout, the harmonica key
//! catalog and the scale catalog.

pub mod note;
pub mod richter;
pub mod harmonica_key;
pub mod scale;

// Re-export commonly used types
pub use note::{normalize_pc, note_to_pc, pc_to_note, NoteName};
pub use richter::{HoleMapping, ReedPitch, RICHTER_C_LAYOUT};
pub use harmonica_key::HarmonicaKey;
pub use scale::{find_scale, ScaleDefinition, ScaleSelection, SCALE_DEFINITIONS};
