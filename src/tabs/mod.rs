//! Harmonica tablature generation
//!
//! - `candidate`: per-hole enumeration and the bend/overbend eligibility rules
//! - `notation`: rendering candidates as tab strings
//! - `engine`: grouping, ranking and the public build functions

pub mod candidate;
pub mod notation;
pub mod engine;

pub use candidate::{TabCandidate, Technique};
pub use notation::OverbendNotation;
pub use engine::{build_tabs_for_pc_set, build_tabs_for_scale, format_tab_line, TabGroup, TabToken};
