//! Error types for decoding caller input at the WASM boundary
//!
//! The tab engine and chord deriver are total functions and never fail.
//! Errors only arise when a string or JS value handed in by the
//! presentation layer does not name anything in the closed input set.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TabsError {
    /// Note label outside the 17 supported spellings
    #[error("Invalid note name: '{0}'. Expected one of: C, C#, Db, D, D#, Eb, E, F, F#, Gb, G, G#, Ab, A, A#, Bb, B")]
    UnknownNote(String),

    #[error("Invalid overbend notation: '{0}' (expected 'apostrophe' or 'degree')")]
    UnknownNotation(String),

    #[error("Invalid arpeggio kind: '{0}' (expected 'triads', 'sevenths' or 'blues')")]
    UnknownArpeggioKind(String),

    /// JS value could not be converted to or from a Rust value
    #[error("Serialization failed: {0}")]
    Serialization(String),
}
