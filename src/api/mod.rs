//! Harmonica tabs WASM API
//!
//! JavaScript-facing functions. The presentation layer passes plain values
//! (pitch classes, ids, notation names) and renders what comes back.
//!
//! # Module Structure
//!
//! - `helpers`: console logging, serialization and input decoding
//! - `catalog`: note names, scale catalog, harmonica keys
//! - `tabs`: tab generation and chord derivation

pub mod helpers;
pub mod catalog;
pub mod tabs;

pub use catalog::{
    find_harmonica_key_js, format_scale_label_js, list_harmonica_keys, list_scales, note_to_pc_js,
    pc_to_note_js, scale_root_options_js,
};
pub use tabs::{build_arpeggio_sections_js, build_tabs_for_pc_set_js, build_tabs_for_scale_js};
