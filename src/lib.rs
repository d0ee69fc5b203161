//! Harmonica Tabs WASM Module
//!
//! Converts scales and pitch-class sets into tablature for a 10-hole
//! Richter-tuned diatonic harmonica, and derives the diatonic chords a
//! scale implies. The presentation layer calls the functions in [`api`];
//! native callers use [`tabs`] and [`arpeggios`] directly.

pub mod error;
pub mod models;
pub mod transposition;
pub mod tabs;
pub mod arpeggios;
pub mod api;

// Re-export commonly used types
pub use error::TabsError;
pub use models::*;
pub use tabs::{build_tabs_for_pc_set, build_tabs_for_scale, OverbendNotation, TabGroup, TabToken};
pub use arpeggios::{build_arpeggio_sections, ArpeggioKind, ArpeggioSection, ArpeggioSpec};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    {
        if let Err(e) = console_log::init_with_level(log::Level::Debug) {
            let msg = format!("[WASM] logger already initialized: {}", e);
            web_sys::console::warn_1(&JsValue::from_str(&msg));
        }
    }

    log::info!("Harmonica tabs WASM module initialized");
}
