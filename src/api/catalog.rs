//! Note names and static catalogs
//!
//! Everything the presentation layer needs to fill its pickers.

use js_sys::Array;
use wasm_bindgen::prelude::*;

use super::helpers::{serialize, to_js_error};
use crate::models::harmonica_key::{find_harmonica_key, harmonica_keys};
use crate::models::note::{note_to_pc, pc_to_note, NoteName};
use crate::models::scale::{format_scale_label, scale_root_options, SCALE_DEFINITIONS};

/// Pitch class (0-11) of a note name such as "C#" or "Bb"
#[wasm_bindgen(js_name = noteToPc)]
pub fn note_to_pc_js(name: &str) -> Result<u8, JsValue> {
    let note = name.parse::<NoteName>().map_err(to_js_error)?;
    Ok(note_to_pc(note))
}

#[wasm_bindgen(js_name = pcToNote)]
pub fn pc_to_note_js(pc: i32, prefer_flats: bool) -> String {
    pc_to_note(pc, prefer_flats).to_string()
}

#[wasm_bindgen(js_name = listScales)]
pub fn list_scales() -> Result<JsValue, JsValue> {
    serialize(&SCALE_DEFINITIONS, "Failed to serialize scale catalog")
}

#[wasm_bindgen(js_name = listHarmonicaKeys)]
pub fn list_harmonica_keys() -> Result<JsValue, JsValue> {
    serialize(&harmonica_keys(), "Failed to serialize harmonica keys")
}

/// Catalog entry for a key label such as "Bb"; undefined when no harmonica is
/// sold in that spelling
#[wasm_bindgen(js_name = findHarmonicaKey)]
pub fn find_harmonica_key_js(label: &str) -> Result<JsValue, JsValue> {
    let note = label.parse::<NoteName>().map_err(to_js_error)?;
    serialize(&find_harmonica_key(note), "Failed to serialize harmonica key")
}

#[wasm_bindgen(js_name = formatScaleLabel)]
pub fn format_scale_label_js(root_pc: i32, scale_id: &str, prefer_flats: bool) -> String {
    format_scale_label(root_pc, scale_id, prefer_flats)
}

/// Root note names C..B for the scale picker
#[wasm_bindgen(js_name = scaleRootOptions)]
pub fn scale_root_options_js(prefer_flats: bool) -> Array {
    scale_root_options(prefer_flats)
        .into_iter()
        .map(|note| JsValue::from_str(note.as_str()))
        .collect()
}
