//! WASM API test
//!
//! Exercises the JavaScript-facing functions in a browser. Native builds
//! skip this file; the engine itself is covered by the other tests.

#![cfg(target_arch = "wasm32")]

use harmonica_tabs_wasm::api::*;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_note_to_pc() {
    assert_eq!(note_to_pc_js("C#").unwrap(), 1);
    assert_eq!(note_to_pc_js("Db").unwrap(), 1);
    assert!(note_to_pc_js("H").is_err());
}

#[wasm_bindgen_test]
fn test_pc_to_note() {
    assert_eq!(pc_to_note_js(10, true), "Bb");
    assert_eq!(pc_to_note_js(-2, false), "A#");
}

#[wasm_bindgen_test]
fn test_build_tabs_for_scale() {
    let selection = serde_wasm_bindgen::to_value(&harmonica_tabs_wasm::ScaleSelection::new(0, "major")).unwrap();
    let result = build_tabs_for_scale_js(selection, 0, "apostrophe").unwrap();
    let array = js_sys::Array::from(&result);
    assert_eq!(array.length(), 22);
}

#[wasm_bindgen_test]
fn test_bad_notation_is_rejected() {
    let selection = serde_wasm_bindgen::to_value(&harmonica_tabs_wasm::ScaleSelection::new(0, "major")).unwrap();
    assert!(build_tabs_for_scale_js(selection, 0, "circle").is_err());
    assert!(build_tabs_for_scale_js(JsValue::from_str("not a selection"), 0, "degree").is_err());
}

#[wasm_bindgen_test]
fn test_build_tabs_for_pc_set() {
    let result = build_tabs_for_pc_set_js(vec![0, 4, 7], 0, 0, "degree").unwrap();
    assert_eq!(js_sys::Array::from(&result).length(), 10);
}

#[wasm_bindgen_test]
fn test_build_arpeggio_sections() {
    let kinds = vec!["blues".to_string(), "ninths".to_string(), "triads".to_string()];
    let result = build_arpeggio_sections_js(0, "major", kinds).unwrap();
    assert_eq!(js_sys::Array::from(&result).length(), 2);
}

#[wasm_bindgen_test]
fn test_catalogs() {
    assert_eq!(js_sys::Array::from(&list_scales().unwrap()).length(), 6);
    assert_eq!(js_sys::Array::from(&list_harmonica_keys().unwrap()).length(), 14);
    assert_eq!(scale_root_options_js(true).length(), 12);
    assert_eq!(format_scale_label_js(10, "mixolydian", true), "Bb Mixolydian");
}

#[wasm_bindgen_test]
fn test_find_harmonica_key() {
    assert!(find_harmonica_key_js("Bb").unwrap().is_object());
    assert!(find_harmonica_key_js("A#").unwrap().is_undefined());
    assert!(find_harmonica_key_js("H").is_err());
}
