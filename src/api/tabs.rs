//! Tab and chord operations
//!
//! Thin wrappers: decode the JS arguments, call the engine, serialize the
//! result. All musical logic lives in `crate::tabs` and `crate::arpeggios`.

use std::collections::BTreeSet;
use wasm_bindgen::prelude::*;

use super::helpers::{deserialize, parse_arpeggio_kinds, parse_notation, serialize};
use crate::arpeggios::build_arpeggio_sections;
use crate::models::note::normalize_pc;
use crate::models::scale::ScaleSelection;
use crate::tabs::{build_tabs_for_pc_set, build_tabs_for_scale};
use crate::wasm_log;

/// Tab groups for a scale on a harmonica
///
/// `selection` is `{ root_pc, scale_id }`; `notation` is "apostrophe" or "degree".
#[wasm_bindgen(js_name = buildTabsForScale)]
pub fn build_tabs_for_scale_js(
    selection: JsValue,
    harmonica_pc: i32,
    notation: &str,
) -> Result<JsValue, JsValue> {
    let selection: ScaleSelection = deserialize(selection, "Failed to deserialize scale selection")?;
    let notation = parse_notation(notation)?;

    let groups = build_tabs_for_scale(&selection, harmonica_pc, notation);
    wasm_log!(
        "buildTabsForScale: root={} scale={} harp={} -> {} groups",
        selection.root_pc,
        selection.scale_id,
        harmonica_pc,
        groups.len()
    );

    serialize(&groups, "Failed to serialize tab groups")
}

/// Tab groups for an arbitrary pitch-class set (used to tab chords)
#[wasm_bindgen(js_name = buildTabsForPcSet)]
pub fn build_tabs_for_pc_set_js(
    pcs: Vec<i32>,
    root_pc: i32,
    harmonica_pc: i32,
    notation: &str,
) -> Result<JsValue, JsValue> {
    let notation = parse_notation(notation)?;
    let pcs: BTreeSet<u8> = pcs.into_iter().map(normalize_pc).collect();

    let groups = build_tabs_for_pc_set(&pcs, root_pc, harmonica_pc, notation);
    serialize(&groups, "Failed to serialize tab groups")
}

/// Chord sections for a scale
///
/// `kinds` holds any of "triads", "sevenths", "blues".
#[wasm_bindgen(js_name = buildArpeggioSections)]
pub fn build_arpeggio_sections_js(
    root_pc: i32,
    scale_id: &str,
    kinds: Vec<String>,
) -> Result<JsValue, JsValue> {
    let kinds = parse_arpeggio_kinds(&kinds);
    let sections = build_arpeggio_sections(root_pc, scale_id, &kinds);
    serialize(&sections, "Failed to serialize arpeggio sections")
}
