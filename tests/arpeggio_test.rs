// Chord derivation and tabbing chords through the pitch-class-set engine

use harmonica_tabs_wasm::models::SCALE_DEFINITIONS;
use harmonica_tabs_wasm::tabs::format_tab_line;
use harmonica_tabs_wasm::{
    build_arpeggio_sections, build_tabs_for_pc_set, ArpeggioKind, OverbendNotation,
};

#[test]
fn test_sevenths_on_six_note_scale() {
    let sections = build_arpeggio_sections(0, "blues_minor", &[ArpeggioKind::Sevenths]);
    assert_eq!(sections.len(), 1);
    assert!(sections[0].items.is_empty());
    let note = sections[0].empty_note.as_deref().unwrap_or_default();
    assert!(!note.is_empty());
}

#[test]
fn test_blues_roots_independent_of_scale() {
    for scale in SCALE_DEFINITIONS {
        let sections = build_arpeggio_sections(0, scale.id, &[ArpeggioKind::Blues]);
        let roots: Vec<u8> = sections[0].items.iter().map(|item| item.root_pc).collect();
        assert_eq!(roots, vec![0, 5, 7], "blues roots changed under {}", scale.id);
    }
}

#[test]
fn test_all_sections_for_every_scale() {
    for scale in SCALE_DEFINITIONS {
        for root in 0..12 {
            let sections = build_arpeggio_sections(root, scale.id, &ArpeggioKind::ALL);
            assert_eq!(sections.len(), 3);
            assert_eq!(sections[0].items.len(), scale.intervals.len());
            for item in &sections[0].items {
                assert_eq!(item.ordered_pcs.len(), 3);
                assert_eq!(item.ordered_pcs[0], item.root_pc);
                assert!(item.ordered_pcs.iter().all(|pc| item.pcs.contains(pc)));
            }
            for item in &sections[1].items {
                assert_eq!(item.ordered_pcs.len(), 4);
            }
            assert_eq!(sections[2].items.len(), 3);
        }
    }
}

#[test]
fn test_diatonic_chords_stay_in_scale() {
    for scale in SCALE_DEFINITIONS {
        let scale_pcs = scale.pitch_classes(4);
        let sections = build_arpeggio_sections(
            4,
            scale.id,
            &[ArpeggioKind::Triads, ArpeggioKind::Sevenths],
        );
        for section in &sections {
            for item in &section.items {
                assert!(item.pcs.is_subset(&scale_pcs), "{} leaves {}", item.label, scale.id);
            }
        }
    }
}

#[test]
fn test_tab_c_major_triad_on_c_harp() {
    let sections = build_arpeggio_sections(0, "major", &[ArpeggioKind::Triads]);
    let tonic = &sections[0].items[0];
    assert_eq!(tonic.label, "I maj");

    let groups = build_tabs_for_pc_set(&tonic.pcs, tonic.root_pc as i32, 0, OverbendNotation::Apostrophe);
    assert_eq!(format_tab_line(&groups), "1 2 -2 4 5 6 7 8 9 10");
    let roots: Vec<&str> = groups
        .iter()
        .filter(|g| g.is_root)
        .map(|g| g.options[0].tab.as_str())
        .collect();
    assert_eq!(roots, vec!["1", "4", "7", "10"]);
}

#[test]
fn test_tab_g7_on_c_harp() {
    let sections = build_arpeggio_sections(0, "major", &[ArpeggioKind::Sevenths]);
    let dominant = &sections[0].items[4];
    assert_eq!(dominant.label, "V 7");

    let groups = build_tabs_for_pc_set(&dominant.pcs, dominant.root_pc as i32, 0, OverbendNotation::Apostrophe);
    assert_eq!(format_tab_line(&groups), "-1 -2'' -2 -3 -4 -5 6 -7 -8 -9 9 10'");
    assert!(groups.iter().filter(|g| g.is_root).all(|g| g.pc == 7));
}
