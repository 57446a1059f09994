//! Disassembly tests: randomised salvage, previews, batches and valuation.

use gearforge::disassembly::{builtin_disassemble_rules, DisassembleRule, Disassembler};
use gearforge::items::catalog::Catalog;
use gearforge::items::types::{Equipment, Quality};
use rand::rngs::mock::StepRng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashMap;
use std::sync::Arc;

fn catalog() -> Arc<Catalog> {
    Arc::new(Catalog::builtin())
}

fn item(template_id: &str) -> Equipment {
    Catalog::builtin().create_equipment(template_id).unwrap()
}

// =========================================================================
// Randomised salvage
// =========================================================================

#[test]
fn test_forced_rolls_take_minimum_quantities() {
    let disassembler = Disassembler::with_builtin_rules(catalog());
    // Zero from the RNG passes every chance check and picks the lower bound.
    let mut rng = StepRng::new(0, 0);

    let result = disassembler.disassemble(&item("steelBlade"), &mut rng);
    assert_eq!(result.quantity_of("mithrilOre"), 1);
    assert_eq!(result.quantity_of("magicDust"), 2);
    assert_eq!(result.quantity_of("arcaneCrystal"), 1);
    assert_eq!(result.materials.len(), 3);
}

#[test]
fn test_salvage_never_reports_empty_quantities() {
    let disassembler = Disassembler::with_builtin_rules(catalog());
    let mut rng = ChaCha8Rng::seed_from_u64(77);
    let items = ["woodenSword", "ironSword", "steelBlade", "mithrilSaber", "dragonFang"];

    for _ in 0..200 {
        for id in items {
            let result = disassembler.disassemble(&item(id), &mut rng);
            assert!(result.materials.iter().all(|m| m.quantity > 0));
        }
    }
}

#[test]
fn test_salvage_quantities_stay_within_rule_bounds() {
    let disassembler = Disassembler::with_builtin_rules(catalog());
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let common = item("woodenSword");

    for _ in 0..300 {
        let result = disassembler.disassemble(&common, &mut rng);
        let scrap = result.quantity_of("ironScrap");
        assert!((1..=3).contains(&scrap), "ironScrap always drops 1-3, got {scrap}");
        assert!(result.quantity_of("magicDust") <= 1);
    }
}

#[test]
fn test_quality_without_rules_yields_nothing() {
    let disassembler = Disassembler::new(catalog(), HashMap::new());
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    assert!(disassembler.disassemble(&item("dragonFang"), &mut rng).is_empty());
    assert!(disassembler.preview_disassemble(&item("dragonFang")).is_empty());
    assert_eq!(disassembler.disassemble_value(&item("dragonFang")), 0);
}

#[test]
fn test_rule_with_unknown_material_is_skipped() {
    let rules = HashMap::from([(
        Quality::Common,
        vec![
            DisassembleRule::new("unobtainium", 1.0, 1, 1),
            DisassembleRule::new("ironScrap", 1.0, 2, 2),
        ],
    )]);
    let disassembler = Disassembler::new(catalog(), rules);
    let preview = disassembler.preview_disassemble(&item("woodenSword"));
    assert_eq!(preview.materials.len(), 1);
    assert_eq!(preview.quantity_of("ironScrap"), 2);
}

// =========================================================================
// Previews and batches
// =========================================================================

#[test]
fn test_preview_lists_every_rule_at_average() {
    let disassembler = Disassembler::with_builtin_rules(catalog());
    let preview = disassembler.preview_disassemble(&item("steelBlade"));
    // Rare: mithril 1-3, dust 2-3, crystal 1-2.
    assert_eq!(preview.quantity_of("mithrilOre"), 2);
    assert_eq!(preview.quantity_of("magicDust"), 2);
    assert_eq!(preview.quantity_of("arcaneCrystal"), 1);
}

#[test]
fn test_preview_is_deterministic() {
    let disassembler = Disassembler::with_builtin_rules(catalog());
    let sword = item("ironSword");
    assert_eq!(
        disassembler.preview_disassemble(&sword),
        disassembler.preview_disassemble(&sword)
    );
}

#[test]
fn test_batch_preview_merges_by_material() {
    let disassembler = Disassembler::with_builtin_rules(catalog());
    let single = disassembler.preview_disassemble(&item("ironSword"));
    let batch = disassembler.preview_disassemble_batch(&[item("ironSword"), item("ironSword")]);

    assert_eq!(batch.materials.len(), single.materials.len());
    for m in &single.materials {
        assert_eq!(batch.quantity_of(&m.material.id), m.quantity * 2);
    }
}

#[test]
fn test_batch_salvage_merges_by_material() {
    let disassembler = Disassembler::with_builtin_rules(catalog());
    let mut rng = StepRng::new(0, 0);
    let batch =
        disassembler.disassemble_batch(&[item("woodenSword"), item("clothTunic")], &mut rng);

    let ids: Vec<&str> = batch.materials.iter().map(|m| m.material.id.as_str()).collect();
    assert_eq!(ids, vec!["ironScrap", "magicDust"]);
    assert_eq!(batch.quantity_of("ironScrap"), 2);
    assert_eq!(batch.quantity_of("magicDust"), 2);
}

#[test]
fn test_empty_batch() {
    let disassembler = Disassembler::with_builtin_rules(catalog());
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    assert!(disassembler.disassemble_batch(&[], &mut rng).is_empty());
    assert_eq!(disassembler.disassemble_batch_value(&[]), 0);
}

// =========================================================================
// Valuation
// =========================================================================

#[test]
fn test_value_rises_with_quality() {
    let disassembler = Disassembler::with_builtin_rules(catalog());
    let values: Vec<u64> = ["woodenSword", "ironSword", "steelBlade", "mithrilSaber", "dragonFang"]
        .iter()
        .map(|id| disassembler.disassemble_value(&item(id)))
        .collect();

    assert_eq!(values, vec![3, 14, 122, 1230, 11300]);
    assert!(values.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_batch_value_is_sum_of_parts() {
    let disassembler = Disassembler::with_builtin_rules(catalog());
    let items = [item("ironSword"), item("steelBlade"), item("clothTunic")];
    let expected: u64 = items.iter().map(|i| disassembler.disassemble_value(i)).sum();
    assert_eq!(disassembler.disassemble_batch_value(&items), expected);
}

#[test]
fn test_every_quality_has_builtin_rules() {
    let rules = builtin_disassemble_rules();
    for quality in Quality::ALL {
        assert!(!rules.get(&quality).map_or(true, Vec::is_empty), "{quality:?}");
    }
}
