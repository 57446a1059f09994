//! Simulation runner wiring the real engines together.

use super::config::SimConfig;
use super::report::{RunStats, SimReport};
use crate::disassembly::Disassembler;
use crate::drops::DropResolver;
use crate::enchant::EnchantEngine;
use crate::enhancement::logic::{check_enhance, enhance};
use crate::items::catalog::Catalog;
use crate::items::materials::{add_material, consume_materials, MaterialStack};
use crate::items::types::{Equipment, EquipmentSlot};
use crate::upgrade::{UpgradeEngine, UpgradeOutcome};
use crate::utils::persistence::MemoryStorage;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;
use tracing::{debug, info};

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let catalog = Arc::new(Catalog::builtin());
    let mut all_runs = Vec::with_capacity(config.runs as usize);

    for run_idx in 0..config.runs {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(u64::from(run_idx))),
            None => StdRng::from_entropy(),
        };

        let stats = simulate_single_run(config, Arc::clone(&catalog), &mut rng);
        debug!(
            run = run_idx + 1,
            drops = stats.drops,
            final_quality = ?stats.final_quality,
            "run finished"
        );
        all_runs.push(stats);
    }

    info!(runs = config.runs, enemy_id = %config.enemy_id, "simulation complete");
    SimReport::from_runs(all_runs, &config.enemy_id)
}

/// One farming session against a fresh kill history.
pub fn simulate_single_run(
    config: &SimConfig,
    catalog: Arc<Catalog>,
    rng: &mut impl Rng,
) -> RunStats {
    let mut resolver =
        DropResolver::with_builtin_tables(Arc::clone(&catalog), Box::new(MemoryStorage::new()));
    let disassembler = Disassembler::with_builtin_rules(catalog);
    let enchanter = EnchantEngine::default();
    let upgrader = UpgradeEngine::default();

    let mut stats = RunStats::default();
    let mut materials: Vec<MaterialStack> = Vec::new();
    let mut gold = config.starting_gold;
    let mut weapon: Option<Equipment> = None;

    for _ in 0..config.kills_per_run {
        resolver.record_kill(&config.enemy_id);
        stats.kills += 1;
        gold += config.gold_per_kill;

        for item in resolver.generate_drops(&config.enemy_id, config.player_level, rng) {
            stats.record_drop(item.quality);
            let salvage = match weapon.take() {
                Some(current)
                    if item.slot == EquipmentSlot::Weapon && outclasses(&item, &current) =>
                {
                    weapon = Some(item);
                    current
                }
                None if item.slot == EquipmentSlot::Weapon => {
                    weapon = Some(item);
                    continue;
                }
                current => {
                    weapon = current;
                    item
                }
            };

            stats.items_disassembled += 1;
            for gained in disassembler.disassemble(&salvage, rng).materials {
                *stats
                    .materials_collected
                    .entry(gained.material.id.clone())
                    .or_insert(0) += gained.quantity;
                add_material(&mut materials, &gained.material, gained.quantity);
            }
        }

        if let Some(current) = weapon.take() {
            weapon = improve(
                config,
                current,
                &enchanter,
                &upgrader,
                &mut materials,
                &mut gold,
                &mut stats,
                rng,
            );
        }
    }

    stats.final_gold = gold;
    if let Some(w) = &weapon {
        stats.final_quality = Some(w.quality);
        stats.final_enhance_level = w.enhance_level;
        stats.final_effects = w.effects.len();
    }
    stats
}

/// Higher quality wins, then higher attack.
fn outclasses(candidate: &Equipment, current: &Equipment) -> bool {
    let attack = |e: &Equipment| e.effective_stats().attack.unwrap_or(0);
    (candidate.quality, attack(candidate)) > (current.quality, attack(current))
}

/// One round of spending: enhance, then enchant, then upgrade, each only when
/// affordable. Returns `None` when the weapon was destroyed.
#[allow(clippy::too_many_arguments)]
fn improve(
    config: &SimConfig,
    mut weapon: Equipment,
    enchanter: &EnchantEngine,
    upgrader: &UpgradeEngine,
    materials: &mut Vec<MaterialStack>,
    gold: &mut u64,
    stats: &mut RunStats,
    rng: &mut impl Rng,
) -> Option<Equipment> {
    if let Ok(cost) = check_enhance(&weapon, materials, *gold) {
        stats.enhance_attempts += 1;
        let attempt = enhance(&weapon, materials, rng);
        if consume_materials(materials, &cost.materials).is_ok() {
            spend(gold, cost.gold, stats);
        }
        if let Ok(enhanced) = attempt {
            stats.enhance_successes += 1;
            weapon = enhanced;
        }
    }

    if enchanter.can_enchant(&weapon, &config.enchant_id, materials, *gold) {
        if let Some(recipe) = enchanter.recipe(&config.enchant_id) {
            let (cost, requirements) = (recipe.gold_cost, recipe.materials.clone());
            stats.enchant_attempts += 1;
            let attempt = enchanter.try_enchant(&weapon, &config.enchant_id, materials, rng);
            if consume_materials(materials, &requirements).is_ok() {
                spend(gold, cost, stats);
            }
            if let Ok(enchanted) = attempt {
                stats.enchant_successes += 1;
                weapon = enchanted;
            }
        }
    }

    if upgrader.can_upgrade(&weapon, &config.upgrade_id, materials, *gold) {
        if let Some(recipe) = upgrader.recipe(&config.upgrade_id) {
            let (cost, requirements) = (recipe.gold_cost, recipe.materials.clone());
            stats.upgrade_attempts += 1;
            let attempt = upgrader.try_upgrade(&weapon, &config.upgrade_id, materials, rng);
            if consume_materials(materials, &requirements).is_ok() {
                spend(gold, cost, stats);
            }
            match attempt {
                Ok(UpgradeOutcome::Upgraded(upgraded)) => {
                    stats.upgrade_successes += 1;
                    weapon = upgraded;
                }
                Ok(UpgradeOutcome::Protected(kept)) => weapon = kept,
                Ok(UpgradeOutcome::Destroyed) => {
                    stats.weapons_destroyed += 1;
                    return None;
                }
                Err(_) => {}
            }
        }
    }

    Some(weapon)
}

fn spend(gold: &mut u64, amount: u64, stats: &mut RunStats) {
    *gold = gold.saturating_sub(amount);
    stats.gold_spent += amount;
}
