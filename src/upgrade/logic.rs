use super::data::builtin_upgrades;
use super::types::{UpgradeConfig, UpgradeOutcome, UpgradePreview};
use crate::core::curve::SuccessCurve;
use crate::core::rolls::roll_chance;
use crate::error::ForgeError;
use crate::items::materials::{check_materials, MaterialStack};
use crate::items::types::{EffectKind, Equipment, EquipmentEffect, Stats};
use rand::Rng;
use tracing::{debug, warn};

/// Ascension upgrades: multiply base stats, raise quality by one tier and
/// attach a triggered effect. Higher quality items are harder to upgrade.
#[derive(Debug, Clone)]
pub struct UpgradeEngine {
    recipes: Vec<UpgradeConfig>,
    curve: SuccessCurve,
}

impl Default for UpgradeEngine {
    fn default() -> Self {
        Self::new(builtin_upgrades())
    }
}

impl UpgradeEngine {
    pub fn new(recipes: Vec<UpgradeConfig>) -> Self {
        Self {
            recipes,
            curve: SuccessCurve::UPGRADE,
        }
    }

    pub fn with_curve(mut self, curve: SuccessCurve) -> Self {
        self.curve = curve;
        self
    }

    pub fn recipe(&self, upgrade_id: &str) -> Option<&UpgradeConfig> {
        self.recipes.iter().find(|r| r.id == upgrade_id)
    }

    pub fn recipes(&self) -> &[UpgradeConfig] {
        &self.recipes
    }

    /// Recipes that target the item's slot and whose quality/enhance gates it passes.
    pub fn available_upgrades(&self, equipment: &Equipment) -> Vec<&UpgradeConfig> {
        self.recipes
            .iter()
            .filter(|r| r.fits(equipment.slot) && r.requirements_met(equipment))
            .collect()
    }

    pub fn success_rate(&self, equipment: &Equipment, recipe: &UpgradeConfig) -> f64 {
        let steps = u32::from(equipment.quality.tier()) - 1;
        self.curve.rate(recipe.success_rate, steps)
    }

    pub fn check_upgrade(
        &self,
        equipment: &Equipment,
        upgrade_id: &str,
        materials: &[MaterialStack],
        gold: u64,
    ) -> Result<(), ForgeError> {
        let recipe = self.lookup(upgrade_id)?;
        check_item(equipment, recipe)?;
        check_materials(materials, &recipe.materials)?;
        if gold < recipe.gold_cost {
            return Err(ForgeError::InsufficientGold {
                required: recipe.gold_cost,
                available: gold,
            });
        }
        Ok(())
    }

    pub fn can_upgrade(
        &self,
        equipment: &Equipment,
        upgrade_id: &str,
        materials: &[MaterialStack],
        gold: u64,
    ) -> bool {
        self.check_upgrade(equipment, upgrade_id, materials, gold)
            .is_ok()
    }

    pub fn preview_upgrade(
        &self,
        equipment: &Equipment,
        upgrade_id: &str,
    ) -> Option<UpgradePreview> {
        let recipe = self.lookup(upgrade_id).ok()?;
        Some(UpgradePreview {
            success_rate: self.success_rate(equipment, recipe),
            projected_stats: upgraded_stats(&equipment.stats, recipe),
            projected_quality: equipment.quality.next(),
            gold_cost: recipe.gold_cost,
            materials: recipe.materials.clone(),
            failure_protection: recipe.failure_protection,
        })
    }

    /// Attempt the upgrade. Slot, gates and materials are re-checked; gold is
    /// not. Refunding materials on a protected failure is the caller's call.
    pub fn try_upgrade(
        &self,
        equipment: &Equipment,
        upgrade_id: &str,
        materials: &[MaterialStack],
        rng: &mut impl Rng,
    ) -> Result<UpgradeOutcome, ForgeError> {
        let recipe = self.lookup(upgrade_id)?;
        check_item(equipment, recipe)?;
        check_materials(materials, &recipe.materials)?;

        let rate = self.success_rate(equipment, recipe);
        if roll_chance(rate, rng) {
            debug!(item = %equipment.id, upgrade_id, rate, "upgrade succeeded");
            return Ok(UpgradeOutcome::Upgraded(apply_upgrade(equipment, recipe)));
        }

        debug!(
            item = %equipment.id,
            upgrade_id,
            rate,
            protected = recipe.failure_protection,
            "upgrade failed"
        );
        if recipe.failure_protection {
            Ok(UpgradeOutcome::Protected(equipment.clone()))
        } else {
            Ok(UpgradeOutcome::Destroyed)
        }
    }

    /// Upgraded or protected item, `None` when rejected or destroyed.
    pub fn upgrade(
        &self,
        equipment: &Equipment,
        upgrade_id: &str,
        materials: &[MaterialStack],
        rng: &mut impl Rng,
    ) -> Option<Equipment> {
        self.try_upgrade(equipment, upgrade_id, materials, rng)
            .ok()
            .and_then(UpgradeOutcome::into_equipment)
    }

    fn lookup(&self, upgrade_id: &str) -> Result<&UpgradeConfig, ForgeError> {
        self.recipe(upgrade_id).ok_or_else(|| {
            warn!(upgrade_id, "unknown upgrade recipe");
            ForgeError::UnknownUpgrade(upgrade_id.to_string())
        })
    }
}

fn check_item(equipment: &Equipment, recipe: &UpgradeConfig) -> Result<(), ForgeError> {
    if !recipe.fits(equipment.slot) {
        return Err(ForgeError::IncompatibleSlot {
            recipe_id: recipe.id.clone(),
            slot: equipment.slot,
        });
    }
    if !recipe.requirements_met(equipment) {
        return Err(ForgeError::RequirementsNotMet {
            recipe_id: recipe.id.clone(),
            required_quality: recipe.requirements.quality,
            required_enhance: recipe.requirements.enhance_level.unwrap_or(0),
        });
    }
    Ok(())
}

/// Present base stats scaled and floored; crit bonuses added on top (an
/// absent crit stat starts from zero).
fn upgraded_stats(stats: &Stats, recipe: &UpgradeConfig) -> Stats {
    let m = &recipe.multipliers;
    let scale = |value: Option<u32>, mult: Option<f64>| {
        value.map(|v| (v as f64 * mult.unwrap_or(1.0)).floor() as u32)
    };
    let bump = |value: Option<f64>, bonus: Option<f64>| match bonus {
        Some(b) => Some(value.unwrap_or(0.0) + b),
        None => value,
    };
    Stats {
        attack: scale(stats.attack, m.attack),
        defense: scale(stats.defense, m.defense),
        hp: scale(stats.hp, m.hp),
        mp: scale(stats.mp, m.mp),
        crit_rate: bump(stats.crit_rate, recipe.crit_rate_bonus),
        crit_damage: bump(stats.crit_damage, recipe.crit_damage_bonus),
    }
}

fn apply_upgrade(equipment: &Equipment, recipe: &UpgradeConfig) -> Equipment {
    let mut upgraded = equipment.clone();
    upgraded.stats = upgraded_stats(&equipment.stats, recipe);
    upgraded.quality = equipment.quality.next();

    // Snapshot of the already-upgraded values for every stat the recipe touches.
    let m = &recipe.multipliers;
    let s = &upgraded.stats;
    let snapshot = Stats {
        attack: m.attack.and(s.attack),
        defense: m.defense.and(s.defense),
        hp: m.hp.and(s.hp),
        mp: m.mp.and(s.mp),
        crit_rate: recipe.crit_rate_bonus.and(s.crit_rate),
        crit_damage: recipe.crit_damage_bonus.and(s.crit_damage),
    };

    upgraded.effects.push(EquipmentEffect {
        kind: EffectKind::Active,
        name: recipe.special.name.clone(),
        description: recipe.special.description.clone(),
        trigger: Some(recipe.special.trigger),
        chance: Some(recipe.special.chance),
        cooldown: Some(recipe.special.cooldown),
        stats: (!snapshot.is_empty()).then_some(snapshot),
    });
    upgraded
}
