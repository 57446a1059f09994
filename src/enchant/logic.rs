use super::data::builtin_enchants;
use super::types::{ElementalBonus, EnchantConfig, EnchantPreview};
use crate::core::curve::SuccessCurve;
use crate::core::rolls::roll_chance;
use crate::error::ForgeError;
use crate::items::materials::{check_materials, MaterialStack};
use crate::items::types::{EffectKind, Equipment, EquipmentEffect, Trigger};
use rand::Rng;
use tracing::{debug, warn};

/// Applies affixes to equipment. Each extra effect on an item makes the next
/// enchant harder, down to the curve's floor.
#[derive(Debug, Clone)]
pub struct EnchantEngine {
    recipes: Vec<EnchantConfig>,
    curve: SuccessCurve,
}

impl Default for EnchantEngine {
    fn default() -> Self {
        Self::new(builtin_enchants())
    }
}

impl EnchantEngine {
    pub fn new(recipes: Vec<EnchantConfig>) -> Self {
        Self {
            recipes,
            curve: SuccessCurve::ENCHANT,
        }
    }

    pub fn with_curve(mut self, curve: SuccessCurve) -> Self {
        self.curve = curve;
        self
    }

    pub fn recipe(&self, enchant_id: &str) -> Option<&EnchantConfig> {
        self.recipes.iter().find(|r| r.id == enchant_id)
    }

    pub fn recipes(&self) -> &[EnchantConfig] {
        &self.recipes
    }

    /// Recipes whose slot list includes the item's slot.
    pub fn available_enchants(&self, equipment: &Equipment) -> Vec<&EnchantConfig> {
        self.recipes
            .iter()
            .filter(|r| r.fits(equipment.slot))
            .collect()
    }

    pub fn success_rate(&self, equipment: &Equipment, recipe: &EnchantConfig) -> f64 {
        self.curve
            .rate(recipe.success_rate, equipment.effects.len() as u32)
    }

    /// Full precondition check: recipe, slot, materials, then gold.
    pub fn check_enchant(
        &self,
        equipment: &Equipment,
        enchant_id: &str,
        materials: &[MaterialStack],
        gold: u64,
    ) -> Result<(), ForgeError> {
        let recipe = self.lookup(enchant_id)?;
        if !recipe.fits(equipment.slot) {
            return Err(ForgeError::IncompatibleSlot {
                recipe_id: recipe.id.clone(),
                slot: equipment.slot,
            });
        }
        check_materials(materials, &recipe.materials)?;
        if gold < recipe.gold_cost {
            return Err(ForgeError::InsufficientGold {
                required: recipe.gold_cost,
                available: gold,
            });
        }
        Ok(())
    }

    pub fn can_enchant(
        &self,
        equipment: &Equipment,
        enchant_id: &str,
        materials: &[MaterialStack],
        gold: u64,
    ) -> bool {
        self.check_enchant(equipment, enchant_id, materials, gold)
            .is_ok()
    }

    /// Success rate and the stats the item would have after the enchant.
    pub fn preview_enchant(
        &self,
        equipment: &Equipment,
        enchant_id: &str,
    ) -> Option<EnchantPreview> {
        let recipe = self.lookup(enchant_id).ok()?;
        Some(EnchantPreview {
            success_rate: self.success_rate(equipment, recipe),
            projected_stats: equipment.stats.add_present(&recipe.stats),
            gold_cost: recipe.gold_cost,
            materials: recipe.materials.clone(),
        })
    }

    /// Attempt the enchant. Materials are re-checked; gold is not. A failed
    /// roll leaves the item as it was.
    pub fn try_enchant(
        &self,
        equipment: &Equipment,
        enchant_id: &str,
        materials: &[MaterialStack],
        rng: &mut impl Rng,
    ) -> Result<Equipment, ForgeError> {
        let recipe = self.lookup(enchant_id)?;
        check_materials(materials, &recipe.materials)?;

        let rate = self.success_rate(equipment, recipe);
        if !roll_chance(rate, rng) {
            debug!(item = %equipment.id, enchant_id, rate, "enchant failed");
            return Err(ForgeError::RollFailed);
        }

        debug!(item = %equipment.id, enchant_id, rate, "enchant succeeded");
        Ok(apply_enchant(equipment, recipe))
    }

    /// `try_enchant` collapsed to `None` for any rejection or lost roll.
    pub fn enchant(
        &self,
        equipment: &Equipment,
        enchant_id: &str,
        materials: &[MaterialStack],
        rng: &mut impl Rng,
    ) -> Option<Equipment> {
        self.try_enchant(equipment, enchant_id, materials, rng).ok()
    }

    fn lookup(&self, enchant_id: &str) -> Result<&EnchantConfig, ForgeError> {
        self.recipe(enchant_id).ok_or_else(|| {
            warn!(enchant_id, "unknown enchant recipe");
            ForgeError::UnknownEnchant(enchant_id.to_string())
        })
    }
}

fn apply_enchant(equipment: &Equipment, recipe: &EnchantConfig) -> Equipment {
    let mut enchanted = equipment.clone();
    enchanted.stats = equipment.stats.add_present(&recipe.stats);
    enchanted.effects.push(EquipmentEffect {
        kind: EffectKind::Passive,
        name: recipe.name.clone(),
        description: recipe.description.clone(),
        trigger: None,
        chance: None,
        cooldown: None,
        stats: (!recipe.stats.is_empty()).then(|| recipe.stats.clone()),
    });
    if let Some(bonus) = recipe.elemental {
        enchanted.effects.push(elemental_effect(bonus));
    }
    enchanted
}

fn elemental_effect(bonus: ElementalBonus) -> EquipmentEffect {
    EquipmentEffect {
        kind: EffectKind::Active,
        name: format!("{} Damage", bonus.element.name()),
        description: format!(
            "Deals {} extra {} damage on hit",
            bonus.damage,
            bonus.element.name().to_lowercase()
        ),
        trigger: Some(Trigger::OnHit),
        chance: Some(1.0),
        cooldown: None,
        stats: None,
    }
}
