use super::types::{enhancement_cost, success_rate, EnhanceCost};
use crate::core::constants::MAX_ENHANCE_LEVEL;
use crate::core::rolls::roll_chance;
use crate::error::ForgeError;
use crate::items::materials::{check_materials, MaterialStack};
use crate::items::types::Equipment;
use rand::Rng;
use tracing::debug;

/// Cost of the next level, provided the item is below the cap and the
/// player can cover it.
pub fn check_enhance(
    equipment: &Equipment,
    materials: &[MaterialStack],
    gold: u64,
) -> Result<EnhanceCost, ForgeError> {
    let cost = next_cost(equipment)?;
    check_materials(materials, &cost.materials)?;
    if gold < cost.gold {
        return Err(ForgeError::InsufficientGold {
            required: cost.gold,
            available: gold,
        });
    }
    Ok(cost)
}

pub fn can_enhance(equipment: &Equipment, materials: &[MaterialStack], gold: u64) -> bool {
    check_enhance(equipment, materials, gold).is_ok()
}

/// Try for the next enhance level. A failed roll returns `RollFailed` and the
/// item keeps its level; enhancement never goes backwards.
pub fn enhance(
    equipment: &Equipment,
    materials: &[MaterialStack],
    rng: &mut impl Rng,
) -> Result<Equipment, ForgeError> {
    let cost = next_cost(equipment)?;
    check_materials(materials, &cost.materials)?;

    let target_level = equipment.enhance_level + 1;
    let rate = success_rate(target_level);
    if !roll_chance(rate, rng) {
        debug!(item = %equipment.id, target_level, rate, "enhancement failed");
        return Err(ForgeError::RollFailed);
    }

    debug!(item = %equipment.id, target_level, "enhancement succeeded");
    let mut enhanced = equipment.clone();
    enhanced.enhance_level = target_level;
    Ok(enhanced)
}

fn next_cost(equipment: &Equipment) -> Result<EnhanceCost, ForgeError> {
    if equipment.enhance_level >= MAX_ENHANCE_LEVEL {
        return Err(ForgeError::MaxEnhanceLevel(MAX_ENHANCE_LEVEL));
    }
    enhancement_cost(equipment.enhance_level + 1)
        .ok_or(ForgeError::MaxEnhanceLevel(MAX_ENHANCE_LEVEL))
}
