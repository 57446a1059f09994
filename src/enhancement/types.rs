use crate::core::constants::{ENHANCE_HIGH_TIER_LEVEL, MAX_ENHANCE_LEVEL};
use crate::items::materials::MaterialRequirement;

pub const ENHANCEMENT_SUCCESS_RATES: [f64; 10] = [
    1.00, 1.00, 1.00, 1.00, // +1-4: 100%
    0.70, 0.60, 0.50, // +5-7: 70%, 60%, 50%
    0.30, 0.15, 0.05, // +8-10: 30%, 15%, 5%
];

pub const ENHANCEMENT_GOLD_COSTS: [u64; 10] = [
    50, 100, 150, 200, // +1-4
    400, 600, 800, // +5-7
    1500, 2500, // +8-9
    5000, // +10
];

pub const ENHANCEMENT_CUMULATIVE_BONUS: [f64; 11] = [
    0.0, 5.0, 10.0, 15.0, 20.0, 30.0, 40.0, 55.0, 75.0, 100.0, 150.0,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnhanceCost {
    pub gold: u64,
    pub materials: Vec<MaterialRequirement>,
}

pub fn success_rate(target_level: u8) -> f64 {
    if target_level == 0 || target_level > MAX_ENHANCE_LEVEL {
        return 0.0;
    }
    ENHANCEMENT_SUCCESS_RATES[(target_level - 1) as usize]
}

/// Gold plus `ironScrap x target`; +8 and beyond also eat an arcane crystal.
pub fn enhancement_cost(target_level: u8) -> Option<EnhanceCost> {
    if target_level == 0 || target_level > MAX_ENHANCE_LEVEL {
        return None;
    }
    let mut materials = vec![MaterialRequirement::new("ironScrap", u32::from(target_level))];
    if target_level >= ENHANCE_HIGH_TIER_LEVEL {
        materials.push(MaterialRequirement::new("arcaneCrystal", 1));
    }
    Some(EnhanceCost {
        gold: ENHANCEMENT_GOLD_COSTS[(target_level - 1) as usize],
        materials,
    })
}

pub fn enhancement_multiplier(level: u8) -> f64 {
    let idx = (level as usize).min(MAX_ENHANCE_LEVEL as usize);
    1.0 + ENHANCEMENT_CUMULATIVE_BONUS[idx] / 100.0
}

/// Format an enhancement prefix for display (e.g., "+5 " or "" for +0)
pub fn enhancement_prefix(level: u8) -> String {
    if level == 0 {
        String::new()
    } else {
        format!("+{} ", level)
    }
}
