//! Success-rate curves shared by the enchant and upgrade engines.

use super::constants::{
    ENCHANT_RATE_DECAY, ENCHANT_RATE_FLOOR, UPGRADE_RATE_DECAY, UPGRADE_RATE_FLOOR,
};
use serde::{Deserialize, Serialize};

/// Geometric decay with a hard floor: `max(floor, base * decay^steps)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SuccessCurve {
    pub decay: f64,
    pub floor: f64,
}

impl SuccessCurve {
    pub const ENCHANT: SuccessCurve = SuccessCurve {
        decay: ENCHANT_RATE_DECAY,
        floor: ENCHANT_RATE_FLOOR,
    };

    pub const UPGRADE: SuccessCurve = SuccessCurve {
        decay: UPGRADE_RATE_DECAY,
        floor: UPGRADE_RATE_FLOOR,
    };

    pub fn rate(&self, base_rate: f64, steps: u32) -> f64 {
        let steps = steps.min(i32::MAX as u32) as i32;
        (base_rate * self.decay.powi(steps)).max(self.floor)
    }
}

/// Enchant success rate for an item that already carries `effect_count` effects.
pub fn calculate_success_rate(base_rate: f64, effect_count: usize) -> f64 {
    SuccessCurve::ENCHANT.rate(base_rate, effect_count as u32)
}
