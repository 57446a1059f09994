//! Small RNG helpers shared by the drop and disassembly tables.

use rand::Rng;

/// Independent probability check: succeeds when a uniform draw lands below `chance`.
pub fn roll_chance(chance: f64, rng: &mut impl Rng) -> bool {
    rng.gen::<f64>() < chance
}

/// Uniform integer in `[min, max]`. A degenerate range consumes no randomness.
pub fn roll_quantity(min: u32, max: u32, rng: &mut impl Rng) -> u32 {
    if max <= min {
        return min;
    }
    rng.gen_range(min..=max)
}
