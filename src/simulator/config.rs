//! Simulation configuration.

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of simulation runs to perform
    pub runs: u32,

    /// Kills of `enemy_id` per run
    pub kills_per_run: u32,

    /// Drop table to farm
    pub enemy_id: String,

    /// Player level used for drop-table gates
    pub player_level: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Enchant recipe attempted on the best weapon
    pub enchant_id: String,

    /// Upgrade recipe attempted on the best weapon
    pub upgrade_id: String,

    pub starting_gold: u64,

    /// Gold credited after every kill
    pub gold_per_kill: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            runs: 100,
            kills_per_run: 200,
            enemy_id: "darkKnight".to_string(),
            player_level: 10,
            seed: None,
            enchant_id: "flaming".to_string(),
            upgrade_id: "soulreaper".to_string(),
            starting_gold: 500,
            gold_per_kill: 40,
        }
    }
}

impl SimConfig {
    /// Small, seeded config for smoke tests.
    pub fn quick(seed: u64) -> Self {
        Self {
            runs: 10,
            kills_per_run: 50,
            seed: Some(seed),
            ..Default::default()
        }
    }
}
