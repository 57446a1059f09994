use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropEntry {
    pub item_id: String,
    /// Independent trigger chance in [0, 1]. Ignored for guaranteed drops.
    pub chance: f64,
    pub min_quantity: u32,
    pub max_quantity: u32,
}

impl DropEntry {
    pub fn new(item_id: &str, chance: f64, min_quantity: u32, max_quantity: u32) -> Self {
        Self {
            item_id: item_id.to_string(),
            chance,
            min_quantity,
            max_quantity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropTable {
    pub enemy_id: String,
    #[serde(default)]
    pub drops: Vec<DropEntry>,
    #[serde(default)]
    pub guaranteed_drops: Vec<DropEntry>,
    #[serde(default)]
    pub first_kill_drops: Vec<DropEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level_requirement: Option<u32>,
}

impl DropTable {
    pub fn new(enemy_id: &str) -> Self {
        Self {
            enemy_id: enemy_id.to_string(),
            drops: Vec::new(),
            guaranteed_drops: Vec::new(),
            first_kill_drops: Vec::new(),
            level_requirement: None,
        }
    }
}

/// Which enemies have died and how often. Persisted as
/// `{"killedEnemies": [...], "enemyKillCounts": {...}}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KillHistory {
    #[serde(default)]
    pub killed_enemies: BTreeSet<String>,
    #[serde(default)]
    pub enemy_kill_counts: HashMap<String, u32>,
}

impl KillHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, enemy_id: &str) -> u32 {
        self.killed_enemies.insert(enemy_id.to_string());
        let count = self.enemy_kill_counts.entry(enemy_id.to_string()).or_insert(0);
        *count += 1;
        *count
    }

    pub fn count(&self, enemy_id: &str) -> u32 {
        self.enemy_kill_counts.get(enemy_id).copied().unwrap_or(0)
    }

    pub fn has_killed(&self, enemy_id: &str) -> bool {
        self.killed_enemies.contains(enemy_id)
    }
}
