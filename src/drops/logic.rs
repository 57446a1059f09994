use super::data::builtin_drop_tables;
use super::types::{DropEntry, DropTable, KillHistory};
use crate::core::constants::KILL_HISTORY_KEY;
use crate::core::rolls::{roll_chance, roll_quantity};
use crate::items::catalog::Catalog;
use crate::items::types::Equipment;
use crate::utils::persistence::{load_json_or_default, save_json, Storage};
use rand::Rng;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Rolls loot for defeated enemies and tracks kill history for first-kill bonuses.
pub struct DropResolver {
    catalog: Arc<Catalog>,
    tables: HashMap<String, DropTable>,
    history: KillHistory,
    storage: Box<dyn Storage>,
}

impl DropResolver {
    pub fn new(catalog: Arc<Catalog>, tables: Vec<DropTable>, storage: Box<dyn Storage>) -> Self {
        let history = load_json_or_default(storage.as_ref(), KILL_HISTORY_KEY);
        Self {
            catalog,
            tables: tables.into_iter().map(|t| (t.enemy_id.clone(), t)).collect(),
            history,
            storage,
        }
    }

    pub fn with_builtin_tables(catalog: Arc<Catalog>, storage: Box<dyn Storage>) -> Self {
        Self::new(catalog, builtin_drop_tables(), storage)
    }

    pub fn table(&self, enemy_id: &str) -> Option<&DropTable> {
        self.tables.get(enemy_id)
    }

    pub fn history(&self) -> &KillHistory {
        &self.history
    }

    pub fn kill_count(&self, enemy_id: &str) -> u32 {
        self.history.count(enemy_id)
    }

    /// True only while the enemy's recorded kill count is exactly one.
    pub fn is_first_kill(&self, enemy_id: &str) -> bool {
        self.history.count(enemy_id) == 1
    }

    /// Record one enemy death and persist the history. Call exactly once per
    /// death, before `generate_drops`.
    pub fn record_kill(&mut self, enemy_id: &str) -> u32 {
        let count = self.history.record(enemy_id);
        if let Err(err) = save_json(self.storage.as_mut(), KILL_HISTORY_KEY, &self.history) {
            warn!(error = %err, "failed to persist kill history");
        }
        count
    }

    /// Roll every drop for `enemy_id`. Unknown enemies and unmet level gates
    /// yield nothing; unknown templates are skipped.
    pub fn generate_drops(
        &self,
        enemy_id: &str,
        player_level: u32,
        rng: &mut impl Rng,
    ) -> Vec<Equipment> {
        let Some(table) = self.tables.get(enemy_id) else {
            warn!(enemy_id, "no drop table");
            return Vec::new();
        };

        if let Some(required) = table.level_requirement {
            if player_level < required {
                debug!(enemy_id, player_level, required, "below drop level gate");
                return Vec::new();
            }
        }

        let mut items = Vec::new();

        if self.is_first_kill(enemy_id) {
            for entry in &table.first_kill_drops {
                if roll_chance(entry.chance, rng) {
                    let quantity = roll_quantity(entry.min_quantity, entry.max_quantity, rng);
                    self.spawn(entry, quantity, &mut items);
                }
            }
        }

        for entry in &table.guaranteed_drops {
            let quantity = roll_quantity(entry.min_quantity, entry.max_quantity, rng);
            self.spawn(entry, quantity, &mut items);
        }

        for entry in &table.drops {
            if roll_chance(entry.chance, rng) {
                let quantity = roll_quantity(entry.min_quantity, entry.max_quantity, rng);
                self.spawn(entry, quantity, &mut items);
            }
        }

        debug!(enemy_id, count = items.len(), "drops generated");
        items
    }

    /// Give the storage back, e.g. to rebuild a resolver over the same data.
    pub fn into_storage(self) -> Box<dyn Storage> {
        self.storage
    }

    fn spawn(&self, entry: &DropEntry, quantity: u32, out: &mut Vec<Equipment>) {
        if self.catalog.equipment_template(&entry.item_id).is_none() {
            error!(item_id = %entry.item_id, "drop references unknown equipment template");
            return;
        }
        for _ in 0..quantity {
            if let Some(item) = self.catalog.create_equipment(&entry.item_id) {
                out.push(item);
            }
        }
    }
}
