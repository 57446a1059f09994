use super::data::builtin_shops;
use super::types::{Purchase, ShopConfig, ShopItem, ShopState, ShopStock};
use crate::core::constants::{SHOP_DATA_KEY, SHOP_PRICE_VARIANCE_PER_TIER};
use crate::error::ForgeError;
use crate::items::catalog::Catalog;
use crate::items::types::Equipment;
use crate::utils::persistence::{load_json_or_default, save_json, Storage};
use rand::Rng;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Time-windowed shop inventories. Regular stock resets on the shop's
/// interval; limited offers expire on their own clocks.
pub struct ShopManager {
    catalog: Arc<Catalog>,
    shops: HashMap<String, ShopConfig>,
    states: HashMap<String, ShopState>,
    storage: Box<dyn Storage>,
}

impl ShopManager {
    pub fn new(catalog: Arc<Catalog>, shops: Vec<ShopConfig>, storage: Box<dyn Storage>) -> Self {
        let states = load_json_or_default(storage.as_ref(), SHOP_DATA_KEY);
        Self {
            catalog,
            shops: shops.into_iter().map(|s| (s.id.clone(), s)).collect(),
            states,
            storage,
        }
    }

    pub fn with_builtin_shops(catalog: Arc<Catalog>, storage: Box<dyn Storage>) -> Self {
        Self::new(catalog, builtin_shops(), storage)
    }

    pub fn shop(&self, shop_id: &str) -> Option<&ShopConfig> {
        self.shops.get(shop_id)
    }

    /// Current listings, refreshing or pruning first if their time is up.
    pub fn stock(&mut self, shop_id: &str, now_ms: i64, rng: &mut impl Rng) -> Option<ShopStock> {
        self.sync(shop_id, now_ms, rng).ok()?;
        self.states.get(shop_id).map(|state| ShopStock {
            items: state.current_items.clone(),
            special_items: state.current_special_items.clone(),
        })
    }

    /// Reset a shop to its configured listings right away.
    pub fn refresh(&mut self, shop_id: &str, now_ms: i64, rng: &mut impl Rng) -> bool {
        let Some(config) = self.shops.get(shop_id) else {
            warn!(shop_id, "unknown shop");
            return false;
        };
        let state = fresh_state(config, now_ms, rng);
        self.states.insert(shop_id.to_string(), state);
        self.persist();
        true
    }

    /// Milliseconds until the regular stock resets, zero if overdue.
    pub fn time_until_refresh(&self, shop_id: &str, now_ms: i64) -> Option<i64> {
        let config = self.shops.get(shop_id)?;
        let last = self.states.get(shop_id).map_or(now_ms, |s| s.last_refresh);
        let next = last.saturating_add(config.refresh_interval_ms);
        Some(next.saturating_sub(now_ms).max(0))
    }

    /// Buy one unit. Gold is the caller's business; the price paid is reported
    /// alongside the freshly minted equipment.
    pub fn try_buy(
        &mut self,
        shop_id: &str,
        item_id: &str,
        player_level: u32,
        now_ms: i64,
        rng: &mut impl Rng,
    ) -> Result<Purchase, ForgeError> {
        self.sync(shop_id, now_ms, rng)?;
        let state = self
            .states
            .get_mut(shop_id)
            .ok_or_else(|| ForgeError::UnknownShop(shop_id.to_string()))?;

        let listing = state
            .current_items
            .iter_mut()
            .chain(state.current_special_items.iter_mut())
            .find(|i| i.item_id == item_id)
            .ok_or_else(|| ForgeError::UnknownShopItem {
                shop_id: shop_id.to_string(),
                item_id: item_id.to_string(),
            })?;

        if listing.stock == 0 {
            return Err(ForgeError::OutOfStock(item_id.to_string()));
        }
        if let Some(required) = listing.level_requirement {
            if player_level < required {
                return Err(ForgeError::LevelTooLow {
                    required,
                    actual: player_level,
                });
            }
        }
        let equipment = self
            .catalog
            .create_equipment(item_id)
            .ok_or_else(|| ForgeError::UnknownTemplate(item_id.to_string()))?;

        listing.stock -= 1;
        let price = listing.price;
        debug!(shop_id, item_id, price, remaining = listing.stock, "item purchased");
        self.persist();

        Ok(Purchase { equipment, price })
    }

    pub fn buy_item(
        &mut self,
        shop_id: &str,
        item_id: &str,
        player_level: u32,
        now_ms: i64,
        rng: &mut impl Rng,
    ) -> Option<Equipment> {
        match self.try_buy(shop_id, item_id, player_level, now_ms, rng) {
            Ok(purchase) => Some(purchase.equipment),
            Err(err) => {
                debug!(shop_id, item_id, error = %err, "purchase rejected");
                None
            }
        }
    }

    pub fn into_storage(self) -> Box<dyn Storage> {
        self.storage
    }

    fn sync(&mut self, shop_id: &str, now_ms: i64, rng: &mut impl Rng) -> Result<(), ForgeError> {
        let Some(config) = self.shops.get(shop_id) else {
            warn!(shop_id, "unknown shop");
            return Err(ForgeError::UnknownShop(shop_id.to_string()));
        };

        let mut changed = false;
        let state = self.states.entry(shop_id.to_string()).or_insert_with(|| {
            changed = true;
            fresh_state(config, now_ms, rng)
        });

        // Persisted timestamps are untrusted; saturate instead of overflowing.
        if now_ms.saturating_sub(state.last_refresh) > config.refresh_interval_ms {
            info!(shop_id, "restocking shop");
            *state = fresh_state(config, now_ms, rng);
            changed = true;
        }

        let before = state.current_special_items.len();
        state.current_special_items.retain(|i| !i.expired(now_ms));
        if state.current_special_items.len() != before {
            let expired = before - state.current_special_items.len();
            debug!(shop_id, expired, "limited offers expired");
            changed = true;
        }

        if changed {
            self.persist();
        }
        Ok(())
    }

    fn persist(&mut self) {
        if let Err(err) = save_json(self.storage.as_mut(), SHOP_DATA_KEY, &self.states) {
            warn!(error = %err, "failed to persist shop data");
        }
    }
}

/// Wall-clock epoch milliseconds, for callers without a game clock of their own.
pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

fn fresh_state(config: &ShopConfig, now_ms: i64, rng: &mut impl Rng) -> ShopState {
    ShopState {
        last_refresh: now_ms,
        current_items: config.items.iter().map(|i| restock(i, now_ms, rng)).collect(),
        current_special_items: config
            .special_items
            .iter()
            .map(|i| restock(i, now_ms, rng))
            .collect(),
    }
}

fn restock(template: &ShopItem, now_ms: i64, rng: &mut impl Rng) -> ShopItem {
    let mut item = template.clone();
    item.stock = template.max_stock;
    item.price = varied_price(template, rng);
    item.refresh_time = template.refresh_window_ms.map(|w| now_ms.saturating_add(w));
    item
}

/// Base price shifted by up to ±5% per rarity tier.
pub fn varied_price(item: &ShopItem, rng: &mut impl Rng) -> u64 {
    let variance = SHOP_PRICE_VARIANCE_PER_TIER * f64::from(item.rarity.tier());
    let factor = 1.0 + rng.gen_range(-variance..=variance);
    ((item.base_price as f64 * factor).round() as u64).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::MS_PER_HOUR;
    use crate::items::types::Quality;
    use crate::utils::persistence::MemoryStorage;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const T0: i64 = 1_700_000_000_000;

    fn manager() -> ShopManager {
        ShopManager::with_builtin_shops(
            Arc::new(Catalog::builtin()),
            Box::new(MemoryStorage::new()),
        )
    }

    #[test]
    fn test_varied_price_within_band() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let item = ShopItem::listing("ironSword", 1000, 1, Quality::Rare);
        for _ in 0..200 {
            let price = varied_price(&item, &mut rng);
            assert!((850..=1150).contains(&price), "price {price}");
        }
    }

    #[test]
    fn test_unknown_shop_has_no_stock() {
        let mut m = manager();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(m.stock("tavern", T0, &mut rng).is_none());
        assert_eq!(
            m.try_buy("tavern", "ironSword", 99, T0, &mut rng).unwrap_err(),
            ForgeError::UnknownShop("tavern".to_string())
        );
    }

    #[test]
    fn test_initial_stock_matches_config() {
        let mut m = manager();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let stock = m.stock("jeweler", T0, &mut rng).unwrap();
        assert_eq!(stock.items.len(), 3);
        assert_eq!(stock.special_items.len(), 2);
        assert!(stock.items.iter().all(|i| i.stock == i.max_stock));
        assert_eq!(stock.special_items[0].refresh_time, Some(T0 + 2 * MS_PER_HOUR));
    }

    #[test]
    fn test_time_until_refresh() {
        let mut m = manager();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        m.stock("blacksmith", T0, &mut rng);
        assert_eq!(m.time_until_refresh("blacksmith", T0 + 1000), Some(MS_PER_HOUR - 1000));
        assert_eq!(m.time_until_refresh("blacksmith", T0 + 2 * MS_PER_HOUR), Some(0));
        assert_eq!(m.time_until_refresh("tavern", T0), None);
    }

    #[test]
    fn test_level_gate() {
        let mut m = manager();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let err = m.try_buy("blacksmith", "steelBlade", 9, T0, &mut rng).unwrap_err();
        assert_eq!(
            err,
            ForgeError::LevelTooLow {
                required: 10,
                actual: 9,
            }
        );
        assert!(m.try_buy("blacksmith", "steelBlade", 10, T0, &mut rng).is_ok());
    }
}
