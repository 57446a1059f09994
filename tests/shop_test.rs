//! Shop stock manager tests: purchases, two refresh clocks, persistence.

use gearforge::core::constants::{MS_PER_HOUR, SHOP_DATA_KEY};
use gearforge::error::ForgeError;
use gearforge::items::catalog::Catalog;
use gearforge::items::types::Quality;
use gearforge::shop::{ShopConfig, ShopItem, ShopManager};
use gearforge::utils::persistence::{FileStorage, MemoryStorage, Storage};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde_json::json;
use std::sync::Arc;

const T0: i64 = 1_700_000_000_000;

fn manager() -> ShopManager {
    ShopManager::with_builtin_shops(Arc::new(Catalog::builtin()), Box::new(MemoryStorage::new()))
}

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(99)
}

fn stock_of(m: &mut ShopManager, shop: &str, item: &str, now: i64) -> Option<u32> {
    let stock = m.stock(shop, now, &mut rng())?;
    stock
        .items
        .iter()
        .chain(&stock.special_items)
        .find(|i| i.item_id == item)
        .map(|i| i.stock)
}

// =========================================================================
// Purchases
// =========================================================================

#[test]
fn test_purchase_decrements_only_that_listing() {
    let mut m = manager();
    let mut r = rng();

    let purchase = m.try_buy("blacksmith", "ironSword", 5, T0, &mut r).unwrap();
    assert_eq!(purchase.equipment.template_id, "ironSword");
    assert!(purchase.price > 0);

    assert_eq!(stock_of(&mut m, "blacksmith", "ironSword", T0), Some(2));
    assert_eq!(stock_of(&mut m, "blacksmith", "leatherArmor", T0), Some(3));
    assert_eq!(stock_of(&mut m, "blacksmith", "ironHelm", T0), Some(3));
}

#[test]
fn test_sold_out_listing_rejects_without_side_effects() {
    let mut m = manager();
    let mut r = rng();

    assert!(m.buy_item("blacksmith", "steelBlade", 10, T0, &mut r).is_some());
    let before = m.stock("blacksmith", T0, &mut r).unwrap();

    assert_eq!(
        m.try_buy("blacksmith", "steelBlade", 10, T0, &mut r).unwrap_err(),
        ForgeError::OutOfStock("steelBlade".to_string())
    );
    assert!(m.buy_item("blacksmith", "steelBlade", 10, T0, &mut r).is_none());
    assert_eq!(m.stock("blacksmith", T0, &mut r).unwrap(), before);
}

#[test]
fn test_each_purchase_is_a_fresh_instance() {
    let mut m = manager();
    let mut r = rng();
    let a = m.buy_item("blacksmith", "ironSword", 5, T0, &mut r).unwrap();
    let b = m.buy_item("blacksmith", "ironSword", 5, T0, &mut r).unwrap();
    assert_ne!(a.id, b.id);
    assert_eq!(a.enhance_level, 0);
}

#[test]
fn test_unlisted_item_and_level_gate() {
    let mut m = manager();
    let mut r = rng();

    assert_eq!(
        m.try_buy("blacksmith", "dragonFang", 99, T0, &mut r).unwrap_err(),
        ForgeError::UnknownShopItem {
            shop_id: "blacksmith".to_string(),
            item_id: "dragonFang".to_string(),
        }
    );
    assert_eq!(
        m.try_buy("jeweler", "rubyRing", 17, T0, &mut r).unwrap_err(),
        ForgeError::LevelTooLow {
            required: 18,
            actual: 17,
        }
    );
    assert_eq!(stock_of(&mut m, "jeweler", "rubyRing", T0), Some(1));
    assert!(m.buy_item("jeweler", "rubyRing", 18, T0, &mut r).is_some());
}

#[test]
fn test_listing_without_template_is_not_sold() {
    let shop = ShopConfig {
        id: "curio".to_string(),
        name: "Curio Cart".to_string(),
        refresh_interval_ms: MS_PER_HOUR,
        items: vec![ShopItem::listing("mysteryBox", 10, 2, Quality::Common)],
        special_items: vec![],
    };
    let mut m = ShopManager::new(
        Arc::new(Catalog::builtin()),
        vec![shop],
        Box::new(MemoryStorage::new()),
    );
    let mut r = rng();
    assert_eq!(
        m.try_buy("curio", "mysteryBox", 1, T0, &mut r).unwrap_err(),
        ForgeError::UnknownTemplate("mysteryBox".to_string())
    );
    assert_eq!(stock_of(&mut m, "curio", "mysteryBox", T0), Some(2));
}

// =========================================================================
// Refresh clocks
// =========================================================================

#[test]
fn test_regular_stock_resets_after_interval() {
    let mut m = manager();
    let mut r = rng();
    m.try_buy("blacksmith", "ironSword", 5, T0, &mut r).unwrap();

    // Exactly one interval later is not yet past it.
    assert_eq!(stock_of(&mut m, "blacksmith", "ironSword", T0 + MS_PER_HOUR), Some(2));
    assert_eq!(stock_of(&mut m, "blacksmith", "ironSword", T0 + MS_PER_HOUR + 1), Some(3));
    assert_eq!(m.time_until_refresh("blacksmith", T0 + MS_PER_HOUR + 1), Some(MS_PER_HOUR));
}

#[test]
fn test_limited_offers_expire_on_their_own_clock() {
    let mut m = manager();
    let mut r = rng();

    let opening = m.stock("jeweler", T0, &mut r).unwrap();
    assert_eq!(opening.special_items.len(), 2);

    // The pendant's one-hour window has passed; the ring has two hours.
    let later = m.stock("jeweler", T0 + MS_PER_HOUR, &mut r).unwrap();
    let ids: Vec<&str> = later.special_items.iter().map(|i| i.item_id.as_str()).collect();
    assert_eq!(ids, vec!["rubyRing"]);
    assert_eq!(later.items.len(), 3);

    let gone = m.stock("jeweler", T0 + 2 * MS_PER_HOUR, &mut r).unwrap();
    assert!(gone.special_items.is_empty());
    assert_eq!(
        m.try_buy("jeweler", "rubyRing", 30, T0 + 2 * MS_PER_HOUR, &mut r).unwrap_err(),
        ForgeError::UnknownShopItem {
            shop_id: "jeweler".to_string(),
            item_id: "rubyRing".to_string(),
        }
    );

    // The shop's own restock brings them back.
    let restocked = m.stock("jeweler", T0 + 6 * MS_PER_HOUR + 1, &mut r).unwrap();
    assert_eq!(restocked.special_items.len(), 2);
}

#[test]
fn test_forced_refresh() {
    let mut m = manager();
    let mut r = rng();
    m.try_buy("blacksmith", "ironSword", 5, T0, &mut r).unwrap();
    assert!(m.refresh("blacksmith", T0 + 10, &mut r));
    assert_eq!(stock_of(&mut m, "blacksmith", "ironSword", T0 + 10), Some(3));
    assert!(!m.refresh("tavern", T0, &mut r));
}

#[test]
fn test_prices_vary_within_rarity_band() {
    let mut m = manager();
    let mut r = rng();
    for hour in 0..20 {
        let now = T0 + hour * (MS_PER_HOUR + 1);
        let stock = m.stock("jeweler", now, &mut r).unwrap();
        for listing in stock.items.iter().chain(&stock.special_items) {
            let band = 0.05 * f64::from(listing.rarity.tier());
            let low = (listing.base_price as f64 * (1.0 - band)).floor() as u64;
            let high = (listing.base_price as f64 * (1.0 + band)).ceil() as u64;
            assert!(
                (low..=high).contains(&listing.price),
                "{} priced {} outside {low}..={high}",
                listing.item_id,
                listing.price
            );
        }
    }
}

// =========================================================================
// Persistence
// =========================================================================

#[test]
fn test_stock_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = Arc::new(Catalog::builtin());
    let mut r = rng();

    let mut m = ShopManager::with_builtin_shops(
        Arc::clone(&catalog),
        Box::new(FileStorage::new(dir.path())),
    );
    m.try_buy("blacksmith", "ironSword", 5, T0, &mut r).unwrap();
    drop(m);

    let mut reloaded =
        ShopManager::with_builtin_shops(catalog, Box::new(FileStorage::new(dir.path())));
    assert_eq!(stock_of(&mut reloaded, "blacksmith", "ironSword", T0 + 1000), Some(2));
    assert_eq!(
        reloaded.time_until_refresh("blacksmith", T0 + 1000),
        Some(MS_PER_HOUR - 1000)
    );
}

#[test]
fn test_persisted_shape_uses_camel_case() {
    let mut m = manager();
    let mut r = rng();
    m.stock("jeweler", T0, &mut r);
    let json = m.into_storage().get(SHOP_DATA_KEY).unwrap();
    assert!(json.contains("lastRefresh"));
    assert!(json.contains("currentSpecialItems"));
    assert!(json.contains("refreshTime"));
}

#[test]
fn test_corrupt_shop_data_starts_fresh() {
    let mut storage = MemoryStorage::new();
    storage.set(SHOP_DATA_KEY, "[1, 2, oops").unwrap();
    let mut m = ShopManager::with_builtin_shops(Arc::new(Catalog::builtin()), Box::new(storage));
    assert_eq!(stock_of(&mut m, "blacksmith", "ironSword", T0), Some(3));
}

#[test]
fn test_out_of_range_timestamps_restock_normally() {
    let mut storage = MemoryStorage::new();
    let saved = json!({
        "blacksmith": {
            "lastRefresh": i64::MIN,
            "currentItems": [],
            "currentSpecialItems": []
        }
    });
    storage.set(SHOP_DATA_KEY, &saved.to_string()).unwrap();
    let mut m = ShopManager::with_builtin_shops(Arc::new(Catalog::builtin()), Box::new(storage));

    assert_eq!(stock_of(&mut m, "blacksmith", "ironSword", T0), Some(3));
    assert_eq!(m.time_until_refresh("blacksmith", T0), Some(MS_PER_HOUR));
}

#[test]
fn test_far_future_refresh_does_not_overflow() {
    let mut storage = MemoryStorage::new();
    let saved = json!({
        "blacksmith": {
            "lastRefresh": i64::MAX,
            "currentItems": [],
            "currentSpecialItems": []
        }
    });
    storage.set(SHOP_DATA_KEY, &saved.to_string()).unwrap();
    let m = ShopManager::with_builtin_shops(Arc::new(Catalog::builtin()), Box::new(storage));

    assert_eq!(m.time_until_refresh("blacksmith", i64::MIN), Some(i64::MAX));
}
