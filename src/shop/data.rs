//! Shipped shops.

use super::types::{ShopConfig, ShopItem};
use crate::core::constants::MS_PER_HOUR;
use crate::items::types::Quality;

pub fn builtin_shops() -> Vec<ShopConfig> {
    vec![
        ShopConfig {
            id: "blacksmith".to_string(),
            name: "Blacksmith".to_string(),
            refresh_interval_ms: MS_PER_HOUR,
            items: vec![
                ShopItem::listing("ironSword", 200, 3, Quality::Uncommon),
                ShopItem::listing("leatherArmor", 150, 3, Quality::Uncommon),
                ShopItem::listing("ironHelm", 120, 3, Quality::Uncommon),
                ShopItem::listing("leatherBoots", 100, 3, Quality::Uncommon),
                ShopItem::listing("steelBlade", 900, 1, Quality::Rare).with_level(10),
            ],
            special_items: vec![],
        },
        ShopConfig {
            id: "jeweler".to_string(),
            name: "Jeweler".to_string(),
            refresh_interval_ms: 6 * MS_PER_HOUR,
            items: vec![
                ShopItem::listing("copperRing", 60, 5, Quality::Common),
                ShopItem::listing("silverRing", 250, 2, Quality::Uncommon),
                ShopItem::listing("jadeAmulet", 800, 1, Quality::Rare).with_level(10),
            ],
            special_items: vec![
                ShopItem::listing("rubyRing", 3000, 1, Quality::Epic)
                    .with_level(18)
                    .with_window(2 * MS_PER_HOUR),
                ShopItem::listing("phoenixPendant", 12000, 1, Quality::Legendary)
                    .with_level(25)
                    .with_window(MS_PER_HOUR),
            ],
        },
    ]
}
