use crate::items::types::{Equipment, Quality};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopItem {
    pub item_id: String,
    pub base_price: u64,
    /// Price for the current refresh window, varied around `base_price` by rarity.
    pub price: u64,
    pub stock: u32,
    pub max_stock: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level_requirement: Option<u32>,
    /// How long a limited offer stays listed after each restock.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_window_ms: Option<i64>,
    /// Epoch ms at which a limited offer disappears.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_time: Option<i64>,
    pub rarity: Quality,
}

impl ShopItem {
    pub fn listing(item_id: &str, base_price: u64, max_stock: u32, rarity: Quality) -> Self {
        Self {
            item_id: item_id.to_string(),
            base_price,
            price: base_price,
            stock: max_stock,
            max_stock,
            level_requirement: None,
            refresh_window_ms: None,
            refresh_time: None,
            rarity,
        }
    }

    pub fn with_level(mut self, level: u32) -> Self {
        self.level_requirement = Some(level);
        self
    }

    pub fn with_window(mut self, window_ms: i64) -> Self {
        self.refresh_window_ms = Some(window_ms);
        self
    }

    pub fn expired(&self, now_ms: i64) -> bool {
        self.refresh_time.is_some_and(|t| now_ms >= t)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopConfig {
    pub id: String,
    pub name: String,
    pub refresh_interval_ms: i64,
    pub items: Vec<ShopItem>,
    #[serde(default)]
    pub special_items: Vec<ShopItem>,
}

/// Live stock of one shop, persisted between sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopState {
    pub last_refresh: i64,
    pub current_items: Vec<ShopItem>,
    #[serde(default)]
    pub current_special_items: Vec<ShopItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShopStock {
    pub items: Vec<ShopItem>,
    pub special_items: Vec<ShopItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Purchase {
    pub equipment: Equipment,
    pub price: u64,
}
