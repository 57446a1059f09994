// Quality tiers
pub const MIN_QUALITY_TIER: u8 = 1;
pub const MAX_QUALITY_TIER: u8 = 5;

// Enchanting: rate = max(floor, base * decay^effect_count)
pub const ENCHANT_RATE_DECAY: f64 = 0.8;
pub const ENCHANT_RATE_FLOOR: f64 = 0.05;

// Upgrading: rate = max(floor, base * decay^(quality - 1))
pub const UPGRADE_RATE_DECAY: f64 = 0.9;
pub const UPGRADE_RATE_FLOOR: f64 = 0.1;

// Enhancement
pub const MAX_ENHANCE_LEVEL: u8 = 10;
pub const ENHANCE_HIGH_TIER_LEVEL: u8 = 8;

// Disassembly value curve: 10^(material_quality - 1) per unit
pub const DISASSEMBLE_VALUE_BASE: u64 = 10;

// Shops
pub const SHOP_PRICE_VARIANCE_PER_TIER: f64 = 0.05;
pub const MS_PER_MINUTE: i64 = 60 * 1000;
pub const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;

// Persistence keys
pub const KILL_HISTORY_KEY: &str = "killHistory";
pub const SHOP_DATA_KEY: &str = "shopData";
pub const STORAGE_DIR_NAME: &str = ".gearforge";
