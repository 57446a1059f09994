use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EquipmentSlot {
    Weapon,
    Armor,
    Helmet,
    Boots,
    Ring,
    Necklace,
}

impl EquipmentSlot {
    pub const ALL: [EquipmentSlot; 6] = [
        EquipmentSlot::Weapon,
        EquipmentSlot::Armor,
        EquipmentSlot::Helmet,
        EquipmentSlot::Boots,
        EquipmentSlot::Ring,
        EquipmentSlot::Necklace,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            EquipmentSlot::Weapon => "Weapon",
            EquipmentSlot::Armor => "Armor",
            EquipmentSlot::Helmet => "Helmet",
            EquipmentSlot::Boots => "Boots",
            EquipmentSlot::Ring => "Ring",
            EquipmentSlot::Necklace => "Necklace",
        }
    }
}

/// Quality tier 1-5. Only ever raised, by the upgrade engine.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(into = "u8", try_from = "u8")]
pub enum Quality {
    Common = 1,
    Uncommon = 2,
    Rare = 3,
    Epic = 4,
    Legendary = 5,
}

impl Quality {
    pub const ALL: [Quality; 5] = [
        Quality::Common,
        Quality::Uncommon,
        Quality::Rare,
        Quality::Epic,
        Quality::Legendary,
    ];

    pub fn tier(&self) -> u8 {
        *self as u8
    }

    pub fn from_tier(tier: u8) -> Option<Quality> {
        match tier {
            1 => Some(Quality::Common),
            2 => Some(Quality::Uncommon),
            3 => Some(Quality::Rare),
            4 => Some(Quality::Epic),
            5 => Some(Quality::Legendary),
            _ => None,
        }
    }

    /// Next tier up, saturating at Legendary.
    pub fn next(&self) -> Quality {
        Quality::from_tier(self.tier() + 1).unwrap_or(Quality::Legendary)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Quality::Common => "Common",
            Quality::Uncommon => "Uncommon",
            Quality::Rare => "Rare",
            Quality::Epic => "Epic",
            Quality::Legendary => "Legendary",
        }
    }
}

impl From<Quality> for u8 {
    fn from(quality: Quality) -> u8 {
        quality.tier()
    }
}

impl TryFrom<u8> for Quality {
    type Error = String;

    fn try_from(tier: u8) -> Result<Self, Self::Error> {
        Quality::from_tier(tier).ok_or_else(|| format!("quality tier out of range: {tier}"))
    }
}

/// Stat bundle. `None` means the stat does not apply to the item at all,
/// which is different from `Some(0)`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attack: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defense: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hp: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mp: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crit_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crit_damage: Option<f64>,
}

impl Stats {
    pub fn is_empty(&self) -> bool {
        self.attack.is_none()
            && self.defense.is_none()
            && self.hp.is_none()
            && self.mp.is_none()
            && self.crit_rate.is_none()
            && self.crit_damage.is_none()
    }

    /// Adds `delta` onto the fields this bundle already has. Fields absent
    /// here stay absent even if `delta` carries them.
    pub fn add_present(&self, delta: &Stats) -> Stats {
        fn add_u32(base: Option<u32>, delta: Option<u32>) -> Option<u32> {
            base.map(|b| b.saturating_add(delta.unwrap_or(0)))
        }
        fn add_f64(base: Option<f64>, delta: Option<f64>) -> Option<f64> {
            base.map(|b| b + delta.unwrap_or(0.0))
        }
        Stats {
            attack: add_u32(self.attack, delta.attack),
            defense: add_u32(self.defense, delta.defense),
            hp: add_u32(self.hp, delta.hp),
            mp: add_u32(self.mp, delta.mp),
            crit_rate: add_f64(self.crit_rate, delta.crit_rate),
            crit_damage: add_f64(self.crit_damage, delta.crit_damage),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EffectKind {
    Passive,
    Active,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Trigger {
    OnHit,
    OnDamaged,
    OnKill,
    OnHeal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentEffect {
    pub kind: EffectKind,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger: Option<Trigger>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooldown: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<Stats>,
}

/// A concrete piece of gear. Engines never modify one in place; every
/// transformation hands back a new value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    pub id: String,
    pub template_id: String,
    pub name: String,
    pub description: String,
    pub slot: EquipmentSlot,
    pub icon: String,
    pub stats: Stats,
    pub quality: Quality,
    pub enhance_level: u8,
    #[serde(default)]
    pub level_requirement: u32,
    #[serde(default)]
    pub effects: Vec<EquipmentEffect>,
}

impl Equipment {
    /// Base stats scaled by the cumulative enhancement bonus.
    pub fn effective_stats(&self) -> Stats {
        let mult = crate::enhancement::enhancement_multiplier(self.enhance_level);
        let scale = |v: Option<u32>| v.map(|v| (v as f64 * mult).floor() as u32);
        Stats {
            attack: scale(self.stats.attack),
            defense: scale(self.stats.defense),
            hp: scale(self.stats.hp),
            mp: scale(self.stats.mp),
            crit_rate: self.stats.crit_rate,
            crit_damage: self.stats.crit_damage,
        }
    }

    /// Name with the enhancement prefix, e.g. "+3 Iron Sword".
    pub fn display_name(&self) -> String {
        format!(
            "{}{}",
            crate::enhancement::enhancement_prefix(self.enhance_level),
            self.name
        )
    }
}
