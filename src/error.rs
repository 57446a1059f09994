//! Error type for rejected progression operations.

use crate::items::types::{EquipmentSlot, Quality};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ForgeError {
    #[error("no drop table for enemy `{0}`")]
    UnknownEnemy(String),

    #[error("no equipment template `{0}`")]
    UnknownTemplate(String),

    #[error("no material `{0}`")]
    UnknownMaterial(String),

    #[error("no enchant recipe `{0}`")]
    UnknownEnchant(String),

    #[error("no upgrade recipe `{0}`")]
    UnknownUpgrade(String),

    #[error("no shop `{0}`")]
    UnknownShop(String),

    #[error("shop `{shop_id}` does not list `{item_id}`")]
    UnknownShopItem { shop_id: String, item_id: String },

    #[error("`{recipe_id}` cannot be applied to a {slot:?}")]
    IncompatibleSlot {
        recipe_id: String,
        slot: EquipmentSlot,
    },

    #[error(
        "`{recipe_id}` requires {required_quality:?} quality and +{required_enhance} enhancement"
    )]
    RequirementsNotMet {
        recipe_id: String,
        required_quality: Quality,
        required_enhance: u8,
    },

    #[error("need {required} x `{material_id}`, have {available}")]
    InsufficientMaterials {
        material_id: String,
        required: u32,
        available: u32,
    },

    #[error("need {required} gold, have {available}")]
    InsufficientGold { required: u64, available: u64 },

    #[error("the roll failed")]
    RollFailed,

    #[error("`{0}` is out of stock")]
    OutOfStock(String),

    #[error("requires level {required}, player is level {actual}")]
    LevelTooLow { required: u32, actual: u32 },

    #[error("already at maximum enhancement +{0}")]
    MaxEnhanceLevel(u8),

    #[error("invalid configuration: {0}")]
    Config(String),
}
