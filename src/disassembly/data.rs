//! Salvage yields per equipment quality.

use super::types::DisassembleRule;
use crate::items::types::Quality;
use std::collections::HashMap;

pub fn builtin_disassemble_rules() -> HashMap<Quality, Vec<DisassembleRule>> {
    HashMap::from([
        (
            Quality::Common,
            vec![
                DisassembleRule::new("ironScrap", 1.0, 1, 3),
                DisassembleRule::new("magicDust", 0.3, 1, 1),
            ],
        ),
        (
            Quality::Uncommon,
            vec![
                DisassembleRule::new("ironScrap", 1.0, 2, 4),
                DisassembleRule::new("magicDust", 0.6, 1, 2),
                DisassembleRule::new("mithrilOre", 0.2, 1, 1),
            ],
        ),
        (
            Quality::Rare,
            vec![
                DisassembleRule::new("mithrilOre", 1.0, 1, 3),
                DisassembleRule::new("magicDust", 1.0, 2, 3),
                DisassembleRule::new("arcaneCrystal", 0.4, 1, 2),
            ],
        ),
        (
            Quality::Epic,
            vec![
                DisassembleRule::new("arcaneCrystal", 1.0, 1, 3),
                DisassembleRule::new("mithrilOre", 0.8, 2, 4),
                DisassembleRule::new("dragonScale", 0.3, 1, 1),
            ],
        ),
        (
            Quality::Legendary,
            vec![
                DisassembleRule::new("dragonScale", 1.0, 1, 2),
                DisassembleRule::new("arcaneCrystal", 1.0, 2, 4),
                DisassembleRule::new("soulGem", 0.4, 1, 1),
            ],
        ),
    ])
}
