//! Shipped drop tables.

use super::types::{DropEntry, DropTable};

pub fn builtin_drop_tables() -> Vec<DropTable> {
    vec![
        DropTable {
            guaranteed_drops: vec![DropEntry::new("slimeGel", 1.0, 1, 1)],
            drops: vec![DropEntry::new("woodenSword", 0.10, 1, 1)],
            ..DropTable::new("slime")
        },
        DropTable {
            first_kill_drops: vec![DropEntry::new("ironSword", 1.0, 1, 1)],
            drops: vec![
                DropEntry::new("woodenSword", 0.30, 1, 1),
                DropEntry::new("leatherCap", 0.20, 1, 1),
                DropEntry::new("sandals", 0.20, 1, 1),
                DropEntry::new("copperRing", 0.05, 1, 1),
            ],
            ..DropTable::new("goblin")
        },
        DropTable {
            drops: vec![
                DropEntry::new("clothTunic", 0.30, 1, 1),
                DropEntry::new("ironHelm", 0.15, 1, 1),
                DropEntry::new("ironSword", 0.10, 1, 1),
                DropEntry::new("silverRing", 0.05, 1, 1),
            ],
            ..DropTable::new("skeleton")
        },
        DropTable {
            first_kill_drops: vec![DropEntry::new("leatherArmor", 0.5, 1, 1)],
            drops: vec![
                DropEntry::new("leatherArmor", 0.25, 1, 1),
                DropEntry::new("leatherBoots", 0.25, 1, 1),
                DropEntry::new("oakStaff", 0.10, 1, 1),
                DropEntry::new("steelBlade", 0.05, 1, 1),
            ],
            level_requirement: Some(5),
            ..DropTable::new("orc")
        },
        DropTable {
            guaranteed_drops: vec![DropEntry::new("chainMail", 1.0, 1, 1)],
            first_kill_drops: vec![DropEntry::new("knightHelm", 1.0, 1, 1)],
            drops: vec![
                DropEntry::new("steelBlade", 0.20, 1, 1),
                DropEntry::new("ironGreaves", 0.20, 1, 1),
                DropEntry::new("jadeAmulet", 0.10, 1, 1),
                DropEntry::new("plateArmor", 0.03, 1, 1),
            ],
            level_requirement: Some(10),
            ..DropTable::new("darkKnight")
        },
        DropTable {
            guaranteed_drops: vec![DropEntry::new("mithrilSaber", 1.0, 1, 1)],
            first_kill_drops: vec![DropEntry::new("dragonFang", 1.0, 1, 1)],
            drops: vec![
                DropEntry::new("dragonscaleArmor", 0.10, 1, 1),
                DropEntry::new("phoenixPendant", 0.05, 1, 1),
                DropEntry::new("rubyRing", 0.15, 1, 2),
            ],
            level_requirement: Some(20),
            ..DropTable::new("dragon")
        },
    ]
}
