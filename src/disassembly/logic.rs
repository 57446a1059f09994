use super::data::builtin_disassemble_rules;
use super::types::{DisassembleResult, DisassembleRule, MaterialYield};
use crate::core::constants::DISASSEMBLE_VALUE_BASE;
use crate::core::rolls::{roll_chance, roll_quantity};
use crate::items::catalog::Catalog;
use crate::items::types::{Equipment, Quality};
use rand::Rng;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::warn;

/// Turns equipment into materials. Never touches the input item; removing it
/// from the inventory is the caller's job.
pub struct Disassembler {
    catalog: Arc<Catalog>,
    rules: HashMap<Quality, Vec<DisassembleRule>>,
}

impl Disassembler {
    pub fn new(catalog: Arc<Catalog>, rules: HashMap<Quality, Vec<DisassembleRule>>) -> Self {
        Self { catalog, rules }
    }

    pub fn with_builtin_rules(catalog: Arc<Catalog>) -> Self {
        Self::new(catalog, builtin_disassemble_rules())
    }

    pub fn rules_for(&self, quality: Quality) -> &[DisassembleRule] {
        self.rules.get(&quality).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Randomised salvage: each rule passes its chance check independently.
    pub fn disassemble(&self, equipment: &Equipment, rng: &mut impl Rng) -> DisassembleResult {
        let mut result = DisassembleResult::default();
        for rule in self.rules_for(equipment.quality) {
            if !roll_chance(rule.chance, rng) {
                continue;
            }
            let quantity = roll_quantity(rule.min_quantity, rule.max_quantity, rng);
            self.push_yield(&mut result, rule, quantity);
        }
        result
    }

    /// Deterministic expected yield: every rule shown at its average quantity,
    /// regardless of chance.
    pub fn preview_disassemble(&self, equipment: &Equipment) -> DisassembleResult {
        let mut result = DisassembleResult::default();
        for rule in self.rules_for(equipment.quality) {
            self.push_yield(&mut result, rule, rule.average_quantity());
        }
        result
    }

    pub fn disassemble_batch(&self, items: &[Equipment], rng: &mut impl Rng) -> DisassembleResult {
        let mut merged = DisassembleResult::default();
        for item in items {
            merged.merge(self.disassemble(item, rng));
        }
        merged
    }

    pub fn preview_disassemble_batch(&self, items: &[Equipment]) -> DisassembleResult {
        let mut merged = DisassembleResult::default();
        for item in items {
            merged.merge(self.preview_disassemble(item));
        }
        merged
    }

    /// Score of the previewed yield: `10^(material_quality - 1)` per unit.
    pub fn disassemble_value(&self, equipment: &Equipment) -> u64 {
        self.preview_disassemble(equipment)
            .materials
            .iter()
            .map(|m| material_unit_value(m.material.quality) * m.quantity as u64)
            .sum()
    }

    pub fn disassemble_batch_value(&self, items: &[Equipment]) -> u64 {
        items.iter().map(|item| self.disassemble_value(item)).sum()
    }

    fn push_yield(&self, result: &mut DisassembleResult, rule: &DisassembleRule, quantity: u32) {
        if quantity == 0 {
            return;
        }
        let Some(material) = self.catalog.material(&rule.material_id) else {
            warn!(material_id = %rule.material_id, "disassembly rule references unknown material");
            return;
        };
        result.merge(DisassembleResult {
            materials: vec![MaterialYield {
                material: material.clone(),
                quantity,
            }],
        });
    }
}

pub fn material_unit_value(quality: Quality) -> u64 {
    DISASSEMBLE_VALUE_BASE.pow(u32::from(quality.tier()) - 1)
}
