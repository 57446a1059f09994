use crate::items::catalog::MaterialDef;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisassembleRule {
    pub material_id: String,
    pub chance: f64,
    pub min_quantity: u32,
    pub max_quantity: u32,
}

impl DisassembleRule {
    pub fn new(material_id: &str, chance: f64, min_quantity: u32, max_quantity: u32) -> Self {
        Self {
            material_id: material_id.to_string(),
            chance,
            min_quantity,
            max_quantity,
        }
    }

    /// Floor of the midpoint, used by previews.
    pub fn average_quantity(&self) -> u32 {
        (self.min_quantity + self.max_quantity) / 2
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialYield {
    pub material: MaterialDef,
    pub quantity: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisassembleResult {
    pub materials: Vec<MaterialYield>,
}

impl DisassembleResult {
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    pub fn quantity_of(&self, material_id: &str) -> u32 {
        self.materials
            .iter()
            .filter(|m| m.material.id == material_id)
            .map(|m| m.quantity)
            .sum()
    }

    /// Fold another result in, summing quantities of materials already present.
    pub fn merge(&mut self, other: DisassembleResult) {
        for incoming in other.materials {
            match self
                .materials
                .iter_mut()
                .find(|m| m.material.id == incoming.material.id)
            {
                Some(existing) => existing.quantity += incoming.quantity,
                None => self.materials.push(incoming),
            }
        }
    }
}
