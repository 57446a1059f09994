//! Material stacks and the bookkeeping helpers the game-state store uses to
//! apply engine outputs.

use super::catalog::MaterialDef;
use crate::error::ForgeError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialStack {
    pub material: MaterialDef,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialRequirement {
    pub material_id: String,
    pub quantity: u32,
}

impl MaterialRequirement {
    pub fn new(material_id: &str, quantity: u32) -> Self {
        Self {
            material_id: material_id.to_string(),
            quantity,
        }
    }
}

/// Total quantity of `material_id` across all stacks.
pub fn material_count(stacks: &[MaterialStack], material_id: &str) -> u32 {
    stacks
        .iter()
        .filter(|s| s.material.id == material_id)
        .map(|s| s.quantity)
        .sum()
}

/// Requirements merged per material, in first-seen order.
fn totals(requirements: &[MaterialRequirement]) -> Vec<(&str, u32)> {
    let mut totals: Vec<(&str, u32)> = Vec::new();
    for req in requirements {
        match totals.iter_mut().find(|(id, _)| *id == req.material_id) {
            Some((_, qty)) => *qty = qty.saturating_add(req.quantity),
            None => totals.push((req.material_id.as_str(), req.quantity)),
        }
    }
    totals
}

/// First material the stacks cannot cover, if any. Repeated ids in
/// `requirements` count against the same stock.
pub fn check_materials(
    stacks: &[MaterialStack],
    requirements: &[MaterialRequirement],
) -> Result<(), ForgeError> {
    for (material_id, required) in totals(requirements) {
        let available = material_count(stacks, material_id);
        if available < required {
            return Err(ForgeError::InsufficientMaterials {
                material_id: material_id.to_string(),
                required,
                available,
            });
        }
    }
    Ok(())
}

pub fn has_materials(stacks: &[MaterialStack], requirements: &[MaterialRequirement]) -> bool {
    check_materials(stacks, requirements).is_ok()
}

/// Remove the required quantities. Nothing is taken unless every requirement
/// is covered. Stacks that reach zero are dropped from the list.
pub fn consume_materials(
    stacks: &mut Vec<MaterialStack>,
    requirements: &[MaterialRequirement],
) -> Result<(), ForgeError> {
    check_materials(stacks, requirements)?;
    for (material_id, required) in totals(requirements) {
        let mut remaining = required;
        for stack in stacks.iter_mut().filter(|s| s.material.id == material_id) {
            let taken = remaining.min(stack.quantity);
            stack.quantity -= taken;
            remaining -= taken;
            if remaining == 0 {
                break;
            }
        }
    }
    stacks.retain(|s| s.quantity > 0);
    Ok(())
}

/// Add `quantity` of a material, topping up existing stacks before opening
/// new ones at the material's stack limit.
pub fn add_material(stacks: &mut Vec<MaterialStack>, material: &MaterialDef, quantity: u32) {
    let limit = material.stack_limit.max(1);
    let mut remaining = quantity;
    for stack in stacks.iter_mut().filter(|s| s.material.id == material.id) {
        if remaining == 0 {
            break;
        }
        let room = limit.saturating_sub(stack.quantity);
        let added = room.min(remaining);
        stack.quantity += added;
        remaining -= added;
    }
    while remaining > 0 {
        let added = remaining.min(limit);
        stacks.push(MaterialStack {
            material: material.clone(),
            quantity: added,
        });
        remaining -= added;
    }
}
