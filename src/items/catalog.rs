//! Read-only reference data: equipment templates and materials.

use super::data::{builtin_materials, builtin_templates};
use super::types::{Equipment, EquipmentSlot, Quality, Stats};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentTemplate {
    pub id: String,
    pub name: String,
    pub description: String,
    pub slot: EquipmentSlot,
    pub icon: String,
    pub stats: Stats,
    pub quality: Quality,
    #[serde(default)]
    pub level_requirement: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialDef {
    pub id: String,
    pub name: String,
    pub description: String,
    pub quality: Quality,
    pub stack_limit: u32,
    pub icon: String,
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    templates: HashMap<String, EquipmentTemplate>,
    materials: HashMap<String, MaterialDef>,
}

impl Catalog {
    pub fn new(templates: Vec<EquipmentTemplate>, materials: Vec<MaterialDef>) -> Self {
        Self {
            templates: templates.into_iter().map(|t| (t.id.clone(), t)).collect(),
            materials: materials.into_iter().map(|m| (m.id.clone(), m)).collect(),
        }
    }

    /// The game's shipped templates and materials.
    pub fn builtin() -> Self {
        Self::new(builtin_templates(), builtin_materials())
    }

    pub fn equipment_template(&self, id: &str) -> Option<&EquipmentTemplate> {
        self.templates.get(id)
    }

    pub fn material(&self, id: &str) -> Option<&MaterialDef> {
        self.materials.get(id)
    }

    pub fn templates(&self) -> impl Iterator<Item = &EquipmentTemplate> {
        self.templates.values()
    }

    pub fn materials(&self) -> impl Iterator<Item = &MaterialDef> {
        self.materials.values()
    }

    /// Mint a fresh instance of a template: new id, +0, no effects.
    pub fn create_equipment(&self, template_id: &str) -> Option<Equipment> {
        let Some(template) = self.equipment_template(template_id) else {
            warn!(template_id, "unknown equipment template");
            return None;
        };
        Some(Equipment {
            id: Uuid::new_v4().to_string(),
            template_id: template.id.clone(),
            name: template.name.clone(),
            description: template.description.clone(),
            slot: template.slot,
            icon: template.icon.clone(),
            stats: template.stats.clone(),
            quality: template.quality,
            enhance_level: 0,
            level_requirement: template.level_requirement,
            effects: Vec::new(),
        })
    }
}
