//! Equipment entity - accessories (rings, necklaces, trinkets)
//!
//! Equipment grants passive attribute bonuses and resistances while worn in
//! one of the accessory slots.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::SchemaValidationError;
use crate::ids::{ActorId, ItemId};
use crate::schema::{check_min, check_min_f64, EntityModel, EntitySchema, FieldKind, SchemaField};
use crate::value_objects::{requirements_schema, AttributeName, Rarity, Requirements};

/// Accessory slot the item is worn in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EquipSlot {
    #[default]
    None,
    Ring,
    Necklace,
    Trinket,
    Back,
    Hands,
    Feet,
}

impl EquipSlot {
    pub const CHOICES: &'static [&'static str] =
        &["none", "ring", "necklace", "trinket", "back", "hands", "feet"];
}

/// Passive bonuses granted while equipped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EquipmentBonuses {
    /// Flat attribute bonuses; missing attributes grant nothing.
    pub attributes: HashMap<AttributeName, i32>,
    pub resistances: Vec<String>,
}

/// An equipment record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Equipment {
    pub id: ItemId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<ActorId>,
    pub description: String,
    pub quantity: i32,
    pub weight: f64,
    pub rarity: Rarity,
    pub equipped: bool,
    pub identified: bool,
    pub slot: EquipSlot,
    pub bonuses: EquipmentBonuses,
    pub requirements: Requirements,
}

impl Default for Equipment {
    fn default() -> Self {
        Self {
            id: ItemId::new(),
            owner: None,
            description: String::new(),
            quantity: 1,
            weight: 0.0,
            rarity: Rarity::Common,
            equipped: false,
            identified: true,
            slot: EquipSlot::None,
            bonuses: EquipmentBonuses::default(),
            requirements: Requirements::default(),
        }
    }
}

impl Equipment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rarity_color(&self) -> &'static str {
        self.rarity.color()
    }
}

impl EntityModel for Equipment {
    const KIND: &'static str = "equipment";

    fn schema() -> EntitySchema {
        EntitySchema::new(
            Self::KIND,
            vec![
                SchemaField::id("id"),
                SchemaField::id("owner").optional().nullable(),
                SchemaField::text("description"),
                SchemaField::integer("quantity").min(0).default(1),
                SchemaField::number("weight").min(0).default(0),
                SchemaField::select("rarity", Rarity::CHOICES).default("common"),
                SchemaField::boolean("equipped", false),
                SchemaField::boolean("identified", true),
                SchemaField::select("slot", EquipSlot::CHOICES).default("none"),
                SchemaField::object(
                    "bonuses",
                    vec![
                        SchemaField::object("attributes", Vec::new()).optional(),
                        SchemaField::list("resistances", FieldKind::Text),
                    ],
                ),
                requirements_schema(),
            ],
        )
    }

    fn validate(&self) -> Result<(), SchemaValidationError> {
        check_min("quantity", self.quantity, 0)?;
        check_min_f64("weight", self.weight, 0.0)?;
        self.requirements.validate("requirements")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_validate() {
        let equipment = Equipment::from_value(json!({})).expect("defaults validate");
        assert_eq!(equipment.slot, EquipSlot::None);
        assert!(equipment.bonuses.attributes.is_empty());
    }

    #[test]
    fn bonuses_parse_by_attribute_name() {
        let equipment = Equipment::from_value(json!({
            "slot": "ring",
            "bonuses": { "attributes": { "charisma": 2 }, "resistances": ["fire"] }
        }))
        .expect("parse");
        assert_eq!(equipment.bonuses.attributes[&AttributeName::Charisma], 2);
        assert_eq!(equipment.bonuses.resistances, vec!["fire"]);
    }

    #[test]
    fn validation_rejects_unknown_slot() {
        assert!(Equipment::from_value(json!({ "slot": "head" })).is_err());
    }
}
