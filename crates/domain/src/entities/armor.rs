//! Armor entity
//!
//! Worn protection. The armor block mirrors the actor combat block's
//! `{ value, type }` shape, with the item-side kind restricted to the four
//! armor classes.

use serde::{Deserialize, Serialize};

use crate::error::SchemaValidationError;
use crate::ids::{ActorId, ItemId};
use crate::schema::{check_min, check_min_f64, EntityModel, EntitySchema, SchemaField};
use crate::value_objects::{requirements_schema, Rarity, Requirements};

/// Armor weight class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArmorKind {
    #[default]
    Light,
    Medium,
    Heavy,
    Shield,
}

impl ArmorKind {
    pub const CHOICES: &'static [&'static str] = &["light", "medium", "heavy", "shield"];
}

/// Protection granted by the item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArmorBlock {
    pub value: i32,
    #[serde(rename = "type")]
    pub kind: ArmorKind,
}

impl Default for ArmorBlock {
    fn default() -> Self {
        Self {
            value: 10,
            kind: ArmorKind::Light,
        }
    }
}

/// An armor record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Armor {
    pub id: ItemId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<ActorId>,
    pub description: String,
    pub quantity: i32,
    pub weight: f64,
    pub rarity: Rarity,
    pub equipped: bool,
    pub identified: bool,
    pub armor: ArmorBlock,
    pub requirements: Requirements,
}

impl Default for Armor {
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
            armor: ArmorBlock::default(),
            requirements: Requirements::default(),
        }
    }
}

impl Armor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rarity_color(&self) -> &'static str {
        self.rarity.color()
    }
}

impl EntityModel for Armor {
    const KIND: &'static str = "armor";

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
                SchemaField::object(
                    "armor",
                    vec![
                        SchemaField::integer("value").min(0).default(10),
                        SchemaField::select("type", ArmorKind::CHOICES).default("light"),
                    ],
                ),
                requirements_schema(),
            ],
        )
    }

    fn validate(&self) -> Result<(), SchemaValidationError> {
        check_min("quantity", self.quantity, 0)?;
        check_min_f64("weight", self.weight, 0.0)?;
        check_min("armor.value", self.armor.value, 0)?;
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
        let armor = Armor::from_value(json!({})).expect("defaults validate");
        assert_eq!(armor.armor.value, 10);
        assert_eq!(armor.armor.kind, ArmorKind::Light);
        assert!(!armor.equipped);
    }

    #[test]
    fn kind_uses_type_key() {
        let armor = Armor::from_value(json!({ "armor": { "value": 14, "type": "heavy" } }))
            .expect("parse");
        assert_eq!(armor.armor.kind, ArmorKind::Heavy);
        let json = serde_json::to_value(&armor).expect("serialize");
        assert_eq!(json["armor"]["type"], "heavy");
    }

    #[test]
    fn validation_rejects_negative_armor_value() {
        let err = Armor::from_value(json!({ "armor": { "value": -1 } })).unwrap_err();
        assert_eq!(err.path(), Some("armor.value"));
    }

    #[test]
    fn validation_rejects_unknown_kind() {
        assert!(Armor::from_value(json!({ "armor": { "type": "plate" } })).is_err());
    }
}
