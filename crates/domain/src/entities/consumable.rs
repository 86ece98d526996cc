//! Consumable entity - potions, scrolls, rations
//!
//! Consumables track remaining uses instead of an equipped flag and carry an
//! opaque effect list the host interprets on use.

use serde::{Deserialize, Serialize};

use crate::error::SchemaValidationError;
use crate::ids::{ActorId, ItemId};
use crate::schema::{check_min, check_min_f64, EntityModel, EntitySchema, FieldKind, SchemaField};
use crate::value_objects::Rarity;

/// Kind of consumable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsumableKind {
    #[default]
    Potion,
    Scroll,
    Food,
    Other,
}

impl ConsumableKind {
    pub const CHOICES: &'static [&'static str] = &["potion", "scroll", "food", "other"];
}

/// Remaining-use meter. `auto_destroy` asks the host to delete the record
/// once the last use is spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Uses {
    pub value: i32,
    pub max: i32,
    pub auto_destroy: bool,
}

impl Default for Uses {
    fn default() -> Self {
        Self {
            value: 1,
            max: 1,
            auto_destroy: true,
        }
    }
}

/// A consumable record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Consumable {
    pub id: ItemId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<ActorId>,
    pub description: String,
    pub quantity: i32,
    pub weight: f64,
    pub rarity: Rarity,
    pub identified: bool,
    #[serde(rename = "consumableType")]
    pub kind: ConsumableKind,
    pub uses: Uses,
    /// Opaque effect descriptors, interpreted by the host on use.
    pub effects: Vec<serde_json::Value>,
}

impl Default for Consumable {
    fn default() -> Self {
        Self {
            id: ItemId::new(),
            owner: None,
            description: String::new(),
            quantity: 1,
            weight: 0.0,
            rarity: Rarity::Common,
            identified: true,
            kind: ConsumableKind::Potion,
            uses: Uses::default(),
            effects: Vec::new(),
        }
    }
}

impl Consumable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rarity_color(&self) -> &'static str {
        self.rarity.color()
    }
}

impl EntityModel for Consumable {
    const KIND: &'static str = "consumable";

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
                SchemaField::boolean("identified", true),
                SchemaField::select("consumableType", ConsumableKind::CHOICES).default("potion"),
                SchemaField::object(
                    "uses",
                    vec![
                        SchemaField::integer("value").min(0).default(1),
                        SchemaField::integer("max").min(1).default(1),
                        SchemaField::boolean("autoDestroy", true),
                    ],
                ),
                SchemaField::list("effects", FieldKind::Object { fields: Vec::new() }),
            ],
        )
    }

    fn validate(&self) -> Result<(), SchemaValidationError> {
        check_min("quantity", self.quantity, 0)?;
        check_min_f64("weight", self.weight, 0.0)?;
        check_min("uses.value", self.uses.value, 0)?;
        check_min("uses.max", self.uses.max, 1)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_are_a_single_use_potion() {
        let consumable = Consumable::from_value(json!({})).expect("defaults validate");
        assert_eq!(consumable.kind, ConsumableKind::Potion);
        assert_eq!(consumable.uses.value, 1);
        assert!(consumable.uses.auto_destroy);
    }

    #[test]
    fn kind_roundtrips_through_consumable_type_key() {
        let consumable =
            Consumable::from_value(json!({ "consumableType": "scroll" })).expect("parse");
        assert_eq!(consumable.kind, ConsumableKind::Scroll);
        let json = serde_json::to_value(&consumable).expect("serialize");
        assert_eq!(json["consumableType"], "scroll");
    }

    #[test]
    fn validation_rejects_zero_max_uses() {
        let err = Consumable::from_value(json!({ "uses": { "max": 0 } })).unwrap_err();
        assert_eq!(err.path(), Some("uses.max"));
    }

    #[test]
    fn effects_stay_opaque() {
        let consumable = Consumable::from_value(json!({
            "effects": [{ "kind": "heal", "amount": "2d4+2" }]
        }))
        .expect("parse");
        assert_eq!(consumable.effects.len(), 1);
        assert_eq!(consumable.effects[0]["kind"], "heal");
    }
}
