//! Race entity - ancestry definitions
//!
//! A race is a pure definition record: size, base speed, attribute and pool
//! bonuses, traits, and languages. Bonus application never mutates the
//! character's block; it returns an adjusted copy.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::SchemaValidationError;
use crate::ids::RaceId;
use crate::schema::{check_min, EntityModel, EntitySchema, FieldKind, SchemaField};
use crate::value_objects::{AttributeBlock, AttributeName, SizeCategory};

/// Bonuses a race grants at character creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RaceBonuses {
    /// Per-attribute additions; missing attributes contribute 0.
    pub attributes: HashMap<AttributeName, i32>,
    pub hp: i32,
    pub stamina: i32,
    pub mana: i32,
}

/// A race definition record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Race {
    pub id: RaceId,
    pub description: String,
    pub size: SizeCategory,
    pub speed: i32,
    pub bonuses: RaceBonuses,
    pub traits: Vec<String>,
    pub languages: Vec<String>,
}

impl Default for Race {
    fn default() -> Self {
        Self {
            id: RaceId::new(),
            description: String::new(),
            size: SizeCategory::Medium,
            speed: 30,
            bonuses: RaceBonuses::default(),
            traits: Vec::new(),
            languages: Vec::new(),
        }
    }
}

impl Race {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply the racial attribute bonuses to a character's block.
    ///
    /// Returns a new block; the input is left untouched. Only the raw values
    /// change - run the derived pass afterwards to refresh modifiers.
    pub fn apply_bonuses(&self, attributes: &AttributeBlock) -> AttributeBlock {
        let mut modified = attributes.clone();
        for (&name, &bonus) in &self.bonuses.attributes {
            modified.get_mut(name).value += bonus;
        }
        modified
    }
}

impl EntityModel for Race {
    const KIND: &'static str = "race";

    fn schema() -> EntitySchema {
        EntitySchema::new(
            Self::KIND,
            vec![
                SchemaField::id("id"),
                SchemaField::text("description"),
                SchemaField::select("size", SizeCategory::CHOICES).default("medium"),
                SchemaField::integer("speed").min(0).default(30),
                SchemaField::object(
                    "bonuses",
                    vec![
                        SchemaField::object("attributes", Vec::new()).optional(),
                        SchemaField::integer("hp").default(0),
                        SchemaField::integer("stamina").default(0),
                        SchemaField::integer("mana").default(0),
                    ],
                ),
                SchemaField::list("traits", FieldKind::Text),
                SchemaField::list("languages", FieldKind::Text),
            ],
        )
    }

    fn validate(&self) -> Result<(), SchemaValidationError> {
        check_min("speed", self.speed, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_validate() {
        let race = Race::from_value(json!({})).expect("defaults validate");
        assert_eq!(race.size, SizeCategory::Medium);
        assert_eq!(race.speed, 30);
        assert!(race.bonuses.attributes.is_empty());
    }

    #[test]
    fn apply_bonuses_leaves_input_untouched() {
        let mut race = Race::new();
        race.bonuses.attributes.insert(AttributeName::Strength, 2);
        race.bonuses.attributes.insert(AttributeName::Charisma, -1);

        let original = AttributeBlock::default();
        let snapshot = original.clone();
        let modified = race.apply_bonuses(&original);

        assert_eq!(original, snapshot);
        assert_eq!(modified.strength.value, 12);
        assert_eq!(modified.charisma.value, 9);
    }

    #[test]
    fn missing_bonus_entries_contribute_nothing() {
        let race = Race::new();
        let block = AttributeBlock::default();
        assert_eq!(race.apply_bonuses(&block), block);
    }

    #[test]
    fn bonus_map_parses_by_attribute_name() {
        let race = Race::from_value(json!({
            "bonuses": { "attributes": { "dexterity": 2 }, "hp": 4 }
        }))
        .expect("parse");
        assert_eq!(race.bonuses.attributes[&AttributeName::Dexterity], 2);
        assert_eq!(race.bonuses.hp, 4);
    }

    #[test]
    fn validation_rejects_negative_speed() {
        assert!(Race::from_value(json!({ "speed": -5 })).is_err());
    }
}
