//! Character entity - player-character records
//!
//! A character owns the six attributes, three resource pools, level/xp
//! progression, physical traits, a combat block, and the crawler block
//! (reputation, sponsors, completed achievements). Derived fields (attribute
//! modifiers, initiative, carrying capacity) are recomputed with
//! `recompute_derived` after every base-field mutation; the host must not
//! expose a record between a write and the recompute pass.

use serde::{Deserialize, Serialize};

use crate::error::SchemaValidationError;
use crate::ids::{AchievementId, ActorId};
use crate::schema::{check_min, check_range, EntityModel, EntitySchema, FieldKind, SchemaField};
use crate::value_objects::{
    attribute_block_schema, pool_schema, resource_schema, AttributeBlock, Capacity, Pool,
    ResourcePool, SizeCategory,
};

/// The hp/stamina/mana triple carried by every actor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActorResources {
    pub hp: ResourcePool,
    pub stamina: ResourcePool,
    pub mana: ResourcePool,
}

impl Default for ActorResources {
    fn default() -> Self {
        Self {
            hp: ResourcePool::with_temp(10, 10, 0),
            stamina: ResourcePool::new(10, 10),
            mana: ResourcePool::new(0, 0),
        }
    }
}

impl ActorResources {
    /// Clamp every pool's current value into `[0, max + temp]`.
    pub fn clamp_values(&mut self) {
        self.hp.clamp_value();
        self.stamina.clamp_value();
        self.mana.clamp_value();
    }

    pub(crate) fn validate(&self) -> Result<(), SchemaValidationError> {
        self.hp.validate_non_negative("resources.hp")?;
        self.stamina.validate_non_negative("resources.stamina")?;
        self.mana.validate_non_negative("resources.mana")?;
        Ok(())
    }

    pub(crate) fn schema_field() -> SchemaField {
        SchemaField::object(
            "resources",
            vec![
                resource_schema("hp", 10, 10, true),
                resource_schema("stamina", 10, 10, false),
                resource_schema("mana", 0, 0, false),
            ],
        )
    }
}

/// Initiative: derived value plus an editable flat bonus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Initiative {
    /// Derived: dexterity modifier plus `bonus`.
    pub value: i32,
    pub bonus: i32,
}

/// Armor rating worn by an actor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArmorStat {
    pub value: i32,
    /// Free-text armor label ("none", "chainmail", ...).
    #[serde(rename = "type")]
    pub kind: String,
}

impl Default for ArmorStat {
    fn default() -> Self {
        Self {
            value: 10,
            kind: "none".to_string(),
        }
    }
}

/// Character combat block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CombatStats {
    pub initiative: Initiative,
    pub armor: ArmorStat,
    pub attack_bonus: i32,
    pub damage_bonus: i32,
}

/// Free-text identity labels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CharacterDetails {
    pub race: String,
    pub class: String,
    pub subclass: String,
    pub background: String,
}

/// Physical traits, including the carrying-capacity budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PhysicalTraits {
    pub size: SizeCategory,
    pub speed: i32,
    /// `max` is derived from strength; `value` is the host-tracked load.
    pub carrying_capacity: Capacity,
}

impl Default for PhysicalTraits {
    fn default() -> Self {
        Self {
            size: SizeCategory::Medium,
            speed: 30,
            carrying_capacity: Capacity::default(),
        }
    }
}

/// Crawler progression block: reputation, sponsors, earned achievements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CrawlerBlock {
    /// May go negative; sponsors remember.
    pub reputation: i32,
    pub sponsors: Vec<String>,
    pub achievements: Vec<AchievementId>,
}

/// A player character record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Character {
    pub id: ActorId,
    pub biography: String,
    pub level: i32,
    pub xp: Pool,
    pub attributes: AttributeBlock,
    pub resources: ActorResources,
    pub details: CharacterDetails,
    pub traits: PhysicalTraits,
    pub combat: CombatStats,
    pub crawler: CrawlerBlock,
}

impl Default for Character {
    fn default() -> Self {
        Self {
            id: ActorId::new(),
            biography: String::new(),
            level: 1,
            xp: Pool::new(0, 1000),
            attributes: AttributeBlock::default(),
            resources: ActorResources::default(),
            details: CharacterDetails::default(),
            traits: PhysicalTraits::default(),
            combat: CombatStats::default(),
            crawler: CrawlerBlock::default(),
        }
    }
}

impl Character {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute every derived field from the current base values.
    ///
    /// Must run after each base-field mutation and before the record is
    /// considered externally visible. Idempotent: a second pass with no
    /// intervening edit changes nothing.
    pub fn recompute_derived(&mut self) {
        self.attributes.recompute_modifiers();
        self.combat.initiative.value =
            self.attributes.dexterity.modifier + self.combat.initiative.bonus;
        self.traits.carrying_capacity.max = f64::from(self.attributes.strength.value) * 15.0;
        self.resources.clamp_values();
    }
}

impl EntityModel for Character {
    const KIND: &'static str = "character";

    fn schema() -> EntitySchema {
        EntitySchema::new(
            Self::KIND,
            vec![
                SchemaField::id("id"),
                SchemaField::text("biography"),
                SchemaField::integer("level").range(1, 100).default(1),
                pool_schema("xp", 0, 1000),
                attribute_block_schema(),
                ActorResources::schema_field(),
                SchemaField::object(
                    "details",
                    vec![
                        SchemaField::text("race"),
                        SchemaField::text("class"),
                        SchemaField::text("subclass"),
                        SchemaField::text("background"),
                    ],
                ),
                SchemaField::object(
                    "traits",
                    vec![
                        SchemaField::select("size", SizeCategory::CHOICES).default("medium"),
                        SchemaField::integer("speed").min(0).default(30),
                        SchemaField::object(
                            "carryingCapacity",
                            vec![
                                SchemaField::number("value").min(0).default(0),
                                SchemaField::number("max").min(0).default(150),
                            ],
                        ),
                    ],
                ),
                SchemaField::object(
                    "combat",
                    vec![
                        SchemaField::object(
                            "initiative",
                            vec![
                                SchemaField::integer("value").default(0),
                                SchemaField::integer("bonus").default(0),
                            ],
                        ),
                        SchemaField::object(
                            "armor",
                            vec![
                                SchemaField::integer("value").min(0).default(10),
                                SchemaField::text("type").default("none"),
                            ],
                        ),
                        SchemaField::integer("attackBonus").default(0),
                        SchemaField::integer("damageBonus").default(0),
                    ],
                ),
                SchemaField::object(
                    "crawler",
                    vec![
                        SchemaField::integer("reputation").default(0),
                        SchemaField::list("sponsors", FieldKind::Text),
                        SchemaField::list("achievements", FieldKind::Id),
                    ],
                ),
            ],
        )
    }

    fn validate(&self) -> Result<(), SchemaValidationError> {
        check_range("level", self.level, 1, 100)?;
        self.xp.validate_non_negative("xp")?;
        for (name, attribute) in self.attributes.iter() {
            check_range(&format!("attributes.{name}.value"), attribute.value, 1, 30)?;
        }
        self.resources.validate()?;
        check_min("traits.speed", self.traits.speed, 0)?;
        self.traits
            .carrying_capacity
            .validate_non_negative("traits.carryingCapacity")?;
        check_min("combat.armor.value", self.combat.armor.value, 0)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_input_hydrates_to_defaults() {
        let character = Character::from_value(json!({})).expect("defaults validate");
        assert_eq!(character.level, 1);
        assert_eq!(character.xp.max, 1000);
        assert_eq!(character.attributes.strength.value, 10);
        assert_eq!(character.resources.hp.temp, Some(0));
        assert_eq!(character.resources.mana.max, 0);
        assert_eq!(character.traits.speed, 30);
        assert_eq!(character.combat.armor.kind, "none");
        assert!(character.crawler.sponsors.is_empty());
        assert!(character.validate().is_ok());
    }

    #[test]
    fn recompute_updates_modifiers_and_initiative() {
        let mut character = Character::new();
        character.attributes.dexterity.value = 16;
        character.combat.initiative.bonus = -1;
        character.recompute_derived();
        assert_eq!(character.attributes.dexterity.modifier, 3);
        assert_eq!(character.combat.initiative.value, 2);
    }

    #[test]
    fn recompute_sets_carrying_capacity_from_strength() {
        let mut character = Character::new();
        character.attributes.strength.value = 14;
        character.recompute_derived();
        assert_eq!(character.traits.carrying_capacity.max, 210.0);
    }

    #[test]
    fn recompute_is_idempotent() {
        let mut character = Character::new();
        character.attributes.strength.value = 7;
        character.attributes.dexterity.value = 22;
        character.combat.initiative.bonus = 4;
        character.resources.hp.value = 99;
        character.recompute_derived();
        let once = character.clone();
        character.recompute_derived();
        assert_eq!(character, once);
    }

    #[test]
    fn recompute_clamps_resources_to_ceiling() {
        let mut character = Character::new();
        character.resources.hp = ResourcePool::with_temp(30, 20, 5);
        character.resources.stamina.value = -3;
        character.recompute_derived();
        assert_eq!(character.resources.hp.value, 25);
        assert_eq!(character.resources.stamina.value, 0);
    }

    #[test]
    fn validation_rejects_out_of_range_attribute() {
        for bad in [0, 31] {
            let raw = json!({ "attributes": { "strength": { "value": bad } } });
            let err = Character::from_value(raw).unwrap_err();
            assert_eq!(err.path(), Some("attributes.strength.value"));
        }
    }

    #[test]
    fn validation_rejects_bad_level() {
        assert!(Character::from_value(json!({ "level": 0 })).is_err());
        assert!(Character::from_value(json!({ "level": 101 })).is_err());
        assert!(Character::from_value(json!({ "level": 100 })).is_ok());
    }

    #[test]
    fn validation_rejects_wrong_type() {
        let err = Character::from_value(json!({ "level": "five" })).unwrap_err();
        assert!(matches!(err, SchemaValidationError::Malformed { kind, .. } if kind == "character"));
    }

    #[test]
    fn schema_declares_attribute_bounds() {
        let schema = Character::schema();
        let attributes = schema.field("attributes").expect("attributes declared");
        let FieldKind::Object { fields } = &attributes.kind else {
            panic!("attributes must be an object field");
        };
        assert_eq!(fields.len(), 6);
    }
}
