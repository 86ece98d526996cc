//! NPC entity - simplified actor records
//!
//! NPCs share the character's attribute and resource shapes but carry no
//! crawler block, no carrying capacity, and no attack/damage bonuses. Their
//! xp meter defaults to a zero maximum: NPCs are not assumed to grow.

use serde::{Deserialize, Serialize};

use crate::error::SchemaValidationError;
use crate::ids::ActorId;
use crate::schema::{check_min, check_range, EntityModel, EntitySchema, SchemaField};
use crate::value_objects::{
    attribute_block_schema, pool_schema, AttributeBlock, Pool, SizeCategory,
};

use super::character::{ActorResources, ArmorStat, Initiative};

/// NPC classification labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NpcDetails {
    /// Creature type ("humanoid", "undead", ...).
    #[serde(rename = "type")]
    pub kind: String,
    /// Where the creature is usually encountered.
    pub environment: String,
}

impl Default for NpcDetails {
    fn default() -> Self {
        Self {
            kind: "humanoid".to_string(),
            environment: String::new(),
        }
    }
}

/// NPC physical traits (no carrying capacity).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NpcTraits {
    pub size: SizeCategory,
    pub speed: i32,
}

impl Default for NpcTraits {
    fn default() -> Self {
        Self {
            size: SizeCategory::Medium,
            speed: 30,
        }
    }
}

/// NPC combat block (initiative and armor only).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NpcCombatStats {
    pub initiative: Initiative,
    pub armor: ArmorStat,
}

/// A non-player-character record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Npc {
    pub id: ActorId,
    pub biography: String,
    pub level: i32,
    pub xp: Pool,
    pub attributes: AttributeBlock,
    pub resources: ActorResources,
    pub details: NpcDetails,
    pub traits: NpcTraits,
    pub combat: NpcCombatStats,
}

impl Default for Npc {
    fn default() -> Self {
        Self {
            id: ActorId::new(),
            biography: String::new(),
            level: 1,
            xp: Pool::new(0, 0),
            attributes: AttributeBlock::default(),
            resources: ActorResources::default(),
            details: NpcDetails::default(),
            traits: NpcTraits::default(),
            combat: NpcCombatStats::default(),
        }
    }
}

impl Npc {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute derived fields; same rules as the character pass minus
    /// carrying capacity.
    pub fn recompute_derived(&mut self) {
        self.attributes.recompute_modifiers();
        self.combat.initiative.value =
            self.attributes.dexterity.modifier + self.combat.initiative.bonus;
        self.resources.clamp_values();
    }
}

impl EntityModel for Npc {
    const KIND: &'static str = "npc";

    fn schema() -> EntitySchema {
        EntitySchema::new(
            Self::KIND,
            vec![
                SchemaField::id("id"),
                SchemaField::text("biography"),
                SchemaField::integer("level").range(1, 100).default(1),
                pool_schema("xp", 0, 0),
                attribute_block_schema(),
                ActorResources::schema_field(),
                SchemaField::object(
                    "details",
                    vec![
                        SchemaField::text("type").default("humanoid"),
                        SchemaField::text("environment"),
                    ],
                ),
                SchemaField::object(
                    "traits",
                    vec![
                        SchemaField::select("size", SizeCategory::CHOICES).default("medium"),
                        SchemaField::integer("speed").min(0).default(30),
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
        check_min("combat.armor.value", self.combat.armor.value, 0)?;
        Ok(())
    }
}
