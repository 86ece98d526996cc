//! Crawlworld Domain - entity schemas, derived-stat rules, and invariants
//!
//! The core of the crawlworld ruleset: ten typed entity records
//! (two actor kinds, four item kinds, skills, achievements, classes, races),
//! the validation boundary that turns untrusted input into schema-satisfying
//! records, and the pure derived-data pass that keeps computed fields
//! (attribute modifiers, initiative, carrying capacity) consistent after
//! every mutation.
//!
//! The host application owns everything around this crate: persistence,
//! rendering, dice rolling, and the serialization of concurrent edits. It is
//! expected to call `recompute_derived` after each base-field write, before
//! the record becomes visible to readers.

pub mod entities;
pub mod error;
pub mod ids;
pub mod rules;
pub mod schema;
pub mod value_objects;

// Re-export all entities (explicit list in entities/mod.rs)
pub use entities::{
    schema_for, Achievement, AchievementCategory, AchievementRewards, ActorResources, Armor,
    ArmorBlock, ArmorKind, ArmorStat, Character, CharacterDetails, Class, CombatStats, Consumable,
    ConsumableKind, CrawlerBlock, EquipSlot, Equipment, EquipmentBonuses, HitDie, Initiative, Npc,
    NpcCombatStats, NpcDetails, NpcTraits, PhysicalTraits, Race, RaceBonuses, Skill, SkillCost,
    SkillKind, SkillRequirements, Uses, Weapon, WeaponRange,
};

pub use error::SchemaValidationError;

// Re-export the schema layer
pub use schema::{EntityModel, EntitySchema, FieldKind, SchemaField};

// Re-export value objects
pub use value_objects::{
    attribute_modifier, Attribute, AttributeBlock, AttributeName, Capacity, Damage, DamageType,
    DiceFormula, DiceParseError, Pool, Rarity, Requirements, ResourcePool, SizeCategory,
};

// Re-export cross-entity rules
pub use rules::{is_encumbered, total_carried_weight, Carryable, InventoryIndex};

// Re-export ID types
pub use ids::{AchievementId, ActorId, ClassId, ItemId, RaceId, SkillId};
