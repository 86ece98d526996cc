//! Class entity - archetype definitions and hit-point growth
//!
//! A class is a pure definition record referenced by id; it is never owned
//! by a character. Hit-point growth uses the expected-value convention: the
//! average roll of the hit die (rounded up) plus the constitution modifier
//! per level past the first.

use serde::{Deserialize, Serialize};

use crate::error::SchemaValidationError;
use crate::ids::{ClassId, ItemId, SkillId};
use crate::schema::{check_min, EntityModel, EntitySchema, FieldKind, SchemaField};
use crate::value_objects::AttributeName;

/// Hit-die size used for per-level hit-point growth.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HitDie {
    #[serde(rename = "d4")]
    D4,
    #[serde(rename = "d6")]
    D6,
    #[default]
    #[serde(rename = "d8")]
    D8,
    #[serde(rename = "d10")]
    D10,
    #[serde(rename = "d12")]
    D12,
}

impl HitDie {
    pub const CHOICES: &'static [&'static str] = &["d4", "d6", "d8", "d10", "d12"];

    /// Number of faces on the die.
    pub fn sides(&self) -> i32 {
        match self {
            Self::D4 => 4,
            Self::D6 => 6,
            Self::D8 => 8,
            Self::D10 => 10,
            Self::D12 => 12,
        }
    }

    /// Expected roll, rounded up: sides / 2 + 1 (a d8 averages 5).
    pub fn average_roll(&self) -> i32 {
        self.sides() / 2 + 1
    }
}

/// A class definition record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Class {
    pub id: ClassId,
    pub description: String,
    pub hit_die: HitDie,
    pub primary_attribute: AttributeName,
    pub starting_hp: i32,
    pub starting_stamina: i32,
    pub starting_mana: i32,
    /// Skills granted at creation.
    pub skills: Vec<SkillId>,
    /// Equipment granted at creation.
    pub equipment: Vec<ItemId>,
}

impl Default for Class {
    fn default() -> Self {
        Self {
            id: ClassId::new(),
            description: String::new(),
            hit_die: HitDie::D8,
            primary_attribute: AttributeName::Strength,
            starting_hp: 10,
            starting_stamina: 10,
            starting_mana: 0,
            skills: Vec::new(),
            equipment: Vec::new(),
        }
    }
}

impl Class {
    pub fn new() -> Self {
        Self::default()
    }

    /// Maximum hit points at `level` (>= 1) for a given constitution
    /// modifier.
    ///
    /// `starting_hp + (level - 1) * (average_roll + con_mod)`; level 1 is
    /// always exactly the starting hp.
    pub fn hp_for_level(&self, level: i32, con_mod: i32) -> i32 {
        self.starting_hp + (level - 1) * (self.hit_die.average_roll() + con_mod)
    }
}

impl EntityModel for Class {
    const KIND: &'static str = "class";

    fn schema() -> EntitySchema {
        EntitySchema::new(
            Self::KIND,
            vec![
                SchemaField::id("id"),
                SchemaField::text("description"),
                SchemaField::select("hitDie", HitDie::CHOICES).default("d8"),
                SchemaField::select(
                    "primaryAttribute",
                    &[
                        "strength",
                        "constitution",
                        "dexterity",
                        "intelligence",
                        "wisdom",
                        "charisma",
                    ],
                )
                .default("strength"),
                SchemaField::integer("startingHp").min(1).default(10),
                SchemaField::integer("startingStamina").min(0).default(10),
                SchemaField::integer("startingMana").min(0).default(0),
                SchemaField::list("skills", FieldKind::Id),
                SchemaField::list("equipment", FieldKind::Id),
            ],
        )
    }

    fn validate(&self) -> Result<(), SchemaValidationError> {
        check_min("startingHp", self.starting_hp, 1)?;
        check_min("startingStamina", self.starting_stamina, 0)?;
        check_min("startingMana", self.starting_mana, 0)?;
        Ok(())
    }
}
