//! Skill entity - independently-leveling abilities
//!
//! Skills level with use (1..=10), spend stamina/mana, and may sit on a
//! cooldown. Prerequisites gate learning; effects are opaque descriptors the
//! host interprets.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::SchemaValidationError;
use crate::ids::SkillId;
use crate::schema::{
    check_min, check_range, EntityModel, EntitySchema, FieldKind, SchemaField,
};
use crate::value_objects::{
    pool_schema, AttributeName, Damage, DamageType, DiceFormula, Pool,
};

/// Active skills are used deliberately; passive skills apply continuously.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillKind {
    #[default]
    Active,
    Passive,
}

impl SkillKind {
    pub const CHOICES: &'static [&'static str] = &["active", "passive"];
}

/// Resource cost paid on each use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillCost {
    pub stamina: i32,
    pub mana: i32,
}

/// Prerequisites for learning the skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillRequirements {
    pub level: i32,
    pub attributes: HashMap<AttributeName, i32>,
    /// Skills that must already be known.
    pub skills: Vec<SkillId>,
}

impl Default for SkillRequirements {
    fn default() -> Self {
        Self {
            level: 1,
            attributes: HashMap::new(),
            skills: Vec::new(),
        }
    }
}

/// A skill record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Skill {
    pub id: SkillId,
    pub description: String,
    #[serde(rename = "skillType")]
    pub kind: SkillKind,
    pub level: Pool,
    pub xp: Pool,
    pub cooldown: Pool,
    pub cost: SkillCost,
    pub damage: Damage,
    pub requirements: SkillRequirements,
    /// Opaque effect descriptors, interpreted by the host.
    pub effects: Vec<serde_json::Value>,
}

impl Default for Skill {
    fn default() -> Self {
        Self {
            id: SkillId::new(),
            description: String::new(),
            kind: SkillKind::Active,
            level: Pool::new(1, 10),
            xp: Pool::new(0, 100),
            cooldown: Pool::new(0, 0),
            cost: SkillCost::default(),
            damage: Damage::default(),
            requirements: SkillRequirements::default(),
            effects: Vec::new(),
        }
    }
}

impl Skill {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the skill is currently cooling down.
    pub fn is_on_cooldown(&self) -> bool {
        self.cooldown.value > 0
    }

    /// Whether the skill has reached its level cap.
    pub fn is_max_level(&self) -> bool {
        self.level.value >= self.level.max
    }

    /// Progress toward the next skill level as a whole percentage.
    ///
    /// A capped skill always reports 100. A zero xp target reports 0 rather
    /// than dividing by zero.
    pub fn level_progress(&self) -> i32 {
        if self.is_max_level() {
            return 100;
        }
        if self.xp.max == 0 {
            return 0;
        }
        ((i64::from(self.xp.value) * 100) / i64::from(self.xp.max)) as i32
    }
}

impl EntityModel for Skill {
    const KIND: &'static str = "skill";

    fn schema() -> EntitySchema {
        EntitySchema::new(
            Self::KIND,
            vec![
                SchemaField::id("id"),
                SchemaField::text("description"),
                SchemaField::select("skillType", SkillKind::CHOICES).default("active"),
                SchemaField::object(
                    "level",
                    vec![
                        SchemaField::integer("value").range(1, 10).default(1),
                        SchemaField::integer("max").min(1).default(10),
                    ],
                ),
                pool_schema("xp", 0, 100),
                pool_schema("cooldown", 0, 0),
                SchemaField::object(
                    "cost",
                    vec![
                        SchemaField::integer("stamina").min(0).default(0),
                        SchemaField::integer("mana").min(0).default(0),
                    ],
                ),
                SchemaField::object(
                    "damage",
                    vec![
                        SchemaField::text("base"),
                        SchemaField::select("type", DamageType::CHOICES).default("physical"),
                    ],
                ),
                SchemaField::object(
                    "requirements",
                    vec![
                        SchemaField::integer("level").min(1).default(1),
                        SchemaField::object("attributes", Vec::new()).optional(),
                        SchemaField::list("skills", FieldKind::Id),
                    ],
                ),
                SchemaField::list("effects", FieldKind::Object { fields: Vec::new() }),
            ],
        )
    }

    fn validate(&self) -> Result<(), SchemaValidationError> {
        check_range("level.value", self.level.value, 1, 10)?;
        check_min("level.max", self.level.max, 1)?;
        if self.level.value > self.level.max {
            return Err(SchemaValidationError::invariant(
                "level.value",
                format!("exceeds the level cap of {}", self.level.max),
            ));
        }
        self.xp.validate_non_negative("xp")?;
        self.cooldown.validate_non_negative("cooldown")?;
        check_min("cost.stamina", self.cost.stamina, 0)?;
        check_min("cost.mana", self.cost.mana, 0)?;
        check_min("requirements.level", self.requirements.level, 1)?;
        if !self.damage.base.is_empty() {
            DiceFormula::parse(&self.damage.base).map_err(|err| {
                SchemaValidationError::invariant(
                    "damage.base",
                    format!("invalid dice expression: {err}"),
                )
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_validate() {
        let skill = Skill::from_value(json!({})).expect("defaults validate");
        assert_eq!(skill.level.value, 1);
        assert_eq!(skill.xp.max, 100);
        assert!(!skill.is_on_cooldown());
        assert!(!skill.is_max_level());
    }

    #[test]
    fn cooldown_predicate_tracks_remaining_turns() {
        let mut skill = Skill::new();
        assert!(!skill.is_on_cooldown());
        skill.cooldown = Pool::new(2, 3);
        assert!(skill.is_on_cooldown());
    }

    #[test]
    fn level_progress_floors_the_percentage() {
        let mut skill = Skill::new();
        skill.xp = Pool::new(37, 120);
        assert_eq!(skill.level_progress(), 30);
    }

    #[test]
    fn level_progress_is_zero_when_target_is_zero() {
        let mut skill = Skill::new();
        skill.xp = Pool::new(50, 0);
        assert_eq!(skill.level_progress(), 0);
    }

    #[test]
    fn level_progress_caps_at_hundred_for_max_level() {
        let mut skill = Skill::new();
        skill.level = Pool::new(10, 10);
        skill.xp = Pool::new(0, 0);
        assert!(skill.is_max_level());
        assert_eq!(skill.level_progress(), 100);
    }

    #[test]
    fn validation_rejects_level_above_cap() {
        let raw = json!({ "level": { "value": 6, "max": 5 } });
        let err = Skill::from_value(raw).unwrap_err();
        assert!(matches!(err, SchemaValidationError::Invariant { .. }));
    }

    #[test]
    fn validation_allows_empty_damage_for_passive_skills() {
        let raw = json!({ "skillType": "passive" });
        assert!(Skill::from_value(raw).is_ok());
    }

    #[test]
    fn validation_rejects_garbage_damage_expression() {
        let raw = json!({ "damage": { "base": "much" } });
        assert!(Skill::from_value(raw).is_err());
    }

    #[test]
    fn prerequisite_skills_parse_as_ids() {
        let prerequisite = SkillId::new();
        let raw = json!({ "requirements": { "level": 4, "skills": [prerequisite] } });
        let skill = Skill::from_value(raw).expect("parse");
        assert_eq!(skill.requirements.skills, vec![prerequisite]);
    }
}
