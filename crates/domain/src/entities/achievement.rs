//! Achievement entity - accomplishment tracking with rewards
//!
//! Completion is a one-way transition: `complete` stamps the completion time
//! once and later calls leave the original stamp untouched. The caller
//! supplies the clock so the record stays a pure value.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::SchemaValidationError;
use crate::ids::{AchievementId, ItemId};
use crate::schema::{check_min, EntityModel, EntitySchema, FieldKind, SchemaField};

/// Achievement category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AchievementCategory {
    #[default]
    Combat,
    Exploration,
    Social,
    Crafting,
    Special,
}

impl AchievementCategory {
    pub const CHOICES: &'static [&'static str] =
        &["combat", "exploration", "social", "crafting", "special"];
}

/// Rewards granted on completion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AchievementRewards {
    pub xp: i32,
    /// Reputation delta; infamous deeds may subtract.
    pub reputation: i32,
    pub items: Vec<ItemId>,
}

/// An achievement record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Achievement {
    pub id: AchievementId,
    pub description: String,
    pub category: AchievementCategory,
    pub completed: bool,
    pub date_completed: Option<DateTime<Utc>>,
    pub rewards: AchievementRewards,
}

impl Default for Achievement {
    fn default() -> Self {
        Self {
            id: AchievementId::new(),
            description: String::new(),
            category: AchievementCategory::Combat,
            completed: false,
            date_completed: None,
            rewards: AchievementRewards::default(),
        }
    }
}

impl Achievement {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the achievement completed at `now`.
    ///
    /// One-way: a repeat call changes nothing and keeps the first timestamp.
    pub fn complete(&mut self, now: DateTime<Utc>) {
        if self.completed {
            return;
        }
        self.completed = true;
        self.date_completed = Some(now);
    }
}

impl EntityModel for Achievement {
    const KIND: &'static str = "achievement";

    fn schema() -> EntitySchema {
        EntitySchema::new(
            Self::KIND,
            vec![
                SchemaField::id("id"),
                SchemaField::text("description"),
                SchemaField::select("category", AchievementCategory::CHOICES).default("combat"),
                SchemaField::boolean("completed", false),
                SchemaField::timestamp("dateCompleted"),
                SchemaField::object(
                    "rewards",
                    vec![
                        SchemaField::integer("xp").min(0).default(0),
                        SchemaField::integer("reputation").default(0),
                        SchemaField::list("items", FieldKind::Id),
                    ],
                ),
            ],
        )
    }

    fn validate(&self) -> Result<(), SchemaValidationError> {
        check_min("rewards.xp", self.rewards.xp, 0)?;
        if self.completed != self.date_completed.is_some() {
            let reason = if self.completed {
                "must be set when the achievement is completed"
            } else {
                "must be null until the achievement is completed"
            };
            return Err(SchemaValidationError::invariant("dateCompleted", reason));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fixed_now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-03-01T12:00:00Z")
            .expect("valid timestamp")
            .with_timezone(&Utc)
    }

    #[test]
    fn defaults_are_incomplete() {
        let achievement = Achievement::from_value(json!({})).expect("defaults validate");
        assert!(!achievement.completed);
        assert!(achievement.date_completed.is_none());
    }

    #[test]
    fn complete_stamps_the_given_time() {
        let mut achievement = Achievement::new();
        achievement.complete(fixed_now());
        assert!(achievement.completed);
        assert_eq!(achievement.date_completed, Some(fixed_now()));
        assert!(achievement.validate().is_ok());
    }

    #[test]
    fn complete_twice_keeps_the_first_stamp() {
        let mut achievement = Achievement::new();
        achievement.complete(fixed_now());
        let later = fixed_now() + chrono::Duration::days(3);
        achievement.complete(later);
        assert!(achievement.completed);
        assert_eq!(achievement.date_completed, Some(fixed_now()));
    }

    #[test]
    fn validation_enforces_completed_iff_dated() {
        let missing_date = json!({ "completed": true });
        assert!(Achievement::from_value(missing_date).is_err());

        let stray_date = json!({ "dateCompleted": "2024-03-01T12:00:00Z" });
        let err = Achievement::from_value(stray_date).unwrap_err();
        assert_eq!(err.path(), Some("dateCompleted"));

        let consistent = json!({
            "completed": true,
            "dateCompleted": "2024-03-01T12:00:00Z"
        });
        assert!(Achievement::from_value(consistent).is_ok());
    }

    #[test]
    fn validation_rejects_negative_reward_xp() {
        let raw = json!({ "rewards": { "xp": -10 } });
        assert!(Achievement::from_value(raw).is_err());
    }

    #[test]
    fn reputation_reward_may_be_negative() {
        let raw = json!({ "rewards": { "reputation": -50 } });
        assert!(Achievement::from_value(raw).is_ok());
    }
}
