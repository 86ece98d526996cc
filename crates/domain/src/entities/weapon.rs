//! Weapon entity
//!
//! Weapons carry a damage descriptor, flat attack/damage bonuses, and a
//! range block. A weapon owned by nobody (`owner == None`) is a template
//! definition rather than a carried item.

use serde::{Deserialize, Serialize};

use crate::error::SchemaValidationError;
use crate::ids::{ActorId, ItemId};
use crate::schema::{check_min, check_min_f64, EntityModel, EntitySchema, FieldKind, SchemaField};
use crate::value_objects::{
    requirements_schema, Damage, DamageType, DiceFormula, Rarity, Requirements,
};

/// Normal and long range, in feet. A normal range above 5 makes the weapon
/// ranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WeaponRange {
    pub normal: i32,
    pub long: i32,
}

impl Default for WeaponRange {
    fn default() -> Self {
        Self { normal: 5, long: 5 }
    }
}

/// A weapon record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Weapon {
    pub id: ItemId,
    /// Owning actor; `None` marks an unowned template.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<ActorId>,
    pub description: String,
    pub quantity: i32,
    pub weight: f64,
    pub rarity: Rarity,
    pub equipped: bool,
    pub identified: bool,
    pub damage: Damage,
    pub attack_bonus: i32,
    pub damage_bonus: i32,
    pub properties: Vec<String>,
    pub range: WeaponRange,
    pub requirements: Requirements,
}

impl Default for Weapon {
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
            damage: Damage::new("1d6", DamageType::Physical),
            attack_bonus: 0,
            damage_bonus: 0,
            properties: Vec::new(),
            range: WeaponRange::default(),
            requirements: Requirements::default(),
        }
    }
}

impl Weapon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the weapon attacks at range.
    pub fn is_ranged(&self) -> bool {
        self.range.normal > 5
    }

    /// Display color for the weapon's rarity tier.
    pub fn rarity_color(&self) -> &'static str {
        self.rarity.color()
    }
}

impl EntityModel for Weapon {
    const KIND: &'static str = "weapon";

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
                    "damage",
                    vec![
                        SchemaField::text("base").default("1d6"),
                        SchemaField::select("type", DamageType::CHOICES).default("physical"),
                    ],
                ),
                SchemaField::integer("attackBonus").default(0),
                SchemaField::integer("damageBonus").default(0),
                SchemaField::list("properties", FieldKind::Text),
                SchemaField::object(
                    "range",
                    vec![
                        SchemaField::integer("normal").min(0).default(5),
                        SchemaField::integer("long").min(0).default(5),
                    ],
                ),
                requirements_schema(),
            ],
        )
    }

    fn validate(&self) -> Result<(), SchemaValidationError> {
        check_min("quantity", self.quantity, 0)?;
        check_min_f64("weight", self.weight, 0.0)?;
        check_min("range.normal", self.range.normal, 0)?;
        check_min("range.long", self.range.long, 0)?;
        DiceFormula::parse(&self.damage.base).map_err(|err| {
            SchemaValidationError::invariant("damage.base", format!("invalid dice expression: {err}"))
        })?;
        self.requirements.validate("requirements")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_are_a_melee_template() {
        let weapon = Weapon::from_value(json!({})).expect("defaults validate");
        assert_eq!(weapon.quantity, 1);
        assert_eq!(weapon.damage.base, "1d6");
        assert!(weapon.owner.is_none());
        assert!(!weapon.is_ranged());
    }

    #[test]
    fn ranged_strictly_above_five() {
        let mut weapon = Weapon::new();
        weapon.range.normal = 5;
        assert!(!weapon.is_ranged());
        weapon.range.normal = 6;
        assert!(weapon.is_ranged());
    }

    #[test]
    fn rarity_color_follows_tier() {
        let mut weapon = Weapon::new();
        assert_eq!(weapon.rarity_color(), "#ffffff");
        weapon.rarity = Rarity::Legendary;
        assert_eq!(weapon.rarity_color(), "#ff8000");
    }

    #[test]
    fn validation_rejects_unknown_rarity() {
        let err = Weapon::from_value(json!({ "rarity": "mythic" })).unwrap_err();
        assert!(matches!(err, SchemaValidationError::Malformed { kind, .. } if kind == "weapon"));
    }

    #[test]
    fn validation_rejects_negative_weight_and_quantity() {
        assert!(Weapon::from_value(json!({ "weight": -1.0 })).is_err());
        assert!(Weapon::from_value(json!({ "quantity": -1 })).is_err());
    }

    #[test]
    fn validation_rejects_unparseable_damage() {
        let err = Weapon::from_value(json!({ "damage": { "base": "lots" } })).unwrap_err();
        assert_eq!(err.path(), Some("damage.base"));
    }

    #[test]
    fn owner_roundtrips_when_assigned() {
        let mut weapon = Weapon::new();
        weapon.owner = Some(ActorId::new());
        let json = serde_json::to_value(&weapon).expect("serialize");
        let back = Weapon::from_value(json).expect("reparse");
        assert_eq!(back.owner, weapon.owner);
    }
}
