//! Damage descriptors for weapons and skills
//!
//! A damage descriptor pairs a dice-expression string with a damage type.
//! The core only parses and validates expressions; rolling them is a host
//! concern.

use serde::{Deserialize, Serialize};

/// The nine damage types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DamageType {
    #[default]
    Physical,
    Fire,
    Ice,
    Lightning,
    Poison,
    Acid,
    Psychic,
    Holy,
    Dark,
}

impl DamageType {
    /// The string choices accepted by damage schemas.
    pub const CHOICES: &'static [&'static str] = &[
        "physical",
        "fire",
        "ice",
        "lightning",
        "poison",
        "acid",
        "psychic",
        "holy",
        "dark",
    ];
}

/// A dice-expression damage descriptor.
///
/// `base` may be empty on skills that deal no damage (passive skills); a
/// non-empty expression must parse as a dice formula.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Damage {
    pub base: String,
    #[serde(rename = "type")]
    pub kind: DamageType,
}

impl Damage {
    pub fn new(base: impl Into<String>, kind: DamageType) -> Self {
        Self {
            base: base.into(),
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damage_serializes_with_type_key() {
        let damage = Damage::new("1d6", DamageType::Fire);
        let json = serde_json::to_value(&damage).expect("serialize");
        assert_eq!(json["base"], "1d6");
        assert_eq!(json["type"], "fire");
    }

    #[test]
    fn unknown_damage_type_is_rejected() {
        assert!(serde_json::from_str::<DamageType>("\"radiant\"").is_err());
    }
}
