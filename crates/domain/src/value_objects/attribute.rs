//! Attribute value objects - the six core actor statistics
//!
//! Every actor carries the same six attributes. Each attribute pairs a raw
//! `value` in 1..=30 with a derived `mod` that the derived-data pass keeps in
//! sync; the modifier is never edited directly.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::schema::SchemaField;

/// The six core attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeName {
    Strength,
    Constitution,
    Dexterity,
    Intelligence,
    Wisdom,
    Charisma,
}

impl AttributeName {
    /// All six attributes, in sheet order.
    pub const ALL: [AttributeName; 6] = [
        Self::Strength,
        Self::Constitution,
        Self::Dexterity,
        Self::Intelligence,
        Self::Wisdom,
        Self::Charisma,
    ];

    /// The lowercase field name used in records and paths.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Constitution => "constitution",
            Self::Dexterity => "dexterity",
            Self::Intelligence => "intelligence",
            Self::Wisdom => "wisdom",
            Self::Charisma => "charisma",
        }
    }
}

impl fmt::Display for AttributeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AttributeName {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strength" | "str" => Ok(Self::Strength),
            "constitution" | "con" => Ok(Self::Constitution),
            "dexterity" | "dex" => Ok(Self::Dexterity),
            "intelligence" | "int" => Ok(Self::Intelligence),
            "wisdom" | "wis" => Ok(Self::Wisdom),
            "charisma" | "cha" => Ok(Self::Charisma),
            _ => Err(()),
        }
    }
}

/// A single attribute: raw value plus derived modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    /// Raw score, valid in 1..=30.
    #[serde(default = "default_value")]
    pub value: i32,
    /// Derived modifier; recomputed, never persisted by hand.
    #[serde(rename = "mod", default)]
    pub modifier: i32,
}

fn default_value() -> i32 {
    10
}

impl Default for Attribute {
    fn default() -> Self {
        Self {
            value: 10,
            modifier: 0,
        }
    }
}

/// Compute the modifier for a raw attribute value.
///
/// floor((value - 10) / 2) with floor division: Rust's `/` rounds toward
/// zero, so negative differences need the explicit adjustment (value 7 gives
/// -2, not -1).
pub fn attribute_modifier(value: i32) -> i32 {
    let diff = value - 10;
    if diff >= 0 {
        diff / 2
    } else {
        (diff - 1) / 2
    }
}

/// The full six-attribute block carried by every actor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AttributeBlock {
    pub strength: Attribute,
    pub constitution: Attribute,
    pub dexterity: Attribute,
    pub intelligence: Attribute,
    pub wisdom: Attribute,
    pub charisma: Attribute,
}

impl AttributeBlock {
    /// Access an attribute by name.
    pub fn get(&self, name: AttributeName) -> &Attribute {
        match name {
            AttributeName::Strength => &self.strength,
            AttributeName::Constitution => &self.constitution,
            AttributeName::Dexterity => &self.dexterity,
            AttributeName::Intelligence => &self.intelligence,
            AttributeName::Wisdom => &self.wisdom,
            AttributeName::Charisma => &self.charisma,
        }
    }

    /// Mutable access to an attribute by name.
    pub fn get_mut(&mut self, name: AttributeName) -> &mut Attribute {
        match name {
            AttributeName::Strength => &mut self.strength,
            AttributeName::Constitution => &mut self.constitution,
            AttributeName::Dexterity => &mut self.dexterity,
            AttributeName::Intelligence => &mut self.intelligence,
            AttributeName::Wisdom => &mut self.wisdom,
            AttributeName::Charisma => &mut self.charisma,
        }
    }

    /// Iterate the block in sheet order.
    pub fn iter(&self) -> impl Iterator<Item = (AttributeName, &Attribute)> + '_ {
        AttributeName::ALL
            .into_iter()
            .map(move |name| (name, self.get(name)))
    }

    /// Recompute every modifier from its raw value.
    pub fn recompute_modifiers(&mut self) {
        for name in AttributeName::ALL {
            let attribute = self.get_mut(name);
            attribute.modifier = attribute_modifier(attribute.value);
        }
    }
}

/// Schema descriptor for one `{ value, mod }` attribute entry.
pub(crate) fn attribute_schema(name: &'static str) -> SchemaField {
    SchemaField::object(
        name,
        vec![
            SchemaField::integer("value").range(1, 30).default(10),
            SchemaField::integer("mod").default(0),
        ],
    )
}

/// Schema descriptor for the whole six-attribute block.
pub(crate) fn attribute_block_schema() -> SchemaField {
    SchemaField::object(
        "attributes",
        AttributeName::ALL
            .iter()
            .map(|name| attribute_schema(name.as_str()))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifier_rounds_toward_negative_infinity() {
        assert_eq!(attribute_modifier(10), 0);
        assert_eq!(attribute_modifier(11), 0);
        assert_eq!(attribute_modifier(12), 1);
        assert_eq!(attribute_modifier(9), -1);
        assert_eq!(attribute_modifier(8), -1);
        assert_eq!(attribute_modifier(7), -2);
        assert_eq!(attribute_modifier(1), -5);
        assert_eq!(attribute_modifier(30), 10);
    }

    #[test]
    fn modifier_matches_floor_for_full_range() {
        for value in 1..=30 {
            let expected = ((f64::from(value) - 10.0) / 2.0).floor() as i32;
            assert_eq!(attribute_modifier(value), expected, "value {value}");
        }
    }

    #[test]
    fn recompute_modifiers_updates_every_entry() {
        let mut block = AttributeBlock::default();
        block.strength.value = 18;
        block.dexterity.value = 7;
        block.recompute_modifiers();
        assert_eq!(block.strength.modifier, 4);
        assert_eq!(block.dexterity.modifier, -2);
        assert_eq!(block.wisdom.modifier, 0);
    }

    #[test]
    fn name_parse_accepts_short_and_long_forms() {
        assert_eq!("strength".parse(), Ok(AttributeName::Strength));
        assert_eq!("DEX".parse(), Ok(AttributeName::Dexterity));
        assert_eq!("Charisma".parse(), Ok(AttributeName::Charisma));
        assert!("luck".parse::<AttributeName>().is_err());
    }

    #[test]
    fn block_serializes_with_mod_key() {
        let block = AttributeBlock::default();
        let json = serde_json::to_value(&block).expect("serialize");
        assert_eq!(json["strength"]["value"], 10);
        assert_eq!(json["strength"]["mod"], 0);
    }
}
