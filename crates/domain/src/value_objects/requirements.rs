//! Wield/wear requirements shared by item entities

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::SchemaValidationError;
use crate::schema::{check_min, SchemaField};
use crate::value_objects::AttributeName;

/// Minimum level and attribute scores needed to use an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Requirements {
    /// Minimum actor level, at least 1.
    #[serde(default = "default_level")]
    pub level: i32,
    /// Minimum attribute scores; missing attributes impose no requirement.
    #[serde(default)]
    pub attributes: HashMap<AttributeName, i32>,
}

fn default_level() -> i32 {
    1
}

impl Default for Requirements {
    fn default() -> Self {
        Self {
            level: 1,
            attributes: HashMap::new(),
        }
    }
}

impl Requirements {
    pub(crate) fn validate(&self, path: &str) -> Result<(), SchemaValidationError> {
        check_min(&format!("{path}.level"), self.level, 1)
    }
}

/// Schema descriptor for a requirements block.
pub(crate) fn requirements_schema() -> SchemaField {
    SchemaField::object(
        "requirements",
        vec![
            SchemaField::integer("level").min(1).default(1),
            SchemaField::object("attributes", Vec::new()).optional(),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_requires_level_one() {
        let requirements = Requirements::default();
        assert_eq!(requirements.level, 1);
        assert!(requirements.attributes.is_empty());
        assert!(requirements.validate("requirements").is_ok());
    }

    #[test]
    fn level_zero_is_rejected() {
        let requirements = Requirements {
            level: 0,
            ..Default::default()
        };
        let err = requirements.validate("requirements").unwrap_err();
        assert_eq!(err.path(), Some("requirements.level"));
    }

    #[test]
    fn attribute_keys_deserialize_from_names() {
        let requirements: Requirements =
            serde_json::from_value(serde_json::json!({
                "level": 3,
                "attributes": { "strength": 13, "dexterity": 11 }
            }))
            .expect("parse");
        assert_eq!(requirements.attributes[&AttributeName::Strength], 13);
    }
}
