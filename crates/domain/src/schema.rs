//! Field schema layer
//!
//! Static descriptors for every entity's field layout, consumed by the host
//! for record instantiation and serialization, plus the constraint helpers
//! that per-entity validation is built from.
//!
//! # Design Philosophy
//!
//! - **Typed records, explicit validation**: entities are plain structs with
//!   hand-written `validate` implementations. The descriptors here are a
//!   read-only view of the same constraints for the host's benefit; nothing
//!   reflects over them at runtime.
//! - **No partial records**: `EntityModel::from_value` either returns a fully
//!   valid entity or a `SchemaValidationError`; construction is pure.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::SchemaValidationError;

// =============================================================================
// Entity model contract
// =============================================================================

/// Contract implemented by every entity record type.
pub trait EntityModel: Serialize + DeserializeOwned {
    /// Type tag the host registry keys on (e.g. "character", "weapon").
    const KIND: &'static str;

    /// The entity's field schema descriptor.
    fn schema() -> EntitySchema;

    /// Check every declared constraint against the current field values.
    fn validate(&self) -> Result<(), SchemaValidationError>;

    /// Construct a validated entity from untrusted input.
    ///
    /// Decode failures (wrong type, unknown choice, malformed nesting) and
    /// constraint violations both abort construction; no partial entity is
    /// ever returned.
    fn from_value(raw: Value) -> Result<Self, SchemaValidationError> {
        let entity: Self = serde_json::from_value(raw)
            .map_err(|err| SchemaValidationError::malformed(Self::KIND, err))?;
        entity.validate()?;
        Ok(entity)
    }
}

// =============================================================================
// Schema descriptors
// =============================================================================

/// Field schema for one entity type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntitySchema {
    /// Entity type tag (matches `EntityModel::KIND`).
    pub kind: &'static str,
    /// Declared fields, in display order.
    pub fields: Vec<SchemaField>,
}

impl EntitySchema {
    pub fn new(kind: &'static str, fields: Vec<SchemaField>) -> Self {
        Self { kind, fields }
    }

    /// Look up a declared field by name.
    pub fn field(&self, name: &str) -> Option<&SchemaField> {
        self.fields.iter().find(|field| field.name == name)
    }
}

/// Declaration of a single field: semantic type, default, constraints.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaField {
    pub name: &'static str,
    #[serde(flatten)]
    pub kind: FieldKind,
    /// Whether the field must be present in a complete record.
    pub required: bool,
    /// Whether `null` is an admissible value.
    pub nullable: bool,
    /// Initial value used when the host instantiates a blank record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

/// Semantic field type plus its type-specific constraints.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", tag = "type")]
pub enum FieldKind {
    /// Whole number, optionally bounded on either side.
    Integer {
        #[serde(skip_serializing_if = "Option::is_none")]
        min: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        max: Option<i64>,
    },
    /// Fractional number, optionally bounded below.
    Number {
        #[serde(skip_serializing_if = "Option::is_none")]
        min: Option<f64>,
    },
    Boolean,
    /// Free text (biography, description, labels).
    Text,
    /// One of a fixed set of string choices.
    Select { choices: &'static [&'static str] },
    /// Homogeneous list of an element kind.
    List { element: Box<FieldKind> },
    /// Nested record with its own field list.
    Object { fields: Vec<SchemaField> },
    /// Uuid-backed entity reference.
    Id,
    /// UTC timestamp; nullable wherever it appears.
    Timestamp,
}

impl SchemaField {
    fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
            nullable: false,
            default: None,
        }
    }

    pub fn integer(name: &'static str) -> Self {
        Self::new(name, FieldKind::Integer { min: None, max: None })
    }

    pub fn number(name: &'static str) -> Self {
        Self::new(name, FieldKind::Number { min: None })
    }

    pub fn boolean(name: &'static str, default: bool) -> Self {
        Self::new(name, FieldKind::Boolean).default(default)
    }

    pub fn text(name: &'static str) -> Self {
        let mut field = Self::new(name, FieldKind::Text);
        field.required = false;
        field
    }

    pub fn select(name: &'static str, choices: &'static [&'static str]) -> Self {
        Self::new(name, FieldKind::Select { choices })
    }

    pub fn list(name: &'static str, element: FieldKind) -> Self {
        let mut field = Self::new(
            name,
            FieldKind::List {
                element: Box::new(element),
            },
        );
        field.default = Some(Value::Array(Vec::new()));
        field
    }

    pub fn object(name: &'static str, fields: Vec<SchemaField>) -> Self {
        Self::new(name, FieldKind::Object { fields })
    }

    pub fn id(name: &'static str) -> Self {
        Self::new(name, FieldKind::Id)
    }

    pub fn timestamp(name: &'static str) -> Self {
        let mut field = Self::new(name, FieldKind::Timestamp);
        field.nullable = true;
        field.default = Some(Value::Null);
        field
    }

    /// Set both integer bounds.
    pub fn range(mut self, min: i64, max: i64) -> Self {
        self.kind = match self.kind {
            FieldKind::Integer { .. } => FieldKind::Integer {
                min: Some(min),
                max: Some(max),
            },
            other => other,
        };
        self
    }

    /// Set the lower bound only.
    pub fn min(mut self, min: i64) -> Self {
        self.kind = match self.kind {
            FieldKind::Integer { max, .. } => FieldKind::Integer {
                min: Some(min),
                max,
            },
            FieldKind::Number { .. } => FieldKind::Number {
                min: Some(min as f64),
            },
            other => other,
        };
        self
    }

    /// Set the initial value for blank records.
    pub fn default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Mark the field optional.
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Mark the field nullable.
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }
}

// =============================================================================
// Constraint helpers
// =============================================================================

/// Check that an integer lies within `min..=max`.
pub fn check_range(
    path: &str,
    value: i32,
    min: i32,
    max: i32,
) -> Result<(), SchemaValidationError> {
    if value < min || value > max {
        return Err(SchemaValidationError::out_of_range(
            path,
            i64::from(value),
            i64::from(min),
            i64::from(max),
        ));
    }
    Ok(())
}

/// Check that an integer is at least `min`.
pub fn check_min(path: &str, value: i32, min: i32) -> Result<(), SchemaValidationError> {
    if value < min {
        return Err(SchemaValidationError::below_min(
            path,
            f64::from(value),
            f64::from(min),
        ));
    }
    Ok(())
}

/// Check that a fractional number is at least `min`.
pub fn check_min_f64(path: &str, value: f64, min: f64) -> Result<(), SchemaValidationError> {
    if value < min {
        return Err(SchemaValidationError::below_min(path, value, min));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_range_accepts_bounds() {
        assert!(check_range("level", 1, 1, 100).is_ok());
        assert!(check_range("level", 100, 1, 100).is_ok());
    }

    #[test]
    fn check_range_rejects_either_side() {
        assert_eq!(
            check_range("level", 0, 1, 100),
            Err(SchemaValidationError::out_of_range("level", 0, 1, 100))
        );
        assert!(check_range("level", 101, 1, 100).is_err());
    }

    #[test]
    fn check_min_f64_rejects_negative_weight() {
        let err = check_min_f64("weight", -0.5, 0.0).unwrap_err();
        assert_eq!(err.path(), Some("weight"));
    }

    #[test]
    fn builder_sets_bounds_and_default() {
        let field = SchemaField::integer("level").range(1, 100).default(1);
        assert!(field.required);
        assert_eq!(
            field.kind,
            FieldKind::Integer {
                min: Some(1),
                max: Some(100)
            }
        );
        assert_eq!(field.default, Some(Value::from(1)));
    }

    #[test]
    fn schema_field_lookup() {
        let schema = EntitySchema::new(
            "weapon",
            vec![SchemaField::integer("quantity").min(0).default(1)],
        );
        assert!(schema.field("quantity").is_some());
        assert!(schema.field("missing").is_none());
    }
}
